//! Cell formatters for crawl results.
//!
//! Every formatter renders a missing value as `-`, never `0` or `NaN`.

use super::table::Tone;

const MISSING: &str = "-";
const MAX_FRACTION_DIGITS: usize = 3;

/// Thousands-separated number with up to three fraction digits.
#[must_use]
pub fn format_number(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map_or_else(|| MISSING.to_string(), group_thousands)
}

/// Two-decimal percentage, e.g. `"1.50%"`.
#[must_use]
pub fn format_percent(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}%"))
}

/// Fixed-point number with `decimals` places.
#[must_use]
pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    value
        .filter(|v| v.is_finite())
        .map_or_else(|| MISSING.to_string(), |v| format!("{v:.decimals$}"))
}

/// Rating with one decimal.
#[must_use]
pub fn format_rating(value: Option<f64>) -> String {
    format_fixed(value, 1)
}

/// Price in won, e.g. `"12,900원"`.
#[must_use]
pub fn format_won(value: Option<i64>) -> String {
    value.map_or_else(
        || MISSING.to_string(),
        |v| format!("{}원", group_thousands(v as f64)),
    )
}

/// Direction of a signed value.
#[must_use]
pub fn tone_of(value: Option<f64>) -> Tone {
    match value {
        Some(v) if v > 0.0 => Tone::Up,
        Some(v) if v < 0.0 => Tone::Down,
        _ => Tone::Neutral,
    }
}

/// Signed change as glyph plus magnitude: `"▲ 1,500"`, `"▼ 300"`, `"0"`.
#[must_use]
pub fn format_delta(value: Option<f64>) -> (String, Tone) {
    let tone = tone_of(value);
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return (MISSING.to_string(), Tone::Neutral);
    };
    let magnitude = group_thousands(v.abs());
    let text = match tone {
        Tone::Up => format!("▲ {magnitude}"),
        Tone::Down => format!("▼ {magnitude}"),
        Tone::Neutral => magnitude,
    };
    (text, tone)
}

/// `YYYYMMDD` as `YYYY.MM.DD`; anything else is `-`.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return MISSING.to_string();
    }
    format!("{}.{}.{}", &raw[..4], &raw[4..6], &raw[6..])
}

/// Supply and exclusive area: `"165.3㎡ / 134.9㎡ (165A)"`.
#[must_use]
pub fn format_area(supply: Option<f64>, exclusive: Option<f64>, name: Option<&str>) -> String {
    let area = |v: Option<f64>| {
        v.filter(|v| v.is_finite())
            .map_or_else(|| MISSING.to_string(), |v| format!("{v:.1}㎡"))
    };
    let base = format!("{} / {}", area(supply), area(exclusive));
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => format!("{base} ({n})"),
        None => base,
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.prec$}", value.abs(), prec = MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

//! Site-specific result tables.

use serde::Serialize;

use super::format::{
    format_area, format_date, format_delta, format_fixed, format_number, format_percent,
    format_rating, format_won, tone_of,
};
use crate::domain::crawling::{CrawlResults, FinanceItem, MarketplaceItem, RealEstateItem};

/// Shown instead of a table when a crawl returned nothing.
pub const EMPTY_RESULTS_MESSAGE: &str = "No crawl results.";

/// Color hint for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Rising value.
    Up,
    /// Falling value.
    Down,
    /// No direction.
    #[default]
    Neutral,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Color hint.
    pub tone: Tone,
}

impl Cell {
    /// Neutral cell.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Neutral,
        }
    }

    /// Cell with a color hint.
    #[must_use]
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedResults {
    /// Nothing to show.
    Placeholder {
        /// Message to display.
        message: String,
    },
    /// A table of rows.
    Table {
        /// Column headers.
        headers: Vec<&'static str>,
        /// Rows, each as wide as `headers`.
        rows: Vec<Vec<Cell>>,
    },
}

impl RenderedResults {
    /// Whether this is the empty placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

static FINANCE_HEADERS: [&str; 9] = [
    "Name",
    "Price",
    "Change",
    "Change %",
    "Volume",
    "Value",
    "Mkt Cap (억)",
    "PER",
    "ROE",
];
static MARKETPLACE_HEADERS: [&str; 5] = ["Product", "Price", "Rating", "Reviews", "Link"];
static REAL_ESTATE_HEADERS: [&str; 9] = [
    "Listing",
    "Wing",
    "Trade",
    "Price",
    "Area (supply / exclusive)",
    "Floor",
    "Direction",
    "Confirmed",
    "Features",
];

/// Lay out `results` for display.
///
/// The layout follows the set's own site tag, so rows can never be shown
/// under another site's columns.
#[must_use]
pub fn render_results(results: &CrawlResults) -> RenderedResults {
    if results.is_empty() {
        return RenderedResults::Placeholder {
            message: EMPTY_RESULTS_MESSAGE.to_string(),
        };
    }
    let (headers, rows): (&[&'static str], Vec<Vec<Cell>>) = match results {
        CrawlResults::Finance(items) => (
            FINANCE_HEADERS.as_slice(),
            items.iter().map(finance_row).collect(),
        ),
        CrawlResults::Marketplace(items) => (
            MARKETPLACE_HEADERS.as_slice(),
            items.iter().map(marketplace_row).collect(),
        ),
        CrawlResults::RealEstate(items) => (
            REAL_ESTATE_HEADERS.as_slice(),
            items.iter().map(real_estate_row).collect(),
        ),
    };
    RenderedResults::Table {
        headers: headers.to_vec(),
        rows,
    }
}

fn finance_row(item: &FinanceItem) -> Vec<Cell> {
    let (delta, delta_tone) = format_delta(item.price_delta);
    vec![
        Cell::plain(item.name.as_str()),
        Cell::plain(format_number(item.current_price)),
        Cell::toned(delta, delta_tone),
        Cell::toned(format_percent(item.change_rate), tone_of(item.change_rate)),
        Cell::plain(format_number(item.volume)),
        Cell::plain(format_number(item.trading_value)),
        Cell::plain(format_number(item.market_cap)),
        Cell::plain(format_fixed(item.per, 2)),
        Cell::plain(format_fixed(item.roe, 2)),
    ]
}

fn marketplace_row(item: &MarketplaceItem) -> Vec<Cell> {
    vec![
        Cell::plain(item.name.as_str()),
        Cell::plain(format_won(item.price)),
        Cell::plain(format_rating(item.rating)),
        Cell::plain(format_number(item.review_count.map(|n| n as f64))),
        Cell::plain(or_dash(&item.link)),
    ]
}

fn real_estate_row(item: &RealEstateItem) -> Vec<Cell> {
    vec![
        Cell::plain(or_dash(&item.listing_name)),
        Cell::plain(item.building.as_deref().unwrap_or("-")),
        Cell::plain(or_dash(&item.trade_type)),
        Cell::plain(or_dash(&item.price)),
        Cell::plain(format_area(
            item.supply_area,
            item.exclusive_area,
            item.area_name.as_deref(),
        )),
        Cell::plain(or_dash(&item.floor_info)),
        Cell::plain(or_dash(&item.direction)),
        Cell::plain(format_date(&item.confirmed_on)),
        Cell::plain(features_or_tags(item)),
    ]
}

/// Feature text, or the tags as `#tag` words when the listing has none.
fn features_or_tags(item: &RealEstateItem) -> String {
    if let Some(features) = item.features.as_deref().filter(|f| !f.trim().is_empty()) {
        return features.to_string();
    }
    let tags = item.tag_list();
    if tags.is_empty() {
        return "-".to_string();
    }
    tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" ")
}

fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crawling::CrawlSite;

    fn finance(name: &str, delta: Option<f64>, rate: Option<f64>) -> FinanceItem {
        FinanceItem {
            name: name.to_string(),
            current_price: Some(71_200.0),
            price_delta: delta,
            change_rate: rate,
            ..FinanceItem::default()
        }
    }

    #[test]
    fn empty_set_renders_placeholder() {
        for site in CrawlSite::ALL {
            let rendered = render_results(&CrawlResults::empty(site));
            assert!(rendered.is_placeholder());
        }
    }

    #[test]
    fn change_rate_tone_follows_its_own_sign() {
        let results = CrawlResults::Finance(vec![
            finance("A", None, Some(1.2)),
            finance("B", Some(0.0), Some(-0.4)),
            finance("C", Some(-100.0), Some(0.0)),
        ]);
        let RenderedResults::Table { rows, .. } = render_results(&results) else {
            panic!("expected a table");
        };
        assert_eq!(rows[0][3].tone, Tone::Up);
        assert_eq!(rows[1][2].tone, Tone::Neutral);
        assert_eq!(rows[1][3].tone, Tone::Down);
        assert_eq!(rows[2][2].tone, Tone::Down);
        assert_eq!(rows[2][3].tone, Tone::Neutral);
    }

    #[test]
    fn finance_rows_carry_tones() {
        let results = CrawlResults::Finance(vec![
            finance("삼성전자", Some(1500.0), Some(2.15)),
            finance("SK하이닉스", Some(-300.0), Some(-0.5)),
            finance("LG", None, None),
        ]);
        let RenderedResults::Table { headers, rows } = render_results(&results) else {
            panic!("expected a table");
        };
        assert_eq!(headers.len(), 9);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == headers.len()));

        assert_eq!(rows[0][1].text, "71,200");
        assert_eq!(rows[0][2], Cell::toned("▲ 1,500", Tone::Up));
        assert_eq!(rows[0][3], Cell::toned("2.15%", Tone::Up));
        assert_eq!(rows[1][2], Cell::toned("▼ 300", Tone::Down));
        assert_eq!(rows[1][3].tone, Tone::Down);
        assert_eq!(rows[2][2], Cell::plain("-"));
        assert_eq!(rows[2][4].text, "-");
        assert_eq!(rows[2][7].text, "-");
    }

    #[test]
    fn marketplace_row_formats_price_and_rating() {
        let results = CrawlResults::Marketplace(vec![MarketplaceItem {
            name: "무선 이어폰".to_string(),
            price: Some(129_000),
            rating: None,
            review_count: Some(2_345),
            link: "https://example.com/p/1".to_string(),
        }]);
        let RenderedResults::Table { rows, .. } = render_results(&results) else {
            panic!("expected a table");
        };
        let texts: Vec<_> = rows[0].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            ["무선 이어폰", "129,000원", "-", "2,345", "https://example.com/p/1"]
        );
    }

    #[test]
    fn real_estate_row_formats_area_and_date() {
        let results = CrawlResults::RealEstate(vec![RealEstateItem {
            listing_id: "2412345".to_string(),
            listing_name: "래미안".to_string(),
            trade_type: "전세".to_string(),
            price: "12억".to_string(),
            area_name: Some("112A".to_string()),
            supply_area: Some(112.4),
            exclusive_area: Some(84.97),
            confirmed_on: "20240301".to_string(),
            ..RealEstateItem::default()
        }]);
        let RenderedResults::Table { rows, .. } = render_results(&results) else {
            panic!("expected a table");
        };
        let row = &rows[0];
        assert_eq!(row[1].text, "-");
        assert_eq!(row[2].text, "전세");
        assert_eq!(row[4].text, "112.4㎡ / 85.0㎡ (112A)");
        assert_eq!(row[7].text, "2024.03.01");
        assert_eq!(row[8].text, "-");
    }

    #[test]
    fn real_estate_row_keeps_unlisted_trade_labels_and_falls_back_to_tags() {
        let results = CrawlResults::RealEstate(vec![
            RealEstateItem {
                listing_name: "오피스텔".to_string(),
                trade_type: "단기임대".to_string(),
                tags: Some("역세권, 풀옵션,".to_string()),
                ..RealEstateItem::default()
            },
            RealEstateItem {
                listing_name: "빌라".to_string(),
                features: Some("남향 채광 좋음".to_string()),
                tags: Some("신축".to_string()),
                ..RealEstateItem::default()
            },
        ]);
        let RenderedResults::Table { rows, .. } = render_results(&results) else {
            panic!("expected a table");
        };
        assert_eq!(rows[0][2].text, "단기임대");
        assert_eq!(rows[0][8].text, "#역세권 #풀옵션");
        assert_eq!(rows[1][2].text, "-");
        assert_eq!(rows[1][8].text, "남향 채광 좋음");
    }
}

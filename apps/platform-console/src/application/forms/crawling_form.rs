//! Crawling request form.
//!
//! Holds the in-progress parameters for one active site. Setters clamp as
//! values are edited, so the form never holds an out-of-range number; the
//! only checks left for submit are the ones clamping cannot fix (an empty
//! keyword, a non-numeric complex number).

use crate::domain::crawling::{
    CrawlRequest, CrawlSite, FINANCE_PAGES_MAX, FINANCE_PAGES_MIN, MARKETPLACE_ITEMS_DEFAULT,
    MARKETPLACE_ITEMS_MAX, MARKETPLACE_ITEMS_MIN, REAL_ESTATE_PAGE_MIN, TradeType,
};

/// Validation failure shown to the user instead of submitting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A crawl is already in flight.
    #[error("a crawl is already running")]
    Busy,

    /// Marketplace keyword is blank.
    #[error("enter a search keyword")]
    EmptyKeyword,

    /// Real-estate complex number is not a positive integer.
    #[error("complex number must be a positive integer (got '{input}')")]
    InvalidComplexNo {
        /// What the user typed.
        input: String,
    },

    /// Trade type is not one a listing crawl can request.
    #[error("unknown trade type '{input}' (expected sale/A1, lease/B1 or monthly/B2)")]
    InvalidTradeType {
        /// What the user typed.
        input: String,
    },

    /// The setter does not apply to the active site.
    #[error("{field} does not apply to {site}")]
    WrongSite {
        /// Field name.
        field: &'static str,
        /// Active site.
        site: CrawlSite,
    },
}

/// Per-site field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFields {
    /// Finance listing.
    Finance {
        /// Pages to crawl.
        pages: u32,
    },
    /// Marketplace search.
    Marketplace {
        /// Raw keyword as typed.
        keyword: String,
        /// Result cap.
        max_items: u32,
    },
    /// Real-estate listings.
    RealEstate {
        /// Raw complex number as typed.
        complex_no: String,
        /// Transaction kind.
        trade_type: TradeType,
        /// Result page.
        page: u32,
    },
}

impl FormFields {
    /// Defaults for `site`.
    #[must_use]
    pub const fn defaults(site: CrawlSite) -> Self {
        match site {
            CrawlSite::Finance => Self::Finance {
                pages: FINANCE_PAGES_MIN,
            },
            CrawlSite::Marketplace => Self::Marketplace {
                keyword: String::new(),
                max_items: MARKETPLACE_ITEMS_DEFAULT,
            },
            CrawlSite::RealEstate => Self::RealEstate {
                complex_no: String::new(),
                trade_type: TradeType::Sale,
                page: REAL_ESTATE_PAGE_MIN,
            },
        }
    }

    /// Site these fields belong to.
    #[must_use]
    pub const fn site(&self) -> CrawlSite {
        match self {
            Self::Finance { .. } => CrawlSite::Finance,
            Self::Marketplace { .. } => CrawlSite::Marketplace,
            Self::RealEstate { .. } => CrawlSite::RealEstate,
        }
    }
}

/// Crawling request form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlingForm {
    fields: FormFields,
}

impl Default for CrawlingForm {
    fn default() -> Self {
        Self::new(CrawlSite::default())
    }
}

impl CrawlingForm {
    /// A form for `site` with default values.
    #[must_use]
    pub const fn new(site: CrawlSite) -> Self {
        Self {
            fields: FormFields::defaults(site),
        }
    }

    /// Active site.
    #[must_use]
    pub const fn site(&self) -> CrawlSite {
        self.fields.site()
    }

    /// Current field values.
    #[must_use]
    pub const fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Switch site. The new site's fields always start from defaults.
    pub fn select_site(&mut self, site: CrawlSite) {
        self.fields = FormFields::defaults(site);
    }

    // =========================================================================
    // Finance
    // =========================================================================

    /// Set the finance page count, clamped to 1..=10.
    pub fn set_pages(&mut self, value: i64) -> Result<u32, FormError> {
        match &mut self.fields {
            FormFields::Finance { pages } => {
                *pages = clamp(value, FINANCE_PAGES_MIN, FINANCE_PAGES_MAX);
                Ok(*pages)
            }
            other => Err(wrong_site("pages", other)),
        }
    }

    /// Set the finance page count from typed text; junk becomes 1.
    pub fn set_pages_input(&mut self, input: &str) -> Result<u32, FormError> {
        self.set_pages(parse_int_or_one(input))
    }

    // =========================================================================
    // Marketplace
    // =========================================================================

    /// Set the search keyword as typed.
    pub fn set_keyword(&mut self, value: &str) -> Result<(), FormError> {
        match &mut self.fields {
            FormFields::Marketplace { keyword, .. } => {
                value.clone_into(keyword);
                Ok(())
            }
            other => Err(wrong_site("keyword", other)),
        }
    }

    /// Set the result cap, clamped to 1..=50.
    pub fn set_max_items(&mut self, value: i64) -> Result<u32, FormError> {
        match &mut self.fields {
            FormFields::Marketplace { max_items, .. } => {
                *max_items = clamp(value, MARKETPLACE_ITEMS_MIN, MARKETPLACE_ITEMS_MAX);
                Ok(*max_items)
            }
            other => Err(wrong_site("max_items", other)),
        }
    }

    /// Set the result cap from typed text; junk becomes 1.
    pub fn set_max_items_input(&mut self, input: &str) -> Result<u32, FormError> {
        self.set_max_items(parse_int_or_one(input))
    }

    // =========================================================================
    // Real estate
    // =========================================================================

    /// Set the complex number as typed; validated on submit.
    pub fn set_complex_no(&mut self, value: &str) -> Result<(), FormError> {
        match &mut self.fields {
            FormFields::RealEstate { complex_no, .. } => {
                value.clone_into(complex_no);
                Ok(())
            }
            other => Err(wrong_site("complex_no", other)),
        }
    }

    /// Set the transaction kind.
    pub fn set_trade_type(&mut self, value: TradeType) -> Result<(), FormError> {
        match &mut self.fields {
            FormFields::RealEstate { trade_type, .. } => {
                *trade_type = value;
                Ok(())
            }
            other => Err(wrong_site("trade_type", other)),
        }
    }

    /// Set the transaction kind from typed text (code, English or Korean
    /// label). Anything outside the requestable set is rejected and the
    /// form keeps its previous value.
    pub fn set_trade_type_input(&mut self, input: &str) -> Result<TradeType, FormError> {
        let value = input
            .parse::<TradeType>()
            .map_err(|_| FormError::InvalidTradeType {
                input: input.trim().to_string(),
            })?;
        self.set_trade_type(value)?;
        Ok(value)
    }

    /// Set the result page, floored at 1.
    pub fn set_page(&mut self, value: i64) -> Result<u32, FormError> {
        match &mut self.fields {
            FormFields::RealEstate { page, .. } => {
                *page = clamp(value, REAL_ESTATE_PAGE_MIN, u32::MAX);
                Ok(*page)
            }
            other => Err(wrong_site("page", other)),
        }
    }

    /// Set the result page from typed text; junk becomes 1.
    pub fn set_page_input(&mut self, input: &str) -> Result<u32, FormError> {
        self.set_page(parse_int_or_one(input))
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Build the request the current fields describe.
    pub fn validate(&self) -> Result<CrawlRequest, FormError> {
        match &self.fields {
            FormFields::Finance { pages } => Ok(CrawlRequest::Finance { pages: *pages }),
            FormFields::Marketplace { keyword, max_items } => {
                let keyword = keyword.trim();
                if keyword.is_empty() {
                    return Err(FormError::EmptyKeyword);
                }
                Ok(CrawlRequest::Marketplace {
                    keyword: keyword.to_string(),
                    max_items: *max_items,
                })
            }
            FormFields::RealEstate {
                complex_no,
                trade_type,
                page,
            } => {
                let parsed = complex_no
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| FormError::InvalidComplexNo {
                        input: complex_no.clone(),
                    })?;
                Ok(CrawlRequest::RealEstate {
                    complex_no: parsed,
                    trade_type: *trade_type,
                    page: *page,
                })
            }
        }
    }

    /// Validate and hand the request to `handler`.
    ///
    /// The handler runs at most once, and never while `is_loading` is set or
    /// when validation fails.
    pub fn submit<R>(
        &self,
        is_loading: bool,
        handler: impl FnOnce(CrawlRequest) -> R,
    ) -> Result<R, FormError> {
        if is_loading {
            return Err(FormError::Busy);
        }
        let request = self.validate()?;
        tracing::debug!(site = %request.site(), "crawl form submitted");
        Ok(handler(request))
    }
}

fn wrong_site(field: &'static str, fields: &FormFields) -> FormError {
    FormError::WrongSite {
        field,
        site: fields.site(),
    }
}

fn clamp(value: i64, min: u32, max: u32) -> u32 {
    value.clamp(i64::from(min), i64::from(max)) as u32
}

/// Leading-integer parse of typed text; zero or no digits give 1.
fn parse_int_or_one(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 1;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    if magnitude == 0 {
        return 1;
    }
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use test_case::test_case;

    use super::*;

    #[test_case("3", 3 ; "plain")]
    #[test_case("15", 10 ; "above max")]
    #[test_case("0", 1 ; "zero")]
    #[test_case("-4", 1 ; "negative")]
    #[test_case("abc", 1 ; "junk")]
    #[test_case("7pages", 7 ; "leading digits")]
    #[test_case("", 1 ; "empty")]
    fn finance_pages_clamp(input: &str, expected: u32) {
        let mut form = CrawlingForm::new(CrawlSite::Finance);
        assert_eq!(form.set_pages_input(input), Ok(expected));
        assert_eq!(form.validate(), Ok(CrawlRequest::Finance { pages: expected }));
    }

    #[test_case(0, 1)]
    #[test_case(25, 25)]
    #[test_case(51, 50)]
    #[test_case(-1, 1)]
    fn marketplace_max_items_clamp(value: i64, expected: u32) {
        let mut form = CrawlingForm::new(CrawlSite::Marketplace);
        assert_eq!(form.set_max_items(value), Ok(expected));
    }

    #[test]
    fn real_estate_page_has_floor_only() {
        let mut form = CrawlingForm::new(CrawlSite::RealEstate);
        assert_eq!(form.set_page(0), Ok(1));
        assert_eq!(form.set_page(40), Ok(40));
        assert_eq!(form.set_page_input("x"), Ok(1));
    }

    #[test]
    fn switching_site_resets_fields() {
        let mut form = CrawlingForm::new(CrawlSite::Marketplace);
        form.set_keyword("laptop").unwrap();
        form.set_max_items(30).unwrap();

        form.select_site(CrawlSite::RealEstate);
        form.select_site(CrawlSite::Marketplace);
        assert_eq!(
            form.fields(),
            &FormFields::Marketplace {
                keyword: String::new(),
                max_items: MARKETPLACE_ITEMS_DEFAULT,
            }
        );
    }

    #[test]
    fn setter_for_other_site_is_rejected() {
        let mut form = CrawlingForm::new(CrawlSite::Finance);
        assert_eq!(
            form.set_keyword("x"),
            Err(FormError::WrongSite {
                field: "keyword",
                site: CrawlSite::Finance,
            })
        );
    }

    #[test]
    fn blank_keyword_never_reaches_handler() {
        let mut form = CrawlingForm::new(CrawlSite::Marketplace);
        form.set_keyword("   ").unwrap();
        let calls = Cell::new(0);
        let result = form.submit(false, |_| calls.set(calls.get() + 1));
        assert_eq!(result, Err(FormError::EmptyKeyword));
        assert_eq!(calls.get(), 0);
    }

    #[test_case("" ; "empty")]
    #[test_case("12a" ; "alphanumeric")]
    #[test_case("0" ; "zero")]
    #[test_case("-5" ; "negative")]
    fn bad_complex_number_never_reaches_handler(input: &str) {
        let mut form = CrawlingForm::new(CrawlSite::RealEstate);
        form.set_complex_no(input).unwrap();
        let calls = Cell::new(0);
        let result = form.submit(false, |_| calls.set(calls.get() + 1));
        assert!(matches!(result, Err(FormError::InvalidComplexNo { .. })));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn loading_form_is_inert() {
        let form = CrawlingForm::new(CrawlSite::Finance);
        let calls = Cell::new(0);
        assert_eq!(
            form.submit(true, |_| calls.set(calls.get() + 1)),
            Err(FormError::Busy)
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn valid_submit_calls_handler_once_with_trimmed_values() {
        let mut form = CrawlingForm::new(CrawlSite::Marketplace);
        form.set_keyword("  무선 이어폰 ").unwrap();
        form.set_max_items(20).unwrap();

        let mut seen = Vec::new();
        form.submit(false, |req| seen.push(req)).unwrap();
        assert_eq!(
            seen,
            vec![CrawlRequest::Marketplace {
                keyword: "무선 이어폰".to_string(),
                max_items: 20,
            }]
        );
    }

    #[test_case("B1", TradeType::Lease ; "code")]
    #[test_case("monthly", TradeType::Monthly ; "english label")]
    #[test_case("매매", TradeType::Sale ; "korean label")]
    fn trade_type_input_accepts_requestable_kinds(input: &str, expected: TradeType) {
        let mut form = CrawlingForm::new(CrawlSite::RealEstate);
        assert_eq!(form.set_trade_type_input(input), Ok(expected));
    }

    #[test_case("C9" ; "unknown code")]
    #[test_case("단기임대" ; "unlisted label")]
    #[test_case("" ; "empty")]
    fn trade_type_outside_requestable_set_is_rejected(input: &str) {
        let mut form = CrawlingForm::new(CrawlSite::RealEstate);
        form.set_trade_type(TradeType::Lease).unwrap();
        assert!(matches!(
            form.set_trade_type_input(input),
            Err(FormError::InvalidTradeType { .. })
        ));
        assert!(matches!(
            form.fields(),
            FormFields::RealEstate {
                trade_type: TradeType::Lease,
                ..
            }
        ));
    }

    #[test]
    fn real_estate_submit_parses_complex_number() {
        let mut form = CrawlingForm::new(CrawlSite::RealEstate);
        form.set_complex_no(" 102737 ").unwrap();
        form.set_trade_type(TradeType::Monthly).unwrap();
        let request = form.submit(false, |req| req).unwrap();
        assert_eq!(
            request,
            CrawlRequest::RealEstate {
                complex_no: 102_737,
                trade_type: TradeType::Monthly,
                page: 1,
            }
        );
    }
}

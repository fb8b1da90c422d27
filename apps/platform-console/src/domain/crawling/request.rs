//! Validated crawl requests.
//!
//! A `CrawlRequest` is only built by the crawling form after validation, so
//! every instance already satisfies the per-site parameter bounds.

use serde::Serialize;

use super::site::{CrawlSite, TradeType};

/// Page count bounds for the finance listing.
pub const FINANCE_PAGES_MIN: u32 = 1;
/// Upper page bound for the finance listing.
pub const FINANCE_PAGES_MAX: u32 = 10;
/// Lower bound for marketplace result count.
pub const MARKETPLACE_ITEMS_MIN: u32 = 1;
/// Upper bound for marketplace result count.
pub const MARKETPLACE_ITEMS_MAX: u32 = 50;
/// Default marketplace result count.
pub const MARKETPLACE_ITEMS_DEFAULT: u32 = 10;
/// First real-estate result page.
pub const REAL_ESTATE_PAGE_MIN: u32 = 1;

/// Site tag plus parameter bag, ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "site")]
pub enum CrawlRequest {
    /// Naver Finance market-cap pages.
    #[serde(rename = "naver_finance")]
    Finance {
        /// Number of listing pages, 1..=10.
        pages: u32,
    },
    /// Coupang keyword search.
    #[serde(rename = "coupang")]
    Marketplace {
        /// Trimmed, non-empty keyword.
        keyword: String,
        /// Item cap, 1..=50.
        max_items: u32,
    },
    /// Naver Real Estate listings for one complex.
    #[serde(rename = "naver_realestate")]
    RealEstate {
        /// Positive complex number.
        complex_no: u64,
        /// Requested transaction kind.
        trade_type: TradeType,
        /// Result page, >= 1.
        page: u32,
    },
}

impl CrawlRequest {
    /// Site this request targets.
    #[must_use]
    pub const fn site(&self) -> CrawlSite {
        match self {
            Self::Finance { .. } => CrawlSite::Finance,
            Self::Marketplace { .. } => CrawlSite::Marketplace,
            Self::RealEstate { .. } => CrawlSite::RealEstate,
        }
    }

    /// Query-string pairs for the crawler endpoint.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Finance { pages } => vec![("pages", pages.to_string())],
            Self::Marketplace { keyword, max_items } => vec![
                ("keyword", keyword.clone()),
                ("max_items", max_items.to_string()),
            ],
            Self::RealEstate {
                complex_no,
                trade_type,
                page,
            } => vec![
                ("complex_no", complex_no.to_string()),
                ("trade_type", trade_type.code().to_string()),
                ("page", page.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_estate_query_uses_trade_code() {
        let req = CrawlRequest::RealEstate {
            complex_no: 102_737,
            trade_type: TradeType::Lease,
            page: 2,
        };
        assert_eq!(req.site(), CrawlSite::RealEstate);
        assert_eq!(
            req.query_pairs(),
            vec![
                ("complex_no", "102737".to_string()),
                ("trade_type", "B1".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }

    #[test]
    fn serializes_with_site_tag() {
        let req = CrawlRequest::Finance { pages: 3 };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["site"], "naver_finance");
        assert_eq!(json["pages"], 3);
    }
}

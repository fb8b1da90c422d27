//! Homogeneous, site-tagged crawl result sets.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::items::{FinanceItem, MarketplaceItem, RealEstateItem};
use super::site::CrawlSite;

/// Result rows of exactly one shape, tagged by the site that produced them.
///
/// A bare array from the crawler is not self-describing; the tag travels with
/// the rows so the renderer can pick the right layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "site", content = "items")]
pub enum CrawlResults {
    /// Finance listing rows.
    #[serde(rename = "naver_finance")]
    Finance(Vec<FinanceItem>),
    /// Marketplace product rows.
    #[serde(rename = "coupang")]
    Marketplace(Vec<MarketplaceItem>),
    /// Real-estate listing rows.
    #[serde(rename = "naver_realestate")]
    RealEstate(Vec<RealEstateItem>),
}

impl CrawlResults {
    /// An empty set for `site`.
    #[must_use]
    pub const fn empty(site: CrawlSite) -> Self {
        match site {
            CrawlSite::Finance => Self::Finance(Vec::new()),
            CrawlSite::Marketplace => Self::Marketplace(Vec::new()),
            CrawlSite::RealEstate => Self::RealEstate(Vec::new()),
        }
    }

    /// Decode a crawler payload for `site`, coercing it to an array.
    ///
    /// An array decodes element-wise, a single object becomes one row and
    /// `null` becomes an empty set.
    pub fn from_payload(site: CrawlSite, payload: Value) -> Result<Self, serde_json::Error> {
        Ok(match site {
            CrawlSite::Finance => Self::Finance(coerce_rows(payload)?),
            CrawlSite::Marketplace => Self::Marketplace(coerce_rows(payload)?),
            CrawlSite::RealEstate => Self::RealEstate(coerce_rows(payload)?),
        })
    }

    /// Site tag of the rows.
    #[must_use]
    pub const fn site(&self) -> CrawlSite {
        match self {
            Self::Finance(_) => CrawlSite::Finance,
            Self::Marketplace(_) => CrawlSite::Marketplace,
            Self::RealEstate(_) => CrawlSite::RealEstate,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Finance(v) => v.len(),
            Self::Marketplace(v) => v.len(),
            Self::RealEstate(v) => v.len(),
        }
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn coerce_rows<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, serde_json::Error> {
    match payload {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => serde_json::from_value(payload),
        single => Ok(vec![serde_json::from_value(single)?]),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn array_payload_decodes_rows() {
        let payload = json!([{"제품명": "a", "가격": 1000}, {"제품명": "b", "가격": 2000}]);
        let results = CrawlResults::from_payload(CrawlSite::Marketplace, payload).unwrap();
        assert_eq!(results.site(), CrawlSite::Marketplace);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn single_object_is_coerced_to_one_row() {
        let payload = json!({"종목명": "카카오", "현재가": 41000});
        let results = CrawlResults::from_payload(CrawlSite::Finance, payload).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn null_payload_is_empty() {
        let results = CrawlResults::from_payload(CrawlSite::RealEstate, Value::Null).unwrap();
        assert!(results.is_empty());
        assert_eq!(results, CrawlResults::empty(CrawlSite::RealEstate));
    }

    #[test]
    fn scalar_payload_is_rejected() {
        assert!(CrawlResults::from_payload(CrawlSite::Finance, json!("oops")).is_err());
    }
}

//! Crawl site and trade type value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which external scraping target a request or result set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CrawlSite {
    /// Naver Finance market-cap listing.
    #[default]
    #[serde(rename = "naver_finance")]
    Finance,
    /// Coupang product search.
    #[serde(rename = "coupang")]
    Marketplace,
    /// Naver Real Estate listings for one apartment complex.
    #[serde(rename = "naver_realestate")]
    RealEstate,
}

impl CrawlSite {
    /// All sites, in menu order.
    pub const ALL: [Self; 3] = [Self::Finance, Self::Marketplace, Self::RealEstate];

    /// Stable tag used on the wire and in JSON output.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Finance => "naver_finance",
            Self::Marketplace => "coupang",
            Self::RealEstate => "naver_realestate",
        }
    }

    /// Backend path serving this site.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Finance => "/api/crawling/naver-finance",
            Self::Marketplace => "/api/crawling/coupang",
            Self::RealEstate => "/api/crawling/naver-realestate",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Finance => "Naver Finance (market cap)",
            Self::Marketplace => "Coupang (product search)",
            Self::RealEstate => "Naver Real Estate (listings)",
        }
    }
}

impl fmt::Display for CrawlSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CrawlSite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naver_finance" | "finance" => Ok(Self::Finance),
            "coupang" | "marketplace" => Ok(Self::Marketplace),
            "naver_realestate" | "real-estate" | "realestate" => Ok(Self::RealEstate),
            other => Err(format!("unknown crawl site: {other}")),
        }
    }
}

/// Real-estate transaction kind a listing crawl can ask for.
///
/// Listings carry the crawler's own label as text; this type only covers
/// what a request may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TradeType {
    /// Outright sale (매매).
    #[default]
    #[serde(rename = "매매")]
    Sale,
    /// Lump-sum deposit lease (전세).
    #[serde(rename = "전세")]
    Lease,
    /// Monthly rent (월세).
    #[serde(rename = "월세")]
    Monthly,
}

impl TradeType {
    /// Types a request may ask for.
    pub const REQUESTABLE: [Self; 3] = [Self::Sale, Self::Lease, Self::Monthly];

    /// Query code expected by the crawler (`A1`, `B1`, `B2`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sale => "A1",
            Self::Lease => "B1",
            Self::Monthly => "B2",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Lease => "lease",
            Self::Monthly => "monthly",
        }
    }

    /// Label as the crawler sends it (`매매`, `전세`, `월세`).
    #[must_use]
    pub const fn native_label(&self) -> &'static str {
        match self {
            Self::Sale => "매매",
            Self::Lease => "전세",
            Self::Monthly => "월세",
        }
    }

    const fn alias(&self) -> &'static str {
        match self {
            Self::Sale => "buy",
            Self::Lease => "jeonse",
            Self::Monthly => "rent",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TradeType {
    type Err = String;

    /// Accepts the wire code, the English label or the crawler's label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::REQUESTABLE
            .into_iter()
            .find(|t| {
                [t.code(), t.label(), t.native_label(), t.alias()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| {
                format!("unknown trade type '{wanted}' (expected sale/A1, lease/B1, monthly/B2)")
            })
    }
}

//! Crawling Domain
//!
//! Sites, validated requests and the three result record shapes returned by
//! the external crawling service.

mod items;
mod lenient;
mod request;
mod results;
mod site;

pub use items::{FinanceItem, MarketplaceItem, RealEstateItem};
pub use request::{
    CrawlRequest, FINANCE_PAGES_MAX, FINANCE_PAGES_MIN, MARKETPLACE_ITEMS_DEFAULT,
    MARKETPLACE_ITEMS_MAX, MARKETPLACE_ITEMS_MIN, REAL_ESTATE_PAGE_MIN,
};
pub use results::CrawlResults;
pub use site::{CrawlSite, TradeType};

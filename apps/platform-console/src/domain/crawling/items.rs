//! Crawler result records.
//!
//! These map directly to the crawling service's JSON, which keys every
//! field by its Korean column name.

use serde::{Deserialize, Serialize};

use super::lenient;

/// One row of the Naver Finance market-cap listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinanceItem {
    /// Stock name.
    #[serde(rename = "종목명", default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Current price.
    #[serde(rename = "현재가", default, deserialize_with = "lenient::opt_f64")]
    pub current_price: Option<f64>,
    /// Change versus the previous close.
    #[serde(rename = "전일비", default, deserialize_with = "lenient::opt_f64")]
    pub price_delta: Option<f64>,
    /// Percent change versus the previous close.
    #[serde(rename = "등락률", default, deserialize_with = "lenient::opt_f64")]
    pub change_rate: Option<f64>,
    /// Traded volume.
    #[serde(rename = "거래량", default, deserialize_with = "lenient::opt_f64")]
    pub volume: Option<f64>,
    /// Traded value.
    #[serde(rename = "거래대금", default, deserialize_with = "lenient::opt_f64")]
    pub trading_value: Option<f64>,
    /// Best bid.
    #[serde(rename = "매수호가", default, deserialize_with = "lenient::opt_f64")]
    pub bid: Option<f64>,
    /// Best ask.
    #[serde(rename = "매도호가", default, deserialize_with = "lenient::opt_f64")]
    pub ask: Option<f64>,
    /// Market capitalisation in units of 100M KRW (억).
    #[serde(rename = "시가총액", default, deserialize_with = "lenient::opt_f64")]
    pub market_cap: Option<f64>,
    /// Price / earnings ratio.
    #[serde(rename = "PER", default, deserialize_with = "lenient::opt_f64")]
    pub per: Option<f64>,
    /// Return on equity.
    #[serde(rename = "ROE", default, deserialize_with = "lenient::opt_f64")]
    pub roe: Option<f64>,
}

/// One product from a Coupang keyword search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketplaceItem {
    /// Product name.
    #[serde(rename = "제품명", default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Price in KRW.
    #[serde(rename = "가격", default, deserialize_with = "lenient::opt_i64")]
    pub price: Option<i64>,
    /// Average rating, 0 to 5.
    #[serde(rename = "평점", default, deserialize_with = "lenient::opt_f64")]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(rename = "리뷰수", default, deserialize_with = "lenient::opt_i64")]
    pub review_count: Option<i64>,
    /// Product detail URL.
    #[serde(rename = "링크", default, deserialize_with = "lenient::string")]
    pub link: String,
}

/// One listing from Naver Real Estate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RealEstateItem {
    /// Listing id; unique within a result set.
    #[serde(rename = "매물번호", default, deserialize_with = "lenient::string")]
    pub listing_id: String,
    /// Listing name (usually the complex name).
    #[serde(rename = "매물명", default, deserialize_with = "lenient::string")]
    pub listing_name: String,
    /// Transaction kind as the crawler labels it (매매, 전세, 월세, or
    /// anything newer it starts sending).
    #[serde(rename = "거래유형", default, deserialize_with = "lenient::string")]
    pub trade_type: String,
    /// Floor, e.g. "중/42".
    #[serde(rename = "층정보", default, deserialize_with = "lenient::string")]
    pub floor_info: String,
    /// Price as free text ("45억", "10억 / 500"); formats vary by trade type.
    #[serde(rename = "가격", default, deserialize_with = "lenient::string")]
    pub price: String,
    /// Area type name, e.g. "165".
    #[serde(rename = "면적명", default, deserialize_with = "lenient::opt_string")]
    pub area_name: Option<String>,
    /// Supply area in square metres.
    #[serde(rename = "공급면적", default, deserialize_with = "lenient::opt_f64")]
    pub supply_area: Option<f64>,
    /// Exclusive area in square metres.
    #[serde(rename = "전용면적", default, deserialize_with = "lenient::opt_f64")]
    pub exclusive_area: Option<f64>,
    /// Facing direction.
    #[serde(rename = "방향", default, deserialize_with = "lenient::string")]
    pub direction: String,
    /// Listing confirmation date, `YYYYMMDD`.
    #[serde(rename = "확인일자", default, deserialize_with = "lenient::string")]
    pub confirmed_on: String,
    /// Free-text feature description.
    #[serde(rename = "특징", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    /// Comma-separated tags.
    #[serde(rename = "태그", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Building wing (동).
    #[serde(rename = "건물동", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    /// Listing broker.
    #[serde(rename = "중개사", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    /// Latitude as sent by the crawler.
    #[serde(rename = "위도", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    /// Longitude as sent by the crawler.
    #[serde(rename = "경도", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
}

impl RealEstateItem {
    /// Tags split on commas, trimmed, blanks dropped.
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finance_item_from_crawler_json() {
        let json = r#"{
            "종목명": "삼성전자", "현재가": 71500, "전일비": -500, "등락률": -0.69,
            "거래량": 12345678, "거래대금": 882000, "매수호가": 71400, "매도호가": 71500,
            "시가총액": 4268000, "PER": 13.2, "ROE": null
        }"#;
        let item: FinanceItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "삼성전자");
        assert_eq!(item.price_delta, Some(-500.0));
        assert_eq!(item.roe, None);
    }

    #[test]
    fn marketplace_item_tolerates_missing_rating() {
        let json = r#"{"제품명": "노트북", "가격": 899000, "평점": null, "링크": "https://example.com/p/1"}"#;
        let item: MarketplaceItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, Some(899_000));
        assert_eq!(item.rating, None);
        assert_eq!(item.review_count, None);
    }

    #[test]
    fn real_estate_item_optional_fields() {
        let json = r#"{
            "매물번호": 2412345678, "매물명": "래미안", "거래유형": "매매", "층정보": "중/42",
            "가격": "45억", "면적명": "165", "공급면적": 165.3, "전용면적": 135.1,
            "방향": "남향", "확인일자": "20250217", "태그": "역세권, 대단지,"
        }"#;
        let item: RealEstateItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.listing_id, "2412345678");
        assert_eq!(item.trade_type, "매매");
        assert_eq!(item.features, None);
        assert_eq!(item.tag_list(), vec!["역세권", "대단지"]);
    }

    #[test]
    fn real_estate_item_keeps_unknown_trade_labels() {
        let json = r#"{"매물번호": "1", "매물명": "오피스텔", "거래유형": "단기임대", "가격": "300/50"}"#;
        let item: RealEstateItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.trade_type, "단기임대");

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["거래유형"], "단기임대");
    }
}

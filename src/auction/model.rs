use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 경매 생성 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionRequest {
    pub item_id: String,
    pub category_id: String,
    pub auction_type: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub reserve_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub buy_now_price: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_reserve: Option<bool>,
}

// 경매 목록 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub current_bid: Decimal,
    pub end_time: DateTime<Utc>,
    pub status: String,
}

// 경매 상세
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub reserve_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub buy_now_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub current_highest_bid: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub seller_id: String,
}

impl AuctionDetails {
    /// 목록 항목 형태로 변환 (현재 입찰가 = 현재 최고 입찰가)
    pub fn summary(&self) -> AuctionSummary {
        AuctionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            current_bid: self.current_highest_bid,
            end_time: self.end_time,
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::str::FromStr;

    fn sample_request() -> CreateAuctionRequest {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        CreateAuctionRequest {
            item_id: "item-1".to_string(),
            category_id: "art".to_string(),
            auction_type: "ENGLISH_OPEN".to_string(),
            reserve_price: Decimal::from_str("1500.25").unwrap(),
            buy_now_price: Decimal::from_str("9000").unwrap(),
            start_time: start,
            end_time: start + chrono::Duration::days(7),
            hidden_reserve: None,
        }
    }

    #[test]
    fn create_request_uses_wire_names() {
        let value = serde_json::to_value(sample_request()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "itemId",
            "categoryId",
            "auctionType",
            "reservePrice",
            "buyNowPrice",
            "startTime",
            "endTime",
        ] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert!(!object.contains_key("hiddenReserve"));
        assert_eq!(value["reservePrice"].to_string(), "1500.25");
    }

    #[test]
    fn server_echo_preserves_values() {
        let mut req = sample_request();
        req.hidden_reserve = Some(true);
        let body = serde_json::to_string(&req).unwrap();
        let echoed: CreateAuctionRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(echoed, req);
        assert_eq!(
            echoed.start_time.timestamp_subsec_nanos(),
            req.start_time.timestamp_subsec_nanos()
        );

        // f64로는 표현할 수 없는 자릿수도 그대로 유지
        req.reserve_price = Decimal::from_str("1234567.1234567891").unwrap();
        req.buy_now_price = Decimal::from_str("98765432109.87654321098").unwrap();
        let body = serde_json::to_string(&req).unwrap();
        assert!(body.contains(r#""reservePrice":1234567.1234567891"#), "{}", body);
        let echoed: CreateAuctionRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(echoed.reserve_price, req.reserve_price);
        assert_eq!(echoed.buy_now_price, req.buy_now_price);
    }

    #[test]
    fn details_project_to_summary() {
        let details: AuctionDetails = serde_json::from_value(json!({
            "id": "a-7",
            "title": "Vintage camera",
            "description": "Working condition",
            "category": "electronics",
            "reservePrice": 100,
            "buyNowPrice": 450.00,
            "currentHighestBid": 120.5,
            "startTime": "2026-03-01T09:00:00Z",
            "endTime": "2026-03-08T09:00:00.250Z",
            "status": "ACTIVE",
            "sellerId": "seller-3"
        }))
        .unwrap();

        let summary = details.summary();
        assert_eq!(summary.id, "a-7");
        assert_eq!(summary.current_bid, Decimal::from_str("120.5").unwrap());
        assert_eq!(summary.end_time, details.end_time);
        assert_eq!(details.buy_now_price, Decimal::from_str("450").unwrap());
    }
}

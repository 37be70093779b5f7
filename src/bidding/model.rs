use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 입찰 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl PlaceBidRequest {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            idempotency_key: None,
        }
    }

    /// 무작위 멱등성 키를 가진 입찰 요청 생성
    /// 같은 요청 값을 재전송하면 서버가 중복 입찰로 인식한다.
    pub fn idempotent(amount: Decimal) -> Self {
        Self::new(amount).with_idempotency_key(Uuid::new_v4().to_string())
    }

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }
}

// 입찰 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub bidder_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
    pub accepted: bool,
}

// 입찰 이력 페이지
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidHistory {
    pub bids: Vec<Bid>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

impl BidHistory {
    /// 다음 페이지 존재 여부 (페이지는 0부터 시작)
    pub fn has_more(&self) -> bool {
        let seen = i64::from(self.page) * i64::from(self.size) + self.bids.len() as i64;
        seen < self.total
    }
}

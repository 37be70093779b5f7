//! 온라인 경매 서비스 REST API 클라이언트
//!
//! 인증, 경매 생성/목록/상세 조회, 입찰, 입찰 이력 조회를 위한 요청/응답 모델과
//! [`AuctionClient`] 를 제공한다.

pub mod auction;
pub mod auth;
pub mod bidding;
pub mod client;
pub mod config;
pub mod error;

pub use auction::model::{AuctionDetails, AuctionSummary, CreateAuctionRequest};
pub use auth::model::{AuthRequest, AuthResponse, RegisterRequest, RegisterResponse};
pub use bidding::model::{Bid, BidHistory, PlaceBidRequest};
pub use client::{AuctionApi, AuctionClient, RetryPolicy};
pub use config::ClientConfig;
pub use error::{ApiErrorKind, ClientError, ClientResult};

/// 로그인
pub const LOGIN: &str = "/api/v1/auth/login";

/// 회원 가입
pub const REGISTER: &str = "/api/v1/auth/register";

/// 경매 생성, 목록 조회, 상세 조회 (`/api/v1/auctions/{id}`)
pub const AUCTIONS: &str = "/api/v1/auctions";

/// 경매 하위 입찰 경로 (`/api/v1/auctions/{auctionId}/bids`)
pub const BIDS: &str = "bids";

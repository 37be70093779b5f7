//! 경매 서비스 REST API 클라이언트
//!
//! 각 호출은 경로를 구성하고, 세션 토큰이 있으면 Bearer 인증 헤더를 붙이고,
//! 요청 본문을 JSON으로 직렬화한 뒤 응답 본문을 디코딩한다.
//! 재시도는 [`RetryPolicy`]에 따라 전송 계층에서만 수행된다.

// region:    --- Modules
pub mod retry;
pub mod routes;
pub mod session;

// endregion: --- Modules

// region:    --- Imports
use crate::auction::model::{AuctionDetails, AuctionSummary, CreateAuctionRequest};
use crate::auth::model::{AuthRequest, AuthResponse, RegisterRequest, RegisterResponse};
use crate::bidding::model::{BidHistory, PlaceBidRequest};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub use retry::RetryPolicy;
pub use session::{AuthTokens, Session};

// endregion: --- Imports

// region:    --- Auction Api Trait

/// 경매 서비스 API
#[async_trait]
pub trait AuctionApi: Send + Sync {
    /// 로그인 후 반환된 토큰을 세션에 저장
    async fn login(&self, request: &AuthRequest) -> ClientResult<AuthResponse>;

    /// 회원 가입 (세션에는 영향 없음)
    async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse>;

    async fn create_auction(&self, request: &CreateAuctionRequest) -> ClientResult<()>;

    /// 경매 목록 조회, 빈 필터도 그대로 전달된다
    async fn list_auctions(
        &self,
        category: &str,
        seller_id: &str,
        page: u32,
        size: u32,
    ) -> ClientResult<Vec<AuctionSummary>>;

    async fn get_auction(&self, id: &str) -> ClientResult<AuctionDetails>;

    /// 입찰. 멱등성 키 중복 제거는 서버가 담당한다
    async fn place_bid(&self, auction_id: &str, request: &PlaceBidRequest) -> ClientResult<()>;

    async fn get_bid_history(
        &self,
        auction_id: &str,
        page: u32,
        size: u32,
    ) -> ClientResult<BidHistory>;
}

// endregion: --- Auction Api Trait

// region:    --- Auction Client

/// reqwest 기반 API 클라이언트
pub struct AuctionClient {
    http: reqwest::Client,
    base_url: Url,
    retry: RetryPolicy,
    session: Session,
}

impl AuctionClient {
    /// 기본 설정으로 클라이언트 생성 (네트워크 호출 없음)
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> ClientResult<Self> {
        let base_url = config.parsed_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        info!("{:<12} --> 클라이언트 생성 base_url: {}", "Client", base_url);
        Ok(Self {
            http,
            base_url,
            retry: config.retry,
            session: Session::new(),
        })
    }

    /// 환경 변수 설정으로 클라이언트 생성
    pub fn from_env() -> ClientResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.access_token()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.session.refresh_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// 저장해 둔 토큰으로 세션 복원
    pub fn restore_session(&self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        self.session.store(AuthTokens {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        });
    }

    pub fn clear_session(&self) {
        self.session.clear();
    }

    /// 사용자명/비밀번호로 로그인
    pub async fn login_with(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        self.login(&AuthRequest::new(username, password)).await
    }

    /// 기본 URL 경로 뒤에 경로 세그먼트 추가 (세그먼트는 퍼센트 인코딩)
    fn endpoint(&self, route: &str, tail: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ClientError::Configuration(format!("base url cannot be a base: {}", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(route.split('/').filter(|s| !s.is_empty()))
                .extend(tail);
        }
        Ok(url)
    }

    /// 인증 없는 요청
    fn anonymous(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{:<12} --> {} {}", "Client", method, url);
        self.http
            .request(method, url)
            .header(ACCEPT, "application/json")
    }

    /// 세션 토큰이 있으면 Bearer 인증 헤더 추가
    fn authorized(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.anonymous(method, url);
        match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 요청 실행 및 재시도, 성공 시 응답 본문 반환
    /// 성공 응답의 본문 읽기 실패도 전송 실패로 보고 재시도한다.
    async fn execute(&self, builder: RequestBuilder) -> ClientResult<Vec<u8>> {
        let mut request = builder.build().map_err(ClientError::Network)?;
        let mut retry = 0;

        loop {
            let next = if retry < self.retry.max_retries {
                request.try_clone()
            } else {
                None
            };

            let failure = match self.http.execute(request).await {
                Ok(response) if response.status().is_success() => {
                    match response.bytes().await {
                        Ok(body) => return Ok(body.to_vec()),
                        Err(e) => transport_failure(e)?,
                    }
                }
                Ok(response) => {
                    let status = response.status();
                    let body = match response.bytes().await {
                        Ok(body) => String::from_utf8_lossy(&body).into_owned(),
                        Err(e) => {
                            warn!(
                                "{:<12} --> 오류 응답 본문 읽기 실패 ({}): {}",
                                "Client", status, e
                            );
                            String::new()
                        }
                    };
                    let err = ClientError::Api { status, body };
                    if !RetryPolicy::is_retryable_status(status) {
                        return Err(err);
                    }
                    err
                }
                Err(e) => transport_failure(e)?,
            };

            let Some(next) = next else {
                return Err(failure);
            };

            let wait = self.retry.backoff(retry);
            retry += 1;
            warn!(
                "{:<12} --> 요청 실패, {:?} 후 재시도 ({}/{}): {}",
                "Retry", wait, retry, self.retry.max_retries, failure
            );
            tokio::time::sleep(wait).await;
            request = next;
        }
    }
}

/// 재시도 가능한 전송 오류는 Ok, 아니면 즉시 반환할 Err
fn transport_failure(e: reqwest::Error) -> ClientResult<ClientError> {
    if RetryPolicy::is_retryable_error(&e) {
        Ok(ClientError::Network(e))
    } else {
        Err(ClientError::Network(e))
    }
}

/// 응답 본문 디코딩 (UTF-8이 아닌 본문도 디코딩 오류)
fn decode<T: DeserializeOwned>(body: Vec<u8>) -> ClientResult<T> {
    serde_json::from_slice(&body).map_err(|source| ClientError::Decoding {
        source,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

#[async_trait]
impl AuctionApi for AuctionClient {
    async fn login(&self, request: &AuthRequest) -> ClientResult<AuthResponse> {
        info!("{:<12} --> 로그인 요청 username: {}", "Client", request.username);
        let url = self.endpoint(routes::LOGIN, &[])?;
        let body = self.execute(self.anonymous(Method::POST, url).json(request)).await?;
        let resp: AuthResponse = decode(body)?;

        self.session.store(AuthTokens::from(&resp));
        Ok(resp)
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse> {
        info!("{:<12} --> 회원 가입 요청 email: {}", "Client", request.email);
        let url = self.endpoint(routes::REGISTER, &[])?;
        let body = self.execute(self.anonymous(Method::POST, url).json(request)).await?;
        decode(body)
    }

    async fn create_auction(&self, request: &CreateAuctionRequest) -> ClientResult<()> {
        info!("{:<12} --> 경매 생성 요청 item: {}", "Client", request.item_id);
        let url = self.endpoint(routes::AUCTIONS, &[])?;
        self.execute(self.authorized(Method::POST, url).json(request))
            .await?;
        Ok(())
    }

    async fn list_auctions(
        &self,
        category: &str,
        seller_id: &str,
        page: u32,
        size: u32,
    ) -> ClientResult<Vec<AuctionSummary>> {
        info!(
            "{:<12} --> 경매 목록 조회 category: {:?}, seller: {:?}, page: {}, size: {}",
            "Client", category, seller_id, page, size
        );
        let url = self.endpoint(routes::AUCTIONS, &[])?;
        let page = page.to_string();
        let size = size.to_string();
        let query = [
            ("category", category),
            ("sellerId", seller_id),
            ("page", page.as_str()),
            ("size", size.as_str()),
        ];
        let body = self
            .execute(self.authorized(Method::GET, url).query(&query))
            .await?;
        decode(body)
    }

    async fn get_auction(&self, id: &str) -> ClientResult<AuctionDetails> {
        info!("{:<12} --> 경매 상세 조회 id: {}", "Client", id);
        let url = self.endpoint(routes::AUCTIONS, &[id])?;
        let body = self.execute(self.authorized(Method::GET, url)).await?;
        decode(body)
    }

    async fn place_bid(&self, auction_id: &str, request: &PlaceBidRequest) -> ClientResult<()> {
        info!(
            "{:<12} --> 입찰 요청 auction: {}, amount: {}",
            "Client", auction_id, request.amount
        );
        let url = self.endpoint(routes::AUCTIONS, &[auction_id, routes::BIDS])?;
        self.execute(self.authorized(Method::POST, url).json(request))
            .await?;
        Ok(())
    }

    async fn get_bid_history(
        &self,
        auction_id: &str,
        page: u32,
        size: u32,
    ) -> ClientResult<BidHistory> {
        info!(
            "{:<12} --> 입찰 이력 조회 auction: {}, page: {}, size: {}",
            "Client", auction_id, page, size
        );
        let url = self.endpoint(routes::AUCTIONS, &[auction_id, routes::BIDS])?;
        let page = page.to_string();
        let size = size.to_string();
        let query = [("page", page.as_str()), ("size", size.as_str())];
        let body = self
            .execute(self.authorized(Method::GET, url).query(&query))
            .await?;
        decode(body)
    }
}

// endregion: --- Auction Client

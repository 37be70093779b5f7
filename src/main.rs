// region:    --- Imports
use auction_client::{AuctionApi, AuctionClient, AuthRequest, ClientResult};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 환경 변수(AUCTIONFLOW_BASE_URL 등)로 클라이언트 생성
    let client = match AuctionClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("{:<12} --> 클라이언트 생성 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 계정 정보가 있으면 로그인
    let credentials = std::env::var("AUCTIONFLOW_USERNAME")
        .ok()
        .zip(std::env::var("AUCTIONFLOW_PASSWORD").ok())
        .map(|(username, password)| AuthRequest::new(username, password));

    if let Err(e) = run(&client, credentials).await {
        error!("{:<12} --> 요청 실패: {}", "Main", e);
        return Err(e.into());
    }
    Ok(())
}

/// 로그인 후 첫 페이지 경매 목록 출력
async fn run(api: &impl AuctionApi, credentials: Option<AuthRequest>) -> ClientResult<()> {
    if let Some(credentials) = credentials {
        api.login(&credentials).await?;
        info!("{:<12} --> 로그인 성공", "Main");
    }

    let auctions = api.list_auctions("", "", 0, 10).await?;
    info!("{:<12} --> 경매 {}건 조회", "Main", auctions.len());
    for auction in auctions {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            auction.id,
            auction.title,
            auction.category,
            auction.current_bid,
            auction.status,
            auction.end_time.to_rfc3339()
        );
    }
    Ok(())
}
// endregion: --- Main

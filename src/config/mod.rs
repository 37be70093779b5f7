//! 클라이언트 설정
//! 기본값: 재시도 3회, 최초 대기 1초, 최대 대기 30초, 요청 타임아웃 10초

// region:    --- Imports
use crate::client::retry::RetryPolicy;
use crate::error::{ClientError, ClientResult};
use reqwest::Url;
use std::time::Duration;

// endregion: --- Imports

// region:    --- Client Config

pub const ENV_BASE_URL: &str = "AUCTIONFLOW_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "AUCTIONFLOW_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "AUCTIONFLOW_MAX_RETRIES";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            retry: RetryPolicy::default(),
        }
    }

    /// 환경 변수에서 설정 읽기
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정 구성
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration(format!("{} must be set", ENV_BASE_URL)))?;
        let mut config = Self::new(base_url.trim());

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(retries) = lookup(ENV_MAX_RETRIES) {
            config.retry.max_retries = parse_number(ENV_MAX_RETRIES, &retries)?;
        }
        Ok(config)
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// 기본 URL 검증 (http/https, 경로를 붙일 수 있는 URL)
    pub fn parsed_base_url(&self) -> ClientResult<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::Configuration(format!("invalid base url {}: {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "base url must be http(s): {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> ClientResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ClientError::Configuration(format!("{} is not a number: {}", key, value)))
}

// endregion: --- Client Config

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_transport_policy() {
        let config = ClientConfig::new("http://localhost:8080");
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.retry.initial_wait, Duration::from_secs(1));
        assert_eq!(config.retry.max_wait, Duration::from_secs(30));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(config.user_agent.starts_with("auction-client/"));
    }

    #[test]
    fn reads_overrides_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, " https://auctions.example.com "),
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_MAX_RETRIES, "0"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://auctions.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.retry.max_retries, 0);
    }

    #[test]
    fn missing_or_bad_values_are_configuration_errors() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));

        let err = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost"),
            (ENV_MAX_RETRIES, "many"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ENV_MAX_RETRIES));
    }

    #[test]
    fn base_url_validation() {
        assert!(ClientConfig::new("http://localhost:8080/prefix/")
            .parsed_base_url()
            .is_ok());
        assert!(ClientConfig::new("not a url").parsed_base_url().is_err());
        assert!(ClientConfig::new("ftp://files.example.com")
            .parsed_base_url()
            .is_err());
        assert!(ClientConfig::new("mailto:someone@example.com")
            .parsed_base_url()
            .is_err());
    }
}

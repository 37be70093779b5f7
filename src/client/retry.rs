//! 재시도 정책
//! 전송 실패와 일시적인 서버 오류(429, 5xx)에 대해서만 재시도한다.
// region:    --- Imports
use reqwest::StatusCode;
use std::time::Duration;

// endregion: --- Imports

// region:    --- Retry Policy

// 기본 재시도 횟수 (최초 요청 이후)
pub const DEFAULT_MAX_RETRIES: u32 = 3;
// 기본 최초 대기 시간
pub const DEFAULT_INITIAL_WAIT: Duration = Duration::from_secs(1);
// 기본 최대 대기 시간
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_wait: Duration,
    pub max_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_wait: DEFAULT_INITIAL_WAIT,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_wait: Duration, max_wait: Duration) -> Self {
        Self {
            max_retries,
            initial_wait,
            max_wait: max_wait.max(initial_wait),
        }
    }

    /// 재시도 없음
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO, Duration::ZERO)
    }

    /// n번째 재시도(0부터) 전 대기 시간: initial_wait * 2^n, 최대 max_wait
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.checked_pow(retry).unwrap_or(u32::MAX);
        self.initial_wait
            .checked_mul(factor)
            .unwrap_or(self.max_wait)
            .min(self.max_wait)
    }

    /// 재시도 가능한 상태 코드 여부
    pub fn is_retryable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    /// 재시도 가능한 전송 오류 여부 (요청 구성 오류는 제외)
    pub fn is_retryable_error(err: &reqwest::Error) -> bool {
        !err.is_builder() && !err.is_redirect()
    }
}

// endregion: --- Retry Policy

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_until_capped() {
        let policy = RetryPolicy::default();
        let waits: Vec<u64> = (0..8).map(|n| policy.backoff(n).as_secs()).collect();
        assert_eq!(waits, vec![1, 2, 4, 8, 16, 30, 30, 30]);
        assert_eq!(policy.backoff(200), DEFAULT_MAX_WAIT);
    }

    #[test]
    fn backoff_is_non_decreasing() {
        let policy = RetryPolicy::new(10, Duration::from_millis(300), Duration::from_secs(5));
        let mut previous = Duration::ZERO;
        for n in 0..40 {
            let wait = policy.backoff(n);
            assert!(wait >= previous);
            assert!(wait <= Duration::from_secs(5));
            previous = wait;
        }
    }

    #[test]
    fn max_wait_never_below_initial_wait() {
        let policy = RetryPolicy::new(2, Duration::from_secs(5), Duration::from_secs(1));
        assert_eq!(policy.backoff(0), Duration::from_secs(5));
    }

    #[test]
    fn retryable_statuses() {
        assert!(RetryPolicy::is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(RetryPolicy::is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(RetryPolicy::is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::UNAUTHORIZED));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::CONFLICT));
    }
}

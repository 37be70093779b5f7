//! 클라이언트 오류 타입
//!
//! 전송 계층 오류, 응답 디코딩 오류, 서버가 반환한 애플리케이션 오류를 구분한다.
//! 서버 오류는 상태 코드와 본문을 그대로 전달하며 그 이상 해석하지 않는다.

// region:    --- Imports
use reqwest::StatusCode;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Client Error

/// 클라이언트 오류
#[derive(Error, Debug)]
pub enum ClientError {
    /// 연결 실패, 타임아웃 등 전송 계층 오류 (재시도 후에도 실패)
    #[error("네트워크 오류: {0}")]
    Network(#[source] reqwest::Error),

    /// 응답 본문이 기대한 스키마와 다름
    #[error("응답 디코딩 오류: {source}")]
    Decoding {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// 서버가 성공이 아닌 상태 코드를 반환
    #[error("서버 오류 ({status}): {body}")]
    Api { status: StatusCode, body: String },

    /// 잘못된 클라이언트 설정
    #[error("설정 오류: {0}")]
    Configuration(String),
}

/// 서버 오류의 상태 코드 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Unauthenticated,
    Validation,
    NotFound,
    Conflict,
    RateLimited,
    Server,
    Other,
}

impl ApiErrorKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            401 | 403 => ApiErrorKind::Unauthenticated,
            400 | 422 => ApiErrorKind::Validation,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Conflict,
            429 => ApiErrorKind::RateLimited,
            500..=599 => ApiErrorKind::Server,
            _ => ApiErrorKind::Other,
        }
    }
}

impl ClientError {
    /// 서버 오류의 상태 코드
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// 서버 오류 분류, 서버 오류가 아니면 None
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            ClientError::Api { status, .. } => Some(ApiErrorKind::from_status(*status)),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, ClientError::Decoding { .. })
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Unauthenticated)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ApiErrorKind::NotFound)
    }
}

/// ClientError 결과 타입
pub type ClientResult<T> = Result<T, ClientError>;

// endregion: --- Client Error

//! 세션 토큰 저장소
//! 로그인으로만 갱신되며 인증이 필요한 호출마다 읽힌다. await 지점을 넘어 잠금을 유지하지 않는다.

// region:    --- Imports
use crate::auth::model::AuthResponse;
use std::sync::{PoisonError, RwLock};
use tracing::info;

// endregion: --- Imports

// region:    --- Session

/// 액세스/리프레시 토큰 쌍
#[derive(Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<&AuthResponse> for AuthTokens {
    fn from(resp: &AuthResponse) -> Self {
        Self {
            access_token: resp.access_token.clone(),
            refresh_token: resp.refresh_token.clone(),
        }
    }
}

#[derive(Default)]
pub struct Session {
    tokens: RwLock<Option<AuthTokens>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰 저장 (기존 토큰 교체)
    pub fn store(&self, tokens: AuthTokens) {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = Some(tokens);
        info!("{:<12} --> 세션 토큰 저장", "Session");
    }

    pub fn clear(&self) {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = None;
        info!("{:<12} --> 세션 토큰 삭제", "Session");
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(|t| t.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(|t| t.refresh_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(|_| ()).is_some()
    }

    fn read<R>(&self, f: impl FnOnce(&AuthTokens) -> R) -> Option<R> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(f)
    }
}

// endregion: --- Session

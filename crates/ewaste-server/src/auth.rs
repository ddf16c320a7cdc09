//! Caller identity and admin authorization
//!
//! Credential issuance lives upstream: an auth gateway verifies the
//! session and forwards the user id in `x-user-id`. Admin mutations
//! additionally present the shared admin key in `x-admin-key`.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// The authenticated submitter of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(AppError::Unauthorized)?;

        Ok(Self { id: id.to_string() })
    }
}

/// Proof that the caller may curate hazards and centers
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

#[async_trait]
impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_key() else {
            return Ok(Self);
        };

        let presented = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Forbidden)?;

        if keys_match(presented, expected) {
            Ok(Self)
        } else {
            Err(AppError::Forbidden)
        }
    }
}

/// Constant-time comparison of two keys
fn keys_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match() {
        assert!(keys_match("s3cret", "s3cret"));
        assert!(!keys_match("s3cret", "s3cret2"));
        assert!(!keys_match("", "s3cret"));
    }
}

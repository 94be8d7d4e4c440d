//! 검증된 토큰에서 추출한 요청 주체
//!
//! 접근 가드가 토큰 검증에 성공하면 Request Extensions에 저장하고,
//! 핸들러는 `FromRequest` 추출자로 꺼내 씁니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub email: String,
    pub user_name: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            email: claims.email,
            user_name: claims.user_name,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::InvalidToken(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claims() {
        let claims = TokenClaims {
            email: "abc@gmail.com".to_string(),
            user_name: "admin".to_string(),
            iat: 0,
            exp: 3600,
        };

        let user = AuthenticatedUser::from(claims);

        assert_eq!(user.email, "abc@gmail.com");
        assert_eq!(user.user_name, "admin");
    }
}

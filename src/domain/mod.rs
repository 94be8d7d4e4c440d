//! # Domain Module
//!
//! 서비스의 도메인 타입을 정의합니다.
//!
//! - [`entities`] - 저장소에 영속화되는 엔티티 (`User`)
//! - [`dto`] - HTTP 요청/응답 형태 (`UserRequest`, `UserResponse`, `AuthTokenResponse`)
//! - [`models`] - 영속화되지 않는 인증 모델 (`TokenClaims`, `AuthenticatedUser`)

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
pub use dto::tokens::AuthTokenResponse;
pub use dto::users::{LoginRequest, UserRequest, UserResponse};
pub use models::auth::AuthenticatedUser;
pub use models::token::TokenClaims;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_reexports_resolve_to_layered_types() {
        let user: entities::users::User = User::new("John Doe", "abc@gmail.com");
        let request: dto::users::request::UserRequest = UserRequest {
            name: "John Doe".to_string(),
            email: "abc@gmail.com".to_string(),
        };
        let token: dto::tokens::response::AuthTokenResponse = AuthTokenResponse::new("t".to_string());

        assert_eq!(user.email.as_deref(), Some(request.email.as_str()));
        assert_eq!(token.access_token, "t");
    }
}

//! 영속화되지 않는 도메인 모델

pub mod auth;
pub mod token;

pub use auth::AuthenticatedUser;
pub use token::TokenClaims;

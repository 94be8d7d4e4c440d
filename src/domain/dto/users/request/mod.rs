//! 요청 DTO

pub mod auth_request;
pub mod user_request;

pub use auth_request::LoginRequest;
pub use user_request::UserRequest;

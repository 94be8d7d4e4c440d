//! 사용자 및 로그인 관련 DTO

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::{LoginRequest, UserRequest};
pub use response::UserResponse;

//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator`로 검증된 뒤에만 커맨드/쿼리 객체로 변환됩니다.

pub mod users;
pub mod tokens;

pub use tokens::AuthTokenResponse;
pub use users::{LoginRequest, UserRequest, UserResponse};

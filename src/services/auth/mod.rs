//! 인증 서비스 모듈
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 1시간 고정 만료
//! - 서버 측 토큰 저장 없음 (무상태 검증)
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth_service = AuthService::from_env()?;
//! let token = auth_service.login("abc@gmail.com", "1234")?;
//! let identity = auth_service.validate(&token)?;
//! ```

pub mod auth_service;

pub use auth_service::AuthService;

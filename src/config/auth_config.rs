//! # Authentication Configuration Module
//!
//! JWT 서명 키와 운영자 계정 등 인증 관련 설정을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! `JWT_SECRET`이 없으면 기동 단계에서 `ConfigError`로 실패합니다.
//! 요청 처리 도중에 발견되는 에러가 아닙니다.

use std::env;
use crate::core::errors::{AppError, AppResult};

pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 유효 시간 (고정)
    pub const EXPIRATION_HOURS: i64 = 1;

    /// `JWT_SECRET` 환경 변수를 읽습니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError` - 변수가 없거나 비어 있는 경우
    pub fn secret() -> AppResult<String> {
        Self::secret_from(env::var("JWT_SECRET").ok())
    }

    fn secret_from(value: Option<String>) -> AppResult<String> {
        match value {
            Some(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(AppError::ConfigError("JWT_SECRET is not defined".to_string())),
        }
    }
}

/// 컴파일 타임에 고정된 단일 운영자 계정
///
/// 비밀번호 해싱이나 저장소 조회 없이 정확히 일치하는 경우에만 로그인을 허용합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub user_name: &'static str,
}

impl OperatorAccount {
    pub const DEFAULT: OperatorAccount = OperatorAccount {
        email: "abc@gmail.com",
        password: "1234",
        user_name: "admin",
    };

    /// 대소문자 구분, 정규화 없이 두 필드가 모두 일치하는지 확인합니다.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Default for OperatorAccount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

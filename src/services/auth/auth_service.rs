//! JWT 기반 인증 서비스 구현
//!
//! 단일 운영자 계정에 대한 자격 증명 검증, 액세스 토큰 발급, 토큰 검증을 담당합니다.
//! 사용자 저장소에는 의존하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::config::{JwtConfig, OperatorAccount};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenClaims;

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
    operator: OperatorAccount,
}

impl AuthService {
    /// 서명 키로 서비스를 생성합니다. 토큰 유효 시간은 1시간으로 고정됩니다.
    pub fn new(secret: &str) -> Self {
        Self::with_operator(secret, OperatorAccount::default())
    }

    pub fn with_operator(secret: &str, operator: OperatorAccount) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            expiration: Duration::hours(JwtConfig::EXPIRATION_HOURS),
            operator,
        }
    }

    /// `JWT_SECRET` 환경 변수로 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError` - 서명 키가 설정되지 않은 경우 (기동 중단 사유)
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(&JwtConfig::secret()?))
    }

    /// 자격 증명을 검증하고 새 액세스 토큰을 발급합니다.
    ///
    /// 이메일 불일치와 비밀번호 불일치를 구분하지 않습니다.
    /// 시도 횟수 제한이나 잠금은 수행하지 않습니다.
    pub fn login(&self, email: &str, password: &str) -> AppResult<String> {
        log::debug!("자격 증명 검증 중");

        if !self.operator.matches(email, password) {
            return Err(AppError::InvalidCredentials);
        }

        self.generate_access_token(self.operator.email, self.operator.user_name)
    }

    fn generate_access_token(&self, email: &str, user_name: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + self.expiration;

        let claims = TokenClaims {
            email: email.to_string(),
            user_name: user_name.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// 서명과 만료 시간을 검증하고 토큰의 주체를 반환합니다.
    pub fn validate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| AuthenticatedUser::from(token_data.claims))
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::InvalidToken("토큰이 만료되었습니다".to_string()),
                ErrorKind::InvalidSignature => AppError::InvalidToken("서명이 일치하지 않습니다".to_string()),
                _ => AppError::InvalidToken(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix(BEARER_PREFIX) {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::InvalidToken("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

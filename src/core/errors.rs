//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 계층(리포지토리, 인증 서비스, 유스케이스, 디스패처)은 `AppError`를 반환하고,
//! HTTP 경계에서 `actix_web::ResponseError` 구현을 통해 상태 코드로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 형식/검증 실패 |
//! | `InvalidCredentials` | 401 Unauthorized | 로그인 자격 증명 불일치 |
//! | `InvalidToken` | 401 Unauthorized | 토큰 누락, 서명 불일치, 만료 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 |
//! | `DuplicateKey` | 409 Conflict | 이메일 유니크 제약 위반 |
//! | `HandlerNotRegistered` | 500 Internal Server Error | 디스패처 구성 오류 |
//! | `ConfigError` | 500 Internal Server Error | 필수 설정 누락 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 인증 실패 응답은 어느 필드가 틀렸는지 구분하지 않고 항상 `"Unauthorized"`만 내려줍니다.

use actix_web::http::StatusCode;
use thiserror::Error;

/// 인증 실패 시 클라이언트에게 노출되는 유일한 메시지
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `ResponseError`를 통해
/// HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (404)
    ///
    /// 정상 동작 중에도 흔히 발생하므로 에러 로그를 남기지 않습니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 위반 (409)
    ///
    /// 중복 여부는 저장소의 유니크 인덱스가 단일 진실 공급원입니다.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// 로그인 자격 증명 불일치 (401)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 토큰 검증 실패 (401)
    ///
    /// 내부 사유는 서버 로그용이며 응답 본문에는 포함되지 않습니다.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 요청 타입에 대응하는 핸들러가 등록되지 않음 (500)
    #[error("Handler not registered for request type: {0}")]
    HandlerNotRegistered(&'static str),

    /// 필수 설정 누락 등 구성 오류 (500, 기동 시에는 치명적)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 인증 계열 에러인지 여부
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, AppError::InvalidCredentials | AppError::InvalidToken(_))
    }

    /// 클라이언트에게 노출할 메시지
    fn public_message(&self) -> String {
        if self.is_authentication_failure() {
            UNAUTHORIZED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 `AppError` 변형을 상태 코드와 `{"error": "..."}` JSON 응답으로 변환합니다.
    ///
    /// 5xx 에러는 서버 로그에 원인을 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let users = cursor.try_collect().await.db_context("사용자 목록 조회 실패")?;
/// let token = encode(&header, &claims, &key).context("JWT 토큰 생성 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 컨텍스트 정보와 함께 저장소 에러(`DatabaseError`)로 변환합니다.
    fn db_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn db_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::DatabaseError(format!("{}: {}", msg, e)))
    }
}

//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! ### 접근 가드 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 토큰 추출
//! - [`AuthService::validate`](crate::services::auth::AuthService::validate)로 검증
//! - 성공 시 [`AuthenticatedUser`](crate::domain::AuthenticatedUser)를 request extension에 저장
//! - 실패 시 `401 {"error": "Unauthorized"}`로 즉시 응답하고 하위 핸들러를 호출하지 않음
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/users")
//!             .wrap(AuthMiddleware::required(auth_service.clone()))
//!             .service(handlers::users::find_all_users)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
pub use auth_inner::extract_identity;

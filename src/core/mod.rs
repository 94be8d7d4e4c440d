//! # Core Module
//!
//! 서비스 전반에서 공유되는 핵심 구성 요소입니다.
//!
//! ### [`dispatcher`] - 커맨드/쿼리 디스패처
//! - 요청 타입(`TypeId`)별로 정확히 하나의 핸들러를 바인딩
//! - 기동 시 한 번 구성되는 불변 레지스트리
//!
//! ### [`errors`] - 통합 에러 처리
//! - `AppError`: 애플리케이션 전역 에러 타입
//! - Actix-Web `ResponseError` 구현으로 HTTP 상태 코드 매핑
//!
//! ### [`app_state`] - 컴포지션 루트의 공유 상태
//! - 디스패처와 인증 서비스를 `Arc`로 묶어 라우트 구성에 전달

pub mod app_state;
pub mod dispatcher;
pub mod errors;

pub use app_state::AppState;
pub use dispatcher::{Dispatcher, DispatcherBuilder, Request, RequestHandler};
pub use errors::{AppError, AppResult, ErrorContext};

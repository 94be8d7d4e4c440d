//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 커맨드/쿼리로 변환해 디스패처에 넘기고,
//! 결과를 JSON 응답으로 돌려주는 얇은 어댑터 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Dispatcher → UseCases                         ← Application Layer
//! ├─────────────────────────────────────────────┤
//!   AuthService / UserRepository                  ← Service / Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 비즈니스 로직을 갖지 않습니다. 에러는 `AppError`로 그대로 반환되어
//! `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 결정합니다.
//!
//! | 경로 | 핸들러 | 인증 |
//! |------|--------|------|
//! | `POST /auth/login` | [`auth::login`] | 불필요 |
//! | `GET /users` | [`users::find_all_users`] | Bearer |
//! | `GET /users/{id}` | [`users::get_user_by_id`] | Bearer |
//! | `POST /users` | [`users::create_user`] | Bearer |
//! | `PUT /users/{id}` | [`users::update_user_by_id`] | Bearer |
//! | `DELETE /users/{id}` | [`users::delete_user`] | Bearer |

pub mod auth;
pub mod users;

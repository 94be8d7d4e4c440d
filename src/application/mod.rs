//! # Application Layer (Use Cases)
//!
//! 요청 타입마다 하나씩 존재하는 유스케이스(커맨드/쿼리 핸들러)와
//! 이를 디스패처에 등록하는 컴포지션 루트를 제공합니다.
//!
//! ```text
//! HTTP Handler ──▶ Command/Query ──▶ Dispatcher ──▶ UseCase ──▶ AuthService | UserRepository
//!                                                       │
//!                                                       ▼
//!                                                  UserMapper ──▶ UserResponse
//! ```
//!
//! 각 유스케이스는 호출 간 상태가 없고, `Arc`로 공유되는 협력 객체만 가집니다.

use std::sync::Arc;
use crate::core::dispatcher::{Dispatcher, DispatcherBuilder};
use crate::core::errors::AppResult;
use crate::repositories::users::UserRepository;
use crate::services::auth::AuthService;

pub mod auth;
pub mod users;

pub use auth::*;
pub use users::*;

/// 여섯 개의 유스케이스를 등록한 디스패처를 구성합니다.
///
/// 기동 시 한 번만 호출되며, 등록 누락이 있으면 `HandlerNotRegistered`로 실패합니다.
pub fn build_dispatcher(
    user_repo: Arc<dyn UserRepository>,
    auth_service: Arc<AuthService>,
) -> AppResult<Dispatcher> {
    let dispatcher = DispatcherBuilder::new()
        // Auth
        .register::<UserLoginCommand, _>(UserLoginUseCase::new(auth_service))?
        // Users
        .register::<FindAllUsersQuery, _>(FindAllUsersUseCase::new(user_repo.clone()))?
        .register::<GetUserByIdQuery, _>(GetUserByIdUseCase::new(user_repo.clone()))?
        .register::<CreateUserCommand, _>(CreateUserUseCase::new(user_repo.clone()))?
        .register::<UpdateUserByIdCommand, _>(UpdateUserByIdUseCase::new(user_repo.clone()))?
        .register::<DeleteUserCommand, _>(DeleteUserUseCase::new(user_repo))?
        .build();

    verify_registrations(&dispatcher)?;

    log::info!("✅ 디스패처 구성 완료: {:?}", dispatcher.registered_requests());
    Ok(dispatcher)
}

/// 모든 요청 타입에 핸들러가 있는지 기동 시 확인합니다.
pub fn verify_registrations(dispatcher: &Dispatcher) -> AppResult<()> {
    dispatcher.ensure_registered::<UserLoginCommand>()?;
    dispatcher.ensure_registered::<FindAllUsersQuery>()?;
    dispatcher.ensure_registered::<GetUserByIdQuery>()?;
    dispatcher.ensure_registered::<CreateUserCommand>()?;
    dispatcher.ensure_registered::<UpdateUserByIdCommand>()?;
    dispatcher.ensure_registered::<DeleteUserCommand>()?;
    Ok(())
}

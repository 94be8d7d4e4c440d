//! 라우트와 미들웨어가 공유하는 애플리케이션 상태

use std::sync::Arc;
use crate::core::dispatcher::Dispatcher;
use crate::services::auth::AuthService;

/// 프로세스 수명 동안 유지되는 협력 객체 묶음
///
/// `main`(또는 테스트)에서 한 번 구성되며 각 워커는 `Arc`만 복제합니다.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>, auth_service: Arc<AuthService>) -> Self {
        Self {
            dispatcher,
            auth_service,
        }
    }
}

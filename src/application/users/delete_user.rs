use std::sync::Arc;
use async_trait::async_trait;
use crate::core::dispatcher::{Request, RequestHandler};
use crate::core::errors::AppResult;
use crate::repositories::users::UserRepository;

#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub id: String,
}

impl DeleteUserCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for DeleteUserCommand {
    type Output = ();
}

/// 사용자 삭제
///
/// 존재하지 않는 ID도 성공으로 처리합니다 (멱등).
pub struct DeleteUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl RequestHandler<DeleteUserCommand> for DeleteUserUseCase {
    async fn execute(&self, command: DeleteUserCommand) -> AppResult<()> {
        log::debug!("executing DeleteUserUseCase");

        self.user_repo.delete(&command.id).await
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::dispatcher::{Request, RequestHandler};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::response::UserResponse;
use crate::mappers::UserMapper;
use crate::repositories::users::UserRepository;

/// `name`/`email` 전체 교체 (부분 수정 아님)
#[derive(Debug, Clone)]
pub struct UpdateUserByIdCommand {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UpdateUserByIdCommand {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Request for UpdateUserByIdCommand {
    type Output = UserResponse;
}

pub struct UpdateUserByIdUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl UpdateUserByIdUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl RequestHandler<UpdateUserByIdCommand> for UpdateUserByIdUseCase {
    async fn execute(&self, command: UpdateUserByIdCommand) -> AppResult<UserResponse> {
        let UpdateUserByIdCommand { id, name, email } = command;
        log::debug!("executing UpdateUserByIdUseCase");

        let user = self.user_repo
            .update(&id, &name, &email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user is not found for {}", id)))?;

        Ok(UserMapper::to_response(user))
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::dispatcher::{Request, RequestHandler};
use crate::core::errors::AppResult;
use crate::domain::dto::users::response::UserResponse;
use crate::mappers::UserMapper;
use crate::repositories::users::UserRepository;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
}

impl CreateUserCommand {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Request for CreateUserCommand {
    type Output = UserResponse;
}

/// 사용자 생성
///
/// 이메일 중복은 미리 확인하지 않고 저장소의 `DuplicateKey`를 그대로 전달합니다.
pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl RequestHandler<CreateUserCommand> for CreateUserUseCase {
    async fn execute(&self, command: CreateUserCommand) -> AppResult<UserResponse> {
        log::debug!("executing CreateUserUseCase");

        let user = self.user_repo.create(&command.name, &command.email).await?;
        Ok(UserMapper::to_response(user))
    }
}

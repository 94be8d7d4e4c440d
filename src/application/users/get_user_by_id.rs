use std::sync::Arc;
use async_trait::async_trait;
use crate::core::dispatcher::{Request, RequestHandler};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::response::UserResponse;
use crate::mappers::UserMapper;
use crate::repositories::users::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserByIdQuery {
    pub id: String,
}

impl GetUserByIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetUserByIdQuery {
    type Output = UserResponse;
}

pub struct GetUserByIdUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl RequestHandler<GetUserByIdQuery> for GetUserByIdUseCase {
    async fn execute(&self, query: GetUserByIdQuery) -> AppResult<UserResponse> {
        log::debug!("executing GetUserByIdUseCase");

        let user = self.user_repo
            .get_by_id(&query.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user is not found for {}", query.id)))?;

        Ok(UserMapper::to_response(user))
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::dispatcher::{Request, RequestHandler};
use crate::core::errors::AppResult;
use crate::domain::dto::users::response::UserResponse;
use crate::mappers::UserMapper;
use crate::repositories::users::UserRepository;

/// 전체 사용자 조회 (페이징/필터링 없음)
#[derive(Debug, Clone, Default)]
pub struct FindAllUsersQuery;

impl Request for FindAllUsersQuery {
    type Output = Vec<UserResponse>;
}

pub struct FindAllUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl FindAllUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl RequestHandler<FindAllUsersQuery> for FindAllUsersUseCase {
    async fn execute(&self, _query: FindAllUsersQuery) -> AppResult<Vec<UserResponse>> {
        log::debug!("executing FindAllUsersUseCase");

        let users = self.user_repo.find_all().await?;
        Ok(UserMapper::to_responses(users))
    }
}

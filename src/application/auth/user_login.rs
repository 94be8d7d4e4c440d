use std::sync::Arc;
use async_trait::async_trait;
use crate::core::dispatcher::{Request, RequestHandler};
use crate::core::errors::AppResult;
use crate::domain::dto::tokens::AuthTokenResponse;
use crate::services::auth::AuthService;

#[derive(Debug, Clone)]
pub struct UserLoginCommand {
    pub email: String,
    pub password: String,
}

impl UserLoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Request for UserLoginCommand {
    type Output = AuthTokenResponse;
}

pub struct UserLoginUseCase {
    auth_service: Arc<AuthService>,
}

impl UserLoginUseCase {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}

#[async_trait]
impl RequestHandler<UserLoginCommand> for UserLoginUseCase {
    async fn execute(&self, command: UserLoginCommand) -> AppResult<AuthTokenResponse> {
        log::debug!("executing UserLoginUseCase");

        let access_token = self.auth_service.login(&command.email, &command.password)?;
        Ok(AuthTokenResponse::new(access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn use_case() -> (UserLoginUseCase, Arc<AuthService>) {
        let auth_service = Arc::new(AuthService::new("test-secret"));
        (UserLoginUseCase::new(auth_service.clone()), auth_service)
    }

    #[actix_web::test]
    async fn test_login_returns_valid_access_token() {
        let (use_case, auth_service) = use_case();

        let response = use_case.execute(UserLoginCommand::new("abc@gmail.com", "1234")).await.unwrap();

        assert!(!response.access_token.is_empty());
        assert!(auth_service.validate(&response.access_token).is_ok());
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_fails() {
        let (use_case, _) = use_case();

        let result = use_case.execute(UserLoginCommand::new("abc@gmail.com", "password")).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }
}

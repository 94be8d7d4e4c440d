use serde::{Deserialize, Serialize};

/// `POST /auth/login` 성공 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub access_token: String,
}

impl AuthTokenResponse {
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }
}

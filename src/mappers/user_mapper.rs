//! `User` 엔티티를 `UserResponse`로 바꾸는 매퍼
//!
//! 누락 필드는 빈 문자열로 채우므로 부분적으로 기록된 레코드도 응답할 수 있습니다.

use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;

pub struct UserMapper;

impl UserMapper {
    /// 저장된 `User`를 외부 응답 형태로 변환합니다.
    ///
    /// 실패하지 않는 전함수입니다. 부분적으로 기록된 레코드의 누락 필드는 빈 문자열이 됩니다.
    pub fn to_response(user: User) -> UserResponse {
        let User { id, name, email } = user;

        UserResponse {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
        }
    }

    pub fn to_responses(users: Vec<User>) -> Vec<UserResponse> {
        users.into_iter().map(Self::to_response).collect()
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserMapper::to_response(user)
    }
}

use serde::{Deserialize, Serialize};

/// 외부로 노출되는 사용자 표현
///
/// 생성은 [`UserMapper`](crate::mappers::UserMapper)를 통해서만 이루어집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

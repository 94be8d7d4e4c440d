//! 사용자 생성/수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /users`, `PUT /users/{id}` 요청 본문
///
/// 수정 시에도 두 필드를 모두 받아 전체 교체합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

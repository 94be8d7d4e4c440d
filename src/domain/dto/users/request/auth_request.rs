//! 인증 요청관련 DTO

use serde::{Deserialize, Serialize};

/// 로그인 요청 구조체
///
/// 필드 형식 검증을 하지 않습니다. 빈 문자열도 인증 서비스까지 전달되어
/// 자격 증명 불일치(401)로 처리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

//! JWT 액세스 토큰 클레임
//!
//! 서버는 토큰을 저장하지 않으며, 유효성은 서명과 `exp`만으로 판단합니다.

use serde::{Deserialize, Serialize};

/// 액세스 토큰에 담기는 클레임
///
/// 토큰 페이로드의 키 이름은 `email`, `userName`, `iat`, `exp`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,

    #[serde(rename = "userName")]
    pub user_name: String,

    /// 발급 시각 (Unix timestamp)
    pub iat: i64,

    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

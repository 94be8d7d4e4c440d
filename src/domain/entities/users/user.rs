//! User Entity Implementation
//!
//! `users` 컬렉션의 문서 형태입니다. 이메일 유니크 제약은 저장소 인덱스가 보장합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 저장된 사용자 레코드
///
/// `name`/`email`은 필수 값이지만, 부분적으로 기록된 문서도 읽을 수 있도록
/// `Option`으로 역직렬화합니다. 외부로 나갈 때는 매퍼가 빈 문자열로 정규화합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// 아직 저장되지 않은(식별자가 없는) 사용자
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// 식별자를 부여한 사용자
    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("John Doe", "abc@gmail.com");

        assert!(user.id.is_none());
        assert_eq!(user.name.as_deref(), Some("John Doe"));
        assert_eq!(user.email.as_deref(), Some("abc@gmail.com"));
    }

    #[test]
    fn test_serialization_skips_missing_id() {
        let document = bson::to_document(&User::new("John Doe", "abc@gmail.com")).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("email").unwrap(), "abc@gmail.com");
    }

    #[test]
    fn test_partial_document_deserializes() {
        let id = ObjectId::new();
        let user: User = bson::from_document(doc! { "_id": id, "name": "John Doe" }).unwrap();

        assert_eq!(user.id_string(), Some(id.to_hex()));
        assert!(user.email.is_none());
    }
}

//! 인메모리 사용자 리포지토리
//!
//! MongoDB 어댑터와 같은 계약을 따르는 구현입니다. 테스트와 로컬 실행에서 사용합니다.
//! 식별자는 `ObjectId`를 그대로 사용하고, 이메일 유니크 인덱스를 흉내 냅니다.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use super::UserRepository;

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    // ObjectId 순서 = 삽입 순서
    users: Arc<RwLock<BTreeMap<ObjectId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 오염되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 오염되었습니다".to_string()))
    }
}

fn email_taken(users: &BTreeMap<ObjectId, User>, email: &str, except: Option<ObjectId>) -> bool {
    users
        .iter()
        .any(|(id, user)| Some(*id) != except && user.email.as_deref() == Some(email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self.read()?.get(&object_id).cloned())
    }

    async fn create(&self, name: &str, email: &str) -> AppResult<User> {
        let mut users = self.write()?;

        if email_taken(&users, email, None) {
            return Err(AppError::DuplicateKey(format!("이미 사용 중인 이메일입니다: {}", email)));
        }

        let object_id = ObjectId::new();
        let user = User::new(name, email).with_id(object_id);
        users.insert(object_id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: &str, name: &str, email: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut users = self.write()?;

        if !users.contains_key(&object_id) {
            return Ok(None);
        }

        if email_taken(&users, email, Some(object_id)) {
            return Err(AppError::DuplicateKey(format!("이미 사용 중인 이메일입니다: {}", email)));
        }

        let user = User::new(name, email).with_id(object_id);
        users.insert(object_id, user.clone());

        Ok(Some(user))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        if let Ok(object_id) = ObjectId::parse_str(id) {
            self.write()?.remove(&object_id);
        }

        Ok(())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.write()?.clear();
        Ok(())
    }
}

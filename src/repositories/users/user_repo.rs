//! # MongoDB 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 [`UserRepository`] 어댑터입니다.
//!
//! - 이메일 유니크 인덱스(`email_unique`)가 중복을 막는 단일 진실 공급원입니다.
//! - 서버 에러 코드 11000(duplicate key)은 `DuplicateKey`로 변환됩니다.
//! - 잘못된 `ObjectId` 문자열은 "존재하지 않음"으로 취급합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    db::Database,
    domain::entities::users::User,
};
use super::UserRepository;

pub const USER_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USER_COLLECTION)
    }

    /// 이메일 유니크 인덱스를 생성합니다. 기동 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .db_context("이메일 유니크 인덱스 생성 실패")?;

        log::info!("✅ {} 컬렉션 인덱스 준비 완료", USER_COLLECTION);
        Ok(())
    }
}

/// 유니크 인덱스 위반 여부
///
/// `insert_one`은 쓰기 에러로, `find_one_and_update`는 커맨드 에러로 보고됩니다.
fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(error: MongoError, email: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::DuplicateKey(format!("이미 사용 중인 이메일입니다: {}", email))
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(doc! {})
            .await
            .db_context("사용자 목록 조회 실패")?;

        cursor
            .try_collect::<Vec<User>>()
            .await
            .db_context("사용자 목록 커서 읽기 실패")
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .db_context("사용자 조회 실패")
    }

    async fn create(&self, name: &str, email: &str) -> AppResult<User> {
        let mut user = User::new(name, email);

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, email))?;

        let object_id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;

        user.id = Some(object_id);
        Ok(user)
    }

    async fn update(&self, id: &str, name: &str, email: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "name": name, "email": email } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| map_write_error(e, email))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(());
        };

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .db_context("사용자 삭제 실패")?;

        log::debug!("사용자 삭제: {} (삭제된 문서 {}개)", id, result.deleted_count);
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.collection()
            .delete_many(doc! {})
            .await
            .db_context("사용자 전체 삭제 실패")?;

        Ok(())
    }
}

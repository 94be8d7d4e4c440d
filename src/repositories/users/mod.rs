//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`]는 `User` 엔티티의 유일한 영속화 창구입니다.
//! 비즈니스 로직 없이 저장소 호출 하나당 하나의 원자적 연산만 수행합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB `users` 컬렉션 어댑터
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 테스트/로컬 실행용 어댑터
//!
//! ```rust,ignore
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database));
//! let user = user_repo.create("John Doe", "abc@gmail.com").await?;
//! ```

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// `User` CRUD 계약
///
/// 잘못된 형식의 ID는 에러가 아니라 "존재하지 않음"으로 취급합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 모든 사용자를 저장소 고유 순서로 반환합니다. 비어 있으면 빈 벡터입니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// ID로 조회합니다. 없거나 ID 형식이 잘못된 경우 `None`.
    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 새 식별자로 사용자를 생성합니다.
    ///
    /// 이메일이 이미 존재하면 `DuplicateKey`로 실패합니다. 사전 중복 검사는 하지 않습니다.
    async fn create(&self, name: &str, email: &str) -> AppResult<User>;

    /// `name`/`email`을 전체 교체하고 갱신된 레코드를 반환합니다. 없으면 `None`.
    async fn update(&self, id: &str, name: &str, email: &str) -> AppResult<Option<User>>;

    /// 삭제합니다. 존재하지 않는 ID는 조용히 무시합니다.
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// 전체 삭제 (테스트 하네스 전용, HTTP로 노출하지 않음)
    async fn delete_all(&self) -> AppResult<()>;
}

//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 명시적으로 생성되어 `Arc<dyn UserRepository>`로 유스케이스에 주입됩니다.
//! 프로세스 수명 동안 하나의 인스턴스만 사용합니다.

pub mod users;

pub use users::{InMemoryUserRepository, MongoUserRepository, UserRepository};

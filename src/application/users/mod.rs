//! 사용자 관리 유스케이스
//!
//! | 유스케이스 | 요청 | 실패 |
//! |------------|------|------|
//! | [`FindAllUsersUseCase`] | [`FindAllUsersQuery`] | 없음 |
//! | [`GetUserByIdUseCase`] | [`GetUserByIdQuery`] | `NotFound` |
//! | [`CreateUserUseCase`] | [`CreateUserCommand`] | `DuplicateKey` |
//! | [`UpdateUserByIdUseCase`] | [`UpdateUserByIdCommand`] | `NotFound` |
//! | [`DeleteUserUseCase`] | [`DeleteUserCommand`] | 없음 (멱등) |

pub mod create_user;
pub mod delete_user;
pub mod find_all_users;
pub mod get_user_by_id;
pub mod update_user_by_id;

pub use create_user::{CreateUserCommand, CreateUserUseCase};
pub use delete_user::{DeleteUserCommand, DeleteUserUseCase};
pub use find_all_users::{FindAllUsersQuery, FindAllUsersUseCase};
pub use get_user_by_id::{GetUserByIdQuery, GetUserByIdUseCase};
pub use update_user_by_id::{UpdateUserByIdCommand, UpdateUserByIdUseCase};

//! 인증 유스케이스

pub mod user_login;

pub use user_login::{UserLoginCommand, UserLoginUseCase};

//! Users Entity Module
//!
//! `users` 컬렉션에 저장되는 [`User`](user::User) 엔티티를 정의합니다.

pub mod user;

pub use user::User;

//! 서비스 계층 모듈
//!
//! 유스케이스가 조합하는 협력 객체 중 저장소가 아닌 것들을 제공합니다.
//! 현재는 JWT 인증 서비스만 존재합니다.

pub mod auth;

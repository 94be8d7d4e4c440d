//! 영속 엔티티를 응답 DTO로 변환하는 매퍼

pub mod user_mapper;

pub use user_mapper::UserMapper;

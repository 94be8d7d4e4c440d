//! 사용자 인증 및 관리 서비스 백엔드
//!
//! 운영자 계정 로그인으로 JWT를 발급하고, 토큰으로 보호되는 사용자 CRUD API를 제공합니다.
//!
//! # Features
//!
//! - **JWT 인증**: HS256, 1시간 유효, 서버 측 세션 없음
//! - **사용자 관리**: 목록/단건 조회, 생성, 전체 교체 수정, 멱등 삭제
//! - **디스패처**: 요청 타입별로 정확히 하나의 유스케이스에 라우팅
//! - **MongoDB**: 이메일 유니크 인덱스가 중복을 막음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 접근 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 → 커맨드/쿼리 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Dispatcher    │ ← 요청 타입별 유스케이스 선택
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UseCases     │ ← 인증 서비스, 리포지토리, 매퍼 조합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / 인메모리
//! └─────────────────┘
//! ```

pub mod application;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod mappers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;

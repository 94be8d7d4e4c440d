//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! - [`data_config`] - 데이터베이스, 서버, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명 키, 토큰 유효 시간, 운영자 계정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 선택
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_auth_dev"
//! export USER_STORE="mongo"            # memory: MongoDB 없이 로컬 실행
//! export HOST="127.0.0.1"
//! export PORT="3000"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

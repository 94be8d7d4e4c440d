//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스 연결, HTTP 바인딩, Rate Limiting 설정을 환경 변수에서 읽어옵니다.

use std::env;

pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_auth_dev".to_string())
    }
}

/// 사용자 저장소 백엔드
///
/// `USER_STORE=memory`이면 MongoDB 없이 프로세스 메모리에 저장합니다 (재시작 시 소멸).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl StorageBackend {
    pub fn from_env() -> Self {
        Self::from_value(env::var("USER_STORE").ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "memory" => StorageBackend::Memory,
            Some(v) if v.is_empty() || v == "mongo" => StorageBackend::Mongo,
            None => StorageBackend::Mongo,
            Some(other) => {
                log::error!("알 수 없는 USER_STORE 값: {}. 기본값 mongo 사용", other);
                StorageBackend::Mongo
            }
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = parse_or_default("RATE_LIMIT_PER_SECOND", env::var("RATE_LIMIT_PER_SECOND").ok(), 100);
        let burst_size = parse_or_default("RATE_LIMIT_BURST_SIZE", env::var("RATE_LIMIT_BURST_SIZE").ok(), 200);

        let config = Self {
            per_second,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<u64>("X", Some("20".to_string()), 100), 20);
        assert_eq!(parse_or_default::<u64>("X", Some("abc".to_string()), 100), 100);
        assert_eq!(parse_or_default::<u32>("X", None, 200), 200);
    }

    #[test]
    fn test_storage_backend_selection() {
        assert_eq!(StorageBackend::from_value(None), StorageBackend::Mongo);
        assert_eq!(StorageBackend::from_value(Some("mongo")), StorageBackend::Mongo);
        assert_eq!(StorageBackend::from_value(Some("memory")), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_value(Some(" Memory ")), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_value(Some("redis")), StorageBackend::Mongo);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}

use std::sync::Arc;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_auth_backend::application::build_dispatcher;
use user_auth_backend::config::{RateLimitConfig, ServerConfig, StorageBackend};
use user_auth_backend::core::{AppError, AppState};
use user_auth_backend::db::Database;
use user_auth_backend::repositories::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use user_auth_backend::routes::{configure_all_routes, cors_policy};
use user_auth_backend::services::auth::AuthService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 인증 서비스 시작중...");

    let state = initialize_app_state().await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 서명 키, 데이터베이스, 리포지토리, 디스패처를 순서대로 구성합니다.
///
/// 어느 단계든 실패하면 서버를 띄우지 않습니다.
async fn initialize_app_state() -> Result<AppState, AppError> {
    let auth_service = Arc::new(AuthService::from_env()?);

    let user_repo = initialize_user_repository(StorageBackend::from_env()).await?;

    let dispatcher = Arc::new(build_dispatcher(user_repo, auth_service.clone())?);

    Ok(AppState::new(dispatcher, auth_service))
}

async fn initialize_user_repository(backend: StorageBackend) -> Result<Arc<dyn UserRepository>, AppError> {
    match backend {
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);

            let mongo_repo = MongoUserRepository::new(database);
            mongo_repo.create_indexes().await?;
            Ok(Arc::new(mongo_repo))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 사용자 저장소 사용 중: 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors_policy())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &state))
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 표준 에러로 출력
    match profile.as_str() {
        "prod" => if let Err(e) = dotenv::from_filename(".env.prod") {
            eprintln!(".env.prod 파일 로드 실패: {}", e);
        },
        "dev" => if let Err(e) = dotenv::from_filename(".env.dev") {
            eprintln!(".env.dev 파일 로드 실패: {}", e);
        },
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

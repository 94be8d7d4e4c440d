//! Authentication HTTP Handlers
//!
//! 운영자 계정 로그인 엔드포인트입니다. 성공 시 1시간 유효한 HS256 액세스 토큰을 발급합니다.
use actix_web::{post, web, HttpResponse};
use crate::application::UserLoginCommand;
use crate::core::dispatcher::Dispatcher;
use crate::core::errors::AppError;
use crate::domain::LoginRequest;

/// `POST /auth/login`
///
/// 자격 증명이 틀리면 어느 필드가 틀렸는지 알리지 않고 401을 반환합니다.
#[post("/login")]
pub async fn login(
    dispatcher: web::Data<Dispatcher>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { email, password } = payload.into_inner();

    log::debug!("로그인 시도 - 사용자: {}", email);

    let response = dispatcher
        .dispatch(UserLoginCommand::new(email, password))
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

//! 사용자 관리 HTTP 핸들러
//!
//! 모든 엔드포인트는 접근 가드 뒤에 있으며, 요청 주체는 [`AuthenticatedUser`]로 주입됩니다.
use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::application::{
    CreateUserCommand, DeleteUserCommand, FindAllUsersQuery, GetUserByIdQuery, UpdateUserByIdCommand,
};
use crate::core::dispatcher::Dispatcher;
use crate::core::errors::AppError;
use crate::domain::{AuthenticatedUser, UserRequest};

/// `GET /users` - 전체 사용자 목록
#[get("")]
pub async fn find_all_users(
    dispatcher: web::Data<Dispatcher>,
    caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    log::debug!("사용자 목록 조회 - 요청자: {}", caller.email);

    let users = dispatcher.dispatch(FindAllUsersQuery).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// `GET /users/{id}` - 없으면 404
#[get("/{id}")]
pub async fn get_user_by_id(
    dispatcher: web::Data<Dispatcher>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = dispatcher
        .dispatch(GetUserByIdQuery::new(id.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// `POST /users` - 생성 후 201
#[post("")]
pub async fn create_user(
    dispatcher: web::Data<Dispatcher>,
    caller: AuthenticatedUser,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let UserRequest { name, email } = payload.into_inner();
    log::info!("사용자 생성 - 이메일: {}, 요청자: {}", email, caller.email);

    let user = dispatcher
        .dispatch(CreateUserCommand::new(name, email))
        .await?;

    Ok(HttpResponse::Created().json(user))
}

/// `PUT /users/{id}` - 이름과 이메일 전체 교체
#[put("/{id}")]
pub async fn update_user_by_id(
    dispatcher: web::Data<Dispatcher>,
    caller: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let id = id.into_inner();
    let UserRequest { name, email } = payload.into_inner();
    log::info!("사용자 수정 - ID: {}, 요청자: {}", id, caller.email);

    let user = dispatcher
        .dispatch(UpdateUserByIdCommand::new(id, name, email))
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// `DELETE /users/{id}` - 존재 여부와 무관하게 204
#[delete("/{id}")]
pub async fn delete_user(
    dispatcher: web::Data<Dispatcher>,
    caller: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    log::info!("사용자 삭제 - ID: {}, 요청자: {}", id, caller.email);

    dispatcher.dispatch(DeleteUserCommand::new(id)).await?;

    Ok(HttpResponse::NoContent().finish())
}

//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::errors::{AppError, AppResult, UNAUTHORIZED_MESSAGE};
use crate::domain::AuthenticatedUser;
use crate::services::auth::AuthService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub auth_service: Arc<AuthService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let auth_service = self.auth_service.clone();

        Box::pin(async move {
            let auth_header = req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok());

            match extract_identity(auth_header, &auth_service) {
                Ok(user) => {
                    log::debug!("인증 성공: {}", user.email);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({ "error": UNAUTHORIZED_MESSAGE }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization` 헤더 값에서 요청 주체를 추출합니다.
///
/// 헤더 누락, `Bearer ` 접두사 누락, 빈 토큰, 검증 실패는 모두 `InvalidToken`입니다.
pub fn extract_identity(auth_header: Option<&str>, auth_service: &AuthService) -> AppResult<AuthenticatedUser> {
    let auth_header = auth_header
        .ok_or_else(|| AppError::InvalidToken("Authorization 헤더가 없습니다".to_string()))?;

    let token = auth_service.extract_bearer_token(auth_header)?;
    auth_service.validate(token)
}

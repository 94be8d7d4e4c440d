//! JWT 접근 가드 미들웨어
//!
//! 보호된 스코프를 감싸 유효한 Bearer 토큰이 없는 요청을 차단합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::AuthService;

/// JWT 접근 가드
///
/// 검증에 쓰는 [`AuthService`]는 `Arc`로 공유되며, 워커마다 복제됩니다.
#[derive(Clone)]
pub struct AuthMiddleware {
    auth_service: Arc<AuthService>,
}

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            auth_service: self.auth_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::{header, StatusCode}, test, web, App, HttpResponse};
    use crate::domain::AuthenticatedUser;

    const SECRET: &str = "guard-test-secret";

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_name)
    }

    fn auth_service() -> Arc<AuthService> {
        Arc::new(AuthService::new(SECRET))
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let auth = auth_service();
        let token = auth.login("abc@gmail.com", "1234").unwrap();
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(auth.clone()))
                    .service(whoami),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/protected/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "admin");
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(auth_service()))
                    .service(whoami),
            ),
        ).await;

        let req = test::TestRequest::get().uri("/protected/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));
    }

    #[actix_web::test]
    async fn test_token_from_other_secret_is_rejected() {
        let foreign = AuthService::new("some-other-secret")
            .login("abc@gmail.com", "1234")
            .unwrap();
        let app = test::init_service(
            App::new().service(
                web::scope("/protected")
                    .wrap(AuthMiddleware::required(auth_service()))
                    .service(whoami),
            ),
        ).await;

        let req = test::TestRequest::get()
            .uri("/protected/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", foreign)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

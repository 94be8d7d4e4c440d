//! # Command/Query Dispatcher
//!
//! 타입이 지정된 요청 객체(커맨드/쿼리)를 단 하나의 핸들러로 라우팅하는 디스패처입니다.
//!
//! ## 동작 방식
//!
//! - 핸들러 레지스트리는 `TypeId`를 키로 사용하며, 요청 타입마다 정확히 하나의 핸들러만 등록됩니다.
//! - 레지스트리는 기동 시 [`DispatcherBuilder`]로 한 번 구성되고, 이후에는 읽기 전용입니다.
//! - `dispatch`는 재시도나 타임아웃 없이 핸들러의 결과 또는 에러를 그대로 전달합니다.
//!
//! ```rust,ignore
//! let dispatcher = DispatcherBuilder::new()
//!     .register::<GetUserByIdQuery, _>(GetUserByIdUseCase::new(user_repo.clone()))?
//!     .build();
//!
//! let user = dispatcher.dispatch(GetUserByIdQuery::new(id)).await?;
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};

/// 디스패처로 전달되는 요청 객체
///
/// 요청 타입 자체가 라우팅 키이며, `Output`은 해당 핸들러의 성공 결과 타입입니다.
pub trait Request: Send + 'static {
    type Output: Send + 'static;
}

/// 하나의 요청 타입을 처리하는 핸들러
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn execute(&self, request: R) -> AppResult<R::Output>;
}

type HandlerRef<R> = Arc<dyn RequestHandler<R>>;

struct Registration {
    request_name: &'static str,
    handler: Box<dyn Any + Send + Sync>,
}

/// 핸들러 레지스트리를 구성하는 빌더
#[derive(Default)]
pub struct DispatcherBuilder {
    handlers: HashMap<TypeId, Registration>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 요청 타입 `R`에 핸들러를 바인딩합니다.
    ///
    /// 같은 타입에 두 번째 핸들러를 등록하려 하면 `ConfigError`를 반환합니다.
    pub fn register<R, H>(mut self, handler: H) -> AppResult<Self>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let type_id = TypeId::of::<R>();
        let request_name = type_name::<R>();

        if self.handlers.contains_key(&type_id) {
            return Err(AppError::ConfigError(format!(
                "{} 타입에 이미 핸들러가 등록되어 있습니다",
                request_name
            )));
        }

        let handler: HandlerRef<R> = Arc::new(handler);
        self.handlers.insert(type_id, Registration {
            request_name,
            handler: Box::new(handler),
        });

        log::debug!("핸들러 등록: {}", request_name);
        Ok(self)
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            handlers: self.handlers,
        }
    }
}

/// 불변 핸들러 레지스트리를 소유하는 디스패처
///
/// 워커 간에 `Arc<Dispatcher>`로 공유되며, 런타임 등록은 지원하지 않습니다.
pub struct Dispatcher {
    handlers: HashMap<TypeId, Registration>,
}

impl Dispatcher {
    /// 요청을 타입에 맞는 핸들러로 전달하고 결과를 그대로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `HandlerNotRegistered` - 해당 요청 타입의 핸들러가 없는 경우
    /// * 그 외 핸들러가 반환한 모든 에러
    pub async fn dispatch<R: Request>(&self, request: R) -> AppResult<R::Output> {
        let handler = self.handler_for::<R>()?;
        handler.execute(request).await
    }

    /// 요청 타입 `R`의 핸들러가 등록되어 있는지 확인합니다.
    pub fn is_registered<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    /// 기동 시 검증용: 핸들러가 없으면 `HandlerNotRegistered`를 반환합니다.
    pub fn ensure_registered<R: Request>(&self) -> AppResult<()> {
        if self.is_registered::<R>() {
            Ok(())
        } else {
            Err(AppError::HandlerNotRegistered(type_name::<R>()))
        }
    }

    /// 등록된 요청 타입 이름 목록
    pub fn registered_requests(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers
            .values()
            .map(|registration| registration.request_name)
            .collect();
        names.sort_unstable();
        names
    }

    fn handler_for<R: Request>(&self) -> AppResult<HandlerRef<R>> {
        self.handlers
            .get(&TypeId::of::<R>())
            .and_then(|registration| registration.handler.downcast_ref::<HandlerRef<R>>())
            .cloned()
            .ok_or_else(|| AppError::HandlerNotRegistered(type_name::<R>()))
    }
}

//! Request mediator.
//!
//! Every request type is paired with exactly one handler. Handlers are
//! registered explicitly at startup; dispatch looks the handler up by the
//! request's `TypeId`.

use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

use async_trait::async_trait;

use super::error::AppError;

/// A query or command routed through the mediator.
pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    async fn handle(&self, request: R) -> Result<R::Response, AppError>;
}

type Registry = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

#[derive(Default)]
pub struct MediatorBuilder {
    handlers: Registry,
}

impl MediatorBuilder {
    /// Registers `handler` for request type `R`, replacing any earlier registration.
    pub fn register<R, H>(mut self, handler: Arc<H>) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        let handler: Arc<dyn RequestHandler<R>> = handler;
        self.handlers.insert(TypeId::of::<R>(), Box::new(handler));
        self
    }

    pub fn build(self) -> Mediator {
        Mediator {
            handlers: Arc::new(self.handlers),
        }
    }
}

#[derive(Clone)]
pub struct Mediator {
    handlers: Arc<Registry>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    pub fn is_registered<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, AppError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .cloned()
            .ok_or(AppError::Registration(type_name::<R>()))?;

        handler.handle(request).await
    }
}

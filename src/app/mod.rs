//! Application layer: state, mediator wiring and the HTTP router.

pub mod dummy;
pub mod health;
pub mod products;

use std::{sync::Arc, time::Duration};

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::{mediator::Mediator, middleware::request_logging_middleware};
use dummy::{GetRandomNumber, RandomNumberHandler};
use products::{
    commands::{AddProduct, DeleteProduct, ProductCommandHandler, UpdateProduct},
    handler::ADMIN_PRODUCTS_PATH,
    queries::{GetAll, GetById, ProductQueryHandler},
    user_handler::USER_PRODUCTS_PATH,
    ProductStore,
};

#[derive(Clone)]
pub struct AppState {
    pub mediator: Mediator,
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            mediator: build_mediator(store.clone()),
            store,
        }
    }
}

/// Registers every request type with its handler.
pub fn build_mediator(store: Arc<dyn ProductStore>) -> Mediator {
    let queries = Arc::new(ProductQueryHandler::new(store.clone()));
    let commands = Arc::new(ProductCommandHandler::new(store));

    Mediator::builder()
        .register::<GetAll, _>(queries.clone())
        .register::<GetById, _>(queries)
        .register::<AddProduct, _>(commands.clone())
        .register::<UpdateProduct, _>(commands.clone())
        .register::<DeleteProduct, _>(commands)
        .register::<GetRandomNumber, _>(Arc::new(RandomNumberHandler))
        .build()
}

/// Routes without middleware.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .nest(ADMIN_PRODUCTS_PATH, products::handler::routes())
        .nest(USER_PRODUCTS_PATH, products::user_handler::routes())
        .nest(dummy::DUMMY_PATH, dummy::routes())
        .merge(health::routes())
        .with_state(state)
}

/// Full application router with logging, tracing, CORS and timeout layers.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

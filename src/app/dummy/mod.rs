//! Random number query, a minimal end-to-end exercise of the mediator.

use async_trait::async_trait;
use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};
use rand::Rng;
use serde::Deserialize;

use crate::app::AppState;
use crate::core::{
    error::AppError,
    mediator::{Request, RequestHandler},
    result::{execute_and_respond, RespondOptions},
};

pub const DUMMY_PATH: &str = "/api/dummy";

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRandomNumber {
    #[serde(default = "default_max_value")]
    pub max_value: f64,
}

impl Default for GetRandomNumber {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
        }
    }
}

fn default_max_value() -> f64 {
    10.0
}

impl Request for GetRandomNumber {
    type Response = f64;
}

pub struct RandomNumberHandler;

#[async_trait]
impl RequestHandler<GetRandomNumber> for RandomNumberHandler {
    async fn handle(&self, request: GetRandomNumber) -> Result<f64, AppError> {
        // NaN fails this check too
        if !(request.max_value > 0.0) {
            return Err(AppError::InvalidArgument(
                "MaxValue must be greater than 0.".to_string(),
            ));
        }
        Ok(rand::thread_rng().gen::<f64>() * request.max_value)
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/random", get(get_random_number))
}

pub async fn get_random_number(
    State(state): State<AppState>,
    Query(request): Query<GetRandomNumber>,
) -> Response {
    execute_and_respond(&state.mediator, request, RespondOptions::default()).await
}

//! Read-only product endpoints for users, answering with [`ProductDto`].

use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

use super::{
    model::{ProductDto, ProductId},
    queries::{GetAll, GetById},
};
use crate::app::AppState;
use crate::core::result::{execute_map_and_respond, RespondOptions};

pub const USER_PRODUCTS_PATH: &str = "/api/user/products";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_products))
        .route("/:id", get(get_product_by_id))
}

pub async fn get_all_products(State(state): State<AppState>) -> Response {
    execute_map_and_respond::<_, Vec<ProductDto>>(&state.mediator, GetAll, RespondOptions::default())
        .await
}

pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Response {
    execute_map_and_respond::<_, ProductDto>(
        &state.mediator,
        GetById { id },
        RespondOptions::not_found_on_empty(),
    )
    .await
}

//! Admin product endpoints under `/api/admin/products`.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::{
    commands::{AddProduct, DeleteProduct, UpdateProduct},
    model::{Product, ProductId},
    queries::{GetAll, GetById},
};
use crate::app::AppState;
use crate::core::{
    error::AppError,
    result::{dispatch, execute_and_respond, RespondOptions},
};

pub const ADMIN_PRODUCTS_PATH: &str = "/api/admin/products";

/// Product request body. `None` only when the request carries no body at all;
/// a body that fails to parse is rejected as an invalid argument.
pub struct ProductBody(pub Option<Product>);

#[async_trait]
impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            return Json::<Product>::from_request(req, state)
                .await
                .map(|Json(product)| ProductBody(Some(product)))
                .map_err(|rejection| AppError::InvalidArgument(rejection.body_text()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidArgument(rejection.body_text()))?;
        if bytes.is_empty() {
            Ok(ProductBody(None))
        } else {
            Err(AppError::InvalidArgument(
                "Expected request with `Content-Type: application/json`".to_string(),
            ))
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_products).post(create_product))
        .route(
            "/:id",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
}

pub async fn get_all_products(State(state): State<AppState>) -> Response {
    execute_and_respond(&state.mediator, GetAll, RespondOptions::default()).await
}

pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Response {
    execute_and_respond(&state.mediator, GetById { id }, RespondOptions::not_found_on_empty()).await
}

/// 201 pointing at the new product's get-by-id route.
pub async fn create_product(
    State(state): State<AppState>,
    ProductBody(product): ProductBody,
) -> Result<Response, AppError> {
    let created = dispatch(&state.mediator, AddProduct { product }).await?;

    let location = format!("{ADMIN_PRODUCTS_PATH}/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    ProductBody(product): ProductBody,
) -> Result<StatusCode, AppError> {
    let product =
        product.ok_or_else(|| AppError::InvalidArgument("Product cannot be null.".to_string()))?;
    if id != product.id {
        return Err(AppError::InvalidOperation(format!(
            "route id {id} does not match product id {}",
            product.id
        )));
    }

    match dispatch(&state.mediator, UpdateProduct { product }).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Ok(StatusCode::NOT_FOUND),
    }
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode, AppError> {
    let removed = dispatch(&state.mediator, DeleteProduct { product_id: id }).await?;
    Ok(if removed {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    })
}

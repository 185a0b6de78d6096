//! Product read queries

use std::sync::Arc;

use async_trait::async_trait;

use super::{
    model::{Product, ProductId},
    store::ProductStore,
};
use crate::core::{error::AppError, mediator::Request, mediator::RequestHandler};

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAll;

impl Request for GetAll {
    type Response = Vec<Product>;
}

#[derive(Debug, Clone, Copy)]
pub struct GetById {
    pub id: ProductId,
}

impl Request for GetById {
    type Response = Option<Product>;
}

pub struct ProductQueryHandler {
    store: Arc<dyn ProductStore>,
}

impl ProductQueryHandler {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RequestHandler<GetAll> for ProductQueryHandler {
    async fn handle(&self, _request: GetAll) -> Result<Vec<Product>, AppError> {
        Ok(self.store.get_all().await)
    }
}

#[async_trait]
impl RequestHandler<GetById> for ProductQueryHandler {
    async fn handle(&self, request: GetById) -> Result<Option<Product>, AppError> {
        Ok(self.store.get_by_id(request.id).await)
    }
}

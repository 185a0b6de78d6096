//! Product write commands

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use validator::Validate;

use super::{
    model::{Product, ProductId},
    store::ProductStore,
};
use crate::core::{error::AppError, mediator::Request, mediator::RequestHandler};

/// Create a product. `None` models a request without a product body.
#[derive(Debug, Clone)]
pub struct AddProduct {
    pub product: Option<Product>,
}

impl Request for AddProduct {
    type Response = Product;
}

#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub product: Product,
}

impl Request for UpdateProduct {
    type Response = Option<Product>;
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteProduct {
    pub product_id: ProductId,
}

impl Request for DeleteProduct {
    type Response = bool;
}

pub struct ProductCommandHandler {
    store: Arc<dyn ProductStore>,
}

impl ProductCommandHandler {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RequestHandler<AddProduct> for ProductCommandHandler {
    async fn handle(&self, request: AddProduct) -> Result<Product, AppError> {
        let product = request
            .product
            .ok_or_else(|| AppError::InvalidArgument("Product cannot be null.".to_string()))?;
        product.validate()?;

        let created = self.store.add(product).await?;
        info!(product_id = created.id, name = %created.name, "product created");
        Ok(created)
    }
}

#[async_trait]
impl RequestHandler<UpdateProduct> for ProductCommandHandler {
    async fn handle(&self, request: UpdateProduct) -> Result<Option<Product>, AppError> {
        Ok(self.store.update(request.product).await)
    }
}

#[async_trait]
impl RequestHandler<DeleteProduct> for ProductCommandHandler {
    async fn handle(&self, request: DeleteProduct) -> Result<bool, AppError> {
        Ok(self.store.delete(request.product_id).await)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::app::products::{
        queries::{GetAll, GetById, ProductQueryHandler},
        store::InMemoryProductStore,
    };
    use crate::core::mediator::Mediator;

    fn mediator(store: Arc<InMemoryProductStore>) -> Mediator {
        let commands = Arc::new(ProductCommandHandler::new(store.clone()));
        let queries = Arc::new(ProductQueryHandler::new(store));
        Mediator::builder()
            .register::<AddProduct, _>(commands.clone())
            .register::<UpdateProduct, _>(commands.clone())
            .register::<DeleteProduct, _>(commands)
            .register::<GetAll, _>(queries.clone())
            .register::<GetById, _>(queries)
            .build()
    }

    fn add(product: Product) -> AddProduct {
        AddProduct {
            product: Some(product),
        }
    }

    #[tokio::test]
    async fn add_to_empty_store_then_get_all() {
        let store = Arc::new(InMemoryProductStore::new());
        let mediator = mediator(store);

        let created = mediator
            .send(add(Product::new("Laptop", Decimal::from(1200))))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let all = mediator.send(GetAll).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].name, "Laptop");
        assert_eq!(all[0].price, Decimal::from(1200));
    }

    #[tokio::test]
    async fn get_by_id_returns_what_was_added() {
        let mediator = mediator(Arc::new(InMemoryProductStore::seeded()));

        let created = mediator
            .send(add(Product::new("Keyboard", Decimal::from(80))))
            .await
            .unwrap();
        let found = mediator.send(GetById { id: created.id }).await.unwrap();

        assert_eq!(found, Some(created));
        assert_eq!(mediator.send(GetById { id: 999 }).await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_product_is_an_invalid_argument() {
        let store = Arc::new(InMemoryProductStore::seeded());
        let mediator = mediator(store.clone());

        let err = mediator.send(AddProduct { product: None }).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn blank_name_or_negative_price_is_rejected_without_touching_the_store() {
        let store = Arc::new(InMemoryProductStore::seeded());
        let mediator = mediator(store.clone());

        for product in [
            Product::new("", Decimal::from(10)),
            Product::new("  \t", Decimal::from(10)),
            Product::new("Mouse pad", Decimal::new(-1, 2)),
        ] {
            let err = mediator.send(add(product)).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "unexpected: {err:?}");
        }

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_products() {
        let store = Arc::new(InMemoryProductStore::seeded());
        let mediator = mediator(store.clone());

        let updated = mediator
            .send(UpdateProduct {
                product: Product::new("Ghost", Decimal::ONE).with_id(50),
            })
            .await
            .unwrap();
        assert_eq!(updated, None);

        assert!(!mediator.send(DeleteProduct { product_id: 50 }).await.unwrap());
        assert!(mediator.send(DeleteProduct { product_id: 1 }).await.unwrap());

        let remaining = mediator.send(GetAll).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }
}

//! Product storage.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::model::{Product, ProductId};
use crate::core::error::AppError;

/// Storage seam for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_all(&self) -> Vec<Product>;
    async fn get_by_id(&self, id: ProductId) -> Option<Product>;
    /// Assigns a fresh id, appends the product and returns the stored record.
    /// Fails once the id space is exhausted.
    async fn add(&self, product: Product) -> Result<Product, AppError>;
    /// Overwrites name and price of the stored product with the same id.
    async fn update(&self, product: Product) -> Option<Product>;
    /// Removes every product with `id`; true if anything was removed.
    async fn delete(&self, id: ProductId) -> bool;
}

#[derive(Default)]
struct Inventory {
    products: Vec<Product>,
    /// Highest id ever issued, so deleted ids are never handed out again.
    last_issued: ProductId,
}

/// Ordered in-memory product list with linear-scan lookups.
#[derive(Default)]
pub struct InMemoryProductStore {
    inventory: RwLock<Inventory>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let last_issued = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            inventory: RwLock::new(Inventory {
                products,
                last_issued,
            }),
        }
    }

    /// Store holding the two sample products.
    pub fn seeded() -> Self {
        Self::with_products(vec![
            Product::new("Laptop", Decimal::from(1200)).with_id(1),
            Product::new("Mouse", Decimal::from(25)).with_id(2),
        ])
    }

    pub async fn len(&self) -> usize {
        self.inventory.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get_all(&self) -> Vec<Product> {
        self.inventory.read().await.products.clone()
    }

    async fn get_by_id(&self, id: ProductId) -> Option<Product> {
        let inventory = self.inventory.read().await;
        inventory.products.iter().find(|p| p.id == id).cloned()
    }

    async fn add(&self, mut product: Product) -> Result<Product, AppError> {
        let mut inventory = self.inventory.write().await;
        let current_max = inventory.products.iter().map(|p| p.id).max().unwrap_or(0);
        product.id = current_max
            .max(inventory.last_issued)
            .checked_add(1)
            .ok_or_else(|| AppError::InvalidOperation("no product ids left to assign".to_string()))?;
        inventory.last_issued = product.id;
        inventory.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Option<Product> {
        let mut inventory = self.inventory.write().await;
        let existing = inventory.products.iter_mut().find(|p| p.id == product.id)?;
        existing.name = product.name;
        existing.price = product.price;
        Some(existing.clone())
    }

    async fn delete(&self, id: ProductId) -> bool {
        let mut inventory = self.inventory.write().await;
        let before = inventory.products.len();
        inventory.products.retain(|p| p.id != id);
        inventory.products.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new("Laptop", Decimal::from(1200))
    }

    #[tokio::test]
    async fn first_product_in_empty_store_gets_id_one() {
        let store = InMemoryProductStore::new();

        let stored = store.add(laptop()).await.unwrap();

        assert_eq!(stored.id, 1);
        let all = store.get_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Laptop");
        assert_eq!(all[0].price, Decimal::from(1200));
    }

    #[tokio::test]
    async fn add_assigns_max_plus_one_and_ignores_incoming_id() {
        let store = InMemoryProductStore::seeded();

        let stored = store.add(laptop().with_id(42)).await.unwrap();

        assert_eq!(stored.id, 3);
        assert_eq!(store.len().await, 3);
        assert_eq!(store.get_by_id(3).await, Some(stored));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = InMemoryProductStore::seeded();
        assert!(store.delete(2).await);

        let stored = store.add(laptop()).await.unwrap();

        assert_eq!(stored.id, 3);
    }

    #[tokio::test]
    async fn add_fails_when_ids_are_exhausted() {
        let store = InMemoryProductStore::with_products(vec![laptop().with_id(ProductId::MAX)]);

        let err = store.add(laptop()).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidOperation(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_none() {
        let store = InMemoryProductStore::seeded();
        assert_eq!(store.get_by_id(999).await, None);
    }

    #[tokio::test]
    async fn update_changes_only_name_and_price() {
        let mut original = laptop();
        original.category = Some("Computers".to_string());
        original.stock_quantity = 5;
        let store = InMemoryProductStore::with_products(vec![original.with_id(1)]);

        let mut change = Product::new("Gaming Laptop", Decimal::from(1500)).with_id(1);
        change.category = Some("Games".to_string());
        change.stock_quantity = 99;
        change.discount = Decimal::new(5, 1);

        let updated = store.update(change).await.expect("product exists");

        assert_eq!(updated.name, "Gaming Laptop");
        assert_eq!(updated.price, Decimal::from(1500));
        assert_eq!(updated.category.as_deref(), Some("Computers"));
        assert_eq!(updated.stock_quantity, 5);
        assert_eq!(updated.discount, Decimal::new(2, 1));
        assert_eq!(store.get_by_id(1).await, Some(updated));
    }

    #[tokio::test]
    async fn update_of_unknown_id_leaves_store_unchanged() {
        let store = InMemoryProductStore::seeded();
        let before = store.get_all().await;

        assert_eq!(store.update(laptop().with_id(9)).await, None);
        assert_eq!(store.get_all().await, before);
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_matching_product() {
        let store = InMemoryProductStore::seeded();

        assert!(store.delete(1).await);

        let remaining = store.get_all().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_returns_false() {
        let store = InMemoryProductStore::seeded();

        assert!(!store.delete(7).await);
        assert_eq!(store.len().await, 2);
    }
}

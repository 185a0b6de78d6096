//! Product data model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::mapping::Project;

pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store on creation.
    #[serde(default)]
    pub id: ProductId,
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    /// Fraction taken off `price`, e.g. 0.2 for 20%.
    #[serde(default = "default_discount")]
    pub discount: Decimal,
    #[serde(default)]
    pub stock_quantity: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: None,
            price,
            discount: default_discount(),
            stock_quantity: 0,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    pub fn discounted_price(&self) -> Decimal {
        self.price * (Decimal::ONE - self.discount)
    }
}

fn default_discount() -> Decimal {
    Decimal::new(2, 1)
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("blank_name");
        error.message = Some("Product name cannot be empty.".into());
        return Err(error);
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut error = ValidationError::new("negative_price");
        error.message = Some("Product price cannot be negative.".into());
        return Err(error);
    }
    Ok(())
}

/// Read-only projection of a product; the discount itself is hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub discounted_price: Decimal,
}

impl Project<ProductDto> for Product {
    fn project(self) -> ProductDto {
        ProductDto {
            discounted_price: self.discounted_price(),
            id: self.id,
            name: self.name,
            price: self.price,
        }
    }
}

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Category;

/// Full replacement of a stored product's mutable fields.
///
/// `id` mirrors [`Product::id`]; a missing id is rejected before the store is touched.
pub struct UpdateProductParams {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

impl From<Product> for UpdateProductParams {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            available: product.available,
            category: product.category,
        }
    }
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::Category;

/// Persistence port for [`Product`].
///
/// Implementations run each call as a single implicit transaction.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new row and returns the identifier assigned by the store.
    async fn create(&self, product: &Product) -> Result<i64, RepositoryError>;
    /// Overwrites the row `id`; `RepositoryError::NotFound` when it does not exist.
    async fn update(&self, id: i64, product: &Product) -> Result<(), RepositoryError>;
    /// Removes the row `id`. Deleting a missing row is not an error.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_availability(&self, available: bool)
    -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category(&self, category: Category)
    -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError>;
}

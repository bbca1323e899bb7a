use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, ValidationError};
use crate::domain::product::model::{Product, validate_price};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let Some(id) = params.id else {
            self.logger
                .warn(&format!("Update called without id for product: {}", params.name));
            return Err(ValidationError::IdNotProvided.into());
        };

        self.logger.info(&format!("Updating product: {}", id));

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        validate_price(&params.price)?;

        let product = Product::from_repository(
            id,
            params.name,
            params.description,
            params.price,
            params.available,
            params.category,
        );

        self.repository
            .update(id, &product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product updated: {}", id));
        Ok(product)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let mut product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            available: params.available,
            category: params.category,
        })?;

        let id = self.repository.create(&product).await.inspect_err(|e| {
            self.logger
                .error(&format!("Failed to create product {}: {}", product.name, e))
        })?;
        product.id = Some(id);

        self.logger.info(&format!("Product created with id: {}", id));
        Ok(product)
    }
}

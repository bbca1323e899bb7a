use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self.repository.find(params.id).await?;

        if product.is_none() {
            self.logger
                .debug(&format!("No product with id: {}", params.id));
        }
        Ok(product)
    }
}

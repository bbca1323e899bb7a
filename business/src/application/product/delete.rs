use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, ValidationError};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        let id = params.id.ok_or(ValidationError::IdNotProvided)?;

        self.logger.info(&format!("Deleting product: {}", id));

        // Missing rows are not an error.
        self.repository.delete(id).await?;

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(())
    }
}

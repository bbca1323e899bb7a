use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{ProductFilter, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Searching products by {}", filter));

        let products = match &filter {
            ProductFilter::Name(name) => self.repository.find_by_name(name).await?,
            ProductFilter::Availability(available) => {
                self.repository.find_by_availability(*available).await?
            }
            ProductFilter::Category(category) => {
                self.repository.find_by_category(*category).await?
            }
            ProductFilter::Price(price) => self.repository.find_by_price(price).await?,
        };

        self.logger.info(&format!(
            "Found {} products matching {}",
            products.len(),
            filter
        ));
        Ok(products)
    }
}

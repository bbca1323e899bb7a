use std::fmt;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::record::parse_price;
use crate::domain::product::value_objects::Category;

/// Single-attribute equality filter over stored products.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    Name(String),
    Availability(bool),
    Category(Category),
    Price(BigDecimal),
}

impl ProductFilter {
    /// Price filter from user-supplied text such as `"12.50"` or `12.50`.
    pub fn price_from_text(raw: &str) -> Result<Self, ProductError> {
        Ok(ProductFilter::Price(parse_price(raw)?))
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::Name(name) => &product.name == name,
            ProductFilter::Availability(available) => product.available == *available,
            ProductFilter::Category(category) => product.category == *category,
            ProductFilter::Price(price) => &product.price == price,
        }
    }
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductFilter::Name(name) => write!(f, "name={}", name),
            ProductFilter::Availability(available) => write!(f, "available={}", available),
            ProductFilter::Category(category) => write!(f, "category={}", category),
            ProductFilter::Price(price) => write!(f, "price={}", price),
        }
    }
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError>;
}

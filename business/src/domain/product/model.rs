use std::fmt;

use bigdecimal::BigDecimal;

use super::errors::{ProductError, ValidationError};
use super::value_objects::Category;

/// Digits kept after the decimal point (`NUMERIC(14, 2)`).
pub const PRICE_SCALE: i64 = 2;
/// Digits allowed before the decimal point.
const PRICE_INTEGER_DIGITS: u32 = 12;

/// Rejects prices the store cannot hold exactly: more than two significant
/// decimals, or an absolute value of 10^12 or more.
pub fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    if price.with_scale(PRICE_SCALE) != *price {
        return Err(ValidationError::InvalidPrice(price.to_string()));
    }
    if price.abs() >= BigDecimal::from(10u64.pow(PRICE_INTEGER_DIGITS)) {
        return Err(ValidationError::InvalidPrice(price.to_string()));
    }
    Ok(())
}

/// A sellable item.
///
/// `id` is `None` until the product has been persisted; the store assigns it
/// on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        validate_price(&props.price)?;

        Ok(Self {
            id: None,
            name: props.name,
            description: props.description,
            price: props.price,
            available: props.available,
            category: props.category,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        description: String,
        price: BigDecimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            description,
            price,
            available,
            category,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

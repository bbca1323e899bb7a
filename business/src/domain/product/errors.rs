use crate::domain::errors::RepositoryError;

/// Input or state validation failures, raised before or instead of a
/// persistence attempt.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product.id_not_provided")]
    IdNotProvided,
    #[error("product.record_not_an_object")]
    NotAnObject,
    #[error("product.missing_field: {0}")]
    MissingField(&'static str),
    #[error("product.invalid_available: expected boolean, got {0}")]
    InvalidAvailable(&'static str),
    #[error("product.invalid_category: {0}")]
    InvalidCategory(String),
    #[error("product.invalid_price: {0}")]
    InvalidPrice(String),
    #[error("product.invalid_field: {0}")]
    InvalidField(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// True for failures detected before reaching the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, ProductError::NameEmpty | ProductError::Validation(_))
    }
}

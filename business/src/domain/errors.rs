/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// No row matched the given identifier.
    #[error("repository.not_found")]
    NotFound,
    /// The store rejected the write (check, not-null or length constraint).
    #[error("repository.persistence")]
    Persistence,
    /// A unique constraint was violated.
    #[error("repository.duplicated")]
    Duplicated,
    /// Connection, protocol or any other driver failure.
    #[error("repository.database_error")]
    DatabaseError,
}

use business::domain::errors::RepositoryError;

/// Maps a PostgreSQL SQLSTATE code to the repository error it represents.
pub fn classify_sqlstate(code: &str) -> RepositoryError {
    match code {
        "23505" => RepositoryError::Duplicated,
        // integrity constraint violations, value too long, numeric out of range
        c if c.starts_with("23") => RepositoryError::Persistence,
        "22001" | "22003" => RepositoryError::Persistence,
        _ => RepositoryError::DatabaseError,
    }
}

/// Converts a driver error into a [`RepositoryError`], logging the failure.
pub fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    let mapped = match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .map(|code| classify_sqlstate(code.as_ref()))
            .unwrap_or(RepositoryError::DatabaseError),
        _ => RepositoryError::DatabaseError,
    };
    tracing::error!(operation, error = %err, kind = %mapped, "product statement failed");
    mapped
}

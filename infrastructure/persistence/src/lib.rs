pub mod db;
pub mod course {
    pub mod entity;
    pub mod repository;
}
pub mod completion {
    pub mod entity;
    pub mod repository;
}

/// Logs the driver error and hides it behind the domain error.
pub(crate) fn database_error(err: sqlx::Error) -> business::domain::errors::RepositoryError {
    tracing::error!(error = %err, "database query failed");
    business::domain::errors::RepositoryError::DatabaseError
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Map PostgreSQL integrity errors (SQLSTATE 23505 unique violation,
    /// 23503 foreign-key violation) onto `ConstraintViolation` with a
    /// caller-supplied message, leaving everything else untouched.
    pub fn on_constraint(error: sqlx::Error, message: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = error {
            if matches!(db_err.code().as_deref(), Some("23505") | Some("23503")) {
                return StorageError::ConstraintViolation(message.to_string());
            }
        }
        StorageError::Database(error)
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }
}

use sqlx::Error as SqlxError;
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        if matches!(err, SqlxError::RowNotFound) {
            return RepositoryError::NotFound;
        }

        let classified = err.as_database_error().and_then(|db_err| {
            let detail = db_err
                .constraint()
                .map(str::to_string)
                .unwrap_or_else(|| db_err.message().to_string());

            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => Some(RepositoryError::AlreadyExists(detail)),
                Some(FOREIGN_KEY_VIOLATION) => Some(RepositoryError::ForeignKey(detail)),
                _ => None,
            }
        });

        classified.unwrap_or(RepositoryError::Sqlx(err))
    }
}

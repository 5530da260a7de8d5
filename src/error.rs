pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingInput(Vec<&'static str>),

    #[error("USER_ROLE must be 'admin' or 'user' (got '{0}')")]
    InvalidRole(String),

    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl Error {
    /// Input errors are reported to the operator on stdout instead of the log.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::MissingInput(_) | Error::InvalidRole(_))
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::Conflict(
                format!(
                    "unique constraint {} violated",
                    db_err.constraint().unwrap_or("on users")
                ),
            ),
            other => Error::Database(other),
        }
    }
}

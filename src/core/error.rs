use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("invalid booking form: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationErrors> for BookingError {
    fn from(errors: ValidationErrors) -> Self {
        BookingError::Validation(errors.to_string())
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be positive")]
    NonPositive { field: String },

    #[error("{field} must be a number")]
    NotANumber { field: String },

    #[error("phone must contain exactly 10 digits: {value}")]
    InvalidPhone { value: String },

    #[error("invalid date, expected DD.MM.YYYY: {value}")]
    InvalidDate { value: String },

    #[error("{entity} not found: {name}")]
    NotFound { entity: String, name: String },

    #[error("not enough arguments for '{command}'")]
    NotEnoughArguments { command: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    pub fn contact_not_found(name: &str) -> Self {
        BookError::NotFound {
            entity: "contact".into(),
            name: name.into(),
        }
    }

    pub fn phone_not_found(number: &str) -> Self {
        BookError::NotFound {
            entity: "phone".into(),
            name: number.into(),
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;

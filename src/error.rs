use thiserror::Error;

/// Problem with a single form field, shown inline next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid number")]
    NotANumber,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidLogFilter { directive: String, reason: String },
}

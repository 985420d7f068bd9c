use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloCurrencyError {
    #[error("Validation error: {0}")]
    Validation(String),
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopifyError>;

#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ShopifyError {
    fn from(err: reqwest::Error) -> Self {
        ShopifyError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ShopifyError {
    fn from(err: serde_json::Error) -> Self {
        ShopifyError::Parse(err.to_string())
    }
}

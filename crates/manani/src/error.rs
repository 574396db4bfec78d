use thiserror::Error;

use crate::catalog::ProductId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate product id {0}")]
    DuplicateProductId(ProductId),

    #[error("product {0} has an empty name")]
    EmptyProductName(ProductId),

    #[error("invalid price {0:?}: expected digits with an optional decimal part")]
    InvalidPrice(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("dom: {0}")]
    Dom(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

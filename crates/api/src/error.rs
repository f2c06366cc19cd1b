#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Type index failure: {0}")]
    Index(String),
    #[error("Registration sink failure: {0}")]
    Sink(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

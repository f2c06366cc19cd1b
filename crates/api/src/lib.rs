pub mod error;
pub mod index;
pub mod models;
pub mod sink;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use index::{EmptyIndex, TypeIndex, TypeIndexPtr};
pub use models::*;
pub use sink::RegistrationSink;

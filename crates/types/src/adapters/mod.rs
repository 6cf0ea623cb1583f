//! Provider adapter contract shared by every routing backend

pub mod errors;
pub mod traits;

pub use errors::AdapterError;
pub use traits::RouteAdapter;

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

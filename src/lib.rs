pub use error::AppError;

/// Main architecture layers (dependency flow: Services → API → Storage)
pub mod core; // High-level endpoint services
pub mod storage; // Configuration persistence

/// Support modules (used across layers)
pub mod api; // Data.gov API client
pub mod error; // Error handling

pub use api::client::{DataGovClient, UriAction};

pub type Result<T> = std::result::Result<T, AppError>;

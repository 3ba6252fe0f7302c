//! Data.gov API layer
//!
//! Low-level request execution against the USDA Data.gov service and the
//! serde models for the response payloads the services consume.

pub mod client;
pub mod models;

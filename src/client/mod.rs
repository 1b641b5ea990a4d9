//! Typed client for the activities API.

pub mod activities_api;
pub mod error;

pub use activities_api::ActivitiesClient;
pub use error::ClientError;

//! HTTP inbound adapter exposing the visit REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod visits;

pub use error::ApiResult;

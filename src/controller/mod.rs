//! HTTP handlers for the catalog API.
//!
//! Controllers deserialize request DTOs, convert them to parameter models,
//! invoke the service layer, and map results to status codes. Every handler
//! carries a `#[utoipa::path]` annotation for the generated OpenAPI document.

pub mod battle;
pub mod country;
pub mod figure;
pub mod home;
pub mod vehicle;

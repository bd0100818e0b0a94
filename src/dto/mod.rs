//! Request and response shapes for the HTTP API.
//!
//! DTOs are the serde boundary of the application: controllers deserialize
//! request bodies into `Create*`/`Update*` DTOs, convert them to parameter
//! models, and serialize domain models back into response DTOs.

pub mod api;
pub mod battle;
pub mod country;
pub mod figure;
pub mod vehicle;

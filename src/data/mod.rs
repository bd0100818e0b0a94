//! Database repository layer for all catalog entities.
//!
//! Repository structs handle database operations (CRUD plus the relationship
//! queries) for each entity. Repositories are generic over
//! `sea_orm::ConnectionTrait` so the same methods run against the pooled
//! connection or inside a transaction opened by the service layer.

pub mod battle;
pub mod country;
pub mod figure;
pub mod vehicle;

//! SeaORM entities for the WWII reference catalog.
//!
//! Tables: `countries`, `figures`, `vehicles`, `battles`, and the
//! `battle_countries` join table backing the Country↔Battle many-to-many
//! relationship. Allegiance and vehicle category enums are stored as strings.

pub mod battle;
pub mod battle_country;
pub mod country;
pub mod figure;
pub mod types;
pub mod vehicle;

pub mod prelude;

pub use types::{Side, VehicleType};

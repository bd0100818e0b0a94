//! Domain models and operation-specific parameter types.
//!
//! Models convert from entity rows at the repository boundary
//! (`from_entity`) and to DTOs at the controller boundary (`into_dto`);
//! parameter types convert from request DTOs (`from_dto`).

pub mod battle;
pub mod country;
pub mod figure;
pub mod vehicle;

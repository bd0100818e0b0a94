//! Business logic layer.
//!
//! Services validate input, resolve referenced ids, and open transactions
//! around multi-step mutations. Controllers call services; services call
//! repositories.

pub mod battle;
pub mod country;
pub mod figure;
pub mod vehicle;


use crate::error::AppError;

/// Rejects missing or whitespace-only required fields.
fn require_non_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be blank")));
    }

    Ok(())
}

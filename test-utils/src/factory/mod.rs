//! Factory methods for creating test data.
//!
//! Each catalog entity has its own factory module with a `create_*`
//! convenience function for quick default creation; `country` additionally
//! offers a builder for customization. Factories use the `helpers::next_id`
//! counter to keep generated names unique within a test run.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let country = factory::country::create_country(&db).await?;
//!     let figure = factory::figure::create_figure(&db, country.id).await?;
//!     let battle = factory::battle::create_battle(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod battle;
pub mod country;
pub mod figure;
pub mod helpers;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use battle::{create_battle, create_battle_with_countries};
pub use country::{create_country, create_country_with_side};
pub use figure::create_figure;
pub use vehicle::create_vehicle;

//! Country factory for creating test country entities.
//!
//! Provides factory methods for creating country entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use entity::Side;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test countries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::country::CountryFactory;
///
/// let country = CountryFactory::new(&db)
///     .name("France")
///     .side(Side::Allies)
///     .build()
///     .await?;
/// ```
pub struct CountryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    side: Side,
    img_url: Option<String>,
}

impl<'a> CountryFactory<'a> {
    /// Creates a new CountryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Country {id}"` where id is auto-incremented
    /// - description: `None`
    /// - side: `Side::Allies`
    /// - img_url: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Country {}", id),
            description: None,
            side: Side::Allies,
            img_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn img_url(mut self, img_url: Option<String>) -> Self {
        self.img_url = img_url;
        self
    }

    /// Inserts the configured country into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted country entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            side: ActiveValue::Set(self.side),
            img_url: ActiveValue::Set(self.img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a country with default values.
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    CountryFactory::new(db).build().await
}

/// Creates a country with the given side.
pub async fn create_country_with_side(
    db: &DatabaseConnection,
    side: Side,
) -> Result<entity::country::Model, DbErr> {
    CountryFactory::new(db).side(side).build().await
}

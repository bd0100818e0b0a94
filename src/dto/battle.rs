use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::country::CountryDto;

/// Battle with its participating countries, always loaded eagerly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BattleDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub img_url: Option<String>,
    pub countries: Vec<CountryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateBattleDto {
    pub name: String,
    pub location: String,
    pub img_url: Option<String>,
    /// Ids of the participating countries; at least one is required.
    pub country_ids: Vec<i32>,
}

/// Update replaces the scalar fields only; country associations are managed
/// through the attach/detach endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateBattleDto {
    pub name: String,
    pub location: String,
    pub img_url: Option<String>,
}

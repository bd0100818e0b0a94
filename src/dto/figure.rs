use entity::Side;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FigureDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "ALLIES")]
    pub side: Side,
    pub img_url: Option<String>,
    pub country_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateFigureDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "ALLIES")]
    pub side: Side,
    pub img_url: Option<String>,
    pub country_id: i32,
}

/// Update replaces name, description, and side; the owning country and image
/// are left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateFigureDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "ALLIES")]
    pub side: Side,
}

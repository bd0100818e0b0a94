use entity::Side;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "ALLIES")]
    pub side: Side,
    pub img_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCountryDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "ALLIES")]
    pub side: Side,
    pub img_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCountryDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String, example = "ALLIES")]
    pub side: Side,
    pub img_url: Option<String>,
}

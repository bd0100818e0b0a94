use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Allegiance of a country or figure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    #[sea_orm(string_value = "ALLIES")]
    Allies,
    #[sea_orm(string_value = "AXIS")]
    Axis,
    #[sea_orm(string_value = "NEUTRAL")]
    Neutral,
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ALLIES" => Ok(Self::Allies),
            "AXIS" => Ok(Self::Axis),
            "NEUTRAL" => Ok(Self::Neutral),
            _ => Err(format!("Unknown side: {value}")),
        }
    }
}

/// Category of a vehicle entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    #[sea_orm(string_value = "TANK")]
    Tank,
    #[sea_orm(string_value = "AIRCRAFT")]
    Aircraft,
    #[sea_orm(string_value = "SHIP")]
    Ship,
    #[sea_orm(string_value = "SUBMARINE")]
    Submarine,
    #[sea_orm(string_value = "ARTILLERY")]
    Artillery,
    #[sea_orm(string_value = "TRANSPORT")]
    Transport,
}

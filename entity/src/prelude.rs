pub use super::battle::Entity as Battle;
pub use super::battle_country::Entity as BattleCountry;
pub use super::country::Entity as Country;
pub use super::figure::Entity as Figure;
pub use super::types::{Side, VehicleType};
pub use super::vehicle::Entity as Vehicle;

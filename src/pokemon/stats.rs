use serde::{Deserialize, Serialize};

/// Represents the battle stats of a Pokemon that take part in the damage formula
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PokemonStats {
    /// Used by physical moves on the attacking side
    #[serde(rename = "atk")]
    pub attack: u32,

    /// Used by physical moves on the defending side
    #[serde(rename = "def")]
    pub defense: u32,

    /// Used by special moves on the attacking side
    #[serde(rename = "sp_atk")]
    pub special_attack: u32,

    /// Used by special moves on the defending side
    #[serde(rename = "sp_def")]
    pub special_defense: u32,
}

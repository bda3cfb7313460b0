/// Pokemon HTTP endpoints module
pub mod endpoints;

/// Pokedex (the loaded dataset) module
pub mod pokedex;

/// Pokemon Type and type chart module
pub mod ptype;

/// Pokemon Stats (attack, etc) module
pub mod stats;

use serde::{Deserialize, Serialize};

use ptype::PokemonType;
use stats::PokemonStats;

/// Represents a Pokemon entry of the pokedex with its types and stats
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pokemon {
    /// The name of the Pokemon
    pub name: String,

    /// The primary type of the Pokemon
    pub primary_type: PokemonType,

    /// The secondary type of the Pokemon, if it has one
    pub secondary_type: Option<PokemonType>,

    /// The battle stats of the Pokemon
    pub stats: PokemonStats,
}

impl Pokemon {
    /// Creates a new pokemon
    pub fn new(
        name: impl Into<String>,
        primary_type: PokemonType,
        secondary_type: Option<PokemonType>,
        stats: PokemonStats,
    ) -> Self {
        Self {
            name: name.into(),
            primary_type,
            secondary_type,
            stats,
        }
    }

    /// Returns the types of the pokemon, the primary one first
    /// The secondary type is only included if the pokemon has one
    pub fn types(&self) -> Vec<PokemonType> {
        let mut types = vec![self.primary_type];
        if let Some(secondary_type) = self.secondary_type {
            types.push(secondary_type);
        }
        types
    }
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents the elemental type of a Pokemon or of a move
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Every type, in the order the standard chart lists them
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    /// The display name of the type, as it appears in the pokedex
    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Electric => "Electric",
            PokemonType::Grass => "Grass",
            PokemonType::Ice => "Ice",
            PokemonType::Fighting => "Fighting",
            PokemonType::Poison => "Poison",
            PokemonType::Ground => "Ground",
            PokemonType::Flying => "Flying",
            PokemonType::Psychic => "Psychic",
            PokemonType::Bug => "Bug",
            PokemonType::Rock => "Rock",
            PokemonType::Ghost => "Ghost",
            PokemonType::Dragon => "Dragon",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PokemonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PokemonType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown pokemon type '{}'", s))
    }
}

impl TryFrom<String> for PokemonType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Offensive type chart, keyed by attack type and then by defending type
///
/// Pairs that are not listed are neutral (1.0).
#[derive(Clone, Debug, Default)]
pub struct TypeChart {
    /// Attack types in the order they were added
    attack_types: Vec<PokemonType>,
    matchups: HashMap<PokemonType, HashMap<PokemonType, f64>>,
}

impl TypeChart {
    /// Creates an empty chart, where every matchup is neutral
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the matchups of an attack type to the chart
    /// Calling this again for the same attack type merges the entries
    pub fn with_matchups(
        mut self,
        attack_type: PokemonType,
        matchups: &[(PokemonType, f64)],
    ) -> Self {
        if !self.attack_types.contains(&attack_type) {
            self.attack_types.push(attack_type);
        }

        self.matchups
            .entry(attack_type)
            .or_default()
            .extend(matchups.iter().copied());

        self
    }

    /// The standard 18 type chart
    pub fn standard() -> Self {
        use PokemonType::*;

        TypeChart::new()
            .with_matchups(Normal, &[(Rock, 0.5), (Ghost, 0.0), (Steel, 0.5)])
            .with_matchups(
                Fire,
                &[
                    (Fire, 0.5),
                    (Water, 0.5),
                    (Grass, 2.0),
                    (Ice, 2.0),
                    (Bug, 2.0),
                    (Rock, 0.5),
                    (Dragon, 0.5),
                    (Steel, 2.0),
                ],
            )
            .with_matchups(
                Water,
                &[
                    (Fire, 2.0),
                    (Water, 0.5),
                    (Grass, 0.5),
                    (Ground, 2.0),
                    (Rock, 2.0),
                    (Dragon, 0.5),
                ],
            )
            .with_matchups(
                Electric,
                &[
                    (Water, 2.0),
                    (Electric, 0.5),
                    (Grass, 0.5),
                    (Ground, 0.0),
                    (Flying, 2.0),
                    (Dragon, 0.5),
                ],
            )
            .with_matchups(
                Grass,
                &[
                    (Fire, 0.5),
                    (Water, 2.0),
                    (Grass, 0.5),
                    (Poison, 0.5),
                    (Ground, 2.0),
                    (Flying, 0.5),
                    (Bug, 0.5),
                    (Rock, 2.0),
                    (Dragon, 0.5),
                    (Steel, 0.5),
                ],
            )
            .with_matchups(
                Ice,
                &[
                    (Fire, 0.5),
                    (Water, 0.5),
                    (Grass, 2.0),
                    (Ice, 0.5),
                    (Ground, 2.0),
                    (Flying, 2.0),
                    (Dragon, 2.0),
                    (Steel, 0.5),
                ],
            )
            .with_matchups(
                Fighting,
                &[
                    (Normal, 2.0),
                    (Ice, 2.0),
                    (Poison, 0.5),
                    (Flying, 0.5),
                    (Psychic, 0.5),
                    (Bug, 0.5),
                    (Rock, 2.0),
                    (Ghost, 0.0),
                    (Dark, 2.0),
                    (Steel, 2.0),
                    (Fairy, 0.5),
                ],
            )
            .with_matchups(
                Poison,
                &[
                    (Grass, 2.0),
                    (Poison, 0.5),
                    (Ground, 0.5),
                    (Rock, 0.5),
                    (Ghost, 0.5),
                    (Steel, 0.0),
                    (Fairy, 2.0),
                ],
            )
            .with_matchups(
                Ground,
                &[
                    (Fire, 2.0),
                    (Electric, 2.0),
                    (Grass, 0.5),
                    (Poison, 2.0),
                    (Flying, 0.0),
                    (Bug, 0.5),
                    (Rock, 2.0),
                    (Steel, 2.0),
                ],
            )
            .with_matchups(
                Flying,
                &[
                    (Electric, 0.5),
                    (Grass, 2.0),
                    (Fighting, 2.0),
                    (Bug, 2.0),
                    (Rock, 0.5),
                    (Steel, 0.5),
                ],
            )
            .with_matchups(
                Psychic,
                &[
                    (Fighting, 2.0),
                    (Poison, 2.0),
                    (Psychic, 0.5),
                    (Dark, 0.0),
                    (Steel, 0.5),
                ],
            )
            .with_matchups(
                Bug,
                &[
                    (Fire, 0.5),
                    (Grass, 2.0),
                    (Fighting, 0.5),
                    (Poison, 0.5),
                    (Flying, 0.5),
                    (Psychic, 2.0),
                    (Ghost, 0.5),
                    (Dark, 2.0),
                    (Steel, 0.5),
                    (Fairy, 0.5),
                ],
            )
            .with_matchups(
                Rock,
                &[
                    (Fire, 2.0),
                    (Ice, 2.0),
                    (Fighting, 0.5),
                    (Ground, 0.5),
                    (Flying, 2.0),
                    (Bug, 2.0),
                    (Steel, 0.5),
                ],
            )
            .with_matchups(
                Ghost,
                &[(Normal, 0.0), (Psychic, 2.0), (Ghost, 2.0), (Dark, 0.5)],
            )
            .with_matchups(Dragon, &[(Dragon, 2.0), (Steel, 0.5), (Fairy, 0.0)])
            .with_matchups(
                Dark,
                &[
                    (Fighting, 0.5),
                    (Psychic, 2.0),
                    (Ghost, 2.0),
                    (Dark, 0.5),
                    (Fairy, 0.5),
                ],
            )
            .with_matchups(
                Steel,
                &[
                    (Fire, 0.5),
                    (Water, 0.5),
                    (Electric, 0.5),
                    (Ice, 2.0),
                    (Rock, 2.0),
                    (Steel, 0.5),
                    (Fairy, 2.0),
                ],
            )
            .with_matchups(
                Fairy,
                &[
                    (Fire, 0.5),
                    (Fighting, 2.0),
                    (Poison, 0.5),
                    (Dragon, 2.0),
                    (Dark, 2.0),
                    (Steel, 0.5),
                ],
            )
    }

    /// The attack types the chart defines, in insertion order
    pub fn attack_types(&self) -> impl Iterator<Item = PokemonType> + '_ {
        self.attack_types.iter().copied()
    }

    /// The multiplier of a single attack type against a single defending type
    pub fn multiplier(&self, attack_type: PokemonType, defender_type: PokemonType) -> f64 {
        self.matchups
            .get(&attack_type)
            .and_then(|m| m.get(&defender_type))
            .copied()
            .unwrap_or(1.0)
    }

    /// The multiplier of an attack type against every type of the defender
    /// A dual type defender multiplies both lookups together
    pub fn effectiveness(&self, attack_type: PokemonType, defender_types: &[PokemonType]) -> f64 {
        defender_types
            .iter()
            .map(|d_type| self.multiplier(attack_type, *d_type))
            .product()
    }
}

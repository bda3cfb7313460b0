/// Damage quiz HTTP endpoints
pub mod endpoints;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::battle::{BattleScenario, MAX_RANDOM_FACTOR, MIN_RANDOM_FACTOR};
use crate::error::QuizError;

/// How much of the damage formula the player has to work out
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Power, STAB and type effectiveness only
    Easy,
    /// The full formula with the random factor at its maximum
    Medium,
    /// The full formula, answered as the range of every possible roll
    Hard,
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facil" | "fácil" => Ok(Difficulty::Easy),
            "medium" | "medio" | "médio" => Ok(Difficulty::Medium),
            "hard" | "dificil" | "difícil" => Ok(Difficulty::Hard),
            _ => Err(QuizError::InvalidDifficultyTier(s.to_string())),
        }
    }
}

/// A value substituted into the formula
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FormulaValue {
    Integer(u32),
    Real(f64),
    Text(String),
}

/// The answer the player is expected to give
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Exact(u32),
    Range { min: u32, max: u32 },
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Exact(value) => write!(f, "{}", value),
            Answer::Range { min, max } => write!(f, "[{} - {}]", min, max),
        }
    }
}

/// Exact answers are sent as numbers, ranges as their display string
impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Answer::Exact(value) => serializer.serialize_u32(*value),
            Answer::Range { .. } => serializer.collect_str(self),
        }
    }
}

/// Everything the client needs to show one difficulty of the formula
#[derive(Serialize, Clone, Debug)]
pub struct FormulaDescriptor {
    pub difficulty: Difficulty,
    pub name: &'static str,
    pub description: &'static str,
    /// LaTeX source of the formula
    pub formula: &'static str,
    pub variables: BTreeMap<&'static str, FormulaValue>,
    pub answer: Answer,
}

const EASY_FORMULA: &str = r"\text{Damage} = \left\lfloor \left( \frac{\text{Power}}{2} + 10 \right) \times \text{STAB} \times \text{Type} \right\rfloor";

const MEDIUM_FORMULA: &str = r"\text{Damage} = \left\lfloor \left( \frac{\left( \frac{2 \times \text{Level}}{5} + 2 \right) \times \text{Power} \times \frac{A}{D}}{50} + 2 \right) \times \text{STAB} \times \text{Type} \right\rfloor";

const HARD_FORMULA: &str = r"\text{Damage} = \left\lfloor \left( \frac{\left( \frac{2 \times \text{Level}}{5} + 2 \right) \times \text{Power} \times \frac{A}{D}}{50} + 2 \right) \times \text{STAB} \times \text{Type} \times \text{Random} \right\rfloor";

/// Builds the formula of the given difficulty for a battle
pub fn present(scenario: &BattleScenario, difficulty: Difficulty) -> FormulaDescriptor {
    let mut variables = BTreeMap::from([
        ("power", FormulaValue::Integer(scenario.power)),
        ("stab", FormulaValue::Real(scenario.stab_multiplier)),
        ("type", FormulaValue::Real(scenario.type_effectiveness)),
    ]);

    if difficulty != Difficulty::Easy {
        variables.insert("level", FormulaValue::Integer(scenario.level));
        variables.insert("attack", FormulaValue::Integer(scenario.attack_stat));
        variables.insert("defense", FormulaValue::Integer(scenario.defense_stat));
    }

    match difficulty {
        Difficulty::Easy => FormulaDescriptor {
            difficulty,
            name: "Easy",
            description: "Ignore level and stats. Halve the move's power, add 10, \
                then apply STAB and type effectiveness and round down.",
            formula: EASY_FORMULA,
            variables,
            answer: Answer::Exact(easy_damage(scenario)),
        },
        Difficulty::Medium => FormulaDescriptor {
            difficulty,
            name: "Medium",
            description: "Use the full damage formula with the random factor fixed at 1.0 \
                and round the result down.",
            formula: MEDIUM_FORMULA,
            variables,
            answer: Answer::Exact(scenario.damage_max),
        },
        Difficulty::Hard => {
            variables.insert(
                "random",
                FormulaValue::Text(format!(
                    "[{} to {:.1}]",
                    MIN_RANDOM_FACTOR, MAX_RANDOM_FACTOR
                )),
            );

            FormulaDescriptor {
                difficulty,
                name: "Hard",
                description: "Use the full damage formula and give the lowest and highest \
                    damage the random factor allows, each rounded down.",
                formula: HARD_FORMULA,
                variables,
                answer: Answer::Range {
                    min: scenario.damage_min,
                    max: scenario.damage_max,
                },
            }
        }
    }
}

/// floor((power / 2 + 10) * stab * type)
pub fn easy_damage(scenario: &BattleScenario) -> u32 {
    ((scenario.power as f64 / 2.0 + 10.0) * scenario.stab_multiplier * scenario.type_effectiveness)
        .floor() as u32
}

use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::{
    error::QuizError,
    pokemon::{
        Pokemon,
        pokedex::Pokedex,
        ptype::{PokemonType, TypeChart},
        stats::PokemonStats,
    },
};

/// Levels are drawn from this inclusive range
pub const LEVEL_RANGE: std::ops::RangeInclusive<u32> = 40..=60;

/// Move powers a battle can be drawn with
pub const MOVE_POWERS: [u32; 9] = [40, 50, 60, 70, 80, 90, 100, 110, 120];

/// Chance that the move shares a type with the attacker
pub const STAB_CHANCE: f64 = 0.5;

/// Same-type attack bonus
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Lowest random factor of the damage roll
pub const MIN_RANDOM_FACTOR: f64 = 0.85;

/// Highest random factor of the damage roll
pub const MAX_RANDOM_FACTOR: f64 = 1.0;

/// Read-only data every battle is generated from
#[derive(Clone, Debug)]
pub struct BattleContext {
    /// The pokemon battles are drawn from
    pub pokedex: Pokedex,
    /// The offensive type chart
    pub chart: TypeChart,
}

impl BattleContext {
    pub fn new(pokedex: Pokedex, chart: TypeChart) -> Self {
        Self { pokedex, chart }
    }
}

/// Whether a move uses the physical or the special stat pair
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCategory {
    Physical,
    Special,
}

impl MoveCategory {
    /// Display names of the attacking and defending stat
    pub fn stat_names(&self) -> (&'static str, &'static str) {
        match self {
            MoveCategory::Physical => ("Attack", "Defense"),
            MoveCategory::Special => ("Special Attack", "Special Defense"),
        }
    }

    /// Picks the attacking stat of the attacker and the defending stat of the defender
    pub fn stats(&self, attacker: &PokemonStats, defender: &PokemonStats) -> (u32, u32) {
        match self {
            MoveCategory::Physical => (attacker.attack, defender.defense),
            MoveCategory::Special => (attacker.special_attack, defender.special_defense),
        }
    }
}

/// A pokemon taking part in a battle, with its resolved types
#[derive(Serialize, Clone, Debug)]
pub struct Combatant {
    #[serde(flatten)]
    pub pokemon: Pokemon,
    /// Primary type first, secondary only if the pokemon has one
    pub types: Vec<PokemonType>,
}

impl From<&Pokemon> for Combatant {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            types: pokemon.types(),
            pokemon: pokemon.clone(),
        }
    }
}

/// The random choices a battle is made of, before any damage is computed
#[derive(Clone, Debug)]
pub struct BattleSetup<'a> {
    pub attacker: &'a Pokemon,
    pub defender: &'a Pokemon,
    pub level: u32,
    pub power: u32,
    pub category: MoveCategory,
    pub move_type: PokemonType,
}

/// A fully computed battle, the subject of one quiz question
#[derive(Serialize, Clone, Debug)]
pub struct BattleScenario {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub level: u32,
    pub power: u32,
    pub category: MoveCategory,
    pub attack_stat_name: &'static str,
    pub defense_stat_name: &'static str,
    pub attack_stat: u32,
    pub defense_stat: u32,
    pub move_type: PokemonType,
    pub stab_multiplier: f64,
    pub type_effectiveness: f64,
    /// Damage before STAB, type effectiveness and the random factor
    pub base_damage: f64,
    pub damage_min: u32,
    pub damage_max: u32,
}

/// Generates a random battle from the context
pub fn generate<R: Rng + ?Sized>(
    ctx: &BattleContext,
    rng: &mut R,
) -> Result<BattleScenario, QuizError> {
    BattleSetup::roll(ctx, rng)?.resolve(&ctx.chart)
}

impl<'a> BattleSetup<'a> {
    /// Draws attacker, defender, level, power, category and move type
    /// The same pokemon may be drawn as both attacker and defender
    pub fn roll<R: Rng + ?Sized>(ctx: &'a BattleContext, rng: &mut R) -> Result<Self, QuizError> {
        let pokemon = ctx.pokedex.all();
        let attacker = pokemon.choose(rng).ok_or(QuizError::DatasetUnavailable)?;
        let defender = pokemon.choose(rng).ok_or(QuizError::DatasetUnavailable)?;

        let level = rng.gen_range(LEVEL_RANGE);
        let power = MOVE_POWERS.choose(rng).copied().unwrap_or(MOVE_POWERS[0]);

        let category = if rng.gen_bool(0.5) {
            MoveCategory::Physical
        } else {
            MoveCategory::Special
        };

        let move_type = choose_move_type(attacker, &ctx.chart, rng);

        Ok(Self {
            attacker,
            defender,
            level,
            power,
            category,
            move_type,
        })
    }

    /// Computes the modifiers and the damage range of the battle
    pub fn resolve(self, chart: &TypeChart) -> Result<BattleScenario, QuizError> {
        let attacker = Combatant::from(self.attacker);
        let defender = Combatant::from(self.defender);

        let (attack_stat_name, defense_stat_name) = self.category.stat_names();
        let (attack_stat, defense_stat) = self
            .category
            .stats(&self.attacker.stats, &self.defender.stats);

        if defense_stat == 0 {
            return Err(QuizError::DegenerateDefense {
                defender: self.defender.name.clone(),
                stat: defense_stat_name,
            });
        }

        let stab_multiplier = if attacker.types.contains(&self.move_type) {
            STAB_MULTIPLIER
        } else {
            1.0
        };
        let type_effectiveness = chart.effectiveness(self.move_type, &defender.types);

        let base_damage = base_damage(self.level, self.power, attack_stat, defense_stat);
        let modified = base_damage * stab_multiplier * type_effectiveness;
        let damage_max = (modified * MAX_RANDOM_FACTOR).floor() as u32;
        let damage_min = (modified * MIN_RANDOM_FACTOR).floor() as u32;

        Ok(BattleScenario {
            attacker,
            defender,
            level: self.level,
            power: self.power,
            category: self.category,
            attack_stat_name,
            defense_stat_name,
            attack_stat,
            defense_stat,
            move_type: self.move_type,
            stab_multiplier,
            type_effectiveness,
            base_damage,
            damage_min,
            damage_max,
        })
    }
}

/// ((2 * level / 5 + 2) * power * (attack / defense) / 50) + 2
/// `defense` must not be 0
pub fn base_damage(level: u32, power: u32, attack: u32, defense: u32) -> f64 {
    (((2.0 * level as f64 / 5.0) + 2.0) * power as f64 * (attack as f64 / defense as f64) / 50.0)
        + 2.0
}

/// Half of the time the move is one of the attacker's own types, otherwise it's
/// any chart type the attacker doesn't have
fn choose_move_type<R: Rng + ?Sized>(
    attacker: &Pokemon,
    chart: &TypeChart,
    rng: &mut R,
) -> PokemonType {
    let attacker_types = attacker.types();
    let stab_type = |rng: &mut R| {
        attacker_types
            .choose(rng)
            .copied()
            .unwrap_or(attacker.primary_type)
    };

    if rng.gen_bool(STAB_CHANCE) {
        return stab_type(rng);
    }

    let non_stab_types: Vec<PokemonType> = chart
        .attack_types()
        .filter(|t| !attacker_types.contains(t))
        .collect();

    match non_stab_types.choose(rng) {
        Some(move_type) => *move_type,
        None => {
            warn!(
                "Every chart type is one of {}'s types, using a same type move",
                attacker.name
            );
            stab_type(rng)
        }
    }
}

mod api;
mod config;

use crate::pokemon::{Pokemon, ptype::PokemonType, stats::PokemonStats};

/// Single type Water pokemon with known stats
pub(crate) fn testmon() -> Pokemon {
    Pokemon::new(
        "Testmon",
        PokemonType::Water,
        None,
        PokemonStats {
            attack: 100,
            defense: 50,
            special_attack: 80,
            special_defense: 60,
        },
    )
}

/// Test if rocket can be built
#[test]
fn test_rocket() {
    use crate::rocket;

    let _rocket = rocket();
    // no panic = success
}

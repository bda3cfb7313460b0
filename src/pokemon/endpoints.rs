use log::info;
use rocket::State;

use crate::{
    battle::BattleContext,
    error::QuizError,
    json::{JsonResult, JsonStatus},
    pokemon::ptype::PokemonType,
};

/// Endpoint for getting a list of all Pokemon in the pokedex.
#[get("/pokemons")]
pub async fn get_pokemons<'a>(ctx: &'a State<BattleContext>) -> JsonResult<'a> {
    info!("Request to /api/pokemons");

    if ctx.pokedex.is_empty() {
        return Err(QuizError::DatasetUnavailable.into());
    }

    Ok(JsonStatus::data_ref(&ctx.pokedex))
}

/// Endpoint for getting the attack types known to the type chart.
#[get("/types")]
pub async fn get_types<'a>(ctx: &State<BattleContext>) -> JsonResult<'a> {
    info!("Request to /api/types");
    let types: Vec<PokemonType> = ctx.chart.attack_types().collect();
    Ok(JsonStatus::data_owned(types))
}

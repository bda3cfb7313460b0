use log::info;
use rocket::State;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

use crate::{
    battle::{self, BattleContext, BattleScenario},
    error::QuizError,
    json::{JsonResult, JsonStatus},
    quiz::{self, Difficulty, FormulaDescriptor},
};

/// Body of a damage quiz request
#[derive(Deserialize, Debug)]
pub struct DamageQuizRequest {
    #[serde(alias = "dificuldade")]
    pub difficulty: String,
}

/// A battle together with the formula the player has to solve for it
#[derive(Serialize, Debug)]
pub struct DamageQuiz {
    pub battle: BattleScenario,
    pub formula: FormulaDescriptor,
}

/// Endpoint that generates a new battle and its damage question.
#[post("/damage_quiz", format = "json", data = "<request>")]
pub async fn damage_quiz<'a>(
    ctx: &State<BattleContext>,
    request: Json<DamageQuizRequest>,
) -> JsonResult<'a> {
    info!("Request to /api/damage_quiz ({})", request.difficulty);

    if ctx.pokedex.is_empty() {
        return Err(QuizError::DatasetUnavailable.into());
    }

    let difficulty: Difficulty = request.difficulty.parse()?;

    let battle = battle::generate(ctx.inner(), &mut rand::thread_rng())?;
    let formula = quiz::present(&battle, difficulty);

    Ok(JsonStatus::data_owned(DamageQuiz { battle, formula }))
}

use std::str::FromStr;

mod battle;
mod config;
mod error;
mod json;
mod pokemon;
mod quiz;

#[cfg(test)]
mod tests;

use crate::battle::BattleContext;
use crate::config::Config;
use crate::json::JsonResult;
use crate::pokemon::{pokedex::Pokedex, ptype::TypeChart};
use json::JsonStatus;
use log::{error, info, warn};
use rocket::http::Status;
use rocket::{Build, Request, Rocket};
use rocket_cors::{AllowedMethods, AllowedOrigins, CorsOptions};

#[macro_use]
extern crate rocket;

fn make_cors() -> CorsOptions {
    let allowed_methods: AllowedMethods = ["Get", "Post"]
        .iter()
        .filter_map(|s| FromStr::from_str(s).ok())
        .collect();

    CorsOptions::default()
        // TODO: Restrict to the frontend's origin once it has a fixed host
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(allowed_methods)
        .allow_credentials(true)
}

/// Loads the pokedex named by the config
/// A missing pokedex leaves the server running with an empty one
fn load_context(config: &Config) -> BattleContext {
    let pokedex = match Pokedex::load(&config.dataset_path) {
        Ok(pokedex) => pokedex,
        Err(e) => {
            error!("Pokemon data could not be loaded: {:#}", e);
            Pokedex::default()
        }
    };

    if pokedex.is_empty() {
        warn!("Pokedex is empty, every quiz request will fail");
    }

    BattleContext::new(pokedex, TypeChart::standard())
}

fn build_rocket(ctx: BattleContext) -> Rocket<Build> {
    let cors = make_cors().to_cors().expect("Error creating CORS fairing");

    rocket::build()
        .attach(cors)
        .manage(ctx)
        .mount(
            "/api",
            routes![
                index,
                pokemon::endpoints::get_pokemons,
                pokemon::endpoints::get_types,
                quiz::endpoints::damage_quiz,
            ],
        )
        .register("/api", catchers![api_catcher])
}

#[launch]
fn rocket() -> _ {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Could not read config, using defaults: {:#}", e);
        Config::default()
    });
    info!("Using pokedex at {}", config.dataset_path.display());

    build_rocket(load_context(&config))
}

#[get("/")]
pub async fn index<'a>() -> JsonResult<'a> {
    info!("Request to /api");
    Ok(JsonStatus::ok::<String>(None))
}

/// Wraps Rocket's own errors (unknown route, unreadable body) in the json envelope
/// The response keeps the status that was caught
#[catch(default)]
pub fn api_catcher(status: Status, req: &Request) -> JsonStatus<'static> {
    warn!("{} {} failed with {}", req.method(), req.uri(), status);
    JsonStatus::error(status.reason_lossy())
}

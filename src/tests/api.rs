use super::super::*;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;

use crate::pokemon::{pokedex::Pokedex, ptype::TypeChart};

fn create_test_rocket(pokedex: Pokedex) -> Rocket<Build> {
    build_rocket(BattleContext::new(pokedex, TypeChart::standard()))
}

fn testmon_client() -> Client {
    Client::tracked(create_test_rocket(Pokedex::from(vec![super::testmon()])))
        .expect("Failed to create client")
}

fn empty_client() -> Client {
    Client::tracked(create_test_rocket(Pokedex::default())).expect("Failed to create client")
}

fn post_quiz(client: &Client, body: &str) -> (Status, serde_json::Value) {
    let response = client
        .post("/api/damage_quiz")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();

    let status = response.status();
    let body = response
        .into_string()
        .expect("Response body should be readable");
    let json = serde_json::from_str(&body).expect("Response should be valid JSON");

    (status, json)
}

#[test]
fn test_index_endpoint() {
    let client = testmon_client();
    let response = client.get("/api").dispatch();

    assert_eq!(response.status(), Status::Ok);

    let body = response
        .into_string()
        .expect("Response body should be readable");
    let json: serde_json::Value =
        serde_json::from_str(&body).expect("Response should be valid JSON");

    assert_eq!(json["status"], "Ok");
    assert_eq!(json["data"], serde_json::Value::Array(vec![]));
}

#[test]
fn test_hard_quiz() {
    let client = testmon_client();
    let (status, json) = post_quiz(&client, r#"{"difficulty": "hard"}"#);

    assert_eq!(status, Status::Ok);
    assert_eq!(json["status"], "Ok");

    let battle = &json["data"]["battle"];
    let formula = &json["data"]["formula"];
    assert_eq!(battle["attacker"]["name"], "Testmon");
    assert_eq!(battle["defender"]["name"], "Testmon");
    assert_eq!(formula["difficulty"], "Hard");

    let expected = format!(
        "[{} - {}]",
        battle["damage_min"].as_u64().unwrap(),
        battle["damage_max"].as_u64().unwrap()
    );
    assert_eq!(formula["answer"], expected);
}

#[test]
fn test_medium_quiz_with_portuguese_fields() {
    let client = testmon_client();
    let (status, json) = post_quiz(&client, r#"{"dificuldade": "medio"}"#);

    assert_eq!(status, Status::Ok);
    assert_eq!(json["data"]["formula"]["difficulty"], "Medium");
    assert_eq!(
        json["data"]["formula"]["answer"],
        json["data"]["battle"]["damage_max"]
    );
}

#[test]
fn test_invalid_difficulty_is_client_error() {
    let client = testmon_client();
    let (status, json) = post_quiz(&client, r#"{"difficulty": "impossible"}"#);

    assert_eq!(status, Status::BadRequest);
    assert_eq!(
        json["status"]["Error"],
        "Invalid difficulty: 'impossible'"
    );
}

#[test]
fn test_empty_pokedex_is_server_error() {
    let client = empty_client();
    let (status, json) = post_quiz(&client, r#"{"difficulty": "easy"}"#);

    assert_eq!(status, Status::InternalServerError);
    assert_eq!(json["status"]["Error"], "Pokemon data is not loaded");

    // the dataset check comes before the difficulty check
    let (status, _) = post_quiz(&client, r#"{"difficulty": "impossible"}"#);
    assert_eq!(status, Status::InternalServerError);
}

#[test]
fn test_malformed_quiz_body() {
    let client = testmon_client();
    let response = client
        .post("/api/damage_quiz")
        .header(ContentType::JSON)
        .body("{\"level\": 3}")
        .dispatch();

    assert_eq!(response.status(), Status::UnprocessableEntity);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).expect("Response should be valid JSON");
    assert_eq!(json["status"]["Error"], "Unprocessable Entity");
    assert_eq!(json["data"], serde_json::Value::Array(vec![]));

    let (status, json) = post_quiz(&client, "not json at all");
    assert!(status.class().is_client_error());
    assert!(json["status"]["Error"].is_string());
}

#[test]
fn test_get_pokemons() {
    let client = testmon_client();
    let response = client.get("/api/pokemons").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(json["data"][0]["name"], "Testmon");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let empty = empty_client();
    let response = empty.get("/api/pokemons").dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
}

#[test]
fn test_get_types() {
    let client = testmon_client();
    let response = client.get("/api/types").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    let types = json["data"].as_array().unwrap();
    assert_eq!(types.len(), 18);
    assert_eq!(types[0], "Normal");
    assert_eq!(types[17], "Fairy");
}

#[test]
fn test_nonexistent_endpoint() {
    let client = testmon_client();
    let response = client.get("/api/nonexistent").dispatch();

    assert_eq!(response.status(), Status::NotFound);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().unwrap()).expect("Response should be valid JSON");
    assert_eq!(json["status"]["Error"], "Not Found");
}

#[test]
fn test_cors_headers() {
    let client = testmon_client();

    let response = client
        .get("/api")
        .header(Header::new("Origin", "http://localhost:3000"))
        .dispatch();

    assert_eq!(response.status(), Status::Ok);

    let headers = response.headers();
    assert!(headers.contains("Access-Control-Allow-Origin"));
    assert!(headers.contains("Access-Control-Allow-Credentials"));

    let preflight_response = client
        .options("/api/damage_quiz")
        .header(Header::new("Origin", "http://localhost:3000"))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .dispatch();

    let allowed_methods = preflight_response
        .headers()
        .get_one("Access-Control-Allow-Methods")
        .expect("Should have allowed methods header in preflight response");
    assert!(allowed_methods.contains("GET"));
    assert!(allowed_methods.contains("POST"));
}

#[test]
fn test_cors_configuration() {
    let cors = make_cors();

    assert!(cors.allow_credentials);
    assert!(matches!(cors.allowed_origins, AllowedOrigins::All));

    let methods: Vec<_> = cors.allowed_methods.iter().collect();
    assert_eq!(methods.len(), 2);
    assert!(methods.iter().any(|m| m.as_str() == "GET"));
    assert!(methods.iter().any(|m| m.as_str() == "POST"));
}

#[test]
fn test_load_context_without_pokedex() {
    let config = crate::config::Config {
        dataset_path: "missing/pokedex.csv".into(),
    };
    let ctx = load_context(&config);

    assert!(ctx.pokedex.is_empty());
    assert_eq!(ctx.chart.attack_types().count(), 18);
}

use std::path::PathBuf;

use crate::config::{Config, DEFAULT_DATASET_PATH};

#[test]
fn test_parse_config() {
    let config: Config = "[dataset]\npath = \"pokedex.csv\"\n".parse().unwrap();
    assert_eq!(config.dataset_path, PathBuf::from("pokedex.csv"));
}

#[test]
fn test_config_without_dataset() {
    assert!("[server]\nport = 8000\n".parse::<Config>().is_err());
    assert!("[dataset]\npath = 3\n".parse::<Config>().is_err());
    assert!("not toml at all [".parse::<Config>().is_err());
}

#[test]
fn test_default_config() {
    assert_eq!(
        Config::default().dataset_path,
        PathBuf::from(DEFAULT_DATASET_PATH)
    );
}

#[test]
fn test_bundled_config() {
    let config = Config::load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_config_file() {
    assert!(Config::from_file("no_such_config.toml").is_err());
}

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{Pokemon, ptype::PokemonType, stats::PokemonStats};

/// One row of the pokedex csv, other columns are ignored
#[derive(Deserialize, Debug)]
struct PokedexRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Primary Typing")]
    primary_type: PokemonType,
    #[serde(rename = "Secondary Typing")]
    secondary_type: Option<PokemonType>,
    #[serde(rename = "Attack")]
    attack: u32,
    #[serde(rename = "Defense")]
    defense: u32,
    #[serde(rename = "Special Attack")]
    special_attack: u32,
    #[serde(rename = "Special Defense")]
    special_defense: u32,
}

impl From<PokedexRow> for Pokemon {
    fn from(row: PokedexRow) -> Self {
        Pokemon::new(
            row.name,
            row.primary_type,
            row.secondary_type,
            PokemonStats {
                attack: row.attack,
                defense: row.defense,
                special_attack: row.special_attack,
                special_defense: row.special_defense,
            },
        )
    }
}

/// The pokemon available to battles, loaded once at startup
#[derive(Serialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct Pokedex {
    pokemon: Vec<Pokemon>,
    /// File lines of the rows that could not be parsed
    #[serde(skip)]
    skipped_lines: Vec<u64>,
}

impl Pokedex {
    /// Loads the pokedex from a csv file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Could not open pokedex at {}", path.display()))?;

        let pokedex = Self::from_reader(file)?;
        info!(
            "Loaded {} pokemon from {} ({} rows skipped)",
            pokedex.len(),
            path.display(),
            pokedex.skipped_lines().len()
        );

        Ok(pokedex)
    }

    /// Reads a pokedex from csv data with a header row
    /// Rows that can't be parsed are skipped
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        // fail early on a file that isn't a pokedex at all
        let headers = reader.headers().context("Could not read pokedex header")?;
        if !headers.iter().any(|h| h == "Name") {
            anyhow::bail!("Pokedex header has no 'Name' column");
        }

        let headers = headers.clone();
        let mut pokemon: Vec<Pokemon> = vec![];
        let mut skipped_lines = vec![];

        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or_default();
                    warn!("Skipping unreadable pokedex line {}: {}", line, e);
                    skipped_lines.push(line);
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            match record.deserialize::<PokedexRow>(Some(&headers)) {
                Ok(row) => pokemon.push(row.into()),
                Err(e) => {
                    warn!("Skipping pokedex line {}: {}", line, e);
                    skipped_lines.push(line);
                }
            }
        }

        Ok(Self {
            pokemon,
            skipped_lines,
        })
    }

    /// Returns all pokemon in the order they were loaded
    pub fn all(&self) -> &[Pokemon] {
        &self.pokemon
    }

    /// File lines (the header is line 1) of rows that were skipped while loading
    pub fn skipped_lines(&self) -> &[u64] {
        &self.skipped_lines
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

impl From<Vec<Pokemon>> for Pokedex {
    fn from(pokemon: Vec<Pokemon>) -> Self {
        Self {
            pokemon,
            skipped_lines: vec![],
        }
    }
}

use thiserror::Error;

/// Errors that can occur while building a damage quiz for a single request
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuizError {
    /// The pokedex failed to load or holds no pokemon
    #[error("Pokemon data is not loaded")]
    DatasetUnavailable,

    /// The requested difficulty is not one of the known tiers
    #[error("Invalid difficulty: '{0}'")]
    InvalidDifficultyTier(String),

    /// The defender's selected stat is zero, so the stat ratio is undefined
    #[error("{defender} has a {stat} of 0, damage cannot be computed")]
    DegenerateDefense {
        /// The name of the defending pokemon
        defender: String,
        /// The display name of the stat that was selected
        stat: &'static str,
    },
}

impl QuizError {
    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, QuizError::InvalidDifficultyTier(_))
    }
}

use thiserror::Error;

/// Errors from the Pokémon GraphQL client.
#[derive(Debug, Error)]
pub enum PokemonError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),

    /// `data.pokemon` was absent or null. Carries the name as the caller typed it.
    #[error("No pokemon with the name \"{name}\"")]
    NotFound { name: String },

    /// GraphQL error messages joined by newlines, or `unknown`.
    #[error("{0}")]
    Graphql(String),
}

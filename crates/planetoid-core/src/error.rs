use planetoid_api::{PlayersError, PokemonError, SeriesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Players(#[from] PlayersError),

    #[error(transparent)]
    Pokemon(#[from] PokemonError),

    #[error(transparent)]
    Series(#[from] SeriesError),
}

use thiserror::Error;

/// Errors from the players service client.
#[derive(Debug, Error)]
pub enum PlayersError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),

    /// The service answered with a failure status. Server detail is dropped.
    #[error("Error retrieving players.")]
    Retrieve,

    #[error("Error storing player \"{name}\".")]
    Store { name: String },

    #[error("player name must not be blank")]
    InvalidName,
}

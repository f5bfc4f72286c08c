//! Typed gateways to the remote services behind the planetoid front-end.
//!
//! Each gateway issues exactly one request per call and maps the response
//! into owned records or a gateway-specific error. No retries, no caching.

pub mod players;
pub mod pokemon;
pub mod series;

pub use players::{PlayerRecord, PlayersClient, PlayersError};
pub use pokemon::{CreatureRecord, PokemonClient, PokemonError};
pub use series::{SeriesClient, SeriesError, ShowEntry};

/// Content type sent with JSON requests to the players and pokemon services.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

pub mod client;
pub mod error;
pub mod types;

pub use client::{format_fetched_at, Clock, PokemonClient};
pub use error::PokemonError;
pub use types::{Attack, Attacks, Creature, CreatureRecord};

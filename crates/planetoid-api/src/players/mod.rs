pub mod client;
pub mod error;
pub mod types;

pub use client::PlayersClient;
pub use error::PlayersError;
pub use types::PlayerRecord;

pub mod client;
pub mod error;
pub mod types;

pub use client::SeriesClient;
pub use error::SeriesError;
pub use types::{Show, ShowEntry, ShowImage};

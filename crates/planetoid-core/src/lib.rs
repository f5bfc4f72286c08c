pub mod config;
pub mod context;
pub mod error;

pub use config::AppConfig;
pub use context::{AppContext, Dashboard};
pub use error::CoreError;

use chrono::{NaiveTime, Timelike};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::error::PokemonError;
use super::types::{CreatureRecord, GraphQLResponse, PokemonLookup};
use crate::JSON_CONTENT_TYPE;

pub const API_URL: &str = "https://graphql-pokemon2.vercel.app/";

const POKEMON_QUERY: &str = r#"
query PokemonInfo($name: String) {
    pokemon(name: $name) {
        id
        number
        name
        image
        attacks {
            special {
                name
                type
                damage
            }
        }
    }
}
"#;

/// Source of the local wall-clock time stamped onto fetched records.
pub type Clock = fn() -> NaiveTime;

fn local_time() -> NaiveTime {
    chrono::Local::now().time()
}

/// Format a time as `H:MM SS.mmm`: hour unpadded, the rest zero-padded.
pub fn format_fetched_at(time: NaiveTime) -> String {
    // Leap seconds push nanoseconds past 1e9.
    let millis = (time.nanosecond() / 1_000_000).min(999);
    format!(
        "{}:{:02} {:02}.{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        millis
    )
}

/// Pokémon GraphQL API client.
#[derive(Debug, Clone)]
pub struct PokemonClient {
    url: String,
    http: Client,
    clock: Clock,
}

impl PokemonClient {
    pub fn new() -> Self {
        Self::with_endpoint(Client::new(), API_URL)
    }

    pub fn with_endpoint(http: Client, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http,
            clock: local_time,
        }
    }

    /// Replace the clock used for `fetched_at`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// Look a creature up by name.
    ///
    /// The name is lower-cased on the wire; errors quote it as given.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<CreatureRecord, PokemonError> {
        let variable = name.to_lowercase();
        tracing::debug!(operation = "PokemonInfo", pokemon = %variable, "Pokemon GraphQL request");

        // `.json()` leaves an explicit content type alone.
        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&serde_json::json!({
                "query": POKEMON_QUERY,
                "variables": { "name": variable },
            }))
            .send()
            .await?;

        let status = resp.status();
        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| PokemonError::Parse(e.to_string()))?;

        if !status.is_success() {
            let message = GraphQLResponse::from_failure_body(json).error_message();
            tracing::warn!(operation = "PokemonInfo", status = status.as_u16(), %message, "Pokemon API error");
            return Err(PokemonError::Graphql(message));
        }

        let envelope: GraphQLResponse =
            serde_json::from_value(json).map_err(|e| PokemonError::Parse(e.to_string()))?;

        match envelope.into_lookup() {
            PokemonLookup::Found(creature) => Ok(CreatureRecord {
                creature,
                fetched_at: format_fetched_at((self.clock)()),
            }),
            PokemonLookup::Missing => Err(PokemonError::NotFound {
                name: name.to_string(),
            }),
            PokemonLookup::Malformed(e) => Err(PokemonError::Parse(e)),
        }
    }
}

impl Default for PokemonClient {
    fn default() -> Self {
        Self::new()
    }
}

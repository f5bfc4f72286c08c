use planetoid_api::{
    CreatureRecord, PlayerRecord, PlayersClient, PlayersError, PokemonClient, PokemonError,
    SeriesClient, SeriesError, ShowEntry,
};
use reqwest::Client;

use crate::config::AppConfig;
use crate::error::CoreError;

/// Everything the front-end needs, built once at startup.
///
/// The three gateways share one HTTP connection pool and nothing else.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: AppConfig,
    players: PlayersClient,
    pokemon: PokemonClient,
    series: SeriesClient,
}

/// Outcome of running every gateway at once. Each result stands alone.
#[derive(Debug)]
pub struct Dashboard {
    pub players: Result<Vec<PlayerRecord>, PlayersError>,
    pub pokemon: Result<CreatureRecord, PokemonError>,
    pub series: Result<Vec<ShowEntry>, SeriesError>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let http = Client::new();

        let endpoints = &config.endpoints;
        tracing::debug!(
            players = %endpoints.players,
            pokemon = %endpoints.pokemon,
            series = %endpoints.series,
            "registering gateways"
        );

        Ok(Self {
            players: PlayersClient::with_endpoint(http.clone(), endpoints.players.as_str()),
            pokemon: PokemonClient::with_endpoint(http.clone(), endpoints.pokemon.as_str()),
            series: SeriesClient::with_endpoint(http, endpoints.series.as_str()),
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn players(&self) -> &PlayersClient {
        &self.players
    }

    pub fn pokemon(&self) -> &PokemonClient {
        &self.pokemon
    }

    pub fn series(&self) -> &SeriesClient {
        &self.series
    }

    /// Query all three services concurrently.
    pub async fn dashboard(&self, pokemon_name: &str) -> Dashboard {
        let (players, pokemon, series) = tokio::join!(
            self.players.fetch_players(),
            self.pokemon.fetch_pokemon(pokemon_name),
            self.series.get_series(),
        );
        Dashboard {
            players,
            pokemon,
            series,
        }
    }
}

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::error::PlayersError;
use super::types::{NewPlayer, PlayerRecord};
use crate::JSON_CONTENT_TYPE;

pub const PLAYERS_URL: &str = "http://planetoid:8080/players";

/// Client for the planetoid players service.
#[derive(Debug, Clone)]
pub struct PlayersClient {
    url: String,
    http: Client,
}

impl PlayersClient {
    pub fn new() -> Self {
        Self::with_endpoint(Client::new(), PLAYERS_URL)
    }

    pub fn with_endpoint(http: Client, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// List every player known to the service.
    ///
    /// The body is parsed before the status is looked at, so a non-JSON
    /// body is a [`PlayersError::Parse`] whatever the status. A failure
    /// status with a JSON body collapses to [`PlayersError::Retrieve`].
    pub async fn fetch_players(&self) -> Result<Vec<PlayerRecord>, PlayersError> {
        tracing::debug!(operation = "FetchPlayers", url = %self.url, "players request");

        let resp = self
            .http
            .get(&self.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send()
            .await?;

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| PlayersError::Parse(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(operation = "FetchPlayers", status = status.as_u16(), "players service error");
            return Err(PlayersError::Retrieve);
        }

        serde_json::from_value(body).map_err(|e| PlayersError::Parse(e.to_string()))
    }

    /// Store a new player and return the record the service echoes back.
    pub async fn add_player(&self, name: &str) -> Result<PlayerRecord, PlayersError> {
        if name.trim().is_empty() {
            return Err(PlayersError::InvalidName);
        }

        tracing::debug!(operation = "AddPlayer", url = %self.url, player = name, "players request");

        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&NewPlayer { name })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(operation = "AddPlayer", status = status.as_u16(), "players service error");
            return Err(PlayersError::Store {
                name: name.to_string(),
            });
        }

        resp.json::<PlayerRecord>()
            .await
            .map_err(|e| PlayersError::Parse(e.to_string()))
    }
}

impl Default for PlayersClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PlayersClient {
        PlayersClient::with_endpoint(Client::new(), format!("{}/players", server.uri()))
    }

    #[tokio::test]
    async fn test_fetch_players_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players"))
            .and(header("content-type", JSON_CONTENT_TYPE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["ripley", "hicks"])))
            .expect(1)
            .mount(&server)
            .await;

        let players = client_for(&server).fetch_players().await.unwrap();
        assert_eq!(
            players,
            vec![PlayerRecord::new("ripley"), PlayerRecord::new("hicks")]
        );
    }

    #[tokio::test]
    async fn test_fetch_players_keeps_nested_fields() {
        let server = MockServer::start().await;
        let body = json!([{ "name": "bishop", "stats": { "wins": 3, "games": [1, 2] } }]);
        Mock::given(method("GET"))
            .and(path("/players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let players = client_for(&server).fetch_players().await.unwrap();
        assert_eq!(serde_json::to_value(&players).unwrap(), body);
    }

    #[tokio::test]
    async fn test_fetch_players_failure_discards_server_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({ "error": "database exploded" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_players().await.unwrap_err();
        assert!(matches!(err, PlayersError::Retrieve));
        assert_eq!(err.to_string(), "Error retrieving players.");
    }

    #[tokio::test]
    async fn test_fetch_players_non_json_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_players().await.unwrap_err();
        assert!(matches!(err, PlayersError::Parse(_)));
    }

    #[tokio::test]
    async fn test_add_player_posts_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/players"))
            .and(header("content-type", JSON_CONTENT_TYPE))
            .and(body_json(json!({ "name": "newt" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 12, "name": "newt" })))
            .expect(1)
            .mount(&server)
            .await;

        let player = client_for(&server).add_player("newt").await.unwrap();
        assert_eq!(player.name, "newt");
        assert_eq!(player.id(), Some(12));
    }

    #[tokio::test]
    async fn test_add_player_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/players"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).add_player("newt").await.unwrap_err();
        assert_eq!(err.to_string(), "Error storing player \"newt\".");
    }

    #[tokio::test]
    async fn test_add_player_blank_name_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).add_player("   ").await.unwrap_err();
        assert!(matches!(err, PlayersError::InvalidName));
    }
}

use reqwest::Client;

use super::error::SeriesError;
use super::types::ShowEntry;

pub const SEARCH_URL: &str = "http://api.tvmaze.com/search/shows?q=bad";

/// TV show search client. The search term is part of the endpoint.
#[derive(Debug, Clone)]
pub struct SeriesClient {
    url: String,
    http: Client,
}

impl SeriesClient {
    pub fn new() -> Self {
        Self::with_endpoint(Client::new(), SEARCH_URL)
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

    /// Run the search and return the hits in service order.
    pub async fn get_series(&self) -> Result<Vec<ShowEntry>, SeriesError> {
        tracing::debug!(operation = "SearchShows", url = %self.url, "series request");

        let resp = self.http.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation = "SearchShows", status = status_code, "series API error");
            return Err(SeriesError::Api {
                status: status_code,
                message: body,
            });
        }

        resp.json::<Vec<ShowEntry>>()
            .await
            .map_err(|e| SeriesError::Parse(e.to_string()))
    }
}

impl Default for SeriesClient {
    fn default() -> Self {
        Self::new()
    }
}

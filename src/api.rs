use serde::de::DeserializeOwned;
use tracing::{error, info, info_span, instrument};

use crate::error::FetchError;
use crate::model::{Bet, ErrorBody, Game, GamesDocument};

/// The two remote reads the dashboard depends on.
///
/// Calls are blocking; the dashboard runs them on the tokio blocking pool.
pub trait LotteryApi: Send + Sync + 'static {
    /// `GET /cart_games`
    fn fetch_games(&self) -> Result<Vec<Game>, FetchError>;

    /// `GET /bet/all-bets`, optionally scoped to one game type.
    fn fetch_bets(&self, token: &str, game_type: Option<&str>) -> Result<Vec<Bet>, FetchError>;
}

/// ureq-backed client for the lottery API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        // Keep non-2xx responses so their `{ message }` body can be read
        let config = ureq::Agent::config_builder().http_status_as_error(false).build();
        Self { base_url, agent: ureq::Agent::new_with_config(config) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn read_response<T: DeserializeOwned>(
        response_result: Result<ureq::http::Response<ureq::Body>, ureq::Error>,
        url: &str,
    ) -> Result<T, FetchError> {
        match response_result {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) => decode_response(status, &body),
                    Err(e) => {
                        error!(error = %e, status, "Failed to read response body");
                        Err(FetchError::Transport(format!("Failed to read response body: {}", e)))
                    }
                }
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request failed");
                Err(FetchError::Transport(e.to_string()))
            }
        }
    }
}

impl LotteryApi for HttpApi {
    #[instrument(level = "info", skip(self))]
    fn fetch_games(&self) -> Result<Vec<Game>, FetchError> {
        let url = format!("{}/cart_games", self.base_url);
        let response_result = {
            let _span = info_span!("games_fetch", url = %url).entered();
            self.agent.get(&url).call()
        };
        let doc: GamesDocument = Self::read_response(response_result, &url)?;
        info!(count = doc.types.len(), "Fetched games catalog");
        Ok(doc.types)
    }

    #[instrument(level = "info", skip(self, token))]
    fn fetch_bets(&self, token: &str, game_type: Option<&str>) -> Result<Vec<Bet>, FetchError> {
        let url = format!("{}/bet/all-bets", self.base_url);
        let response_result = {
            let _span = info_span!("bets_fetch", url = %url, filter = ?game_type).entered();
            let mut request = self.agent.get(&url).header("Authorization", format!("Bearer {}", token));
            if let Some(game_type) = game_type {
                request = request.query("type[]", game_type);
            }
            request.call()
        };
        let bets: Vec<Bet> = Self::read_response(response_result, &url)?;
        info!(count = bets.len(), "Fetched bets");
        Ok(bets)
    }
}

/// Turn a status and raw body into the expected payload or a classified error.
///
/// 2xx bodies must decode as `T`. A status of 500 or above is never parsed.
/// Other statuses are classified only when the body carries `{ "message": ... }`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<T>(body).map_err(|e| {
            error!(error = %e, status, bytes = body.len(), "Failed to deserialize response body");
            FetchError::Decode(e.to_string())
        });
    }
    if status >= 500 {
        return Err(FetchError::Server { status });
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message }) => Err(FetchError::Rejected { status, message }),
        Err(_) => Err(FetchError::Unstructured { status }),
    }
}

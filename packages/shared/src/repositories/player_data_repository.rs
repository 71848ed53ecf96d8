use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::models::game::{RawGame, RawGameArchive};
use crate::models::stats::RawStats;
use crate::repositories::errors::player_data_repository_errors::PlayerDataRepositoryError;

#[cfg(test)]
use mockall::automock;

const DEFAULT_BASE_URL: &str = "https://api.chess.com/pub";
const DEFAULT_USER_AGENT: &str = "chess-insights";

/// Source of a player's games and rating stats.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerDataRepository: Send + Sync {
    /// One month of games. A month with no archive is an empty list.
    async fn fetch_games(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<RawGame>, PlayerDataRepositoryError>;

    async fn fetch_stats(&self, username: &str) -> Result<RawStats, PlayerDataRepositoryError>;
}

pub struct ChessComRepository {
    pub client: Client,
    pub base_url: String,
    pub user_agent: String,
}

impl ChessComRepository {
    pub fn new() -> Self {
        let base_url =
            std::env::var("CHESS_COM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent = std::env::var("CHESS_COM_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        Self::with_base_url(base_url, user_agent)
    }

    pub fn with_base_url(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
        }
    }

    pub fn games_url(&self, username: &str, year: i32, month: u32) -> String {
        format!(
            "{}/player/{}/games/{}/{:02}",
            self.base_url, username, year, month
        )
    }

    pub fn stats_url(&self, username: &str) -> String {
        format!("{}/player/{}/stats", self.base_url, username)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, PlayerDataRepositoryError> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| PlayerDataRepositoryError::Http(e.to_string()))
    }
}

impl Default for ChessComRepository {
    fn default() -> Self {
        Self::new()
    }
}

async fn upstream_error(response: reqwest::Response) -> PlayerDataRepositoryError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    PlayerDataRepositoryError::UpstreamStatus(status, body)
}

#[async_trait]
impl PlayerDataRepository for ChessComRepository {
    async fn fetch_games(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<RawGame>, PlayerDataRepositoryError> {
        let response = self.get(&self.games_url(username, year, month)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!("No game archive for {} in {}-{:02}", username, year, month);
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let archive: RawGameArchive = response
            .json()
            .await
            .map_err(|e| PlayerDataRepositoryError::Deserialization(e.to_string()))?;

        debug!(
            "Fetched {} games for {} in {}-{:02}",
            archive.games.len(),
            username,
            year,
            month
        );
        Ok(archive.games)
    }

    async fn fetch_stats(&self, username: &str) -> Result<RawStats, PlayerDataRepositoryError> {
        let response = self.get(&self.stats_url(username)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PlayerDataRepositoryError::NotFound);
        }
        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| PlayerDataRepositoryError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_url_pads_month() {
        let repository = ChessComRepository::with_base_url("https://api.chess.com/pub/", "test");

        assert_eq!(
            repository.games_url("alice", 2024, 3),
            "https://api.chess.com/pub/player/alice/games/2024/03"
        );
        assert_eq!(
            repository.games_url("alice", 2023, 12),
            "https://api.chess.com/pub/player/alice/games/2023/12"
        );
    }

    #[test]
    fn test_stats_url() {
        let repository = ChessComRepository::with_base_url("http://localhost:9000", "test");

        assert_eq!(
            repository.stats_url("bob"),
            "http://localhost:9000/player/bob/stats"
        );
    }

    #[test]
    fn test_player_data_repository_method_signatures() {
        struct StubPlayerDataRepository;

        #[async_trait]
        impl PlayerDataRepository for StubPlayerDataRepository {
            async fn fetch_games(
                &self,
                _username: &str,
                _year: i32,
                _month: u32,
            ) -> Result<Vec<RawGame>, PlayerDataRepositoryError> {
                Ok(Vec::new())
            }

            async fn fetch_stats(
                &self,
                _username: &str,
            ) -> Result<RawStats, PlayerDataRepositoryError> {
                Err(PlayerDataRepositoryError::NotFound)
            }
        }

        let _: &dyn PlayerDataRepository = &StubPlayerDataRepository;
    }

    #[test]
    fn test_upstream_status_display() {
        let error = PlayerDataRepositoryError::UpstreamStatus(429, "slow down".to_string());
        assert_eq!(error.to_string(), "Upstream returned 429: slow down");
    }
}

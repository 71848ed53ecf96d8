use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde::{Deserialize, Serialize};
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
use tracing::{debug, warn};

use crate::models::game::GameRecord;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[cfg(test)]
use mockall::automock;

/// A game filed under one of its players. Partition key `player`, sort key
/// `game_id`, so writing the same game twice replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredGame {
    player: String,
    game_id: String,
    record: GameRecord,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Upsert games for `username`. Returns how many were written; games
    /// without an id cannot be keyed and are skipped.
    async fn save_games(
        &self,
        username: &str,
        records: &[GameRecord],
    ) -> Result<usize, GameRepositoryError>;

    async fn get_games(&self, username: &str) -> Result<Vec<GameRecord>, GameRepositoryError>;
}

pub struct DynamoDbGameRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbGameRepository {
    pub fn new(client: Client) -> Result<Self, GameRepositoryError> {
        let table_name = std::env::var("GAMES_TABLE").map_err(|_| {
            GameRepositoryError::Configuration(
                "GAMES_TABLE environment variable must be set".to_string(),
            )
        })?;
        Ok(Self::with_table_name(client, table_name))
    }

    pub fn with_table_name(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl GameRepository for DynamoDbGameRepository {
    async fn save_games(
        &self,
        username: &str,
        records: &[GameRecord],
    ) -> Result<usize, GameRepositoryError> {
        let mut saved = 0;

        for record in records {
            let Some(game_id) = record.id.clone() else {
                warn!("Skipping game without id for {}", username);
                continue;
            };

            let stored = StoredGame {
                player: username.to_string(),
                game_id,
                record: record.clone(),
            };
            let item =
                to_item(stored).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

            self.client
                .put_item()
                .table_name(&self.table_name)
                .set_item(Some(item))
                .send()
                .await
                .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

            saved += 1;
        }

        debug!("Saved {} games for {}", saved, username);
        Ok(saved)
    }

    async fn get_games(&self, username: &str) -> Result<Vec<GameRecord>, GameRepositoryError> {
        let mut records = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("player = :player")
                .expression_attribute_values(":player", AttributeValue::S(username.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

            if let Some(items) = output.items {
                for item in items {
                    let stored: StoredGame = from_item(item)
                        .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;
                    records.push(stored.record);
                }
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::GameResult;

    #[test]
    fn test_stored_game_round_trips_through_item() {
        let stored = StoredGame {
            player: "alice".to_string(),
            game_id: "https://www.chess.com/game/live/1".to_string(),
            record: GameRecord {
                id: Some("https://www.chess.com/game/live/1".to_string()),
                white_username: Some("alice".to_string()),
                white_result: Some(GameResult::Win),
                end_time: Some(1_701_400_000),
                ..Default::default()
            },
        };

        let item: HashMap<String, AttributeValue> = to_item(stored.clone()).unwrap();
        assert_eq!(item.get("player"), Some(&AttributeValue::S("alice".to_string())));

        let restored: StoredGame = from_item(item).unwrap();
        assert_eq!(restored.game_id, stored.game_id);
        assert_eq!(restored.record, stored.record);
    }

    #[test]
    fn test_game_repository_method_signatures() {
        struct StubGameRepository;

        #[async_trait]
        impl GameRepository for StubGameRepository {
            async fn save_games(
                &self,
                _username: &str,
                records: &[GameRecord],
            ) -> Result<usize, GameRepositoryError> {
                Ok(records.len())
            }

            async fn get_games(
                &self,
                _username: &str,
            ) -> Result<Vec<GameRecord>, GameRepositoryError> {
                Ok(Vec::new())
            }
        }

        let _: &dyn GameRepository = &StubGameRepository;
    }
}

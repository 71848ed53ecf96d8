use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde::{Deserialize, Serialize};
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};

use crate::models::stats::{Mode, RatingObservation};
use crate::repositories::errors::rating_repository_errors::RatingRepositoryError;

#[cfg(test)]
use mockall::automock;

/// Rating reading keyed by player and `"<mode>#<observed_at>"`
/// (e.g. `"blitz#1701600000"`), so a repeated snapshot overwrites itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRating {
    player: String,
    observation_key: String,
    mode: Mode,
    rating: i32,
    observed_at: i64,
}

impl StoredRating {
    fn from_observation(observation: &RatingObservation) -> Self {
        StoredRating {
            player: observation.username.clone(),
            observation_key: format!("{}#{}", observation.mode, observation.observed_at),
            mode: observation.mode,
            rating: observation.rating,
            observed_at: observation.observed_at,
        }
    }

    fn into_observation(self) -> RatingObservation {
        RatingObservation {
            username: self.player,
            mode: self.mode,
            rating: self.rating,
            observed_at: self.observed_at,
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn save_observations(
        &self,
        observations: &[RatingObservation],
    ) -> Result<(), RatingRepositoryError>;

    /// Every stored observation for the player, oldest first.
    async fn get_history(
        &self,
        username: &str,
    ) -> Result<Vec<RatingObservation>, RatingRepositoryError>;
}

pub struct DynamoDbRatingRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbRatingRepository {
    pub fn new(client: Client) -> Result<Self, RatingRepositoryError> {
        let table_name = std::env::var("RATINGS_TABLE").map_err(|_| {
            RatingRepositoryError::Configuration(
                "RATINGS_TABLE environment variable must be set".to_string(),
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
impl RatingRepository for DynamoDbRatingRepository {
    async fn save_observations(
        &self,
        observations: &[RatingObservation],
    ) -> Result<(), RatingRepositoryError> {
        for observation in observations {
            let item = to_item(StoredRating::from_observation(observation))
                .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?;

            self.client
                .put_item()
                .table_name(&self.table_name)
                .set_item(Some(item))
                .send()
                .await
                .map_err(|e| RatingRepositoryError::DynamoDb(e.to_string()))?;
        }

        Ok(())
    }

    async fn get_history(
        &self,
        username: &str,
    ) -> Result<Vec<RatingObservation>, RatingRepositoryError> {
        let mut history = Vec::new();
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
                .map_err(|e| RatingRepositoryError::DynamoDb(e.to_string()))?;

            if let Some(items) = output.items {
                for item in items {
                    let stored: StoredRating = from_item(item)
                        .map_err(|e| RatingRepositoryError::Serialization(e.to_string()))?;
                    history.push(stored.into_observation());
                }
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        // Sort keys order by mode first, then by the timestamp as text.
        history.sort_by_key(|observation| observation.observed_at);
        Ok(history)
    }
}

//! Redis-backed friendship source.
//!
//! Adjacency is stored as one Redis set per member under `{prefix}{id}`.
//! The batch contract is realized with a single pipelined `SMEMBERS` per
//! requested member, issued in one round trip.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use tracing::{debug, info, warn};

use crate::error::{RecommendError, Result};
use crate::models::MemberId;

use super::FriendshipSource;

/// Connection settings for the friendship store.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
}

impl RedisConfig {
    /// Loads the configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            key_prefix: std::env::var("AMITY_KEY_PREFIX")
                .unwrap_or_else(|_| "friends:".to_string()),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            key_prefix: "friends:".to_string(),
        }
    }
}

/// Friendship source backed by Redis sets.
pub struct RedisFriendshipSource {
    manager: ConnectionManager,
    key_prefix: String,
}

impl RedisFriendshipSource {
    /// Connects to Redis and prepares a managed connection.
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        info!("Connecting to friendship store at {}", config.url);

        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| RecommendError::Retrieval(format!("invalid redis url: {e}")))?;

        let manager = client
            .get_connection_manager()
            .await
            .map_err(|e| RecommendError::Retrieval(format!("redis connection failed: {e}")))?;

        info!("Connected to friendship store");

        Ok(Self {
            manager,
            key_prefix: config.key_prefix.clone(),
        })
    }

    fn key_for(&self, member_id: MemberId) -> String {
        format!("{}{}", self.key_prefix, member_id)
    }
}

#[async_trait]
impl FriendshipSource for RedisFriendshipSource {
    async fn friends_batch(
        &self,
        member_ids: &HashSet<MemberId>,
    ) -> Result<HashMap<MemberId, HashSet<MemberId>>> {
        if member_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // Fix iteration order so replies can be zipped back to their ids.
        let ordered: Vec<MemberId> = member_ids.iter().copied().collect();

        let mut pipe = redis::pipe();
        for id in &ordered {
            pipe.cmd("SMEMBERS").arg(self.key_for(*id));
        }

        let mut conn = self.manager.clone();
        let replies: Vec<Vec<u64>> = pipe
            .query_async(&mut conn)
            .await
            .map_err(|e| RecommendError::Retrieval(format!("pipelined SMEMBERS failed: {e}")))?;

        debug!(
            requested = ordered.len(),
            "Fetched adjacency sets in one round trip"
        );

        // Empty sets are dropped; absent and empty are equivalent to callers.
        Ok(ordered
            .into_iter()
            .zip(replies)
            .filter(|(_, friends)| !friends.is_empty())
            .map(|(id, friends)| (id, friends.into_iter().map(MemberId::new).collect()))
            .collect())
    }

    async fn health_check(&self) -> Result<bool> {
        let mut conn = self.manager.clone();
        let reply: std::result::Result<String, redis::RedisError> =
            redis::cmd("PING").query_async(&mut conn).await;

        match reply {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!("Friendship store health check failed: {}", e);
                Ok(false)
            }
        }
    }

    fn source_name(&self) -> &str {
        "redis"
    }
}

//! Amity: friend recommendation engine for social graphs.
//!
//! This crate discovers second- and third-degree connections in a friendship
//! graph held in an external key-value store and ranks them with a composite
//! score combining graph proximity, common-friend density, and a behavioral
//! interaction signal.
//!
//! # Example
//!
//! ```ignore
//! use amity::{InMemoryFriendshipSource, RecommendationInput, RecommendationService};
//!
//! let source = InMemoryFriendshipSource::new();
//! let service = RecommendationService::with_defaults(Arc::new(source));
//!
//! let input = RecommendationInput::new(origin, first_degree)
//!     .with_interaction_scores(scores);
//!
//! let ranked = service.recommend(input).await?;
//! ```

pub mod error;
pub mod graph;
pub mod models;
pub mod services;
pub mod store;

// Re-export main types
pub use error::{RecommendError, Result};
pub use graph::{CommonFriendGrouper, DisjointSet, Scorer, ScoringConfig, TraversalEngine};
pub use models::{CandidateInfo, Degree, MemberId, RecommendationCandidate};
pub use services::{RecommendationInput, RecommendationService};
pub use store::{FriendshipSource, InMemoryFriendshipSource, RedisConfig, RedisFriendshipSource};

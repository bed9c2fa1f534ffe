use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::courses::Recommender;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable random source for course subsets and bonus-video picks.
    /// Default: ShuffleRecommender. Tests swap in a seeded implementation so
    /// the deterministic analysis core never touches global randomness.
    pub recommender: Arc<dyn Recommender>,
}

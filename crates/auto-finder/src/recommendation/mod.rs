//! Scoring, ranking, and explanation of catalog vehicles.
//!
//! Every function here is pure: results depend only on the vehicle and the
//! [`PreferenceSet`] passed in, never on ambient state.

mod explain;
mod preferences;
mod ranking;
mod rules;

pub use explain::{explain, justification};
pub use preferences::{
    EcoPriority, PreferenceBounds, PreferenceError, PreferenceSet, UsageProfile,
};
pub use ranking::{rank, ranking_table, top_pick, RankingEntry, ScoredVehicle};
pub use rules::{score, score_breakdown, ScoreComponent, ScoreRule};

use crate::catalog::Catalog;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("no vehicles available to recommend")]
    EmptyCatalog,
}

/// Everything a presentation layer needs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub top_pick: ScoredVehicle,
    pub breakdown: Vec<ScoreComponent>,
    pub explanation: String,
    pub justification: String,
    pub ranking: Vec<RankingEntry>,
}

/// Stateless evaluator over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommend(&self, prefs: &PreferenceSet) -> Result<Recommendation, RecommendationError> {
        let ranked = rank(self.catalog.vehicles(), prefs);
        let best = top_pick(&ranked)?;

        debug!(
            brand = %best.vehicle.brand,
            model = %best.vehicle.model,
            score = best.score,
            candidates = ranked.len(),
            "top pick selected"
        );

        Ok(Recommendation {
            breakdown: score_breakdown(&best.vehicle, prefs),
            explanation: explain(&best.vehicle, prefs),
            justification: justification(&best.vehicle, prefs),
            ranking: ranking_table(&ranked),
            top_pick: best.clone(),
        })
    }
}

use super::preferences::PreferenceSet;
use super::rules::score;
use super::RecommendationError;
use crate::catalog::VehicleRecord;
use serde::Serialize;

/// A catalog vehicle paired with its score for one preference set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVehicle {
    pub vehicle: VehicleRecord,
    pub score: i32,
}

/// Row of the tabular ranking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub brand: String,
    pub model: String,
    pub score: i32,
}

impl ScoredVehicle {
    pub fn summary(&self, rank: usize) -> RankingEntry {
        RankingEntry {
            rank,
            brand: self.vehicle.brand.clone(),
            model: self.vehicle.model.clone(),
            score: self.score,
        }
    }
}

/// Scores every vehicle and orders them best first; ties keep catalog order.
pub fn rank(catalog: &[VehicleRecord], prefs: &PreferenceSet) -> Vec<ScoredVehicle> {
    let mut ranked: Vec<ScoredVehicle> = catalog
        .iter()
        .map(|vehicle| ScoredVehicle {
            score: score(vehicle, prefs),
            vehicle: vehicle.clone(),
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

pub fn top_pick(ranked: &[ScoredVehicle]) -> Result<&ScoredVehicle, RecommendationError> {
    ranked.first().ok_or(RecommendationError::EmptyCatalog)
}

/// One-based ranking rows for display.
pub fn ranking_table(ranked: &[ScoredVehicle]) -> Vec<RankingEntry> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, scored)| scored.summary(index + 1))
        .collect()
}

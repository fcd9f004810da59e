use crate::catalog::{Catalog, Condition, UnknownVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the vehicle will mostly be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageProfile {
    #[serde(alias = "stadt")]
    City,
    #[serde(alias = "langstrecke")]
    LongDistance,
    #[serde(alias = "gemischt")]
    Mixed,
}

impl UsageProfile {
    pub fn label(&self) -> &'static str {
        match self {
            UsageProfile::City => "City",
            UsageProfile::LongDistance => "Long distance",
            UsageProfile::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for UsageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UsageProfile {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "city" | "stadt" => Ok(Self::City),
            "long_distance" | "longdistance" | "langstrecke" => Ok(Self::LongDistance),
            "mixed" | "gemischt" => Ok(Self::Mixed),
            _ => Err(UnknownVariant {
                kind: "usage profile",
                value: value.to_string(),
            }),
        }
    }
}

/// Weight the buyer puts on environmental impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EcoPriority {
    #[serde(alias = "gering")]
    Low,
    #[serde(alias = "mittel")]
    Medium,
    #[serde(alias = "hoch")]
    High,
}

impl EcoPriority {
    pub fn label(&self) -> &'static str {
        match self {
            EcoPriority::Low => "Low",
            EcoPriority::Medium => "Medium",
            EcoPriority::High => "High",
        }
    }
}

impl fmt::Display for EcoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EcoPriority {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" | "gering" => Ok(Self::Low),
            "medium" | "mittel" => Ok(Self::Medium),
            "high" | "hoch" => Ok(Self::High),
            _ => Err(UnknownVariant {
                kind: "eco priority",
                value: value.to_string(),
            }),
        }
    }
}

/// Requirements for a single evaluation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub budget: f64,
    pub required_seats: u8,
    pub usage_profile: UsageProfile,
    pub eco_priority: EcoPriority,
    pub desired_body_type: String,
    pub desired_condition: Condition,
}

impl PreferenceSet {
    /// Starting selection for an interactive form: the bound defaults plus
    /// the first body type offered by the catalog.
    pub fn defaults_for(catalog: &Catalog, bounds: &PreferenceBounds) -> Self {
        Self {
            budget: bounds.default_budget,
            required_seats: bounds.default_seats,
            usage_profile: UsageProfile::City,
            eco_priority: EcoPriority::Low,
            desired_body_type: catalog.body_types().into_iter().next().unwrap_or_default(),
            desired_condition: Condition::New,
        }
    }
}

/// Input limits enforced by the request surfaces, never by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreferenceBounds {
    pub min_budget: f64,
    pub max_budget: f64,
    pub budget_step: f64,
    pub default_budget: f64,
    pub min_seats: u8,
    pub max_seats: u8,
    pub default_seats: u8,
}

impl Default for PreferenceBounds {
    fn default() -> Self {
        Self {
            min_budget: 10_000.0,
            max_budget: 80_000.0,
            budget_step: 1_000.0,
            default_budget: 30_000.0,
            min_seats: 1,
            max_seats: 7,
            default_seats: 4,
        }
    }
}

impl PreferenceBounds {
    pub fn check(&self, prefs: &PreferenceSet, catalog: &Catalog) -> Result<(), PreferenceError> {
        if !(self.min_budget..=self.max_budget).contains(&prefs.budget) {
            return Err(PreferenceError::BudgetOutOfRange {
                budget: prefs.budget,
                min: self.min_budget,
                max: self.max_budget,
            });
        }

        if !(self.min_seats..=self.max_seats).contains(&prefs.required_seats) {
            return Err(PreferenceError::SeatsOutOfRange {
                seats: prefs.required_seats,
                min: self.min_seats,
                max: self.max_seats,
            });
        }

        if !catalog.contains_body_type(&prefs.desired_body_type) {
            return Err(PreferenceError::UnknownBodyType(
                prefs.desired_body_type.clone(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferenceError {
    #[error("budget {budget} outside the supported range {min}..={max}")]
    BudgetOutOfRange { budget: f64, min: f64, max: f64 },
    #[error("seat count {seats} outside the supported range {min}..={max}")]
    SeatsOutOfRange { seats: u8, min: u8, max: u8 },
    #[error("body type '{0}' is not offered by the catalog")]
    UnknownBodyType(String),
}

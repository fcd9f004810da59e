use super::preferences::{EcoPriority, PreferenceSet, UsageProfile};
use crate::catalog::{Drivetrain, VehicleRecord};

const SEPARATOR: &str = ", ";
const FALLBACK: &str = "fits your criteria well";

/// Reasons surfaced to the buyer. Deliberately narrower than the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reason {
    WithinBudget,
    BodyTypeMatch,
    EnoughSeats,
    EcoFriendly,
    LongTrips,
}

impl Reason {
    fn clause(&self) -> &'static str {
        match self {
            Reason::WithinBudget => "within your budget",
            Reason::BodyTypeMatch => "matches your desired vehicle type",
            Reason::EnoughSeats => "offers enough seats",
            Reason::EcoFriendly => "is especially eco-friendly",
            Reason::LongTrips => "is excellent for long trips",
        }
    }

    fn verb_phrase(&self) -> &'static str {
        match self {
            Reason::WithinBudget => "is within your budget",
            other => other.clause(),
        }
    }
}

fn reasons(vehicle: &VehicleRecord, prefs: &PreferenceSet) -> Vec<Reason> {
    let mut reasons = Vec::new();

    if vehicle.price <= prefs.budget {
        reasons.push(Reason::WithinBudget);
    }
    if vehicle.body_type == prefs.desired_body_type {
        reasons.push(Reason::BodyTypeMatch);
    }
    if vehicle.seats >= prefs.required_seats {
        reasons.push(Reason::EnoughSeats);
    }
    if prefs.eco_priority == EcoPriority::High && vehicle.drivetrain == Drivetrain::Electric {
        reasons.push(Reason::EcoFriendly);
    }
    if prefs.usage_profile == UsageProfile::LongDistance && vehicle.range > 700.0 {
        reasons.push(Reason::LongTrips);
    }

    reasons
}

/// Matched justification clauses joined with `", "`, or the fallback clause.
pub fn explain(vehicle: &VehicleRecord, prefs: &PreferenceSet) -> String {
    let reasons = reasons(vehicle, prefs);
    if reasons.is_empty() {
        return FALLBACK.to_string();
    }
    reasons
        .iter()
        .map(Reason::clause)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Full sentence shown under the recommended vehicle.
pub fn justification(vehicle: &VehicleRecord, prefs: &PreferenceSet) -> String {
    let reasons = reasons(vehicle, prefs);
    let body = if reasons.is_empty() {
        FALLBACK.to_string()
    } else {
        reasons
            .iter()
            .map(Reason::verb_phrase)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    };
    format!("This vehicle was selected because it {body}.")
}

use super::preferences::{EcoPriority, PreferenceSet, UsageProfile};
use crate::catalog::{Drivetrain, VehicleRecord, SMALL_CAR_BODY_TYPE};
use serde::{Deserialize, Serialize};

const LONG_RANGE_KM: f64 = 700.0;
const ECO_HIGH_CO2_LIMIT: f64 = 100.0;
const ECO_MEDIUM_CO2_LIMIT: f64 = 130.0;

/// Individual scoring rules, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    BudgetFit,
    BudgetMiss,
    BodyTypeMatch,
    SeatingSufficient,
    ConditionMatch,
    CityElectric,
    CitySmallCar,
    LongDistanceRange,
    LongDistanceDiesel,
    MixedUsage,
    EcoHighElectric,
    EcoHighLowEmissions,
    EcoMediumLowEmissions,
}

/// Discrete contribution to a vehicle score, kept for transparency views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoreRule,
    pub points: i32,
    pub notes: String,
}

impl ScoreComponent {
    fn new(rule: ScoreRule, points: i32, notes: impl Into<String>) -> Self {
        Self {
            rule,
            points,
            notes: notes.into(),
        }
    }
}

/// Additive suitability score of `vehicle` for `prefs`.
pub fn score(vehicle: &VehicleRecord, prefs: &PreferenceSet) -> i32 {
    score_breakdown(vehicle, prefs)
        .iter()
        .map(|component| component.points)
        .sum()
}

/// Every rule that fired for the pair, in table order.
pub fn score_breakdown(vehicle: &VehicleRecord, prefs: &PreferenceSet) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    if vehicle.price <= prefs.budget {
        components.push(ScoreComponent::new(
            ScoreRule::BudgetFit,
            40,
            format!("price {:.0} within budget {:.0}", vehicle.price, prefs.budget),
        ));
    } else {
        components.push(ScoreComponent::new(
            ScoreRule::BudgetMiss,
            -20,
            format!("price {:.0} exceeds budget {:.0}", vehicle.price, prefs.budget),
        ));
    }

    if vehicle.body_type == prefs.desired_body_type {
        components.push(ScoreComponent::new(
            ScoreRule::BodyTypeMatch,
            30,
            format!("body type {} requested", vehicle.body_type),
        ));
    }

    if vehicle.seats >= prefs.required_seats {
        components.push(ScoreComponent::new(
            ScoreRule::SeatingSufficient,
            10,
            format!(
                "{} seats for {} passengers",
                vehicle.seats, prefs.required_seats
            ),
        ));
    }

    if vehicle.condition == prefs.desired_condition {
        components.push(ScoreComponent::new(
            ScoreRule::ConditionMatch,
            10,
            format!("condition {} requested", vehicle.condition),
        ));
    }

    match prefs.usage_profile {
        UsageProfile::City => {
            if vehicle.drivetrain == Drivetrain::Electric {
                components.push(ScoreComponent::new(
                    ScoreRule::CityElectric,
                    10,
                    "electric drivetrain suits city driving",
                ));
            }
            if vehicle.body_type == SMALL_CAR_BODY_TYPE {
                components.push(ScoreComponent::new(
                    ScoreRule::CitySmallCar,
                    5,
                    "small car suits city driving",
                ));
            }
        }
        UsageProfile::LongDistance => {
            if vehicle.range > LONG_RANGE_KM {
                components.push(ScoreComponent::new(
                    ScoreRule::LongDistanceRange,
                    10,
                    format!("range {:.0} km above {LONG_RANGE_KM:.0} km", vehicle.range),
                ));
            }
            if vehicle.drivetrain == Drivetrain::Diesel {
                components.push(ScoreComponent::new(
                    ScoreRule::LongDistanceDiesel,
                    5,
                    "diesel drivetrain suits long trips",
                ));
            }
        }
        UsageProfile::Mixed => {
            components.push(ScoreComponent::new(
                ScoreRule::MixedUsage,
                5,
                "mixed usage bonus",
            ));
        }
    }

    match prefs.eco_priority {
        EcoPriority::High => {
            if vehicle.drivetrain == Drivetrain::Electric {
                components.push(ScoreComponent::new(
                    ScoreRule::EcoHighElectric,
                    15,
                    "electric drivetrain for high eco priority",
                ));
            } else if vehicle.co2_emissions < ECO_HIGH_CO2_LIMIT {
                components.push(ScoreComponent::new(
                    ScoreRule::EcoHighLowEmissions,
                    10,
                    format!(
                        "{:.0} g/km CO2 below {ECO_HIGH_CO2_LIMIT:.0} g/km",
                        vehicle.co2_emissions
                    ),
                ));
            }
        }
        EcoPriority::Medium => {
            if vehicle.co2_emissions < ECO_MEDIUM_CO2_LIMIT {
                components.push(ScoreComponent::new(
                    ScoreRule::EcoMediumLowEmissions,
                    5,
                    format!(
                        "{:.0} g/km CO2 below {ECO_MEDIUM_CO2_LIMIT:.0} g/km",
                        vehicle.co2_emissions
                    ),
                ));
            }
        }
        EcoPriority::Low => {}
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Condition;

    fn model_3() -> VehicleRecord {
        VehicleRecord {
            brand: "Tesla".to_string(),
            model: "Model 3".to_string(),
            price: 42_990.0,
            drivetrain: Drivetrain::Electric,
            horsepower: 283,
            range: 602.0,
            co2_emissions: 0.0,
            seats: 5,
            body_type: "Limo".to_string(),
            condition: Condition::New,
            image_url: None,
        }
    }

    fn city_prefs(budget: f64) -> PreferenceSet {
        PreferenceSet {
            budget,
            required_seats: 4,
            usage_profile: UsageProfile::City,
            eco_priority: EcoPriority::High,
            desired_body_type: "Limo".to_string(),
            desired_condition: Condition::New,
        }
    }

    fn rules(components: &[ScoreComponent]) -> Vec<ScoreRule> {
        components.iter().map(|component| component.rule).collect()
    }

    #[test]
    fn over_budget_electric_sedan_scores_55() {
        assert_eq!(score(&model_3(), &city_prefs(30_000.0)), 55);
    }

    #[test]
    fn within_budget_electric_sedan_scores_115() {
        assert_eq!(score(&model_3(), &city_prefs(50_000.0)), 115);
    }

    #[test]
    fn score_is_deterministic() {
        let vehicle = model_3();
        let prefs = city_prefs(42_990.0);
        let first = score(&vehicle, &prefs);
        for _ in 0..10 {
            assert_eq!(score(&vehicle, &prefs), first);
        }
    }

    #[test]
    fn budget_fit_and_miss_are_exclusive() {
        let vehicle = model_3();
        for budget in [10_000.0, 42_989.0, 42_990.0, 80_000.0] {
            let fired = rules(&score_breakdown(&vehicle, &city_prefs(budget)));
            let fit = fired.contains(&ScoreRule::BudgetFit);
            let miss = fired.contains(&ScoreRule::BudgetMiss);
            assert!(fit ^ miss, "budget {budget} fired {fired:?}");
            assert_eq!(fit, budget >= vehicle.price);
        }
    }

    #[test]
    fn eco_high_electric_excludes_low_emission_bonus() {
        let fired = rules(&score_breakdown(&model_3(), &city_prefs(50_000.0)));
        assert!(fired.contains(&ScoreRule::EcoHighElectric));
        assert!(!fired.contains(&ScoreRule::EcoHighLowEmissions));
    }

    #[test]
    fn eco_high_rewards_low_emission_combustion() {
        let mut vehicle = model_3();
        vehicle.drivetrain = Drivetrain::Hybrid;
        vehicle.co2_emissions = 98.0;

        let breakdown = score_breakdown(&vehicle, &city_prefs(50_000.0));
        let eco = breakdown
            .iter()
            .find(|component| component.rule == ScoreRule::EcoHighLowEmissions)
            .expect("low emission bonus");
        assert_eq!(eco.points, 10);
    }

    #[test]
    fn eco_high_diesel_above_limit_contributes_nothing() {
        let mut vehicle = model_3();
        vehicle.drivetrain = Drivetrain::Diesel;
        vehicle.co2_emissions = 119.0;

        let fired = rules(&score_breakdown(&vehicle, &city_prefs(50_000.0)));
        assert!(!fired.contains(&ScoreRule::EcoHighElectric));
        assert!(!fired.contains(&ScoreRule::EcoHighLowEmissions));
        // budget + body + seats + condition, no city electric bonus either
        assert_eq!(score(&vehicle, &city_prefs(50_000.0)), 90);
    }

    #[test]
    fn eco_medium_uses_wider_emission_limit() {
        let mut vehicle = model_3();
        vehicle.drivetrain = Drivetrain::Diesel;
        vehicle.co2_emissions = 119.0;
        let mut prefs = city_prefs(50_000.0);
        prefs.eco_priority = EcoPriority::Medium;

        let fired = rules(&score_breakdown(&vehicle, &prefs));
        assert!(fired.contains(&ScoreRule::EcoMediumLowEmissions));

        vehicle.co2_emissions = 130.0;
        let fired = rules(&score_breakdown(&vehicle, &prefs));
        assert!(!fired.contains(&ScoreRule::EcoMediumLowEmissions));
    }

    #[test]
    fn city_profile_rewards_small_cars() {
        let mut vehicle = model_3();
        vehicle.drivetrain = Drivetrain::Gasoline;
        vehicle.co2_emissions = 118.0;
        vehicle.body_type = SMALL_CAR_BODY_TYPE.to_string();
        let mut prefs = city_prefs(50_000.0);
        prefs.eco_priority = EcoPriority::Low;

        let fired = rules(&score_breakdown(&vehicle, &prefs));
        assert!(fired.contains(&ScoreRule::CitySmallCar));
        assert!(!fired.contains(&ScoreRule::CityElectric));
        // 40 budget + 10 seats + 10 condition + 5 small car
        assert_eq!(score(&vehicle, &prefs), 65);
    }

    #[test]
    fn long_distance_profile_rewards_range_and_diesel() {
        let mut vehicle = model_3();
        vehicle.drivetrain = Drivetrain::Diesel;
        vehicle.range = 1_100.0;
        vehicle.co2_emissions = 119.0;
        let mut prefs = city_prefs(50_000.0);
        prefs.usage_profile = UsageProfile::LongDistance;
        prefs.eco_priority = EcoPriority::Low;

        let fired = rules(&score_breakdown(&vehicle, &prefs));
        assert_eq!(
            fired,
            vec![
                ScoreRule::BudgetFit,
                ScoreRule::BodyTypeMatch,
                ScoreRule::SeatingSufficient,
                ScoreRule::ConditionMatch,
                ScoreRule::LongDistanceRange,
                ScoreRule::LongDistanceDiesel,
            ]
        );

        vehicle.range = 700.0;
        let fired = rules(&score_breakdown(&vehicle, &prefs));
        assert!(!fired.contains(&ScoreRule::LongDistanceRange));
    }

    #[test]
    fn mixed_profile_adds_flat_bonus() {
        let mut prefs = city_prefs(50_000.0);
        prefs.usage_profile = UsageProfile::Mixed;
        prefs.eco_priority = EcoPriority::Low;

        // 40 budget + 30 body + 10 seats + 10 condition + 5 mixed
        assert_eq!(score(&model_3(), &prefs), 95);
    }

    #[test]
    fn score_equals_sum_of_breakdown() {
        let vehicle = model_3();
        let prefs = city_prefs(30_000.0);
        let total: i32 = score_breakdown(&vehicle, &prefs)
            .iter()
            .map(|component| component.points)
            .sum();
        assert_eq!(score(&vehicle, &prefs), total);
    }
}

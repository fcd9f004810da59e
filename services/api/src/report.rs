use crate::infra::{load_catalog, RecommendationContext};
use auto_finder::catalog::Condition;
use auto_finder::config::AppConfig;
use auto_finder::error::AppError;
use auto_finder::recommendation::{EcoPriority, PreferenceSet, Recommendation, UsageProfile};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Vehicle catalog CSV (defaults to APP_CATALOG_PATH, then the embedded table)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Maximum purchase price in euros
    #[arg(long, default_value_t = 30_000.0)]
    pub(crate) budget: f64,
    /// Number of passengers that must fit
    #[arg(long, default_value_t = 4)]
    pub(crate) seats: u8,
    /// Driving profile: city, long-distance or mixed
    #[arg(long, default_value = "city")]
    pub(crate) usage: UsageProfile,
    /// Environmental priority: low, medium or high
    #[arg(long, default_value = "low")]
    pub(crate) eco: EcoPriority,
    /// Desired body type (defaults to the first one the catalog offers)
    #[arg(long)]
    pub(crate) body_type: Option<String>,
    /// New or used
    #[arg(long, default_value = "new")]
    pub(crate) condition: Condition,
    /// Print the recommendation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Vehicle catalog CSV (defaults to APP_CATALOG_PATH, then the embedded table)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommendation(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.catalog.as_deref(), config.catalog.path.as_deref())?;
    let context = RecommendationContext::new(catalog);

    let prefs = preferences_from_args(&args, &context);
    context.bounds.check(&prefs, context.catalog())?;
    let recommendation = context.recommender.recommend(&prefs)?;

    if args.json {
        match serde_json::to_string_pretty(&recommendation) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Recommendation payload unavailable: {err}"),
        }
    } else {
        render_recommendation(&prefs, &recommendation);
    }

    Ok(())
}

pub(crate) fn run_catalog_listing(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.catalog.as_deref(), config.catalog.path.as_deref())?;

    println!("Vehicle catalog ({} vehicles)", catalog.len());
    for vehicle in catalog.vehicles() {
        println!(
            "- {} | {:.0} EUR | {} | {} | {} seats | {}",
            vehicle.display_name(),
            vehicle.price,
            vehicle.drivetrain,
            vehicle.body_type,
            vehicle.seats,
            vehicle.condition
        );
    }
    println!("\nBody types: {}", catalog.body_types().join(", "));

    Ok(())
}

fn preferences_from_args(args: &RecommendArgs, context: &RecommendationContext) -> PreferenceSet {
    let mut prefs = PreferenceSet::defaults_for(context.catalog(), &context.bounds);
    prefs.budget = args.budget;
    prefs.required_seats = args.seats;
    prefs.usage_profile = args.usage;
    prefs.eco_priority = args.eco;
    prefs.desired_condition = args.condition;
    if let Some(body_type) = &args.body_type {
        prefs.desired_body_type = body_type.clone();
    }
    prefs
}

fn preference_summary(prefs: &PreferenceSet) -> String {
    format!(
        "Preferences: budget {:.0} EUR, {} seats, {} usage, {} eco priority, {} {}",
        prefs.budget,
        prefs.required_seats,
        prefs.usage_profile,
        prefs.eco_priority,
        prefs.desired_condition,
        prefs.desired_body_type
    )
}

fn render_recommendation(prefs: &PreferenceSet, recommendation: &Recommendation) {
    let best = &recommendation.top_pick;
    let vehicle = &best.vehicle;

    println!("Our recommendation for you");
    println!("{}", preference_summary(prefs));

    println!("\n{} (score {})", vehicle.display_name(), best.score);
    println!("- Price: {:.0} EUR", vehicle.price);
    println!("- Drivetrain: {}", vehicle.drivetrain);
    println!("- Horsepower: {}", vehicle.horsepower);
    println!("- Range: {:.0} km", vehicle.range);
    println!("- CO2: {:.0} g/km", vehicle.co2_emissions);
    println!("- Seats: {}", vehicle.seats);
    println!("- Body type: {}", vehicle.body_type);
    println!("- Condition: {}", vehicle.condition);
    match &vehicle.image_url {
        Some(url) => println!("- Image: {url}"),
        None => println!("- Image: none available"),
    }

    println!("\nWhy this vehicle?");
    println!("{}", recommendation.justification);

    println!("\nScore components");
    for component in &recommendation.breakdown {
        println!(
            "  - {:?}: {:+} ({})",
            component.rule, component.points, component.notes
        );
    }

    println!("\nRanking");
    for entry in &recommendation.ranking {
        println!(
            "{:>3}. {} {} ({})",
            entry.rank, entry.brand, entry.model, entry.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auto_finder::catalog::CatalogLoader;

    fn args() -> RecommendArgs {
        RecommendArgs {
            catalog: None,
            budget: 45_000.0,
            seats: 5,
            usage: UsageProfile::LongDistance,
            eco: EcoPriority::Medium,
            body_type: None,
            condition: Condition::Used,
            json: false,
        }
    }

    #[test]
    fn preferences_from_args_defaults_body_type_to_first_offered() {
        let context = RecommendationContext::new(CatalogLoader::embedded().expect("catalog"));
        let prefs = preferences_from_args(&args(), &context);

        assert_eq!(prefs.budget, 45_000.0);
        assert_eq!(prefs.required_seats, 5);
        assert_eq!(prefs.usage_profile, UsageProfile::LongDistance);
        assert_eq!(prefs.desired_body_type, "Kleinwagen");
        assert_eq!(prefs.desired_condition, Condition::Used);
    }

    #[test]
    fn preferences_from_args_keeps_explicit_body_type() {
        let context = RecommendationContext::new(CatalogLoader::embedded().expect("catalog"));
        let mut args = args();
        args.body_type = Some("Kombi".to_string());

        let prefs = preferences_from_args(&args, &context);
        assert_eq!(prefs.desired_body_type, "Kombi");
    }

    #[test]
    fn preference_summary_uses_readable_labels() {
        let context = RecommendationContext::new(CatalogLoader::embedded().expect("catalog"));
        let prefs = preferences_from_args(&args(), &context);

        assert_eq!(
            preference_summary(&prefs),
            "Preferences: budget 45000 EUR, 5 seats, Long distance usage, Medium eco priority, Used Kleinwagen"
        );
    }
}

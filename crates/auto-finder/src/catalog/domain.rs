use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Body type the City usage profile treats as a small car.
pub const SMALL_CAR_BODY_TYPE: &str = "Kleinwagen";

/// Propulsion technology of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drivetrain {
    Electric,
    Diesel,
    Gasoline,
    Hybrid,
}

impl Drivetrain {
    pub fn label(&self) -> &'static str {
        match self {
            Drivetrain::Electric => "Electric",
            Drivetrain::Diesel => "Diesel",
            Drivetrain::Gasoline => "Gasoline",
            Drivetrain::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for Drivetrain {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "electric" | "elektro" | "ev" => Ok(Self::Electric),
            "diesel" => Ok(Self::Diesel),
            "gasoline" | "petrol" | "benzin" => Ok(Self::Gasoline),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(UnknownVariant {
                kind: "drivetrain",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Drivetrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a vehicle is sold new or second-hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[serde(alias = "neu")]
    New,
    #[serde(alias = "gebraucht")]
    Used,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }
}

impl FromStr for Condition {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "new" | "neu" => Ok(Self::New),
            "used" | "gebraucht" => Ok(Self::Used),
            _ => Err(UnknownVariant {
                kind: "condition",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a catalog cell does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// One row of the vehicle catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub drivetrain: Drivetrain,
    pub horsepower: u32,
    pub range: f64,
    pub co2_emissions: f64,
    pub seats: u8,
    pub body_type: String,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl VehicleRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Validated, non-empty, read-only collection of vehicles.
///
/// Only the loader constructs catalogs, so every instance has passed schema
/// and row validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    vehicles: Vec<VehicleRecord>,
}

impl Catalog {
    pub(crate) fn new(vehicles: Vec<VehicleRecord>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Sorted, de-duplicated body types observed in the catalog.
    pub fn body_types(&self) -> Vec<String> {
        self.vehicles
            .iter()
            .map(|vehicle| vehicle.body_type.trim())
            .filter(|body_type| !body_type.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether `body_type` is one of the options [`Catalog::body_types`] offers.
    pub fn contains_body_type(&self, body_type: &str) -> bool {
        let body_type = body_type.trim();
        !body_type.is_empty()
            && self
                .vehicles
                .iter()
                .any(|vehicle| vehicle.body_type.trim() == body_type)
    }
}

use super::domain::{Condition, Drivetrain, VehicleRecord};
use super::{CatalogError, RowError};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Catalog column with its canonical header and the header used by the
/// German-language exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Column {
    pub(crate) name: &'static str,
    pub(crate) alias: &'static str,
    pub(crate) required: bool,
}

pub(crate) const COLUMNS: [Column; 11] = [
    Column::required("Brand", "Marke"),
    Column::required("Model", "Modell"),
    Column::required("Price", "Preis"),
    Column::required("Drivetrain", "Antriebsart"),
    Column::required("Horsepower", "PS"),
    Column::required("Range", "Reichweite"),
    Column::required("CO2", "Verbrauch_CO2"),
    Column::required("Seats", "Sitzplaetze"),
    Column::required("BodyType", "Fahrzeugtyp"),
    Column::required("Condition", "Zustand"),
    Column {
        name: "ImageUrl",
        alias: "Bild_URL",
        required: false,
    },
];

impl Column {
    const fn required(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias,
            required: true,
        }
    }

    fn matches(&self, header: &str) -> bool {
        header.eq_ignore_ascii_case(self.name) || header.eq_ignore_ascii_case(self.alias)
    }
}

pub(crate) fn parse_catalog<R: Read>(reader: R) -> Result<Vec<VehicleRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let raw_headers = csv_reader.headers().map_err(|source| CatalogError::Load {
        line: 1,
        source: RowError::Csv(source),
    })?;
    if raw_headers.is_empty() {
        return Err(CatalogError::Empty);
    }
    let headers = canonical_headers(raw_headers);
    ensure_required_columns(&headers)?;

    let mut vehicles = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| CatalogError::Load {
            line: source.position().map(|pos| pos.line()).unwrap_or_default(),
            source: RowError::Csv(source),
        })?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: CatalogRow =
            record
                .deserialize(Some(&headers))
                .map_err(|source| CatalogError::Load {
                    line,
                    source: RowError::Csv(source),
                })?;
        let vehicle = row
            .into_vehicle()
            .map_err(|source| CatalogError::Load { line, source })?;
        vehicles.push(vehicle);
    }

    Ok(vehicles)
}

fn canonical_headers(raw: &csv::StringRecord) -> csv::StringRecord {
    raw.iter()
        .map(|header| {
            let header = header.trim_start_matches('\u{feff}').trim();
            COLUMNS
                .iter()
                .find(|column| column.matches(header))
                .map(|column| column.name)
                .unwrap_or(header)
                .to_string()
        })
        .collect()
}

fn ensure_required_columns(headers: &csv::StringRecord) -> Result<(), CatalogError> {
    match COLUMNS
        .iter()
        .filter(|column| column.required)
        .find(|column| !headers.iter().any(|header| header == column.name))
    {
        Some(column) => Err(CatalogError::Schema {
            column: column.name,
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Drivetrain")]
    drivetrain: String,
    #[serde(rename = "Horsepower")]
    horsepower: u32,
    #[serde(rename = "Range")]
    range: f64,
    #[serde(rename = "CO2")]
    co2: f64,
    #[serde(rename = "Seats")]
    seats: u8,
    #[serde(rename = "BodyType")]
    body_type: String,
    #[serde(rename = "Condition")]
    condition: String,
    #[serde(rename = "ImageUrl", default, deserialize_with = "empty_string_as_none")]
    image_url: Option<String>,
}

impl CatalogRow {
    fn into_vehicle(self) -> Result<VehicleRecord, RowError> {
        if self.body_type.trim().is_empty() {
            return Err(RowError::BlankField("BodyType"));
        }

        Ok(VehicleRecord {
            drivetrain: self
                .drivetrain
                .parse::<Drivetrain>()
                .map_err(RowError::Value)?,
            condition: self
                .condition
                .parse::<Condition>()
                .map_err(RowError::Value)?,
            brand: self.brand,
            model: self.model,
            price: self.price,
            horsepower: self.horsepower,
            range: self.range,
            co2_emissions: self.co2,
            seats: self.seats,
            body_type: self.body_type,
            image_url: self.image_url,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

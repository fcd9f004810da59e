//! Vehicle catalog loading and validation.
//!
//! Catalogs are parsed from CSV, either from a file or from the table
//! embedded in the crate. Schema validation runs before any row is read and a
//! single malformed row rejects the whole catalog.

mod domain;
mod parser;

pub use domain::{
    Catalog, Condition, Drivetrain, UnknownVariant, VehicleRecord, SMALL_CAR_BODY_TYPE,
};

use std::io::{Cursor, Read};
use std::path::Path;
use tracing::info;

const EMBEDDED_CATALOG: &str = include_str!("../../data/vehicles.csv");

/// Errors raised while turning a CSV source into a [`Catalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read vehicle catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vehicle catalog data on line {line}: {source}")]
    Load {
        line: u64,
        #[source]
        source: RowError,
    },
    #[error("vehicle catalog is missing required column '{column}'")]
    Schema { column: &'static str },
    #[error("vehicle catalog contains no vehicles")]
    Empty,
}

/// Row-level cause of a [`CatalogError::Load`].
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error(transparent)]
    Csv(csv::Error),
    #[error(transparent)]
    Value(UnknownVariant),
    #[error("column '{0}' must not be blank")]
    BlankField(&'static str),
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::parse(file)?;
        info!(vehicles = catalog.len(), source = %path.display(), "vehicle catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let catalog = Self::parse(reader)?;
        info!(vehicles = catalog.len(), source = "reader", "vehicle catalog loaded");
        Ok(catalog)
    }

    /// Catalog compiled into the crate, used when no file is configured.
    pub fn embedded() -> Result<Catalog, CatalogError> {
        let catalog = Self::parse(Cursor::new(EMBEDDED_CATALOG))?;
        info!(vehicles = catalog.len(), source = "embedded", "vehicle catalog loaded");
        Ok(catalog)
    }

    /// Loads from `path` when given, otherwise falls back to the embedded table.
    pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    fn parse<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let vehicles = parser::parse_catalog(reader)?;
        if vehicles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Catalog::new(vehicles))
    }
}

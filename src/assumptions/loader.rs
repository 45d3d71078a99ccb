//! CSV-based reference data loader
//!
//! Loads cost reference tables from CSV files in data/reference/ so price
//! surveys can be refreshed without a rebuild. Every table has a compiled-in
//! default; the loader only matters for deployments that override one.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default path to the reference data directory
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

/// Error raised while loading reference data from CSV
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed reference CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid integer in reference data: {0}")]
    Int(#[from] std::num::ParseIntError),

    #[error("invalid number in reference data: {0}")]
    Float(#[from] std::num::ParseFloatError),

    #[error("reference directory not found: {0}")]
    MissingDirectory(PathBuf),
}

/// Load home prices from CSV
/// Columns: location, bedrooms, price
pub fn load_home_prices(path: &Path) -> Result<Vec<(String, u32, f64)>, ReferenceDataError> {
    let file = File::open(path.join("home_prices.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let location = record[0].to_string();
        let bedrooms: u32 = record[1].parse()?;
        let price: f64 = record[2].parse()?;
        rows.push((location, bedrooms, price));
    }

    Ok(rows)
}

/// Load location-to-state mapping from CSV
/// Columns: location, state
pub fn load_location_states(path: &Path) -> Result<HashMap<String, String>, ReferenceDataError> {
    let file = File::open(path.join("location_states.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut states = HashMap::new();
    for result in reader.records() {
        let record = result?;
        states.insert(record[0].to_string(), record[1].to_string());
    }

    Ok(states)
}

/// Load effective property-tax rates from CSV
/// Columns: state, rate
pub fn load_property_tax_rates(path: &Path) -> Result<HashMap<String, f64>, ReferenceDataError> {
    let file = File::open(path.join("property_tax_rates.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rates = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let rate: f64 = record[1].parse()?;
        rates.insert(record[0].to_string(), rate);
    }

    Ok(rates)
}

/// Load hotel nightly costs from CSV
/// Columns: tier, nightly_cost
pub fn load_hotel_costs(path: &Path) -> Result<HashMap<String, f64>, ReferenceDataError> {
    let file = File::open(path.join("hotel_costs.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut costs = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let cost: f64 = record[1].parse()?;
        costs.insert(record[0].to_string(), cost);
    }

    Ok(costs)
}

/// Load destination daily extras from CSV
/// Columns: destination, daily_cost
pub fn load_vacation_extras(path: &Path) -> Result<HashMap<String, f64>, ReferenceDataError> {
    let file = File::open(path.join("vacation_extras.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut extras = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let cost: f64 = record[1].parse()?;
        extras.insert(record[0].to_string(), cost);
    }

    Ok(extras)
}

/// Load a length-keyed price table from CSV
/// Columns: length_ft, price
pub fn load_length_prices(path: &Path, file_name: &str) -> Result<Vec<(f64, f64)>, ReferenceDataError> {
    let file = File::open(path.join(file_name))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut points = Vec::new();
    for result in reader.records() {
        let record = result?;
        let length: f64 = record[0].parse()?;
        let price: f64 = record[1].parse()?;
        points.push((length, price));
    }

    Ok(points)
}

/// Load education costs from CSV
/// Columns: item, annual_cost (items: private_school, private_university)
pub fn load_education_costs(path: &Path) -> Result<HashMap<String, f64>, ReferenceDataError> {
    let file = File::open(path.join("education_costs.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut costs = HashMap::new();
    for result in reader.records() {
        let record = result?;
        let cost: f64 = record[1].parse()?;
        costs.insert(record[0].to_string(), cost);
    }

    Ok(costs)
}

/// All reference tables as loaded from disk
#[derive(Debug, Clone)]
pub struct LoadedReferenceData {
    pub home_prices: Vec<(String, u32, f64)>,
    pub location_states: HashMap<String, String>,
    pub property_tax_rates: HashMap<String, f64>,
    pub hotel_costs: HashMap<String, f64>,
    pub vacation_extras: HashMap<String, f64>,
    pub sailboat_prices: Vec<(f64, f64)>,
    pub yacht_prices: Vec<(f64, f64)>,
    pub yacht_crew_costs: Vec<(f64, f64)>,
    pub education_costs: HashMap<String, f64>,
}

impl LoadedReferenceData {
    /// Load every reference table from a directory
    pub fn load_from(path: &Path) -> Result<Self, ReferenceDataError> {
        if !path.is_dir() {
            return Err(ReferenceDataError::MissingDirectory(path.to_path_buf()));
        }

        let loaded = Self {
            home_prices: load_home_prices(path)?,
            location_states: load_location_states(path)?,
            property_tax_rates: load_property_tax_rates(path)?,
            hotel_costs: load_hotel_costs(path)?,
            vacation_extras: load_vacation_extras(path)?,
            sailboat_prices: load_length_prices(path, "sailboat_prices.csv")?,
            yacht_prices: load_length_prices(path, "yacht_prices.csv")?,
            yacht_crew_costs: load_length_prices(path, "yacht_crew_costs.csv")?,
            education_costs: load_education_costs(path)?,
        };

        log::info!(
            "loaded reference data from {}: {} home prices, {} tax rates, {} hotel tiers",
            path.display(),
            loaded.home_prices.len(),
            loaded.property_tax_rates.len(),
            loaded.hotel_costs.len(),
        );

        Ok(loaded)
    }
}

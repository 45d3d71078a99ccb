//! Economic assumptions and cost reference data

mod economic;
mod education;
mod homes;
mod tables;
mod travel;
mod watercraft;
pub mod loader;

pub use economic::{AssumptionNote, EconomicAssumptions};
pub use education::EducationCosts;
pub use homes::{
    all_locations, HomePriceTable, PropertyTaxTable, BASELINE_TAX_RATE, FALLBACK_HOME_PRICE,
    PRIMARY_LOCATIONS, VACATION_LOCATIONS,
};
pub use loader::{LoadedReferenceData, ReferenceDataError};
pub use tables::PriceTable;
pub use travel::TravelCostTable;
pub use watercraft::WatercraftPriceTable;

use std::path::Path;

/// Container for all cost reference tables
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub homes: HomePriceTable,
    pub property_tax: PropertyTaxTable,
    pub travel: TravelCostTable,
    pub watercraft: WatercraftPriceTable,
    pub education: EducationCosts,
}

impl ReferenceData {
    /// Compiled-in 2025 price surveys
    pub fn default_2025() -> Self {
        Self {
            homes: HomePriceTable::default_2025(),
            property_tax: PropertyTaxTable::default_rates(),
            travel: TravelCostTable::default_2025(),
            watercraft: WatercraftPriceTable::default_2025(),
            education: EducationCosts::default_2025(),
        }
    }

    /// Load reference data from CSV files in the default location (data/reference/)
    pub fn from_csv() -> Result<Self, ReferenceDataError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_REFERENCE_PATH))
    }

    /// Load reference data from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, ReferenceDataError> {
        let loaded = LoadedReferenceData::load_from(path)?;

        Ok(Self {
            homes: HomePriceTable::from_loaded(&loaded.home_prices),
            property_tax: PropertyTaxTable::from_loaded(
                loaded.property_tax_rates,
                loaded.location_states,
            ),
            travel: TravelCostTable::from_loaded(loaded.hotel_costs, loaded.vacation_extras),
            watercraft: WatercraftPriceTable::from_loaded(
                &loaded.sailboat_prices,
                &loaded.yacht_prices,
                &loaded.yacht_crew_costs,
            ),
            education: EducationCosts::from_loaded(
                loaded.education_costs.get("private_school").copied(),
                loaded.education_costs.get("private_university").copied(),
            ),
        })
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::default_2025()
    }
}

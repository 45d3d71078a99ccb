//! Home purchase prices and property tax rates by location
//!
//! Prices are approximate 2025 USD values based on public market data,
//! deliberately on the high side so the calculator slightly overstates what
//! is needed. Tax rates are effective state-level property-tax rates.

use std::collections::{BTreeMap, HashMap};

/// Generic purchase price when a location has no quoted prices at all
pub const FALLBACK_HOME_PRICE: f64 = 1_500_000.0;

/// Baseline effective property-tax rate for unmapped states
pub const BASELINE_TAX_RATE: f64 = 0.01;

/// Locations offered for a primary residence
pub const PRIMARY_LOCATIONS: &[&str] = &[
    "Palo Alto, CA",
    "San Francisco, CA",
    "New York City, NY",
    "Los Angeles, CA",
    "Miami, FL",
    "Seattle, WA",
    "Austin, TX",
    "Chicago, IL",
    "Denver, CO",
    "Boston, MA",
    "Washington, DC",
];

/// Locations offered for a vacation home
pub const VACATION_LOCATIONS: &[&str] = &[
    "Hawaii (Maui)",
    "Hawaii (Oahu)",
    "Aspen, CO",
    "Lake Tahoe, CA/NV",
    "The Hamptons, NY",
    "Naples, FL",
    "Jackson Hole, WY",
    "Martha's Vineyard, MA",
    "Napa Valley, CA",
];

/// Every location a dependent's home may be placed in
pub fn all_locations() -> Vec<&'static str> {
    PRIMARY_LOCATIONS
        .iter()
        .chain(VACATION_LOCATIONS.iter())
        .copied()
        .collect()
}

/// Home purchase prices by location and bedroom count
#[derive(Debug, Clone)]
pub struct HomePriceTable {
    /// location -> bedroom count -> purchase price
    prices: HashMap<String, BTreeMap<u32, f64>>,
}

impl HomePriceTable {
    /// Compiled-in 2025 price survey
    pub fn default_2025() -> Self {
        let mut prices = HashMap::new();
        for (location, by_bedrooms) in Self::survey_2025() {
            let quoted: BTreeMap<u32, f64> = by_bedrooms
                .iter()
                .map(|&(bedrooms, price)| (bedrooms, price))
                .collect();
            prices.insert(location.to_string(), quoted);
        }
        Self { prices }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(rows: &[(String, u32, f64)]) -> Self {
        let mut prices: HashMap<String, BTreeMap<u32, f64>> = HashMap::new();
        for (location, bedrooms, price) in rows {
            prices
                .entry(location.clone())
                .or_default()
                .insert(*bedrooms, *price);
        }
        Self { prices }
    }

    /// Estimated purchase price for a home
    ///
    /// Exact bedroom count when quoted; otherwise the closest quoted count
    /// for the location; otherwise a generic fallback price.
    pub fn price(&self, location: &str, bedrooms: u32) -> f64 {
        let Some(quoted) = self.prices.get(location) else {
            return FALLBACK_HOME_PRICE;
        };
        if let Some(&price) = quoted.get(&bedrooms) {
            return price;
        }
        quoted
            .iter()
            .min_by_key(|(&count, _)| count.abs_diff(bedrooms))
            .map(|(_, &price)| price)
            .unwrap_or(FALLBACK_HOME_PRICE)
    }

    /// Whether a location has any quoted prices
    pub fn has_location(&self, location: &str) -> bool {
        self.prices.contains_key(location)
    }

    /// Number of quoted (location, bedrooms) price points
    pub fn len(&self) -> usize {
        self.prices.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    fn survey_2025() -> Vec<(&'static str, [(u32, f64); 5])> {
        vec![
            // Primary-home metro areas
            ("Palo Alto, CA",         [(2, 2_200_000.0), (3, 3_200_000.0), (4, 4_500_000.0), (5, 6_000_000.0), (6, 8_000_000.0)]),
            ("San Francisco, CA",     [(2, 1_400_000.0), (3, 1_900_000.0), (4, 2_800_000.0), (5, 3_600_000.0), (6, 4_500_000.0)]),
            ("New York City, NY",     [(2, 1_600_000.0), (3, 2_300_000.0), (4, 3_800_000.0), (5, 5_200_000.0), (6, 7_000_000.0)]),
            ("Los Angeles, CA",       [(2, 1_100_000.0), (3, 1_500_000.0), (4, 2_200_000.0), (5, 3_000_000.0), (6, 4_000_000.0)]),
            ("Miami, FL",             [(2,   650_000.0), (3,   950_000.0), (4, 1_500_000.0), (5, 2_100_000.0), (6, 2_900_000.0)]),
            ("Seattle, WA",           [(2,   850_000.0), (3, 1_150_000.0), (4, 1_650_000.0), (5, 2_200_000.0), (6, 3_000_000.0)]),
            ("Austin, TX",            [(2,   480_000.0), (3,   650_000.0), (4,   900_000.0), (5, 1_250_000.0), (6, 1_700_000.0)]),
            ("Chicago, IL",           [(2,   420_000.0), (3,   580_000.0), (4,   850_000.0), (5, 1_200_000.0), (6, 1_600_000.0)]),
            ("Denver, CO",            [(2,   530_000.0), (3,   700_000.0), (4,   950_000.0), (5, 1_350_000.0), (6, 1_800_000.0)]),
            ("Boston, MA",            [(2,   850_000.0), (3, 1_150_000.0), (4, 1_750_000.0), (5, 2_400_000.0), (6, 3_200_000.0)]),
            ("Washington, DC",        [(2,   750_000.0), (3, 1_000_000.0), (4, 1_500_000.0), (5, 2_100_000.0), (6, 2_800_000.0)]),
            // Vacation-home locations
            ("Hawaii (Maui)",         [(2, 1_300_000.0), (3, 1_900_000.0), (4, 2_600_000.0), (5, 3_600_000.0), (6, 4_800_000.0)]),
            ("Hawaii (Oahu)",         [(2,   950_000.0), (3, 1_350_000.0), (4, 1_900_000.0), (5, 2_600_000.0), (6, 3_400_000.0)]),
            ("Aspen, CO",             [(2, 2_800_000.0), (3, 4_200_000.0), (4, 6_500_000.0), (5, 9_000_000.0), (6, 12_000_000.0)]),
            ("Lake Tahoe, CA/NV",     [(2,   850_000.0), (3, 1_250_000.0), (4, 1_850_000.0), (5, 2_600_000.0), (6, 3_400_000.0)]),
            ("The Hamptons, NY",      [(2, 1_600_000.0), (3, 2_600_000.0), (4, 4_200_000.0), (5, 6_500_000.0), (6, 8_500_000.0)]),
            ("Naples, FL",            [(2,   650_000.0), (3,   950_000.0), (4, 1_500_000.0), (5, 2_100_000.0), (6, 2_900_000.0)]),
            ("Jackson Hole, WY",      [(2, 1_600_000.0), (3, 2_400_000.0), (4, 3_800_000.0), (5, 5_500_000.0), (6, 7_000_000.0)]),
            ("Martha's Vineyard, MA", [(2, 1_300_000.0), (3, 1_900_000.0), (4, 3_000_000.0), (5, 4_200_000.0), (6, 5_800_000.0)]),
            ("Napa Valley, CA",       [(2, 1_000_000.0), (3, 1_500_000.0), (4, 2_200_000.0), (5, 3_200_000.0), (6, 4_200_000.0)]),
        ]
    }
}

impl Default for HomePriceTable {
    fn default() -> Self {
        Self::default_2025()
    }
}

/// Effective property-tax rates, looked up through a location's state
#[derive(Debug, Clone)]
pub struct PropertyTaxTable {
    /// state abbreviation -> effective annual rate
    state_rates: HashMap<String, f64>,
    /// location name -> state abbreviation
    location_states: HashMap<String, String>,
}

impl PropertyTaxTable {
    /// Compiled-in effective rates by state
    pub fn default_rates() -> Self {
        let state_rates = [
            ("CA", 0.0077),
            ("NY", 0.0149),
            ("FL", 0.0089),
            ("TX", 0.0180),
            ("WA", 0.0093),
            ("CO", 0.0055),
            ("IL", 0.0227),
            ("MA", 0.0123),
            ("DC", 0.0056),
            ("HI", 0.0028),
            ("WY", 0.0057),
            ("NV", 0.0060),
        ]
        .iter()
        .map(|&(state, rate)| (state.to_string(), rate))
        .collect();

        let location_states = [
            ("Palo Alto, CA", "CA"),
            ("San Francisco, CA", "CA"),
            ("Los Angeles, CA", "CA"),
            ("Napa Valley, CA", "CA"),
            // Tahoe homes are assumed on the Nevada side
            ("Lake Tahoe, CA/NV", "NV"),
            ("New York City, NY", "NY"),
            ("The Hamptons, NY", "NY"),
            ("Miami, FL", "FL"),
            ("Naples, FL", "FL"),
            ("Austin, TX", "TX"),
            ("Seattle, WA", "WA"),
            ("Denver, CO", "CO"),
            ("Aspen, CO", "CO"),
            ("Chicago, IL", "IL"),
            ("Boston, MA", "MA"),
            ("Martha's Vineyard, MA", "MA"),
            ("Washington, DC", "DC"),
            ("Hawaii (Maui)", "HI"),
            ("Hawaii (Oahu)", "HI"),
            ("Jackson Hole, WY", "WY"),
        ]
        .iter()
        .map(|&(location, state)| (location.to_string(), state.to_string()))
        .collect();

        Self {
            state_rates,
            location_states,
        }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(
        state_rates: HashMap<String, f64>,
        location_states: HashMap<String, String>,
    ) -> Self {
        Self {
            state_rates,
            location_states,
        }
    }

    /// Effective annual property-tax rate for a location
    ///
    /// Unmapped locations are treated as California; unmapped states fall
    /// back to a 1% baseline.
    pub fn rate(&self, location: &str) -> f64 {
        let state = self
            .location_states
            .get(location)
            .map(String::as_str)
            .unwrap_or("CA");
        self.state_rates.get(state).copied().unwrap_or(BASELINE_TAX_RATE)
    }
}

impl Default for PropertyTaxTable {
    fn default() -> Self {
        Self::default_rates()
    }
}

//! Vacation cost reference data: hotel tiers and destination extras

use std::collections::HashMap;

/// Nightly cost assumed when a hotel tier is not in the table
pub const DEFAULT_NIGHTLY_COST: f64 = 800.0;

/// Daily extras assumed when a destination is not in the table
pub const DEFAULT_DAILY_EXTRAS: f64 = 300.0;

/// Hotel and destination cost tables
///
/// Hotel costs are per room per night, one room for two adults. Daily
/// extras cover food, activities, and transport for two people.
#[derive(Debug, Clone)]
pub struct TravelCostTable {
    /// hotel tier -> nightly room cost
    hotel_costs: HashMap<String, f64>,
    /// destination -> daily extras beyond the hotel
    daily_extras: HashMap<String, f64>,
}

impl TravelCostTable {
    /// Compiled-in 2025 cost survey
    pub fn default_2025() -> Self {
        let hotel_costs = [
            ("Ultra-luxury (Four Seasons, Aman)", 1_500.0),
            ("Luxury (Ritz-Carlton, St. Regis)", 800.0),
            ("Upscale (Marriott, Hyatt)", 350.0),
            ("Mid-range", 200.0),
        ]
        .iter()
        .map(|&(tier, cost)| (tier.to_string(), cost))
        .collect();

        let daily_extras = [
            ("Europe", 400.0),
            ("Asia", 300.0),
            ("Caribbean", 350.0),
            ("US domestic", 250.0),
            ("South America", 250.0),
            ("Africa", 350.0),
            ("Australia / NZ", 350.0),
        ]
        .iter()
        .map(|&(destination, cost)| (destination.to_string(), cost))
        .collect();

        Self {
            hotel_costs,
            daily_extras,
        }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(hotel_costs: HashMap<String, f64>, daily_extras: HashMap<String, f64>) -> Self {
        Self {
            hotel_costs,
            daily_extras,
        }
    }

    /// Nightly room cost for a hotel tier
    pub fn nightly_cost(&self, tier: &str) -> f64 {
        self.hotel_costs.get(tier).copied().unwrap_or(DEFAULT_NIGHTLY_COST)
    }

    /// Daily extras for a destination
    pub fn daily_extras(&self, destination: &str) -> f64 {
        self.daily_extras
            .get(destination)
            .copied()
            .unwrap_or(DEFAULT_DAILY_EXTRAS)
    }

    /// Hotel tiers offered, priciest first
    pub fn hotel_tiers(&self) -> Vec<&str> {
        let mut tiers: Vec<&str> = self.hotel_costs.keys().map(String::as_str).collect();
        tiers.sort_by(|a, b| {
            self.nightly_cost(b)
                .total_cmp(&self.nightly_cost(a))
                .then(a.cmp(b))
        });
        tiers
    }

    /// Destinations offered, alphabetical
    pub fn destinations(&self) -> Vec<&str> {
        let mut destinations: Vec<&str> = self.daily_extras.keys().map(String::as_str).collect();
        destinations.sort();
        destinations
    }
}

impl Default for TravelCostTable {
    fn default() -> Self {
        Self::default_2025()
    }
}

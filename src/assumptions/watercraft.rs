//! Watercraft purchase prices and crew costs by hull length

use super::tables::PriceTable;

/// Sailboat, motor yacht, and yacht crew cost tables
///
/// All three are sparse length-keyed tables; queries between quoted lengths
/// interpolate linearly through [`PriceTable`].
#[derive(Debug, Clone)]
pub struct WatercraftPriceTable {
    sailboat_prices: PriceTable,
    yacht_prices: PriceTable,
    crew_costs: PriceTable,
}

impl WatercraftPriceTable {
    /// Compiled-in 2025 brokerage survey
    pub fn default_2025() -> Self {
        Self {
            sailboat_prices: PriceTable::from_points(&[
                (25.0, 80_000.0),
                (30.0, 170_000.0),
                (35.0, 280_000.0),
                (40.0, 450_000.0),
                (45.0, 650_000.0),
                (50.0, 950_000.0),
            ]),
            yacht_prices: PriceTable::from_points(&[
                (40.0, 500_000.0),
                (50.0, 1_000_000.0),
                (60.0, 1_800_000.0),
                (80.0, 4_000_000.0),
                (100.0, 9_000_000.0),
                (120.0, 18_000_000.0),
                (150.0, 35_000_000.0),
                (200.0, 90_000_000.0),
            ]),
            crew_costs: PriceTable::from_points(&[
                (40.0, 100_000.0),
                (50.0, 150_000.0),
                (60.0, 250_000.0),
                (80.0, 400_000.0),
                (100.0, 700_000.0),
                (120.0, 1_000_000.0),
                (150.0, 1_800_000.0),
                (200.0, 3_000_000.0),
            ]),
        }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(sailboat: &[(f64, f64)], yacht: &[(f64, f64)], crew: &[(f64, f64)]) -> Self {
        Self {
            sailboat_prices: PriceTable::from_points(sailboat),
            yacht_prices: PriceTable::from_points(yacht),
            crew_costs: PriceTable::from_points(crew),
        }
    }

    /// Sailboat purchase price for a hull length in feet
    pub fn sailboat_price(&self, length_ft: u32) -> f64 {
        self.sailboat_prices.value_at(length_ft as f64)
    }

    /// Motor yacht purchase price for a hull length in feet
    pub fn yacht_price(&self, length_ft: u32) -> f64 {
        self.yacht_prices.value_at(length_ft as f64)
    }

    /// Annual full-time crew payroll for a yacht of the given length
    pub fn yacht_crew_cost(&self, length_ft: u32) -> f64 {
        self.crew_costs.value_at(length_ft as f64)
    }
}

impl Default for WatercraftPriceTable {
    fn default() -> Self {
        Self::default_2025()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_lengths() {
        let watercraft = WatercraftPriceTable::default_2025();
        assert!((watercraft.sailboat_price(35) - 280_000.0).abs() < 1e-9);
        assert!((watercraft.yacht_price(60) - 1_800_000.0).abs() < 1e-9);
        assert!((watercraft.yacht_crew_cost(100) - 700_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_interpolated_lengths() {
        let watercraft = WatercraftPriceTable::default_2025();
        let price = watercraft.sailboat_price(37);
        assert!(price > 280_000.0 && price < 450_000.0);

        // Halfway between the 60ft and 80ft quotes
        assert!((watercraft.yacht_price(70) - 2_900_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_small_dinghy_clamps_to_smallest() {
        let watercraft = WatercraftPriceTable::default_2025();
        assert!((watercraft.sailboat_price(10) - 80_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_megayacht_extrapolation_capped() {
        let watercraft = WatercraftPriceTable::default_2025();
        assert!(watercraft.yacht_price(500) <= 180_000_000.0);
    }
}

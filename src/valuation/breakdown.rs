//! Itemized cost breakdown output

use serde::{Deserialize, Serialize};

/// Itemized present-value costs by category
///
/// Built up in place over one calculation, then returned to the caller.
/// Every field is a non-negative present value in today's dollars; the
/// derived totals are recomputed on each call rather than cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub primary_home_purchase: f64,
    pub primary_home_ongoing: f64,
    pub vacation_home_purchase: f64,
    pub vacation_home_ongoing: f64,
    pub living_expenses: f64,
    pub vacations: f64,
    pub sailboat: f64,
    pub yacht: f64,
    pub custom_expenses: f64,
    pub children_education: f64,
    pub children_homes: f64,
    pub children_expenses: f64,
    pub grandchildren_total: f64,
}

impl CostBreakdown {
    /// Purchase plus ongoing costs for both homes
    pub fn housing_total(&self) -> f64 {
        self.primary_home_purchase
            + self.primary_home_ongoing
            + self.vacation_home_purchase
            + self.vacation_home_ongoing
    }

    pub fn watercraft_total(&self) -> f64 {
        self.sailboat + self.yacht
    }

    pub fn children_total(&self) -> f64 {
        self.children_education + self.children_homes + self.children_expenses
    }

    /// The nest egg needed today to fund everything
    pub fn grand_total(&self) -> f64 {
        self.housing_total()
            + self.living_expenses
            + self.vacations
            + self.watercraft_total()
            + self.custom_expenses
            + self.children_total()
            + self.grandchildren_total
    }

    /// Non-zero categories for charting and display
    pub fn categories(&self) -> Vec<CostCategory> {
        let candidates = [
            ("Housing", self.housing_total()),
            ("Living Expenses", self.living_expenses),
            ("Vacations", self.vacations),
            ("Watercraft", self.watercraft_total()),
            ("Other Expenses", self.custom_expenses),
            ("Children's Education", self.children_education),
            ("Children's Homes", self.children_homes),
            ("Children's Living Expenses", self.children_expenses),
            ("Grandchildren", self.grandchildren_total),
        ];

        candidates
            .iter()
            .filter(|(_, value)| *value > 0.0)
            .map(|&(name, value)| CostCategory { name, value })
            .collect()
    }
}

/// One display category with its present-value total
#[derive(Debug, Clone, Serialize)]
pub struct CostCategory {
    pub name: &'static str,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_breakdown() -> CostBreakdown {
        CostBreakdown {
            primary_home_purchase: 3_000_000.0,
            primary_home_ongoing: 1_000_000.0,
            living_expenses: 8_000_000.0,
            sailboat: 500_000.0,
            children_education: 750_000.0,
            ..CostBreakdown::default()
        }
    }

    #[test]
    fn test_derived_totals() {
        let breakdown = sample_breakdown();
        assert!((breakdown.housing_total() - 4_000_000.0).abs() < 1e-9);
        assert!((breakdown.watercraft_total() - 500_000.0).abs() < 1e-9);
        assert!((breakdown.children_total() - 750_000.0).abs() < 1e-9);
        assert!((breakdown.grand_total() - 13_250_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_breakdown_totals_zero() {
        let breakdown = CostBreakdown::default();
        assert_eq!(breakdown.grand_total(), 0.0);
        assert!(breakdown.categories().is_empty());
    }

    #[test]
    fn test_categories_skip_zero_entries() {
        let breakdown = sample_breakdown();
        let categories = breakdown.categories();
        let names: Vec<&str> = categories.iter().map(|c| c.name).collect();

        assert_eq!(
            names,
            vec!["Housing", "Living Expenses", "Watercraft", "Children's Education"]
        );
        assert!(categories.iter().all(|c| c.value > 0.0));
    }

    #[test]
    fn test_categories_cover_grand_total() {
        let breakdown = sample_breakdown();
        let sum: f64 = breakdown.categories().iter().map(|c| c.value).sum();
        assert!((sum - breakdown.grand_total()).abs() < 1e-6);
    }
}

//! Economic assumptions underlying every calculation
//!
//! All arithmetic downstream works in REAL (inflation-adjusted) dollars:
//!
//!     real_return = (1 + nominal_return) / (1 + inflation) - 1
//!
//! Because every cost is expressed in today's dollars and discounted at the
//! real rate, general inflation cancels out of the arithmetic. Education
//! costs, which historically outpace general inflation, carry a separate
//! real growth rate on top.

use serde::{Deserialize, Serialize};

/// Conservative economic assumptions for a calculation
///
/// Constructed once per calculation and never mutated. The derived real
/// rates are computed on read so an adjusted copy stays consistent.
/// `inflation` and `nominal_return` must each exceed -1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicAssumptions {
    /// Expected nominal annual return on a balanced portfolio
    pub nominal_return: f64,

    /// General CPI inflation
    pub inflation: f64,

    /// Education-cost inflation (tuition outpaces CPI)
    pub education_inflation: f64,

    /// Annual upkeep as a fraction of home value
    pub home_maintenance_rate: f64,

    /// Annual upkeep as a fraction of boat purchase price
    pub boat_maintenance_rate: f64,

    /// Planning horizon: assume everyone lives to this age
    pub life_expectancy: u32,
}

impl EconomicAssumptions {
    /// Default conservative assumptions: 6% nominal, 3% CPI, 5% education
    /// inflation, 1% home upkeep, 10% boat upkeep, plan to age 90
    pub fn conservative() -> Self {
        Self {
            nominal_return: 0.06,
            inflation: 0.03,
            education_inflation: 0.05,
            home_maintenance_rate: 0.01,
            boat_maintenance_rate: 0.10,
            life_expectancy: 90,
        }
    }

    /// After-inflation portfolio return (Fisher relation)
    pub fn real_return(&self) -> f64 {
        (1.0 + self.nominal_return) / (1.0 + self.inflation) - 1.0
    }

    /// How fast education costs grow above general inflation
    pub fn education_real_growth(&self) -> f64 {
        (1.0 + self.education_inflation) / (1.0 + self.inflation) - 1.0
    }

    /// Human-readable assumption notes for display alongside results
    pub fn describe(&self) -> Vec<AssumptionNote> {
        vec![
            AssumptionNote {
                label: "Portfolio return (nominal)".to_string(),
                value: format!("{:.1}%", self.nominal_return * 100.0),
                detail: "Expected annual return on a balanced 60/40 stock/bond \
                         portfolio, slightly below the long-run historical average \
                         to be conservative."
                    .to_string(),
            },
            AssumptionNote {
                label: "General inflation".to_string(),
                value: format!("{:.1}%", self.inflation * 100.0),
                detail: "Slightly above the Federal Reserve's 2% target to account \
                         for periods of above-target inflation."
                    .to_string(),
            },
            AssumptionNote {
                label: "Real (after-inflation) return".to_string(),
                value: format!("{:.2}%", self.real_return() * 100.0),
                detail: "The purchasing-power return the portfolio actually earns. \
                         Calculated as (1 + nominal) / (1 + inflation) - 1."
                    .to_string(),
            },
            AssumptionNote {
                label: "Education cost inflation".to_string(),
                value: format!("{:.1}%", self.education_inflation * 100.0),
                detail: "Tuition at elite private schools and universities has \
                         historically grown at ~5% per year, well above general CPI."
                    .to_string(),
            },
            AssumptionNote {
                label: "Home maintenance".to_string(),
                value: format!("{:.1}% of home value / year", self.home_maintenance_rate * 100.0),
                detail: "Standard rule of thumb for ongoing repairs, insurance, and \
                         upkeep on a residential property."
                    .to_string(),
            },
            AssumptionNote {
                label: "Boat / yacht maintenance".to_string(),
                value: format!("{:.0}% of purchase price / year", self.boat_maintenance_rate * 100.0),
                detail: "The 'hole in the water you pour money into' rule. Boats are \
                         notoriously expensive to dock, insure, and maintain."
                    .to_string(),
            },
            AssumptionNote {
                label: "Property tax".to_string(),
                value: "Varies by state (0.3% - 2.3%)".to_string(),
                detail: "Uses the effective property-tax rate for each selected \
                         location (e.g. 0.77% in California, 2.27% in Illinois)."
                    .to_string(),
            },
            AssumptionNote {
                label: "Life expectancy".to_string(),
                value: format!("{} years", self.life_expectancy),
                detail: "Plan conservatively for a long life so the money doesn't \
                         run out. Applies to the user, their children, and their \
                         grandchildren."
                    .to_string(),
            },
        ]
    }
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self::conservative()
    }
}

/// One labeled assumption shown on a results page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssumptionNote {
    pub label: String,
    pub value: String,
    pub detail: String,
}

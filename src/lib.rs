//! Lifestyle Calculator - present-value engine for pricing a target lifestyle
//!
//! This library provides:
//! - Present-value primitives (level, growing, and deferred annuities, lump sums)
//! - Conservative economic assumptions with Fisher-derived real rates
//! - Cost reference data (home prices, travel, watercraft, education) with CSV overrides
//! - An itemizing cost engine covering the user, their children, and grandchildren
//! - A scenario runner for batch and sensitivity calculations

pub mod assumptions;
pub mod lifestyle;
pub mod valuation;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{EconomicAssumptions, ReferenceData};
pub use lifestyle::{ChildSpec, HomeSpec, LifestyleInputs};
pub use valuation::{CostBreakdown, LifestyleEngine, PvCalculator};
pub use scenario::ScenarioRunner;

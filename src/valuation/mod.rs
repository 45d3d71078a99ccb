//! Present-value primitives, engine, and breakdown output

mod breakdown;
mod discount;
mod engine;

pub use breakdown::{CostBreakdown, CostCategory};
pub use discount::PvCalculator;
pub use engine::LifestyleEngine;

//! Scenario runner for efficient batch calculations
//!
//! Pre-loads assumptions and reference data once, then allows running many
//! calculations without re-reading CSV files.

use std::path::Path;

use crate::assumptions::{EconomicAssumptions, ReferenceData, ReferenceDataError};
use crate::lifestyle::LifestyleInputs;
use crate::valuation::{CostBreakdown, LifestyleEngine};

/// Pre-loaded scenario runner for efficient batch calculations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // Run many lifestyles against the same data
/// for inputs in &scenarios {
///     let breakdown = runner.run(inputs);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: EconomicAssumptions,
    reference: ReferenceData,
}

impl ScenarioRunner {
    /// Create runner with conservative assumptions and compiled-in prices
    pub fn new() -> Self {
        Self {
            assumptions: EconomicAssumptions::conservative(),
            reference: ReferenceData::default_2025(),
        }
    }

    /// Create runner by loading reference data from CSV files
    pub fn from_csv() -> Result<Self, ReferenceDataError> {
        Ok(Self {
            assumptions: EconomicAssumptions::conservative(),
            reference: ReferenceData::from_csv()?,
        })
    }

    /// Create runner from a specific reference data directory
    pub fn from_csv_path(path: &Path) -> Result<Self, ReferenceDataError> {
        Ok(Self {
            assumptions: EconomicAssumptions::conservative(),
            reference: ReferenceData::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions and reference data
    pub fn with_data(assumptions: EconomicAssumptions, reference: ReferenceData) -> Self {
        Self {
            assumptions,
            reference,
        }
    }

    /// Run a single calculation
    pub fn run(&self, inputs: &LifestyleInputs) -> CostBreakdown {
        let engine = LifestyleEngine::new(self.assumptions.clone(), self.reference.clone());
        engine.calculate(inputs)
    }

    /// Run calculations for multiple lifestyles with the same assumptions
    pub fn run_batch(&self, scenarios: &[LifestyleInputs]) -> Vec<CostBreakdown> {
        let engine = LifestyleEngine::new(self.assumptions.clone(), self.reference.clone());
        scenarios.iter().map(|inputs| engine.calculate(inputs)).collect()
    }

    /// Run one lifestyle under multiple assumption variants
    pub fn run_sensitivities(
        &self,
        inputs: &LifestyleInputs,
        variants: &[EconomicAssumptions],
    ) -> Vec<CostBreakdown> {
        variants
            .iter()
            .map(|assumptions| {
                let engine = LifestyleEngine::new(assumptions.clone(), self.reference.clone());
                engine.calculate(inputs)
            })
            .collect()
    }

    /// Get reference to the assumptions for inspection/modification
    pub fn assumptions(&self) -> &EconomicAssumptions {
        &self.assumptions
    }

    /// Get mutable reference to the assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut EconomicAssumptions {
        &mut self.assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

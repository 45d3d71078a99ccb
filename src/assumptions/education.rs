//! Education cost reference data

/// Annual education costs in 2025 dollars
///
/// School tuition covers elite K-12 private schools; university covers
/// tuition plus room and board at top private universities. Both grow at
/// the education real-growth rate during valuation.
#[derive(Debug, Clone)]
pub struct EducationCosts {
    /// Elite K-12 private school, per year
    pub private_school_annual: f64,

    /// Top private university tuition + room & board, per year
    pub private_university_annual: f64,
}

impl EducationCosts {
    pub fn default_2025() -> Self {
        Self {
            private_school_annual: 55_000.0,
            private_university_annual: 90_000.0,
        }
    }

    /// Create from loaded CSV data, keeping defaults for missing items
    pub fn from_loaded(private_school: Option<f64>, private_university: Option<f64>) -> Self {
        let defaults = Self::default_2025();
        Self {
            private_school_annual: private_school.unwrap_or(defaults.private_school_annual),
            private_university_annual: private_university.unwrap_or(defaults.private_university_annual),
        }
    }
}

impl Default for EducationCosts {
    fn default() -> Self {
        Self::default_2025()
    }
}

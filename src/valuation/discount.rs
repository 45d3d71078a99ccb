//! Present-value primitives for real-dollar cashflows
//!
//! Supports:
//! - Level annuities (equal annual payments)
//! - Growing annuities (payments rising at a fixed real rate)
//! - Single future lump sums
//! - Deferred annuities (first payment in the future, or already underway)
//!
//! All amounts are real (today's) dollars and all rates are real annual
//! rates, so the same formulas serve every cost category.

/// Rates closer together than this are treated as equal to avoid
/// dividing by a vanishing difference
const RATE_EPSILON: f64 = 1e-10;

/// Helper functions for present value calculations
pub struct PvCalculator;

impl PvCalculator {
    /// PV of withdrawing `pmt` each year for `years` years, first payment
    /// one year from now
    ///
    /// Formula: PMT * [1 - (1+r)^(-n)] / r
    pub fn level_annuity(pmt: f64, years: i32, rate: f64) -> f64 {
        if years <= 0 || pmt == 0.0 {
            return 0.0;
        }
        if rate.abs() < RATE_EPSILON {
            return pmt * years as f64;
        }
        pmt * (1.0 - (1.0 + rate).powi(-years)) / rate
    }

    /// PV of an annuity whose payments grow at real rate `growth` each year
    ///
    /// Used for education costs that outpace general inflation.
    /// Formula: PMT * [1 - ((1+g)/(1+r))^n] / (r - g)
    pub fn growing_annuity(first_pmt: f64, years: i32, growth: f64, rate: f64) -> f64 {
        if years <= 0 || first_pmt == 0.0 {
            return 0.0;
        }
        if (rate - growth).abs() < RATE_EPSILON {
            return first_pmt * years as f64 / (1.0 + rate);
        }
        first_pmt * (1.0 - ((1.0 + growth) / (1.0 + rate)).powi(years)) / (rate - growth)
    }

    /// PV of a lump sum due `years` from now
    ///
    /// Amounts due now or in the past are already present value.
    /// Formula: amount / (1+r)^n
    pub fn lump_sum(amount: f64, years: i32, rate: f64) -> f64 {
        if years <= 0 {
            return amount;
        }
        amount / (1.0 + rate).powi(years)
    }

    /// PV of an annuity of `duration` payments beginning `deferral` years
    /// from now
    ///
    /// Computes the value of the annuity as of its start date, then
    /// discounts that lump sum back to today. A negative deferral means the
    /// annuity already started `|deferral|` years ago: the payment is grown
    /// forward to today and only the remaining payments are valued.
    pub fn deferred_annuity(pmt: f64, duration: i32, deferral: i32, growth: f64, rate: f64) -> f64 {
        if deferral < 0 {
            let elapsed = -deferral;
            let remaining = duration - elapsed;
            if remaining <= 0 {
                return 0.0;
            }
            let adjusted_pmt = pmt * (1.0 + growth).powi(elapsed);
            if growth > 0.0 {
                return Self::growing_annuity(adjusted_pmt, remaining, growth, rate);
            }
            return Self::level_annuity(adjusted_pmt, remaining, rate);
        }

        let pv_at_start = if growth > 0.0 {
            Self::growing_annuity(pmt, duration, growth, rate)
        } else {
            Self::level_annuity(pmt, duration, rate)
        };

        Self::lump_sum(pv_at_start, deferral, rate)
    }
}

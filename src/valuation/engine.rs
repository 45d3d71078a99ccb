//! Core valuation engine
//!
//! Turns a lifestyle description into an itemized present-value breakdown.
//! Every cost category reduces to one of the discounting primitives; homes
//! and boats bought today enter at face value, everything recurring is an
//! annuity over the remaining planning horizon.

use crate::assumptions::{EconomicAssumptions, ReferenceData};
use crate::lifestyle::{ChildSpec, HomeSpec, LifestyleInputs};

use super::breakdown::CostBreakdown;
use super::discount::PvCalculator;

/// Present-value cost of provisioning one dependent
#[derive(Debug, Clone, Copy, Default)]
struct DependentCosts {
    education: f64,
    homes: f64,
    expenses: f64,
}

impl DependentCosts {
    fn total(self) -> f64 {
        self.education + self.homes + self.expenses
    }
}

/// Main valuation engine
///
/// Holds the economic assumptions and reference tables for one calculation
/// setup. `calculate` is pure: identical inputs produce identical
/// breakdowns, and concurrent calls share nothing mutable.
pub struct LifestyleEngine {
    assumptions: EconomicAssumptions,
    reference: ReferenceData,
}

impl LifestyleEngine {
    /// Create an engine with given assumptions and reference data
    pub fn new(assumptions: EconomicAssumptions, reference: ReferenceData) -> Self {
        Self {
            assumptions,
            reference,
        }
    }

    /// Create an engine with conservative assumptions and compiled-in prices
    pub fn with_defaults() -> Self {
        Self::new(EconomicAssumptions::conservative(), ReferenceData::default_2025())
    }

    pub fn assumptions(&self) -> &EconomicAssumptions {
        &self.assumptions
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Run the complete calculation and return an itemized breakdown
    pub fn calculate(&self, inputs: &LifestyleInputs) -> CostBreakdown {
        let mut breakdown = CostBreakdown::default();
        let rate = self.assumptions.real_return();
        // Floor of 1 keeps annuity lengths positive for very old users
        let years_left = (self.assumptions.life_expectancy as i32 - inputs.user_age as i32).max(1);

        if let Some(home) = &inputs.primary_home {
            let (purchase, ongoing) = self.home_costs(home, years_left, rate);
            breakdown.primary_home_purchase = purchase;
            breakdown.primary_home_ongoing = ongoing;
        }

        if let Some(home) = &inputs.vacation_home {
            let (purchase, ongoing) = self.home_costs(home, years_left, rate);
            breakdown.vacation_home_purchase = purchase;
            breakdown.vacation_home_ongoing = ongoing;
        }

        breakdown.living_expenses =
            PvCalculator::level_annuity(inputs.annual_expenses, years_left, rate);

        if inputs.vacations_per_year > 0 {
            let annual = self.annual_vacation_cost(inputs);
            breakdown.vacations = PvCalculator::level_annuity(annual, years_left, rate);
        }

        if inputs.sailboat {
            let purchase = self.reference.watercraft.sailboat_price(inputs.sailboat_length);
            let maintenance = purchase * self.assumptions.boat_maintenance_rate;
            breakdown.sailboat =
                purchase + PvCalculator::level_annuity(maintenance, years_left, rate);
        }

        if inputs.yacht {
            let purchase = self.reference.watercraft.yacht_price(inputs.yacht_length);
            let maintenance = purchase * self.assumptions.boat_maintenance_rate;
            let crew = if inputs.yacht_crew {
                self.reference.watercraft.yacht_crew_cost(inputs.yacht_length)
            } else {
                0.0
            };
            breakdown.yacht =
                purchase + PvCalculator::level_annuity(maintenance + crew, years_left, rate);
        }

        if inputs.custom_annual_expense > 0.0 {
            breakdown.custom_expenses =
                PvCalculator::level_annuity(inputs.custom_annual_expense, years_left, rate);
        }

        let education_growth = self.assumptions.education_real_growth();

        for child in &inputs.children {
            let costs = self.provision_dependent(child, child.age as i32, education_growth, rate);
            breakdown.children_education += costs.education;
            breakdown.children_homes += costs.homes;
            breakdown.children_expenses += costs.expenses;

            if inputs.provide_for_grandchildren && inputs.grandchildren_per_child > 0 {
                breakdown.grandchildren_total += self.grandchildren_costs(
                    child,
                    inputs.grandchildren_per_child,
                    education_growth,
                    rate,
                );
            }
        }

        breakdown
    }

    /// Purchase price (paid today, at face value) and PV of ongoing tax and
    /// maintenance for one home
    fn home_costs(&self, home: &HomeSpec, years_left: i32, rate: f64) -> (f64, f64) {
        let price = self.reference.homes.price(&home.location, home.bedrooms);
        let annual = price
            * (self.reference.property_tax.rate(&home.location)
                + self.assumptions.home_maintenance_rate);
        (price, PvCalculator::level_annuity(annual, years_left, rate))
    }

    /// Annual vacation spend: hotel plus daily extras, for two travelers
    fn annual_vacation_cost(&self, inputs: &LifestyleInputs) -> f64 {
        let nights = (inputs.vacation_weeks_each * 7) as f64;
        let nightly = self.reference.travel.nightly_cost(&inputs.vacation_hotel_tier);
        let extras = self.reference.travel.daily_extras(&inputs.vacation_destination);
        inputs.vacations_per_year as f64 * nights * (nightly + extras) * 2.0
    }

    /// Provision one dependent: K-12, university, a home at 25, and a
    /// living allowance from 25 to end of life
    ///
    /// `age` is the dependent's age today; a dependent born `b` years from
    /// now enters with age `-b`, which shifts every milestone by `b` years
    /// through the same formulas.
    fn provision_dependent(
        &self,
        child: &ChildSpec,
        age: i32,
        education_growth: f64,
        rate: f64,
    ) -> DependentCosts {
        let mut costs = DependentCosts::default();
        let life_expectancy = self.assumptions.life_expectancy as i32;
        let education = &self.reference.education;

        // Private school: K-12, ages 5-17 (13 years)
        if child.private_school && age < 18 {
            let school_start = age.max(5);
            let years_until = school_start - age;
            let school_years = 18 - school_start;
            if school_years > 0 {
                costs.education += PvCalculator::deferred_annuity(
                    education.private_school_annual,
                    school_years,
                    years_until,
                    education_growth,
                    rate,
                );
            }
        }

        // Private university: 4 years starting at age 18
        if child.private_university && age < 22 {
            if age >= 18 {
                let remaining = 22 - age;
                costs.education += PvCalculator::growing_annuity(
                    education.private_university_annual,
                    remaining,
                    education_growth,
                    rate,
                );
            } else {
                let years_until = 18 - age;
                costs.education += PvCalculator::deferred_annuity(
                    education.private_university_annual,
                    4,
                    years_until,
                    education_growth,
                    rate,
                );
            }
        }

        // A home at age 25
        if child.buy_house && !child.house_location.is_empty() {
            let price = self
                .reference
                .homes
                .price(&child.house_location, child.house_bedrooms);
            let years_until_25 = (25 - age).max(0);

            costs.homes += PvCalculator::lump_sum(price, years_until_25, rate);

            // Ongoing home costs from age 25 onward
            let annual = price
                * (self.reference.property_tax.rate(&child.house_location)
                    + self.assumptions.home_maintenance_rate);
            let adult_home_years = life_expectancy - age.max(25);
            if adult_home_years > 0 {
                costs.homes += PvCalculator::deferred_annuity(
                    annual,
                    adult_home_years,
                    years_until_25,
                    0.0,
                    rate,
                );
            }
        }

        // Annual living allowance from age 25 onward
        if child.annual_expenses > 0.0 {
            let years_until_25 = (25 - age).max(0);
            let adult_years = life_expectancy - age.max(25);
            if adult_years > 0 {
                costs.expenses += PvCalculator::deferred_annuity(
                    child.annual_expenses,
                    adult_years,
                    years_until_25,
                    0.0,
                    rate,
                );
            }
        }

        costs
    }

    /// Grandchildren for one child: born starting when the child turns 30,
    /// spaced two years apart, each receiving the parent child's provisions
    /// on their own timeline
    fn grandchildren_costs(
        &self,
        child: &ChildSpec,
        per_child: u32,
        education_growth: f64,
        rate: f64,
    ) -> f64 {
        let base_offset = (30 - child.age as i32).max(0);

        let mut total = 0.0;
        for index in 0..per_child as i32 {
            let born_in = base_offset + 2 * index;
            total += self
                .provision_dependent(child, -born_in, education_growth, rate)
                .total();
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LifestyleEngine {
        LifestyleEngine::with_defaults()
    }

    fn bare_inputs() -> LifestyleInputs {
        LifestyleInputs {
            annual_expenses: 0.0,
            ..LifestyleInputs::default()
        }
    }

    #[test]
    fn test_living_expenses_match_direct_formula() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            annual_expenses: 300_000.0,
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);

        // 50 years at the real rate implied by 6% nominal / 3% inflation
        let r = 1.06 / 1.03 - 1.0;
        let expected = 300_000.0 * (1.0 - (1.0 + r).powi(-50)) / r;
        assert!((breakdown.living_expenses - expected).abs() < 1e-6);
        assert!((breakdown.grand_total() - expected).abs() < 1e-6);
        assert!(expected > 7_000_000.0 && expected < 9_000_000.0);
    }

    #[test]
    fn test_horizon_floors_at_one_year() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 95,
            annual_expenses: 300_000.0,
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);
        let r = engine.assumptions().real_return();
        assert!((breakdown.living_expenses - 300_000.0 / (1.0 + r)).abs() < 1e-6);
    }

    #[test]
    fn test_home_purchase_enters_at_face_value() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            primary_home: Some(HomeSpec::new("Palo Alto, CA", 5)),
            vacation_home: Some(HomeSpec::new("Aspen, CO", 4)),
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);
        assert!((breakdown.primary_home_purchase - 6_000_000.0).abs() < 1e-6);
        assert!((breakdown.vacation_home_purchase - 6_500_000.0).abs() < 1e-6);

        // Ongoing: price * (tax + 1% maintenance) as a 50-year annuity
        let r = engine.assumptions().real_return();
        let annual = 6_000_000.0 * (0.0077 + 0.01);
        let expected = PvCalculator::level_annuity(annual, 50, r);
        assert!((breakdown.primary_home_ongoing - expected).abs() < 1e-6);
    }

    #[test]
    fn test_vacation_cost_formula() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            vacations_per_year: 2,
            vacation_weeks_each: 2,
            vacation_destination: "Europe".to_string(),
            vacation_hotel_tier: "Ultra-luxury (Four Seasons, Aman)".to_string(),
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);

        // 2 trips x 14 nights x ($1500 room + $400 extras) x 2 travelers
        let annual = 2.0 * 14.0 * 1_900.0 * 2.0;
        let expected = PvCalculator::level_annuity(annual, 50, engine.assumptions().real_return());
        assert!((breakdown.vacations - expected).abs() < 1e-6);
    }

    #[test]
    fn test_sailboat_costs() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            sailboat: true,
            sailboat_length: 35,
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);
        let r = engine.assumptions().real_return();
        let expected = 280_000.0 + PvCalculator::level_annuity(28_000.0, 50, r);
        assert!((breakdown.sailboat - expected).abs() < 1e-6);
    }

    #[test]
    fn test_yacht_with_crew() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            yacht: true,
            yacht_length: 60,
            yacht_crew: true,
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);
        let r = engine.assumptions().real_return();
        // $1.8M hull, 10% maintenance, $250k crew payroll
        let expected = 1_800_000.0 + PvCalculator::level_annuity(180_000.0 + 250_000.0, 50, r);
        assert!((breakdown.yacht - expected).abs() < 1e-6);
    }

    #[test]
    fn test_yacht_without_crew_skips_payroll() {
        let engine = engine();
        let with_crew = engine.calculate(&LifestyleInputs {
            user_age: 40,
            yacht: true,
            yacht_crew: true,
            ..bare_inputs()
        });
        let without_crew = engine.calculate(&LifestyleInputs {
            user_age: 40,
            yacht: true,
            yacht_crew: false,
            ..bare_inputs()
        });
        assert!(with_crew.yacht > without_crew.yacht);
    }

    #[test]
    fn test_school_age_child_education() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            children: vec![ChildSpec {
                private_school: true,
                ..ChildSpec::unprovisioned(5)
            }],
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);

        // Age 5 starts school immediately: 13 years of growing tuition
        let g = engine.assumptions().education_real_growth();
        let r = engine.assumptions().real_return();
        let expected = PvCalculator::growing_annuity(55_000.0, 13, g, r);
        assert!((breakdown.children_education - expected).abs() < 1e-6);
        assert_eq!(breakdown.children_homes, 0.0);
        assert_eq!(breakdown.children_expenses, 0.0);
    }

    #[test]
    fn test_mid_school_child_gets_remaining_years() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            children: vec![ChildSpec {
                private_school: true,
                ..ChildSpec::unprovisioned(10)
            }],
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);

        // 8 school years left, starting now
        let g = engine.assumptions().education_real_growth();
        let r = engine.assumptions().real_return();
        let expected = PvCalculator::deferred_annuity(55_000.0, 8, 0, g, r);
        assert!((breakdown.children_education - expected).abs() < 1e-6);
    }

    #[test]
    fn test_university_mid_degree() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 50,
            children: vec![ChildSpec {
                private_university: true,
                ..ChildSpec::unprovisioned(20)
            }],
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);

        // Two years of university remain, starting now
        let g = engine.assumptions().education_real_growth();
        let r = engine.assumptions().real_return();
        let expected = PvCalculator::growing_annuity(90_000.0, 2, g, r);
        assert!((breakdown.children_education - expected).abs() < 1e-6);
    }

    #[test]
    fn test_child_home_and_allowance() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 45,
            children: vec![ChildSpec {
                buy_house: true,
                house_location: "Austin, TX".to_string(),
                house_bedrooms: 3,
                annual_expenses: 100_000.0,
                ..ChildSpec::unprovisioned(20)
            }],
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);
        let r = engine.assumptions().real_return();

        // $650k home bought in 5 years, then tax + maintenance to age 90
        let price = 650_000.0;
        let annual_home = price * (0.0180 + 0.01);
        let expected_homes = PvCalculator::lump_sum(price, 5, r)
            + PvCalculator::deferred_annuity(annual_home, 65, 5, 0.0, r);
        assert!((breakdown.children_homes - expected_homes).abs() < 1e-6);

        let expected_expenses = PvCalculator::deferred_annuity(100_000.0, 65, 5, 0.0, r);
        assert!((breakdown.children_expenses - expected_expenses).abs() < 1e-6);
    }

    #[test]
    fn test_unprovisioned_child_contributes_nothing() {
        let engine = engine();
        let without_child = engine.calculate(&bare_inputs());
        let with_child = engine.calculate(&LifestyleInputs {
            children: vec![ChildSpec::unprovisioned(12)],
            ..bare_inputs()
        });
        assert_eq!(without_child, with_child);
    }

    #[test]
    fn test_grandchildren_disabled_by_flag() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            children: vec![ChildSpec {
                private_school: true,
                private_university: true,
                annual_expenses: 150_000.0,
                ..ChildSpec::unprovisioned(8)
            }],
            provide_for_grandchildren: false,
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);
        assert_eq!(breakdown.grandchildren_total, 0.0);
    }

    #[test]
    fn test_grandchild_timeline_anchored_to_birth() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 60,
            children: vec![ChildSpec {
                private_school: true,
                ..ChildSpec::unprovisioned(30)
            }],
            provide_for_grandchildren: true,
            grandchildren_per_child: 1,
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&inputs);

        // Child is already 30: the grandchild is born now and starts school
        // in 5 years, for the full 13 years
        let g = engine.assumptions().education_real_growth();
        let r = engine.assumptions().real_return();
        let expected = PvCalculator::deferred_annuity(55_000.0, 13, 5, g, r);
        assert!((breakdown.grandchildren_total - expected).abs() < 1e-6);
    }

    #[test]
    fn test_grandchildren_spaced_two_years_apart() {
        let engine = engine();
        let base = LifestyleInputs {
            user_age: 40,
            children: vec![ChildSpec {
                private_university: true,
                ..ChildSpec::unprovisioned(10)
            }],
            provide_for_grandchildren: true,
            grandchildren_per_child: 2,
            ..bare_inputs()
        };

        let breakdown = engine.calculate(&base);

        // First grandchild arrives when the child turns 30 (20 years out),
        // the second two years later; each gets 4 years of university at 18
        let g = engine.assumptions().education_real_growth();
        let r = engine.assumptions().real_return();
        let expected = PvCalculator::deferred_annuity(90_000.0, 4, 20 + 18, g, r)
            + PvCalculator::deferred_annuity(90_000.0, 4, 22 + 18, g, r);
        assert!((breakdown.grandchildren_total - expected).abs() < 1e-6);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let engine = engine();
        let inputs = LifestyleInputs {
            user_age: 40,
            primary_home: Some(HomeSpec::new("Palo Alto, CA", 5)),
            vacation_home: Some(HomeSpec::new("Aspen, CO", 4)),
            annual_expenses: 500_000.0,
            vacations_per_year: 4,
            sailboat: true,
            yacht: true,
            yacht_crew: true,
            custom_annual_expense: 250_000.0,
            children: vec![
                ChildSpec {
                    private_school: true,
                    private_university: true,
                    buy_house: true,
                    house_location: "New York City, NY".to_string(),
                    house_bedrooms: 4,
                    annual_expenses: 200_000.0,
                    ..ChildSpec::unprovisioned(5)
                },
                ChildSpec {
                    private_university: true,
                    ..ChildSpec::unprovisioned(12)
                },
            ],
            provide_for_grandchildren: true,
            ..LifestyleInputs::default()
        };

        let first = engine.calculate(&inputs);
        let second = engine.calculate(&inputs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_contributions_are_non_negative() {
        let engine = engine();
        let breakdown = engine.calculate(&LifestyleInputs {
            user_age: 89,
            primary_home: Some(HomeSpec::new("Nowhere, ZZ", 1)),
            children: vec![ChildSpec {
                private_school: true,
                private_university: true,
                buy_house: true,
                house_location: "Nowhere, ZZ".to_string(),
                annual_expenses: 50_000.0,
                ..ChildSpec::unprovisioned(40)
            }],
            provide_for_grandchildren: true,
            ..LifestyleInputs::default()
        });

        for category in breakdown.categories() {
            assert!(category.value >= 0.0, "{} went negative", category.name);
        }
        assert!(breakdown.grand_total() >= 0.0);
    }
}

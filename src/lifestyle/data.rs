//! Lifestyle input structures matching the intake form
//!
//! These records arrive fully validated from the boundary layer (form or
//! JSON); the engine reads them without further checks. Serde defaults
//! mirror the intake form's defaults so sparse scenario files stay short.

use serde::{Deserialize, Serialize};

fn default_user_age() -> u32 {
    40
}

fn default_annual_expenses() -> f64 {
    300_000.0
}

fn default_vacation_weeks() -> u32 {
    2
}

fn default_vacation_destination() -> String {
    "Europe".to_string()
}

fn default_hotel_tier() -> String {
    "Ultra-luxury (Four Seasons, Aman)".to_string()
}

fn default_sailboat_length() -> u32 {
    35
}

fn default_yacht_length() -> u32 {
    60
}

fn default_house_bedrooms() -> u32 {
    3
}

fn default_grandchildren_per_child() -> u32 {
    2
}

/// A home the user wants to buy
///
/// `location` keys into the home price and property-tax tables; unknown
/// locations degrade to fallback pricing rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeSpec {
    pub location: String,
    pub bedrooms: u32,
}

impl HomeSpec {
    pub fn new(location: impl Into<String>, bedrooms: u32) -> Self {
        Self {
            location: location.into(),
            bedrooms,
        }
    }
}

/// What the user wants to provide for one child
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildSpec {
    /// Child's current age in years
    pub age: u32,

    /// Elite K-12 private school, ages 5 through 17
    #[serde(default)]
    pub private_school: bool,

    /// Four years of private university starting at 18
    #[serde(default)]
    pub private_university: bool,

    /// Buy the child a home at age 25
    #[serde(default)]
    pub buy_house: bool,

    /// Location of the child's home (empty = none chosen)
    #[serde(default)]
    pub house_location: String,

    /// Bedroom count for the child's home
    #[serde(default = "default_house_bedrooms")]
    pub house_bedrooms: u32,

    /// Annual living allowance from age 25, in today's dollars
    #[serde(default)]
    pub annual_expenses: f64,
}

impl ChildSpec {
    /// A child with no provisioning selected
    pub fn unprovisioned(age: u32) -> Self {
        Self {
            age,
            private_school: false,
            private_university: false,
            buy_house: false,
            house_location: String::new(),
            house_bedrooms: default_house_bedrooms(),
            annual_expenses: 0.0,
        }
    }
}

/// Everything the user entered in the intake form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleInputs {
    // About the user
    #[serde(default = "default_user_age")]
    pub user_age: u32,

    // Housing
    #[serde(default)]
    pub primary_home: Option<HomeSpec>,
    #[serde(default)]
    pub vacation_home: Option<HomeSpec>,

    /// Annual living expenses in today's dollars
    #[serde(default = "default_annual_expenses")]
    pub annual_expenses: f64,

    // Vacations
    #[serde(default)]
    pub vacations_per_year: u32,
    #[serde(default = "default_vacation_weeks")]
    pub vacation_weeks_each: u32,
    #[serde(default = "default_vacation_destination")]
    pub vacation_destination: String,
    #[serde(default = "default_hotel_tier")]
    pub vacation_hotel_tier: String,

    // Watercraft
    #[serde(default)]
    pub sailboat: bool,
    #[serde(default = "default_sailboat_length")]
    pub sailboat_length: u32,
    #[serde(default)]
    pub yacht: bool,
    #[serde(default = "default_yacht_length")]
    pub yacht_length: u32,
    #[serde(default)]
    pub yacht_crew: bool,

    // Custom annual expense
    #[serde(default)]
    pub custom_annual_expense: f64,
    #[serde(default)]
    pub custom_expense_description: String,

    // Children
    #[serde(default)]
    pub children: Vec<ChildSpec>,

    // Grandchildren
    #[serde(default)]
    pub provide_for_grandchildren: bool,
    #[serde(default = "default_grandchildren_per_child")]
    pub grandchildren_per_child: u32,
}

impl Default for LifestyleInputs {
    fn default() -> Self {
        Self {
            user_age: default_user_age(),
            primary_home: None,
            vacation_home: None,
            annual_expenses: default_annual_expenses(),
            vacations_per_year: 0,
            vacation_weeks_each: default_vacation_weeks(),
            vacation_destination: default_vacation_destination(),
            vacation_hotel_tier: default_hotel_tier(),
            sailboat: false,
            sailboat_length: default_sailboat_length(),
            yacht: false,
            yacht_length: default_yacht_length(),
            yacht_crew: false,
            custom_annual_expense: 0.0,
            custom_expense_description: String::new(),
            children: Vec::new(),
            provide_for_grandchildren: false,
            grandchildren_per_child: default_grandchildren_per_child(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_json_fills_defaults() {
        let inputs: LifestyleInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(inputs.user_age, 40);
        assert!((inputs.annual_expenses - 300_000.0).abs() < 1e-9);
        assert_eq!(inputs.vacation_weeks_each, 2);
        assert_eq!(inputs.vacation_destination, "Europe");
        assert!(inputs.children.is_empty());
        assert_eq!(inputs.grandchildren_per_child, 2);
    }

    #[test]
    fn test_child_defaults() {
        let child: ChildSpec = serde_json::from_str(r#"{"age": 7}"#).unwrap();
        assert_eq!(child.age, 7);
        assert!(!child.private_school);
        assert_eq!(child.house_bedrooms, 3);
        assert!((child.annual_expenses - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_scenario_round_trip() {
        let inputs = LifestyleInputs {
            primary_home: Some(HomeSpec::new("Palo Alto, CA", 5)),
            sailboat: true,
            children: vec![ChildSpec {
                private_school: true,
                ..ChildSpec::unprovisioned(6)
            }],
            ..LifestyleInputs::default()
        };

        let json = serde_json::to_string(&inputs).unwrap();
        let parsed: LifestyleInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.primary_home.as_ref().unwrap().location, "Palo Alto, CA");
        assert!(parsed.children[0].private_school);
    }
}

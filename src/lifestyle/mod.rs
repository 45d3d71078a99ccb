//! Lifestyle input model and scenario loading

mod data;
pub mod loader;

pub use data::{ChildSpec, HomeSpec, LifestyleInputs};
pub use loader::{load_scenario, ScenarioError};

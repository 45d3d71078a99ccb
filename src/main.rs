//! Lifestyle Calculator CLI
//!
//! Command-line interface for pricing a lifestyle scenario

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use lifestyle_calculator::lifestyle::load_scenario;
use lifestyle_calculator::{
    ChildSpec, EconomicAssumptions, HomeSpec, LifestyleEngine, LifestyleInputs, ReferenceData,
};

#[derive(Parser, Debug)]
#[command(name = "lifestyle_calculator")]
#[command(about = "Compute the nest egg needed today to fund a target lifestyle")]
struct Cli {
    /// Lifestyle scenario JSON file (omit to price the built-in demo lifestyle)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Directory of reference-data CSV overrides
    #[arg(long)]
    reference_dir: Option<PathBuf>,

    /// Write the itemized breakdown to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Lifestyle Calculator v0.1.0");
    println!("===========================\n");

    let reference = match &cli.reference_dir {
        Some(dir) => ReferenceData::from_csv_path(dir)?,
        None => ReferenceData::default_2025(),
    };

    let inputs = match &cli.scenario {
        Some(path) => load_scenario(path)?,
        None => demo_lifestyle(),
    };

    let assumptions = EconomicAssumptions::conservative();
    let engine = LifestyleEngine::new(assumptions.clone(), reference);
    let breakdown = engine.calculate(&inputs);

    println!("Scenario: age {}, {} children", inputs.user_age, inputs.children.len());
    if let Some(home) = &inputs.primary_home {
        println!("  Primary home: {} ({} bedrooms)", home.location, home.bedrooms);
    }
    if let Some(home) = &inputs.vacation_home {
        println!("  Vacation home: {} ({} bedrooms)", home.location, home.bedrooms);
    }
    println!();

    println!("{:<30} {:>18}", "Category", "Present Value");
    println!("{}", "-".repeat(49));
    for category in breakdown.categories() {
        println!("{:<30} {:>17.0}", category.name, category.value);
    }
    println!("{}", "-".repeat(49));
    println!("{:<30} {:>17.0}", "TOTAL NEST EGG", breakdown.grand_total());

    let share_of_billion = breakdown.grand_total() / 1_000_000_000.0;
    println!(
        "\nThat is {:.1}% of one billion dollars.",
        share_of_billion * 100.0
    );

    println!("\nAssumptions:");
    for note in assumptions.describe() {
        println!("  {:<32} {}", note.label, note.value);
    }

    if let Some(path) = &cli.output {
        write_breakdown_csv(path, &breakdown)?;
        println!("\nBreakdown written to: {}", path.display());
    }

    Ok(())
}

/// A fully loaded demo lifestyle: two homes, constant travel, a crewed
/// yacht, and three fully provisioned children
fn demo_lifestyle() -> LifestyleInputs {
    let child = |age: u32| ChildSpec {
        private_school: true,
        private_university: true,
        buy_house: true,
        house_location: "New York City, NY".to_string(),
        house_bedrooms: 4,
        annual_expenses: 200_000.0,
        ..ChildSpec::unprovisioned(age)
    };

    LifestyleInputs {
        user_age: 40,
        primary_home: Some(HomeSpec::new("Palo Alto, CA", 6)),
        vacation_home: Some(HomeSpec::new("Aspen, CO", 5)),
        annual_expenses: 500_000.0,
        vacations_per_year: 4,
        vacation_weeks_each: 2,
        vacation_destination: "Europe".to_string(),
        vacation_hotel_tier: "Ultra-luxury (Four Seasons, Aman)".to_string(),
        sailboat: true,
        sailboat_length: 40,
        yacht: true,
        yacht_length: 100,
        yacht_crew: true,
        custom_annual_expense: 250_000.0,
        custom_expense_description: "Art collection".to_string(),
        children: vec![child(5), child(8), child(12)],
        provide_for_grandchildren: true,
        grandchildren_per_child: 2,
    }
}

fn write_breakdown_csv(path: &PathBuf, breakdown: &lifestyle_calculator::CostBreakdown) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "category,present_value")?;
    for category in breakdown.categories() {
        writeln!(file, "{},{:.2}", category.name, category.value)?;
    }
    writeln!(file, "Housing Total,{:.2}", breakdown.housing_total())?;
    writeln!(file, "Watercraft Total,{:.2}", breakdown.watercraft_total())?;
    writeln!(file, "Children Total,{:.2}", breakdown.children_total())?;
    writeln!(file, "Grand Total,{:.2}", breakdown.grand_total())?;

    Ok(())
}

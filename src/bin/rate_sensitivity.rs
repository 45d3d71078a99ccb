//! Sensitivity sweep of the required nest egg across economic assumptions
//!
//! Prices one lifestyle under a grid of nominal-return and inflation
//! assumptions, printing the matrix and writing the full grid to CSV.
//!
//! Usage: cargo run --bin rate_sensitivity [scenario.json]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;

use lifestyle_calculator::lifestyle::load_scenario;
use lifestyle_calculator::{
    ChildSpec, EconomicAssumptions, LifestyleEngine, LifestyleInputs, ReferenceData,
};

const NOMINAL_RETURNS: [f64; 5] = [0.04, 0.05, 0.06, 0.07, 0.08];
const INFLATIONS: [f64; 5] = [0.02, 0.025, 0.03, 0.035, 0.04];

fn main() -> Result<()> {
    env_logger::init();

    println!("Nest Egg Sensitivity Sweep");
    println!("==========================\n");

    let inputs = match std::env::args().nth(1) {
        Some(path) => load_scenario(Path::new(&path))?,
        None => baseline_lifestyle(),
    };
    let reference = ReferenceData::default_2025();

    let grid: Vec<(f64, f64)> = NOMINAL_RETURNS
        .iter()
        .flat_map(|&nominal| INFLATIONS.iter().map(move |&inflation| (nominal, inflation)))
        .collect();

    let results: Vec<(f64, f64, f64)> = grid
        .par_iter()
        .map(|&(nominal_return, inflation)| {
            let assumptions = EconomicAssumptions {
                nominal_return,
                inflation,
                ..EconomicAssumptions::conservative()
            };
            let engine = LifestyleEngine::new(assumptions, reference.clone());
            let total = engine.calculate(&inputs).grand_total();
            (nominal_return, inflation, total)
        })
        .collect();

    // Matrix: one row per nominal return, one column per inflation rate
    print!("{:>10}", "nominal");
    for inflation in INFLATIONS {
        print!("{:>13.1}%", inflation * 100.0);
    }
    println!();
    println!("{}", "-".repeat(10 + 14 * INFLATIONS.len()));

    for nominal in NOMINAL_RETURNS {
        print!("{:>9.1}%", nominal * 100.0);
        for inflation in INFLATIONS {
            let total = results
                .iter()
                .find(|(n, i, _)| *n == nominal && *i == inflation)
                .map(|(_, _, total)| *total)
                .unwrap_or(0.0);
            print!("{:>13.1}M", total / 1_000_000.0);
        }
        println!();
    }

    let csv_path = "sensitivity_output.csv";
    let mut file = File::create(csv_path)?;
    writeln!(file, "# generated {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file, "nominal_return,inflation,grand_total")?;
    for (nominal, inflation, total) in &results {
        writeln!(file, "{},{},{:.2}", nominal, inflation, total)?;
    }

    println!("\nFull grid written to: {}", csv_path);

    Ok(())
}

/// A moderate lifestyle for the default sweep: comfortable spending and
/// one fully educated child
fn baseline_lifestyle() -> LifestyleInputs {
    LifestyleInputs {
        user_age: 40,
        annual_expenses: 300_000.0,
        vacations_per_year: 2,
        children: vec![ChildSpec {
            private_school: true,
            private_university: true,
            ..ChildSpec::unprovisioned(5)
        }],
        ..LifestyleInputs::default()
    }
}

//! AWS Lambda handler for lifestyle calculations
//!
//! Accepts a lifestyle description via JSON and returns the itemized
//! present-value breakdown with display-ready currency strings and
//! billion-dollar comparison statistics.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use lifestyle_calculator::assumptions::AssumptionNote;
use lifestyle_calculator::{
    CostBreakdown, EconomicAssumptions, LifestyleEngine, LifestyleInputs, ReferenceData,
};

/// Input for one calculation
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    /// The lifestyle to price
    #[serde(default)]
    pub lifestyle: LifestyleInputs,

    /// Nominal portfolio return (default: 6%)
    #[serde(default = "default_nominal_return")]
    pub nominal_return: f64,

    /// General inflation (default: 3%)
    #[serde(default = "default_inflation")]
    pub inflation: f64,

    /// Education-cost inflation (default: 5%)
    #[serde(default = "default_education_inflation")]
    pub education_inflation: f64,

    /// Home maintenance as a fraction of value (default: 1%)
    #[serde(default = "default_home_maintenance")]
    pub home_maintenance_rate: f64,

    /// Boat maintenance as a fraction of purchase price (default: 10%)
    #[serde(default = "default_boat_maintenance")]
    pub boat_maintenance_rate: f64,

    /// Planning horizon age (default: 90)
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy: u32,
}

fn default_nominal_return() -> f64 { 0.06 }
fn default_inflation() -> f64 { 0.03 }
fn default_education_inflation() -> f64 { 0.05 }
fn default_home_maintenance() -> f64 { 0.01 }
fn default_boat_maintenance() -> f64 { 0.10 }
fn default_life_expectancy() -> u32 { 90 }

/// Output from one calculation
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub grand_total: f64,
    pub grand_total_display: String,
    pub housing_total: f64,
    pub watercraft_total: f64,
    pub children_total: f64,
    pub breakdown: CostBreakdown,
    pub categories: Vec<CategoryEntry>,
    pub comparison: BillionComparison,
    pub assumptions: Vec<AssumptionNote>,
    pub execution_time_ms: u64,
}

/// One display category with its share of the grand total
#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub value: f64,
    pub display: String,
    pub share_pct: f64,
}

/// How the total stacks up against one billion dollars
#[derive(Debug, Serialize)]
pub struct BillionComparison {
    pub pct_of_billion: f64,
    pub families_funded: i64,
    pub leftover: f64,
    pub leftover_display: String,
    pub university_scholarships: i64,
    pub affordable_homes: i64,
    pub teacher_salaries: i64,
}

const BILLION: f64 = 1_000_000_000.0;

/// Format a dollar amount as a short display string ("$1.2B", "$3.4M")
fn format_currency(value: f64) -> String {
    if value >= BILLION {
        format!("${:.1}B", value / BILLION)
    } else if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else {
        format!("${}", group_thousands(value.round() as i64))
    }
}

/// Insert thousands separators into an integer dollar amount
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (count, digit) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

fn build_response(request: CalculationRequest, started: std::time::Instant) -> CalculationResponse {
    let assumptions = EconomicAssumptions {
        nominal_return: request.nominal_return,
        inflation: request.inflation,
        education_inflation: request.education_inflation,
        home_maintenance_rate: request.home_maintenance_rate,
        boat_maintenance_rate: request.boat_maintenance_rate,
        life_expectancy: request.life_expectancy,
    };

    let engine = LifestyleEngine::new(assumptions.clone(), ReferenceData::default_2025());
    let breakdown = engine.calculate(&request.lifestyle);
    let total = breakdown.grand_total();

    let categories = breakdown
        .categories()
        .into_iter()
        .map(|category| CategoryEntry {
            name: category.name,
            display: format_currency(category.value),
            share_pct: if total > 0.0 { category.value / total * 100.0 } else { 0.0 },
            value: category.value,
        })
        .collect();

    let leftover = BILLION - total;
    let comparison = BillionComparison {
        pct_of_billion: if total > 0.0 { total / BILLION * 100.0 } else { 0.0 },
        families_funded: if total > 0.0 { (BILLION / total) as i64 } else { 0 },
        leftover,
        leftover_display: format_currency(leftover),
        // Four years at $85k per scholarship
        university_scholarships: (leftover / 340_000.0) as i64,
        affordable_homes: (leftover / 250_000.0) as i64,
        teacher_salaries: (leftover / 65_000.0) as i64,
    };

    CalculationResponse {
        grand_total: total,
        grand_total_display: format_currency(total),
        housing_total: breakdown.housing_total(),
        watercraft_total: breakdown.watercraft_total(),
        children_total: breakdown.children_total(),
        categories,
        comparison,
        assumptions: assumptions.describe(),
        breakdown,
        execution_time_ms: started.elapsed().as_millis() as u64,
    }
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &CalculationResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let started = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    Ok(json_response(&build_response(request, started)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(1_234_000_000.0), "$1.2B");
        assert_eq!(format_currency(3_400_000.0), "$3.4M");
        assert_eq!(format_currency(950_000.0), "$950,000");
        assert_eq!(format_currency(42.0), "$42");
    }

    #[test]
    fn test_empty_request_uses_defaults() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        assert!((request.nominal_return - 0.06).abs() < 1e-12);
        assert_eq!(request.life_expectancy, 90);
        assert_eq!(request.lifestyle.user_age, 40);

        let response = build_response(request, std::time::Instant::now());
        // The default lifestyle only carries living expenses
        assert!(response.grand_total > 0.0);
        assert!(response.comparison.pct_of_billion < 100.0);
        assert_eq!(response.categories.len(), 1);
        assert_eq!(response.categories[0].name, "Living Expenses");
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{"lifestyle": {"sailboat": true, "vacations_per_year": 2}}"#,
        )
        .unwrap();

        let response = build_response(request, std::time::Instant::now());
        let share_sum: f64 = response.categories.iter().map(|c| c.share_pct).sum();
        assert!((share_sum - 100.0).abs() < 1e-6);
    }
}

#![allow(dead_code)]

use compass_core::{params::GeneratePlan, schedule::generate_as_of, Plan, PlannerBuilder};
use jiff::civil::date;
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, compass_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Generates a plan for `goal` as of 2024-01-01, starting that day.
pub fn plan_for(goal: &str) -> Plan {
    generate_as_of(
        &GeneratePlan {
            goal: goal.to_string(),
            start_date: None,
            max_days: None,
        },
        date(2024, 1, 1),
    )
    .expect("Failed to generate plan")
}

mod common;

use common::create_test_planner;
use compass_core::{
    params::{CreatePlan, GeneratePlan, Id, ListProjects},
    PlannerError,
};

fn create_params(goal: &str, save: bool) -> CreatePlan {
    CreatePlan {
        generate: GeneratePlan {
            goal: goal.to_string(),
            start_date: Some("2024-03-01".to_string()),
            max_days: None,
        },
        save,
        out_dir: None,
    }
}

#[tokio::test]
async fn test_saved_plan_output_mentions_project_id() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .create_plan(&create_params("Write a blog post in 6 days", true))
        .await
        .expect("Failed to create plan");

    let id = result.project_id.expect("Plan should be saved");
    let output = result.to_string();
    assert!(output.contains("# Plan: Write a blog post in 6 days"));
    assert!(output.contains(&format!("Saved project with ID: {id}")));
    assert!(!output.contains("## Exports"));
}

#[tokio::test]
async fn test_show_project_output() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .create_plan(&create_params("Launch a product in 2 weeks", true))
        .await
        .expect("Failed to create plan");
    let id = result.project_id.expect("Plan should be saved");

    let saved = planner
        .show_project(&Id { id })
        .await
        .expect("Failed to show project");
    let output = saved.to_string();

    assert!(output.starts_with(&format!("# {id}. Launch a product in 2 weeks")));
    assert!(output.contains("| 5 | MVP Development | 3 | 2024-03-07 | 2024-03-09 | 4 |"));
}

#[tokio::test]
async fn test_list_projects_output() {
    let (_temp_dir, planner) = create_test_planner().await;

    let empty = planner
        .list_projects(&ListProjects::default())
        .await
        .expect("Failed to list projects");
    assert_eq!(empty.to_string(), "No saved projects found.\n");

    planner
        .create_plan(&create_params("Organize a neighborhood cleanup", true))
        .await
        .expect("Failed to create plan");

    let listed = planner
        .list_projects(&ListProjects::default())
        .await
        .expect("Failed to list projects");
    let output = listed.to_string();
    assert!(output.contains("## Organize a neighborhood cleanup (ID: 1) (6 tasks)"));
    assert!(output.contains("- **Template**: generic"));
}

#[tokio::test]
async fn test_invalid_max_days_saves_nothing() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Launch a product in 2 weeks", true);
    params.generate.max_days = Some(5);

    let err = planner
        .create_plan(&params)
        .await
        .expect_err("max_days below the task count should fail");
    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "max_days"));

    let listed = planner
        .list_projects(&ListProjects::default())
        .await
        .expect("Failed to list projects");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_invalid_start_date() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = create_params("Write an article", false);
    params.generate.start_date = Some("next someday".to_string());

    let err = planner
        .create_plan(&params)
        .await
        .expect_err("Unparseable start date should fail");
    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "start_date"));
}

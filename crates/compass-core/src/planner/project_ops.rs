//! Saved project operations for the Planner.

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    display::ProjectSummaries,
    error::{PlannerError, Result},
    models::{Plan, SavedProject},
    params::{Id, ListProjects},
};

impl Planner {
    /// Saves a plan as a new project and returns its ID.
    pub async fn save_plan(&self, plan: &Plan) -> Result<u64> {
        let db_path = self.db_path.clone();
        let plan = plan.clone();

        let id = task::spawn_blocking(move || {
            let mut db = Database::open(&db_path)?;
            db.insert_plan(&plan)
        })
        .await
        .map_err(PlannerError::join)??;

        info!("saved project {id}");
        Ok(id)
    }

    /// Lists saved projects, newest first.
    pub async fn list_projects(&self, params: &ListProjects) -> Result<ProjectSummaries> {
        let db_path = self.db_path.clone();
        let limit = params.limit;

        let summaries = task::spawn_blocking(move || {
            let db = Database::open(&db_path)?;
            db.list_projects(limit)
        })
        .await
        .map_err(PlannerError::join)??;

        Ok(ProjectSummaries(summaries))
    }

    /// Retrieves a saved project with its tasks, if it exists.
    pub async fn get_project(&self, params: &Id) -> Result<Option<SavedProject>> {
        let db_path = self.db_path.clone();
        let project_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::open(&db_path)?;
            db.get_project(project_id)
        })
        .await
        .map_err(PlannerError::join)?
    }

    /// Retrieves a saved project, failing when it does not exist.
    pub async fn show_project(&self, params: &Id) -> Result<SavedProject> {
        self.get_project(params)
            .await?
            .ok_or(PlannerError::ProjectNotFound { id: params.id })
    }
}

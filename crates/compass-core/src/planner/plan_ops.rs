//! Plan generation and export operations for the Planner.

use std::path::Path;

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    display::CreateResult,
    error::{PlannerError, Result},
    export::{export_all, ExportPaths},
    models::Plan,
    params::{CreatePlan, GeneratePlan},
    schedule,
};

impl Planner {
    /// Generates a plan for a goal, anchored on today's date.
    ///
    /// Pure: nothing is exported or saved.
    pub fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        let plan = schedule::generate(params)?;
        info!(
            "generated {} plan with {} tasks over {} days",
            plan.template,
            plan.tasks.len(),
            plan.total_days
        );
        Ok(plan)
    }

    /// Writes CSV, ICS and SVG chart exports of a plan into `out_dir`.
    pub async fn export_plan(&self, plan: &Plan, out_dir: &Path) -> Result<ExportPaths> {
        let plan = plan.clone();
        let out_dir = out_dir.to_path_buf();

        task::spawn_blocking(move || export_all(&plan, &out_dir))
            .await
            .map_err(PlannerError::join)?
    }

    /// Generates a plan, then exports and saves it as requested.
    ///
    /// Exports run before saving, so a plan whose files could not be written
    /// is not stored.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<CreateResult> {
        let plan = self.generate_plan(&params.generate)?;

        let exports = match params.out_dir.as_deref() {
            Some(dir) => Some(self.export_plan(&plan, dir).await?),
            None => None,
        };
        let project_id = if params.save {
            Some(self.save_plan(&plan).await?)
        } else {
            None
        };

        let mut result = CreateResult::new(plan);
        if let Some(exports) = exports {
            result = result.with_exports(exports);
        }
        if let Some(id) = project_id {
            result = result.with_project_id(id);
        }
        Ok(result)
    }
}

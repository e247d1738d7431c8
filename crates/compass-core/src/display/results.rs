//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{export::ExportPaths, models::Plan};

/// Outcome of generating a plan, with whatever happened to it afterwards.
///
/// Prints the plan, then the files it was exported to and the project ID it
/// was saved under, when those steps ran.
#[derive(Debug)]
pub struct CreateResult {
    pub plan: Plan,
    pub project_id: Option<u64>,
    pub exports: Option<ExportPaths>,
}

impl CreateResult {
    /// Create a new CreateResult wrapper for a plan that was only generated.
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            project_id: None,
            exports: None,
        }
    }

    /// Record the ID the plan was saved under.
    pub fn with_project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Record the files the plan was exported to.
    pub fn with_exports(mut self, exports: ExportPaths) -> Self {
        self.exports = Some(exports);
        self
    }
}

impl fmt::Display for CreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;

        if let Some(exports) = &self.exports {
            writeln!(f)?;
            writeln!(f, "## Exports")?;
            writeln!(f)?;
            write!(f, "{exports}")?;
        }

        if let Some(id) = self.project_id {
            writeln!(f)?;
            writeln!(f, "Saved project with ID: {id}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use jiff::civil::date;

    use super::*;
    use crate::models::TemplateKind;

    fn empty_plan() -> Plan {
        Plan {
            goal: "Paint the fence".to_string(),
            created_on: date(2024, 1, 1),
            start_date: date(2024, 1, 1),
            total_days: 14,
            template: TemplateKind::Generic,
            tasks: vec![],
        }
    }

    #[test]
    fn test_generated_only() {
        let output = CreateResult::new(empty_plan()).to_string();
        assert!(!output.contains("## Exports"));
        assert!(!output.contains("Saved project"));
    }

    #[test]
    fn test_exports_listed_before_saved_id() {
        let result = CreateResult::new(empty_plan())
            .with_exports(ExportPaths::in_dir(Path::new("out")))
            .with_project_id(7);
        let output = result.to_string();

        assert_eq!(result.project_id, Some(7));
        assert!(output.contains("- Calendar: out/plan.ics"));
        assert!(output.find("## Exports").unwrap() < output.find("Saved project with ID: 7").unwrap());
    }
}

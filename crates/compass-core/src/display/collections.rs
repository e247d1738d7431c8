//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::ProjectSummary;

/// Newtype wrapper for displaying a list of saved projects.
///
/// # Examples
///
/// ```rust
/// use compass_core::{display::ProjectSummaries, models::{ProjectSummary, TemplateKind}};
/// use jiff::civil::date;
///
/// let summaries = ProjectSummaries(vec![ProjectSummary {
///     id: 1,
///     goal: "Launch a product in 2 weeks".to_string(),
///     created_on: date(2024, 1, 1),
///     start_date: date(2024, 1, 1),
///     template: TemplateKind::Launch,
///     task_count: 8,
///     end_date: Some(date(2024, 1, 14)),
/// }]);
///
/// let output = summaries.to_string();
/// assert!(output.contains("Launch a product in 2 weeks (ID: 1)"));
/// ```
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl ProjectSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of projects in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the project summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProjectSummaries {
    type Item = ProjectSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved projects found.");
        }

        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::TemplateKind;

    fn summary(id: u64, goal: &str, task_count: u32) -> ProjectSummary {
        ProjectSummary {
            id,
            goal: goal.to_string(),
            created_on: date(2024, 1, 1),
            start_date: date(2024, 1, 2),
            template: TemplateKind::Generic,
            task_count,
            end_date: if task_count == 0 {
                None
            } else {
                Some(date(2024, 1, 10))
            },
        }
    }

    #[test]
    fn test_empty_project_summaries() {
        let summaries = ProjectSummaries(vec![]);
        assert!(summaries.is_empty());
        assert_eq!(summaries.to_string(), "No saved projects found.\n");
    }

    #[test]
    fn test_project_summaries_display() {
        let summaries = ProjectSummaries(vec![
            summary(2, "Organize a meetup", 6),
            summary(1, "Paint the fence", 1),
            summary(3, "Empty", 0),
        ]);
        let output = summaries.to_string();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[1].id, 1);
        assert!(output.contains("## Organize a meetup (ID: 2) (6 tasks)"));
        assert!(output.contains("## Paint the fence (ID: 1) (1 task)"));
        assert!(output.contains("- **Schedule**: 2024-01-02 to 2024-01-10"));
        assert!(output.contains("- **Schedule**: starts 2024-01-02"));
        assert!(output.find("ID: 2").unwrap() < output.find("ID: 1").unwrap());
    }
}

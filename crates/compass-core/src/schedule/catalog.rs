//! Built-in task templates and keyword routing.

use crate::models::{TaskTemplate, TemplateKind};

const fn step(title: &'static str, effort: u32) -> TaskTemplate {
    TaskTemplate { title, effort }
}

const LAUNCH_TASKS: [TaskTemplate; 8] = [
    step("Clarify goals & metrics", 1),
    step("Market research & user interviews", 2),
    step("Define MVP scope", 1),
    step("Prototype / Design", 2),
    step("MVP Development", 4),
    step("Testing & QA with users", 2),
    step("Marketing & launch prep", 2),
    step("Launch & monitor metrics", 1),
];

const WRITING_TASKS: [TaskTemplate; 6] = [
    step("Define outline & audience", 1),
    step("Research and references", 2),
    step("Write first draft", 3),
    step("Edit and proofread", 1),
    step("Design cover/images", 1),
    step("Publish & promote", 2),
];

const RESEARCH_TASKS: [TaskTemplate; 6] = [
    step("Define hypothesis and scope", 1),
    step("Literature review", 3),
    step("Design experiment / method", 2),
    step("Collect data", 4),
    step("Analyze and write results", 3),
    step("Submit / share findings", 1),
];

const GENERIC_TASKS: [TaskTemplate; 6] = [
    step("Clarify the goal", 1),
    step("Break into key milestones", 2),
    step("Create deliverables", 3),
    step("Implement first deliverable", 3),
    step("Test & iterate", 2),
    step("Finalize & deliver", 1),
];

/// Keyword clusters in priority order.
const ROUTES: [(TemplateKind, &[&str]); 3] = [
    (TemplateKind::Launch, &["product", "launch", "mvp", "release"]),
    (
        TemplateKind::Writing,
        &["write", "blog", "article", "ebook", "post"],
    ),
    (
        TemplateKind::Research,
        &["research", "paper", "study", "experiment"],
    ),
];

/// Picks the template cluster for a goal.
///
/// Keywords are matched as case-insensitive substrings and the first cluster
/// with a hit wins, so "launch a blog" is a launch. Goals that match nothing
/// get [`TemplateKind::Generic`].
pub fn select_template(goal: &str) -> TemplateKind {
    let text = goal.to_lowercase();
    ROUTES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map_or(TemplateKind::Generic, |(kind, _)| *kind)
}

impl TemplateKind {
    /// Ordered task templates for this cluster. Never empty.
    pub fn tasks(&self) -> &'static [TaskTemplate] {
        match self {
            TemplateKind::Launch => &LAUNCH_TASKS,
            TemplateKind::Writing => &WRITING_TASKS,
            TemplateKind::Research => &RESEARCH_TASKS,
            TemplateKind::Generic => &GENERIC_TASKS,
        }
    }
}

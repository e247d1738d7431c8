//! Template cluster identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the template clusters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Product launch, MVP or release work
    Launch,

    /// Blog posts, articles and ebooks
    Writing,

    /// Papers, studies and experiments
    Research,

    /// Anything that matches no other cluster
    #[default]
    Generic,
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "launch" => Ok(TemplateKind::Launch),
            "writing" => Ok(TemplateKind::Writing),
            "research" => Ok(TemplateKind::Research),
            "generic" => Ok(TemplateKind::Generic),
            _ => Err(format!("Invalid template kind: {s}")),
        }
    }
}

impl TemplateKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Launch => "launch",
            TemplateKind::Writing => "writing",
            TemplateKind::Research => "research",
            TemplateKind::Generic => "generic",
        }
    }
}

/// A catalog entry: a task title and its relative effort.
///
/// Effort is a scale factor, not a number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub effort: u32,
}

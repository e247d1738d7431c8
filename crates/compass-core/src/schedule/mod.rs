//! Goal-to-schedule generation.
//!
//! Generation is a pure, synchronous pipeline over in-memory data:
//!
//! ```text
//! goal text ──▶ duration hint ──▶ total days ─┐
//!     │                                       ├──▶ allocation ──▶ dated tasks
//!     └──────▶ template catalog ──▶ efforts ──┘
//! ```
//!
//! - [`duration`]: reads an `in N days`, `in N weeks` or `by YYYY-MM-DD` hint
//! - [`catalog`]: picks a fixed template cluster by keyword
//! - [`allocation`]: scales efforts to whole days summing to the timeline
//!
//! The resulting [`Plan`] is a strict chain: task `n` depends on task `n - 1`
//! and the task date ranges tile the timeline without gaps or overlaps.
//!
//! # Examples
//!
//! ```rust
//! use compass_core::{params::GeneratePlan, schedule::generate_as_of};
//! use jiff::civil::date;
//!
//! let params = GeneratePlan {
//!     goal: "Launch a product in 2 weeks".to_string(),
//!     start_date: None,
//!     max_days: None,
//! };
//! let plan = generate_as_of(&params, date(2024, 1, 1)).unwrap();
//!
//! assert_eq!(plan.tasks.len(), 8);
//! assert_eq!(plan.end_date(), date(2024, 1, 14));
//! ```

use jiff::{civil::Date, Span, Zoned};
use log::{debug, warn};

use crate::{
    error::{PlannerError, Result},
    models::{Plan, Task, TaskTemplate},
    params::GeneratePlan,
};

pub mod allocation;
pub mod catalog;
pub mod duration;


pub use allocation::allocate_durations;
pub use catalog::select_template;
pub use duration::{parse_date_expression, resolve_total_days, DEFAULT_TOTAL_DAYS};

/// Generates a plan using the local current date.
///
/// See [`generate_as_of`].
pub fn generate(params: &GeneratePlan) -> Result<Plan> {
    generate_as_of(params, Zoned::now().date())
}

/// Generates a plan as if today were `today`.
///
/// `today` anchors the timeline when no start date is given, resolves
/// relative start dates and `by <date>` deadlines, and becomes the plan's
/// `created_on`.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` when:
/// - the goal is empty or only whitespace
/// - the start date cannot be parsed
/// - `max_days` is smaller than the selected template's task count
/// - the timeline would run past the last supported calendar date
pub fn generate_as_of(params: &GeneratePlan, today: Date) -> Result<Plan> {
    let goal = params.goal.as_str();
    if goal.trim().is_empty() {
        return Err(PlannerError::invalid_input("goal").with_reason("Goal cannot be empty"));
    }

    let start_date = match params.start_date.as_deref() {
        Some(raw) => parse_date_expression(raw, today).ok_or_else(|| {
            PlannerError::invalid_input("start_date").with_reason(format!(
                "Expected YYYY-MM-DD, 'today', 'tomorrow' or 'in N days', got '{raw}'"
            ))
        })?,
        None => today,
    };

    let template = select_template(goal);
    let templates = template.tasks();
    let task_count = templates.len() as u32;

    let hinted_days = resolve_total_days(goal, today);
    // A zero cap means "no cap".
    let mut total_days = match params.max_days.filter(|&cap| cap > 0) {
        Some(cap) if cap < task_count => {
            return Err(PlannerError::invalid_input("max_days").with_reason(format!(
                "The {} template has {task_count} tasks and needs at least {task_count} days, got {cap}",
                template.as_str()
            )));
        }
        Some(cap) => hinted_days.min(cap),
        None => hinted_days,
    };

    if total_days < task_count {
        warn!(
            "goal hints at {total_days} days but the {} template has {task_count} tasks; \
             widening the timeline to {task_count} days",
            template.as_str()
        );
        total_days = task_count;
    }

    debug!(
        "generating plan: template={}, total_days={total_days}, start={start_date}",
        template.as_str()
    );

    let efforts: Vec<u32> = templates.iter().map(|t| t.effort).collect();
    let durations = allocate_durations(&efforts, total_days);
    let tasks = sequence_tasks(templates, &durations, start_date)?;

    Ok(Plan {
        goal: goal.to_string(),
        created_on: today,
        start_date,
        total_days,
        template,
        tasks,
    })
}

/// Lays tasks end to end from `start_date`, each depending on the one before.
fn sequence_tasks(
    templates: &[TaskTemplate],
    durations: &[u32],
    start_date: Date,
) -> Result<Vec<Task>> {
    let mut tasks: Vec<Task> = Vec::with_capacity(templates.len());
    let mut cursor = start_date;

    for (index, (template, &duration_days)) in templates.iter().zip(durations).enumerate() {
        if let Some(previous) = tasks.last() {
            cursor = previous.latest_end.tomorrow().map_err(out_of_range)?;
        }

        let latest_end = add_days(cursor, i64::from(duration_days) - 1)?;
        let id = index as u32 + 1;

        tasks.push(Task {
            id,
            title: template.title.to_string(),
            duration_days,
            earliest_start: cursor,
            latest_end,
            depends_on: if index == 0 { Vec::new() } else { vec![id - 1] },
            notes: String::new(),
        });
    }

    Ok(tasks)
}

fn add_days(date: Date, days: i64) -> Result<Date> {
    let span = Span::new().try_days(days).map_err(out_of_range)?;
    date.checked_add(span).map_err(out_of_range)
}

fn out_of_range(error: jiff::Error) -> PlannerError {
    PlannerError::invalid_input("goal")
        .with_reason(format!("Timeline runs past the supported calendar range: {error}"))
}

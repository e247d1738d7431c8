#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::models::{Plan, ProjectSummary, SavedProject, Task, TemplateKind};

    fn create_test_task(id: u32, start_day: i8, days: u32) -> Task {
        let earliest_start = date(2024, 3, start_day);
        Task {
            id,
            title: format!("Task {id}"),
            duration_days: days,
            earliest_start,
            latest_end: date(2024, 3, start_day + days as i8 - 1),
            depends_on: if id > 1 { vec![id - 1] } else { vec![] },
            notes: String::new(),
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            goal: "Write a blog post in 5 days".to_string(),
            created_on: date(2024, 2, 28),
            start_date: date(2024, 3, 1),
            total_days: 5,
            template: TemplateKind::Writing,
            tasks: vec![
                create_test_task(1, 1, 1),
                create_test_task(2, 2, 3),
                create_test_task(3, 5, 1),
            ],
        }
    }

    #[test]
    fn test_template_kind_round_trips_through_str() {
        for kind in [
            TemplateKind::Launch,
            TemplateKind::Writing,
            TemplateKind::Research,
            TemplateKind::Generic,
        ] {
            assert_eq!(kind.as_str().parse::<TemplateKind>(), Ok(kind));
        }
        assert_eq!("LAUNCH".parse::<TemplateKind>(), Ok(TemplateKind::Launch));
        assert!("gardening".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn test_plan_end_date_and_total_duration() {
        let plan = create_test_plan();
        assert_eq!(plan.end_date(), date(2024, 3, 5));
        assert_eq!(plan.total_duration(), 5);
    }

    #[test]
    fn test_empty_plan_ends_on_start_date() {
        let plan = Plan {
            tasks: vec![],
            ..create_test_plan()
        };
        assert_eq!(plan.end_date(), plan.start_date);
        assert_eq!(plan.total_duration(), 0);
    }

    #[test]
    fn test_depends_on_joined() {
        let mut task = create_test_task(4, 1, 1);
        assert_eq!(task.depends_on_joined(), "3");
        task.depends_on = vec![1, 2];
        assert_eq!(task.depends_on_joined(), "1,2");
        task.depends_on.clear();
        assert_eq!(task.depends_on_joined(), "");
    }

    #[test]
    fn test_parse_depends_on() {
        assert_eq!(Task::parse_depends_on(""), Ok(vec![]));
        assert_eq!(Task::parse_depends_on("7"), Ok(vec![7]));
        assert_eq!(Task::parse_depends_on("1, 2"), Ok(vec![1, 2]));
        assert!(Task::parse_depends_on("one").is_err());
    }

    #[test]
    fn test_plan_serializes_dates_as_iso_strings() {
        let plan = create_test_plan();
        let json = serde_json::to_value(&plan).expect("Failed to serialize plan");

        assert_eq!(json["start_date"], "2024-03-01");
        assert_eq!(json["template"], "writing");
        assert_eq!(json["tasks"][1]["earliest_start"], "2024-03-02");
        assert_eq!(json["tasks"][1]["latest_end"], "2024-03-04");

        let back: Plan = serde_json::from_value(json).expect("Failed to deserialize plan");
        assert_eq!(back, plan);
    }

    #[test]
    fn test_project_summary_from_saved_project() {
        let saved = SavedProject {
            id: 12,
            plan: create_test_plan(),
        };
        let summary = ProjectSummary::from(&saved);

        assert_eq!(summary.id, 12);
        assert_eq!(summary.goal, "Write a blog post in 5 days");
        assert_eq!(summary.task_count, 3);
        assert_eq!(summary.template, TemplateKind::Writing);
        assert_eq!(summary.end_date, Some(date(2024, 3, 5)));
    }
}

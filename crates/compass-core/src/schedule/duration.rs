//! Timeline length hints embedded in goal text.

use std::sync::LazyLock;

use jiff::{civil::Date, Span};
use log::{debug, warn};
use regex::Regex;

/// Timeline length used when the goal carries no usable hint.
pub const DEFAULT_TOTAL_DAYS: u32 = 14;

static DAYS_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"in ([0-9]+)\s*days?").expect("days hint pattern is valid"));
static WEEKS_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"in ([0-9]+)\s*weeks?").expect("weeks hint pattern is valid"));
static DEADLINE_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"by ([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("deadline hint pattern is valid")
});

/// Resolves the total timeline length, in days, hinted at by a goal.
///
/// Checked in order, first match wins, case-insensitive:
///
/// 1. `in <N> day(s)` gives `N`
/// 2. `in <N> week(s)` gives `N * 7`
/// 3. `by <YYYY-MM-DD>` gives the days from `today` to that date, at least 1
///
/// Anything else, including a deadline that is not a real date or a count
/// that does not fit in a `u32`, gives [`DEFAULT_TOTAL_DAYS`]. The result is
/// never zero.
pub fn resolve_total_days(goal: &str, today: Date) -> u32 {
    let text = goal.to_lowercase();

    if let Some(count) = first_capture(&DAYS_HINT, &text) {
        debug!("duration hint: '{count}' days");
        return count.parse::<u32>().map_or(DEFAULT_TOTAL_DAYS, |n| n.max(1));
    }

    if let Some(count) = first_capture(&WEEKS_HINT, &text) {
        debug!("duration hint: '{count}' weeks");
        return count
            .parse::<u32>()
            .ok()
            .and_then(|n| n.checked_mul(7))
            .map_or(DEFAULT_TOTAL_DAYS, |n| n.max(1));
    }

    if let Some(deadline) = first_capture(&DEADLINE_HINT, &text) {
        debug!("duration hint: deadline {deadline}");
        return match days_until(deadline, today) {
            Some(days) => days,
            None => {
                warn!("ignoring unparseable deadline '{deadline}' in goal");
                DEFAULT_TOTAL_DAYS
            }
        };
    }

    DEFAULT_TOTAL_DAYS
}

/// Parses a start date typed by a user.
///
/// Accepts an ISO date (`2024-01-31`), `today`, `tomorrow`, or `in <N> days`.
/// Returns `None` for anything else.
pub fn parse_date_expression(raw: &str, today: Date) -> Option<Date> {
    let text = raw.trim();
    if let Ok(date) = text.parse::<Date>() {
        return Some(date);
    }

    match text.to_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.tomorrow().ok(),
        other => {
            let count = first_capture(&DAYS_HINT, other)?.parse::<i64>().ok()?;
            let span = Span::new().try_days(count).ok()?;
            today.checked_add(span).ok()
        }
    }
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn days_until(deadline: &str, today: Date) -> Option<u32> {
    let target = deadline.parse::<Date>().ok()?;
    let days = target.since(today).ok()?.get_days();
    Some(u32::try_from(days).unwrap_or(0).max(1))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    const TODAY: Date = date(2024, 1, 1);

    #[test]
    fn test_days_hint() {
        assert_eq!(resolve_total_days("Finish the deck in 10 days", TODAY), 10);
        assert_eq!(resolve_total_days("Finish the deck in 1 day", TODAY), 1);
        assert_eq!(resolve_total_days("Finish the deck in 3days", TODAY), 3);
    }

    #[test]
    fn test_weeks_hint() {
        assert_eq!(resolve_total_days("Launch a product in 2 weeks", TODAY), 14);
        assert_eq!(resolve_total_days("Launch a product IN 1 WEEK", TODAY), 7);
    }

    #[test]
    fn test_days_hint_wins_over_weeks_hint() {
        assert_eq!(
            resolve_total_days("in 3 weeks, or failing that in 5 days", TODAY),
            5
        );
    }

    #[test]
    fn test_hint_may_start_inside_a_word() {
        assert_eq!(resolve_total_days("Move house within 6 days", TODAY), 6);
    }

    #[test]
    fn test_deadline_hint() {
        assert_eq!(resolve_total_days("Submit paper by 2024-01-31", TODAY), 30);
    }

    #[test]
    fn test_deadline_in_the_past_is_at_least_one_day() {
        assert_eq!(resolve_total_days("Submit paper by 2023-06-01", TODAY), 1);
        assert_eq!(resolve_total_days("Submit paper by 2024-01-01", TODAY), 1);
    }

    #[test]
    fn test_malformed_deadline_falls_back_to_default() {
        assert_eq!(
            resolve_total_days("Submit paper by 2024-13-45", TODAY),
            DEFAULT_TOTAL_DAYS
        );
    }

    #[test]
    fn test_no_hint_uses_default() {
        assert_eq!(resolve_total_days("Tidy the garage", TODAY), DEFAULT_TOTAL_DAYS);
        assert_eq!(resolve_total_days("", TODAY), DEFAULT_TOTAL_DAYS);
    }

    #[test]
    fn test_zero_count_resolves_to_one_day() {
        assert_eq!(resolve_total_days("Do it in 0 days", TODAY), 1);
        assert_eq!(resolve_total_days("Do it in 0 weeks", TODAY), 1);
    }

    #[test]
    fn test_overflowing_count_falls_back_to_default() {
        assert_eq!(
            resolve_total_days("Do it in 99999999999 days", TODAY),
            DEFAULT_TOTAL_DAYS
        );
        assert_eq!(
            resolve_total_days("Do it in 1000000000 weeks", TODAY),
            DEFAULT_TOTAL_DAYS
        );
    }

    #[test]
    fn test_parse_date_expression() {
        assert_eq!(
            parse_date_expression("2024-02-29", TODAY),
            Some(date(2024, 2, 29))
        );
        assert_eq!(parse_date_expression(" today ", TODAY), Some(TODAY));
        assert_eq!(
            parse_date_expression("Tomorrow", TODAY),
            Some(date(2024, 1, 2))
        );
        assert_eq!(
            parse_date_expression("in 10 days", TODAY),
            Some(date(2024, 1, 11))
        );
        assert_eq!(parse_date_expression("next tuesday", TODAY), None);
        assert_eq!(parse_date_expression("2024-02-30", TODAY), None);
    }
}

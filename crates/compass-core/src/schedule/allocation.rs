//! Proportional split of a timeline across weighted tasks.

use log::debug;

/// Splits `total_days` across tasks in proportion to their efforts.
///
/// Each task first gets its proportional share rounded half away from zero,
/// with a floor of one day. The rounded shares are then reconciled one day at
/// a time until they sum to exactly `total_days`:
///
/// - missing days are handed out round-robin from the first task
/// - surplus days come off the task that was rounded up the most, ties going
///   to the earlier task, and a task is never shortened below one day
///
/// The caller must pass `total_days >= efforts.len()`; otherwise the one-day
/// floor wins over the exact sum.
pub fn allocate_durations(efforts: &[u32], total_days: u32) -> Vec<u32> {
    if efforts.is_empty() {
        return Vec::new();
    }

    let shares = exact_shares(efforts, total_days);
    let mut durations: Vec<u32> = shares
        .iter()
        .map(|share| (share.round() as u32).max(1))
        .collect();

    let target = u64::from(total_days);
    let sum = total(&durations);
    if sum < target {
        fill_round_robin(&mut durations, target);
    } else if sum > target {
        trim_surplus(&mut durations, &shares, target);
    }
    durations
}

fn exact_shares(efforts: &[u32], total_days: u32) -> Vec<f64> {
    let total = f64::from(total_days);
    let total_effort: u64 = efforts.iter().map(|&e| u64::from(e)).sum();
    if total_effort == 0 {
        let even = total / efforts.len() as f64;
        return vec![even; efforts.len()];
    }

    efforts
        .iter()
        .map(|&effort| f64::from(effort) / total_effort as f64 * total)
        .collect()
}

fn total(durations: &[u32]) -> u64 {
    durations.iter().map(|&d| u64::from(d)).sum()
}

fn fill_round_robin(durations: &mut [u32], target: u64) {
    let missing = target - total(durations);
    debug!("reconcile: adding {missing} day(s) round-robin");

    for index in (0..durations.len()).cycle().take(missing as usize) {
        durations[index] += 1;
    }
}

fn trim_surplus(durations: &mut [u32], shares: &[f64], target: u64) {
    while total(durations) > target {
        let Some(index) = most_rounded_up(durations, shares) else {
            return;
        };
        debug!("reconcile: task {} -1 day", index + 1);
        durations[index] -= 1;
    }
}

/// Index of the task longer than one day with the largest `days - share`,
/// lowest index on ties.
fn most_rounded_up(durations: &[u32], shares: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, (&days, &share)) in durations.iter().zip(shares).enumerate() {
        if days <= 1 {
            continue;
        }
        let excess = f64::from(days) - share;
        match best {
            Some((_, current)) if excess <= current => {}
            _ => best = Some((index, excess)),
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAUNCH: [u32; 8] = [1, 2, 1, 2, 4, 2, 2, 1];
    const WRITING: [u32; 6] = [1, 2, 3, 1, 1, 2];
    const RESEARCH: [u32; 6] = [1, 3, 2, 4, 3, 1];
    const GENERIC: [u32; 6] = [1, 2, 3, 3, 2, 1];

    #[test]
    fn test_launch_two_weeks() {
        assert_eq!(
            allocate_durations(&LAUNCH, 14),
            vec![1, 2, 1, 2, 3, 2, 2, 1]
        );
    }

    #[test]
    fn test_generic_default_needs_no_reconciliation() {
        assert_eq!(allocate_durations(&GENERIC, 14), vec![1, 2, 4, 4, 2, 1]);
    }

    #[test]
    fn test_surplus_never_drops_a_task_below_one_day() {
        // Every share is 0.5 or 1.0, so the floor alone sums to 9.
        let durations = allocate_durations(&LAUNCH, 8);
        assert_eq!(durations, vec![1; 8]);
    }

    #[test]
    fn test_surplus_comes_off_most_rounded_up_task() {
        // Shares: 1.6, 3.2, 4.8, 1.6, 1.6, 3.2 -> rounded sum 17.
        assert_eq!(allocate_durations(&WRITING, 16), vec![1, 3, 5, 2, 2, 3]);
    }

    #[test]
    fn test_missing_day_goes_to_first_task() {
        // Shares: 1.08, 2.17, 3.25, 3.25, 2.17, 1.08 -> rounded sum 12.
        assert_eq!(allocate_durations(&GENERIC, 13), vec![2, 2, 3, 3, 2, 1]);
        // Shares: 1.07, 3.21, 2.14, 4.29, 3.21, 1.07 -> rounded sum 14.
        assert_eq!(allocate_durations(&RESEARCH, 15), vec![2, 3, 2, 4, 3, 1]);
    }

    #[test]
    fn test_missing_days_are_handed_out_in_task_order() {
        // Shares: 1.2, 2.4, 1.2, 2.4, 4.8, 2.4, 2.4, 1.2 -> rounded sum 16.
        assert_eq!(
            allocate_durations(&LAUNCH, 18),
            vec![2, 3, 1, 2, 5, 2, 2, 1]
        );
    }

    #[test]
    fn test_sum_matches_total_for_many_totals() {
        for efforts in [&LAUNCH[..], &WRITING[..], &RESEARCH[..], &GENERIC[..]] {
            for total in efforts.len() as u32..=120 {
                let durations = allocate_durations(efforts, total);
                assert_eq!(
                    durations.iter().sum::<u32>(),
                    total,
                    "efforts {efforts:?} total {total}"
                );
                assert!(durations.iter().all(|&d| d >= 1));
            }
        }
    }

    #[test]
    fn test_total_equal_to_task_count_gives_one_day_each() {
        assert_eq!(allocate_durations(&RESEARCH, 6), vec![1; 6]);
    }

    #[test]
    fn test_total_below_task_count_keeps_floor() {
        assert_eq!(allocate_durations(&GENERIC, 3), vec![1; 6]);
    }

    #[test]
    fn test_zero_efforts_split_evenly() {
        assert_eq!(allocate_durations(&[0, 0, 0], 6), vec![2, 2, 2]);
    }

    #[test]
    fn test_empty_efforts() {
        assert!(allocate_durations(&[], 10).is_empty());
    }
}

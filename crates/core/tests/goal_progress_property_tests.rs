//! Property-based integration tests for goal progress evaluation.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use spendsmart_core::goals::{evaluate, GoalPriority, GoalProgressInput, GoalStatus};
use spendsmart_core::transactions::{Frequency, RecurringSchedule};

// =============================================================================
// Generators
// =============================================================================

/// Generates a well-formed goal: positive target, non-negative saved amount.
fn arb_goal_input() -> impl Strategy<Value = GoalProgressInput> {
    (
        1.0f64..1_000_000.0, // target_amount
        0.0f64..2.0,         // saved share of target
        -365i64..3650,       // remaining_days
        proptest::option::of(1i64..5000),
    )
        .prop_map(|(target, share, remaining, total)| {
            let input = GoalProgressInput::new(target * share, target, remaining);
            match total {
                Some(total) => input.with_total_days(total),
                None => input,
            }
        })
}

fn arb_frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
        Just(Frequency::Yearly),
    ]
}

fn arb_date() -> impl Strategy<Value = chrono::NaiveDate> {
    (0i64..20_000).prop_map(|offset| {
        chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Amount progress is the clamped saved/target ratio.
    #[test]
    fn prop_amount_progress_is_clamped_ratio(input in arb_goal_input()) {
        let result = evaluate(&input);
        let expected = (input.current_amount / input.target_amount * 100.0).clamp(0.0, 100.0);
        prop_assert!((result.amount_progress - expected).abs() < 1e-9);
    }

    /// Both progress values stay in [0, 100] and the difference is their
    /// exact signed gap.
    #[test]
    fn prop_progress_difference_is_bounded(input in arb_goal_input()) {
        let result = evaluate(&input);
        prop_assert!((0.0..=100.0).contains(&result.amount_progress));
        prop_assert!((0.0..=100.0).contains(&result.timeline_progress));
        prop_assert_eq!(
            result.progress_difference,
            result.amount_progress - result.timeline_progress
        );
        prop_assert!((-100.0..=100.0).contains(&result.progress_difference));
    }

    /// Evaluation is a pure function of its input.
    #[test]
    fn prop_evaluate_is_idempotent(input in arb_goal_input()) {
        prop_assert_eq!(evaluate(&input), evaluate(&input));
    }

    /// A zero target never divides and never reports progress.
    #[test]
    fn prop_zero_target_has_no_progress(
        current in 0.0f64..10_000.0,
        remaining in -30i64..400,
    ) {
        let result = evaluate(&GoalProgressInput::new(current, 0.0, remaining));
        prop_assert_eq!(result.amount_progress, 0.0);
        prop_assert!(result.progress_difference.is_finite());
    }

    /// Funded goals are always reported as completed with excellent priority.
    #[test]
    fn prop_funded_goals_are_completed(
        target in 1.0f64..100_000.0,
        extra in 0.0f64..1.0,
        remaining in -365i64..365,
    ) {
        let result = evaluate(&GoalProgressInput::new(target * (1.0 + extra), target, remaining));
        let expected = if remaining > 0 {
            GoalStatus::CompletedEarly
        } else {
            GoalStatus::Completed
        };
        prop_assert_eq!(result.status, expected);
        prop_assert_eq!(result.priority, GoalPriority::Excellent);
    }

    /// Unfunded goals past their deadline are overdue.
    #[test]
    fn prop_unfunded_past_deadline_is_overdue(
        target in 1.0f64..100_000.0,
        share in 0.0f64..0.99,
        remaining in -365i64..=0,
    ) {
        let result = evaluate(&GoalProgressInput::new(target * share, target, remaining));
        prop_assert_eq!(result.status, GoalStatus::Overdue);
        prop_assert_eq!(result.priority, GoalPriority::Urgent);
    }

    /// The color and priority always belong to the reported status.
    #[test]
    fn prop_color_and_priority_follow_status(input in arb_goal_input()) {
        let result = evaluate(&input);
        prop_assert_eq!(result.color.as_str(), result.status.color());
        prop_assert_eq!(result.priority, result.status.priority());
    }

    /// Occurrences are strictly increasing and stay inside the query range.
    #[test]
    fn prop_occurrences_sorted_and_bounded(
        start in arb_date(),
        from in arb_date(),
        span in 0i64..800,
        frequency in arb_frequency(),
    ) {
        let schedule = RecurringSchedule { start_date: start, end_date: None, frequency };
        let to = from + chrono::Duration::days(span);
        let dates = schedule.occurrences_between(from, to);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(dates.iter().all(|d| *d >= from && *d <= to && *d >= start));
        if let Some(first) = dates.first() {
            prop_assert_eq!(schedule.next_occurrence(from), Some(*first));
        }
    }
}

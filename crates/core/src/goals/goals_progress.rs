//! Goal progress and status evaluation.
//!
//! Derives a goal's amount progress, an estimated timeline progress and a
//! status/priority classification from three numbers: the saved amount, the
//! target amount and the days left until the deadline.
//!
//! The timeline estimate is a heuristic. Goals do not reliably carry a start
//! date, so the elapsed share of the window is inferred from the remaining
//! days and the amount progress. When the caller knows the full window length
//! it is used instead.

use serde::{Deserialize, Serialize};

/// Goals with this many days left or fewer are in the final stretch.
pub const NEAR_DEADLINE_DAYS: i64 = 7;

/// Timeline progress assumed for a goal that has nothing saved yet.
const JUST_STARTED_TIMELINE_PROGRESS: f64 = 5.0;

// =============================================================================
// Input
// =============================================================================

/// The numbers the evaluator works on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressInput {
    pub current_amount: f64,
    pub target_amount: f64,
    pub remaining_days: i64,
    /// Full length of the goal window when start and deadline are known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<i64>,
}

impl GoalProgressInput {
    pub fn new(current_amount: f64, target_amount: f64, remaining_days: i64) -> Self {
        Self {
            current_amount,
            target_amount,
            remaining_days,
            total_days: None,
        }
    }

    /// Replaces the heuristic timeline estimate with the measured one.
    pub fn with_total_days(mut self, total_days: i64) -> Self {
        self.total_days = Some(total_days);
        self
    }
}

// =============================================================================
// Priority
// =============================================================================

/// Display priority attached to a goal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Excellent,
    Good,
    Warning,
    Urgent,
    Critical,
}

impl GoalPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPriority::Excellent => "excellent",
            GoalPriority::Good => "good",
            GoalPriority::Warning => "warning",
            GoalPriority::Urgent => "urgent",
            GoalPriority::Critical => "critical",
        }
    }
}

impl std::fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Status
// =============================================================================

/// Derived goal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "Completed Early")]
    CompletedEarly,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Overdue")]
    Overdue,
    #[serde(rename = "Almost Done")]
    AlmostDone,
    #[serde(rename = "Final Push")]
    FinalPush,
    #[serde(rename = "Critical")]
    Critical,
    #[serde(rename = "Ahead of Schedule")]
    AheadOfSchedule,
    #[serde(rename = "Ahead")]
    Ahead,
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Behind Schedule")]
    BehindSchedule,
    #[serde(rename = "Falling Behind")]
    FallingBehind,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl GoalStatus {
    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::CompletedEarly => "Completed Early",
            GoalStatus::Completed => "Completed",
            GoalStatus::Overdue => "Overdue",
            GoalStatus::AlmostDone => "Almost Done",
            GoalStatus::FinalPush => "Final Push",
            GoalStatus::Critical => "Critical",
            GoalStatus::AheadOfSchedule => "Ahead of Schedule",
            GoalStatus::Ahead => "Ahead",
            GoalStatus::OnTrack => "On Track",
            GoalStatus::BehindSchedule => "Behind Schedule",
            GoalStatus::FallingBehind => "Falling Behind",
            GoalStatus::NeedsAttention => "Needs Attention",
        }
    }

    /// Hex color used to render this status.
    pub fn color(&self) -> &'static str {
        match self {
            GoalStatus::CompletedEarly => "#2e7d32",
            GoalStatus::Completed => "#4caf50",
            GoalStatus::Overdue => "#d32f2f",
            GoalStatus::AlmostDone => "#66bb6a",
            GoalStatus::FinalPush => "#ff9800",
            GoalStatus::Critical => "#f44336",
            GoalStatus::AheadOfSchedule => "#1b5e20",
            GoalStatus::Ahead => "#43a047",
            GoalStatus::OnTrack => "#1976d2",
            GoalStatus::BehindSchedule => "#ffa726",
            GoalStatus::FallingBehind => "#ef6c00",
            GoalStatus::NeedsAttention => "#b71c1c",
        }
    }

    pub fn priority(&self) -> GoalPriority {
        match self {
            GoalStatus::CompletedEarly | GoalStatus::Completed | GoalStatus::AheadOfSchedule => {
                GoalPriority::Excellent
            }
            GoalStatus::AlmostDone | GoalStatus::Ahead | GoalStatus::OnTrack => GoalPriority::Good,
            GoalStatus::FinalPush | GoalStatus::BehindSchedule => GoalPriority::Warning,
            GoalStatus::Overdue | GoalStatus::Critical | GoalStatus::FallingBehind => {
                GoalPriority::Urgent
            }
            GoalStatus::NeedsAttention => GoalPriority::Critical,
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Result
// =============================================================================

/// Output of [`evaluate`]. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatusResult {
    pub status: GoalStatus,
    pub color: String,
    pub priority: GoalPriority,
    /// Clamped to `[0, 100]`.
    pub amount_progress: f64,
    /// Clamped to `[0, 100]`.
    pub timeline_progress: f64,
    /// `amount_progress - timeline_progress`, within `[-100, 100]`.
    pub progress_difference: f64,
}

// =============================================================================
// Evaluation
// =============================================================================

/// Percentage of the target saved so far, unclamped. Zero when the target is
/// not positive.
pub fn amount_progress(current_amount: f64, target_amount: f64) -> f64 {
    if target_amount > 0.0 {
        current_amount / target_amount * 100.0
    } else {
        0.0
    }
}

/// Estimates how much of the goal's window has elapsed.
///
/// `amount_progress` must already be clamped to `[0, 100]`. The estimate
/// assumes saving continues at the pace implied by the current progress, so
/// the total window is `remaining_days * 100 / (100 - amount_progress)`.
pub fn estimate_timeline_progress(remaining_days: i64, amount_progress: f64) -> f64 {
    if remaining_days <= 0 || amount_progress >= 100.0 {
        return 100.0;
    }
    if amount_progress > 0.0 {
        let remaining = remaining_days as f64;
        let estimated_total_days = remaining * 100.0 / (100.0 - amount_progress);
        return (estimated_total_days - remaining) / estimated_total_days * 100.0;
    }
    JUST_STARTED_TIMELINE_PROGRESS
}

/// Elapsed share of a window whose full length is known.
pub fn measured_timeline_progress(remaining_days: i64, total_days: i64) -> f64 {
    if remaining_days <= 0 {
        return 100.0;
    }
    let total = total_days as f64;
    (total - remaining_days as f64) / total * 100.0
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn classify(amount_progress: f64, remaining_days: i64, progress_difference: f64) -> GoalStatus {
    if amount_progress >= 100.0 {
        return if remaining_days > 0 {
            GoalStatus::CompletedEarly
        } else {
            GoalStatus::Completed
        };
    }
    if remaining_days <= 0 {
        return GoalStatus::Overdue;
    }
    if remaining_days <= NEAR_DEADLINE_DAYS {
        return if amount_progress >= 90.0 {
            GoalStatus::AlmostDone
        } else if amount_progress >= 70.0 {
            GoalStatus::FinalPush
        } else {
            GoalStatus::Critical
        };
    }

    match progress_difference {
        d if d >= 15.0 => GoalStatus::AheadOfSchedule,
        d if d >= 5.0 => GoalStatus::Ahead,
        d if d >= -5.0 => GoalStatus::OnTrack,
        d if d >= -15.0 => GoalStatus::BehindSchedule,
        d if d >= -25.0 => GoalStatus::FallingBehind,
        _ => GoalStatus::NeedsAttention,
    }
}

/// Evaluates a goal's progress and derives its status.
///
/// Total over finite inputs. `NaN` amounts are a caller error and are not
/// sanitized here.
pub fn evaluate(input: &GoalProgressInput) -> GoalStatusResult {
    let amount = clamp_percent(amount_progress(input.current_amount, input.target_amount));

    let timeline = match input.total_days {
        Some(total) if total > 0 => measured_timeline_progress(input.remaining_days, total),
        _ => estimate_timeline_progress(input.remaining_days, amount),
    };
    let timeline = clamp_percent(timeline);

    let progress_difference = amount - timeline;
    let status = classify(amount, input.remaining_days, progress_difference);

    GoalStatusResult {
        status,
        color: status.color().to_string(),
        priority: status.priority(),
        amount_progress: amount,
        timeline_progress: timeline,
        progress_difference,
    }
}

/// Amount that must be saved per day to hit the target by the deadline.
///
/// `None` once the deadline has passed or nothing is left to save.
pub fn required_daily_saving(input: &GoalProgressInput) -> Option<f64> {
    let missing = input.target_amount - input.current_amount;
    if input.remaining_days <= 0 || missing <= 0.0 {
        return None;
    }
    Some(missing / input.remaining_days as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(current: f64, target: f64, days: i64) -> GoalStatusResult {
        evaluate(&GoalProgressInput::new(current, target, days))
    }

    #[test]
    fn test_amount_progress_ratio() {
        assert_eq!(eval(250.0, 1000.0, 30).amount_progress, 25.0);
    }

    #[test]
    fn test_zero_target_has_zero_progress() {
        let result = eval(100.0, 0.0, 30);
        assert_eq!(result.amount_progress, 0.0);
        assert!(result.progress_difference.is_finite());
    }

    #[test]
    fn test_completed_early() {
        let result = eval(500.0, 500.0, 3);
        assert_eq!(result.status, GoalStatus::CompletedEarly);
        assert_eq!(result.priority, GoalPriority::Excellent);
        assert_eq!(result.amount_progress, 100.0);
    }

    #[test]
    fn test_completed_on_deadline() {
        let result = eval(500.0, 500.0, 0);
        assert_eq!(result.status, GoalStatus::Completed);
        assert_eq!(result.priority, GoalPriority::Excellent);
    }

    #[test]
    fn test_overdue() {
        let result = eval(100.0, 1000.0, 0);
        assert_eq!(result.status, GoalStatus::Overdue);
        assert_eq!(result.priority, GoalPriority::Urgent);
        assert_eq!(result.timeline_progress, 100.0);
    }

    #[test]
    fn test_past_deadline_counts_as_fully_elapsed() {
        let result = eval(0.0, 1000.0, -12);
        assert_eq!(result.status, GoalStatus::Overdue);
        assert_eq!(result.timeline_progress, 100.0);
        assert_eq!(result.progress_difference, -100.0);
    }

    #[test]
    fn test_near_deadline_bands() {
        assert_eq!(eval(950.0, 1000.0, 5).status, GoalStatus::AlmostDone);
        assert_eq!(eval(750.0, 1000.0, 7).status, GoalStatus::FinalPush);
        assert_eq!(eval(750.0, 1000.0, 7).priority, GoalPriority::Warning);
        let critical = eval(200.0, 1000.0, 5);
        assert_eq!(critical.status, GoalStatus::Critical);
        assert_eq!(critical.priority, GoalPriority::Urgent);
    }

    #[test]
    fn test_heuristic_tracks_amount_progress() {
        // With no known window the estimate lands on the amount progress itself.
        let result = eval(900.0, 1000.0, 100);
        assert!((result.timeline_progress - 90.0).abs() < 1e-9);
        assert_eq!(result.status, GoalStatus::OnTrack);
    }

    #[test]
    fn test_ahead_of_schedule_with_known_window() {
        let input = GoalProgressInput::new(900.0, 1000.0, 100).with_total_days(365);
        let result = evaluate(&input);
        assert!(result.progress_difference >= 15.0);
        assert_eq!(result.status, GoalStatus::AheadOfSchedule);
        assert_eq!(result.priority, GoalPriority::Excellent);
    }

    #[test]
    fn test_difference_bands_with_known_window() {
        // 100-day window, 50 days left => timeline 50%.
        let status_at = |current: f64| {
            evaluate(&GoalProgressInput::new(current, 100.0, 50).with_total_days(100)).status
        };
        assert_eq!(status_at(65.0), GoalStatus::AheadOfSchedule);
        assert_eq!(status_at(58.0), GoalStatus::Ahead);
        assert_eq!(status_at(50.0), GoalStatus::OnTrack);
        assert_eq!(status_at(45.0), GoalStatus::OnTrack);
        assert_eq!(status_at(40.0), GoalStatus::BehindSchedule);
        assert_eq!(status_at(30.0), GoalStatus::FallingBehind);
        assert_eq!(status_at(10.0), GoalStatus::NeedsAttention);
        assert_eq!(GoalStatus::NeedsAttention.priority(), GoalPriority::Critical);
    }

    #[test]
    fn test_just_started_floor() {
        let result = eval(0.0, 1000.0, 60);
        assert_eq!(result.timeline_progress, 5.0);
        assert_eq!(result.progress_difference, -5.0);
        assert_eq!(result.status, GoalStatus::OnTrack);
    }

    #[test]
    fn test_negative_saved_amount_is_clamped() {
        let result = eval(-50.0, 1000.0, 60);
        assert_eq!(result.amount_progress, 0.0);
        assert_eq!(result.timeline_progress, 5.0);
    }

    #[test]
    fn test_overfunded_goal_has_no_nan() {
        let result = eval(1500.0, 1000.0, 20);
        assert_eq!(result.amount_progress, 100.0);
        assert_eq!(result.timeline_progress, 100.0);
        assert_eq!(result.progress_difference, 0.0);
    }

    #[test]
    fn test_start_in_future_clamps_timeline() {
        let input = GoalProgressInput::new(0.0, 100.0, 120).with_total_days(90);
        assert_eq!(evaluate(&input).timeline_progress, 0.0);
    }

    #[test]
    fn test_color_follows_status() {
        let result = eval(100.0, 1000.0, 0);
        assert_eq!(result.color, GoalStatus::Overdue.color());
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let input = GoalProgressInput::new(321.0, 1234.0, 45);
        assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_value(eval(500.0, 500.0, 3)).unwrap();
        assert_eq!(json["status"], "Completed Early");
        assert_eq!(json["priority"], "excellent");
        assert!(json.get("amountProgress").is_some());
    }

    #[test]
    fn test_required_daily_saving() {
        let input = GoalProgressInput::new(400.0, 1000.0, 30);
        assert_eq!(required_daily_saving(&input), Some(20.0));
        assert_eq!(
            required_daily_saving(&GoalProgressInput::new(400.0, 1000.0, 0)),
            None
        );
        assert_eq!(
            required_daily_saving(&GoalProgressInput::new(1000.0, 1000.0, 10)),
            None
        );
    }
}

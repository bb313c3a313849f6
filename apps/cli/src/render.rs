//! Plain-text rendering of command results.

use chrono::NaiveDate;
use serde::Serialize;
use spendsmart_core::{
    admin::{Admin, User, UserStats},
    goals::{GoalDetail, GoalStatusResult, GoalWithProgress},
    reports::{DashboardSummary, MonthlyReport},
    transactions::{
        Category, RecurringTransaction, Transaction, TransactionType, UpcomingTransaction,
    },
};

const BAR_WIDTH: usize = 20;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn signed_money(transaction: &Transaction) -> String {
    match transaction.transaction_type {
        TransactionType::Income => format!("+{}", money(transaction.amount)),
        TransactionType::Expense => format!("-{}", money(transaction.amount)),
    }
}

/// Fixed-width bar for a percentage in `[0, 100]`.
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn status_line(result: &GoalStatusResult) -> String {
    format!(
        "{} ({}, {}) amount {:.1}% / timeline {:.1}% ({:+.1})",
        result.status,
        result.priority,
        result.color,
        result.amount_progress,
        result.timeline_progress,
        result.progress_difference
    )
}

pub fn goal_row(goal: &GoalWithProgress) -> String {
    let status = goal
        .progress
        .as_ref()
        .map(|p| p.status.label())
        .unwrap_or("No deadline");
    format!(
        "{:<12} {:<24} {} {:>5.1}%  {} / {}  {}",
        goal.goal.id,
        goal.goal.name,
        progress_bar(goal.amount_progress),
        goal.amount_progress,
        money(goal.goal.current_amount),
        money(goal.goal.target_amount),
        status
    )
}

pub fn goal_detail(detail: &GoalDetail) -> Vec<String> {
    let goal = &detail.goal.goal;
    let mut lines = vec![
        format!("Goal: {} ({})", goal.name, goal.id),
        format!(
            "  Saved: {} of {} {}",
            money(goal.current_amount),
            money(goal.target_amount),
            progress_bar(detail.goal.amount_progress)
        ),
    ];
    if let Some(description) = &goal.description {
        lines.push(format!("  Description: {}", description));
    }
    if let Some(deadline) = goal.deadline {
        lines.push(format!("  Deadline: {}", deadline));
    }
    match &detail.goal.progress {
        Some(progress) => lines.push(format!("  Status: {}", status_line(progress))),
        None => lines.push("  Status: No deadline".to_string()),
    }
    if goal.remaining_amount() > 0.0 {
        lines.push(format!("  Still needed: {}", money(goal.remaining_amount())));
    }
    if let Some(daily) = detail.goal.required_daily_saving {
        lines.push(format!("  Needed per day: {}", money(daily)));
    }
    lines.push(format!(
        "  Savings ({} records, {} total)",
        detail.records.len(),
        money(detail.total_recorded)
    ));
    for record in &detail.records {
        lines.push(format!(
            "    {}  {:>12}  {}",
            record.date,
            money(record.amount),
            record.note.as_deref().unwrap_or("")
        ));
    }
    lines
}

pub fn transaction_row(transaction: &Transaction) -> String {
    format!(
        "{}  {:>12}  {:<16} {}",
        transaction.date,
        signed_money(transaction),
        transaction
            .category_name
            .as_deref()
            .unwrap_or(&transaction.category_id),
        transaction.description
    )
}

pub fn category_row(category: &Category) -> String {
    format!("{:<12} {:<8} {}", category.id, category.category_type.as_str(), category.name)
}

pub fn recurring_row(recurring: &RecurringTransaction, today: NaiveDate) -> String {
    let next = recurring
        .next_due(today)
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<12} {:<8} {:>12}  {:<24} next {}{}",
        recurring.id,
        recurring.frequency.as_str(),
        money(recurring.amount),
        recurring.description,
        next,
        if recurring.is_active { "" } else { " (paused)" }
    )
}

pub fn upcoming_row(upcoming: &UpcomingTransaction) -> String {
    format!(
        "{}  {:>12}  {}",
        upcoming.due_date,
        money(upcoming.recurring.amount),
        upcoming.recurring.description
    )
}

pub fn user_row(user: &User) -> String {
    format!(
        "{:<12} {:<24} {:<32} {}",
        user.id,
        user.name,
        user.email,
        if user.is_active { "active" } else { "inactive" }
    )
}

pub fn user_stats(stats: &UserStats) -> Vec<String> {
    vec![
        format!("Total users: {}", stats.total_users),
        format!("  Active: {}", stats.active_users),
        format!("  Inactive: {}", stats.inactive_users()),
        format!("  New this month: {}", stats.new_users_this_month),
    ]
}

pub fn admin_row(admin: &Admin) -> String {
    format!("{:<12} {:<20} {:<32} {}", admin.id, admin.username, admin.email, admin.role.as_str())
}

pub fn monthly_report(report: &MonthlyReport) -> Vec<String> {
    let mut lines = vec![
        format!("Report {}-{:02}", report.year, report.month),
        format!("  Income:  {:>12}", money(report.total_income)),
        format!("  Expense: {:>12}", money(report.total_expense)),
        format!("  Net:     {:>12}", money(report.net_savings)),
    ];
    if let Some(rate) = report.savings_rate() {
        lines.push(format!("  Savings rate: {:.1}%", rate));
    }
    for (label, kind) in [
        ("Top expenses", TransactionType::Expense),
        ("Income sources", TransactionType::Income),
    ] {
        let totals = report.top_categories(kind);
        if totals.is_empty() {
            continue;
        }
        lines.push(format!("  {}:", label));
        for total in totals {
            lines.push(format!("    {:<20} {:>12}", total.category_name, money(total.total)));
        }
    }
    lines
}

/// One line comparing a month against the month before it.
pub fn report_change(current: &MonthlyReport, previous: &MonthlyReport) -> String {
    format!(
        "  vs {}-{:02}: income {}, expense {}, net {}",
        previous.year,
        previous.month,
        delta(current.total_income - previous.total_income),
        delta(current.total_expense - previous.total_expense),
        delta(current.net_savings - previous.net_savings)
    )
}

fn delta(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}

pub fn dashboard(summary: &DashboardSummary) -> Vec<String> {
    vec![
        format!("Income:  {:>12}", money(summary.total_income)),
        format!("Expense: {:>12}", money(summary.total_expense)),
        format!("Balance: {:>12}", money(summary.balance)),
        format!(
            "Goals: {} active, {} completed",
            summary.active_goals, summary.completed_goals
        ),
    ]
}

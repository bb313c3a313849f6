use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use spendsmart_core::{
    admin::{AdminRole, NewAdmin},
    goals::{evaluate, required_daily_saving, GoalProgressInput, NewGoal, NewSavingRecord},
    reports::ReportPeriod,
    transactions::{
        validate_recurring_window, Frequency, NewRecurringTransaction, NewTransaction,
        RecurringSchedule, TransactionFilter, TransactionType,
    },
};
use tracing::info;

use crate::main_lib::AppServices;
use crate::render;

#[derive(Parser)]
#[command(name = "spendsmart")]
#[command(about = "Personal finance tracking from the command line", long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Savings goals
    #[command(subcommand)]
    Goals(GoalsCommand),
    /// Income and expense transactions
    #[command(subcommand)]
    Transactions(TransactionsCommand),
    /// Recurring transactions
    #[command(subcommand)]
    Recurring(RecurringCommand),
    /// User management
    #[command(subcommand)]
    Users(UsersCommand),
    /// Administrator accounts
    #[command(subcommand)]
    Admins(AdminsCommand),
    /// Reports
    #[command(subcommand)]
    Report(ReportCommand),
    /// Headline numbers
    Dashboard,
}

#[derive(Subcommand)]
pub enum GoalsCommand {
    /// List goals with their status
    List,
    /// Show a goal with its saving history
    Show { id: String },
    /// Create a goal
    Create(GoalArgs),
    /// Replace a goal's details
    Update {
        id: String,
        #[command(flatten)]
        goal: GoalArgs,
    },
    /// Delete a goal
    Delete { id: String },
    /// Record a contribution toward a goal
    Save {
        goal_id: String,
        #[arg(long)]
        amount: f64,
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a recorded contribution
    Unsave { record_id: String },
    /// Evaluate progress for ad-hoc numbers without contacting the backend
    Evaluate {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        target: f64,
        #[arg(long, allow_hyphen_values = true)]
        remaining_days: i64,
        /// Full length of the goal window, if known
        #[arg(long)]
        total_days: Option<i64>,
    },
}

#[derive(Args)]
pub struct GoalArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub target: f64,
    #[arg(long, default_value_t = 0.0)]
    pub current: f64,
    #[arg(long)]
    pub deadline: Option<NaiveDate>,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub description: Option<String>,
}

impl From<GoalArgs> for NewGoal {
    fn from(args: GoalArgs) -> Self {
        NewGoal {
            name: args.name,
            description: args.description,
            target_amount: args.target,
            current_amount: args.current,
            deadline: args.deadline,
            start_date: args.start_date,
        }
    }
}

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// List transactions
    List {
        /// Month as YYYY-MM
        #[arg(long)]
        month: Option<ReportPeriod>,
        #[arg(long = "type")]
        transaction_type: Option<TransactionType>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Add a transaction
    Add {
        #[arg(long)]
        amount: f64,
        #[arg(long = "type")]
        transaction_type: TransactionType,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a transaction
    Delete { id: String },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
pub enum RecurringCommand {
    /// List recurring transactions
    List {
        /// Only show what falls due within this many days
        #[arg(long)]
        upcoming: Option<u32>,
    },
    /// Schedule a recurring transaction
    Add {
        #[arg(long)]
        amount: f64,
        #[arg(long = "type")]
        transaction_type: TransactionType,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        frequency: Frequency,
        /// Defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Pause a recurring transaction
    Pause { id: String },
    /// Resume a paused recurring transaction
    Resume { id: String },
    /// Delete a recurring transaction
    Delete { id: String },
    /// Validate a schedule and preview its dates without contacting the backend
    Check {
        #[arg(long)]
        frequency: Frequency,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Number of dates to preview
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users
    List,
    /// User counts
    Stats,
    /// Activate a user
    Activate { id: String },
    /// Deactivate a user
    Deactivate { id: String },
    /// Delete a user
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum AdminsCommand {
    /// List administrators
    List,
    /// Add an administrator
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        super_admin: bool,
    },
    /// Remove an administrator
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Income and expenses for one month
    Monthly {
        /// Month as YYYY-MM, defaults to the current month
        period: Option<ReportPeriod>,
        /// Also compare with the previous month
        #[arg(long)]
        compare: bool,
    },
}

impl Commands {
    /// Commands that never touch the backend.
    pub fn is_offline(&self) -> bool {
        matches!(
            self,
            Commands::Goals(GoalsCommand::Evaluate { .. })
                | Commands::Recurring(RecurringCommand::Check { .. })
        )
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn run_offline(command: Commands, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Goals(GoalsCommand::Evaluate {
            current,
            target,
            remaining_days,
            total_days,
        }) => {
            if !current.is_finite() || !target.is_finite() {
                anyhow::bail!("amounts must be finite numbers");
            }
            let input = GoalProgressInput::new(current, target, remaining_days);
            let input = match total_days {
                Some(total) => input.with_total_days(total),
                None => input,
            };
            let result = evaluate(&input);
            if json {
                return render::print_json(&result);
            }
            println!("{}", render::status_line(&result));
            if let Some(daily) = required_daily_saving(&input) {
                println!("Needed per day: {}", render::money(daily));
            }
        }
        Commands::Recurring(RecurringCommand::Check {
            frequency,
            start,
            end,
            count,
        }) => {
            validate_recurring_window(start, end, frequency, today())?;
            let schedule = RecurringSchedule {
                start_date: start,
                end_date: end,
                frequency,
            };
            let dates: Vec<NaiveDate> = std::iter::successors(Some(start), |date| {
                schedule.next_occurrence(date.succ_opt()?)
            })
            .take(count)
            .collect();
            if json {
                return render::print_json(&dates);
            }
            println!("Schedule is valid. Next {} dates:", dates.len());
            for date in dates {
                println!("  {}", date);
            }
        }
        _ => anyhow::bail!("command needs the SpendSmart backend"),
    }
    Ok(())
}

pub async fn run(command: Commands, json: bool, services: &AppServices) -> anyhow::Result<()> {
    match command {
        Commands::Goals(cmd) => run_goals(cmd, json, services).await,
        Commands::Transactions(cmd) => run_transactions(cmd, json, services).await,
        Commands::Recurring(cmd) => run_recurring(cmd, json, services).await,
        Commands::Users(cmd) => run_users(cmd, json, services).await,
        Commands::Admins(cmd) => run_admins(cmd, json, services).await,
        Commands::Report(ReportCommand::Monthly { period, compare }) => {
            let period = match period {
                Some(period) => period,
                None => ReportPeriod::containing(today())?,
            };
            let service = &services.report_service;
            if compare {
                let (current, previous) = service.compare_with_previous(period).await?;
                if json {
                    return render::print_json(&[current, previous]);
                }
                print_lines(render::monthly_report(&current));
                println!("{}", render::report_change(&current, &previous));
            } else {
                let report = service.get_monthly_report(period).await?;
                if json {
                    return render::print_json(&report);
                }
                print_lines(render::monthly_report(&report));
            }
            Ok(())
        }
        Commands::Dashboard => {
            let summary = services.report_service.get_dashboard_summary().await?;
            if json {
                return render::print_json(&summary);
            }
            print_lines(render::dashboard(&summary));
            Ok(())
        }
    }
}

async fn run_goals(cmd: GoalsCommand, json: bool, services: &AppServices) -> anyhow::Result<()> {
    let service = &services.goal_service;
    match cmd {
        GoalsCommand::List => {
            let goals = service.get_goals_with_progress(today()).await?;
            if json {
                return render::print_json(&goals);
            }
            println!("Goals ({})", goals.len());
            print_lines(goals.iter().map(render::goal_row));
        }
        GoalsCommand::Show { id } => {
            let detail = service
                .get_goal_detail(&id, today())
                .await
                .with_context(|| format!("Could not load goal {}", id))?;
            if json {
                return render::print_json(&detail);
            }
            print_lines(render::goal_detail(&detail));
        }
        GoalsCommand::Create(args) => {
            let goal = service.create_goal(args.into()).await?;
            info!("Created goal {}", goal.id);
            if json {
                return render::print_json(&goal);
            }
            println!("Created goal {} - {}", goal.id, goal.name);
        }
        GoalsCommand::Update { id, goal } => {
            let goal = service.update_goal(&id, goal.into()).await?;
            if json {
                return render::print_json(&goal);
            }
            println!("Updated goal {} - {}", goal.id, goal.name);
        }
        GoalsCommand::Delete { id } => {
            service.delete_goal(&id).await?;
            println!("Deleted goal {}", id);
        }
        GoalsCommand::Save {
            goal_id,
            amount,
            date,
            note,
        } => {
            let record = service
                .add_saving_record(
                    &goal_id,
                    NewSavingRecord {
                        amount,
                        date: date.unwrap_or_else(today),
                        note,
                    },
                )
                .await?;
            if json {
                return render::print_json(&record);
            }
            println!(
                "Saved {} toward goal {} on {}",
                render::money(record.amount),
                record.goal_id,
                record.date
            );
        }
        GoalsCommand::Unsave { record_id } => {
            service.delete_saving_record(&record_id).await?;
            println!("Deleted saving record {}", record_id);
        }
        GoalsCommand::Evaluate { .. } => return run_offline(Commands::Goals(cmd), json),
    }
    Ok(())
}

async fn run_transactions(
    cmd: TransactionsCommand,
    json: bool,
    services: &AppServices,
) -> anyhow::Result<()> {
    let service = &services.transaction_service;
    match cmd {
        TransactionsCommand::List {
            month,
            transaction_type,
            category,
        } => {
            let filter = TransactionFilter {
                month,
                transaction_type,
                category_id: category,
            };
            let transactions = service.get_transactions(filter).await?;
            if json {
                return render::print_json(&transactions);
            }
            let net: f64 = transactions.iter().map(|t| t.signed_amount()).sum();
            print_lines(transactions.iter().map(render::transaction_row));
            println!("{} transactions, net {}", transactions.len(), render::money(net));
        }
        TransactionsCommand::Add {
            amount,
            transaction_type,
            category,
            description,
            date,
        } => {
            let transaction = service
                .create_transaction(NewTransaction {
                    amount,
                    transaction_type,
                    category_id: category,
                    description,
                    date: date.unwrap_or_else(today),
                })
                .await?;
            if json {
                return render::print_json(&transaction);
            }
            println!("Added {}", render::transaction_row(&transaction));
        }
        TransactionsCommand::Delete { id } => {
            service.delete_transaction(&id).await?;
            println!("Deleted transaction {}", id);
        }
        TransactionsCommand::Categories => {
            let categories = service.get_categories().await?;
            if json {
                return render::print_json(&categories);
            }
            print_lines(categories.iter().map(render::category_row));
        }
    }
    Ok(())
}

async fn run_recurring(
    cmd: RecurringCommand,
    json: bool,
    services: &AppServices,
) -> anyhow::Result<()> {
    let service = &services.transaction_service;
    let today = today();
    match cmd {
        RecurringCommand::List { upcoming: Some(days) } => {
            let upcoming = service.get_upcoming(today, days).await?;
            if json {
                return render::print_json(&upcoming);
            }
            println!("Due within {} days ({})", days, upcoming.len());
            print_lines(upcoming.iter().map(render::upcoming_row));
        }
        RecurringCommand::List { upcoming: None } => {
            let recurring = service.get_recurring_transactions().await?;
            if json {
                return render::print_json(&recurring);
            }
            print_lines(recurring.iter().map(|r| render::recurring_row(r, today)));
        }
        RecurringCommand::Add {
            amount,
            transaction_type,
            category,
            description,
            frequency,
            start,
            end,
        } => {
            let new_recurring = NewRecurringTransaction {
                amount,
                transaction_type,
                category_id: category,
                description,
                frequency,
                start_date: start.unwrap_or(today),
                end_date: end,
                is_active: true,
            };
            let created = service
                .create_recurring_transaction(new_recurring, today)
                .await?;
            if json {
                return render::print_json(&created);
            }
            println!("Scheduled {}", render::recurring_row(&created, today));
        }
        RecurringCommand::Pause { id } => set_active(services, &id, false, json, today).await?,
        RecurringCommand::Resume { id } => set_active(services, &id, true, json, today).await?,
        RecurringCommand::Delete { id } => {
            service.delete_recurring_transaction(&id).await?;
            println!("Deleted recurring transaction {}", id);
        }
        RecurringCommand::Check { .. } => return run_offline(Commands::Recurring(cmd), json),
    }
    Ok(())
}

async fn set_active(
    services: &AppServices,
    id: &str,
    is_active: bool,
    json: bool,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let updated = services
        .transaction_service
        .set_recurring_active(id, is_active)
        .await?;
    if json {
        return render::print_json(&updated);
    }
    println!("{}", render::recurring_row(&updated, today));
    Ok(())
}

async fn run_users(cmd: UsersCommand, json: bool, services: &AppServices) -> anyhow::Result<()> {
    let service = &services.admin_service;
    match cmd {
        UsersCommand::List => {
            let users = service.get_users().await?;
            if json {
                return render::print_json(&users);
            }
            print_lines(users.iter().map(render::user_row));
        }
        UsersCommand::Stats => {
            let stats = service.get_user_stats().await?;
            if json {
                return render::print_json(&stats);
            }
            print_lines(render::user_stats(&stats));
        }
        UsersCommand::Activate { id } => {
            let user = service.set_user_active(&id, true).await?;
            if json {
                return render::print_json(&user);
            }
            println!("{}", render::user_row(&user));
        }
        UsersCommand::Deactivate { id } => {
            let user = service.set_user_active(&id, false).await?;
            if json {
                return render::print_json(&user);
            }
            println!("{}", render::user_row(&user));
        }
        UsersCommand::Delete { id } => {
            service.delete_user(&id).await?;
            println!("Deleted user {}", id);
        }
    }
    Ok(())
}

async fn run_admins(cmd: AdminsCommand, json: bool, services: &AppServices) -> anyhow::Result<()> {
    let service = &services.admin_service;
    match cmd {
        AdminsCommand::List => {
            let admins = service.get_admins().await?;
            if json {
                return render::print_json(&admins);
            }
            print_lines(admins.iter().map(render::admin_row));
        }
        AdminsCommand::Add {
            username,
            email,
            super_admin,
        } => {
            let role = if super_admin {
                AdminRole::SuperAdmin
            } else {
                AdminRole::Admin
            };
            let admin = service
                .create_admin(NewAdmin {
                    username,
                    email,
                    role,
                })
                .await?;
            if json {
                return render::print_json(&admin);
            }
            println!("Added {}", render::admin_row(&admin));
        }
        AdminsCommand::Delete { id } => {
            service.delete_admin(&id).await?;
            println!("Deleted admin {}", id);
        }
    }
    Ok(())
}

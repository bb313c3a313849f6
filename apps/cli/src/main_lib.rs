use std::sync::Arc;

use spendsmart_client::SpendSmartApiClient;
use spendsmart_core::{
    admin::{AdminService, AdminServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{self, Cli};
use crate::config::Config;

pub struct AppServices {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub admin_service: Arc<dyn AdminServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
}

/// Logs go to stderr so command output on stdout stays pipeable.
pub fn init_tracing() {
    let log_format = std::env::var("SPENDSMART_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_services(config: &Config) -> anyhow::Result<AppServices> {
    let client = Arc::new(SpendSmartApiClient::new(config.client_config())?);
    tracing::debug!("SpendSmart API at {}", client.base_url());

    Ok(AppServices {
        goal_service: Arc::new(GoalService::new(client.clone())),
        transaction_service: Arc::new(TransactionService::new(client.clone())),
        admin_service: Arc::new(AdminService::new(client.clone())),
        report_service: Arc::new(ReportService::new(client)),
    })
}

/// Runs a parsed command line. Configuration is only loaded for commands that
/// talk to the backend.
pub async fn run_cli<F>(cli: Cli, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> anyhow::Result<Config>,
{
    if cli.command.is_offline() {
        return commands::run_offline(cli.command, cli.json);
    }

    let config = load_config()?;
    let services = build_services(&config)?;
    commands::run(cli.command, cli.json, &services).await
}

mod commands;
mod config;
mod main_lib;
mod render;

use clap::Parser;
use commands::Cli;
use config::Config;
use main_lib::{init_tracing, run_cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();
    run_cli(cli, Config::from_env).await
}

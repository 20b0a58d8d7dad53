use anyhow::Context;
use clap::Parser;
use saas_admin_api::cli::{self, Cli, Command};
use saas_admin_api::infrastructure::logging::init_logging;
use saas_admin_api::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Serve => cli::serve::run(config).await,
        Command::PromoteSuperAdmin(args) => cli::promote::run(config, args).await,
    }
}

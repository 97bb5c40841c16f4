mod bot_env;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vbwatch_bot::{BotClient, Poller};
use vbwatch_core::format::plain_table;
use vbwatch_core::AppConfig;
use vbwatch_scraper::MissionsClient;
use vbwatch_store::{CacheStore, MissionService};

#[derive(Debug, Parser)]
#[command(name = "vbwatch")]
#[command(about = "Daily Fortnite V-Bucks mission report and Telegram bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print today's V-Bucks missions as a table on stdout.
    Report,
    /// Run the long-polling Telegram bot.
    Bot,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = vbwatch_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report => report(&config).await,
        Commands::Bot => bot(&config).await,
    }
}

/// Batch mode: any upstream fetch failure is fatal and exits non-zero.
async fn report(config: &AppConfig) -> anyhow::Result<()> {
    let service = build_service(config)?;
    let missions = service.missions().await?;
    print!("{}", plain_table(&missions));
    Ok(())
}

async fn bot(config: &AppConfig) -> anyhow::Result<()> {
    let token = bot_env::require_bot_token(config, Path::new(".env"))?;
    let service = build_service(config)?;
    let client = BotClient::new(&token, config.poll_timeout_secs)?;
    Poller::new(client, service, config.poll_timeout_secs)
        .run()
        .await?;
    Ok(())
}

fn build_service(config: &AppConfig) -> anyhow::Result<MissionService> {
    let client = MissionsClient::new(
        config.http_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;
    Ok(MissionService::new(
        CacheStore::new(config.cache_path.clone()),
        client,
        config.missions_url.clone(),
    ))
}

use clap::{Parser, Subcommand};
use serenity::Client;
use std::process::ExitCode;
use std::sync::Arc;

use rolebot::application::messaging::{DeletionScheduler, MessageDispatcher};
use rolebot::application::services::{CommandService, ConfigService};
use rolebot::domain::traits::ConfigStore;
use rolebot::infrastructure::adapters::DiscordHandler;
use rolebot::infrastructure::config::Config;
use rolebot::infrastructure::storage::JsonConfigStore;

#[derive(Parser)]
#[command(name = "rolebot")]
#[command(about = "Self-service cosmetic role bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Print a default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => run_bot(cli.config, cli.token),
        Commands::Version => {
            println!("rolebot v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

fn run_bot(config_path: String, token_override: Option<String>) -> ExitCode {
    let store = Arc::new(JsonConfigStore::new(&config_path));

    let mut config = match store.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %config_path, "{}", e);
            return ExitCode::FAILURE;
        }
    };
    config.apply_env();
    if let Some(token) = token_override {
        config.token = token;
    }
    if let Err(e) = config.validate() {
        tracing::error!(path = %config_path, "{}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!(
        prefix = %config.prefix,
        channels = config.bot_channels.len(),
        allowed_roles = config.roles.allowed.len(),
        "Config loaded"
    );

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(serve(config, store)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: Config, store: Arc<JsonConfigStore>) -> Result<(), serenity::Error> {
    let token = config.token.clone();
    let prefix = config.prefix.clone();

    let config = Arc::new(ConfigService::new(config, store));
    let commands = CommandService::with_defaults(prefix, Arc::clone(&config));
    let dispatcher = Arc::new(MessageDispatcher::new(config, commands, DeletionScheduler::default()));

    let mut client = Client::builder(&token, DiscordHandler::intents())
        .event_handler(DiscordHandler::new(dispatcher))
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Bot is now running, press Ctrl+C to exit.");
    client.start().await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

fn init_config() -> ExitCode {
    match Config::default().to_json() {
        Ok(json) => {
            println!("{}", json);
            println!("\nSave this to config.json and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render config: {}", e);
            ExitCode::FAILURE
        }
    }
}

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod output;
pub mod profile;
pub mod state;
pub mod types;

use self::controller::AppController;
use self::events::load_providers;
use self::events::text_input::translate_text;
use self::state::AppState;


#[derive(Parser)]
#[command(name = "verba", version, about = "Translate text through a pluggable set of providers")]
struct Cli {
    /// JSON config file, otherwise VERBA_* environment variables are used
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a single text
    Translate(TranslateArgs),
    /// List available providers
    Providers,
    /// Translate every line read from stdin, `/retry` repeats the last one
    Watch,
}

#[derive(Args)]
struct TranslateArgs {
    text: String,
    #[arg(long)]
    from: Option<String>,
    #[arg(long)]
    to: Option<String>,
    /// auto, translate or explain
    #[arg(long)]
    mode: Option<String>,
    /// fast, optimal or thinking
    #[arg(long)]
    quality: Option<String>,
    #[arg(long)]
    provider: Option<String>,
    /// Include phonetic (IPA) output
    #[arg(long)]
    ipa: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = profile::load_config(cli.config.as_deref())?;
    init_tracing(&config.log_level);

    let state = Arc::new(AppState::new(config)?);

    match cli.command {
        Command::Translate(args) => translate(state, args).await,
        Command::Providers => providers(state).await,
        Command::Watch => watch(state).await,
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Token cancelled on Ctrl+C
fn ctrl_c_token() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown requested"),
            Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
        }
        token.cancel();
    });
    cancel
}

async fn translate(state: Arc<AppState>, args: TranslateArgs) -> anyhow::Result<()> {
    let mut settings = state.config.translator.clone();
    if let Some(from) = args.from {
        settings.source_lang = from;
    }
    if let Some(to) = args.to {
        settings.target_lang = to;
    }
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(quality) = args.quality {
        settings.quality = quality;
    }
    if let Some(provider) = args.provider {
        settings.provider = provider;
    }
    settings.ipa |= args.ipa;

    let providers = load_providers(&*state.service, &settings).await;
    let cancel = ctrl_c_token();

    match translate_text(&args.text, &settings, &providers, &*state.service, &cancel).await {
        Ok(translation) => {
            println!("{translation}");
            Ok(())
        }
        Err(e) => anyhow::bail!("[{}] {e}", e.category()),
    }
}

async fn providers(state: Arc<AppState>) -> anyhow::Result<()> {
    match state.service.providers().await {
        Ok(providers) => {
            for provider in providers {
                println!("{:<12} {}", provider.id, provider.display_name);
            }
            Ok(())
        }
        Err(e) => anyhow::bail!("[API] {e}"),
    }
}

async fn watch(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state, CancellationToken::new());
    let mut tasks = controller.spawn_tasks();

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
                tasks.shutdown().await;
                break;
            }
            result = tasks.join_next() => match result {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited: {e}");
                    controller.shutdown();
                    tasks.shutdown().await;
                    return Err(e);
                }
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => break,
            }
        }
    }

    Ok(())
}

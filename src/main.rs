use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use verivoice::{
    create_router, AppState, Config, DetectionClient, DisplayMode, HistoryStore, Language,
    SelectedFile, ViewController,
};

#[derive(Parser)]
#[command(name = "verivoice", about = "Check whether a voice sample is human or synthetic")]
struct Cli {
    /// Config file (extension optional)
    #[arg(long, default_value = "config/verivoice")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan one or more MP3 files, one after another
    Scan {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Spoken language of the samples
        #[arg(short, long)]
        language: Option<Language>,

        /// Override the configured access key
        #[arg(long)]
        api_key: Option<String>,

        /// Print the scan archive when done
        #[arg(long)]
        archive: bool,
    },
    /// Serve the scanner over HTTP
    Serve {
        #[arg(long)]
        bind: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
    /// List supported languages
    Languages,
}

fn build_controller(cfg: &Config, api_key: Option<String>) -> ViewController {
    let client = DetectionClient::new(&cfg.detection.base_url);
    info!("Detection endpoint: {}", client.url());

    ViewController::new(
        Arc::new(client),
        api_key.unwrap_or_else(|| cfg.detection.api_key.clone()),
    )
    .with_language(cfg.scanner.default_language)
    .with_history(HistoryStore::with_limit(cfg.scanner.history_limit))
}

async fn scan(
    cfg: &Config,
    files: Vec<PathBuf>,
    language: Option<Language>,
    api_key: Option<String>,
    archive: bool,
) -> Result<()> {
    let mut controller = build_controller(cfg, api_key);
    if let Some(language) = language {
        controller.select_language(language);
    }

    for path in files {
        if let Err(e) = controller.select_file(SelectedFile::from_path(&path)) {
            warn!("Skipping {}: {}", path.display(), e);
            continue;
        }
        controller.analyze().await?;
        println!("{}", controller.render());
    }

    if archive {
        controller.set_display_mode(DisplayMode::Archive);
        println!("{}", controller.render());
    }

    Ok(())
}

async fn serve(cfg: &Config, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| cfg.service.http.bind.clone());
    let port = port.unwrap_or(cfg.service.http.port);
    let addr = format!("{}:{}", bind, port);

    let state = AppState::new(build_controller(cfg, None));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Scan {
            files,
            language,
            api_key,
            archive,
        } => scan(&cfg, files, language, api_key, archive).await,
        Command::Serve { bind, port } => serve(&cfg, bind, port).await,
        Command::Languages => {
            for language in Language::ALL {
                println!("{}", language);
            }
            Ok(())
        }
    }
}

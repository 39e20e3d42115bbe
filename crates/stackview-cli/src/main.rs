//! stackview - Compose stack service viewer CLI

mod commands;
mod selector;

use anyhow::Context as _;
use clap::{Args, CommandFactory, Parser, Subcommand};
use commands::Context;
use stackview_config::GlobalConfig;
use stackview_core::{FileStackSource, StackKey, StackSource, StackStore, StaticStackSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "stackview")]
#[command(author, version, about = "Compose Stack Service Viewer", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding <project>/<env>/<stack>.json snapshots
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<String>,

    /// Use the built-in demo stack instead of snapshot files
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Identifies a stack
#[derive(Args)]
struct StackArgs {
    /// Project slug
    project: String,
    /// Environment name
    env: String,
    /// Stack slug
    stack: String,
}

impl StackArgs {
    fn key(&self) -> StackKey {
        StackKey::new(&self.project, &self.env, &self.stack)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print a service's detail page (the stack overview if the service is unknown)
    Show {
        #[command(flatten)]
        stack: StackArgs,
        /// Service name (interactive selection if not specified)
        service: Option<String>,
        /// Print environment values instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Print a service's environment as a .env file
    Env {
        #[command(flatten)]
        stack: StackArgs,
        /// Service name
        service: String,
    },

    /// Print a service's network and global aliases
    Aliases {
        #[command(flatten)]
        stack: StackArgs,
        /// Service name
        service: String,
        /// Include the internal domain
        #[arg(long)]
        full: bool,
    },

    /// Browse a stack interactively
    Tui {
        #[command(flatten)]
        stack: StackArgs,
        /// Service to open first
        service: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => GlobalConfig::config_path()?,
    };
    let mut config = GlobalConfig::load_from(&config_path)?;
    if let Some(dir) = &cli.data_dir {
        config.source.data_dir = Some(dir.clone());
    }

    let Some(command) = cli.command else {
        if cli.demo {
            stackview_tui::run_demo(config).await?;
        } else {
            Cli::command().print_help()?;
        }
        return Ok(());
    };

    if let Commands::Config = command {
        return commands::config(&config, &config_path);
    }

    let source: Arc<dyn StackSource> = if cli.demo {
        Arc::new(
            StaticStackSource::new()
                .with_stack(stackview_tui::demo_key(), stackview_tui::demo_stack()),
        )
    } else {
        let dir = config
            .stacks_dir()
            .context("Could not determine the stacks directory")?;
        tracing::debug!("Reading stack snapshots from {:?}", dir);
        Arc::new(FileStackSource::new(dir))
    };

    let ctx = Context {
        store: Arc::new(StackStore::new(source)),
        config,
    };

    match command {
        Commands::Show {
            stack,
            service,
            reveal,
        } => commands::show(&ctx, stack.key(), service, reveal).await,
        Commands::Env { stack, service } => commands::env(&ctx, stack.key(), service).await,
        Commands::Aliases {
            stack,
            service,
            full,
        } => commands::aliases(&ctx, stack.key(), service, full).await,
        Commands::Tui { stack, service } => commands::tui(ctx, stack.key(), service).await,
        Commands::Config => Ok(()),
    }
}

//! Grocer CLI - Terminal client for the grocery price-comparison service.
//!
//! Commands:
//! - `grocer home` - Trending deals, or a search from the landing page
//! - `grocer deals` - Top deals, paged locally
//! - `grocer products` - All products, free-text search, or structured filters
//! - `grocer stores` - Browse one store's products page by page
//! - `grocer open` - Open a route path such as `/search?query=milk`
//! - `grocer config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, DealsArgs, HomeArgs, OpenArgs, ProductsArgs, StoresArgs};

/// Grocer CLI - Compare grocery prices across stores
#[derive(Parser)]
#[command(name = "grocer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show trending deals or search from the landing page
    Home(HomeArgs),

    /// List top deals
    Deals(DealsArgs),

    /// Browse, search and filter products
    Products(ProductsArgs),

    /// Browse products by store
    Stores(StoresArgs),

    /// Open a route path
    Open(OpenArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Logs go to stderr so `--json` output stays parseable. `RUST_LOG` wins
/// over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Home(args) => commands::home::run(args, &ctx).await,
        Commands::Deals(args) => commands::deals::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Stores(args) => commands::stores::run(args, &ctx).await,
        Commands::Open(args) => commands::open::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

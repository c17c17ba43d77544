mod commands;
mod feed;
mod render;
mod theme;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use showbill_core::GlobalConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "showbill")]
#[command(about = "Browse upcoming shows from a venue listing feed")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bare `showbill` is the listing.
    #[command(flatten)]
    shows: ShowsArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List shows grouped by date (the default)
    Shows(ShowsArgs),

    /// List the venues present in the feed
    Venues {
        /// Fetch the feed from this URL instead of the configured one
        #[arg(long)]
        url: Option<String>,

        /// Include venues that only have past shows
        #[arg(long)]
        past: bool,
    },

    /// Print the resolved configuration
    Config,
}

#[derive(Args)]
struct ShowsArgs {
    /// Only list shows at this venue (repeat for several)
    #[arg(short, long = "venue")]
    venue: Vec<String>,

    /// Shows on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Shows up to this date inclusive (YYYY-MM-DD, needs --from)
    #[arg(long)]
    to: Option<String>,

    /// Include shows that already happened
    #[arg(long)]
    past: bool,

    /// Fetch the feed from this URL instead of the configured one
    #[arg(long)]
    url: Option<String>,

    /// Emit the grouped listing as JSON
    #[arg(long)]
    json: bool,

    /// Render with the light palette
    #[arg(long, conflicts_with = "dark")]
    light: bool,

    /// Render with the dark palette
    #[arg(long)]
    dark: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GlobalConfig::load()?;

    match cli.command {
        Some(Commands::Shows(args)) => commands::shows::run(&config, args).await,
        Some(Commands::Venues { url, past }) => {
            commands::venues::run(&config, url.as_deref(), past).await
        }
        Some(Commands::Config) => commands::config::run(&config),
        None => commands::shows::run(&config, cli.shows).await,
    }
}

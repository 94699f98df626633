use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod profile;
mod quiz;
mod report;
mod sample;
mod state;

use self::state::AppState;

#[derive(Parser, Debug)]
#[command(
    name = "honyaku",
    author,
    version,
    about = "English-to-Japanese translation quiz with graded feedback",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration profile
    #[arg(global = true, short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(global = true, long, default_value_t = false)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add the built-in sample sentence pairs to the store
    Seed,

    /// Answer random questions interactively
    Quiz {
        /// Print the scoring trace after each answer
        #[arg(long)]
        details: bool,

        /// Seed for question order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a single translation
    Score {
        /// English sentence being translated
        #[arg(short, long)]
        english: String,

        /// Japanese translation to score
        #[arg(short, long)]
        answer: String,

        /// Reference translation; looked up in the store when omitted
        #[arg(short, long)]
        reference: Option<String>,

        /// Print the scoring trace
        #[arg(long)]
        details: bool,
    },

    /// Nearest stored documents to a query
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = 5)]
        n_results: usize,
    },

    /// Delete every stored document
    Reset,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = profile::load_config(cli.config.as_deref())?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Seed => commands::seed(state).await,
        Commands::Quiz { details, seed } => quiz::run(state, details, seed).await,
        Commands::Score {
            english,
            answer,
            reference,
            details,
        } => commands::score(&state, &english, &answer, reference, details).await,
        Commands::Search { query, n_results } => commands::search(&state, &query, n_results).await,
        Commands::Reset => commands::reset(state),
    }
}

use anyhow::Result;
use cadence::commands::{analyze, complete_step, context, init_week, next, status, transcript, trends};
use cadence::fs::DataDir;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cadence")]
#[command(about = "Weekly content pipeline CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show cycle progress and the current week's pipeline
    Status,

    /// Initialize the current week's directory (idempotent)
    InitWeek,

    /// Close the current week and advance to the next one
    Next,

    /// Mark a pipeline step as complete for the current week
    CompleteStep {
        /// Step name (e.g. transcript_extracted)
        step: String,
    },

    /// Fetch the week's source transcript
    Transcript {
        /// Video URL or bare video id
        #[arg(long)]
        url: String,

        /// Preferred transcript language (overrides config)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Snapshot the configured brand pages
    Context,

    /// Research market trends for the week
    Trends {
        /// Topic to research (can be repeated; defaults to configured topics)
        #[arg(long = "topic")]
        topics: Vec<String>,
    },

    /// Generate the chapter question set for the notebook agent
    Analyze {
        /// Extra question to include (can be repeated)
        #[arg(long = "question")]
        questions: Vec<String>,

        /// Record the step as complete after answers have been saved
        #[arg(long)]
        record: bool,
    },
}

/// Exit code for a CLI parse failure. A missing required argument is a plain
/// usage error reported with code 1; help/version keep clap's code 0.
fn parse_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::MissingRequiredArgument => 1,
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 2,
    }
}

fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(parse_exit_code(err.kind()));
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_cli();
    let data = DataDir::new(".");

    match cli.command {
        Commands::Status => status::execute(&data),
        Commands::InitWeek => init_week::execute(&data),
        Commands::Next => next::execute(&data),
        Commands::CompleteStep { step } => complete_step::execute(&data, &step),
        Commands::Transcript { url, lang } => transcript::execute(&data, &url, lang),
        Commands::Context => context::execute(&data),
        Commands::Trends { topics } => trends::execute(&data, topics),
        Commands::Analyze { questions, record } => analyze::execute(&data, questions, record),
    }
}

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lumbapp", version, about = "LumbApp CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// First-run setup: fill in the profile and finish setup
    Setup(commands::setup::SetupArgs),
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Show the daily visit streak
    Streak {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Emergency quick-dial numbers
    Emergency,
    /// Exercises, education, precautions and recommendations
    Content {
        #[command(subcommand)]
        section: commands::content::ContentSection,
        /// Read content from this directory instead of the bundled files
        #[arg(long, global = true)]
        dir: Option<std::path::PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LUMBAPP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(args).await,
        Commands::Profile { action } => commands::profile::run(action).await,
        Commands::Streak { json } => commands::streak::run(json).await,
        Commands::Emergency => commands::emergency::run(),
        Commands::Content { section, dir } => commands::content::run(section, dir.as_deref()),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "lumbapp", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use moodshift_core::device::DeviceInfo;
use moodshift_core::tags::{Mood, SessionLength};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "moodshift")]
#[command(version, about = "MoodShift - pick a game for how you feel and how long you have", long_about = None)]
struct Cli {
    /// Configuration and data directory (defaults to MOODSHIFT_HOME or the platform config dir)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Device to recommend for
    #[arg(long, global = true, value_enum)]
    platform: Option<PlatformArg>,

    /// Derive the device from a browser user-agent string instead of --platform
    #[arg(long, global = true, conflicts_with = "platform")]
    user_agent: Option<String>,

    /// Keep history in memory only for this run
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a game for a mood and session length
    Recommend {
        #[arg(long)]
        mood: Mood,
        /// short (15 min), medium (30 min) or long (60+ min)
        #[arg(long)]
        time: SessionLength,
        /// Skip ahead this many times before printing the final pick
        #[arg(long, default_value_t = 0)]
        next: usize,
        /// Open the final pick in the browser or app store
        #[arg(long)]
        launch: bool,
    },
    /// Show recent recommendations, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show weekly break count and visit status
    Stats,
    /// Interactive session (default)
    Shell,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Web,
    Android,
    Ios,
}

impl Cli {
    fn device(&self) -> DeviceInfo {
        if let Some(user_agent) = &self.user_agent {
            return DeviceInfo::from_user_agent(user_agent);
        }
        match self.platform {
            Some(PlatformArg::Android) => DeviceInfo::mobile(false),
            Some(PlatformArg::Ios) => DeviceInfo::mobile(true),
            Some(PlatformArg::Web) | None => DeviceInfo::web(),
        }
    }
}

fn init_tracing(verbose: bool, default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = commands::Settings::resolve(cli.home.as_deref(), cli.ephemeral)?;
    init_tracing(cli.verbose, &settings.config.logging.level);
    let app = commands::App::build(settings, cli.device()).await?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Recommend {
            mood,
            time,
            next,
            launch,
        } => commands::recommend::run(&app, mood, time, next, launch).await,
        Commands::History { limit } => commands::history::run(&app, limit).await,
        Commands::Stats => commands::history::stats(&app).await,
        Commands::Shell => commands::shell::run(&app).await,
    }
}

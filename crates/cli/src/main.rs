mod create_command;
mod sync_commands;

use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "build-skill",
    about = "Scaffold AI agent skills quickly",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    // Repository creation arguments (used when no subcommand is provided)
    #[command(flatten)]
    create: create_command::CreateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate manifest, plugin descriptors, index and README from skills/.
    Sync {
        /// Repository root.
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Add a new skill to an existing repository and sync.
    Add {
        /// Name of the skill (normalized to lowercase with hyphens).
        skill_name: String,
        /// Brief description of what the skill does.
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        /// Repository root.
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "build-skill starting");

    let config = build_skill_config::discover_and_load();

    match cli.command {
        None => create_command::handle_create(cli.create, config).await,
        Some(Commands::Sync { root }) => sync_commands::handle_sync(root, &config.sync),
        Some(Commands::Add {
            skill_name,
            description,
            root,
        }) => sync_commands::handle_add(root, &skill_name, &description, &config.sync),
    }
}

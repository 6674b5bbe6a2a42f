mod api;
mod commands;
mod config;
mod error;
mod schedule;
mod tui;

use api::ApiClient;
use clap::{CommandFactory, Parser, Subcommand};
use commands::config::ConfigCommands;
use commands::jobs::JobsCommands;
use config::load_config;
use error::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tui::PreferenceStore;

#[derive(Parser)]
#[command(name = "workshop")]
#[command(about = "Workshop manager — technician load and schedule console", long_about = None)]
struct Cli {
    /// Base URL of the workshop API (overrides the config file)
    #[arg(long, global = true, env = "WORKSHOP_API_URL")]
    api_url: Option<String>,
    /// Bearer token for the API (overrides the config file)
    #[arg(long, global = true, env = "WORKSHOP_API_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    Dashboard,
    /// Print the technician schedule board
    Schedule {
        /// Width of the timeline track in columns
        #[arg(long, default_value_t = 78, value_parser = clap::value_parser!(u16).range(14..=400))]
        width: u16,
    },
    /// List technicians with utilization and availability
    Technicians,
    /// Manage job cards
    Jobs {
        #[command(subcommand)]
        cmd: JobsCommands,
    },
    /// List active alerts
    Alerts,
    /// Show KPI overview, trends and technician performance
    Kpi,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

/// Set up tracing. The dashboard owns the terminal, so it logs to a file
/// in the data directory; everything else logs to stderr.
fn init_logging(interactive: bool) -> Option<WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_env("WORKSHOP_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if !interactive {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return None;
    }

    let log_dir = config::data_dir()
        .ok()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok());
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(&dir, "workshop.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            subscriber
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        None => {
            subscriber.with(fmt::layer().with_writer(std::io::sink)).init();
            None
        }
    }
}

fn client_from(api_url: Option<String>, token: Option<String>) -> Result<ApiClient> {
    let cfg = load_config()?.with_overrides(api_url, token);
    ApiClient::new(&cfg)
}

/// Preferences are optional; the dashboard falls back to defaults.
fn open_preferences() -> Option<PreferenceStore> {
    let path = match config::config_dir() {
        Ok(dir) => dir.join("preferences.db"),
        Err(e) => {
            warn!(error = %e, "no config directory; preferences disabled");
            return None;
        }
    };
    match PreferenceStore::open(&path) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "could not open preferences");
            None
        }
    }
}

async fn run(cli: Cli, command: Commands) -> Result<()> {
    let Cli { api_url, token, .. } = cli;
    match command {
        Commands::Config { cmd } => commands::config::handle(cmd),
        Commands::Dashboard => {
            let client = client_from(api_url, token)?;
            info!(version = env!("CARGO_PKG_VERSION"), "starting dashboard");
            tui::run_tui(client, open_preferences())
        }
        Commands::Schedule { width } => {
            commands::schedule::handle(&client_from(api_url, token)?, width).await
        }
        Commands::Technicians => commands::technicians::handle(&client_from(api_url, token)?).await,
        Commands::Jobs { cmd } => commands::jobs::handle(&client_from(api_url, token)?, cmd).await,
        Commands::Alerts => commands::alerts::handle(&client_from(api_url, token)?).await,
        Commands::Kpi => commands::kpi::handle(&client_from(api_url, token)?).await,
    }
}

#[tokio::main]
async fn main() {
    let mut cli = Cli::parse();

    let Some(command) = cli.command.take() else {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        std::process::exit(0);
    };

    let guard = init_logging(matches!(command, Commands::Dashboard));

    if let Err(e) = run(cli, command).await {
        eprintln!("Error: {}", e);
        drop(guard);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_overrides_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "workshop",
            "schedule",
            "--width",
            "120",
            "--api-url",
            "http://shop/api",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://shop/api"));
        assert!(matches!(cli.command, Some(Commands::Schedule { width: 120 })));
    }

    #[test]
    fn schedule_width_has_a_floor() {
        assert!(Cli::try_parse_from(["workshop", "schedule", "--width", "5"]).is_err());
    }

    #[test]
    fn jobs_assign_takes_an_id() {
        let cli = Cli::try_parse_from(["workshop", "jobs", "assign", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Jobs {
                cmd: JobsCommands::Assign { job_id: 42 }
            })
        ));
    }
}

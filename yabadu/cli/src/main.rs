//! Yabadu CLI - query the Yabadu platform API from the command line

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use yabadu_lib::{ApiClient, ApiError, Configuration, report};

#[derive(Parser)]
#[command(name = "yabadu")]
#[command(about = "Query the Yabadu platform API", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Base URL of the API [default: $YABADU_BASE_PATH]
    #[arg(long, value_name = "URL", global = true)]
    base_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the measurement units the platform accepts
    Units,

    /// List the gender values the platform accepts
    Genders,

    /// List private label applications
    Applications,

    /// Show one private label application
    Application {
        /// The application identifier
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Check service health
    Health,
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,yabadu_lib=info".to_string(),
            2 => "info,yabadu_lib=debug".to_string(),
            _ => "debug,yabadu_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Reads `YABADU_*` variables, with `--base-path` taking precedence.
fn load_configuration(base_path: Option<String>) -> Result<Configuration, ApiError> {
    let config = Configuration::from_lookup(|var| match (var, &base_path) {
        ("YABADU_BASE_PATH", Some(path)) => Some(path.clone()),
        _ => std::env::var(var).ok(),
    })?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<(), ApiError> {
    let config = report::inspect("configuration", load_configuration(cli.base_path))?;
    let client = ApiClient::new(config)?;

    match cli.command {
        Commands::Units => {
            let units = report::inspect(
                "systemUnitsGet",
                client.system().system_units_get().await,
            )?;
            print_json(&units)
        }
        Commands::Genders => {
            let genders = report::inspect(
                "systemGendersGet",
                client.system().system_genders_get().await,
            )?;
            print_json(&genders)
        }
        Commands::Applications => {
            let applications = report::inspect(
                "privateLabelApplicationsGet",
                client.applications().private_label_applications_get().await,
            )?;
            print_json(&applications)
        }
        Commands::Application { id } => {
            let application = report::inspect(
                "privateLabelApplicationGet",
                client
                    .applications()
                    .private_label_application_get(&id)
                    .await,
            )?;
            print_json(&application)
        }
        Commands::Health => {
            let health = report::inspect("healthGet", client.default_api().health_get().await)?;
            print_json(&health)
        }
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    if let Err(e) = run(cli).await {
        eprintln!("Error ({}): {}", e.kind(), e.message());
        std::process::exit(1);
    }
}

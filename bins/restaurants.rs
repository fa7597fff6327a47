use clap::{Parser, Subcommand};
use common::utils::logging::LogTarget;
use dotenvy::dotenv;
use service::errors::ServiceError;
use service::restaurant::Restaurant;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "restaurants")]
#[command(about = "Restaurant directory backed by a JSON data file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every restaurant
    List,
    /// Print one restaurant by id
    Get { id: String },
    /// Store a restaurant (a fresh id is generated unless --id is given)
    Add {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        rating: String,
        #[arg(long, default_value = "active")]
        status: String,
        #[arg(long)]
        cuisine: String,
        #[arg(long)]
        location: String,
        /// Repeat for each menu item, in order
        #[arg(long = "menu")]
        menu: Vec<String>,
    },
}

// stdout is reserved for command output.
fn init_logging(format: &str) {
    common::utils::logging::init_logging(format, LogTarget::Stderr);
    info!(service = "restaurants", event = "logger_init", "tracing subscriber initialized");
}

async fn run(cli: Cli, cfg: configs::AppConfig) -> anyhow::Result<()> {
    let svc = service::runtime::json_file_service(&cfg.storage.data_file).await?;

    let output = match cli.command {
        Commands::List => serde_json::to_string_pretty(&svc.find_all().await?)?,
        Commands::Get { id } => serde_json::to_string_pretty(&svc.find_by_id(Some(id.as_str())).await?)?,
        Commands::Add { id, name, rating, status, cuisine, location, menu } => {
            let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
            let restaurant = Restaurant::new(id, name, rating, status, cuisine, location, menu);
            serde_json::to_string_pretty(&svc.add_restaurant(restaurant).await?)?
        }
    };
    println!("{output}");
    Ok(())
}

fn main() -> std::process::ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging("compact");
            error!(service = "restaurants", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    init_logging(&cfg.logging.format);
    info!(
        service = "restaurants",
        event = "start",
        data_file = %cfg.storage.data_file.display(),
        version = env!("CARGO_PKG_VERSION"),
        "restaurant directory starting"
    );

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "restaurants", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli, cfg)) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ServiceError>() {
                Some(ServiceError::RecordNotFound(msg)) => {
                    error!(service = "restaurants", event = "not_found", code = 1003, %msg, "restaurant not found")
                }
                Some(svc_err) => {
                    error!(service = "restaurants", event = "service_error", code = svc_err.code(), error = %svc_err, "request failed")
                }
                None => error!(service = "restaurants", event = "run_failed", error = %e, "command failed"),
            }
            std::process::ExitCode::FAILURE
        }
    }
}

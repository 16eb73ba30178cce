use clap::Parser;
use nutricoach_cli::cli::{Cli, RunMode};
use nutricoach_cli::server;
use nutricoach_core::coach::NutriCoach;
use nutricoach_core::config::AppConfig;
use nutricoach_core::model::GeminiClient;
use std::error::Error;
use std::io::{self, IsTerminal, Read};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting nutricoach");
    let cli = Cli::parse();
    debug!(?cli.mode, config = ?cli.config, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(env_var) = &cli.api_key_env {
        config.provider.api_key = env_var.clone();
    }
    info!(model = config.model.as_str(), "Configuration loaded");

    let provider = GeminiClient::from_config(&config.provider)?;
    let coach = Arc::new(NutriCoach::from_config(provider, &config));

    info!(mode = ?cli.mode, "Running in selected mode");
    match cli.mode {
        RunMode::Cli => {
            let meal = load_meal(&cli)?;
            let report = coach.report(&cli.consult_request(meal)).await;
            println!("{}", report.nutrition_summary);
            println!("{}", report.food_details);
            println!("{}", report.coach_feedback);
        }
        RunMode::Rest => {
            let addr: SocketAddr = match cli.rest_addr {
                Some(addr) => addr,
                None => config.server.addr.parse()?,
            };
            info!(%addr, "Starting REST server");
            server::serve(coach, addr).await?;
        }
    }
    info!("nutricoach finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

// An empty meal is passed through so the service can reject it with its own message.
fn load_meal(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if !cli.meal.is_empty() {
        info!("Using meal provided through CLI arguments");
        return Ok(cli.meal.join(" ").trim().to_string());
    }

    if !io::stdin().is_terminal() {
        info!("Reading meal from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer.trim().to_string());
    }

    warn!("Meal not provided via arguments or stdin");
    Ok(String::new())
}

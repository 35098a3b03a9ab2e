//! MediSwitch — medicine recommendation server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use mediswitch_core::MediSwitchConfig;
use mediswitch_store::Catalog;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = MediSwitchConfig::from_env()?;
    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--validate" | "validate" => {
                if args.len() > 2 {
                    config.catalog_path = PathBuf::from(&args[2]);
                }
                std::process::exit(match validate(&config) {
                    Ok(()) => 0,
                    Err(e) => {
                        eprintln!("Catalog invalid: {}", e);
                        1
                    }
                });
            }
            "--help" | "-h" | "help" => {
                println!("MediSwitch — medicine recommendation server");
                println!();
                println!("Usage: mediswitch [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  validate [catalog.csv]   Load the catalog and build the index");
                println!("  help                     Show this help message");
                println!();
                println!("Environment:");
                println!("  PORT, MEDISWITCH_CATALOG, MEDISWITCH_MAX_RESULTS, MEDISWITCH_MAX_SUGGESTIONS");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'mediswitch help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    info!("Catalog: {}", config.catalog_path.display());

    let catalog = Catalog::load_csv(&config.catalog_path)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {}", e))?;
    let engine = state::build_engine(&config, catalog)?;

    let port = config.port;
    let state = Arc::new(AppState::new(config, engine));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MediSwitch server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the catalog, build the engine and print a summary.
fn validate(config: &MediSwitchConfig) -> mediswitch_core::Result<()> {
    let catalog = Catalog::load_csv(&config.catalog_path)?;
    let engine = state::build_engine(config, catalog)?;
    let stats = engine.catalog().stats();

    println!("Catalog:        {}", config.catalog_path.display());
    println!("Items:          {}", stats.num_medicines);
    println!("Companies:      {}", stats.total_companies);
    println!("Average rating: {:.2}", stats.avg_rating);
    println!("Vocabulary:     {} terms", engine.index().vocabulary_size());
    let forms: Vec<&str> = stats.medicine_types.iter().map(|f| f.as_str()).collect();
    println!("Forms:          {}", forms.join(", "));
    Ok(())
}

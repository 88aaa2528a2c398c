use tracing::{error, info};

use postings::db::CategoryRepository;
use postings::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = postings::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        postings::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> postings::Result<()> {
    info!(path = %config.database.path, "Opening database");
    let db = Database::open(&config.database.path).await?;

    CategoryRepository::new(db.pool())
        .seed(&config.seed.categories)
        .await?;

    let server = WebServer::new(&config, db)?;
    info!("Postings server configured on {}", server.addr());
    server.run().await
}

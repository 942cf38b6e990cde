use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pow_ledger::{api, blockchain, config, logging};

use std::path::{Path, PathBuf};

/// Single-node proof-of-work ledger server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// TCP port for the HTTP server (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Bind address for the HTTP server (overrides the config file)
    #[arg(long)]
    host: Option<String>,
}

// Build the node's ledger from configuration
fn initialize_blockchain(config: &config::Config) -> blockchain::Blockchain {
    let miner_address = match &config.ledger.miner_address {
        Some(address) => address.clone(),
        None => {
            let address = config::generate_miner_address();
            info!("No miner address configured, generated {}", address);
            address
        }
    };

    let blockchain = blockchain::Blockchain::new(miner_address);
    info!(
        "Mining rewards go to {} at difficulty {}",
        blockchain.miner_address(),
        blockchain.difficulty()
    );
    blockchain.log_chain();
    blockchain
}

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::get_chain,
        api::handlers::get_pending_transactions,
        api::handlers::new_transaction,
        api::handlers::mine_block,
        api::handlers::cancel_mining,
        api::handlers::get_amount,
        api::handlers::validate_chain
    ),
    components(
        schemas(
            blockchain::Block,
            blockchain::Transaction,
            api::handlers::ChainResponse,
            api::handlers::TransactionRequest,
            api::handlers::TransactionResponse,
            api::handlers::MineResponse,
            api::handlers::CancelResponse,
            api::handlers::AmountResponse
        )
    ),
    tags(
        (name = "blockchain", description = "Blockchain API endpoints")
    ),
    info(
        title = "Proof-of-work Ledger API",
        version = "0.1.0",
        description = "A single-node proof-of-work ledger",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    // Initialize logger
    logging::init(config.logging.log_file.as_deref().map(Path::new))
        .context("initializing logger")?;

    let state = web::Data::new(api::AppState::new(initialize_blockchain(&config)));
    let bind = (config.server.host.clone(), config.server.port);

    info!("Starting HTTP server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(api::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind)
    .context("binding HTTP listener")?
    .run()
    .await
    .context("running HTTP server")
}

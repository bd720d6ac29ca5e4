use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use recipe_core::{store, CoreConfig, RecipeService};

/// Main entry point for the recipe catalog service
///
/// Resolves configuration once, connects the persistence store, and serves the REST API until
/// interrupted. The store handle is closed after the server has drained.
///
/// # Environment Variables
/// - `PORT`: listen port (default: 5000)
/// - `RECIPES_HOST`: listen host (default: "0.0.0.0")
/// - `DATABASE_URL`: persistence connection string, `memory://`, `file://<dir>` or
///   `mongodb://…` (default: "file://recipe_data")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the store cannot be opened,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipe_run=info".parse()?)
                .add_directive("recipe_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var("RECIPES_HOST").ok(),
        std::env::var("PORT").ok(),
        std::env::var("DATABASE_URL").ok(),
    )?;

    tracing::info!("-- Connecting recipe store at {}", cfg.store());
    let recipe_store = store::connect(cfg.store()).await?;
    let state = AppState::new(RecipeService::new(recipe_store.clone()));

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    tracing::info!("++ Server running on {}", listener.local_addr()?);

    let served = api_rest::serve(listener, state, shutdown_signal()).await;

    tracing::info!("-- Closing recipe store");
    recipe_store.close().await;

    served?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

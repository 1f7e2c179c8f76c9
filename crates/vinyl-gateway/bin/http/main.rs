mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vinyl_core::{seed_albums, AlbumStore};
use vinyl_gateway::{App, AppState};
use vinyl_storage::{InMemoryStore, MySqlStore, SqliteStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    init_tracing(config.log_json);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting album gateway"
    );

    let store = open_store(&config).await?;

    if config.skip_seed {
        info!("seeding disabled");
    } else if store.seed_if_empty(&seed_albums()).await? {
        info!(backend = store.backend(), "seeded empty album store");
    } else {
        info!(backend = store.backend(), "album store already has data; skipping seeding");
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "serving album API");

    axum::serve(listener, App::router(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("album gateway stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn open_store(config: &CLI) -> Result<Arc<dyn AlbumStore>, Box<dyn std::error::Error>> {
    let store: Arc<dyn AlbumStore> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(InMemoryStore::new()),
        StorageBackendArg::Sqlite => Arc::new(SqliteStore::connect(&config.sqlite_url).await?),
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            Arc::new(MySqlStore::connect(mysql_dsn).await?)
        }
    };

    Ok(store)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

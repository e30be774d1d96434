use anyhow::Result;
use auth::UserRepository;
use common::{
    cache::{KeyValueStore, MemoryStore, RedisConfig, RedisStore},
    store::{RestClient, StoreConfig},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wardrobe::{
    AppState, CollectionService,
    config::{ServiceConfig, SessionBackend},
    create_router,
    repositories::DressRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_env()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting wardrobe service");

    let store_config = StoreConfig::from_env()?;
    let client = RestClient::new(&store_config)?;
    match client.health_check().await {
        Ok(true) => info!("External store reachable at {}", client.base_url()),
        Ok(false) => warn!("External store at {} reports errors", client.base_url()),
        Err(e) => warn!("External store at {} unreachable: {}", client.base_url(), e),
    }

    let session_store: Arc<dyn KeyValueStore> = match config.session_backend {
        SessionBackend::Redis => {
            let store = RedisStore::new(&RedisConfig::from_env())?;
            if !store.health_check().await? {
                anyhow::bail!("Failed to connect to Redis");
            }
            info!("Redis connection successful");
            Arc::new(store)
        }
        SessionBackend::Memory => {
            warn!("Keeping sessions in memory; they will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let app_state = AppState {
        users: UserRepository::new(client.clone()),
        session_store,
        collection: CollectionService::new(DressRepository::new(client)),
    };

    let app = create_router(app_state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Wardrobe service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}

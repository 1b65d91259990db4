use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use mini_forum::config::{ForumConfig, StorageBackend};
use mini_forum::store::{MemoryStore, RecordStore, RocksStore};
use mini_forum::{create_router, seeder};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ForumConfig::from_env();

    let store: Arc<dyn RecordStore> = match &config.storage {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::RocksDb { path } => {
            Arc::new(RocksStore::open(path).expect("Failed to open forum database."))
        }
    };

    seeder::seed_store(store.as_ref()).expect("Failed to seed the record store.");

    let app = create_router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("Forum running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

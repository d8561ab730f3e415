use anyhow::Result;
use hoge::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(?config, "starting hoge-api");

    let backend = Arc::new(InMemoryDocumentStore::new());
    let store = HogeStore::new(backend).with_default_page_size(config.default_page_size);

    ServerBuilder::new()
        .with_store(store)
        .serve(&config.bind_addr)
        .await
}

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use catalog_api::{
    app::products::{InMemoryProductStore, ProductStore},
    infrastructure::{init_logging, load_config},
    router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let _guard = init_logging(&config.logging)?;

    let store: Arc<dyn ProductStore> = if config.store.seed_sample_data {
        Arc::new(InMemoryProductStore::seeded())
    } else {
        Arc::new(InMemoryProductStore::new())
    };

    let app = router(
        AppState::new(store),
        Duration::from_secs(config.http.timeout_seconds),
    );

    let address = config.socket_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(%address, "catalog API listening");
    info!("   GET    /api/admin/products       - list products");
    info!("   GET    /api/admin/products/:id   - get product");
    info!("   POST   /api/admin/products       - create product");
    info!("   PUT    /api/admin/products/:id   - update product");
    info!("   DELETE /api/admin/products/:id   - delete product");
    info!("   GET    /api/user/products        - list product DTOs");
    info!("   GET    /api/user/products/:id    - get product DTO");
    info!("   GET    /api/dummy/random         - random number");
    info!("   GET    /health, /alive           - health checks");

    axum::serve(listener, app).await?;
    Ok(())
}

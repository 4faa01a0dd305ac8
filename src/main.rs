use std::net::TcpListener;

use anyhow::Context;

use citas::app;
use citas::settings::Settings;
use citas::store::Store;
use citas::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    telemetry::init(settings.app.log_filter())?;

    let store = Store::open(settings.database.path())
        .await
        .map_err(|e| {
            tracing::error!("Could not initialize the appointment store: {}", e);
            e
        })
        .context("Failed to initialize store")?;

    // The store is closed whatever way the server ends, including a failed bind
    let outcome = serve(&settings, store.clone()).await;
    store.close().await;

    if let Err(e) = &outcome {
        tracing::error!("{:#}", e);
    }
    outcome
}

async fn serve(settings: &Settings, store: Store) -> anyhow::Result<()> {
    let listener = TcpListener::bind(settings.app.addr()).context("Failed to bind listener")?;
    let static_dir = settings.app.static_dir().to_path_buf();

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    tracing::info!("Serving static files from {}", static_dir.display());

    app::run(listener, store, static_dir)?
        .await
        .context("Failed to run app")
}

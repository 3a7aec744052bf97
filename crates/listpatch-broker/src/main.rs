use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use listpatch_broker::{
    config::BrokerConfig,
    http::{self, AppContext},
    sharepoint::ReqwestTransport,
};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        tracing::error!("broker shut down with error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = BrokerConfig::from_env()?;
    let transport = Arc::new(ReqwestTransport::new(config.request_timeout)?);
    let context = Arc::new(AppContext { transport });

    let router: Router = http::router(context);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(?addr, "http server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use cooksense_api::application::http::server::http_server::{router, state};
use cooksense_api::args::Args;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let args = Arc::new(Args::parse());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    tracing::info!("listening on {addr}");

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

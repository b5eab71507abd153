use anyhow::{anyhow, Context};
use clap::Parser;
use courses::{app, config::Config, data::AppState};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                [
                    "frontend=debug",        // code in this file
                    "courses=debug",         // code in this crate (but not this file)
                    "tower_http=debug",      // http request/response pairs
                    "axum::rejection=trace", // extractor rejections (i.e. bad form input)
                ]
                .join(",")
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    match &config.api_base {
        Some(api_base) => info!(%api_base, "reading courses from API"),
        None => warn!("no course API base URL configured, pages will render empty"),
    }

    let shutdown = CancellationToken::new();
    let state = AppState::new(&config, shutdown.clone())?;

    // build our application with a route
    let app = app::make_app(state);
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| anyhow!("failed to bind listener to {}", config.bind))?;
    info!("listening on http://{}", &config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(error) = tokio::signal::ctrl_c().await {
                warn!(%error, "failed to listen for ctrl-c, serving until killed");
                std::future::pending::<()>().await;
            }
            info!("shutting down");
            shutdown.cancel();
        })
        .await
        .context("error while serving app")?;

    Ok(())
}

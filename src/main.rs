use crate::catalog::Catalog;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;


fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_search=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let catalog = match &config.listings_path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::embedded(),
    }
    .context("Failed to load listings")?;

    if catalog.is_empty() {
        tracing::warn!("listing catalog is empty, every search will come back empty");
    }
    tracing::info!(
        listings = catalog.len(),
        source = ?config.listings_path,
        "catalog loaded"
    );

    let state = AppState {
        catalog,
        default_max_price: config.default_max_price,
    };

    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    server
        .serve(move |req: astra::Request, _info| -> astra::Response {
            let method = req.method().clone();
            let path = req.uri().path().to_string();

            match handle(req, &state) {
                Ok(resp) => resp,
                Err(err) => {
                    if err.status() >= 500 {
                        tracing::error!(%method, %path, error = %err, "request failed");
                    } else {
                        tracing::warn!(%method, %path, error = %err, "request rejected");
                    }
                    error_to_response(&err)
                }
            }
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

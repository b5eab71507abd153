use std::path::PathBuf;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, Site};

use fetch::CourseFetcher;

pub mod fetch;
pub mod view;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: CourseFetcher,
    pub site: Site,
    pub assets: PathBuf,
    /// Parent of every page view's token, cancelled when the server shuts down
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: &Config, shutdown: CancellationToken) -> Result<Self> {
        Ok(Self {
            fetcher: CourseFetcher::new(config.api_base.clone())?,
            site: Site::from(config),
            assets: config.assets.clone(),
            shutdown,
        })
    }
}

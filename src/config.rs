use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use url::Url;

use crate::common::Phase;

#[derive(Parser, Debug, Clone)]
#[command(version)]
/// Serves the course listing website.
///
/// Course data is read from the backend API on every page view; nothing is stored locally.
pub struct Config {
    /// Base URL of the course API, e.g. https://api.example.org/v2
    ///
    /// When missing, every page renders its empty state and the failed fetches are logged.
    #[arg(long, env = "COURSES_API_BASE", value_name = "URL")]
    pub api_base: Option<Url>,

    /// Socket to listen on
    #[arg(long, env = "COURSES_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Directory served under /assets
    #[arg(long, env = "COURSES_ASSETS", default_value = "assets")]
    pub assets: PathBuf,

    /// Phase the "View all courses" link points to
    #[arg(long, env = "COURSES_ALL_COURSES_PHASE", default_value_t = Phase::new(4), value_name = "PHASE")]
    pub all_courses_phase: Phase,

    /// Name shown in the header and page titles
    #[arg(long, env = "COURSES_SITE_NAME", default_value = "GIAN Courses")]
    pub site_name: String,
}

/// The parts of the configuration the page templates need.
#[derive(Clone, Debug)]
pub struct Site {
    pub name: String,
    pub all_courses_phase: Phase,
}

impl From<&Config> for Site {
    fn from(config: &Config) -> Self {
        Site {
            name: config.site_name.clone(),
            all_courses_phase: config.all_courses_phase,
        }
    }
}

use std::fmt::Display;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, instrument};
use url::Url;

use crate::common::{CourseCollection, Phase};

/// Which backend collection a page reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseSource {
    Latest,
    Phase(Phase),
}

impl CourseSource {
    /// Path segments below the API base, e.g. `courses/latest` or `courses/3`
    pub fn segments(self) -> [String; 2] {
        let last = match self {
            CourseSource::Latest => "latest".to_string(),
            CourseSource::Phase(phase) => phase.to_string(),
        };
        ["courses".to_string(), last]
    }
}

impl Display for CourseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseSource::Latest => write!(f, "latest courses"),
            CourseSource::Phase(phase) => write!(f, "phase {} courses", phase),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CourseFetcher {
    pub http_client: reqwest::Client,
    pub api_base: Option<Url>,
}

impl CourseFetcher {
    pub fn new(api_base: Option<Url>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            http_client,
            api_base,
        })
    }

    pub fn endpoint(&self, source: CourseSource) -> Result<Url> {
        let mut url = self
            .api_base
            .clone()
            .ok_or_else(|| anyhow!("no course API base URL is configured"))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("course API base URL cannot have a path"))?
            .pop_if_empty()
            .extend(source.segments());
        Ok(url)
    }

    /// Reads one collection from the backend. Every kind of failure (bad configuration,
    /// transport, non-success status, malformed body) comes back as the same error.
    /// A `null` body is an empty collection.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, source: CourseSource) -> Result<CourseCollection> {
        let url = self.endpoint(source)?;
        debug!(%url, "requesting courses");

        let courses = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?
            .error_for_status()?
            .json::<Option<CourseCollection>>()
            .await
            .with_context(|| format!("response from {} is not a course list", url))?;

        Ok(courses.unwrap_or_default())
    }
}

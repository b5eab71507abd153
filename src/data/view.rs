use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::common::{CourseCollection, CourseRecord};

use super::fetch::{CourseFetcher, CourseSource};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
}

/// The course state of one page view. It starts empty and only ever changes when a fetch
/// succeeds; a failed fetch leaves it exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct CourseView {
    source: Option<CourseSource>,
    courses: CourseCollection,
    state: LoadState,
}

impl CourseView {
    /// Creates the view and issues its single fetch. If `cancel` fires first, the view is
    /// being torn down: the response is dropped and the view stays as it was.
    pub async fn mount(
        fetcher: &CourseFetcher,
        source: CourseSource,
        cancel: CancellationToken,
    ) -> Self {
        let mut view = Self {
            source: Some(source),
            ..Self::default()
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(%source, "view torn down before courses arrived");
            }
            result = fetcher.fetch(source) => {
                view.apply(result);
            }
        }

        view
    }

    /// Applies one fetch outcome.
    pub fn apply(&mut self, result: Result<CourseCollection>) {
        let source = self
            .source
            .map(|s| s.to_string())
            .unwrap_or_else(|| "courses".to_string());
        match result {
            Ok(courses) => {
                debug!(%source, count = courses.len(), "courses loaded");
                self.courses = courses;
                self.state = LoadState::Loaded;
            }
            Err(error) => {
                error!(%source, error = %format!("{error:#}"), "failed to fetch courses");
            }
        }
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn state(&self) -> LoadState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use anyhow::anyhow;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    /// Collects formatted log output so tests can check what was written.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn output(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }

        fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
            let writer = self.clone();
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .finish()
        }
    }

    fn records(ids: &[u64]) -> CourseCollection {
        ids.iter()
            .map(|id| CourseRecord::new(json!({ "id": id })))
            .collect()
    }

    #[test]
    fn success_replaces_wholesale() {
        let mut view = CourseView::default();
        assert_eq!(view.state(), LoadState::NotLoaded);
        assert!(view.courses().is_empty());

        view.apply(Ok(records(&[1, 2, 3])));
        assert_eq!(view.state(), LoadState::Loaded);
        assert_eq!(view.courses(), records(&[1, 2, 3]).as_slice());

        view.apply(Ok(records(&[3])));
        assert_eq!(view.courses(), records(&[3]).as_slice());
    }

    #[test]
    fn failure_leaves_state_alone() {
        let mut view = CourseView::default();
        view.apply(Err(anyhow!("connection refused")));
        assert_eq!(view.state(), LoadState::NotLoaded);
        assert!(view.courses().is_empty());

        view.apply(Ok(records(&[7, 8])));
        view.apply(Err(anyhow!("500 Internal Server Error")));
        assert_eq!(view.state(), LoadState::Loaded);
        assert_eq!(view.courses(), records(&[7, 8]).as_slice());
    }

    #[test]
    fn failure_is_logged() {
        let logs = Captured::default();
        let mut view = CourseView::default();
        tracing::subscriber::with_default(logs.subscriber(), || {
            view.apply(Err(anyhow!("500 Internal Server Error")));
        });

        let output = logs.output();
        let line = output
            .lines()
            .find(|l| l.contains("failed to fetch courses"))
            .expect("no log line for the failed fetch");
        assert!(line.contains("ERROR"));
        assert!(line.contains("500 Internal Server Error"));
    }

    #[tokio::test]
    async fn mount_fetches_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/courses/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = CourseFetcher::new(Some(server.uri().parse().unwrap())).unwrap();
        let view = CourseView::mount(&fetcher, CourseSource::Latest, CancellationToken::new()).await;

        assert_eq!(view.state(), LoadState::Loaded);
        assert_eq!(view.courses(), records(&[1, 2]).as_slice());
    }

    #[tokio::test]
    async fn mount_failure_is_silent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = CourseFetcher::new(Some(server.uri().parse().unwrap())).unwrap();
        let logs = Captured::default();
        let view = {
            // current-thread runtime, so the whole mount runs under this subscriber
            let _guard = tracing::subscriber::set_default(logs.subscriber());
            CourseView::mount(&fetcher, CourseSource::Latest, CancellationToken::new()).await
        };

        assert_eq!(view.state(), LoadState::NotLoaded);
        assert!(view.courses().is_empty());
        assert!(logs
            .output()
            .lines()
            .any(|l| l.contains("ERROR") && l.contains("failed to fetch courses")));
    }

    #[tokio::test]
    async fn mount_without_api_base_is_silent() {
        let fetcher = CourseFetcher::new(None).unwrap();
        let view = CourseView::mount(&fetcher, CourseSource::Latest, CancellationToken::new()).await;
        assert_eq!(view.state(), LoadState::NotLoaded);
    }

    #[tokio::test]
    async fn torn_down_view_discards_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": 1}]))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let fetcher = CourseFetcher::new(Some(server.uri().parse().unwrap())).unwrap();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let view = CourseView::mount(&fetcher, CourseSource::Latest, cancel).await;
        assert_eq!(view.state(), LoadState::NotLoaded);
        assert!(view.courses().is_empty());
    }
}

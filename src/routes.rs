use crate::data::{fetch::CourseSource, view::CourseView, AppState};

pub mod courses;
pub mod health;
pub mod root;

/// Mounts a page's course view. The view's token is a child of the server's shutdown
/// token and is cancelled if the handler future is dropped (client went away).
async fn mount(state: &AppState, source: CourseSource) -> CourseView {
    let cancel = state.shutdown.child_token();
    let _teardown = cancel.clone().drop_guard();
    CourseView::mount(&state.fetcher, source, cancel).await
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use maud::{html, Markup};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    common::{AppError, Phase},
    components,
    data::{fetch::CourseSource, AppState},
};

#[instrument(level = "debug", skip(state))]
pub async fn get(
    Path(phase): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Markup, AppError> {
    let phase: Phase = phase.parse().map_err(|e: anyhow::Error| {
        debug!(error = %e, "not a phase");
        StatusCode::NOT_FOUND
    })?;

    let view = super::mount(&state, CourseSource::Phase(phase)).await;

    let page_name = format!("Courses {}", phase.human_display());
    Ok(components::base(
        &state.site,
        &page_name,
        html! {
            (components::breadcrumb::view(
                &page_name,
                &format!("List of all the courses held for {}", phase.human_display()),
            ))
            section id="courses" class="overflow-hidden py-4 md:py-8 lg:py-10" {
                div class="container mx-auto" {
                    div class="w-full px-4" {
                        (components::course_table::view(view.courses()))
                    }
                }
            }
        },
    ))
}

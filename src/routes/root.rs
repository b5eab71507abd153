use axum::extract::State;
use maud::{html, Markup};
use std::sync::Arc;
use tracing::instrument;

use crate::{
    components,
    data::{fetch::CourseSource, AppState},
};

#[instrument(level = "debug", skip(state))]
pub async fn get(State(state): State<Arc<AppState>>) -> Markup {
    let view = super::mount(&state, CourseSource::Latest).await;

    components::base(
        &state.site,
        "Home",
        html! {
            section id="home" class="pt-32 pb-16 text-center" {
                div class="container mx-auto max-w-3xl" {
                    h1 class="mb-5 text-3xl font-bold sm:text-5xl" {
                        (state.site.name)
                    }
                    p class="text-lg text-neutral-500" {
                        "Short courses taught by visiting faculty from around the world."
                    }
                }
            }
            (components::latest_courses::view(&state.site, view.courses()))
        },
    )
}

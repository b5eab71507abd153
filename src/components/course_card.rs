use maud::{html, Markup};

use crate::common::{humanize_key, CourseRecord};

pub fn view(course: &CourseRecord) -> Markup {
    let title = course.title().unwrap_or_else(|| "Untitled course".to_string());
    let details = course.details();

    html! {
        div data-slot="course" class="w-full h-full rounded-lg bg-white dark:bg-neutral-800 shadow-lg p-6" {
            h3 class="mb-4 text-xl font-bold" {
                (title)
            }
            @if !details.is_empty() {
                dl class="grid grid-cols-2 gap-x-4 gap-y-1 text-sm" {
                    @for (key, value) in &details {
                        dt class="text-neutral-500" { (humanize_key(key)) }
                        dd { (value) }
                    }
                }
            }
        }
    }
}

pub fn placeholder() -> Markup {
    html! {
        div data-slot="placeholder" class="w-full h-full rounded-lg border-2 border-dashed border-neutral-300 dark:border-neutral-700 p-6 flex items-center justify-center text-neutral-400" {
            "More courses coming soon"
        }
    }
}

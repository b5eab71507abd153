use maud::{html, Markup, DOCTYPE};

use crate::config::Site;

pub mod breadcrumb;
pub mod course_card;
pub mod course_table;
pub mod latest_courses;
pub mod section_title;

pub fn base(site: &Site, page: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (page) " | " (site.name) }
                script src="/assets/tailwind.js" {}
                meta name="viewport" content="width=device-width,initial-scale=1.0" {}
            }
            body class="bg-white dark:bg-neutral-900 dark:text-white" {
                (header(site))
                main id="app-container" class="contents" {
                    (content)
                }
                footer class="py-8 text-center text-sm text-neutral-500" {
                    (site.name)
                }
            }
        }
    }
}

fn header(site: &Site) -> Markup {
    let all_courses = site.all_courses_phase;
    html! {
        header class="w-full shadow-md" {
            nav class="container mx-auto flex items-center justify-between p-4" {
                a href="/" class="text-xl font-bold" { (site.name) }
                div class="flex gap-4" {
                    a href="/" class="hover:underline" { "Home" }
                    a href={"/courses/" (all_courses.slug())} class="hover:underline" {
                        "Courses " (all_courses.human_display())
                    }
                }
            }
        }
    }
}

pub fn not_found(site: &Site) -> Markup {
    base(
        site,
        "Not found",
        html! {
            div class="h-full py-32 flex items-center justify-center" {
                "That page could not be found."
            }
        },
    )
}

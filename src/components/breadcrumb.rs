use maud::{html, Markup};

pub fn view(page_name: &str, description: &str) -> Markup {
    html! {
        section class="pt-28 lg:pt-36 border-b border-neutral-200 dark:border-neutral-700" {
            div class="container mx-auto flex flex-wrap items-center justify-between gap-4 pb-8" {
                div class="max-w-xl" {
                    h1 class="mb-4 text-2xl font-bold sm:text-3xl" { (page_name) }
                    p class="text-base text-neutral-500" { (description) }
                }
                ul class="flex items-center gap-2" {
                    li { a href="/" class="hover:underline" { "Home" } }
                    li aria-hidden="true" { "/" }
                    li class="text-neutral-500" { (page_name) }
                }
            }
        }
    }
}

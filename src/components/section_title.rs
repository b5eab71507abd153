use maud::{html, Markup};

pub fn view(title: &str, paragraph: Markup, center: bool) -> Markup {
    let align = match center {
        true => "mx-auto text-center",
        false => "",
    };
    html! {
        div class={"mb-16 max-w-xl " (align)} {
            h2 class="mb-4 text-3xl font-bold sm:text-4xl" {
                (title)
            }
            p class="text-base text-neutral-500" {
                (paragraph)
            }
        }
    }
}

use maud::{html, Markup};

use crate::common::{humanize_key, CourseRecord};

/// Every scalar attribute key across the records, in the order first seen.
pub fn columns(courses: &[CourseRecord]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for (key, _) in courses.iter().flat_map(|c| c.attributes()) {
        if !columns.contains(&key) {
            columns.push(key);
        }
    }
    columns
}

pub fn view(courses: &[CourseRecord]) -> Markup {
    let columns = columns(courses);

    html! {
        div class="w-full overflow-x-auto rounded-lg shadow-lg" {
            table class="w-full text-left text-sm" {
                thead class="bg-neutral-100 dark:bg-neutral-800 uppercase" {
                    tr {
                        @for column in &columns {
                            th scope="col" class="px-4 py-3" { (humanize_key(column)) }
                        }
                    }
                }
                tbody {
                    @for course in courses {
                        tr data-row class="border-b dark:border-neutral-700" {
                            @if course.value().is_object() {
                                @for column in &columns {
                                    td class="px-4 py-3" { (course.attribute(column).unwrap_or_default()) }
                                }
                            } @else {
                                // not an object, show it as-is
                                td class="px-4 py-3" colspan=(columns.len().max(1)) { (course.value().to_string()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

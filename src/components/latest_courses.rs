use itertools::Itertools;
use maud::{html, Markup};

use crate::{common::CourseRecord, components, config::Site};

use super::course_card;

/// The grid never shows fewer cells than this
pub const MIN_GRID_CELLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Course(&'a CourseRecord),
    Placeholder,
}

/// One cell per course in order, padded with placeholders up to `MIN_GRID_CELLS`.
pub fn cells(courses: &[CourseRecord]) -> Vec<Cell<'_>> {
    courses
        .iter()
        .map(Cell::Course)
        .pad_using(MIN_GRID_CELLS, |_| Cell::Placeholder)
        .collect()
}

pub fn view(site: &Site, courses: &[CourseRecord]) -> Markup {
    let all_courses = site.all_courses_phase.slug();
    html! {
        section id="latest-courses" class="bg-neutral-100 dark:bg-neutral-900 py-32 md:py-36 lg:py-40 relative z-10" {
            div class="container mx-auto" {
                (components::section_title::view(
                    "Upcoming Courses",
                    html! {
                        a href={"/courses/" (all_courses)} class="text-blue-600 hover:underline" {
                            "View all courses"
                        }
                    },
                    true,
                ))
                div class="grid grid-cols-1 gap-x-8 gap-y-10 md:grid-cols-2 md:gap-x-6 lg:gap-x-8 xl:grid-cols-3" {
                    @for cell in cells(courses) {
                        @match cell {
                            Cell::Course(course) => {
                                div class="w-full" {
                                    (course_card::view(course))
                                }
                            },
                            Cell::Placeholder => {
                                (course_card::placeholder())
                            },
                        }
                    }
                }
            }
        }
    }
}

//! Iterator: a set menu served one course at a time

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

struct Course {
    name: &'static str,
    dish: &'static str,
}

/// The fixed dinner set. Guests never index into it; they only take the
/// next course.
struct SetMenu {
    courses: Vec<Course>,
}

impl SetMenu {
    fn len(&self) -> usize {
        self.courses.len()
    }
}

/// Walks the menu front to back. Once the last course is out, it keeps
/// answering `None`.
struct Courses<'a> {
    menu: &'a SetMenu,
    position: usize,
}

impl<'a> Iterator for Courses<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let course = self.menu.courses.get(self.position)?;
        self.position += 1;
        Some(course)
    }
}

impl<'a> IntoIterator for &'a SetMenu {
    type Item = &'a Course;
    type IntoIter = Courses<'a>;

    fn into_iter(self) -> Courses<'a> {
        Courses {
            menu: self,
            position: 0,
        }
    }
}

impl IntoIterator for SetMenu {
    type Item = Course;
    type IntoIter = std::vec::IntoIter<Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.into_iter()
    }
}

fn tonight_menu() -> SetMenu {
    SetMenu {
        courses: vec![
            Course {
                name: "appetizer",
                dish: "edamame",
            },
            Course {
                name: "side",
                dish: "gyoza",
            },
            Course {
                name: "main",
                dish: "tonkotsu ramen",
            },
            Course {
                name: "dessert",
                dish: "mochi",
            },
        ],
    }
}

/// Iterator, told as a set dinner where the guest can only ask for the
/// next plate.
pub struct IteratorVignette;

impl Vignette for IteratorVignette {
    fn name(&self) -> &'static str {
        "Iterator"
    }

    fn key(&self) -> &'static str {
        "iterator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "This restaurant serves only a set menu. The kitchen decides the \
             order of the courses. All I can do is ask for the next one \
             until the kitchen says there is nothing left.",
        )?;

        let menu = tonight_menu();
        out.plain(format!("Tonight's set menu has {} courses", menu.len()))?;

        let mut courses = (&menu).into_iter();
        while let Some(course) = courses.next() {
            out.quote(format!("[Waiter] Your {}: {}", course.name, course.dish))?;
            out.plain(format!("Eating {}", course.dish))?;
        }

        out.plain("That was the last course. Gochisousama!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courses_come_out_in_menu_order_then_stop() {
        let menu = tonight_menu();
        let mut courses = (&menu).into_iter();

        assert_eq!(courses.next().map(|c| c.dish), Some("edamame"));
        assert_eq!(courses.next().map(|c| c.dish), Some("gyoza"));
        assert_eq!(courses.next().map(|c| c.dish), Some("tonkotsu ramen"));
        assert_eq!(courses.next().map(|c| c.dish), Some("mochi"));
        assert!(courses.next().is_none());
        assert!(courses.next().is_none());
    }

    #[test]
    fn test_borrowed_iteration_can_run_twice() {
        let menu = tonight_menu();
        let first_pass = (&menu).into_iter().count();
        let second_pass = (&menu).into_iter().count();
        assert_eq!(first_pass, 4);
        assert_eq!(second_pass, 4);
    }

    #[test]
    fn test_owned_iteration_consumes_the_menu() {
        let dishes: Vec<&str> = tonight_menu().into_iter().map(|c| c.dish).collect();
        assert_eq!(dishes, ["edamame", "gyoza", "tonkotsu ramen", "mochi"]);
    }

    #[test]
    fn test_narration_serves_every_course() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            IteratorVignette.narrate(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Tonight's set menu has 4 courses"));
        assert!(output.ends_with(concat!(
            "\n> [Waiter] Your appetizer: edamame",
            "\nEating edamame",
            "\n> [Waiter] Your side: gyoza",
            "\nEating gyoza",
            "\n> [Waiter] Your main: tonkotsu ramen",
            "\nEating tonkotsu ramen",
            "\n> [Waiter] Your dessert: mochi",
            "\nEating mochi",
            "\nThat was the last course. Gochisousama!",
        )));
    }
}

//! Decorator: sides and drinks stack on top of a bowl of ramen

use std::rc::Rc;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait Food {
    fn price(&self) -> u32;
    fn description(&self) -> String;
}

struct Ramen;

impl Food for Ramen {
    fn price(&self) -> u32 {
        1000
    }

    fn description(&self) -> String {
        String::from("Ramen")
    }
}

/// Adds a plate of gyoza to whatever is underneath.
struct WithGyoza {
    component: Rc<dyn Food>,
}

impl WithGyoza {
    fn new(component: Rc<dyn Food>) -> Self {
        Self { component }
    }
}

impl Food for WithGyoza {
    fn price(&self) -> u32 {
        self.component.price() + 500
    }

    fn description(&self) -> String {
        format!("{} + Gyoza", self.component.description())
    }
}

/// Adds a glass of beer to whatever is underneath.
struct WithBeer {
    component: Rc<dyn Food>,
}

impl WithBeer {
    fn new(component: Rc<dyn Food>) -> Self {
        Self { component }
    }
}

impl Food for WithBeer {
    fn price(&self) -> u32 {
        self.component.price() + 350
    }

    fn description(&self) -> String {
        format!("{} + Beer", self.component.description())
    }
}

fn print_course(food: &dyn Food, title: &str, out: &mut Printer<'_>) -> Result<()> {
    out.plain(format!(
        "{}: {}, price = {}",
        title,
        food.description(),
        food.price()
    ))
}

/// Decorator, told as extending a ramen order side by side.
pub struct DecoratorVignette;

impl Vignette for DecoratorVignette {
    fn name(&self) -> &'static str {
        "Decorator"
    }

    fn key(&self) -> &'static str {
        "decorator"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        let ramen: Rc<dyn Food> = Rc::new(Ramen);
        let ramen_gyoza: Rc<dyn Food> = Rc::new(WithGyoza::new(ramen.clone()));
        let ramen_gyoza_beer: Rc<dyn Food> = Rc::new(WithBeer::new(ramen_gyoza.clone()));
        let ramen_gyoza_two_beers: Rc<dyn Food> = Rc::new(WithBeer::new(ramen_gyoza_beer.clone()));
        let ramen_beer: Rc<dyn Food> = Rc::new(WithBeer::new(ramen.clone()));

        print_course(ramen.as_ref(), "Just Ramen", out)?;
        print_course(ramen_gyoza.as_ref(), "Added gyoza", out)?;
        print_course(ramen_gyoza_beer.as_ref(), "Added Beer", out)?;
        print_course(ramen_gyoza_two_beers.as_ref(), "One beer more", out)?;
        print_course(ramen_beer.as_ref(), "Ramen & Beer", out)
    }
}

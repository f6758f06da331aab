//! Singleton: one chef cooks for every visitor, created on the first order

use std::cell::OnceCell;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

struct Food {
    name: &'static str,
}

impl Food {
    fn new(name: &'static str, out: &mut Printer<'_>) -> Result<Self> {
        out.plain(format!("{name} created"))?;
        Ok(Self { name })
    }

    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("Someone is eating {}", self.name))
    }
}

#[derive(Default)]
struct Chef;

impl Chef {
    fn cook_ramen(&self, out: &mut Printer<'_>) -> Result<Food> {
        Food::new("ramen", out)
    }

    fn cook_gyoza(&self, out: &mut Printer<'_>) -> Result<Food> {
        Food::new("gyoza", out)
    }

    fn cook_udon(&self, out: &mut Printer<'_>) -> Result<Food> {
        Food::new("udon", out)
    }
}

/// The restaurant holds exactly one chef slot. Whoever asks first gets
/// the chef hired; everyone after that gets the same person.
#[derive(Default)]
struct Restaurant {
    chef: OnceCell<Chef>,
}

impl Restaurant {
    fn chef(&self, out: &mut Printer<'_>) -> Result<&Chef> {
        match self.chef.get() {
            Some(chef) => Ok(chef),
            None => {
                out.quote("Singleton Chef created!")?;
                Ok(self.chef.get_or_init(Chef::default))
            }
        }
    }
}

/// Singleton, told as a one-chef restaurant taking orders from three
/// visitors.
pub struct SingletonVignette;

impl Vignette for SingletonVignette {
    fn name(&self) -> &'static str {
        "Singleton"
    }

    fn key(&self) -> &'static str {
        "singleton"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(
            "I'm visiting a ramen restaurant. There is only one chef is \
             working here. Regardless of the number of visitors, only this \
             chef can prepare the order.",
        )?;
        out.plain("He is a singleton.")?;

        let restaurant = Restaurant::default();
        let chef1 = restaurant.chef(out)?;

        {
            out.quote("Visitor2 is ordering ramen.")?;
            let chef2 = restaurant.chef(out)?;
            let ramen = chef2.cook_ramen(out)?;
            ramen.eat(out)?;
        }

        out.quote("Visitor1 is ordering gyoza.")?;
        let gyoza = chef1.cook_gyoza(out)?;
        gyoza.eat(out)?;

        out.quote("Visitor3 is ordering udon.")?;
        let udon = restaurant.chef(out)?.cook_udon(out)?;
        udon.eat(out)
    }
}

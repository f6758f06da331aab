//! Proxy: the waiter checks your age before the beer arrives

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

type Age = u32;

const MIN_DRINKING_AGE: Age = 20;

trait Dinner {
    fn drink_beer(&self, out: &mut Printer<'_>) -> Result<()>;
    fn eat_ramen(&self, out: &mut Printer<'_>) -> Result<()>;
}

/// The real service. It serves anyone who reaches it.
struct RamenDinner;

impl Dinner for RamenDinner {
    fn drink_beer(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Someone's drinking beer")
    }

    fn eat_ramen(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Someone's eating ramen")
    }
}

/// Stands in front of the dinner and lets the beer through only for
/// visitors of legal drinking age. Ramen passes unchecked.
struct AgeCheckedDinner {
    age: Age,
    dinner: Box<dyn Dinner>,
}

impl AgeCheckedDinner {
    fn new(visitor_age: Age) -> Self {
        Self {
            age: visitor_age,
            dinner: Box::new(RamenDinner),
        }
    }

    fn allowed_to_drink(&self) -> bool {
        self.age >= MIN_DRINKING_AGE
    }
}

impl Dinner for AgeCheckedDinner {
    fn drink_beer(&self, out: &mut Printer<'_>) -> Result<()> {
        if self.allowed_to_drink() {
            self.dinner.drink_beer(out)
        } else {
            out.plain("Drink beer failed: Sorry, you're too young")
        }
    }

    fn eat_ramen(&self, out: &mut Printer<'_>) -> Result<()> {
        self.dinner.eat_ramen(out)
    }
}

/// Proxy, told as an age check between the visitor and the beer tap.
pub struct ProxyVignette;

impl Vignette for ProxyVignette {
    fn name(&self) -> &'static str {
        "Proxy"
    }

    fn key(&self) -> &'static str {
        "proxy"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        let my_age: Age = 29;
        let schoolboy_age: Age = MIN_DRINKING_AGE - 3;

        out.quote(format!(
            "I'm going to have dinner: ramen and beer. In this country you \
             can drink alcohol from the age of {MIN_DRINKING_AGE}. I'm {my_age}."
        ))?;

        let dinner: Box<dyn Dinner> = Box::new(AgeCheckedDinner::new(my_age));
        dinner.drink_beer(out)?;
        dinner.eat_ramen(out)?;

        out.quote(format!(
            "A schoolboy entered the restaurant. He's {schoolboy_age}. He is \
             not allowed to drink beer."
        ))?;

        let dinner: Box<dyn Dinner> = Box::new(AgeCheckedDinner::new(schoolboy_age));
        dinner.drink_beer(out)?;
        dinner.eat_ramen(out)
    }
}

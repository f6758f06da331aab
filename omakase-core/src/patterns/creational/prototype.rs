//! Prototype: "the same ramen" means a clone of the bowl as it is right now

use std::fmt;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

#[derive(Debug, Clone, Copy)]
enum Person {
    Me,
    Friend,
    Waiter,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Person::Me => "[Me]",
            Person::Friend => "[FoM]",
            Person::Waiter => "[Waiter]",
        };
        f.write_str(tag)
    }
}

fn say(out: &mut Printer<'_>, person: Person, text: &str) -> Result<()> {
    out.quote(format!("{person} {text}"))
}

/// A dish that can be ordered again "exactly as it is".
trait Dish {
    fn clone_dish(&self, out: &mut Printer<'_>) -> Result<Box<dyn Dish>>;
    fn eat(&mut self, out: &mut Printer<'_>) -> Result<()>;
}

struct Ramen {
    name: String,
    weight: u16,
    fork: bool,
}

impl Ramen {
    /// Freshly cooked bowl. The kitchen announces every bowl it sends out.
    fn order(
        name: impl Into<String>,
        weight: u16,
        fork: bool,
        out: &mut Printer<'_>,
    ) -> Result<Self> {
        let ramen = Self {
            name: name.into(),
            weight,
            fork,
        };
        out.plain(format!("{} created. {}", ramen.name, ramen.info()))?;
        Ok(ramen)
    }

    fn info(&self) -> String {
        format!("Weight = {}, Fork = {}", self.weight, self.fork)
    }

    fn add_fork(&mut self, fork: bool, out: &mut Printer<'_>) -> Result<()> {
        self.fork = fork;
        out.plain(format!("{}: set fork = {}", self.name, self.fork))
    }
}

impl Dish for Ramen {
    fn clone_dish(&self, out: &mut Printer<'_>) -> Result<Box<dyn Dish>> {
        let copy = Ramen::order(self.name.clone(), self.weight, self.fork, out)?;
        Ok(Box::new(copy))
    }

    fn eat(&mut self, out: &mut Printer<'_>) -> Result<()> {
        const EAT_STEP: u16 = 100;

        self.weight = self.weight.saturating_sub(EAT_STEP);
        out.plain(format!("Eating {}: {}", self.name, self.info()))
    }
}

/// Prototype, told as a friend ordering "the same ramen" and getting a
/// copy of a half-eaten bowl.
pub struct PrototypeVignette;

impl Vignette for PrototypeVignette {
    fn name(&self) -> &'static str {
        "Prototype"
    }

    fn key(&self) -> &'static str {
        "prototype"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        let ramen_name = "Miso Ramen";

        say(out, Person::Me, "Hi. I will have a Ramen.")?;
        say(out, Person::Waiter, "Sure. This is the best ramen in our city.")?;
        let mut my_ramen = Ramen::order(ramen_name, 500, false, out)?;

        say(out, Person::Me, "I cannot use chopsticks. May I have a fork?")?;
        my_ramen.add_fork(true, out)?;
        my_ramen.eat(out)?;

        out.plain("Unexpectedly, a friend of mine came into the restaurant...")?;
        say(out, Person::Friend, "Hi. What are you eating?")?;
        say(out, Person::Me, ramen_name)?;
        say(out, Person::Friend, "Waiter, I'd like to have the same ramen.")?;

        let mut friends_ramen = my_ramen.clone_dish(out)?;

        say(out, Person::Friend, "Waiter, my bowl is not full.")?;
        say(out, Person::Waiter, "Yes. You asked for the same. This is the same.")?;
        say(out, Person::Friend, "o_O")?;
        say(out, Person::Me, "o_O")?;

        friends_ramen.eat(out)
    }
}

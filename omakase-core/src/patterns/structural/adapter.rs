//! Adapter: eating chopstick food with a fork

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait ChopsticksMeal {
    fn take_chopsticks(&mut self, out: &mut Printer<'_>) -> Result<()>;
    fn eat(&self, out: &mut Printer<'_>) -> Result<()>;
}

trait ForkMeal {
    fn take_fork(&mut self, out: &mut Printer<'_>) -> Result<()>;
    fn eat(&self, out: &mut Printer<'_>) -> Result<()>;
}

#[derive(Default)]
struct Ramen {
    got_utensils: bool,
}

impl ChopsticksMeal for Ramen {
    fn take_chopsticks(&mut self, out: &mut Printer<'_>) -> Result<()> {
        self.got_utensils = true;
        out.plain("Got utensils (chopsticks)")
    }

    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        if self.got_utensils {
            out.plain("The ramen has been eaten")?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Sausage {
    got_utensils: bool,
}

impl ForkMeal for Sausage {
    fn take_fork(&mut self, out: &mut Printer<'_>) -> Result<()> {
        self.got_utensils = true;
        out.plain("Got utensils (fork)")
    }

    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        if self.got_utensils {
            out.plain("The sausage has been eaten")?;
        }
        Ok(())
    }
}

/// Makes a chopsticks meal usable by a fork eater. Grabbing the fork is
/// translated into grabbing chopsticks on the wrapped meal.
struct ForkToChopsticksAdapter {
    chopsticks_meal: Box<dyn ChopsticksMeal>,
}

impl ForkToChopsticksAdapter {
    fn new(meal: impl ChopsticksMeal + 'static) -> Self {
        Self {
            chopsticks_meal: Box::new(meal),
        }
    }
}

impl ForkMeal for ForkToChopsticksAdapter {
    fn take_fork(&mut self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Fork to Chopshicks adapter. Calling 'TakeChopsticks'.")?;
        self.chopsticks_meal.take_chopsticks(out)
    }

    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        self.chopsticks_meal.eat(out)
    }
}

fn eat_with_fork(meal: &mut dyn ForkMeal, out: &mut Printer<'_>) -> Result<()> {
    meal.take_fork(out)?;
    meal.eat(out)
}

fn eat_with_chopsticks(meal: &mut dyn ChopsticksMeal, out: &mut Printer<'_>) -> Result<()> {
    meal.take_chopsticks(out)?;
    meal.eat(out)
}

/// Adapter, told as a fork eater facing a bowl of ramen.
pub struct AdapterVignette;

impl Vignette for AdapterVignette {
    fn name(&self) -> &'static str {
        "Adapter"
    }

    fn key(&self) -> &'static str {
        "adapter"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote("I'm going to eat a sausage using a fork")?;
        let mut sausage = Sausage::default();
        eat_with_fork(&mut sausage, out)?;

        out.quote("I'm going to eat ramen using chopsticks")?;
        let mut ramen = Ramen::default();
        eat_with_chopsticks(&mut ramen, out)?;

        out.quote("I'm going to eat ramen using a fork")?;
        let mut adapter = ForkToChopsticksAdapter::new(ramen);
        eat_with_fork(&mut adapter, out)
    }
}

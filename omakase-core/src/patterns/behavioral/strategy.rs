//! Strategy: the kitchen swaps cooking algorithms behind one order flow

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait Strategy {
    fn name(&self) -> &'static str;
    fn cook(&self, out: &mut Printer<'_>) -> Result<()>;
}

struct StrategyRamen;

impl Strategy for StrategyRamen {
    fn name(&self) -> &'static str {
        "StrategyRamen"
    }

    fn cook(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Cooking ramen")
    }
}

struct StrategyGyoza;

impl Strategy for StrategyGyoza {
    fn name(&self) -> &'static str {
        "StrategyGyoza"
    }

    fn cook(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Cooking gyoza")
    }
}

/// Context. Ordering never changes; only the installed strategy does.
struct Restaurant {
    strategy: Box<dyn Strategy>,
}

impl Restaurant {
    fn new(strategy: Box<dyn Strategy>, out: &mut Printer<'_>) -> Result<Self> {
        let restaurant = Self { strategy };
        restaurant.announce(out)?;
        Ok(restaurant)
    }

    fn set_strategy(&mut self, strategy: Box<dyn Strategy>, out: &mut Printer<'_>) -> Result<()> {
        self.strategy = strategy;
        self.announce(out)
    }

    fn make_order(&self, out: &mut Printer<'_>) -> Result<()> {
        self.strategy.cook(out)
    }

    fn announce(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(format!(
            "The new context's strategy: {}.",
            self.strategy.name()
        ))
    }
}

/// Strategy, told as one order flow serving two different dishes.
pub struct StrategyVignette;

impl Vignette for StrategyVignette {
    fn name(&self) -> &'static str {
        "Strategy"
    }

    fn key(&self) -> &'static str {
        "strategy"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "Each dish has a different cooking strategy. But there is only \
             one way to order a dish.",
        )?;

        let mut restaurant = Restaurant::new(Box::new(StrategyRamen), out)?;
        restaurant.make_order(out)?;

        restaurant.set_strategy(Box::new(StrategyGyoza), out)?;
        restaurant.make_order(out)
    }
}

//! Bridge: meal times and noodle kinds vary independently

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait Noodles {
    fn describe(&self) -> &'static str;
}

struct Ramen;

impl Noodles for Ramen {
    fn describe(&self) -> &'static str {
        "Ramen noodles"
    }
}

struct Udon;

impl Noodles for Udon {
    fn describe(&self) -> &'static str {
        "Udon noodles"
    }
}

/// The abstraction side of the bridge. Each meal owns a noodle
/// implementation and decorates it with its own occasion.
trait Meal {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()>;
}

struct Lunch {
    noodles: Box<dyn Noodles>,
}

impl Lunch {
    fn new(noodles: impl Noodles + 'static) -> Self {
        Self {
            noodles: Box::new(noodles),
        }
    }
}

impl Meal for Lunch {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!(
            "It's lunchtime. I'm eating {}.",
            self.noodles.describe()
        ))
    }
}

struct Dinner {
    noodles: Box<dyn Noodles>,
}

impl Dinner {
    fn new(noodles: impl Noodles + 'static) -> Self {
        Self {
            noodles: Box::new(noodles),
        }
    }
}

impl Meal for Dinner {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!(
            "It's dinnertime. I'm eating {} and drinking beer =)",
            self.noodles.describe()
        ))
    }
}

/// Bridge, told as two meal times crossed with two noodle kinds.
pub struct BridgeVignette;

impl Vignette for BridgeVignette {
    fn name(&self) -> &'static str {
        "Bridge"
    }

    fn key(&self) -> &'static str {
        "bridge"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        let meals: Vec<Box<dyn Meal>> = vec![
            Box::new(Lunch::new(Udon)),
            Box::new(Lunch::new(Ramen)),
            Box::new(Dinner::new(Udon)),
            Box::new(Dinner::new(Ramen)),
        ];

        for meal in &meals {
            meal.eat(out)?;
        }
        Ok(())
    }
}

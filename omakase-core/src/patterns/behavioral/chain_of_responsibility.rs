//! Chain of Responsibility: the menu answers item by item what your money
//! can buy

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait Handler {
    fn process(&self, money: u32, out: &mut Printer<'_>) -> Result<()>;
}

fn pass_on(next: Option<&dyn Handler>, money: u32, out: &mut Printer<'_>) -> Result<()> {
    match next {
        Some(handler) => handler.process(money, out),
        None => Ok(()),
    }
}

fn offer(item: &str, price: u32, money: u32, out: &mut Printer<'_>) -> Result<()> {
    let verdict = if money >= price { "can" } else { "can NOT" };
    out.plain(format!(
        "Your money = {money}, price = {price}. You {verdict} buy {item}"
    ))
}

struct Ramen {
    price: u32,
    next: Option<Box<dyn Handler>>,
}

impl Handler for Ramen {
    fn process(&self, money: u32, out: &mut Printer<'_>) -> Result<()> {
        offer("ramen", self.price, money, out)?;
        pass_on(self.next.as_deref(), money, out)
    }
}

struct Gyoza {
    price: u32,
    next: Option<Box<dyn Handler>>,
}

impl Handler for Gyoza {
    fn process(&self, money: u32, out: &mut Printer<'_>) -> Result<()> {
        offer("gyoza", self.price, money, out)?;
        pass_on(self.next.as_deref(), money, out)
    }
}

struct Beer {
    price: u32,
    next: Option<Box<dyn Handler>>,
}

impl Handler for Beer {
    fn process(&self, money: u32, out: &mut Printer<'_>) -> Result<()> {
        offer("beer", self.price, money, out)?;
        pass_on(self.next.as_deref(), money, out)
    }
}

/// Udon refuses every request without looking at the money.
struct Udon {
    next: Option<Box<dyn Handler>>,
}

impl Handler for Udon {
    fn process(&self, money: u32, out: &mut Printer<'_>) -> Result<()> {
        out.plain(
            "You can NOT buy udon. We don't have it. This is a ramen restaurant.",
        )?;
        pass_on(self.next.as_deref(), money, out)
    }
}

/// Links the whole menu into one chain, priciest question first.
fn menu_chain() -> Box<dyn Handler> {
    let udon = Box::new(Udon { next: None });
    let beer = Box::new(Beer {
        price: 750,
        next: Some(udon),
    });
    let gyoza = Box::new(Gyoza {
        price: 500,
        next: Some(beer),
    });
    Box::new(Ramen {
        price: 1000,
        next: Some(gyoza),
    })
}

/// Chain of Responsibility, told as asking the whole menu what a handful
/// of coins can buy.
pub struct ChainOfResponsibilityVignette;

impl Vignette for ChainOfResponsibilityVignette {
    fn name(&self) -> &'static str {
        "Chain of Responsibility"
    }

    fn key(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        let chain = menu_chain();

        out.quote("What can I buy in this restaurant? My money = 100.")?;
        chain.process(100, out)?;

        out.quote("What can I buy in this restaurant? Money = 1000.")?;
        chain.process(1000, out)
    }
}

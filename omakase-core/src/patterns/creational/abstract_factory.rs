//! Abstract factory: each cuisine outfits the whole meal in one style

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait Beverage {
    fn drink(&self, out: &mut Printer<'_>) -> Result<()>;
}

trait Food {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()>;

    fn eat_and_drink(&self, beverage: &dyn Beverage, out: &mut Printer<'_>) -> Result<()> {
        self.eat(out)?;
        beverage.drink(out)
    }
}

struct Beer;

impl Beverage for Beer {
    fn drink(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("I'm drinking Beer :)")
    }
}

struct Sake;

impl Beverage for Sake {
    fn drink(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("I'm drinking Sake :)")
    }
}

struct Coke;

impl Beverage for Coke {
    fn drink(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("I'm drinking Coke :)")
    }
}

struct Ramen;

impl Food for Ramen {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("I'm eating Ramen :)")
    }
}

struct Sushi;

impl Food for Sushi {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("I'm eating Sushi :)")
    }
}

struct ChickenWings;

impl Food for ChickenWings {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("I'm eating Chicken Wings :)")
    }
}

/// The abstract factory. Food and beverage always come from the same
/// kitchen, so they always match.
trait RestaurantFactory {
    fn create_food(&self) -> Box<dyn Food>;
    fn create_beverage(&self) -> Box<dyn Beverage>;
    fn name(&self) -> &'static str;
}

struct RamenRestaurant;

impl RestaurantFactory for RamenRestaurant {
    fn create_food(&self) -> Box<dyn Food> {
        Box::new(Ramen)
    }

    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Beer)
    }

    fn name(&self) -> &'static str {
        "Ramen"
    }
}

struct SushiRestaurant;

impl RestaurantFactory for SushiRestaurant {
    fn create_food(&self) -> Box<dyn Food> {
        Box::new(Sushi)
    }

    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Sake)
    }

    fn name(&self) -> &'static str {
        "Sushi"
    }
}

struct KfcRestaurant;

impl RestaurantFactory for KfcRestaurant {
    fn create_food(&self) -> Box<dyn Food> {
        Box::new(ChickenWings)
    }

    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Coke)
    }

    fn name(&self) -> &'static str {
        "KFC"
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
enum Cuisine {
    Ramen,
    Sushi,
    Kfc,
}

fn factory_for(cuisine: Cuisine) -> Box<dyn RestaurantFactory> {
    match cuisine {
        Cuisine::Ramen => Box::new(RamenRestaurant),
        Cuisine::Sushi => Box::new(SushiRestaurant),
        Cuisine::Kfc => Box::new(KfcRestaurant),
    }
}

/// Abstract factory, told as a night out where one kitchen supplies
/// everything on the table.
pub struct AbstractFactoryVignette;

impl Vignette for AbstractFactoryVignette {
    fn name(&self) -> &'static str {
        "Abstract Factory"
    }

    fn key(&self) -> &'static str {
        "abstract-factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(
            "It's dinner time. I'm so hungry. I don't know what exactly I \
             want to eat. I'm just going to visit a restaurant and order \
             their best meal.",
        )?;

        // Ramen tonight
        visit(Cuisine::Ramen, out)
    }
}

fn visit(cuisine: Cuisine, out: &mut Printer<'_>) -> Result<()> {
    let factory = factory_for(cuisine);

    out.plain(format!(
        "It seems I'm visiting a {} restaurant today",
        factory.name()
    ))?;
    out.quote("[Me] Hello. I'd like to order some food and a beverage")?;

    let food = factory.create_food();
    let beverage = factory.create_beverage();
    food.eat_and_drink(beverage.as_ref(), out)?;

    out.quote("[Me] It was very tasty. Thank you")
}

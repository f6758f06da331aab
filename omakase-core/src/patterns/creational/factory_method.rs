//! Factory method: the restaurant decides which dinner it serves

use rand::Rng;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// A dinner produced by some restaurant's kitchen.
trait Food {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()>;
}

struct Ramen;

impl Food for Ramen {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("This is Ramen!")
    }
}

struct Sushi;

impl Food for Sushi {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("This is Sushi!")
    }
}

struct Curry;

impl Food for Curry {
    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("This is Curry!")
    }
}

/// Creator. Ordering lives here; the factory hook picks the dish.
trait Restaurant {
    fn cook(&self) -> Box<dyn Food>;

    fn have_dinner(&self, out: &mut Printer<'_>) -> Result<()> {
        self.cook().eat(out)
    }
}

struct RamenRestaurant;

impl Restaurant for RamenRestaurant {
    fn cook(&self) -> Box<dyn Food> {
        Box::new(Ramen)
    }
}

struct SushiRestaurant;

impl Restaurant for SushiRestaurant {
    fn cook(&self) -> Box<dyn Food> {
        Box::new(Sushi)
    }
}

struct IndianRestaurant;

impl Restaurant for IndianRestaurant {
    fn cook(&self) -> Box<dyn Food> {
        Box::new(Curry)
    }
}

/// Factory method, told as a dinner outing to a random restaurant.
pub struct FactoryMethodVignette;

impl Vignette for FactoryMethodVignette {
    fn name(&self) -> &'static str {
        "Factory Method"
    }

    fn key(&self) -> &'static str {
        "factory-method"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        narrate_with(out, &mut rand::thread_rng())
    }
}

fn narrate_with(out: &mut Printer<'_>, rng: &mut impl Rng) -> Result<()> {
    out.plain(
        "It's dinner time. I'm so hungry. I don't know what exactly I want \
         to eat. I'm just going to visit the nearest restaurant and order \
         their best meal.",
    )?;

    let restaurant = random_restaurant(rng);
    visit(restaurant.as_ref(), out)
}

fn visit(restaurant: &dyn Restaurant, out: &mut Printer<'_>) -> Result<()> {
    out.quote(
        "[Me] Hello. I don't know what type of restaurant this is. I don't \
         know what dishes you serve. Give me your best meal, please.",
    )?;

    restaurant.have_dinner(out)?;

    out.quote("[Me] That was very tasty. Thank you.")
}

fn random_restaurant(rng: &mut impl Rng) -> Box<dyn Restaurant> {
    match rng.gen_range(0..3) {
        0 => Box::new(RamenRestaurant),
        1 => Box::new(SushiRestaurant),
        _ => Box::new(IndianRestaurant),
    }
}

//! Visitor: weekday appetites priced by double dispatch

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// One visit method per concrete restaurant. Adding a restaurant means
/// touching every visitor; adding a visitor touches nothing else.
trait Visitor {
    fn visit_ramen_restaurant(
        &self,
        restaurant: &RamenRestaurant,
        out: &mut Printer<'_>,
    ) -> Result<()>;
    fn visit_sushi_restaurant(
        &self,
        restaurant: &SushiRestaurant,
        out: &mut Printer<'_>,
    ) -> Result<()>;
}

trait Component {
    fn accept(&self, visitor: &dyn Visitor, out: &mut Printer<'_>) -> Result<()>;
}

struct RamenRestaurant;

impl RamenRestaurant {
    fn price_ramen(&self) -> u32 {
        1000
    }

    fn price_beer(&self) -> u32 {
        500
    }
}

impl Component for RamenRestaurant {
    fn accept(&self, visitor: &dyn Visitor, out: &mut Printer<'_>) -> Result<()> {
        visitor.visit_ramen_restaurant(self, out)
    }
}

struct SushiRestaurant;

impl SushiRestaurant {
    fn price_sushi(&self) -> u32 {
        2000
    }

    fn price_sake(&self) -> u32 {
        800
    }
}

impl Component for SushiRestaurant {
    fn accept(&self, visitor: &dyn Visitor, out: &mut Printer<'_>) -> Result<()> {
        visitor.visit_sushi_restaurant(self, out)
    }
}

/// On Thursday dinner is food only.
struct ThursdayVisitor;

impl ThursdayVisitor {
    fn print(&self, name: &str, price: u32, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!(
            "Today is Thursday. I'm visiting a {name} restaurant to dine \
             without drinks. The cost of the dinner = {price}"
        ))
    }
}

impl Visitor for ThursdayVisitor {
    fn visit_ramen_restaurant(
        &self,
        restaurant: &RamenRestaurant,
        out: &mut Printer<'_>,
    ) -> Result<()> {
        self.print("Ramen", restaurant.price_ramen(), out)
    }

    fn visit_sushi_restaurant(
        &self,
        restaurant: &SushiRestaurant,
        out: &mut Printer<'_>,
    ) -> Result<()> {
        self.print("Sushi", restaurant.price_sushi(), out)
    }
}

/// On Friday the drinks come too.
struct FridayVisitor;

impl FridayVisitor {
    fn print(&self, name: &str, price: u32, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!(
            "Today is Friday. I'm visiting a {name} restaurant to dine with \
             drinks. The cost of the dinner = {price}"
        ))
    }
}

impl Visitor for FridayVisitor {
    fn visit_ramen_restaurant(
        &self,
        restaurant: &RamenRestaurant,
        out: &mut Printer<'_>,
    ) -> Result<()> {
        self.print(
            "Ramen",
            restaurant.price_ramen() + restaurant.price_beer(),
            out,
        )
    }

    fn visit_sushi_restaurant(
        &self,
        restaurant: &SushiRestaurant,
        out: &mut Printer<'_>,
    ) -> Result<()> {
        self.print(
            "Sushi",
            restaurant.price_sushi() + restaurant.price_sake(),
            out,
        )
    }
}

fn visit_restaurants(
    restaurants: &[Box<dyn Component>],
    visitor: &dyn Visitor,
    out: &mut Printer<'_>,
) -> Result<()> {
    for restaurant in restaurants {
        restaurant.accept(visitor, out)?;
    }
    Ok(())
}

/// Visitor, told as pricing two restaurants on two very different
/// weekdays.
pub struct VisitorVignette;

impl Vignette for VisitorVignette {
    fn name(&self) -> &'static str {
        "Visitor"
    }

    fn key(&self) -> &'static str {
        "visitor"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "Each restaurant visitor has his own food preferences. For \
             example, on Thursday I just want to have lunch, and on Friday \
             I also want to drink a little alcohol.",
        )?;

        let restaurants: Vec<Box<dyn Component>> =
            vec![Box::new(RamenRestaurant), Box::new(SushiRestaurant)];

        visit_restaurants(&restaurants, &ThursdayVisitor, out)?;
        visit_restaurants(&restaurants, &FridayVisitor, out)
    }
}

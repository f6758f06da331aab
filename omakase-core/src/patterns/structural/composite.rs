//! Composite: one check for the whole table, priced recursively

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait Component {
    fn name(&self) -> &str;
    fn price(&self) -> u32;
}

/// A single priced line on the check.
struct MenuItem {
    name: String,
    price: u32,
}

impl MenuItem {
    fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Component for MenuItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u32 {
        self.price
    }
}

/// A named group of items and sub-orders. Its price is the sum of its
/// children, however deeply they nest.
struct Order {
    name: String,
    children: RefCell<Vec<Rc<dyn Component>>>,
}

impl Order {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: RefCell::new(Vec::new()),
        }
    }

    fn add(&self, child: Rc<dyn Component>) {
        self.children.borrow_mut().push(child);
    }
}

impl Component for Order {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> u32 {
        self.children
            .borrow()
            .iter()
            .map(|child| child.price())
            .sum()
    }
}

fn print_price(component: &dyn Component, out: &mut Printer<'_>) -> Result<()> {
    out.plain(format!(
        "Price of {} = {}",
        component.name(),
        component.price()
    ))
}

/// Composite, told as splitting a restaurant check between friends.
pub struct CompositeVignette;

impl Vignette for CompositeVignette {
    fn name(&self) -> &'static str {
        "Composite"
    }

    fn key(&self) -> &'static str {
        "composite"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "We're going to visit a restauran. When we finish dinner, we have \
             to pay the check. But how do we calculate who spent how much? \
             Fortunately, the check is a composite.",
        )?;

        let total_order = Rc::new(Order::new("TotalOrder"));
        let my_order = Rc::new(Order::new("My Order"));
        let gf_order = Rc::new(Order::new("My GF's order"));

        let friends_ramen = Rc::new(MenuItem::new("Friend's ramen", 1000));
        let my_ramen = Rc::new(MenuItem::new("My ramen", 1200));
        let my_gyoza = Rc::new(MenuItem::new("My gyoza", 500));
        let my_beer = Rc::new(MenuItem::new("My beer", 400));
        let gf_mochi = Rc::new(MenuItem::new("Gf's mochi", 350));
        let gf_coffe = Rc::new(MenuItem::new("Gf's coffe", 250));

        total_order.add(friends_ramen);
        total_order.add(my_order.clone());

        my_order.add(my_ramen.clone());
        my_order.add(my_gyoza);
        my_order.add(my_beer);
        my_order.add(gf_order.clone());

        gf_order.add(gf_mochi);
        gf_order.add(gf_coffe);

        print_price(total_order.as_ref(), out)?;
        print_price(my_order.as_ref(), out)?;
        print_price(gf_order.as_ref(), out)?;
        print_price(my_ramen.as_ref(), out)
    }
}

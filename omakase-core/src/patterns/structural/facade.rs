//! Facade: one call hides the vending machine ritual

use std::collections::BTreeSet;
use std::rc::Rc;

use crate::error::{NarrationError, Result};
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// Subsystem 1: the menu behind the glass, kept in alphabetical order.
#[derive(Default)]
struct Menu {
    items: BTreeSet<String>,
}

impl Menu {
    fn add(&mut self, item: impl Into<String>) {
        self.items.insert(item.into());
    }

    fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }
}

/// Subsystem 2: the paper ticket the machine spits out.
#[derive(Debug)]
struct Ticket {
    name: String,
}

impl Ticket {
    fn new(name: impl Into<String>, out: &mut Printer<'_>) -> Result<Self> {
        let name = name.into();
        out.plain(format!("Ticket created: {name}"))?;
        Ok(Self { name })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Subsystem 3: the vending machine itself.
struct VendingMachine {
    menu: Rc<Menu>,
    selected: Option<String>,
    money: bool,
}

impl VendingMachine {
    fn new(menu: Rc<Menu>) -> Self {
        Self {
            menu,
            selected: None,
            money: false,
        }
    }

    fn insert_money(&mut self, out: &mut Printer<'_>) -> Result<()> {
        if !self.money {
            out.plain("Inseted money")?;
            self.money = true;
        }
        Ok(())
    }

    fn select_item(&mut self, item: &str, out: &mut Printer<'_>) -> Result<bool> {
        if self.menu.contains(item) {
            out.plain(format!("Chosen {item}"))?;
            self.selected = Some(item.to_owned());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn take_ticket(&mut self, out: &mut Printer<'_>) -> Result<Ticket> {
        if !self.money {
            return Err(NarrationError::MissingTicket {
                reason: String::from("no money inserted"),
            });
        }
        let name = self
            .selected
            .clone()
            .ok_or_else(|| NarrationError::MissingTicket {
                reason: String::from("no dish selected"),
            })?;
        self.money = false;
        Ticket::new(name, out)
    }
}

/// Subsystem 4: the chef waiting behind the counter.
struct Chef;

impl Chef {
    fn start_cooking(&self, ticket: Ticket, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!(
            "Chef got a ticket and started cooking {}",
            ticket.name()
        ))
    }
}

/// One entry point for the whole ordering ritual. Choose a dish, insert
/// money, take the ticket, bring it to the chef.
struct RamenOrderFacade {
    vending: VendingMachine,
    chef: Chef,
}

impl RamenOrderFacade {
    fn new(menu: Rc<Menu>) -> Self {
        Self {
            vending: VendingMachine::new(menu),
            chef: Chef,
        }
    }

    fn make_order(&mut self, dish: &str, out: &mut Printer<'_>) -> Result<()> {
        if !self.vending.select_item(dish, out)? {
            return Err(NarrationError::UnknownMenuItem(dish.to_owned()));
        }
        self.vending.insert_money(out)?;
        let ticket = self.vending.take_ticket(out)?;
        self.chef.start_cooking(ticket, out)
    }
}

fn house_menu() -> Menu {
    let mut menu = Menu::default();
    menu.add("shoyu ramen");
    menu.add("shio ramen");
    menu.add("miso ramen");
    menu.add("tonkotsu ramen");
    menu
}

/// Facade, told as ordering the first ramen on the menu in one move.
pub struct FacadeVignette;

impl Vignette for FacadeVignette {
    fn name(&self) -> &'static str {
        "Facade"
    }

    fn key(&self) -> &'static str {
        "facade"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "Ordering at a ramen restaurant is not easy. They usually use \
             vending machines, so you have to: choose a dish (if you can \
             read Japanese), put some money, get a ticket, give it to the \
             chef. This facade will help me not to starve to death.",
        )?;

        let menu = Rc::new(house_menu());
        let mut facade = RamenOrderFacade::new(Rc::clone(&menu));

        if let Some(first_on_menu) = menu.first() {
            facade.make_order(first_on_menu, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_is_sorted_so_miso_comes_first() {
        assert_eq!(house_menu().first(), Some("miso ramen"));
    }

    #[test]
    fn test_ticket_requires_money() {
        let mut buf = Vec::new();
        let mut out = Printer::new(&mut buf);
        let mut vending = VendingMachine::new(Rc::new(house_menu()));
        vending.select_item("miso ramen", &mut out).unwrap();

        let err = vending.take_ticket(&mut out).unwrap_err();
        assert_eq!(err.to_string(), "no ticket issued: no money inserted");
    }

    #[test]
    fn test_ticket_requires_a_selection() {
        let mut buf = Vec::new();
        let mut out = Printer::new(&mut buf);
        let mut vending = VendingMachine::new(Rc::new(house_menu()));
        vending.insert_money(&mut out).unwrap();

        let err = vending.take_ticket(&mut out).unwrap_err();
        assert_eq!(err.to_string(), "no ticket issued: no dish selected");
    }

    #[test]
    fn test_ordering_off_menu_fails() {
        let mut buf = Vec::new();
        let mut out = Printer::new(&mut buf);
        let mut facade = RamenOrderFacade::new(Rc::new(house_menu()));

        let err = facade.make_order("borscht", &mut out).unwrap_err();
        assert!(matches!(err, NarrationError::UnknownMenuItem(_)));
        assert_eq!(err.to_string(), "'borscht' is not on the menu");
    }

    #[test]
    fn test_narration_orders_the_first_ramen() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            FacadeVignette.narrate(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(output.ends_with(concat!(
            "\nChosen miso ramen",
            "\nInseted money",
            "\nTicket created: miso ramen",
            "\nChef got a ticket and started cooking miso ramen",
        )));
    }
}

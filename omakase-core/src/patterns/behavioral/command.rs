//! Command: orders are objects the waiter can replay or take back

use std::rc::Rc;

use crate::error::{NarrationError, Result};
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// Receiver. The chef does the actual cooking.
struct Chef;

impl Chef {
    fn cook(&self, meal: &str, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("Cooking {meal}"))
    }

    fn stop_cooking(&self, meal: &str, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("Stop cooking {meal}"))
    }
}

trait Command {
    fn execute(&self, out: &mut Printer<'_>) -> Result<()>;
    fn undo(&self, out: &mut Printer<'_>) -> Result<()>;
}

struct CookRamen {
    chef: Rc<Chef>,
}

impl Command for CookRamen {
    fn execute(&self, out: &mut Printer<'_>) -> Result<()> {
        self.chef.cook("Ramen", out)
    }

    fn undo(&self, out: &mut Printer<'_>) -> Result<()> {
        self.chef.stop_cooking("Ramen", out)
    }
}

struct CookGyoza {
    chef: Rc<Chef>,
}

impl Command for CookGyoza {
    fn execute(&self, out: &mut Printer<'_>) -> Result<()> {
        self.chef.cook("Gyoza", out)
    }

    fn undo(&self, out: &mut Printer<'_>) -> Result<()> {
        self.chef.stop_cooking("Gyoza", out)
    }
}

/// Executed commands, newest on top, so the latest order is the first
/// one a cancellation reaches.
#[derive(Default)]
struct CommandHistory {
    history: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    fn push(&mut self, command: Box<dyn Command>) {
        self.history.push(command);
    }

    fn pop(&mut self) -> Result<Box<dyn Command>> {
        self.history.pop().ok_or(NarrationError::EmptyHistory)
    }
}

/// Invoker. The waiter turns orders into commands and keeps the history.
struct Waiter {
    chef: Rc<Chef>,
    history: CommandHistory,
}

impl Waiter {
    fn new() -> Self {
        Self {
            chef: Rc::new(Chef),
            history: CommandHistory::default(),
        }
    }

    fn order_ramen(&mut self, out: &mut Printer<'_>) -> Result<()> {
        let command = Box::new(CookRamen {
            chef: Rc::clone(&self.chef),
        });
        self.execute(command, out)
    }

    fn order_gyoza(&mut self, out: &mut Printer<'_>) -> Result<()> {
        let command = Box::new(CookGyoza {
            chef: Rc::clone(&self.chef),
        });
        self.execute(command, out)
    }

    fn cancel_last_order(&mut self, out: &mut Printer<'_>) -> Result<()> {
        self.history.pop()?.undo(out)
    }

    fn execute(&mut self, command: Box<dyn Command>, out: &mut Printer<'_>) -> Result<()> {
        command.execute(out)?;
        self.history.push(command);
        Ok(())
    }
}

/// Command, told as a dinner order the waiter can cancel afterwards.
pub struct CommandVignette;

impl Vignette for CommandVignette {
    fn name(&self) -> &'static str {
        "Command"
    }

    fn key(&self) -> &'static str {
        "command"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "We're visiting a ramen restaurant. We're going to order 2 bowls \
             or ramen",
        )?;

        let mut waiter = Waiter::new();
        waiter.order_ramen(out)?;
        waiter.order_ramen(out)?;

        out.quote("A friend of mine also decided to order some gyoza")?;
        waiter.order_gyoza(out)?;

        out.quote(
            "But we don't have enough money and cannot afford these gyoza. \
             So we asked the waiter for a cancelation",
        )?;
        waiter.cancel_last_order(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_reverses_the_latest_order() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            let mut waiter = Waiter::new();
            waiter.order_ramen(&mut out).unwrap();
            waiter.order_gyoza(&mut out).unwrap();
            waiter.cancel_last_order(&mut out).unwrap();
            waiter.cancel_last_order(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            concat!(
                "\nCooking Ramen",
                "\nCooking Gyoza",
                "\nStop cooking Gyoza",
                "\nStop cooking Ramen",
            )
        );
    }

    #[test]
    fn test_cancelling_with_no_orders_fails() {
        let mut buf = Vec::new();
        let mut out = Printer::new(&mut buf);
        let mut waiter = Waiter::new();

        let err = waiter.cancel_last_order(&mut out).unwrap_err();
        assert!(matches!(err, NarrationError::EmptyHistory));
        assert_eq!(err.to_string(), "nothing to undo: the history is empty");
    }

    #[test]
    fn test_narration_cancels_only_the_gyoza() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            CommandVignette.narrate(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.matches("Cooking Ramen").count(), 2);
        assert_eq!(output.matches("Cooking Gyoza").count(), 1);
        assert!(output.ends_with("\nStop cooking Gyoza"));
    }
}

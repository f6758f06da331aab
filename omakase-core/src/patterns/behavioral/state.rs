//! State: a promo state machine slips a free gyoza into the order flow

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// Free gyoza after every this many ramen orders.
const BONUS_GYOZA_THRESHOLD: u32 = 3;

trait State {
    fn name(&self) -> &'static str;
    fn cook(self: Box<Self>, restaurant: &mut Restaurant, out: &mut Printer<'_>) -> Result<()>;
}

/// Context. Orders go to whatever state is currently installed.
struct Restaurant {
    state: Option<Box<dyn State>>,
}

impl Restaurant {
    fn new(state: Box<dyn State>, out: &mut Printer<'_>) -> Result<Self> {
        let mut restaurant = Self { state: None };
        restaurant.set_state(state, out)?;
        Ok(restaurant)
    }

    fn set_state(&mut self, state: Box<dyn State>, out: &mut Printer<'_>) -> Result<()> {
        out.quote(format!("New context state: {}.", state.name()))?;
        self.state = Some(state);
        Ok(())
    }

    /// Reinstalls a state without announcing a change.
    fn keep_state(&mut self, state: Box<dyn State>) {
        self.state = Some(state);
    }

    fn make_order(&mut self, out: &mut Printer<'_>) -> Result<()> {
        match self.state.take() {
            Some(state) => state.cook(self, out),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct StateRamen {
    orders: u32,
}

impl State for StateRamen {
    fn name(&self) -> &'static str {
        "StateRamen"
    }

    fn cook(mut self: Box<Self>, restaurant: &mut Restaurant, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Ramen: Cooking ramen")?;

        self.orders += 1;
        let bonus_due = self.orders % BONUS_GYOZA_THRESHOLD == 0;
        restaurant.keep_state(self);

        if bonus_due {
            restaurant.set_state(Box::new(StateBonusGyoza), out)?;
            restaurant.make_order(out)?;
        }
        Ok(())
    }
}

struct StateBonusGyoza;

impl State for StateBonusGyoza {
    fn name(&self) -> &'static str {
        "StateBonusGyoza"
    }

    fn cook(self: Box<Self>, restaurant: &mut Restaurant, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Gyoza: Cooking bonus gyoza")?;
        out.plain("Gyoza: restore the previous state")?;
        restaurant.set_state(Box::new(StateRamen::default()), out)
    }
}

/// State, told as a loyalty promo that interrupts every third ramen order
/// with a bonus gyoza.
pub struct StateVignette;

impl Vignette for StateVignette {
    fn name(&self) -> &'static str {
        "State"
    }

    fn key(&self) -> &'static str {
        "state"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(format!(
            "There is a promo in our restaurant. We give you free gyoza \
             after every {BONUS_GYOZA_THRESHOLD} ramen orders"
        ))?;

        let mut restaurant = Restaurant::new(Box::new(StateRamen::default()), out)?;

        for i in 1..=BONUS_GYOZA_THRESHOLD + 1 {
            out.plain(format!("order {i}: "))?;
            restaurant.make_order(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_serves_the_bonus_on_the_third_order() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            StateVignette.narrate(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            concat!(
                "\n> There is a promo in our restaurant. We give you free gyoza \
                 after every 3 ramen orders",
                "\n> New context state: StateRamen.",
                "\norder 1: ",
                "\nRamen: Cooking ramen",
                "\norder 2: ",
                "\nRamen: Cooking ramen",
                "\norder 3: ",
                "\nRamen: Cooking ramen",
                "\n> New context state: StateBonusGyoza.",
                "\nGyoza: Cooking bonus gyoza",
                "\nGyoza: restore the previous state",
                "\n> New context state: StateRamen.",
                "\norder 4: ",
                "\nRamen: Cooking ramen",
            )
        );
    }

    #[test]
    fn test_bonus_returns_every_three_ramen_orders() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            let mut restaurant =
                Restaurant::new(Box::new(StateRamen::default()), &mut out).unwrap();
            for _ in 0..7 {
                restaurant.make_order(&mut out).unwrap();
            }
        }
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.matches("Gyoza: Cooking bonus gyoza").count(), 2);
        assert_eq!(output.matches("Ramen: Cooking ramen").count(), 7);
    }
}

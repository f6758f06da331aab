//! Interpreter: the waiter's tiny order language

use std::collections::BTreeMap;

use crate::error::{NarrationError, Result};
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// A node of the order grammar. Every node can quote itself back and
/// knows the price of the order it stands for.
trait Expression: std::fmt::Debug {
    fn price(&self) -> u32;
    fn written(&self) -> String;
}

/// Terminal: a single menu word.
#[derive(Debug)]
struct Dish {
    name: String,
    price: u32,
}

impl Expression for Dish {
    fn price(&self) -> u32 {
        self.price
    }

    fn written(&self) -> String {
        self.name.clone()
    }
}

/// Nonterminal: two orders joined by '+'.
#[derive(Debug)]
struct Add {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl Expression for Add {
    fn price(&self) -> u32 {
        self.left.price() + self.right.price()
    }

    fn written(&self) -> String {
        format!("({} + {})", self.left.written(), self.right.written())
    }
}

struct PriceList {
    prices: BTreeMap<&'static str, u32>,
}

impl PriceList {
    fn house() -> Self {
        let mut prices = BTreeMap::new();
        prices.insert("ramen", 1000);
        prices.insert("gyoza", 500);
        prices.insert("beer", 750);
        prices.insert("mochi", 350);
        PriceList { prices }
    }

    fn dish(&self, word: &str) -> Result<Dish> {
        let price = self
            .prices
            .get(word)
            .copied()
            .ok_or_else(|| NarrationError::UnknownMenuItem(word.to_string()))?;
        Ok(Dish {
            name: word.to_string(),
            price,
        })
    }

    fn describe(&self) -> String {
        let entries: Vec<String> = self
            .prices
            .iter()
            .map(|(name, price)| format!("{name} = {price}"))
            .collect();
        entries.join(", ")
    }
}

/// Reads an order sentence of menu words joined by '+' and builds the
/// expression tree. An off-menu word fails the whole sentence.
fn parse(order: &str, menu: &PriceList) -> Result<Box<dyn Expression>> {
    let mut words = order.split('+').map(str::trim);
    let first = words.next().unwrap_or("");
    let mut expression: Box<dyn Expression> = Box::new(menu.dish(first)?);
    for word in words {
        expression = Box::new(Add {
            left: expression,
            right: Box::new(menu.dish(word)?),
        });
    }
    Ok(expression)
}

/// Interpreter, told as a waiter who understands orders written in a
/// one-operator language and turns them into a check.
pub struct InterpreterVignette;

impl InterpreterVignette {
    fn order(&self, sentence: &str, menu: &PriceList, out: &mut Printer<'_>) -> Result<()> {
        out.quote(format!("[Me] {sentence}, please"))?;
        let expression = parse(sentence, menu)?;
        out.plain(format!("The waiter reads it as {}", expression.written()))?;
        out.plain(format!("That comes to {}", expression.price()))
    }
}

impl Vignette for InterpreterVignette {
    fn name(&self) -> &'static str {
        "Interpreter"
    }

    fn key(&self) -> &'static str {
        "interpreter"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "The waiter in this restaurant understands a tiny order \
             language. An order is menu words joined by '+', and the price \
             of the order is the meaning of the sentence.",
        )?;

        let menu = PriceList::house();
        out.plain(format!("On the menu: {}", menu.describe()))?;

        self.order("mochi", &menu, out)?;
        self.order("ramen + gyoza + beer", &menu, out)?;

        out.quote("[Me] ramen + caviar, please")?;
        if let Err(err) = parse("ramen + caviar", &menu) {
            out.plain(format!("Order refused: {err}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_is_a_terminal() {
        let menu = PriceList::house();
        let expression = parse("mochi", &menu).unwrap();
        assert_eq!(expression.price(), 350);
        assert_eq!(expression.written(), "mochi");
    }

    #[test]
    fn test_sums_fold_to_the_left() {
        let menu = PriceList::house();
        let expression = parse("ramen + gyoza + beer", &menu).unwrap();
        assert_eq!(expression.price(), 2250);
        assert_eq!(expression.written(), "((ramen + gyoza) + beer)");
    }

    #[test]
    fn test_whitespace_around_words_does_not_matter() {
        let menu = PriceList::house();
        assert_eq!(parse("ramen+gyoza", &menu).unwrap().price(), 1500);
        assert_eq!(parse("  ramen  +  gyoza  ", &menu).unwrap().price(), 1500);
    }

    #[test]
    fn test_off_menu_word_fails_the_sentence() {
        let menu = PriceList::house();
        let err = parse("ramen + caviar", &menu).unwrap_err();
        assert!(matches!(err, NarrationError::UnknownMenuItem(ref word) if word == "caviar"));
        assert_eq!(err.to_string(), "'caviar' is not on the menu");
    }

    #[test]
    fn test_empty_order_is_not_on_the_menu() {
        let menu = PriceList::house();
        let err = parse("", &menu).unwrap_err();
        assert!(matches!(err, NarrationError::UnknownMenuItem(ref word) if word.is_empty()));
    }

    #[test]
    fn test_narration_prices_orders_and_refuses_caviar() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            InterpreterVignette.narrate(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("On the menu: beer = 750, gyoza = 500, mochi = 350, ramen = 1000"));
        assert!(output.ends_with(concat!(
            "\n> [Me] mochi, please",
            "\nThe waiter reads it as mochi",
            "\nThat comes to 350",
            "\n> [Me] ramen + gyoza + beer, please",
            "\nThe waiter reads it as ((ramen + gyoza) + beer)",
            "\nThat comes to 2250",
            "\n> [Me] ramen + caviar, please",
            "\nOrder refused: 'caviar' is not on the menu",
        )));
    }
}

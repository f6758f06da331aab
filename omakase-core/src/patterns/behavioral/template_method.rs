//! Template Method: dinner always follows the same steps, each cuisine
//! fills in its own

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// The dinner skeleton. `have_dinner` is the template method; utensils
/// are a required step, the greeting and the cleanup are hooks.
trait Dinner {
    fn name(&self) -> &'static str;

    fn take_utensils(&self, out: &mut Printer<'_>) -> Result<()>;

    fn say_bon_appetit(&self, _out: &mut Printer<'_>) -> Result<()> {
        Ok(())
    }

    fn clear_table(&self, _out: &mut Printer<'_>) -> Result<()> {
        Ok(())
    }

    fn have_dinner(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Wash hands")?;
        out.plain("Make the order")?;
        self.say_bon_appetit(out)?;
        self.take_utensils(out)?;
        out.plain("Eat")?;
        out.plain("Finish")?;
        self.clear_table(out)
    }
}

struct Ramen;

impl Dinner for Ramen {
    fn name(&self) -> &'static str {
        "Ramen"
    }

    fn take_utensils(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Take chopsticks")
    }

    fn say_bon_appetit(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Itadakimasu")
    }
}

struct Kfc;

impl Dinner for Kfc {
    fn name(&self) -> &'static str {
        "KFC"
    }

    fn take_utensils(&self, _out: &mut Printer<'_>) -> Result<()> {
        // hands only
        Ok(())
    }

    fn clear_table(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Clear the table")
    }
}

fn eat_out(dinner: &dyn Dinner, out: &mut Printer<'_>) -> Result<()> {
    out.quote(format!("I'm going to eat {}", dinner.name()))?;
    dinner.have_dinner(out)
}

/// Template Method, told as two dinners walking the same checklist.
pub struct TemplateMethodVignette;

impl Vignette for TemplateMethodVignette {
    fn name(&self) -> &'static str {
        "Template Method"
    }

    fn key(&self) -> &'static str {
        "template-method"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "Eating dinner consists of the same steps. However, depending on \
             the dish or restaurant, the implementation of these steps may \
             differ.",
        )?;

        eat_out(&Ramen, out)?;
        eat_out(&Kfc, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dinner_steps(dinner: &dyn Dinner) -> String {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            dinner.have_dinner(&mut out).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_ramen_dinner_greets_and_takes_chopsticks() {
        assert_eq!(
            dinner_steps(&Ramen),
            concat!(
                "\nWash hands",
                "\nMake the order",
                "\nItadakimasu",
                "\nTake chopsticks",
                "\nEat",
                "\nFinish",
            )
        );
    }

    #[test]
    fn test_kfc_dinner_skips_utensils_but_clears_the_table() {
        assert_eq!(
            dinner_steps(&Kfc),
            concat!(
                "\nWash hands",
                "\nMake the order",
                "\nEat",
                "\nFinish",
                "\nClear the table",
            )
        );
    }

    #[test]
    fn test_narration_eats_ramen_first() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            TemplateMethodVignette.narrate(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        let ramen_at = output.find("I'm going to eat Ramen").unwrap();
        let kfc_at = output.find("I'm going to eat KFC").unwrap();
        assert!(ramen_at < kfc_at);
        assert!(output.ends_with("\nClear the table"));
    }
}

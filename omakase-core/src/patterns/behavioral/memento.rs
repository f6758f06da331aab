//! Memento: recipe snapshots make a failed experiment reversible

use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::error::{NarrationError, Result};
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// A frozen copy of the recipe. Only the originator reads the state back;
/// the caretaker sees nothing but the metadata line.
struct Snapshot {
    state: String,
    date: String,
}

impl Snapshot {
    fn new(state: String) -> Self {
        let date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self { state, date }
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn meta(&self) -> String {
        format!("{} / {}", self.date, self.state)
    }
}

/// Originator. The recipe is a comma-separated ingredient list.
struct RamenRecipe {
    state: String,
}

impl RamenRecipe {
    fn new(state: &str, out: &mut Printer<'_>) -> Result<Self> {
        out.plain(format!("Originator's initial state = {state}"))?;
        Ok(Self {
            state: state.to_owned(),
        })
    }

    fn add_ingredient(&mut self, ingredient: &str, out: &mut Printer<'_>) -> Result<()> {
        self.state.push_str(", ");
        self.state.push_str(ingredient);
        out.plain(format!("Originator's new state: {}", self.state))
    }

    fn save(&self) -> Snapshot {
        Snapshot::new(self.state.clone())
    }

    fn restore(&mut self, snapshot: Snapshot, out: &mut Printer<'_>) -> Result<()> {
        self.state = snapshot.state;
        out.plain(format!("Originator' state restored: {}", self.state))
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// Caretaker. Keeps the snapshots without ever cooking from them.
#[derive(Default)]
struct Caretaker {
    history: Vec<Snapshot>,
}

impl Caretaker {
    fn backup(&mut self, recipe: &RamenRecipe, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Caretaker: Saving Originator's state.")?;
        self.history.push(recipe.save());
        Ok(())
    }

    fn undo(&mut self, recipe: &mut RamenRecipe, out: &mut Printer<'_>) -> Result<()> {
        let snapshot = self.history.pop().ok_or(NarrationError::EmptyHistory)?;
        out.plain(format!(
            "Caretaker is restoring the state from '{}' to '{}'",
            recipe.state(),
            snapshot.state()
        ))?;
        recipe.restore(snapshot, out)
    }

    fn print_history(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Caretaker: List of snapshots")?;
        for snapshot in &self.history {
            out.plain(snapshot.meta())?;
        }
        Ok(())
    }
}

fn wait_for_feedback() {
    thread::sleep(Duration::from_millis(100));
}

/// Memento, told as a chef tasting recipe changes and rolling back the
/// one the customers hated.
pub struct MementoVignette;

impl Vignette for MementoVignette {
    fn name(&self) -> &'static str {
        "Memento"
    }

    fn key(&self) -> &'static str {
        "memento"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "I'm a chef in a ramen restaurant. I want to make the best \
             ramen. I will change the recipe and receive feedback from \
             customers. If the customers are unhappy, we should be able to \
             roll back the recipe to the last successful state.",
        )?;

        let mut recipe = RamenRecipe::new("soup, noodles", out)?;
        let mut chef = Caretaker::default();

        wait_for_feedback();
        chef.backup(&recipe, out)?;

        add_new_ingredient(&mut recipe, "egg", out)?;
        out.quote("I've added an egg to the recipe and sales went up")?;
        chef.backup(&recipe, out)?;

        add_new_ingredient(&mut recipe, "nori", out)?;
        out.quote("I've added nori to the recipe and sales went up")?;
        chef.backup(&recipe, out)?;

        add_new_ingredient(&mut recipe, "bacon", out)?;
        out.quote(
            "I've added bacon to the recipe and sales dropped. Let's restore \
             the previous state.",
        )?;

        chef.print_history(out)?;
        chef.undo(&mut recipe, out)
    }
}

fn add_new_ingredient(recipe: &mut RamenRecipe, item: &str, out: &mut Printer<'_>) -> Result<()> {
    out.quote(format!("Let's add {item}"))?;
    recipe.add_ingredient(item, out)?;
    wait_for_feedback();
    Ok(())
}

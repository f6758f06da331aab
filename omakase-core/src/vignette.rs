//! The vignette capability trait and catalogue categories

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::printer::Printer;

/// Catalogue grouping of a vignette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Object creation patterns
    Creational,
    /// Object composition patterns
    Structural,
    /// Object interaction patterns
    Behavioral,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        };
        f.write_str(label)
    }
}

/// A narrated design pattern demonstration.
///
/// Serving a vignette prints its name as a section title, then runs the
/// scripted narration. Narrations write through the [`Printer`] and
/// propagate failures instead of recovering locally.
pub trait Vignette {
    /// Display name, printed as the section title.
    fn name(&self) -> &'static str;

    /// Stable kebab-case identifier used for selection and listing.
    fn key(&self) -> &'static str;

    /// Catalogue grouping.
    fn category(&self) -> Category;

    /// The scripted narration body.
    fn narrate(&self, out: &mut Printer<'_>) -> Result<()>;

    /// Print the title, then narrate.
    fn serve(&self, out: &mut Printer<'_>) -> Result<()> {
        out.title(self.name())?;
        self.narrate(out)
    }
}

impl fmt::Debug for dyn Vignette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vignette").field("key", &self.key()).finish()
    }
}

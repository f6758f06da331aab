//! Design pattern vignettes served restaurant style
//!
//! This crate narrates the twenty-three classic object-oriented design
//! patterns as short scenes set in and around a ramen restaurant. Each
//! vignette is a self-contained toy hierarchy plus a scripted scene that
//! prints what happens when the pattern is exercised.
//!
//! # Architecture
//!
//! Three layers cooperate:
//! - **Printer**: a small state machine that turns style markers (plain,
//!   quote, title) into Markdown-flavoured separators and writes segments
//!   to any sink. The caller owns it and passes it down; there is no
//!   global output state.
//! - **Vignettes**: one module per pattern under [`patterns`], each
//!   exposing a unit struct implementing the [`Vignette`] trait.
//! - **Catalogue**: the fixed serving order of all vignettes, with keyed
//!   lookup for running a single one.
//!
//! # Example
//!
//! ```rust
//! use omakase_core::{catalogue, Printer};
//!
//! let mut buf = Vec::new();
//! {
//!     let mut out = Printer::new(&mut buf);
//!     let vignette = catalogue::find("bridge")?;
//!     vignette.serve(&mut out)?;
//!     out.finish()?;
//! }
//!
//! let narration = String::from_utf8(buf)?;
//! assert!(narration.starts_with("\n\n### Bridge"));
//! assert!(narration.ends_with('\n'));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod catalogue;
pub mod error;
pub mod patterns;
pub mod printer;
pub mod style;
pub mod vignette;

pub use error::{NarrationError, Result};
pub use printer::Printer;
pub use style::Style;
pub use vignette::{Category, Vignette};

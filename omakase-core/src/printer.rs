//! Style-aware narration printer

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::style::Style;

/// Appends narration segments to a sink, inserting the separator the
/// style transition table dictates.
///
/// A printer starts in plain-text state and remembers only the style of
/// the most recent segment. Segment text carries no line breaks of its
/// own; all line structure comes from the separators.
pub struct Printer<'w> {
    writer: &'w mut dyn Write,
    state: Style,
}

impl<'w> Printer<'w> {
    /// Create a printer over `writer`, starting in plain-text state.
    pub fn new(writer: &'w mut dyn Write) -> Self {
        Self {
            writer,
            state: Style::Plain,
        }
    }

    /// Style of the most recently applied segment.
    pub fn state(&self) -> Style {
        self.state
    }

    /// Switch to `style`, writing the transition separator.
    pub fn apply(&mut self, style: Style) -> Result<()> {
        self.writer.write_all(style.separator(self.state).as_bytes())?;
        self.state = style;
        Ok(())
    }

    /// Write `text` as a plain segment.
    pub fn plain(&mut self, text: impl fmt::Display) -> Result<()> {
        self.apply(Style::Plain)?;
        write!(self.writer, "{text}")?;
        Ok(())
    }

    /// Write `text` as a quoted line.
    pub fn quote(&mut self, text: impl fmt::Display) -> Result<()> {
        self.apply(Style::Quote)?;
        write!(self.writer, "{text}")?;
        Ok(())
    }

    /// Write `text` as a section title.
    pub fn title(&mut self, text: impl fmt::Display) -> Result<()> {
        self.apply(Style::Title)?;
        write!(self.writer, "{text}")?;
        Ok(())
    }

    /// End the narration on a fresh line and flush the sink.
    pub fn finish(&mut self) -> Result<()> {
        self.apply(Style::Plain)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Narration styles and the separator transition table

use crate::error::NarrationError;

/// Output style of a narration segment.
///
/// The printer remembers the style of the previous segment; the pair of
/// previous and requested style selects a separator from a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Plain body text
    Plain,
    /// A spoken line, prefixed with `"> "`
    Quote,
    /// A section title, prefixed with `"### "`
    Title,
}

impl Style {
    /// Separator written when the narration switches from `prev` to `self`.
    ///
    /// Titles always stand two newlines clear of whatever came before, and
    /// anything following a title gets the same clearance. Plain and quote
    /// segments otherwise continue on the next line.
    pub fn separator(self, prev: Style) -> &'static str {
        match (prev, self) {
            (Style::Title, Style::Plain) => "\n\n",
            (_, Style::Plain) => "\n",
            (Style::Title, Style::Quote) => "\n\n> ",
            (_, Style::Quote) => "\n> ",
            (_, Style::Title) => "\n\n### ",
        }
    }
}

impl TryFrom<u8> for Style {
    type Error = NarrationError;

    /// Maps raw style codes to styles: 0 is plain, 1 is quote, 2 is title.
    /// Anything else is rejected as unsupported.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Style::Plain),
            1 => Ok(Style::Quote),
            2 => Ok(Style::Title),
            other => Err(NarrationError::UnsupportedStyle { code: other }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_into_plain() {
        assert_eq!(Style::Plain.separator(Style::Plain), "\n");
        assert_eq!(Style::Plain.separator(Style::Quote), "\n");
        assert_eq!(Style::Plain.separator(Style::Title), "\n\n");
    }

    #[test]
    fn test_separator_into_quote() {
        assert_eq!(Style::Quote.separator(Style::Plain), "\n> ");
        assert_eq!(Style::Quote.separator(Style::Quote), "\n> ");
        assert_eq!(Style::Quote.separator(Style::Title), "\n\n> ");
    }

    #[test]
    fn test_separator_into_title_ignores_previous_state() {
        assert_eq!(Style::Title.separator(Style::Plain), "\n\n### ");
        assert_eq!(Style::Title.separator(Style::Quote), "\n\n### ");
        assert_eq!(Style::Title.separator(Style::Title), "\n\n### ");
    }

    #[test]
    fn test_try_from_known_codes() {
        assert_eq!(Style::try_from(0).unwrap(), Style::Plain);
        assert_eq!(Style::try_from(1).unwrap(), Style::Quote);
        assert_eq!(Style::try_from(2).unwrap(), Style::Title);
    }

    #[test]
    fn test_try_from_unknown_code() {
        let error = Style::try_from(9).unwrap_err();
        assert!(matches!(
            error,
            NarrationError::UnsupportedStyle { code: 9 }
        ));
    }
}

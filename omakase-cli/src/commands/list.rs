//! List command implementation

use clap::Args;
use omakase_core::{catalogue, Category};
use serde::Serialize;

use crate::error::CliResult;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

/// Supported list formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ListFormat {
    /// Aligned key, name, and category columns
    Text,
    /// JSON array of catalogue entries
    Json,
}

/// One catalogue row as shown by `list`.
#[derive(Debug, Serialize)]
pub struct MenuEntry {
    /// Selection key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Catalogue grouping
    pub category: Category,
}

fn entries() -> Vec<MenuEntry> {
    catalogue::menu()
        .iter()
        .map(|vignette| MenuEntry {
            key: vignette.key(),
            name: vignette.name(),
            category: vignette.category(),
        })
        .collect()
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> CliResult<String> {
        let entries = entries();
        match self.format {
            ListFormat::Text => {
                let mut listing = String::new();
                for entry in &entries {
                    listing.push_str(&format!(
                        "{:<24} {:<24} {}\n",
                        entry.key, entry.name, entry.category
                    ));
                }
                Ok(listing)
            }
            ListFormat::Json => {
                let json = serde_json::to_string_pretty(&entries)?;
                Ok(format!("{json}\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_the_whole_catalogue() {
        let entries = entries();
        assert_eq!(entries.len(), 23);
        assert_eq!(entries[0].key, "factory-method");
        assert_eq!(entries[22].key, "visitor");
    }

    #[test]
    fn test_text_listing_aligns_key_name_and_category() {
        let args = ListArgs {
            format: ListFormat::Text,
        };
        let listing = args.render().unwrap();

        assert!(listing
            .lines()
            .any(|line| line.starts_with("factory-method") && line.ends_with("creational")));
        assert!(listing.contains("chain-of-responsibility  Chain of Responsibility  behavioral"));
        assert_eq!(listing.lines().count(), 23);
    }

    #[test]
    fn test_json_listing_parses_back() {
        let args = ListArgs {
            format: ListFormat::Json,
        };
        let listing = args.render().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&listing).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 23);
        assert_eq!(rows[0]["key"], "factory-method");
        assert_eq!(rows[0]["category"], "creational");
        assert_eq!(rows[22]["name"], "Visitor");
    }
}

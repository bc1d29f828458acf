//! Contains the [`FormattedEntry`] produced by a lookup and the [`Template`]s used to print it.

use std::fmt;

/// A book found in the catalog, ready to be printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedEntry {
    /// The title suggested by the catalog.
    pub title: String,
    /// The `author`, `publisher`, `ISBN` and `year` lines.
    pub description: String,
}

impl FormattedEntry {
    pub(crate) fn new<Y: fmt::Display>(
        title: String,
        authors: &[String],
        publisher: &str,
        isbn: &str,
        year: Y,
    ) -> Self {
        let description = format!(
            "author:    {}\npublisher: {publisher}\nISBN:      {isbn}\nyear:      {year}",
            authors.join(", ")
        );

        Self { title, description }
    }
}

/// The text layouts a [`FormattedEntry`] can be rendered in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Template {
    /// `title:` line followed by the description.
    #[default]
    Plain,
    /// A commit message with a `[BOOK]` subject line.
    Commit,
}

impl Template {
    /// Renders the `entry` using this template.
    #[must_use]
    pub fn render(self, entry: &FormattedEntry) -> String {
        let FormattedEntry { title, description } = entry;
        match self {
            Self::Plain => format!("title:     {title}\n{description}"),
            Self::Commit => format!("[BOOK] {title}\n\n{description}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormattedEntry, Template};

    fn dune() -> FormattedEntry {
        FormattedEntry::new(
            "Dune".to_owned(),
            &["Frank Herbert".to_owned()],
            "Chilton Books",
            "0441013597",
            1965,
        )
    }

    #[test]
    fn description_lines_are_aligned() {
        assert_eq!(
            "author:    Frank Herbert\npublisher: Chilton Books\nISBN:      0441013597\nyear:      1965",
            dune().description
        );
    }

    #[test]
    fn authors_are_comma_separated() {
        let entry = FormattedEntry::new(
            "Good Omens".to_owned(),
            &["Terry Pratchett".to_owned(), "Neil Gaiman".to_owned()],
            "Gollancz",
            "0575048530",
            "1990",
        );
        assert!(entry
            .description
            .starts_with("author:    Terry Pratchett, Neil Gaiman\n"));
    }

    #[test]
    fn plain_template() {
        assert_eq!(
            "title:     Dune\nauthor:    Frank Herbert\npublisher: Chilton Books\nISBN:      0441013597\nyear:      1965",
            Template::Plain.render(&dune())
        );
    }

    #[test]
    fn commit_template() {
        assert_eq!(
            "[BOOK] Dune\n\nauthor:    Frank Herbert\npublisher: Chilton Books\nISBN:      0441013597\nyear:      1965",
            Template::Commit.render(&dune())
        );
    }
}

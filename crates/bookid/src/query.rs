//! The search terms sent to the catalog.

use std::fmt;

/// A search against the catalog, either free text or targeted at a title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// A single search string sent as is.
    Text(String),
    /// A targeted search by title, optionally narrowed by author.
    ///
    /// The year is not sent to the catalog and is only kept to describe the query when nothing
    /// is found.
    Title {
        /// Title of the book.
        title: String,
        /// Author of the book.
        author: Option<String>,
        /// Year the book was published.
        year: Option<String>,
    },
}

impl Query {
    /// Creates a free text [`Query`].
    #[must_use]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Creates a titled [`Query`].
    #[must_use]
    pub fn title<S: Into<String>>(title: S, author: Option<&str>, year: Option<&str>) -> Self {
        Self::Title {
            title: title.into(),
            author: author.map(str::to_owned),
            year: year.map(str::to_owned),
        }
    }

    /// The query parameters this query is sent as.
    ///
    /// A free text query is only ever the `q` parameter, a titled query is `title` followed by
    /// `author` when one is present.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Text(text) => vec![("q", text.as_str())],
            Self::Title { title, author, .. } => {
                let mut params = vec![("title", title.as_str())];
                if let Some(author) = author {
                    params.push(("author", author.as_str()));
                }
                params
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "'{text}'"),
            Self::Title {
                title,
                author,
                year,
            } => {
                write!(f, "title '{title}'")?;
                if let Some(author) = author {
                    write!(f, ", author '{author}'")?;
                }
                if let Some(year) = year {
                    write!(f, ", year '{year}'")?;
                }
                Ok(())
            }
        }
    }
}

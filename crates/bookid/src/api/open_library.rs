use std::{fmt, path::Path};

use log::{debug, info, trace};
use reqwest::Url;
use serde::Deserialize;

use crate::{format::FormattedEntry, name, Error, ErrorKind, Query};

use super::Client;

pub(crate) const OPEN_LIBRARY_URL: &str = "https://openlibrary.org/search.json";

/// The Open Library search endpoint.
///
/// A catalog only holds the search URL, so lookups never depend on earlier ones.
#[derive(Debug)]
pub struct Catalog<C: Client = reqwest::blocking::Client> {
    client: C,
    url: String,
}

impl<C: Client> Catalog<C> {
    /// Creates a catalog which searches Open Library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: C::default(),
            url: OPEN_LIBRARY_URL.to_owned(),
        }
    }

    /// Creates a catalog which searches the endpoint at `url` instead of Open Library.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::Url`] error is returned when `url` cannot be parsed.
    pub fn with_base_url(url: &str) -> Result<Self, Error> {
        Url::parse(url).map_err(|e| Error::wrap(ErrorKind::Url, e))?;
        Ok(Self {
            client: C::default(),
            url: url.to_owned(),
        })
    }

    /// Searches the catalog using `text` as the only search term.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::NotFound`] error is returned when the catalog has no match for `text`.
    /// Errors of the underlying [`Client`] are returned as they are.
    pub fn search_text(&self, text: &str) -> Result<Vec<FormattedEntry>, Error> {
        self.search(Query::text(text))
    }

    /// Searches the catalog for books with `title` and, when given, `author`.
    ///
    /// The `year` is not part of the search and is only reported back when nothing is found.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::NotFound`] error is returned when the catalog has no match for the title
    /// and author. Errors of the underlying [`Client`] are returned as they are.
    pub fn search_title(
        &self,
        title: &str,
        author: Option<&str>,
        year: Option<&str>,
    ) -> Result<Vec<FormattedEntry>, Error> {
        self.search(Query::title(title, author, year))
    }

    /// Searches the catalog using the title and author in the name of the book file at `path`.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::Format`] error is returned, before any request is made, when the file name
    /// is not in the form of `title_author_year`. Otherwise as [`Catalog::search_title`].
    pub fn search_file_name<P: AsRef<Path>>(&self, path: P) -> Result<Vec<FormattedEntry>, Error> {
        let query = name::parse_file_name(path)?;
        self.search(query)
    }

    /// Searches the catalog with any [`Query`].
    ///
    /// Only the first page of results is considered, and documents missing any of the
    /// author, ISBN, publish year or publisher are left out.
    ///
    /// # Errors
    ///
    /// See [`Catalog::search_text`] and [`Catalog::search_title`].
    pub fn search(&self, query: Query) -> Result<Vec<FormattedEntry>, Error> {
        info!("Searching Open Library for {query}");
        let url = Url::parse_with_params(&self.url, query.params())
            .map_err(|e| Error::wrap(ErrorKind::Url, e))?;
        trace!("GET {url}");

        let SearchModel { num_found, docs } = self.client.get_json(url.as_str())?;

        trace!("Request was successful with {num_found} match(es)");

        if num_found == 0 {
            return Err(Error::not_found(query));
        }

        Ok(docs
            .into_iter()
            .filter_map(Doc::resolve)
            .map(FormattedEntry::from)
            .collect())
    }
}

impl<C: Client> Default for Catalog<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchModel {
    num_found: u64,
    #[serde(default)]
    docs: Vec<Doc>,
}

/// A single match as returned by the search endpoint.
///
/// Every field is optional in the response, [`Doc::resolve`] decides if it describes a book.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Doc {
    title_suggest: Option<String>,
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    #[serde(default)]
    isbn: Vec<String>,
    #[serde(default)]
    publish_year: Vec<Year>,
    #[serde(default)]
    publisher: Vec<String>,
}

/// Publish years are numbers, but nothing stops the service from sending a string.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg_attr(test, derive(Debug))]
struct BookRecord {
    title: String,
    authors: Vec<String>,
    publisher: Vec<String>,
    isbn: Vec<String>,
    publish_year: Vec<Year>,
}

impl Doc {
    // Resolver pattern: a BookRecord always has at least one value in each list.
    fn resolve(self) -> Option<BookRecord> {
        let Self {
            title_suggest,
            title,
            author_name,
            isbn,
            publish_year,
            publisher,
        } = self;

        let title = match (title_suggest, title) {
            (Some(title), _) => title,
            (None, Some(title)) => {
                debug!("No suggested title - using '{title}'");
                title
            }
            (None, None) => {
                debug!("Dropping a document as it has no title");
                return None;
            }
        };

        if author_name.is_empty() || isbn.is_empty() || publish_year.is_empty() || publisher.is_empty()
        {
            debug!("Dropping '{title}' as it is missing author, ISBN, publish year or publisher");
            return None;
        }

        Some(BookRecord {
            title,
            authors: author_name,
            publisher,
            isbn,
            publish_year,
        })
    }
}

impl From<BookRecord> for FormattedEntry {
    fn from(book: BookRecord) -> Self {
        let BookRecord {
            title,
            authors,
            publisher,
            isbn,
            publish_year,
        } = book;

        // the first of each is taken as the catalog's preferred value
        Self::new(title, &authors, &publisher[0], &isbn[0], &publish_year[0])
    }
}

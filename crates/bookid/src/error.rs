use crate::Query;

pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when calling the bookid functions.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
    query: Option<Query>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The error is associated with an underlying IO or network error.
    IO,
    /// An error caused when parsing/deserialization of a response fails.
    Deserialize,
    /// The catalog reported zero matches for a query.
    NotFound,
    /// A file name does not follow the `title_author_year` convention.
    Format,
    /// The catalog search URL could not be parsed.
    Url,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
            query: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
            query: None,
        }
    }

    /// Creates a [`ErrorKind::NotFound`] error which keeps hold of the query that found nothing.
    #[must_use]
    pub fn not_found(query: Query) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: Some(format!("no books found for {query}")),
            source: None,
            query: Some(query),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The query that produced this error, only set for [`ErrorKind::NotFound`].
    #[must_use]
    pub const fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::IO => f.write_str("IO error")?,
            ErrorKind::Deserialize => f.write_str("Deserialize error")?,
            ErrorKind::NotFound => f.write_str("Not found error")?,
            ErrorKind::Format => f.write_str("Format error")?,
            ErrorKind::Url => f.write_str("Url error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

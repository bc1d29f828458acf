//! Derives a [`Query`] from the name of a book file.
//!
//! Book files are named `title_author_year.ext` where words in the title are separated by
//! hyphens, e.g. `some-book_jane-doe_1999.epub`.

use std::path::Path;

use log::trace;

use crate::{Error, ErrorKind, Query};

/// Parses the file name at `path` into a titled [`Query`].
///
/// The directory and the extension are ignored. Hyphens in the title are replaced with spaces,
/// the author and year are kept as they are.
///
/// # Errors
///
/// An [`ErrorKind::Format`] error is returned when the file name does not split into exactly
/// three `_` separated parts, or when the path has no file name that is valid UTF-8.
pub fn parse_file_name<P: AsRef<Path>>(path: P) -> Result<Query, Error> {
    let path = path.as_ref();
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
        Error::new(
            ErrorKind::Format,
            format!("'{}' does not have a readable file name", path.display()),
        )
    })?;

    trace!("Parsing file name '{stem}'");

    match stem.split('_').collect::<Vec<_>>()[..] {
        [title, author, year] => Ok(Query::title(
            title.replace('-', " "),
            Some(author),
            Some(year),
        )),
        _ => Err(Error::new(
            ErrorKind::Format,
            format!("'{stem}' is not in the form of title_author_year"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_file_name;
    use crate::{ErrorKind, Query};

    #[test]
    fn title_hyphens_become_spaces() {
        assert_eq!(
            Query::title("some book", Some("jane-doe"), Some("1999")),
            parse_file_name("some-book_jane-doe_1999.epub").unwrap()
        );
    }

    #[test]
    fn directory_and_extension_are_ignored() {
        assert_eq!(
            Query::title("dune", Some("herbert"), Some("1965")),
            parse_file_name("/home/me/books/dune_herbert_1965.pdf").unwrap()
        );
        assert_eq!(
            Query::title("dune", Some("herbert"), Some("1965")),
            parse_file_name("dune_herbert_1965").unwrap()
        );
    }

    #[test]
    fn wrong_number_of_parts_is_format_error() {
        for name in [
            "dune.epub",
            "dune_herbert.epub",
            "dune_frank_herbert_1965.epub",
            "books/",
        ] {
            let err = parse_file_name(name).expect_err(name);
            assert_eq!(ErrorKind::Format, err.kind(), "{name}");
        }
    }

    #[test]
    fn only_last_extension_is_removed() {
        assert_eq!(
            Query::title("dune", Some("herbert"), Some("1965.tar")),
            parse_file_name("dune_herbert_1965.tar.gz").unwrap()
        );
    }
}

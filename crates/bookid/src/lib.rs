#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bookid
//!
//! bookid is a library which looks up the metadata of a book (title, authors, publisher, ISBN
//! and year) in the Open Library catalog and formats it as identifying text, such as the commit
//! message used when a book file is added to a library kept under version control.
//!
//! Books can be searched by free text, by title and author, or by the name of a book file that
//! follows the `title_author_year.ext` convention, see [`name::parse_file_name`]. All three are
//! methods of a [`Catalog`].

mod api;
mod error;
pub mod format;
pub mod name;
mod query;

pub use api::{open_library::Catalog, Client};
pub use error::{Error, ErrorKind};
pub use format::{FormattedEntry, Template};
pub use query::Query;

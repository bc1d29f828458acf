use std::path::{Path, PathBuf};

use bookid::{Catalog, FormattedEntry, Template};

use clap::Subcommand;
use eyre::{eyre, Context};
use log::{trace, warn};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Look up a book by the name of its file or by free text
    ///
    /// When the argument is an existing file then its name must be in the form of
    /// `title_author_year.ext`, where the words of the title are separated by hyphens.
    /// Otherwise the argument is used as free text to search for.
    #[clap(arg_required_else_help = true)]
    Lookup {
        /// The book file or the text to search for
        filename_or_text: String,
    },

    /// Look up a book by title, and show the first match
    #[clap(arg_required_else_help = true)]
    Info {
        /// The title of the book
        title: String,
        /// The author of the book
        author: Option<String>,
        /// The year the book was published, only used when reporting that no book was found
        year: Option<String>,
    },

    /// Add a book file to the library (not implemented)
    #[clap(arg_required_else_help = true)]
    Add {
        /// The book file to add
        #[clap(parse(from_os_str))]
        file: PathBuf,
    },
}

impl Commands {
    pub fn execute(self, catalog: &Catalog, template: Template) -> eyre::Result<String> {
        match self {
            Commands::Lookup { filename_or_text } => {
                let path = Path::new(&filename_or_text);
                let entries = if path.is_file() {
                    trace!("'{}' is a file - searching by its name", path.display());
                    catalog.search_file_name(path).wrap_err_with(|| {
                        eyre!("Cannot look up the book file '{}'", path.display())
                    })?
                } else {
                    trace!("No file found at '{filename_or_text}' - searching by text");
                    catalog.search_text(&filename_or_text)?
                };

                if entries.is_empty() {
                    warn!("Books were found but none have an author, ISBN, publish year and publisher");
                }

                Ok(render_all(&entries, template))
            }
            Commands::Info {
                title,
                author,
                year,
            } => {
                let entries =
                    catalog.search_title(&title, author.as_deref(), year.as_deref())?;
                entries
                    .first()
                    .map(|entry| template.render(entry))
                    .ok_or_else(|| {
                        eyre!("Books titled '{title}' were found but none have an author, ISBN, publish year and publisher")
                    })
            }
            Commands::Add { file } => Err(eyre!(
                "Cannot add '{}': the add command is not implemented",
                file.display()
            )),
        }
    }
}

fn render_all(entries: &[FormattedEntry], template: Template) -> String {
    entries
        .iter()
        .map(|entry| template.render(entry))
        .collect::<Vec<_>>()
        .join("\n\n")
}

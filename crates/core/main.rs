#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::process;

mod commands;

use commands::Commands;

use bookid::{Catalog, Template};

use clap::{Args, Parser};
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        command,
        global_opts:
            GlobalOpts {
                commit,
                url,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let catalog: Catalog = if let Some(url) = url {
        trace!("'url' option used with value of '{url}'");
        Catalog::with_base_url(&url)?
    } else {
        Catalog::new()
    };

    let template = if commit {
        Template::Commit
    } else {
        Template::Plain
    };

    let message = command.execute(&catalog, template)?;
    if !message.is_empty() {
        println!("{message}");
    }
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookid")]
#[clap(about = "Look up book metadata in Open Library and format it as identifying text")]
#[clap(version, author)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Print entries as commit messages, with a `[BOOK] <title>` subject line
    #[clap(short, long, global = true)]
    commit: bool,

    /// The catalog search URL to use instead of Open Library
    #[clap(long, global = true)]
    url: Option<String>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only errors are logged to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,
}

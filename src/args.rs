use clap::{App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "books.txt";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Run configuration: where to read books from, where to write reports and,
/// optionally, the author to filter by instead of prompting for one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub author: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            author: None,
        }
    }
}

impl Config {
    /// Parse the process arguments, exiting with a usage message on error.
    pub fn parse() -> Self {
        Self::from_matches(&app().get_matches())
    }

    /// Parse an explicit argument list; the first item is the binary name.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::from_matches(&app().get_matches_from_safe(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            input: PathBuf::from(matches.value_of("input").unwrap_or(DEFAULT_INPUT)),
            output_dir: PathBuf::from(
                matches
                    .value_of("output_dir")
                    .unwrap_or(DEFAULT_OUTPUT_DIR),
            ),
            author: matches.value_of("author").map(String::from),
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("book_reports")
        .version("0.1.0")
        .about("Reads a list of books and writes five reports about them")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .default_value(DEFAULT_INPUT)
                .help("path of the book list to read from"),
        )
        .arg(
            Arg::with_name("output_dir")
                .short("o")
                .long("output-dir")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT_DIR)
                .help("directory the a.txt to e.txt reports are written to"),
        )
        .arg(
            Arg::with_name("author")
                .short("a")
                .long("author")
                .takes_value(true)
                .help("author to filter titles by instead of prompting for one"),
        )
}

//! Reads a flat list of books and produces five reports about it: a plain
//! dump, price statistics of the oldest books, the titles of one author,
//! and listings grouped by year and by author.
//!
//! Each input line has the form `title year price [author1 [author2 [author3]]]`.
//!
//! ```
//! use book_reports::{Catalog, Report};
//!
//! let catalog = Catalog::from_lines([
//!     "Dune 1965 20 FrankHerbert",
//!     "Foundation 1951 15 IsaacAsimov",
//!     "Foundation2 1951 18 IsaacAsimov",
//! ]);
//!
//! assert_eq!(
//!     Report::OldestStats.render(&catalog, "").unwrap(),
//!     "There were several oldest books. Price arithmetic mean: 16\n"
//! );
//! ```

pub mod args;
pub mod catalog;
pub mod errors;
pub mod query;
pub mod record;
pub mod reports;
pub mod runner;

pub use args::Config;
pub use catalog::Catalog;
pub use errors::{RunError, SinkError, SourceError};
pub use query::{FixedQuery, Prompt, QuerySource};
pub use record::{parse_line, Authors, Book, Parsed};
pub use reports::Report;
pub use runner::{run, write_reports, RunSummary};

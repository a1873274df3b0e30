use crate::catalog::Catalog;
use crate::errors::SinkError;
use crate::record::Book;
use csv::{QuoteStyle, Terminator};
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// Every book in catalog order, one line each.
    Dump,

    /// The price of the oldest book, or the mean price when several books
    /// share the oldest year.
    OldestStats,

    /// The titles of every book written by the queried author.
    AuthorFilter,

    /// Books grouped under their publication year, newest year first.
    YearGroups,

    /// Books grouped under each author, in the order authors are first
    /// seen in the catalog.
    AuthorGroups,
}

impl Report {
    /// Every report, in the order a run produces them.
    pub const ALL: [Report; 5] = [
        Report::Dump,
        Report::OldestStats,
        Report::AuthorFilter,
        Report::YearGroups,
        Report::AuthorGroups,
    ];

    /// The file name a run writes this report to.
    pub fn file_name(&self) -> &'static str {
        match self {
            Report::Dump => "a.txt",
            Report::OldestStats => "b.txt",
            Report::AuthorFilter => "c.txt",
            Report::YearGroups => "d.txt",
            Report::AuthorGroups => "e.txt",
        }
    }

    /// Whether the report needs an author query to run.
    pub fn needs_query(&self) -> bool {
        matches!(self, Report::AuthorFilter)
    }

    /// Write this report for the provided catalog to `sink`.
    ///
    /// `query` is only consulted by the AuthorFilter report. Every line
    /// written is newline terminated.
    pub fn write_to<W: Write>(
        &self,
        catalog: &Catalog,
        query: &str,
        mut sink: W,
    ) -> Result<(), SinkError> {
        let report = *self;
        let io_err = |err| SinkError::Write(report, err);

        match self {
            Report::Dump => write_dump(catalog, sink)?,
            Report::OldestStats => {
                if let Some(stats) = oldest_stats(catalog) {
                    writeln!(sink, "{}", stats).map_err(io_err)?;
                }
            }
            Report::AuthorFilter => {
                for title in author_filter(catalog, query) {
                    writeln!(sink, "{}", title).map_err(io_err)?;
                }
            }
            Report::YearGroups => {
                for group in year_groups(catalog) {
                    writeln!(sink, "{}: ", group.year).map_err(io_err)?;
                    for book in group.books {
                        writeln!(sink, "\t{} {}", book.title, book.authors.first())
                            .map_err(io_err)?;
                    }
                }
            }
            Report::AuthorGroups => {
                for group in author_groups(catalog) {
                    writeln!(sink, "{}: ", group.author).map_err(io_err)?;
                    for book in group.books {
                        writeln!(sink, "\t{}", book.title).map_err(io_err)?;
                    }
                }
            }
        };

        Ok(())
    }

    /// Render this report into a string rather than a sink.
    pub fn render(&self, catalog: &Catalog, query: &str) -> Result<String, SinkError> {
        let mut buf = Vec::new();
        self.write_to(catalog, query, &mut buf)?;

        String::from_utf8(buf).map_err(|err| SinkError::Encoding(*self, err))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Report::Dump => "dump",
            Report::OldestStats => "oldest-stats",
            Report::AuthorFilter => "author-filter",
            Report::YearGroups => "year-groups",
            Report::AuthorGroups => "author-groups",
        };
        f.write_str(name)
    }
}

/// One line of the Dump report. Author slots are always written, absent
/// ones as empty fields.
#[derive(Debug, Serialize)]
struct DumpRow<'a> {
    title: &'a str,
    year: u32,
    price: u32,
    author1: &'a str,
    author2: &'a str,
    author3: &'a str,
}

impl<'a> From<&'a Book> for DumpRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            title: &book.title,
            year: book.year,
            price: book.price,
            author1: book.authors.slot(0),
            author2: book.authors.slot(1),
            author3: book.authors.slot(2),
        }
    }
}

fn write_dump<W: Write>(catalog: &Catalog, sink: W) -> Result<(), SinkError> {
    // Titles and authors never contain whitespace, so the fields are
    // written bare with a single space between them.
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    for book in catalog.books() {
        wtr.serialize(DumpRow::from(book))
            .map_err(|err| SinkError::Serialize(Report::Dump, err))?;
    }

    wtr.flush().map_err(|err| SinkError::Write(Report::Dump, err))
}

/// The books sharing the lowest publication year in a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OldestStats {
    pub year: u32,
    pub count: usize,
    pub price_sum: u64,
}

impl OldestStats {
    fn start(book: &Book) -> Self {
        Self {
            year: book.year,
            count: 1,
            price_sum: u64::from(book.price),
        }
    }

    /// The truncated mean price of the oldest books.
    pub fn mean_price(&self) -> u64 {
        self.price_sum / self.count as u64
    }
}

impl fmt::Display for OldestStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(
                f,
                "There was only 1 oldest book. The price is: {}",
                self.price_sum
            )
        } else {
            write!(
                f,
                "There were several oldest books. Price arithmetic mean: {}",
                self.mean_price()
            )
        }
    }
}

/// Find the oldest books in a single pass.
///
/// Only the running minimum is tracked: a strictly older book restarts the
/// tally from that book, a book of the same year is added to it. Returns
/// `None` for an empty catalog.
pub fn oldest_stats(catalog: &Catalog) -> Option<OldestStats> {
    let mut books = catalog.books().iter();
    let mut stats = OldestStats::start(books.next()?);

    for book in books {
        if book.year < stats.year {
            stats = OldestStats::start(book);
        } else if book.year == stats.year {
            stats.count += 1;
            stats.price_sum += u64::from(book.price);
        }
    }

    Some(stats)
}

/// Titles of the books listing `author` in any slot, in catalog order.
/// Each book appears at most once and an empty query matches nothing.
pub fn author_filter<'a>(catalog: &'a Catalog, author: &str) -> Vec<&'a str> {
    catalog
        .books()
        .iter()
        .filter(|book| book.authors.contains(author))
        .map(|book| book.title.as_str())
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
pub struct YearGroup<'a> {
    pub year: u32,
    pub books: Vec<&'a Book>,
}

/// Group books by year, newest year first. Books keep catalog order
/// within their group.
pub fn year_groups(catalog: &Catalog) -> Vec<YearGroup<'_>> {
    // Linear dedup is O(books * years); year counts are small.
    let mut years: Vec<u32> = Vec::new();
    for book in catalog.books() {
        if !years.contains(&book.year) {
            years.push(book.year);
        }
    }
    years.sort_unstable();
    years.reverse();

    years
        .into_iter()
        .map(|year| YearGroup {
            year,
            books: catalog
                .books()
                .iter()
                .filter(|book| book.year == year)
                .collect(),
        })
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
pub struct AuthorGroup<'a> {
    pub author: &'a str,
    pub books: Vec<&'a Book>,
}

/// Group books by author. Authors are ordered by first appearance (book
/// order, then slot order) and a book is listed once per author even when
/// the name fills several of its slots.
pub fn author_groups(catalog: &Catalog) -> Vec<AuthorGroup<'_>> {
    let mut authors: Vec<&str> = Vec::new();
    for book in catalog.books() {
        for author in book.authors.iter() {
            if !authors.contains(&author) {
                authors.push(author);
            }
        }
    }

    authors
        .into_iter()
        .map(|author| AuthorGroup {
            author,
            books: catalog
                .books()
                .iter()
                .filter(|book| book.authors.contains(author))
                .collect(),
        })
        .collect()
}

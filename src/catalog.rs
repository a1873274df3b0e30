use crate::errors::SourceError;
use crate::record::{is_blank, parse_line, Book};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, warn};

/// A Catalog is the ordered collection of every book read during a run.
///
/// Books are kept in input order, which is the order the Dump report prints
/// them in and the order books are listed within each group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book to the end of the catalog.
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// All books, in input order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Build a catalog from raw text lines.
    ///
    /// Blank lines are skipped. Every other line produces exactly one book,
    /// with malformed lines stored as placeholders so they keep their place.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Catalog::new();
        for (index, line) in lines.into_iter().enumerate() {
            catalog.ingest(index + 1, line.as_ref());
        }
        catalog
    }

    fn ingest(&mut self, line_number: usize, line: &str) {
        if is_blank(line) {
            return;
        }

        let parsed = parse_line(line);
        if parsed.is_placeholder() {
            warn!(
                line = line_number,
                "malformed book record, storing an empty placeholder"
            );
        }
        self.push(parsed.into_book());
    }
}

impl TryFrom<PathBuf> for Catalog {
    type Error = SourceError;

    /// Reads every line of the file at the provided path into a newly
    /// allocated Catalog.
    ///
    /// The file is read to the end before returning. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected, as the parser only
    /// cares about whitespace boundaries.
    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let file = File::open(&path).map_err(|err| SourceError::Open(path.clone(), err))?;
        let mut reader = BufReader::new(file);

        // Lines are split on raw bytes rather than through a csv reader:
        // fields are separated by runs of mixed spaces and tabs, which no
        // single csv delimiter describes.
        let mut catalog = Catalog::new();
        let mut buf = Vec::new();
        let mut line_number = 0;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|err| SourceError::Read(path.clone(), err))?;
            if read == 0 {
                break;
            }
            line_number += 1;
            catalog.ingest(line_number, &String::from_utf8_lossy(&buf));
        }

        debug!(path = %path.display(), books = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

use crate::record::truncate;
use std::io::{BufRead, Write};
use tracing::warn;

/// The prompt shown before reading an author name interactively.
pub const PROMPT: &str = "Enter author name (f.e. 1BookAuthor1): ";

/// Supplies the author name the AuthorFilter report searches for.
pub trait QuerySource {
    /// Returns the author to search for. An empty string means no author
    /// was provided, which matches no books.
    fn author(&mut self) -> String;
}

/// A query known up front, e.g. passed on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedQuery(pub String);

impl QuerySource for FixedQuery {
    fn author(&mut self) -> String {
        truncate(&self.0)
    }
}

/// Asks for the author on `output` and reads one line from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> QuerySource for Prompt<R, W> {
    fn author(&mut self) -> String {
        // The prompt is informational; failing to show it should not stop
        // us from reading the answer.
        if let Err(err) = writeln!(self.output, "{}", PROMPT).and_then(|_| self.output.flush()) {
            warn!(error = %err, "unable to write author prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // Author names are stored cut to the field length, so the
            // query is cut the same way to still match them.
            Ok(_) => truncate(strip_line_terminator(&line)),
            Err(err) => {
                warn!(error = %err, "unable to read author name");
                String::new()
            }
        }
    }
}

/// Cut the line at its first carriage return or line feed.
fn strip_line_terminator(line: &str) -> &str {
    match line.find(|c| c == '\r' || c == '\n') {
        Some(end) => &line[..end],
        None => line,
    }
}

/// The number of author slots every book carries.
pub const AUTHOR_SLOTS: usize = 3;

/// The maximum number of characters kept from a title or author token.
pub const MAX_FIELD_LEN: usize = 99;

/// The number of whitespace separated tokens a line may contribute: title,
/// year, price and one token per author slot.
const MAX_TOKENS: usize = 3 + AUTHOR_SLOTS;

/// A bounded, ordered list of author names.
///
/// Every book has exactly `AUTHOR_SLOTS` slots. A slot either holds a
/// non-empty name or is absent; absent slots render as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Authors {
    slots: [Option<String>; AUTHOR_SLOTS],
}

impl Authors {
    /// Builds an author list from the provided names, filling slots in
    /// order. Names past the last slot are dropped and empty names leave
    /// their slot absent.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut authors = Authors::default();
        for (slot, name) in authors.slots.iter_mut().zip(names) {
            let name = name.into();
            if !name.is_empty() {
                *slot = Some(truncate(&name));
            }
        }
        authors
    }

    /// The name held in the given slot, or an empty string when the slot is
    /// absent or out of range.
    pub fn slot(&self, index: usize) -> &str {
        self.slots
            .get(index)
            .and_then(|slot| slot.as_deref())
            .unwrap_or_default()
    }

    /// The first slot, which is the one listed alongside titles in grouped
    /// reports.
    pub fn first(&self) -> &str {
        self.slot(0)
    }

    /// Iterate over the names that are present, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    /// Whether `name` occupies any slot. The empty string never matches.
    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.iter().any(|author| author == name)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single book entry parsed from one line of input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub year: u32,
    pub price: u32,
    pub authors: Authors,
}

impl Book {
    pub fn new<I, S>(title: &str, year: u32, price: u32, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: truncate(title),
            year,
            price,
            authors: Authors::new(authors),
        }
    }

    /// The record stored in place of a line that does not carry at least a
    /// title, a year and a price.
    pub fn placeholder() -> Self {
        Self::default()
    }
}

/// The outcome of parsing one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    /// The line held a title, a year and a price.
    Book(Book),

    /// The line held fewer than three tokens. The placeholder book is still
    /// meant to be stored so that malformed lines keep their position.
    Placeholder(Book),
}

impl Parsed {
    pub fn into_book(self) -> Book {
        match self {
            Parsed::Book(book) | Parsed::Placeholder(book) => book,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Parsed::Placeholder(_))
    }
}

/// Whether a line is empty or holds only token separators. Blank lines are skipped
/// before parsing and never produce a record.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_separator)
}

/// Tokens are separated by spaces, tabs, carriage returns and line feeds
/// only. Other whitespace, such as a non-breaking space, is part of a token.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|token| !token.is_empty())
}

/// Parse a single line of the form `title year price [a1 [a2 [a3]]]`.
///
/// Parsing never fails: a line with fewer than three tokens yields a
/// placeholder book with an empty title, year and price of zero and no
/// authors.
pub fn parse_line(line: &str) -> Parsed {
    let tokens: Vec<&str> = tokens(line).take(MAX_TOKENS).collect();
    if tokens.len() < 3 {
        return Parsed::Placeholder(Book::placeholder());
    }

    Parsed::Book(Book::new(
        tokens[0],
        leading_number(tokens[1]),
        leading_number(tokens[2]),
        tokens[3..].iter().copied(),
    ))
}

/// Permissive integer parsing: an optional `+` followed by the leading run
/// of ASCII digits. Anything else yields zero and overflow saturates.
fn leading_number(token: &str) -> u32 {
    let digits = token.strip_prefix('+').unwrap_or(token);
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

/// Cut a title, author or author query to `MAX_FIELD_LEN` characters.
pub fn truncate(value: &str) -> String {
    value.chars().take(MAX_FIELD_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_full_line() {
        let book = parse_line("Dune 1965 20 FrankHerbert BrianHerbert KevinAnderson");
        assert_eq!(
            book,
            Parsed::Book(Book::new(
                "Dune",
                1965,
                20,
                ["FrankHerbert", "BrianHerbert", "KevinAnderson"]
            ))
        );
    }

    #[test]
    fn should_leave_missing_authors_absent() {
        let book = parse_line("Dune 1965 20 FrankHerbert").into_book();
        assert_eq!(book.authors.len(), 1);
        assert_eq!(book.authors.first(), "FrankHerbert");
        assert_eq!(book.authors.slot(1), "");
        assert_eq!(book.authors.slot(2), "");

        let book = parse_line("Dune 1965 20").into_book();
        assert!(book.authors.is_empty());
    }

    #[test]
    fn should_ignore_tokens_past_the_third_author() {
        let book = parse_line("T 1 2 A B C D E").into_book();
        assert_eq!(book.authors.iter().collect::<Vec<_>>(), ["A", "B", "C"]);
    }

    #[test]
    fn should_split_on_spaces_tabs_and_line_ends() {
        let book = parse_line("  Dune\t1965   20\tFrankHerbert\r\n").into_book();
        assert_eq!(book, Book::new("Dune", 1965, 20, ["FrankHerbert"]));
    }

    #[test]
    fn should_degrade_short_lines_to_placeholder() {
        // Two tokens are not enough for a title, year and price, so the
        // whole record is reset rather than partially filled.
        let parsed = parse_line("Dune 1965");
        assert!(parsed.is_placeholder());
        assert_eq!(parsed.into_book(), Book::placeholder());

        let parsed = parse_line("Dune");
        assert!(parsed.is_placeholder());
    }

    #[test]
    fn should_parse_leading_digits_only() {
        assert_eq!(leading_number("1965"), 1965);
        assert_eq!(leading_number("20usd"), 20);
        assert_eq!(leading_number("+7"), 7);
        assert_eq!(leading_number("abc"), 0);
        assert_eq!(leading_number("-5"), 0);
        assert_eq!(leading_number(""), 0);
        assert_eq!(leading_number("99999999999999"), u32::MAX);
    }

    #[test]
    fn should_default_unparseable_numbers_to_zero() {
        let book = parse_line("Dune year price").into_book();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, 0);
        assert_eq!(book.price, 0);
    }

    #[test]
    fn should_truncate_long_fields() {
        let long = "x".repeat(150);
        let book = parse_line(&format!("{} 1 2 {}", long, long)).into_book();
        assert_eq!(book.title.chars().count(), MAX_FIELD_LEN);
        assert_eq!(book.authors.first().chars().count(), MAX_FIELD_LEN);
    }

    #[test]
    fn should_detect_blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\r\n"));
        assert!(!is_blank(" x "));
        assert!(!is_blank("\x0c"));
        assert!(!is_blank("\u{a0}"));
    }

    #[test]
    fn should_keep_other_whitespace_inside_tokens() {
        // Only space, tab, CR and LF separate fields, so these titles stay
        // whole and the year and price come from the right tokens.
        let book = parse_line("Le\u{a0}Petit 1943 7 Saint").into_book();
        assert_eq!(book, Book::new("Le\u{a0}Petit", 1943, 7, ["Saint"]));

        let book = parse_line("Title\x0bPart 1999 5 A").into_book();
        assert_eq!(book, Book::new("Title\x0bPart", 1999, 5, ["A"]));

        let parsed = parse_line("\x0c");
        assert!(parsed.is_placeholder());
    }

    #[test]
    fn should_never_match_empty_author() {
        let authors = Authors::new(["A", "", "B"]);
        assert!(!authors.contains(""));
        assert!(authors.contains("A"));
        assert!(authors.contains("B"));
        assert!(!authors.contains("a"));
        assert_eq!(authors.len(), 2);
    }
}

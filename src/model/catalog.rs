//! Catalog - the ranked, read-only list of loaned books
//!
//! The catalog is sorted once when it is built (most checkouts first) and
//! never changes afterwards. Both views render straight from it.

use super::book::BookRecord;
use chrono::{Datelike, NaiveDate};

/// Date range the checkout counts were collected over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    pub fn from_ymd(start: (i32, u32, u32), end: (i32, u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2)?,
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2)?,
        })
    }

    /// Human readable range, e.g. "Jan.1 - March 18, 2025"
    pub fn label(&self) -> String {
        let end = self.end.format("%B %-d, %Y");
        if self.start.year() == self.end.year() {
            format!("{} - {}", self.start.format("%b.%-d"), end)
        } else {
            format!("{} - {}", self.start.format("%b.%-d, %Y"), end)
        }
    }
}

/// Ranked list of book records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
    source: String,
    period: Option<ReportingPeriod>,
}

impl Catalog {
    /// Build a catalog, ranking books by checkouts (descending).
    ///
    /// The sort is stable: books with equal checkouts keep their input order.
    pub fn new(mut books: Vec<BookRecord>) -> Self {
        books.sort_by(|a, b| b.checkouts.cmp(&a.checkouts));
        Self {
            books,
            source: String::new(),
            period: None,
        }
    }

    pub fn with_source(mut self, source: &str, period: Option<ReportingPeriod>) -> Self {
        self.source = source.to_string();
        self.period = period;
        self
    }

    /// The built-in dataset: top 15 loaned books, Jan.1 - March 18, 2025
    pub fn top_loaned() -> Self {
        let books = vec![
            BookRecord::new("The Frozen River", "Arial Lawhon", 235, "Fiction", "images/frozenriver.jpg"),
            BookRecord::new("The Women", "Kristin Hannah", 193, "Fiction", "images/thewomen.jpg"),
            BookRecord::new("James", "Percival Everett", 189, "Fiction", "images/james.jpg"),
            BookRecord::new("Remarkably Bright Creatures", "Shelby Van Pelt", 153, "Fiction", "images/creatures.jpg"),
            BookRecord::new("Solito", "Javier Zamora", 146, "Memoir", "images/solito.jpg"),
            BookRecord::new("West with Giraffes", "Lynda Rutledge", 117, "Fiction", "images/west.jpg"),
            BookRecord::new("The Heaven & Earth Grocery Store", "James McBride", 112, "Fiction", "images/heaven.jpg"),
            BookRecord::new("The Wedding People", "Alison Espach", 105, "Fiction", "images/weddingpeople.jpg"),
            BookRecord::new("The Anxious Generation", "Jonathan Haidt", 98, "Non-Fiction", "images/anxious.jpg"),
            BookRecord::new("The Lost Bookshop", "Evie Woods", 91, "Fiction", "images/lostbookshop.jpg"),
            BookRecord::new("First Lie Wins", "Ashley Elston", 82, "Fiction", "images/firstliewins.jpg"),
            BookRecord::new("Parable of the Sower", "Octavia E. Butler", 80, "Fiction", "images/parableofsower.jpg"),
            BookRecord::new("The God of the Woods", "Liz Moore", 79, "Fiction", "images/godofwoods.jpg"),
            BookRecord::new("The Borrowed Life of Frederick Fife", "Anna Johnston", 79, "Fiction", "images/borrowedlife.jpg"),
            BookRecord::new("The Briar Club", "Kate Quinn", 79, "Fiction", "images/briarclub.jpg"),
        ];

        Self::new(books).with_source(
            "Michigan eLibrary Catalog",
            ReportingPeriod::from_ymd((2025, 1, 1), (2025, 3, 18)),
        )
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&BookRecord> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Highest checkout count in the catalog (0 when empty)
    pub fn max_checkouts(&self) -> u32 {
        self.books.iter().map(|b| b.checkouts).max().unwrap_or(0)
    }

    pub fn contains_genre(&self, genre: &str) -> bool {
        self.books.iter().any(|b| b.genre == genre)
    }

    /// Main heading, e.g. "Top 15 loaned books"
    pub fn heading(&self) -> String {
        format!("Top {} loaned books", self.books.len())
    }

    /// Provenance line shown under the heading
    pub fn subtitle(&self) -> String {
        match &self.period {
            Some(period) if !self.source.is_empty() => {
                format!("{}: {}", self.source, period.label())
            }
            Some(period) => period.label(),
            None => self.source.clone(),
        }
    }
}

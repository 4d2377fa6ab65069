//! Book records - one row of checkout statistics

/// A single book and how often it was loaned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub checkouts: u32,
    pub genre: String,
    /// Relative path to the cover image (e.g. `images/james.jpg`)
    pub cover_url: String,
}

impl BookRecord {
    pub fn new(title: &str, author: &str, checkouts: u32, genre: &str, cover_url: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            checkouts,
            genre: genre.to_string(),
            cover_url: cover_url.to_string(),
        }
    }

    /// Checkout count formatted for badges and tooltips
    pub fn checkouts_label(&self) -> String {
        if self.checkouts == 1 {
            "1 checkout".to_string()
        } else {
            format!("{} checkouts", self.checkouts)
        }
    }

    /// Byline shown under the title
    pub fn byline(&self) -> String {
        format!("by {}", self.author)
    }

    /// File name portion of the cover path
    pub fn cover_file_name(&self) -> &str {
        self.cover_url
            .rsplit('/')
            .next()
            .unwrap_or(self.cover_url.as_str())
    }
}

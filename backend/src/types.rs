use std::ops::Range;

use serde::{Serialize, Deserialize};

/// One romanized line and its translation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Line number of the romanized line (1-indexed)
    pub line_no: usize,
    /// Romanized line verbatim, including the marker and any [...] notes
    pub lat: String,
    /// Translation line verbatim, including the "> " marker
    pub han: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub line_no: usize,
    /// Romanized title, e.g. "Mt. 4."
    pub title: String,
    pub han_title: String,
    /// Verse 0
    pub overview: Option<Verse>,
    /// Verses 1..
    pub verses: Vec<Verse>,
}

impl Chapter {
    pub fn new(line_no: usize, title: &str) -> Self {
        Chapter {
            line_no,
            title: title.to_string(),
            han_title: String::new(),
            overview: None,
            verses: Vec::new(),
        }
    }

    /// Verse by number, 0 being the overview.
    pub fn verse(&self, verse_no: usize) -> Option<&Verse> {
        if verse_no == 0 {
            self.overview.as_ref()
        } else {
            self.verses.get(verse_no - 1)
        }
    }

    /// All verses with their numbers, overview first.
    pub fn numbered_verses(&self) -> impl Iterator<Item = (usize, &Verse)> {
        self.overview
            .iter()
            .map(|v| (0, v))
            .chain(self.verses.iter().enumerate().map(|(i, v)| (i + 1, v)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookName {
    pub line_no: usize,
    pub lat: String,
    pub han: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// File identity the book was loaded from
    pub source: String,
    pub name: BookName,
    pub chapters: Vec<Chapter>,
    /// Raw lines of the footnote block
    pub footnotes: Vec<String>,
}

/// A romanized word or script character with its byte span in the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Range<usize>,
}

/// A (romanized, script) pair. Romanized side is lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Correspondence {
    pub lat: String,
    pub han: String,
}

impl Correspondence {
    pub fn new(lat: &str, han: &str) -> Self {
        Correspondence {
            lat: lat.to_string(),
            han: han.to_string(),
        }
    }
}

/// Result of detail-mode alignment for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedWord {
    pub lat: String,
    pub lat_span: Range<usize>,
    pub han: String,
    pub han_span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CorpusStats {
    pub books: usize,
    pub chapters: usize,
    pub verses: usize,
    pub overviews: usize,
    pub footnotes: usize,
}

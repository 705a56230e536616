//! Find every verse where a romanized word is rendered by a given script
//! fragment, and mark the occurrences on both sides.

use std::ops::Range;

use serde::Serialize;

use crate::alignment::align_details;
use crate::app_settings::SearchMarkers;
use crate::corpus::{Corpus, VerseLocation};
use crate::errors::{InvalidQuery, SearchError};
use crate::logger::{info, warn};
use crate::tokenize::{han_chars, lat_syllables};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReferenceMatch {
    pub book_no: usize,
    /// Script name of the book, as in its heading translation.
    pub book_han: String,
    pub chapter_no: usize,
    /// 0 for a chapter overview.
    pub verse_no: usize,
    pub line_no: usize,
    /// Romanized line with markers around each occurrence.
    pub lat: String,
    /// Translation line with markers around each occurrence.
    pub han: String,
    pub occurrences: usize,
}

impl CrossReferenceMatch {
    pub fn location(&self) -> VerseLocation {
        VerseLocation {
            book_no: self.book_no,
            chapter_no: self.chapter_no,
            verse_no: self.verse_no,
        }
    }
}

/// A query word pair, lowercased and checked to have as many syllables as
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub lat: String,
    pub han: String,
}

impl Query {
    pub fn new(lat: &str, han: &str) -> Result<Query, InvalidQuery> {
        let lat = lat.trim().to_lowercase();
        let han = han.trim().to_string();

        let lat_count = lat_syllables(&lat).len();
        let han_count = han_chars(&han).len();
        if lat_count == 0 && han_count == 0 {
            return Err(InvalidQuery::Empty);
        }
        if lat_count != han_count {
            return Err(InvalidQuery::CountMismatch { lat_count, han_count });
        }

        Ok(Query { lat, han })
    }
}

/// Insert `open` and `close` around every span. Spans must not overlap.
pub fn annotate(text: &str, spans: &[Range<usize>], open: &str, close: &str) -> String {
    let mut sorted: Vec<&Range<usize>> = spans.iter().collect();
    sorted.sort_by_key(|s| s.start);

    let mut result = text.to_string();
    // From the end, so earlier offsets stay valid.
    for span in sorted.iter().rev() {
        result.insert_str(span.end, close);
        result.insert_str(span.start, open);
    }
    result
}

pub fn search(corpus: &Corpus, lat: &str, han: &str, markers: &SearchMarkers) -> Result<Vec<CrossReferenceMatch>, SearchError> {
    let query = Query::new(lat, han)?;
    let mut results = Vec::new();

    for (loc, book, verse) in corpus.verses() {
        let details = match align_details(&verse.lat, &verse.han) {
            Ok(d) => d,
            Err(e) => {
                warn(&format!("Skipping {} line {}: {}", book.source, verse.line_no, e));
                continue;
            }
        };

        let hits: Vec<_> = details
            .iter()
            .filter(|d| d.lat == query.lat && d.han == query.han)
            .collect();
        if hits.is_empty() {
            continue;
        }

        let lat_spans: Vec<Range<usize>> = hits.iter().map(|d| d.lat_span.clone()).collect();
        let han_spans: Vec<Range<usize>> = hits.iter().map(|d| d.han_span.clone()).collect();

        results.push(CrossReferenceMatch {
            book_no: loc.book_no,
            book_han: book.name.han.clone(),
            chapter_no: loc.chapter_no,
            verse_no: loc.verse_no,
            line_no: verse.line_no,
            lat: annotate(&verse.lat, &lat_spans, &markers.lat_open, &markers.lat_close),
            han: annotate(&verse.han, &han_spans, &markers.han_open, &markers.han_close),
            occurrences: hits.len(),
        });
    }

    info(&format!("Search for {} / {}: {} verses", query.lat, query.han, results.len()));
    Ok(results)
}

//! Frequency counts of (romanized, script) correspondences over a corpus, and
//! rendering text from one side to the other with those counts.
//!
//! Rendering is a lookup, not a translation: a romanized word becomes the
//! script fragment it was most often aligned with. Homophones which are
//! written with different characters can not be told apart this way, the
//! most frequent one always wins.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::alignment::align_words;
use crate::corpus::Corpus;
use crate::errors::TallyError;
use crate::logger::{error, info};
use crate::tokenize::{RE_HAN_CHAR, lat_words, split_chars, strip_notes};
use crate::types::Correspondence;

lazy_static! {
    static ref RE_LAT_ITEM: Regex = Regex::new(
        r"[0-9] |[0-9,.;:‘’“”!?()—]|['a-zA-ZÜüÔôÖöÆæ-]+"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyMode {
    /// Hyphen-joined words against character groups
    Words,
    /// Single syllables against single characters
    Characters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub lat: String,
    pub han: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<Correspondence, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Tally::default()
    }

    pub fn add(&mut self, pair: Correspondence) {
        *self.counts.entry(pair).or_insert(0) += 1;
    }

    pub fn update<I: IntoIterator<Item = Correspondence>>(&mut self, pairs: I) {
        for pair in pairs {
            self.add(pair);
        }
    }

    pub fn count(&self, lat: &str, han: &str) -> usize {
        self.counts.get(&Correspondence::new(lat, han)).copied().unwrap_or(0)
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Pairs by descending count, ties in (lat, han) order.
    pub fn most_common(&self) -> Vec<(&Correspondence, usize)> {
        let mut items: Vec<(&Correspondence, usize)> = self.counts.iter().map(|(k, v)| (k, *v)).collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        items
    }

    /// For each romanized form, the script fragment seen most often with it.
    pub fn best_han_by_lat(&self) -> HashMap<&str, &str> {
        let mut best: HashMap<&str, &str> = HashMap::new();
        for (pair, _) in self.most_common() {
            best.entry(pair.lat.as_str()).or_insert(pair.han.as_str());
        }
        best
    }

    /// For each script fragment, every romanized form seen with it, most
    /// frequent first.
    pub fn lat_forms_by_han(&self) -> HashMap<&str, Vec<&str>> {
        let mut forms: HashMap<&str, Vec<&str>> = HashMap::new();
        for (pair, _) in self.most_common() {
            forms.entry(pair.han.as_str()).or_default().push(pair.lat.as_str());
        }
        forms
    }

    pub fn entries(&self) -> Vec<TallyEntry> {
        self.most_common()
            .into_iter()
            .map(|(pair, count)| TallyEntry {
                lat: pair.lat.clone(),
                han: pair.han.clone(),
                count,
            })
            .collect()
    }

    pub fn from_entries(entries: Vec<TallyEntry>) -> Self {
        let mut tally = Tally::new();
        for e in entries {
            *tally.counts.entry(Correspondence { lat: e.lat, han: e.han }).or_insert(0) += e.count;
        }
        tally
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries())?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write tally: {}", path.display()))?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tally: {}", path.display()))?;
        let entries: Vec<TallyEntry> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse tally: {}", path.display()))?;
        Ok(Tally::from_entries(entries))
    }
}

fn pairs_for(lat: &str, han: &str, mode: TallyMode, location: &str) -> Result<Vec<Correspondence>, TallyError> {
    let (lat_zi, han_zi) = split_chars(lat, han);

    let mismatch = |lat_count: usize, han_count: usize| TallyError::Mismatch {
        location: location.to_string(),
        lat: lat.to_string(),
        han: han.to_string(),
        lat_count,
        han_count,
    };

    if lat_zi.len() != han_zi.len() {
        return Err(mismatch(lat_zi.len(), han_zi.len()));
    }

    match mode {
        TallyMode::Characters => Ok(lat_zi
            .iter()
            .zip(han_zi.iter())
            .map(|(l, h)| Correspondence::new(l, h))
            .collect()),
        // Syllables can agree while hyphenation does not, e.g. a dangling hyphen.
        TallyMode::Words => align_words(&lat_words(lat), &han_zi)
            .map_err(|e| mismatch(e.words_demand, e.chars_supply)),
    }
}

/// Count correspondences over every book name and verse of the corpus.
///
/// Stops at the first book name or verse whose two sides do not have the
/// same number of syllables and characters.
pub fn tally_corpus(corpus: &Corpus, mode: TallyMode) -> Result<Tally, TallyError> {
    let mut tally = Tally::new();

    for book in &corpus.books {
        let location = format!("{} (book name, line {})", book.name.han, book.name.line_no);
        let pairs = pairs_for(&book.name.lat, &book.name.han, mode, &location).inspect_err(|e| error(&e.to_string()))?;
        tally.update(pairs);

        for chapter in &book.chapters {
            for (_, verse) in chapter.numbered_verses() {
                let location = format!("{}, line {}", book.name.han, verse.line_no);
                let pairs = pairs_for(&verse.lat, &verse.han, mode, &location).inspect_err(|e| error(&e.to_string()))?;
                tally.update(pairs);
            }
        }
    }

    info(&format!("Tally of {} books: {} distinct pairs, {} total", corpus.len(), tally.len(), tally.total()));
    Ok(tally)
}

fn full_width(c: char) -> Option<&'static str> {
    let s = match c {
        ',' => "，",
        '.' => "。",
        ';' => "；",
        ':' => "：",
        '!' => "！",
        '?' => "？",
        '(' => "（",
        ')' => "）",
        '—' => "——",
        _ => return None,
    };
    Some(s)
}

/// Render romanized text in script characters using word counts.
///
/// Words without a known fragment are kept as they are. Notes are dropped,
/// digits kept, and punctuation turned into its full-width form.
pub fn lat_to_han(lat: &str, tally: &Tally) -> String {
    let best = tally.best_han_by_lat();
    let text = strip_notes(lat);
    let mut result = String::new();

    for m in RE_LAT_ITEM.find_iter(&text) {
        let item = m.as_str();
        let first = match item.chars().next() {
            Some(c) => c,
            None => continue,
        };
        if first.is_ascii_digit() {
            result.push_str(item);
        } else if let Some(s) = full_width(first) {
            result.push_str(s);
        } else if "‘’“”".contains(first) {
            result.push_str(item);
        } else {
            result.push_str(best.get(item).copied().unwrap_or(item));
        }
    }

    result
}

/// Render script text in romanized syllables using character counts.
///
/// Each recognized character, a `{...}` group included, is looked up as one
/// unit. A character read several ways gives all readings joined by "/".
/// Unknown characters are kept. Consecutive characters are separated by a
/// space, any other text in between is copied and ends the run.
pub fn han_to_lat(han: &str, tally: &Tally) -> String {
    let forms = tally.lat_forms_by_han();
    let mut result = String::new();
    let mut need_space = false;
    let mut last_end = 0;

    for m in RE_HAN_CHAR.find_iter(han) {
        let between = &han[last_end..m.start()];
        if !between.is_empty() {
            result.push_str(between);
            need_space = false;
        }
        if need_space {
            result.push(' ');
        }
        match forms.get(m.as_str()) {
            Some(readings) => result.push_str(&readings.join("/")),
            None => result.push_str(m.as_str()),
        }
        need_space = true;
        last_end = m.end();
    }
    result.push_str(&han[last_end..]);

    result
}

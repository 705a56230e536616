//! Splitting a verse into romanized and script tokens.
//!
//! The two streams are tokenized independently. Romanized text is split by
//! explicit hyphenation: a word is a run of letters and hyphens, a syllable a
//! run of letters. Script text is split one character at a time, where a
//! `{...}` group counts as one compound character.
//!
//! Bracketed notes `[...]` in the romanized text are not translated and are
//! left out of both word and syllable lists.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Token;

lazy_static! {
    pub static ref RE_NOTE: Regex = Regex::new(r"\[.+?\]").unwrap();
    pub static ref RE_LAT_SYLLABLE: Regex = Regex::new(r"['a-zA-ZÜüÔôÖöÆæ]+").unwrap();
    pub static ref RE_LAT_WORD: Regex = Regex::new(r"['a-zA-ZÜüÔôÖöÆæ]['a-zA-ZÜüÔôÖöÆæ-]*").unwrap();
    // Case-insensitive variant, matched against the raw text so spans stay valid.
    static ref RE_LAT_WORD_CI: Regex = Regex::new(r"(?i)['a-zA-ZÜüÔôÖöÆæ]['a-zA-ZÜüÔôÖöÆæ-]*").unwrap();
    pub static ref RE_HAN_CHAR: Regex = Regex::new(
        r"\{.+?\}|[\u{4E00}-\u{9FA5}❓□㾎𧮙䫲𤖼𠡒𣥼䂸㔶䥛䀹㬹㧒]"
    ).unwrap();
}

/// Lowercase and remove every [...] note.
pub fn strip_notes(lat: &str) -> String {
    RE_NOTE.replace_all(&lat.to_lowercase(), "").to_string()
}

/// Lowercase romanized syllables, notes removed.
pub fn lat_syllables(lat: &str) -> Vec<String> {
    let text = strip_notes(lat);
    RE_LAT_SYLLABLE.find_iter(&text).map(|m| m.as_str().to_string()).collect()
}

/// Lowercase hyphen-joined romanized words, notes removed.
pub fn lat_words(lat: &str) -> Vec<String> {
    let text = strip_notes(lat);
    RE_LAT_WORD.find_iter(&text).map(|m| m.as_str().to_string()).collect()
}

/// Script characters, each `{...}` group as one item.
pub fn han_chars(han: &str) -> Vec<String> {
    RE_HAN_CHAR.find_iter(han).map(|m| m.as_str().to_string()).collect()
}

/// Number of script characters a romanized word stands for.
pub fn syllable_count(word: &str) -> usize {
    word.matches('-').count() + 1
}

/// Syllables and characters of a romanized/script pair.
pub fn split_chars(lat: &str, han: &str) -> (Vec<String>, Vec<String>) {
    (lat_syllables(lat), han_chars(han))
}

fn note_spans(lat: &str) -> Vec<Range<usize>> {
    RE_NOTE.find_iter(lat).map(|m| m.range()).collect()
}

/// Romanized words of the raw text with their byte spans.
///
/// Words lying inside a [...] note are dropped by position, so the spans
/// point into `lat` unchanged. Token text is lowercased.
pub fn lat_word_tokens(lat: &str) -> Vec<Token> {
    let notes = note_spans(lat);
    RE_LAT_WORD_CI
        .find_iter(lat)
        .filter(|m| !notes.iter().any(|n| n.start <= m.start() && m.end() <= n.end))
        .map(|m| Token {
            text: m.as_str().to_lowercase(),
            span: m.range(),
        })
        .collect()
}

/// Script characters of the raw text with their byte spans.
pub fn han_char_tokens(han: &str) -> Vec<Token> {
    RE_HAN_CHAR
        .find_iter(han)
        .map(|m| Token {
            text: m.as_str().to_string(),
            span: m.range(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_notes() {
        assert_eq!(strip_notes("Ng [Gr. ego] 'ô-lah"), "ng  'ô-lah");
        assert_eq!(strip_notes("[^1]"), "");
        // Empty brackets are not a note.
        assert_eq!(strip_notes("a []"), "a []");
    }

    #[test]
    fn test_lat_syllables_and_words() {
        let lat = "·3 Yia-su tao, “Ng-he [Gr. hymeis] peh-tsing ky'i!”";
        assert_eq!(lat_syllables(lat), vec!["yia", "su", "tao", "ng", "he", "peh", "tsing", "ky'i"]);
        assert_eq!(lat_words(lat), vec!["yia-su", "tao", "ng-he", "peh-tsing", "ky'i"]);
    }

    #[test]
    fn test_accented_letters() {
        assert_eq!(lat_words("Djün Ô-lông Æh-shü"), vec!["djün", "ô-lông", "æh-shü"]);
        assert_eq!(lat_syllables("Ö-ü"), vec!["ö", "ü"]);
    }

    #[test]
    fn test_han_chars() {
        assert_eq!(han_chars("> 1 耶穌話，{口弗}㾎❓。"), vec!["耶", "穌", "話", "{口弗}", "㾎", "❓"]);
        assert!(han_chars("> 1, 2.").is_empty());
    }

    #[test]
    fn test_syllable_count() {
        assert_eq!(syllable_count("tao"), 1);
        assert_eq!(syllable_count("yia-su"), 2);
        assert_eq!(syllable_count("t'ih-sæh-lo-nyi-kô"), 5);
    }

    #[test]
    fn test_word_tokens_skip_notes_and_keep_spans() {
        let lat = "·Pao-lo [Gr. Paulos] Lo-mô";
        let tokens = lat_word_tokens(lat);
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["pao-lo", "lo-mô"]);
        for t in &tokens {
            assert_eq!(lat[t.span.clone()].to_lowercase(), t.text);
        }
    }

    #[test]
    fn test_char_tokens_spans() {
        let han = "> 保羅{口弗}";
        let tokens = han_char_tokens(han);
        assert_eq!(tokens.len(), 3);
        assert_eq!(&han[tokens[2].span.clone()], "{口弗}");
        assert!(tokens[0].span.end <= tokens[1].span.start);
    }
}

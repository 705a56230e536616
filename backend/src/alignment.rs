//! Word-level alignment of romanized words with script characters.
//!
//! Each romanized word takes as many script characters as it has syllables,
//! consumed left to right. There is no backtracking: when the totals do not
//! agree the verse cannot be aligned and an [`AlignmentMismatch`] is returned.

use crate::errors::AlignmentMismatch;
use crate::tokenize::{han_char_tokens, han_chars, lat_word_tokens, lat_words, syllable_count};
use crate::types::{AlignedWord, Correspondence, Token};

fn check_demand<'a, I>(words: I, chars_supply: usize) -> Result<(), AlignmentMismatch>
where
    I: Iterator<Item = &'a str>,
{
    let words_demand: usize = words.map(syllable_count).sum();
    if words_demand != chars_supply {
        return Err(AlignmentMismatch { words_demand, chars_supply });
    }
    Ok(())
}

/// Pair every word with its group of characters.
pub fn align_words<S: AsRef<str>>(words: &[S], chars: &[S]) -> Result<Vec<Correspondence>, AlignmentMismatch> {
    check_demand(words.iter().map(|w| w.as_ref()), chars.len())?;

    let mut pairs = Vec::with_capacity(words.len());
    let mut index = 0;
    for word in words {
        let word = word.as_ref();
        let count = syllable_count(word);
        let han: String = chars[index..index + count].iter().map(|c| c.as_ref()).collect();
        pairs.push(Correspondence {
            lat: word.to_string(),
            han,
        });
        index += count;
    }

    Ok(pairs)
}

/// Tokenize a romanized/script pair and align it by words.
pub fn align_verse(lat: &str, han: &str) -> Result<Vec<Correspondence>, AlignmentMismatch> {
    align_words(&lat_words(lat), &han_chars(han))
}

/// Align and report where each word and its characters sit in the raw texts.
///
/// Spans are byte ranges into `lat` and `han` as given.
pub fn align_details(lat: &str, han: &str) -> Result<Vec<AlignedWord>, AlignmentMismatch> {
    let words = lat_word_tokens(lat);
    let chars = han_char_tokens(han);
    align_tokens(&words, &chars)
}

pub fn align_tokens(words: &[Token], chars: &[Token]) -> Result<Vec<AlignedWord>, AlignmentMismatch> {
    check_demand(words.iter().map(|w| w.text.as_str()), chars.len())?;

    let mut details = Vec::with_capacity(words.len());
    let mut index = 0;
    for word in words {
        let count = syllable_count(&word.text);
        let group = &chars[index..index + count];
        let han: String = group.iter().map(|c| c.text.as_str()).collect();
        let han_span = group[0].span.start..group[count - 1].span.end;
        details.push(AlignedWord {
            lat: word.text.clone(),
            lat_span: word.span.clone(),
            han,
            han_span,
        });
        index += count;
    }

    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_words() {
        let words = vec!["yia-su", "tao", "ng-he"];
        let chars = vec!["耶", "穌", "話", "你", "些"];
        let pairs = align_words(&words, &chars).unwrap();
        assert_eq!(pairs, vec![
            Correspondence::new("yia-su", "耶穌"),
            Correspondence::new("tao", "話"),
            Correspondence::new("ng-he", "你些"),
        ]);
    }

    #[test]
    fn test_align_mismatch() {
        let err = align_words(&["yia-su", "tao"], &["耶", "穌"]).unwrap_err();
        assert_eq!(err, AlignmentMismatch { words_demand: 3, chars_supply: 2 });

        let err = align_words(&["yia"], &["耶", "穌"]).unwrap_err();
        assert_eq!(err.words_demand, 1);
    }

    #[test]
    fn test_align_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(align_words(&empty, &empty).unwrap().is_empty());
        assert!(align_verse("·1.", "> 1。").unwrap().is_empty());
    }

    #[test]
    fn test_fragments_concatenate_to_char_stream() {
        let lat = "·2 Pao-lo [Gr. Paulos] dziang Lo-mô-nying sia sing.";
        let han = "> 2 保羅將羅馬人寫信。";
        let pairs = align_verse(lat, han).unwrap();
        let joined: String = pairs.iter().map(|p| p.han.as_str()).collect();
        assert_eq!(joined, han_chars(han).concat());
        assert_eq!(pairs[2], Correspondence::new("lo-mô-nying", "羅馬人"));
    }

    #[test]
    fn test_align_details_spans() {
        let lat = "·1 Lo-mô [Gr. Rome] cü Lo-mô.";
        let han = "> 1 羅馬主{口弗}馬。";
        let details = align_details(lat, han).unwrap();
        assert_eq!(details.len(), 3);

        let mut prev_lat_end = 0;
        let mut prev_han_end = 0;
        for d in &details {
            assert_eq!(lat[d.lat_span.clone()].to_lowercase(), d.lat);
            assert_eq!(&han[d.han_span.clone()], d.han);
            assert!(d.lat_span.start >= prev_lat_end);
            assert!(d.han_span.start >= prev_han_end);
            prev_lat_end = d.lat_span.end;
            prev_han_end = d.han_span.end;
        }

        assert_eq!(details[1].lat, "cü");
        assert_eq!(details[1].han, "主");
        assert_eq!(details[2].han, "{口弗}馬");
    }

    #[test]
    fn test_align_details_mismatch() {
        assert!(align_details("·Lo-mô", "> 羅").is_err());
    }
}

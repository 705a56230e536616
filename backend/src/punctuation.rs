//! Punctuation spacing checks for romanized source text.
//!
//! Only verse and overview lines are checked. Problems are reported, never
//! fixed, and never stop the check.

use std::fmt;

use crate::line_info::{LineInfo, LineKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuationIssue {
    /// `[^...]` footnote reference written after a space.
    SpaceBeforeFootnoteRef,
    /// `[` without a closing `]` before the end of the line.
    UnclosedBracket,
    MissingSpaceBefore(char),
    MissingSpaceAfter(char),
    /// `——` where a single `—` belongs.
    DoubledDash,
}

impl fmt::Display for PunctuationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PunctuationIssue::SpaceBeforeFootnoteRef => write!(f, "no space allowed before a [^...] footnote reference"),
            PunctuationIssue::UnclosedBracket => write!(f, "missing ] to match ["),
            PunctuationIssue::MissingSpaceBefore(c) => write!(f, "missing space before {}", c),
            PunctuationIssue::MissingSpaceAfter(c) => write!(f, "missing space after {}", c),
            PunctuationIssue::DoubledDash => write!(f, "doubled —, remove one"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationWarning {
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column in the trimmed line.
    pub column: usize,
    pub issue: PunctuationIssue,
}

impl fmt::Display for PunctuationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.issue)
    }
}

/// Check every verse and overview line of a source file.
pub fn check_punctuation<I, S>(lines: I) -> Vec<PunctuationWarning>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut warnings = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let info = LineInfo::new(line);
        if info.kind != LineKind::Verse && info.kind != LineKind::Preview {
            continue;
        }
        for (column, issue) in check_text(&info.content, info.offset) {
            warnings.push(PunctuationWarning {
                line: idx + 1,
                column,
                issue,
            });
        }
    }

    warnings
}

/// Check one line's content. `offset` is the number of characters in front
/// of the content, so returned columns are relative to the whole line.
pub fn check_text(content: &str, offset: usize) -> Vec<(usize, PunctuationIssue)> {
    // Padded on both sides, so index is the 1-based column within content.
    let text: Vec<char> = std::iter::once('(')
        .chain(content.chars())
        .chain(std::iter::once('\n'))
        .collect();
    let last = text.len() - 1;
    let mut found = Vec::new();
    let mut index = 1;

    while index < last {
        let letter = text[index];
        let prev = text[index - 1];
        let next = text[index + 1];
        let column = index + offset;

        match letter {
            '[' => {
                let is_ref = next == '^';
                if is_ref && prev == ' ' {
                    found.push((column, PunctuationIssue::SpaceBeforeFootnoteRef));
                } else if !is_ref && !" ‘“(".contains(prev) {
                    found.push((column, PunctuationIssue::MissingSpaceBefore('[')));
                }
                while index < last {
                    index += 1;
                    if index == last {
                        found.push((index + offset, PunctuationIssue::UnclosedBracket));
                        break;
                    }
                    if text[index] == ']' {
                        if !is_ref && !"\n )’”".contains(text[index + 1]) {
                            found.push((index + offset, PunctuationIssue::MissingSpaceAfter(']')));
                        }
                        break;
                    }
                }
            }
            ',' | '.' | ';' | ':' | '!' | '?' => {
                if !"\n ’”)]_".contains(next) {
                    found.push((column, PunctuationIssue::MissingSpaceAfter(letter)));
                }
            }
            '‘' => {
                if !" “[(".contains(prev) {
                    found.push((column, PunctuationIssue::MissingSpaceBefore(letter)));
                }
            }
            '“' => {
                if !" ‘[(".contains(prev) {
                    found.push((column, PunctuationIssue::MissingSpaceBefore(letter)));
                }
            }
            '’' => {
                if !"\n ,.:;”)]".contains(next) {
                    found.push((column, PunctuationIssue::MissingSpaceAfter(letter)));
                }
            }
            '”' => {
                if !"\n ,.:;’)]".contains(next) {
                    found.push((column, PunctuationIssue::MissingSpaceAfter(letter)));
                }
            }
            '—' => {
                if !" [(‘“".contains(prev) {
                    found.push((column, PunctuationIssue::MissingSpaceBefore(letter)));
                }
                if next == '—' {
                    found.push((column, PunctuationIssue::DoubledDash));
                    index += 1;
                } else if !"\n ’”)]".contains(next) {
                    found.push((column, PunctuationIssue::MissingSpaceAfter(letter)));
                }
            }
            _ => {}
        }

        index += 1;
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line() {
        assert!(check_text("1 Yia-su tao, “Ng-he [Gr. hymeis] k'ô[^1]!”", 1).is_empty());
        assert!(check_text("", 1).is_empty());
    }

    #[test]
    fn test_missing_space_after_comma() {
        // "·1 a,b": the comma is the 5th character of the line.
        assert_eq!(check_text("1 a,b", 1), vec![(5, PunctuationIssue::MissingSpaceAfter(','))]);
    }

    #[test]
    fn test_brackets() {
        assert_eq!(check_text("a[b] c", 0), vec![(2, PunctuationIssue::MissingSpaceBefore('['))]);
        assert_eq!(check_text("a [b]c", 0), vec![(5, PunctuationIssue::MissingSpaceAfter(']'))]);
        assert_eq!(check_text("a [^1]", 0), vec![(3, PunctuationIssue::SpaceBeforeFootnoteRef)]);
        assert_eq!(check_text("a [b c", 0), vec![(7, PunctuationIssue::UnclosedBracket)]);
        // Reference brackets may be followed by anything.
        assert!(check_text("a[^1]b", 0).is_empty());
    }

    #[test]
    fn test_quotes_and_dashes() {
        assert_eq!(check_text("a“b”", 0), vec![(2, PunctuationIssue::MissingSpaceBefore('“'))]);
        assert_eq!(check_text("“b”c", 0), vec![(3, PunctuationIssue::MissingSpaceAfter('”'))]);
        assert_eq!(check_text("a —— b", 0), vec![(3, PunctuationIssue::DoubledDash)]);
        assert_eq!(
            check_text("a—b", 0),
            vec![(2, PunctuationIssue::MissingSpaceBefore('—')), (2, PunctuationIssue::MissingSpaceAfter('—'))]
        );
    }

    #[test]
    fn test_only_verse_and_overview_lines() {
        let lines = vec![
            "# Lo-mô shü-sing",
            "",
            "> 羅馬書信,",
            "",
            "·1 a,b",
            "",
            "**_Tsæ,ih_**",
        ];
        let warnings = check_punctuation(lines);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], PunctuationWarning { line: 5, column: 5, issue: PunctuationIssue::MissingSpaceAfter(',') });
        assert_eq!(warnings[1].line, 7);
        assert_eq!(warnings[1].column, 7);
    }
}

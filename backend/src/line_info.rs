//! Classification of single source lines by their fixed prefix.
//!
//! Every line of an edition file is one of a small set of kinds, recognized by
//! a leading marker (and for overview lines an optional trailing marker). The
//! classifier strips the decoration and remembers it, so a line can be
//! rebuilt from its parts.

/// Structural role of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `# ` book heading
    Book,
    /// `## ` chapter heading
    Chapter,
    /// `·` verse
    Verse,
    /// `**_` chapter overview
    Preview,
    /// `> **_` translated chapter overview
    TransPreview,
    /// `> ` translation line
    Trans,
    /// `------` footnote block separator
    FootnoteSign,
    /// `[^n]: ` footnote entry
    Footnote,
    Other,
}

pub const BOOK_PREFIX: &str = "# ";
pub const CHAPTER_PREFIX: &str = "## ";
pub const VERSE_PREFIX: &str = "·";
pub const PREVIEW_PREFIX: &str = "**_";
pub const TRANS_PREVIEW_PREFIX: &str = "> **_";
pub const TRANS_PREFIX: &str = "> ";
pub const PREVIEW_SUFFIX: &str = "_**";

const FOOTNOTE_SIGN_MIN_DASHES: usize = 6;
const FOOTNOTE_START: &str = "[^";
const FOOTNOTE_KEY_END: &str = "]: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    pub kind: LineKind,
    pub prefix: String,
    pub suffix: String,
    pub content: String,
    /// Number of chars consumed by the prefix. Used for column numbers.
    pub offset: usize,
}

impl LineInfo {
    /// Classify one line. The line must not end with a newline.
    pub fn new(line: &str) -> LineInfo {
        if let Some(rest) = line.strip_prefix(BOOK_PREFIX) {
            return LineInfo::with_prefix(LineKind::Book, BOOK_PREFIX, rest);
        }
        if let Some(rest) = line.strip_prefix(CHAPTER_PREFIX) {
            return LineInfo::with_prefix(LineKind::Chapter, CHAPTER_PREFIX, rest);
        }
        if let Some(rest) = line.strip_prefix(VERSE_PREFIX) {
            return LineInfo::with_prefix(LineKind::Verse, VERSE_PREFIX, rest);
        }
        if let Some(rest) = line.strip_prefix(PREVIEW_PREFIX) {
            return LineInfo::with_preview_suffix(LineKind::Preview, PREVIEW_PREFIX, rest);
        }
        if let Some(rest) = line.strip_prefix(TRANS_PREVIEW_PREFIX) {
            return LineInfo::with_preview_suffix(LineKind::TransPreview, TRANS_PREVIEW_PREFIX, rest);
        }
        if let Some(rest) = line.strip_prefix(TRANS_PREFIX) {
            return LineInfo::with_prefix(LineKind::Trans, TRANS_PREFIX, rest);
        }
        if is_footnote_sign(line) {
            return LineInfo {
                kind: LineKind::FootnoteSign,
                prefix: String::new(),
                suffix: String::new(),
                content: line.to_string(),
                offset: 0,
            };
        }
        if line.starts_with(FOOTNOTE_START) {
            if let Some(pos) = line.find(FOOTNOTE_KEY_END) {
                let end = pos + FOOTNOTE_KEY_END.len();
                let prefix = &line[..end];
                return LineInfo {
                    kind: LineKind::Footnote,
                    prefix: prefix.to_string(),
                    suffix: String::new(),
                    content: line[end..].to_string(),
                    offset: prefix.chars().count(),
                };
            }
        }

        LineInfo {
            kind: LineKind::Other,
            prefix: String::new(),
            suffix: String::new(),
            content: line.to_string(),
            offset: 0,
        }
    }

    fn with_prefix(kind: LineKind, prefix: &str, rest: &str) -> LineInfo {
        LineInfo {
            kind,
            prefix: prefix.to_string(),
            suffix: String::new(),
            content: rest.to_string(),
            offset: prefix.chars().count(),
        }
    }

    // The suffix is only recorded when present, so that rewrap() gives back
    // the exact line for overviews missing their closing marker.
    fn with_preview_suffix(kind: LineKind, prefix: &str, rest: &str) -> LineInfo {
        let (content, suffix) = match rest.strip_suffix(PREVIEW_SUFFIX) {
            Some(c) => (c, PREVIEW_SUFFIX),
            None => (rest, ""),
        };
        LineInfo {
            kind,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            content: content.to_string(),
            offset: prefix.chars().count(),
        }
    }

    /// Prefix and suffix which the translation line of this line must carry.
    ///
    /// Lines which are already translation-side return their own decoration.
    pub fn trans_prefix_and_suffix(&self) -> (&str, &str) {
        match self.kind {
            LineKind::Book | LineKind::Chapter | LineKind::Verse => (TRANS_PREFIX, ""),
            LineKind::Preview => (TRANS_PREVIEW_PREFIX, PREVIEW_SUFFIX),
            _ => (self.prefix.as_str(), self.suffix.as_str()),
        }
    }

    /// The translation-side kind expected after a source line, if any.
    pub fn expected_trans_kind(&self) -> Option<LineKind> {
        match self.kind {
            LineKind::Book | LineKind::Chapter | LineKind::Verse => Some(LineKind::Trans),
            LineKind::Preview => Some(LineKind::TransPreview),
            _ => None,
        }
    }

    /// Rebuild the original line from prefix, content and suffix.
    pub fn rewrap(&self) -> String {
        format!("{}{}{}", self.prefix, self.content, self.suffix)
    }
}

fn is_footnote_sign(line: &str) -> bool {
    line.chars().take_while(|c| *c == '-').count() >= FOOTNOTE_SIGN_MIN_DASHES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_and_chapter() {
        let b = LineInfo::new("# Mô-t'a djün foh-ing shü");
        assert_eq!(b.kind, LineKind::Book);
        assert_eq!(b.content, "Mô-t'a djün foh-ing shü");
        assert_eq!(b.offset, 2);

        let c = LineInfo::new("## Mt. 4.");
        assert_eq!(c.kind, LineKind::Chapter);
        assert_eq!(c.content, "Mt. 4.");
        assert_eq!(c.offset, 3);
    }

    #[test]
    fn test_verse_offset_counts_chars() {
        let v = LineInfo::new("·1 Ziu-ku Yia-su");
        assert_eq!(v.kind, LineKind::Verse);
        assert_eq!(v.prefix, "·");
        assert_eq!(v.offset, 1);
        assert_eq!(v.content, "1 Ziu-ku Yia-su");
    }

    #[test]
    fn test_preview_suffix() {
        let p = LineInfo::new("**_Yia-su zông-sæn_**");
        assert_eq!(p.kind, LineKind::Preview);
        assert_eq!(p.content, "Yia-su zông-sæn");
        assert_eq!(p.suffix, "_**");

        let tp = LineInfo::new("> **_耶穌上山_**");
        assert_eq!(tp.kind, LineKind::TransPreview);
        assert_eq!(tp.content, "耶穌上山");
        assert_eq!(tp.offset, 5);

        let open = LineInfo::new("**_no closing marker");
        assert_eq!(open.suffix, "");
        assert_eq!(open.rewrap(), "**_no closing marker");
    }

    #[test]
    fn test_trans_preview_before_trans() {
        assert_eq!(LineInfo::new("> **_x_**").kind, LineKind::TransPreview);
        assert_eq!(LineInfo::new("> x").kind, LineKind::Trans);
        assert_eq!(LineInfo::new(">x").kind, LineKind::Other);
    }

    #[test]
    fn test_footnotes() {
        assert_eq!(LineInfo::new("------").kind, LineKind::FootnoteSign);
        assert_eq!(LineInfo::new("----------").kind, LineKind::FootnoteSign);
        assert_eq!(LineInfo::new("-----").kind, LineKind::Other);

        let f = LineInfo::new("[^12]: Some note.");
        assert_eq!(f.kind, LineKind::Footnote);
        assert_eq!(f.prefix, "[^12]: ");
        assert_eq!(f.content, "Some note.");
        assert_eq!(f.offset, 7);

        assert_eq!(LineInfo::new("[^12] no colon").kind, LineKind::Other);
    }

    #[test]
    fn test_other_and_empty() {
        let o = LineInfo::new("plain text");
        assert_eq!(o.kind, LineKind::Other);
        assert_eq!(o.offset, 0);
        assert_eq!(LineInfo::new("").kind, LineKind::Other);
        assert_eq!(LineInfo::new("#no space").kind, LineKind::Other);
    }

    #[test]
    fn test_rewrap_round_trip() {
        let lines = [
            "# Lo-mô shü-sing",
            "## Lm. 1.",
            "·1 Pao-lo, Yia-su Kyi-toh-ke dziang-sæn",
            "**_Kyi-toh-ke sing_**",
            "> **_基督个信_**",
            "> 保羅，耶穌基督个",
            "--------",
            "[^1]: a note",
            "anything else",
        ];
        for line in lines {
            assert_eq!(LineInfo::new(line).rewrap(), line);
        }
    }

    #[test]
    fn test_trans_prefix_and_suffix() {
        assert_eq!(LineInfo::new("# x").trans_prefix_and_suffix(), ("> ", ""));
        assert_eq!(LineInfo::new("## x").trans_prefix_and_suffix(), ("> ", ""));
        assert_eq!(LineInfo::new("·x").trans_prefix_and_suffix(), ("> ", ""));
        assert_eq!(LineInfo::new("**_x_**").trans_prefix_and_suffix(), ("> **_", "_**"));
        assert_eq!(LineInfo::new("> **_x_**").trans_prefix_and_suffix(), ("> **_", "_**"));
        assert_eq!(LineInfo::new("> x").trans_prefix_and_suffix(), ("> ", ""));
        assert_eq!(LineInfo::new("[^1]: y").trans_prefix_and_suffix(), ("[^1]: ", ""));
    }
}

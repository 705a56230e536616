use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A structural rule of the edition format which a source file broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatViolation {
    #[error("missing blank line after book heading")]
    MissingBlankAfterBookHeading,
    #[error("book heading has no translation")]
    BookNotTranslated,
    #[error("missing blank line after book heading translation")]
    MissingBlankAfterBookTranslation,
    #[error("a second book heading in the same file")]
    DuplicateBookHeading,
    #[error("chapter heading before any book heading")]
    ChapterBeforeBook,
    #[error("missing blank line after chapter heading")]
    MissingBlankAfterChapterHeading,
    #[error("chapter heading has no translation")]
    ChapterNotTranslated,
    #[error("missing blank line after chapter heading translation")]
    MissingBlankAfterChapterTranslation,
    #[error("verse before any chapter")]
    VerseBeforeChapter,
    #[error("missing blank line after verse")]
    MissingBlankAfterVerse,
    #[error("verse has no translation")]
    VerseNotTranslated,
    #[error("overview has no translation")]
    OverviewNotTranslated,
    #[error("missing blank line after verse or overview translation")]
    MissingBlankAfterVerseTranslation,
    #[error("overview must come once, before the first verse of its chapter")]
    MisplacedOverview,
    #[error("unrecognized line")]
    UnrecognizedLine,
    #[error("file has no book heading")]
    MissingBookHeading,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("in {source_name}: line {line}: {violation}")]
    Format {
        source_name: String,
        line: usize,
        violation: FormatViolation,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn violation(&self) -> Option<&FormatViolation> {
        match self {
            LoadError::Format { violation, .. } => Some(violation),
            LoadError::Io { .. } => None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Format { line, .. } => Some(*line),
            LoadError::Io { .. } => None,
        }
    }
}

/// Romanized words demand a different number of script characters than the
/// script text supplies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("romanized words need {words_demand} characters, script text has {chars_supply}")]
pub struct AlignmentMismatch {
    pub words_demand: usize,
    pub chars_supply: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("{location}: romanized and script character counts differ ({lat_count} vs {han_count})\n    lat: {lat}\n    han: {han}")]
    Mismatch {
        location: String,
        lat: String,
        han: String,
        lat_count: usize,
        han_count: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidQuery {
    #[error("query is empty or has no romanized syllables or script characters")]
    Empty,
    #[error("query syllable counts differ: lat {lat_count}, han {han_count}")]
    CountMismatch { lat_count: usize, han_count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidQuery),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("target path is the same as the origin path: {}", .0.display())]
    SameAsOrigin(PathBuf),
    #[error("target path already exists, remove it first to regenerate: {}", .0.display())]
    TargetExists(PathBuf),
    #[error("template i/o failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TemplateError {
    pub fn is_path_conflict(&self) -> bool {
        matches!(self, TemplateError::SameAsOrigin(_) | TemplateError::TargetExists(_))
    }
}

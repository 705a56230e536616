//! Loading one edition file into a [`Book`].
//!
//! The loader is a small state machine driven over a line cursor. Each record
//! in the file is a source line, a blank line, its translation line and
//! another blank line; the machine reads the whole record at once and stops at
//! the first structural violation. Nothing is returned for a file which fails.
//!
//! The line source is any iterator of lines, so the machine is tested without
//! touching the file system. [`load_book`] is the file-backed entry point.

use std::fs;
use std::path::Path;

use crate::errors::{FormatViolation, LoadError};
use crate::line_info::{LineInfo, LineKind};
use crate::logger::{debug, info};
use crate::types::{Book, BookName, Chapter, Verse};

/// Iterator over source lines which counts line numbers (1-indexed).
pub struct LineCursor<I> {
    lines: I,
    line_no: usize,
}

impl<I, S> LineCursor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        LineCursor { lines, line_no: 0 }
    }

    /// Line number of the most recently returned line, 0 before the first.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn next_line(&mut self) -> Option<(usize, String)> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some((self.line_no, line.as_ref().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Start,
    InBook,
    InChapter,
    InFootnotes,
    Failed,
}

type Violation = (usize, FormatViolation);

/// Builds one book from a line cursor.
pub struct BookLoader {
    source_name: String,
    state: LoaderState,
    name: Option<BookName>,
    chapters: Vec<Chapter>,
    footnotes: Vec<String>,
}

impl BookLoader {
    pub fn new(source_name: &str) -> Self {
        BookLoader {
            source_name: source_name.to_string(),
            state: LoaderState::Start,
            name: None,
            chapters: Vec::new(),
            footnotes: Vec::new(),
        }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Consume every line of the cursor and build the book.
    ///
    /// After a failure the loader stays in [`LoaderState::Failed`].
    pub fn run<I, S>(&mut self, cursor: &mut LineCursor<I>) -> Result<Book, LoadError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        while let Some((line_no, line)) = cursor.next_line() {
            if let Err((err_line, violation)) = self.step(line_no, &line, cursor) {
                self.state = LoaderState::Failed;
                debug(&format!("{}: failed at line {}: {}", self.source_name, err_line, violation));
                return Err(LoadError::Format {
                    source_name: self.source_name.clone(),
                    line: err_line,
                    violation,
                });
            }
        }

        let name = match self.name.take() {
            Some(name) => name,
            None => {
                self.state = LoaderState::Failed;
                return Err(LoadError::Format {
                    source_name: self.source_name.clone(),
                    line: cursor.line_no() + 1,
                    violation: FormatViolation::MissingBookHeading,
                });
            }
        };

        Ok(Book {
            source: self.source_name.clone(),
            name,
            chapters: std::mem::take(&mut self.chapters),
            footnotes: std::mem::take(&mut self.footnotes),
        })
    }

    fn step<I, S>(&mut self, line_no: usize, line: &str, cursor: &mut LineCursor<I>) -> Result<(), Violation>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        if line.is_empty() {
            return Ok(());
        }

        let stripped = line.trim();

        if self.state == LoaderState::InFootnotes {
            self.footnotes.push(stripped.to_string());
            return Ok(());
        }

        let line_info = LineInfo::new(stripped);

        match line_info.kind {
            LineKind::Book => {
                if self.state != LoaderState::Start {
                    return Err((line_no, FormatViolation::DuplicateBookHeading));
                }
                expect_blank(cursor, line_no, FormatViolation::MissingBlankAfterBookHeading)?;
                let (han_line_no, han) = expect_trans(cursor, line_no, &line_info, FormatViolation::BookNotTranslated)?;
                expect_blank(cursor, han_line_no, FormatViolation::MissingBlankAfterBookTranslation)?;
                self.name = Some(BookName {
                    line_no,
                    lat: line_info.content,
                    han: han.content,
                });
                self.state = LoaderState::InBook;
            }

            LineKind::Chapter => {
                if self.state == LoaderState::Start {
                    return Err((line_no, FormatViolation::ChapterBeforeBook));
                }
                let mut chapter = Chapter::new(line_no, &line_info.content);
                expect_blank(cursor, line_no, FormatViolation::MissingBlankAfterChapterHeading)?;
                let (han_line_no, han) = expect_trans(cursor, line_no, &line_info, FormatViolation::ChapterNotTranslated)?;
                expect_blank(cursor, han_line_no, FormatViolation::MissingBlankAfterChapterTranslation)?;
                chapter.han_title = han.content;
                self.chapters.push(chapter);
                self.state = LoaderState::InChapter;
            }

            LineKind::Verse | LineKind::Preview => {
                let is_overview = line_info.kind == LineKind::Preview;
                let chapter = match self.chapters.last_mut() {
                    Some(c) if self.state == LoaderState::InChapter => c,
                    _ => return Err((line_no, FormatViolation::VerseBeforeChapter)),
                };
                if is_overview && (chapter.overview.is_some() || !chapter.verses.is_empty()) {
                    return Err((line_no, FormatViolation::MisplacedOverview));
                }

                expect_blank(cursor, line_no, FormatViolation::MissingBlankAfterVerse)?;
                let not_translated = if is_overview {
                    FormatViolation::OverviewNotTranslated
                } else {
                    FormatViolation::VerseNotTranslated
                };
                let (han_line_no, han) = expect_trans(cursor, line_no, &line_info, not_translated)?;

                let verse = Verse {
                    line_no,
                    lat: stripped.to_string(),
                    han: han.rewrap(),
                };
                if is_overview {
                    chapter.overview = Some(verse);
                } else {
                    chapter.verses.push(verse);
                }

                expect_blank(cursor, han_line_no, FormatViolation::MissingBlankAfterVerseTranslation)?;
            }

            LineKind::FootnoteSign => {
                self.state = LoaderState::InFootnotes;
            }

            _ => return Err((line_no, FormatViolation::UnrecognizedLine)),
        }

        Ok(())
    }
}

/// Read the next line, which must be blank. A violation cites `about`, the
/// line the missing blank belongs to.
fn expect_blank<I, S>(cursor: &mut LineCursor<I>, about: usize, violation: FormatViolation) -> Result<(), Violation>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    match cursor.next_line() {
        Some((_, line)) if line.is_empty() => Ok(()),
        _ => Err((about, violation)),
    }
}

/// Read the translation line of `source`, returning its line number too.
fn expect_trans<I, S>(
    cursor: &mut LineCursor<I>,
    about: usize,
    source: &LineInfo,
    violation: FormatViolation,
) -> Result<(usize, LineInfo), Violation>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let expected = source.expected_trans_kind();
    match cursor.next_line() {
        Some((line_no, line)) => {
            let line_info = LineInfo::new(line.trim());
            if Some(line_info.kind) == expected {
                Ok((line_no, line_info))
            } else {
                Err((about, violation))
            }
        }
        None => Err((about, violation)),
    }
}

/// Load a book from a sequence of lines without line terminators.
pub fn load_lines<I, S>(source_name: &str, lines: I) -> Result<Book, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cursor = LineCursor::new(lines.into_iter());
    let mut loader = BookLoader::new(source_name);
    loader.run(&mut cursor)
}

/// Load a book from an edition file.
pub fn load_book(path: &Path) -> Result<Book, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let book = load_lines(&path.display().to_string(), text.lines())?;

    info(&format!(
        "Loaded {} ({}) from {}: {} chapters",
        book.name.lat,
        book.name.han,
        path.display(),
        book.chapters.len()
    ));

    Ok(book)
}

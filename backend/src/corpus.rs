//! The loaded edition: an ordered list of books with read-only lookups.

use std::path::Path;

use crate::book_names::find_book_no;
use crate::errors::LoadError;
use crate::loader::load_book;
use crate::logger::{error, info};
use crate::types::{Book, Chapter, CorpusStats, Verse};

/// Where a verse sits in the corpus. All numbers are 1-based, except
/// `verse_no`, which is 0 for a chapter overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseLocation {
    pub book_no: usize,
    pub chapter_no: usize,
    pub verse_no: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub books: Vec<Book>,
}

impl Corpus {
    pub fn from_books(books: Vec<Book>) -> Self {
        Corpus { books }
    }

    /// Load every file in order. Fails as a whole if any file fails.
    pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Corpus, LoadError> {
        let mut books = Vec::with_capacity(paths.len());
        for path in paths {
            match load_book(path.as_ref()) {
                Ok(book) => books.push(book),
                Err(e) => {
                    error(&format!("{}", e));
                    return Err(e);
                }
            }
        }
        info(&format!("Loaded {} books", books.len()));
        Ok(Corpus { books })
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Book by its position in the corpus (1-based).
    pub fn book(&self, book_no: usize) -> Option<&Book> {
        if book_no == 0 {
            return None;
        }
        self.books.get(book_no - 1)
    }

    /// Position (1-based) of the book with the given name or abbreviation.
    ///
    /// The name is resolved through the book-name table and compared with
    /// what the loaded books' own headings resolve to.
    pub fn book_no_by_name(&self, name: &str) -> Option<usize> {
        let wanted = find_book_no(name)?;
        self.books
            .iter()
            .position(|b| find_book_no(&b.name.lat) == Some(wanted) || find_book_no(&b.name.han) == Some(wanted))
            .map(|i| i + 1)
    }

    pub fn book_by_name(&self, name: &str) -> Option<&Book> {
        self.book_no_by_name(name).and_then(|no| self.book(no))
    }

    /// Accepts either a number or a book name.
    pub fn resolve_book(&self, book: &str) -> Option<usize> {
        let book = book.trim();
        if !book.is_empty() && book.chars().all(|c| c.is_ascii_digit()) {
            let no: usize = book.parse().ok()?;
            return self.book(no).map(|_| no);
        }
        self.book_no_by_name(book)
    }

    pub fn chapter(&self, book_no: usize, chapter_no: usize) -> Option<&Chapter> {
        if chapter_no == 0 {
            return None;
        }
        self.book(book_no)?.chapters.get(chapter_no - 1)
    }

    /// Verse by (book, chapter, verse). Verse 0 is the chapter overview.
    pub fn get_verse(&self, book_no: usize, chapter_no: usize, verse_no: usize) -> Option<&Verse> {
        self.chapter(book_no, chapter_no)?.verse(verse_no)
    }

    /// Like `get_verse()`, with the book given as a number or a name.
    pub fn get_verse_by_ref(&self, book: &str, chapter_no: usize, verse_no: usize) -> Option<&Verse> {
        let book_no = self.resolve_book(book)?;
        self.get_verse(book_no, chapter_no, verse_no)
    }

    /// Every verse with its location and book, in document order.
    pub fn verses(&self) -> impl Iterator<Item = (VerseLocation, &Book, &Verse)> {
        self.books.iter().enumerate().flat_map(|(bi, book)| {
            book.chapters.iter().enumerate().flat_map(move |(ci, chapter)| {
                chapter.numbered_verses().map(move |(verse_no, verse)| {
                    let location = VerseLocation {
                        book_no: bi + 1,
                        chapter_no: ci + 1,
                        verse_no,
                    };
                    (location, book, verse)
                })
            })
        })
    }

    /// Call `oper` on every verse, in document order.
    pub fn for_each_verse<F>(&self, mut oper: F)
    where
        F: FnMut(&Verse),
    {
        for (_, _, verse) in self.verses() {
            oper(verse);
        }
    }

    pub fn stats(&self) -> CorpusStats {
        let mut stats = CorpusStats {
            books: self.books.len(),
            ..Default::default()
        };
        for book in &self.books {
            stats.chapters += book.chapters.len();
            stats.footnotes += book.footnotes.len();
            for chapter in &book.chapters {
                stats.verses += chapter.verses.len();
                if chapter.overview.is_some() {
                    stats.overviews += 1;
                }
            }
        }
        stats
    }
}

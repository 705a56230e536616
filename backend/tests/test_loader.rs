mod helpers;
use helpers as h;

use taizhou_backend::corpus::{Corpus, VerseLocation};
use taizhou_backend::errors::{FormatViolation, LoadError};
use taizhou_backend::loader::{load_book, load_lines};

#[test]
fn test_load_sample_book() {
    h::app_setup();
    let book = load_lines("romans.md", h::ROMANS.lines()).unwrap();

    assert_eq!(book.name.lat, "Lo-mô shü-sing");
    assert_eq!(book.name.han, "羅馬書信");
    assert_eq!(book.name.line_no, 1);
    assert_eq!(book.chapters.len(), 1);

    let chapter = &book.chapters[0];
    assert_eq!(chapter.title, "Lm. 1.");
    assert_eq!(chapter.han_title, "羅馬 1.");
    assert_eq!(chapter.overview.as_ref().unwrap().han, "> **_保羅寫信。_**");
    assert_eq!(chapter.verses.len(), 2);
    assert_eq!(chapter.verses[0].line_no, 13);
    assert_eq!(chapter.verses[1].lat, "·2 Lo-mô-nying tao, “Lo-mô!”");
    assert_eq!(book.footnotes, vec!["[^1]: Gr. Paulos.".to_string()]);
}

#[test]
fn test_line_numbers_increase() {
    let book = load_lines("romans.md", h::ROMANS.lines()).unwrap();
    let mut prev = book.name.line_no;
    for chapter in &book.chapters {
        assert!(chapter.line_no > prev);
        prev = chapter.line_no;
        for (_, verse) in chapter.numbered_verses() {
            assert!(verse.line_no > prev);
            prev = verse.line_no;
        }
    }
}

#[test]
fn test_load_book_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = h::write_book(dir.path(), "06.md", h::ROMANS);
    let book = load_book(&path).unwrap();
    assert_eq!(book.source, path.display().to_string());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_book(&dir.path().join("missing.md")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.violation().is_none());
}

#[test]
fn test_untranslated_verse_reports_line() {
    let text = h::ROMANS.replace("> 2 羅馬人話：“羅馬！”", "2 羅馬人話：“羅馬！”");
    let err = load_lines("romans.md", text.lines()).unwrap_err();
    assert_eq!(err.violation(), Some(&FormatViolation::VerseNotTranslated));
    assert_eq!(err.line(), Some(17));
    assert!(err.to_string().contains("romans.md"));
}

#[test]
fn test_corpus_load_is_all_or_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let good = h::write_book(dir.path(), "01.md", h::MATTHEW);
    let bad = h::write_book(dir.path(), "06.md", "## Lm. 1.\n\n> 羅馬 1.\n\n");

    let err = Corpus::load_files(&[good.clone(), bad]).unwrap_err();
    assert_eq!(err.violation(), Some(&FormatViolation::ChapterBeforeBook));

    let corpus = Corpus::load_files(&[good]).unwrap();
    assert_eq!(corpus.len(), 1);
}

#[test]
fn test_corpus_lookup() {
    let corpus = h::sample_corpus();

    let overview = corpus.get_verse(1, 1, 0).unwrap();
    assert_eq!(overview.lat, "**_Pao-lo sia sing._**");
    assert_eq!(corpus.get_verse(1, 1, 2).unwrap().han, "> 2 羅馬人話：“羅馬！”");
    assert!(corpus.get_verse(1, 1, 3).is_none());
    assert!(corpus.get_verse(1, 2, 1).is_none());
    assert!(corpus.get_verse(3, 1, 1).is_none());
    assert!(corpus.get_verse(0, 1, 1).is_none());

    // Book numbers are load positions, names resolve against loaded headings.
    assert_eq!(corpus.resolve_book("2"), Some(2));
    assert_eq!(corpus.resolve_book("Matt"), Some(2));
    assert_eq!(corpus.resolve_book("羅"), Some(1));
    assert_eq!(corpus.resolve_book("Luke"), None);
    assert_eq!(corpus.resolve_book("5"), None);
    assert_eq!(corpus.get_verse_by_ref("mt", 1, 1).unwrap().han, "> 1 耶穌話。");

    assert_eq!(corpus.book_by_name("馬太傳福音書").unwrap().source, "matthew.md");
    assert_eq!(corpus.book_by_name("Lo-mô shü-sing.").unwrap().name.han, "羅馬書信");
    assert!(corpus.book_by_name("Rev").is_none());
}

#[test]
fn test_corpus_iteration_and_stats() {
    let corpus = h::sample_corpus();

    let locations: Vec<VerseLocation> = corpus.verses().map(|(loc, _, _)| loc).collect();
    assert_eq!(locations.len(), 4);
    assert_eq!(locations[0], VerseLocation { book_no: 1, chapter_no: 1, verse_no: 0 });
    assert_eq!(locations[3], VerseLocation { book_no: 2, chapter_no: 1, verse_no: 1 });

    let mut count = 0;
    corpus.for_each_verse(|_| count += 1);
    assert_eq!(count, 4);

    let stats = corpus.stats();
    assert_eq!(stats.books, 2);
    assert_eq!(stats.chapters, 2);
    assert_eq!(stats.verses, 3);
    assert_eq!(stats.overviews, 1);
    assert_eq!(stats.footnotes, 1);
}

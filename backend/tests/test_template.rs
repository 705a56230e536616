mod helpers;
use helpers as h;

use std::fs;

use taizhou_backend::app_settings::EditionSettings;
use taizhou_backend::loader::load_lines;
use taizhou_backend::tally::{TallyMode, tally_corpus};
use taizhou_backend::template::{generate_translation_file, render_translation_template};

const SOURCE: &str = "\
# Lo-mô shü-sing

## Lm. 1.

**_Pao-lo sia sing._**

·1 Pao-lo dziang Lo-mô-nying sia sing.

";

#[test]
fn test_prefilled_template_loads() {
    let corpus = h::sample_corpus();
    let tally = tally_corpus(&corpus, TallyMode::Words).unwrap();

    let rendered = render_translation_template(SOURCE.lines(), Some(&tally));
    let book = load_lines("temp.md", rendered.lines()).unwrap();

    assert_eq!(book.name.han, "羅馬書信");
    assert_eq!(book.chapters[0].han_title, "Lm. 1.");
    assert_eq!(book.chapters[0].overview.as_ref().unwrap().han, "> **_保羅寫信。_**");
    assert_eq!(book.chapters[0].verses[0].han, "> 1 保羅將羅馬人寫信。");
}

#[test]
fn test_empty_template_loads_once_filled() {
    let rendered = render_translation_template(SOURCE.lines(), None);
    assert!(load_lines("temp.md", rendered.lines()).is_err());

    let filled = rendered
        .replace("> \n", "> 甲\n")
        .replace("> **__**", "> **_乙_**");
    let book = load_lines("temp.md", filled.lines()).unwrap();
    assert_eq!(book.name.han, "甲");
    assert_eq!(book.chapters[0].verses.len(), 1);
}

#[test]
fn test_generate_file_and_conflicts() {
    h::app_setup();
    let dir = tempfile::tempdir().unwrap();
    let origin = h::write_book(dir.path(), "06.md", SOURCE);
    let settings = EditionSettings::default();

    let written = generate_translation_file(&origin, None, None, &settings).unwrap();
    assert_eq!(written, dir.path().join("temp.md"));
    assert!(fs::read_to_string(&written).unwrap().starts_with("# Lo-mô shü-sing\n\n> \n"));

    // An existing target is never overwritten.
    let err = generate_translation_file(&origin, None, None, &settings).unwrap_err();
    assert!(err.is_path_conflict());

    let err = generate_translation_file(&origin, Some(&origin), None, &settings).unwrap_err();
    assert!(err.is_path_conflict());

    let target = dir.path().join("06.trans.md");
    let written = generate_translation_file(&origin, Some(&target), None, &settings).unwrap();
    assert_eq!(written, target);
}

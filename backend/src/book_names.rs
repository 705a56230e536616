//! Lookup of New Testament book numbers by name.
//!
//! Every book has a list of keywords: script abbreviations and full names in
//! simplified and traditional characters, the English abbreviation, the
//! romanized title and the romanized abbreviation used in chapter titles.

use std::collections::HashMap;

use lazy_static::lazy_static;

pub const BOOK_KEYWORDS: [(usize, &[&str]); 27] = [
    (1, &["太", "Matt", "马太", "馬太", "马太福音", "馬太福音", "马太传福音书", "馬太傳福音書", "mô-t'a djün foh-ing shü", "mt"]),
    (2, &["可", "Mark", "马可", "馬可", "马可福音", "馬可福音", "马可传福音书", "馬可傳福音書", "mô-k'o djün foh-ing shü", "mk"]),
    (3, &["路", "Luke", "路加", "路加福音", "路加传福音书", "路加傳福音書", "lu-kô djün foh-ing shü", "lk"]),
    (4, &["約", "约", "John", "约翰", "約翰", "约翰福音", "約翰福音", "约翰传福音书", "約翰傳福音書", "iah-'ön djün foh-ing shü", "iö"]),
    (5, &["徒", "Acts", "使徒", "使徒行传", "使徒行傳", "s-du 'ang-djün", "sd"]),
    (6, &["羅", "罗", "Rom", "罗马", "羅馬", "罗马书信", "羅馬書信", "lo-mô shü-sing", "lm"]),
    (7, &["林前", "1 Cor", "哥林多前", "哥林多1", "哥林多一", "哥林多上", "哥林多书信 1", "哥林多書信 1", "1 ko-ling-to shü-sing", "1 k"]),
    (8, &["林後", "林后", "2 Cor", "哥林多后", "哥林多後", "哥林多2", "哥林多二", "哥林多下", "哥林多书信 2", "哥林多書信 2", "2 ko-ling-to shü-sing", "2 k"]),
    (9, &["加", "Gal", "加拉太", "加拉太书信", "加拉太書信", "kô-læh-t'a shü-sing", "kô"]),
    (10, &["弗", "Eph", "以弗所", "以弗所书信", "以弗所書信", "yi-feh-su shü-sing", "yf"]),
    (11, &["腓", "Phil", "腓立比", "腓立比书信", "腓立比書信", "fi-lih-pi shü-sing", "fl"]),
    (12, &["西", "Col", "歌罗西", "歌羅西", "歌罗西书信", "歌羅西書信", "ko-lo-si shü-sing", "kl"]),
    (13, &["帖前", "1 Thess", "帖撒前", "帖撒1", "帖撒一", "帖撒上", "帖撒罗尼迦前", "帖撒羅尼迦前", "帖撒罗尼迦书信 1", "帖撒羅尼迦書信 1", "1 t'ih-sæh-lo-nyi-kô shü-sing", "1 t"]),
    (14, &["帖後", "帖后", "2 Thess", "帖撒后", "帖撒後", "帖撒2", "帖撒二", "帖撒下", "帖撒罗尼迦后", "帖撒羅尼迦後", "帖撒罗尼迦书信 2", "帖撒羅尼迦書信 2", "2 t'ih-sæh-lo-nyi-kô shü-sing", "2 t"]),
    (15, &["提前", "1 Tim", "提摩太前", "提摩太1", "提摩太一", "提摩太上", "提摩太书信 1", "提摩太書信 1", "1 di-mo-t'a shü-sing", "1d"]),
    (16, &["提後", "提后", "2 Tim", "提摩太后", "提摩太後", "提摩太2", "提摩太二", "提摩太下", "提摩太书信 2", "提摩太書信 2", "2 di-mo-t'a shü-sing", "2d"]),
    (17, &["多", "Titus", "提多", "提多书信", "提多書信", "di-to shü-sing", "dt"]),
    (18, &["門", "门", "Philem", "腓利门", "腓利門", "腓利门书信", "腓利門書信", "fi-li-meng shü-sing", "flm"]),
    (19, &["來", "来", "Heb", "希伯来", "希伯來", "希伯来书信", "希伯來書信", "hyi-pah-le shü-sing", "h"]),
    (20, &["雅", "James", "雅各", "雅各书信", "雅各書信", "ngô-kôh shü-sing", "nk"]),
    (21, &["彼前", "1 Pet", "彼得前", "彼得1", "彼得一", "彼得上", "彼得书信 1", "彼得書信 1", "1 pi-teh shü-sing", "1 p"]),
    (22, &["彼後", "彼后", "2 Pet", "彼得后", "彼得後", "彼得2", "彼得二", "彼得下", "彼得书信 2", "彼得書信 2", "2 pi-teh shü-sing", "2 p"]),
    (23, &["約一", "约一", "1 John", "约翰1", "約翰1", "约翰一", "約翰一", "约翰上", "約翰上", "约翰书信 1", "約翰書信 1", "1 iah-'ön shü-sing", "1 iö"]),
    (24, &["約二", "约二", "2 John", "约翰2", "約翰2", "约翰二", "約翰二", "约翰中", "約翰中", "约翰书信 2", "約翰書信 2", "2 iah-'ön shü-sing", "2 iö"]),
    (25, &["約三", "约三", "3 John", "约翰3", "約翰3", "约翰三", "約翰三", "约翰下", "約翰下", "约翰书信 3", "約翰書信 3", "3 iah-'ön shü-sing", "3 iö"]),
    (26, &["猶", "犹", "Jude", "犹大", "猶大", "犹大书信", "猶大書信", "yiu-da shü-sing", "yd"]),
    (27, &["啟", "启", "Rev", "啓", "默", "启示录", "啟示錄", "啓示錄", "默示录", "默示錄", "iah-'ön-keh moh-z-loh", "mz"]),
];

lazy_static! {
    /// Normalized keyword to book number.
    static ref KEYWORD_TO_BOOK_NO: HashMap<String, usize> = {
        let mut map = HashMap::new();
        for (no, keywords) in BOOK_KEYWORDS.iter() {
            for keyword in keywords.iter() {
                map.insert(normalize_book_name(keyword), *no);
            }
        }
        map
    };
}

/// Lowercase and replace the accented letters of the romanization with plain latin ones.
pub fn latinize(text: &str) -> String {
    let accents = ["ô", "ö", "ü", "æ"];
    let latin = ["o", "o", "u", "ae"];
    let mut s = text.to_lowercase();
    for (a, l) in accents.iter().zip(latin.iter()) {
        s = s.replace(a, l);
    }
    s
}

/// Trim, drop trailing periods and apostrophes, lowercase and latinize.
pub fn normalize_book_name(name: &str) -> String {
    let s = name.trim().trim_end_matches('.').replace('\'', "");
    latinize(&s)
}

/// Book number (1-based) for a name or abbreviation, if known.
pub fn find_book_no(book_name: &str) -> Option<usize> {
    let key = normalize_book_name(book_name);
    if key.is_empty() {
        return None;
    }
    KEYWORD_TO_BOOK_NO.get(&key).copied()
}

/// Number of books in the keyword table.
pub fn book_count() -> usize {
    BOOK_KEYWORDS.len()
}

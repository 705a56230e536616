use std::fs;
use std::path::{Path, PathBuf};

use dotenvy::dotenv;

use taizhou_backend::corpus::Corpus;
use taizhou_backend::loader::load_lines;

pub const ROMANS: &str = "\
# Lo-mô shü-sing

> 羅馬書信

## Lm. 1.

> 羅馬 1.

**_Pao-lo sia sing._**

> **_保羅寫信。_**

·1 Pao-lo [Gr. Paulos] dziang Lo-mô-nying sia sing.

> 1 保羅將羅馬人寫信。

·2 Lo-mô-nying tao, “Lo-mô!”

> 2 羅馬人話：“羅馬！”

------

[^1]: Gr. Paulos.
";

pub const MATTHEW: &str = "\
# Mô-t'a djün foh-ing shü

> 馬太傳福音書

## Mt. 1.

> 馬太 1.

·1 Yia-su tao.

> 1 耶穌話。

";

pub fn app_setup() {
    dotenv().ok();
}

#[allow(dead_code)]
pub fn sample_corpus() -> Corpus {
    app_setup();
    let romans = load_lines("romans.md", ROMANS.lines()).unwrap();
    let matthew = load_lines("matthew.md", MATTHEW.lines()).unwrap();
    Corpus::from_books(vec![romans, matthew])
}

#[allow(dead_code)]
pub fn write_book(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

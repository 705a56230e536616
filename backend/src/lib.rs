pub mod types;
pub mod errors;
pub mod logger;
pub mod app_settings;
pub mod line_info;
pub mod loader;
pub mod corpus;
pub mod book_names;
pub mod edition_files;
pub mod tokenize;
pub mod alignment;
pub mod tally;
pub mod cross_reference;
pub mod punctuation;
pub mod template;

use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::error::Error;
use app_dirs::{get_app_root, AppDataType, AppInfo};

pub const APP_INFO: AppInfo = AppInfo{name: "taizhou-bible", author: "taizhou-romanized"};

/// Directory for logs and generated data.
///
/// Uses the TAIZHOU_DIR environment variable if set, otherwise the user data
/// folder of the platform.
pub fn get_create_edition_dir() -> Result<PathBuf, Box<dyn Error>> {
    let p = match env::var("TAIZHOU_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_app_root(AppDataType::UserData, &APP_INFO)?,
    };
    if !p.exists() {
        create_dir_all(&p)?;
    }
    Ok(p)
}

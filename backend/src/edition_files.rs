use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use walkdir::WalkDir;

/// Edition files below a directory with the given extension, sorted by path.
pub fn list_edition_files(root_path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(root_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();

    files.sort();
    Ok(files)
}

/// Expand command line inputs: files are kept as given, directories are
/// replaced by their edition files.
pub fn expand_inputs<P: AsRef<Path>>(inputs: &[P], extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            let found = list_edition_files(input, extension)?;
            if found.is_empty() {
                bail!("No .{} files in directory: {}", extension, input.display());
            }
            paths.extend(found);
        } else if input.is_file() {
            paths.push(input.to_path_buf());
        } else {
            bail!("Input not found: {}", input.display());
        }
    }
    Ok(paths)
}

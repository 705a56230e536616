//! Translation templates: a copy of a romanized source file with an empty
//! (or pre-filled) translation line after every line that needs one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app_settings::EditionSettings;
use crate::errors::TemplateError;
use crate::line_info::{LineInfo, LineKind};
use crate::logger::info;
use crate::tally::{Tally, lat_to_han};

fn prefill(content: &str, tally: Option<&Tally>) -> String {
    match tally {
        Some(t) => lat_to_han(content, t),
        None => String::new(),
    }
}

/// Copy every line and append the translation line each source line calls for.
///
/// Book and verse lines get `> ` followed by the rendered text when a tally
/// is given. Chapter titles are copied as they are. Overview lines get the
/// emphasized translation form.
pub fn render_translation_template<I, S>(lines: I, tally: Option<&Tally>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();

    for line in lines {
        let line = line.as_ref();
        out.push_str(line);
        out.push('\n');

        let info = LineInfo::new(line.trim());
        if info.expected_trans_kind().is_none() {
            continue;
        }
        let (prefix, suffix) = info.trans_prefix_and_suffix();
        let content = match info.kind {
            LineKind::Chapter => info.content.clone(),
            _ => prefill(&info.content, tally),
        };
        out.push('\n');
        out.push_str(prefix);
        out.push_str(&content);
        out.push_str(suffix);
        out.push('\n');
    }

    out
}

/// Target path for a template: the one given, or the configured default
/// name next to the origin file.
pub fn template_target(origin: &Path, target: Option<&Path>, settings: &EditionSettings) -> PathBuf {
    match target {
        Some(t) => t.to_path_buf(),
        None => origin
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&settings.template_default_path),
    }
}

/// Write the template of `origin` and return where it was written.
///
/// An existing file is never overwritten.
pub fn generate_translation_file(
    origin: &Path,
    target: Option<&Path>,
    tally: Option<&Tally>,
    settings: &EditionSettings,
) -> Result<PathBuf, TemplateError> {
    let target = template_target(origin, target, settings);

    if target == origin {
        return Err(TemplateError::SameAsOrigin(target));
    }
    if target.exists() {
        return Err(TemplateError::TargetExists(target));
    }

    let text = fs::read_to_string(origin).map_err(|e| TemplateError::Io {
        path: origin.to_path_buf(),
        source: e,
    })?;
    let rendered = render_translation_template(text.lines(), tally);
    fs::write(&target, rendered).map_err(|e| TemplateError::Io {
        path: target.clone(),
        source: e,
    })?;

    info(&format!("Wrote translation template: {}", target.display()));
    Ok(target)
}

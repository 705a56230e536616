use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Serialize, Deserialize};

/// Glyphs inserted around matched spans by the cross-reference search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMarkers {
    pub lat_open: String,
    pub lat_close: String,
    pub han_open: String,
    pub han_close: String,
}

impl Default for SearchMarkers {
    fn default() -> Self {
        SearchMarkers {
            lat_open: "👉🏻".to_string(),
            lat_close: "👈🏻".to_string(),
            han_open: "👉".to_string(),
            han_close: "👈".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditionSettings {
    pub search_markers: SearchMarkers,
    /// Target used by template generation when none is given.
    pub template_default_path: String,
    /// Extension of edition files when a directory is given as input.
    pub source_extension: String,
    /// Rows printed by the tally command when no limit is given.
    pub tally_top: usize,
}

impl Default for EditionSettings {
    fn default() -> Self {
        EditionSettings {
            search_markers: SearchMarkers::default(),
            template_default_path: "temp.md".to_string(),
            source_extension: "md".to_string(),
            tally_top: 50,
        }
    }
}

impl EditionSettings {
    /// Read settings from a JSON file. Missing keys take their defaults.
    pub fn load_from_json(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings: EditionSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
        Ok(settings)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => EditionSettings::load_from_json(p),
            None => Ok(EditionSettings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: EditionSettings = serde_json::from_str(r#"{ "tally_top": 10 }"#).unwrap();
        assert_eq!(s.tally_top, 10);
        assert_eq!(s.template_default_path, "temp.md");
        assert_eq!(s.search_markers, SearchMarkers::default());
    }

    #[test]
    fn test_markers_override() {
        let s: EditionSettings = serde_json::from_str(
            r#"{ "search_markers": { "lat_open": "[", "lat_close": "]", "han_open": "【", "han_close": "】" } }"#,
        ).unwrap();
        assert_eq!(s.search_markers.han_open, "【");
        assert_eq!(s.source_extension, "md");
    }
}

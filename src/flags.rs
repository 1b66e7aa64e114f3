// src/flags.rs
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Shown when every lookup tier comes up empty.
pub const UNKNOWN_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Immutable glyph table: local overrides first, then the country-emoji
/// registry, then a placeholder. Loaded once at startup and passed around
/// explicitly; lookups never fail.
pub struct FlagTable {
    overrides: HashMap<String, String>,
}

impl FlagTable {
    pub fn empty() -> Self {
        Self { overrides: HashMap::new() }
    }

    /// Load the optional JSON override file (name → glyph).
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            return Ok(Self::empty());
        }
        let text = fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&text)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        log::debug!("Loaded {} flag overrides from {}", overrides.len(), path.display());
        Ok(Self { overrides })
    }

    /// Build a table from an in-memory map; handy for callers that manage
    /// their own configuration source.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn glyph(&self, key: &str) -> String {
        // Extraction falls back to an empty key when a flag image is missing;
        // that must not reach the fuzzy registry lookup.
        if key.is_empty() {
            return UNKNOWN_FLAG.to_string();
        }
        if let Some(g) = self.overrides.get(key) {
            return g.clone();
        }
        if let Some(g) = country_emoji::flag(key) {
            return g;
        }
        UNKNOWN_FLAG.to_string()
    }
}

//! Font metrics for text layout.
//!
//! Layout only needs advance widths. [`FontMetrics`] is the lookup the
//! typesetter consumes; [`AfmMetrics`] implements it from AFM data and
//! [`FontRegistry`] maps font names to loaded metrics.

mod afm;
mod base14;

pub use afm::AfmMetrics;

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Per-character advance widths.
pub trait FontMetrics {
    /// Advance width of a character in thousandths of an em.
    ///
    /// Characters without metrics have zero width.
    fn char_width(&self, ch: char) -> i32;

    /// Width of `text` in points at size `pt`.
    fn text_width(&self, pt: f64, text: &str) -> f64 {
        text.chars()
            .map(|c| f64::from(self.char_width(c)) * pt / 1000.0)
            .sum()
    }
}

impl FontMetrics for HashMap<char, i32> {
    fn char_width(&self, ch: char) -> i32 {
        self.get(&ch).copied().unwrap_or(0)
    }
}

/// Font metrics indexed by font name.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    fonts: HashMap<String, AfmMetrics>,
}

impl FontRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in Helvetica, Helvetica-Bold and
    /// Helvetica-Oblique metrics.
    pub fn with_base14() -> Result<Self> {
        let mut registry = Self::new();
        for (name, metrics) in base14::builtin_metrics()? {
            registry.insert(name, metrics);
        }
        Ok(registry)
    }

    /// Load every `*.afm` file in `dir`, keyed by file stem.
    ///
    /// Existing entries with the same name are replaced. Returns the number
    /// of fonts loaded.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let mut paths: Vec<_> = std::fs::read_dir(dir.as_ref())?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        paths.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "afm"));
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("skipping AFM file with non UTF-8 name: {}", path.display());
                continue;
            };
            let name = name.to_string();
            let metrics = AfmMetrics::from_file(&path)?;
            log::debug!("loaded font metrics {:?} from {}", name, path.display());
            self.insert(name, metrics);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Register metrics under a name.
    pub fn insert(&mut self, name: impl Into<String>, metrics: AfmMetrics) {
        self.fonts.insert(name.into(), metrics);
    }

    /// Look up metrics by font name.
    pub fn get(&self, name: &str) -> Result<&AfmMetrics> {
        self.fonts
            .get(name)
            .ok_or_else(|| Error::FontNotFound(name.to_string()))
    }

    /// Whether a font is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Registered font names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fonts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no fonts are registered.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

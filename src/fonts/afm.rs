//! Adobe Font Metrics (AFM) ingestion.
//!
//! Only the character metrics section is read. Each line of the form
//!
//! ```text
//! C 65 ; WX 667 ; N A ; B 14 0 654 718 ;
//! ```
//!
//! contributes one advance width, keyed by character code and by glyph name.
//! Every other line is skipped.
//!
//! Text is drawn with `WinAnsiEncoding`, whose upper half is Latin-1. After
//! parsing, glyphs named in that half (and the straight quotes, which differ
//! from StandardEncoding) are assigned to their characters, so measured
//! widths match what is drawn.

use super::FontMetrics;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Glyph names for U+00A0..=U+00FF in WinAnsiEncoding.
const LATIN1_GLYPHS: [&str; 96] = [
    "space", "exclamdown", "cent", "sterling", "currency", "yen", "brokenbar", "section",
    "dieresis", "copyright", "ordfeminine", "guillemotleft", "logicalnot", "hyphen", "registered",
    "macron", "degree", "plusminus", "twosuperior", "threesuperior", "acute", "mu", "paragraph",
    "periodcentered", "cedilla", "onesuperior", "ordmasculine", "guillemotright", "onequarter",
    "onehalf", "threequarters", "questiondown", "Agrave", "Aacute", "Acircumflex", "Atilde",
    "Adieresis", "Aring", "AE", "Ccedilla", "Egrave", "Eacute", "Ecircumflex", "Edieresis",
    "Igrave", "Iacute", "Icircumflex", "Idieresis", "Eth", "Ntilde", "Ograve", "Oacute",
    "Ocircumflex", "Otilde", "Odieresis", "multiply", "Oslash", "Ugrave", "Uacute", "Ucircumflex",
    "Udieresis", "Yacute", "Thorn", "germandbls", "agrave", "aacute", "acircumflex", "atilde",
    "adieresis", "aring", "ae", "ccedilla", "egrave", "eacute", "ecircumflex", "edieresis",
    "igrave", "iacute", "icircumflex", "idieresis", "eth", "ntilde", "ograve", "oacute",
    "ocircumflex", "otilde", "odieresis", "divide", "oslash", "ugrave", "uacute", "ucircumflex",
    "udieresis", "yacute", "thorn", "ydieresis",
];

/// ASCII positions where WinAnsiEncoding and StandardEncoding disagree.
const WINANSI_QUOTES: [(char, &str); 2] = [('\'', "quotesingle"), ('`', "grave")];

/// Advance widths parsed from AFM data, in thousandths of an em.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AfmMetrics {
    font_name: Option<String>,
    char_widths: HashMap<char, i32>,
    named_widths: HashMap<String, i32>,
}

impl AfmMetrics {
    /// Create an empty table (every character has zero width).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse AFM text.
    pub fn parse(data: &str) -> Result<Self> {
        let mut metrics = Self::new();

        for (idx, line) in data.lines().enumerate() {
            if let Some(name) = line.strip_prefix("FontName ") {
                metrics.font_name = Some(name.trim().to_string());
                continue;
            }
            if !line.starts_with("C ") {
                continue;
            }

            let (code, width, name) =
                parse_char_metrics(line).map_err(|reason| Error::MetricsParse {
                    line: idx + 1,
                    reason,
                })?;

            metrics.named_widths.insert(name, width);
            if code == -1 {
                continue;
            }
            let ch = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| Error::MetricsParse {
                    line: idx + 1,
                    reason: format!("invalid character code {}", code),
                })?;
            metrics.char_widths.insert(ch, width);
        }
        metrics.map_winansi_glyphs();

        log::debug!(
            "parsed AFM metrics for {}: {} coded glyphs, {} named",
            metrics.font_name.as_deref().unwrap_or("<unnamed>"),
            metrics.char_widths.len(),
            metrics.named_widths.len()
        );
        Ok(metrics)
    }

    /// Give WinAnsi characters the width of their named glyph, where the
    /// glyph is present.
    fn map_winansi_glyphs(&mut self) {
        let latin1 = (0xA0u32..)
            .zip(LATIN1_GLYPHS)
            .filter_map(|(cp, glyph)| char::from_u32(cp).map(|ch| (ch, glyph)));
        for (ch, glyph) in latin1.chain(WINANSI_QUOTES) {
            if let Some(&width) = self.named_widths.get(glyph) {
                self.char_widths.insert(ch, width);
            }
        }
    }

    /// Read and parse an AFM file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// The `FontName` declared in the AFM header, if any.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Width of a glyph by its PostScript name.
    pub fn named_width(&self, glyph: &str) -> Option<i32> {
        self.named_widths.get(glyph).copied()
    }

    /// Set the width of a character.
    pub fn insert(&mut self, ch: char, width: i32) {
        self.char_widths.insert(ch, width);
    }

    /// Number of characters with a known width.
    pub fn glyph_count(&self) -> usize {
        self.char_widths.len()
    }
}

impl FontMetrics for AfmMetrics {
    fn char_width(&self, ch: char) -> i32 {
        self.char_widths.get(&ch).copied().unwrap_or(0)
    }
}

/// Parse `C <code> ; WX <width> ; N <name> ; ...` into its three fields.
fn parse_char_metrics(line: &str) -> std::result::Result<(i32, i32, String), String> {
    let mut code = None;
    let mut width = None;
    let mut name = None;

    for field in line.split(';') {
        let mut parts = field.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("C"), Some(v)) => {
                code = Some(v.parse::<i32>().map_err(|e| format!("bad code {:?}: {}", v, e))?);
            },
            (Some("WX"), Some(v)) => {
                width = Some(v.parse::<i32>().map_err(|e| format!("bad width {:?}: {}", v, e))?);
            },
            (Some("N"), Some(v)) => name = Some(v.to_string()),
            _ => {},
        }
    }

    match (code, width, name) {
        (Some(c), Some(w), Some(n)) => Ok((c, w, n)),
        (None, _, _) => Err("missing C field".to_string()),
        (_, None, _) => Err("missing WX field".to_string()),
        (_, _, None) => Err("missing N field".to_string()),
    }
}

//! Greedy line breaking.
//!
//! Text is scanned one character at a time while advance widths accumulate.
//! Spaces and hyphens are legal break points. Once the accumulated width
//! reaches the span, the line is cut at the most recent break point and the
//! break character itself is dropped. A run with no break point is never
//! cut: it overflows the span and the line ends at the next break point or
//! at the end of the text.

use crate::error::{Error, Result};
use crate::fonts::FontMetrics;
use crate::object::{Color, ContentStream, Name, TextObject};

/// Horizontal span `[x1, x2]` with its top edge `y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRegion {
    /// Left edge
    pub x1: f64,
    /// Top edge; the first baseline sits one line height below it
    pub y1: f64,
    /// Right edge
    pub x2: f64,
}

impl TextRegion {
    /// Create a region.
    pub fn new(x1: f64, y1: f64, x2: f64) -> Self {
        Self { x1, y1, x2 }
    }

    /// Available line width.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }
}

/// One typeset output line.
#[derive(Debug, Clone, PartialEq)]
pub struct OutLine {
    /// Baseline origin X
    pub x: f64,
    /// Baseline origin Y
    pub y: f64,
    /// Point size
    pub pt: f64,
    /// Line text, without the break character
    pub text: String,
}

/// Typeset lines in top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutLines(Vec<OutLine>);

impl OutLines {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, line: OutLine) {
        self.0.push(line);
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, OutLine> {
        self.0.iter()
    }

    /// The lines as a slice.
    pub fn as_slice(&self) -> &[OutLine] {
        &self.0
    }

    /// Width of the widest line under `metrics`.
    pub fn max_width(&self, metrics: &dyn FontMetrics) -> f64 {
        self.0
            .iter()
            .map(|line| metrics.text_width(line.pt, &line.text))
            .fold(0.0, f64::max)
    }

    /// Append one text object per line to a content stream.
    pub fn append_to_stream(&self, font: &Name, color: Color, stream: &mut ContentStream) {
        for line in &self.0 {
            stream.text(TextObject {
                color,
                font: font.clone(),
                font_size: line.pt,
                x: line.x,
                y: line.y,
                text: line.text.clone(),
            });
        }
    }
}

impl IntoIterator for OutLines {
    type Item = OutLine;
    type IntoIter = std::vec::IntoIter<OutLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OutLines {
    type Item = &'a OutLine;
    type IntoIter = std::slice::Iter<'a, OutLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Scan state for one [`TypeSetter::set`] call.
struct Cursor {
    /// Baseline of the line being filled
    y: f64,
    /// Byte offset where the current line starts
    start: usize,
    /// Most recent break point, relative to `start`
    last_break: Option<usize>,
    /// Accumulated width of the current line
    width: f64,
}

/// Greedy typesetter for one font, size and region.
pub struct TypeSetter<'a> {
    metrics: &'a dyn FontMetrics,
    pt: f64,
    line_height: f64,
    region: TextRegion,
}

impl<'a> TypeSetter<'a> {
    /// Create a typesetter.
    ///
    /// Rejects a span, point size or line height that is not finite and
    /// strictly positive.
    pub fn new(
        metrics: &'a dyn FontMetrics,
        pt: f64,
        line_height: f64,
        region: TextRegion,
    ) -> Result<Self> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(region.width()) {
            return Err(Error::InvalidLayout(format!(
                "span width must be positive, got {} ({}..{})",
                region.width(),
                region.x1,
                region.x2
            )));
        }
        if !positive(pt) {
            return Err(Error::InvalidLayout(format!(
                "point size must be positive, got {}",
                pt
            )));
        }
        if !positive(line_height) {
            return Err(Error::InvalidLayout(format!(
                "line height must be positive, got {}",
                line_height
            )));
        }
        check_top_edge(region.y1)?;

        Ok(Self {
            metrics,
            pt,
            line_height,
            region,
        })
    }

    /// Same settings with a different top edge.
    ///
    /// Rejects a non-finite `y1`, as [`new`](Self::new) does.
    pub fn at(&self, y1: f64) -> Result<Self> {
        check_top_edge(y1)?;
        Ok(Self {
            region: TextRegion { y1, ..self.region },
            ..*self
        })
    }

    /// Point size.
    pub fn pt(&self) -> f64 {
        self.pt
    }

    /// Line height.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Text region.
    pub fn region(&self) -> TextRegion {
        self.region
    }

    /// Break `text` into lines.
    ///
    /// Returns the lines and the baseline of the last one, which is where a
    /// following block should continue from. Line `k` (1-based) sits at
    /// `y1 - k * line_height`. At least one line is always produced, even
    /// for empty text.
    pub fn set(&self, text: &str) -> (OutLines, f64) {
        let avail = self.region.width();
        let mut lines = OutLines::new();
        let mut cursor = Cursor {
            y: self.region.y1,
            start: 0,
            last_break: None,
            width: 0.0,
        };

        'line: loop {
            cursor.y -= self.line_height;
            cursor.width = 0.0;
            cursor.last_break = None;
            let mut overflowing = false;

            for (i, ch) in text[cursor.start..].char_indices() {
                if ch == ' ' || ch == '-' {
                    cursor.last_break = Some(i);
                }
                cursor.width += f64::from(self.metrics.char_width(ch)) * self.pt / 1000.0;

                if cursor.width >= avail {
                    match cursor.last_break {
                        Some(brk) => {
                            let line = &text[cursor.start..cursor.start + brk];
                            self.emit(&mut lines, cursor.y, line);
                            // Break characters are ASCII, so one byte.
                            cursor.start += brk + 1;
                            continue 'line;
                        },
                        None if !overflowing => {
                            overflowing = true;
                            log::debug!(
                                "unbreakable run at byte {} is wider than the {:.2}pt span",
                                cursor.start,
                                avail
                            );
                        },
                        None => {},
                    }
                }
            }
            break;
        }

        self.emit(&mut lines, cursor.y, &text[cursor.start..]);
        (lines, cursor.y)
    }

    fn emit(&self, lines: &mut OutLines, y: f64, text: &str) {
        log::trace!("line at y={:.2}: {:?}", y, text);
        lines.push(OutLine {
            x: self.region.x1,
            y,
            pt: self.pt,
            text: text.to_string(),
        });
    }
}

fn check_top_edge(y1: f64) -> Result<()> {
    if y1.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidLayout(format!("top edge must be finite, got {}", y1)))
    }
}

//! Configuration for résumé rendering.

use crate::object::Color;

/// Font resource used by the résumé page: the name it is registered under in
/// the page resources and the base font whose metrics drive layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSlot {
    /// Resource name referenced by `Tf` operators (e.g. `F1`)
    pub resource: String,
    /// Standard base font name (e.g. `Helvetica`)
    pub base_font: String,
}

impl FontSlot {
    /// Create a font slot.
    pub fn new(resource: impl Into<String>, base_font: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            base_font: base_font.into(),
        }
    }
}

/// Page geometry, colors and fonts for [`Resume::to_pdf`](crate::resume::Resume::to_pdf).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Page width in points.
    pub page_width: f64,

    /// Page height in points.
    pub page_height: f64,

    /// Left edge of every text block and rule.
    pub left: f64,

    /// Right edge of every text block and rule.
    pub right: f64,

    /// Baseline of the name line at the top of the page.
    pub header_y: f64,

    /// Top edge of the first experience entry.
    pub body_top: f64,

    /// Color of the header, titles, rules and footer.
    pub accent: Color,

    /// Body text font.
    pub regular: FontSlot,

    /// Heading font.
    pub bold: FontSlot,

    /// Font for timelines, technology lists and the footer.
    pub oblique: FontSlot,

    /// Footer line drawn at the bottom of the page, if any.
    pub footer: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Create a configuration for a US Letter page.
    pub fn new() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            left: 58.0,
            right: 554.0,
            header_y: 710.0,
            body_top: 640.0,
            accent: Color::new(0.35, 0.3, 0.35),
            regular: FontSlot::new("F1", "Helvetica"),
            bold: FontSlot::new("F2", "Helvetica-Bold"),
            oblique: FontSlot::new("F3", "Helvetica-Oblique"),
            footer: None,
        }
    }

    /// Set the page size.
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the left and right text margins.
    pub fn with_margins(mut self, left: f64, right: f64) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    /// Set the accent color.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Set the footer line.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Replace the regular, bold and oblique fonts.
    pub fn with_fonts(mut self, regular: FontSlot, bold: FontSlot, oblique: FontSlot) -> Self {
        self.regular = regular;
        self.bold = bold;
        self.oblique = oblique;
        self
    }
}

//! Single-page résumé layout.
//!
//! Object layout of the generated document:
//!
//! ```text
//! 1  Catalog          -> 2 Outlines, 3 Pages
//! 2  Outlines
//! 3  Pages            -> [4]
//! 4  Page             -> 3 Parent, 5 Contents, 6 ProcSet, 7..9 Fonts
//! 5  Content stream
//! 6  ProcSet          [/PDF /Text]
//! 7  Font (regular)
//! 8  Font (bold)
//! 9  Font (oblique)
//! ```

use super::{Experience, Resume};
use crate::config::{FontSlot, RenderConfig};
use crate::error::Result;
use crate::fonts::FontRegistry;
use crate::layout::{TextRegion, TypeSetter};
use crate::object::{Color, ContentStream, Name, Object, RuleObject, TextObject};
use crate::writer::{ObjectSerializer as S, PdfDocument};

const OUTLINES: u32 = 2;
const PAGES: u32 = 3;
const PAGE: u32 = 4;
const CONTENTS: u32 = 5;
const PROC_SET: u32 = 6;
const FONT_REGULAR: u32 = 7;
const FONT_BOLD: u32 = 8;
const FONT_OBLIQUE: u32 = 9;

/// Baseline of the footer line.
const FOOTER_Y: f64 = 50.0;

impl Resume {
    /// Lay out the résumé on one page.
    ///
    /// Metrics for the configured base fonts are taken from `fonts`; a
    /// missing font is an error. The returned document has been validated.
    pub fn to_pdf(&self, fonts: &FontRegistry, config: &RenderConfig) -> Result<PdfDocument> {
        let contents = self.render_contents(fonts, config)?;

        let mut doc = PdfDocument::new();
        doc.push(S::dict(vec![
            ("Type", S::name("Catalog")),
            ("Outlines", S::reference(OUTLINES)),
            ("Pages", S::reference(PAGES)),
        ]));
        doc.push(S::dict(vec![
            ("Type", S::name("Outlines")),
            ("Count", S::number(0.0)),
        ]));
        doc.push(S::dict(vec![
            ("Type", S::name("Pages")),
            ("Count", S::number(1.0)),
            ("Kids", S::array(vec![S::reference(PAGE)])),
        ]));
        doc.push(S::dict(vec![
            ("Type", S::name("Page")),
            ("Parent", S::reference(PAGES)),
            (
                "Resources",
                S::dict(vec![
                    (
                        "Font",
                        S::dict(vec![
                            (config.regular.resource.as_str(), S::reference(FONT_REGULAR)),
                            (config.bold.resource.as_str(), S::reference(FONT_BOLD)),
                            (config.oblique.resource.as_str(), S::reference(FONT_OBLIQUE)),
                        ]),
                    ),
                    ("ProcSet", S::reference(PROC_SET)),
                ]),
            ),
            (
                "MediaBox",
                S::rect(0.0, 0.0, config.page_width, config.page_height),
            ),
            ("Contents", S::reference(CONTENTS)),
        ]));
        doc.push(contents);
        doc.push(S::array(vec![S::name("PDF"), S::name("Text")]));
        for slot in [&config.regular, &config.bold, &config.oblique] {
            doc.push(font_dict(slot));
        }

        doc.validate()?;
        log::debug!(
            "laid out résumé for {:?}: {} experience entries, {} objects",
            self.name,
            self.experience.len(),
            doc.len()
        );
        Ok(doc)
    }

    fn render_contents(
        &self,
        fonts: &FontRegistry,
        config: &RenderConfig,
    ) -> Result<ContentStream> {
        let regular = Name::new(config.regular.resource.as_str());
        let bold = Name::new(config.bold.resource.as_str());
        let oblique = Name::new(config.oblique.resource.as_str());
        let accent = config.accent;
        let (left, right, top) = (config.left, config.right, config.header_y);
        let header = |font: &Name, size: f64, y: f64, text: String| {
            TextObject::new(font.clone(), size, left, y, text).with_color(accent)
        };

        let mut contents = ContentStream::new();
        contents
            .text(header(&bold, 32.0, top, self.name.clone()))
            .rule(RuleObject::new(2.0, accent, left, right, top - 6.0))
            .text(header(&regular, 12.0, top - 24.0, self.trade.clone()))
            .text(header(&regular, 12.0, top - 40.0, format!("E-mail: {}", self.email)))
            .text(header(&regular, 12.0, top - 56.0, format!("Tel: {}", self.tel)));

        let region = TextRegion::new(left, config.body_top, right);
        let title = TypeSetter::new(fonts.get(&config.bold.base_font)?, 20.0, 24.0, region)?;
        let summary = TypeSetter::new(fonts.get(&config.regular.base_font)?, 12.0, 18.0, region)?;
        let tech = TypeSetter::new(fonts.get(&config.oblique.base_font)?, 10.0, 18.0, region)?;

        let mut y = config.body_top;
        for exp in &self.experience {
            y = render_experience(
                exp,
                y,
                [&title, &summary, &tech],
                [&regular, &bold, &oblique],
                accent,
                (left, right),
                &mut contents,
            )?;
        }

        if let Some(footer) = &config.footer {
            contents.text(header(&oblique, 10.0, FOOTER_Y, footer.clone()));
        }
        Ok(contents)
    }
}

/// Append one experience entry starting at `y`; returns the next top edge.
fn render_experience(
    exp: &Experience,
    y: f64,
    [title, summary, tech]: [&TypeSetter<'_>; 3],
    [regular, bold, oblique]: [&Name; 3],
    accent: Color,
    (left, right): (f64, f64),
    contents: &mut ContentStream,
) -> Result<f64> {
    let (lines, mut y) = title.at(y)?.set(&exp.name);
    lines.append_to_stream(bold, accent, contents);
    contents.rule(RuleObject::new(1.0, accent, left, right, y - 6.0));
    y -= 24.0;

    contents.text(TextObject::new(oblique.clone(), 12.0, left, y, exp.timeline()));
    y -= 8.0;

    let (lines, mut y) = summary.at(y)?.set(&exp.summary);
    lines.append_to_stream(regular, Color::BLACK, contents);
    y -= 8.0;

    let (lines, y) = tech.at(y)?.set(&exp.technologies_line());
    lines.append_to_stream(oblique, Color::BLACK, contents);
    Ok(y - 24.0)
}

fn font_dict(slot: &FontSlot) -> Object {
    S::dict(vec![
        ("Type", S::name("Font")),
        ("Subtype", S::name("Type1")),
        ("Name", S::name(&slot.resource)),
        ("BaseFont", S::name(&slot.base_font)),
        ("Encoding", S::name("WinAnsiEncoding")),
    ])
}

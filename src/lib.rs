#![allow(clippy::too_many_arguments)]

//! # resume_pdf
//!
//! Single-page résumé rendering straight to PDF bytes, with no external
//! PDF library.
//!
//! ## Core pieces
//!
//! - **Object model** ([`object`]): a closed [`Object`] enum covering the
//!   PDF value types plus positioned text runs and rules.
//! - **Writer** ([`writer`]): serializes an ordered list of indirect
//!   objects with a byte-exact cross-reference table and trailer.
//! - **Typesetter** ([`layout`]): greedy line breaking at spaces and
//!   hyphens, driven by per-character advance widths.
//! - **Font metrics** ([`fonts`]): AFM parsing and built-in Helvetica
//!   widths.
//! - **Résumé** ([`resume`]): JSON data model, field obfuscation
//!   ([`encryption`]) and page assembly.
//!
//! ## Quick Start
//!
//! ```
//! use resume_pdf::config::RenderConfig;
//! use resume_pdf::fonts::FontRegistry;
//! use resume_pdf::resume::Resume;
//!
//! # fn main() -> resume_pdf::Result<()> {
//! let resume = Resume::from_json(r#"{
//!     "Name": "Jane Doe",
//!     "Trade": "Software Engineer",
//!     "Tel": "555-0100",
//!     "Email": "jane@example.com",
//!     "Experience": [{
//!         "Name": "Acme Corp",
//!         "URL": "https://acme.example",
//!         "Since": "2019",
//!         "Technologies": ["Rust"],
//!         "Summary": "Built the billing pipeline."
//!     }]
//! }"#)?;
//!
//! let fonts = FontRegistry::with_base14()?;
//! let pdf = resume.to_pdf(&fonts, &RenderConfig::default())?.to_bytes()?;
//! assert!(pdf.ends_with(b"%%EOF\n"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Object model and serialization
pub mod object;
pub mod writer;

// Fonts and layout
pub mod fonts;
pub mod layout;

// Résumé assembly
pub mod encryption;
pub mod resume;

// Configuration
pub mod config;

// Re-exports
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use object::{Object, ObjectRef};
pub use writer::PdfDocument;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "resume_pdf");
    }
}

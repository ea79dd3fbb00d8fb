//! PDF writing module.
//!
//! ## Architecture
//!
//! ```text
//! TypeSetter output (OutLines)
//!     ↓
//! [ContentStream] (text runs and rules)
//!     ↓
//! [PdfDocument] (ordered indirect objects)
//!     ↓
//! [ObjectSerializer] through a [CountingWriter]
//!     ↓
//! PDF bytes (header, objects, xref, trailer)
//! ```
//!
//! ## Example
//!
//! ```
//! use resume_pdf::writer::{ObjectSerializer, PdfDocument};
//!
//! let mut doc = PdfDocument::new();
//! doc.push(ObjectSerializer::dict(vec![
//!     ("Type", ObjectSerializer::name("Catalog")),
//!     ("Pages", ObjectSerializer::reference(2)),
//! ]));
//! doc.push(ObjectSerializer::dict(vec![
//!     ("Type", ObjectSerializer::name("Pages")),
//!     ("Count", ObjectSerializer::number(0.0)),
//!     ("Kids", ObjectSerializer::array(vec![])),
//! ]));
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! # Ok::<(), resume_pdf::error::Error>(())
//! ```

mod content_stream;
mod counting_writer;
mod object_serializer;
mod pdf_writer;

pub use counting_writer::CountingWriter;
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{PdfDocument, PdfWriterConfig};

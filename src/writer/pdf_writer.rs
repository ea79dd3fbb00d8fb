//! PDF document writer.
//!
//! Assembles a complete PDF file from an ordered list of indirect objects:
//! header, body, xref table, and trailer.

use super::counting_writer::CountingWriter;
use super::object_serializer::ObjectSerializer;
use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Configuration for PDF generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfWriterConfig {
    /// PDF version written in the header (e.g., "1.4")
    pub version: String,
    /// Document catalog named by the trailer
    pub root: ObjectRef,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.4".to_string(),
            root: ObjectRef::new(1),
        }
    }
}

impl PdfWriterConfig {
    /// Set the header version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the root (catalog) object.
    pub fn with_root(mut self, root: ObjectRef) -> Self {
        self.root = root;
        self
    }
}

/// An in-memory PDF document.
///
/// Object `N` is the `N`th entry of the object list (1-based); a
/// [`ObjectRef`] resolves purely by that position.
#[derive(Debug, Clone, Default)]
pub struct PdfDocument {
    config: PdfWriterConfig,
    objects: Vec<Object>,
}

impl PdfDocument {
    /// Create an empty document with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create an empty document with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            objects: Vec::new(),
        }
    }

    /// Writer configuration.
    pub fn config(&self) -> &PdfWriterConfig {
        &self.config
    }

    /// Append an indirect object and return its reference.
    pub fn push(&mut self, obj: impl Into<Object>) -> ObjectRef {
        self.objects.push(obj.into());
        ObjectRef::new(self.objects.len() as u32)
    }

    /// The reference the next pushed object will receive.
    pub fn next_ref(&self) -> ObjectRef {
        ObjectRef::new(self.objects.len() as u32 + 1)
    }

    /// Look up an object by reference.
    pub fn get(&self, r: ObjectRef) -> Option<&Object> {
        (r.id as usize).checked_sub(1).and_then(|i| self.objects.get(i))
    }

    /// Number of indirect objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the document has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All indirect objects in document order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Check that the root and every reachable reference resolve.
    pub fn validate(&self) -> Result<()> {
        if self.objects.is_empty() {
            return Err(Error::InvalidDocument("document has no objects".to_string()));
        }
        if self.get(self.config.root).is_none() {
            return Err(Error::InvalidDocument(format!(
                "root {} is not an object of this document",
                self.config.root
            )));
        }

        let mut refs = Vec::new();
        for obj in &self.objects {
            obj.collect_references(&mut refs);
        }
        match refs.into_iter().find(|r| self.get(*r).is_none()) {
            Some(dangling) => Err(Error::DanglingReference(dangling)),
            None => Ok(()),
        }
    }

    /// Serialize the document to a sink, returning the bytes written.
    ///
    /// The first IO error aborts the write and is returned; the sink is
    /// left with whatever was written before it.
    pub fn write_to<W: Write>(&self, w: W) -> Result<usize> {
        let serializer = ObjectSerializer::new();
        let mut w = CountingWriter::new(w);

        write!(w, "%PDF-{}\n\n", self.config.version)?;

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (i, obj) in self.objects.iter().enumerate() {
            let id = i as u32 + 1;
            offsets.push(w.count());
            log::trace!("object {} ({}) at byte {}", id, obj.type_name(), w.count());
            serializer.write_indirect(&mut w, id, obj)?;
        }

        let xref_offset = w.count();
        write!(w, "xref\n0 {}\n0000000000 65535 f\r\n", offsets.len() + 1)?;
        for offset in &offsets {
            write!(w, "{:010} 00000 n\r\n", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::number((offsets.len() + 1) as f64)),
            ("Root", Object::Reference(self.config.root)),
        ]);
        w.write_all(b"\ntrailer\n")?;
        serializer.write_object(&mut w, &trailer)?;
        write!(w, "\n\nstartxref\n{}\n%%EOF\n", xref_offset)?;
        w.flush()?;

        log::debug!(
            "wrote {} objects, xref at byte {}, {} bytes total",
            offsets.len(),
            xref_offset,
            w.count()
        );
        Ok(w.count())
    }

    /// Serialize the document into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Save the PDF to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))?;
        Ok(())
    }
}

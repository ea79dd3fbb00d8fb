//! PDF object serialization.
//!
//! Serializes [`Object`] values to their byte representation. Every variant
//! produces a self-contained byte sequence; the only link between objects is
//! an explicit [`ObjectRef`], which is written as a bare object number.

use crate::object::{Dictionary, Name, Object, ObjectRef};
use std::io::Write;

/// Serializer for PDF objects.
///
/// Writes go straight to the sink; the first IO error is returned to the
/// caller and nothing after it is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    /// Create a new object serializer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize an object to bytes.
    pub fn serialize(&self, obj: &Object) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_object(&mut buf, obj);
        buf
    }

    /// Serialize an object to a string (for debugging and tests).
    pub fn serialize_to_string(&self, obj: &Object) -> String {
        String::from_utf8_lossy(&self.serialize(obj)).into_owned()
    }

    /// Write an indirect object definition.
    ///
    /// Format: `{id} 0 obj\n{object}\nendobj\n\n`
    pub fn write_indirect<W: Write + ?Sized>(
        &self,
        w: &mut W,
        id: u32,
        obj: &Object,
    ) -> std::io::Result<()> {
        writeln!(w, "{} {} obj", id, ObjectRef::GENERATION)?;
        self.write_object(w, obj)?;
        w.write_all(b"\nendobj\n\n")
    }

    /// Write an object to a sink.
    pub fn write_object<W: Write + ?Sized>(&self, w: &mut W, obj: &Object) -> std::io::Result<()> {
        match obj {
            Object::Boolean(b) => w.write_all(if *b { b"true" } else { b"false" }),
            Object::Numeric(n) => self.write_number(w, *n),
            Object::Name(n) => self.write_name(w, n),
            Object::HexString(s) => self.write_hex_string(w, s),
            Object::Reference(r) => write!(w, "{}", r),
            Object::Array(arr) => self.write_array(w, arr),
            Object::Dictionary(dict) => self.write_dictionary(w, dict),
            Object::Stream(stream) => self.write_stream(w, stream),
            Object::Text(text) => self.write_text(w, text),
            Object::Rule(rule) => self.write_rule(w, rule),
            Object::Raw(raw) => w.write_all(raw.as_bytes()),
        }
    }

    /// Write a number in its shortest round-trip decimal form.
    ///
    /// PDF has no exponent syntax; `Display` for `f64` never produces one.
    /// NaN and infinities have no PDF form and are written as `0`.
    pub(crate) fn write_number<W: Write + ?Sized>(
        &self,
        w: &mut W,
        value: f64,
    ) -> std::io::Result<()> {
        if value.is_finite() {
            write!(w, "{}", value)
        } else {
            log::warn!("non-finite number {} written as 0", value);
            w.write_all(b"0")
        }
    }

    /// Write a PDF name.
    ///
    /// Bytes in `33..=126` pass through verbatim; every other byte of the
    /// UTF-8 encoding is written as `#XX`.
    pub(crate) fn write_name<W: Write + ?Sized>(
        &self,
        w: &mut W,
        name: &Name,
    ) -> std::io::Result<()> {
        let text = name.as_str();
        let mut escaped = Vec::with_capacity(text.len() + 1);
        escaped.push(b'/');
        for byte in text.bytes() {
            if (33..=126).contains(&byte) {
                escaped.push(byte);
            } else {
                write!(escaped, "#{:02X}", byte)?;
            }
        }
        w.write_all(&escaped)
    }

    /// Write a hex string: `<` + two uppercase hex digits per byte + `>`.
    pub(crate) fn write_hex_string<W: Write + ?Sized>(
        &self,
        w: &mut W,
        data: &[u8],
    ) -> std::io::Result<()> {
        let mut encoded = String::with_capacity(data.len() * 2 + 2);
        encoded.push('<');
        for byte in data {
            encoded.push_str(&format!("{:02X}", byte));
        }
        encoded.push('>');
        w.write_all(encoded.as_bytes())
    }

    /// Write a PDF array: `[ a b c ]`.
    fn write_array<W: Write + ?Sized>(&self, w: &mut W, arr: &[Object]) -> std::io::Result<()> {
        w.write_all(b"[ ")?;
        for (i, obj) in arr.iter().enumerate() {
            if i > 0 {
                w.write_all(b" ")?;
            }
            self.write_object(w, obj)?;
        }
        w.write_all(b" ]")
    }

    /// Write a PDF dictionary, one entry per line.
    fn write_dictionary<W: Write + ?Sized>(
        &self,
        w: &mut W,
        dict: &Dictionary,
    ) -> std::io::Result<()> {
        w.write_all(b"<<\n")?;
        for (key, value) in dict {
            self.write_name(w, key)?;
            w.write_all(b" ")?;
            self.write_object(w, value)?;
            w.write_all(b"\n")?;
        }
        w.write_all(b">>")
    }
}

/// Helper functions for building PDF objects.
impl ObjectSerializer {
    /// Create a Name object.
    pub fn name(s: &str) -> Object {
        Object::name(s)
    }

    /// Create a Numeric object.
    pub fn number(n: f64) -> Object {
        Object::Numeric(n)
    }

    /// Create an Array object.
    pub fn array(items: Vec<Object>) -> Object {
        Object::Array(items)
    }

    /// Create a Dictionary object, keeping entry order.
    pub fn dict(entries: Vec<(&str, Object)>) -> Object {
        let map: Dictionary = entries
            .into_iter()
            .map(|(k, v)| (Name::new(k), v))
            .collect();
        Object::Dictionary(map)
    }

    /// Create a Reference object.
    pub fn reference(id: u32) -> Object {
        Object::Reference(ObjectRef::new(id))
    }

    /// Create a rectangle array [x, y, width, height] -> [llx, lly, urx, ury].
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Object {
        Object::Array(vec![
            Object::Numeric(x),
            Object::Numeric(y),
            Object::Numeric(x + width),
            Object::Numeric(y + height),
        ])
    }
}

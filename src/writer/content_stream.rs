//! PDF content stream serialization.
//!
//! Drawing objects are written with a fixed operator sequence: text runs as
//! `BT rg Tf Td Tj ET`, rules as `w RG m l s`. A stream is rendered into a
//! buffer first so its `/Length` is known before any of it reaches the sink.

use super::object_serializer::ObjectSerializer;
use crate::object::{ContentStream, RuleObject, TextObject};
use std::io::Write;

impl ObjectSerializer {
    /// Write a content stream with its length-prefixed envelope.
    ///
    /// Format: `<< /Length N >>\nstream\n{ops joined by \n}\nendstream\n`
    pub(crate) fn write_stream<W: Write + ?Sized>(
        &self,
        w: &mut W,
        stream: &ContentStream,
    ) -> std::io::Result<()> {
        let body = self.render_stream_body(stream)?;
        write!(w, "<< /Length {} >>\nstream\n", body.len())?;
        w.write_all(&body)?;
        w.write_all(b"\nendstream\n")
    }

    /// Render the drawing objects of a stream, separated by newlines.
    pub fn render_stream_body(&self, stream: &ContentStream) -> std::io::Result<Vec<u8>> {
        let mut body = Vec::new();
        for (i, op) in stream.iter().enumerate() {
            if i != 0 {
                body.push(b'\n');
            }
            self.write_object(&mut body, op)?;
        }
        Ok(body)
    }

    /// Write a text object.
    pub(crate) fn write_text<W: Write + ?Sized>(
        &self,
        w: &mut W,
        text: &TextObject,
    ) -> std::io::Result<()> {
        w.write_all(b"BT\n")?;

        write_fixed(w, text.color.r, 6)?;
        w.write_all(b" ")?;
        write_fixed(w, text.color.g, 6)?;
        w.write_all(b" ")?;
        write_fixed(w, text.color.b, 6)?;
        w.write_all(b" rg\n")?;

        self.write_name(w, &text.font)?;
        w.write_all(b" ")?;
        write_fixed(w, text.font_size, 6)?;
        w.write_all(b" Tf\n")?;

        write_fixed(w, text.x, 2)?;
        w.write_all(b" ")?;
        write_fixed(w, text.y, 2)?;
        w.write_all(b" Td\n")?;

        self.write_hex_string(w, &text.encoded_text())?;
        w.write_all(b" Tj\nET")
    }

    /// Write a horizontal rule.
    pub(crate) fn write_rule<W: Write + ?Sized>(
        &self,
        w: &mut W,
        rule: &RuleObject,
    ) -> std::io::Result<()> {
        write_fixed(w, rule.width, 6)?;
        w.write_all(b" w\n")?;

        write_fixed(w, rule.color.r, 6)?;
        w.write_all(b" ")?;
        write_fixed(w, rule.color.g, 6)?;
        w.write_all(b" ")?;
        write_fixed(w, rule.color.b, 6)?;
        w.write_all(b" RG\n")?;

        write_fixed(w, rule.x1, 2)?;
        w.write_all(b" ")?;
        write_fixed(w, rule.y, 2)?;
        w.write_all(b" m\n")?;

        write_fixed(w, rule.x2, 2)?;
        w.write_all(b" ")?;
        write_fixed(w, rule.y, 2)?;
        w.write_all(b" l s\n")
    }
}

/// Write an operand with a fixed number of decimals.
fn write_fixed<W: Write + ?Sized>(w: &mut W, value: f64, precision: usize) -> std::io::Result<()> {
    let value = if value.is_finite() { value } else { 0.0 };
    write!(w, "{:.*}", precision, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Color, Object};

    #[test]
    fn test_text_object() {
        let s = ObjectSerializer::new();
        let text = TextObject::new("F2", 32.0, 58.0, 710.0, "Hi")
            .with_color(Color::new(0.35, 0.3, 0.35));
        assert_eq!(
            s.serialize_to_string(&Object::Text(text)),
            "BT\n0.350000 0.300000 0.350000 rg\n/F2 32.000000 Tf\n58.00 710.00 Td\n<4869> Tj\nET"
        );
    }

    #[test]
    fn test_rule_object() {
        let s = ObjectSerializer::new();
        let rule = RuleObject::new(2.0, Color::new(0.35, 0.3, 0.35), 58.0, 554.0, 704.0);
        assert_eq!(
            s.serialize_to_string(&Object::Rule(rule)),
            "2.000000 w\n0.350000 0.300000 0.350000 RG\n58.00 704.00 m\n554.00 704.00 l s\n"
        );
    }

    #[test]
    fn test_stream_length_prefix() {
        let s = ObjectSerializer::new();
        let mut stream = ContentStream::new();
        stream.push(Object::Raw("abc".to_string()));
        stream.push(Object::Raw("de".to_string()));
        assert_eq!(
            s.serialize_to_string(&Object::Stream(stream)),
            "<< /Length 6 >>\nstream\nabc\nde\nendstream\n"
        );
    }

    #[test]
    fn test_empty_stream() {
        let s = ObjectSerializer::new();
        assert_eq!(
            s.serialize_to_string(&Object::Stream(ContentStream::new())),
            "<< /Length 0 >>\nstream\n\nendstream\n"
        );
    }

    #[test]
    fn test_stream_length_matches_body() {
        let s = ObjectSerializer::new();
        let mut stream = ContentStream::new();
        stream
            .text(TextObject::new("F1", 12.0, 58.0, 686.0, "Software Engineer"))
            .rule(RuleObject::new(1.0, Color::BLACK, 58.0, 554.0, 600.0));

        let out = s.serialize(&Object::Stream(stream));
        let text = String::from_utf8(out.clone()).unwrap();
        let declared: usize = text
            .strip_prefix("<< /Length ")
            .and_then(|rest| rest.split(' ').next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        let start = text.find("stream\n").unwrap() + "stream\n".len();
        let end = text.rfind("\nendstream\n").unwrap();
        assert_eq!(end - start, declared);
    }
}

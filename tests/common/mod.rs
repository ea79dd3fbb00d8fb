#![allow(dead_code)]
//! Minimal reader for the PDF subset produced by the writer.
//!
//! Just enough to walk the cross-reference table and read back plain
//! objects (no streams or drawing objects) for comparison.

use resume_pdf::object::{Dictionary, Name, Object, ObjectRef};

/// Cross-reference data located through `startxref`.
#[derive(Debug)]
pub struct Xref {
    /// Byte offset of the `xref` keyword
    pub offset: usize,
    /// In-use entries in object order
    pub entries: Vec<usize>,
    /// `/Size` from the trailer
    pub size: usize,
    /// `/Root` from the trailer
    pub root: u32,
}

/// Read the cross-reference table and trailer.
pub fn read_xref(pdf: &[u8]) -> Xref {
    let text = std::str::from_utf8(pdf).expect("ascii output");
    let tail = text.rfind("startxref\n").expect("startxref keyword");
    let offset: usize = text[tail + "startxref\n".len()..]
        .lines()
        .next()
        .and_then(|l| l.trim().parse().ok())
        .expect("startxref offset");
    assert!(
        text[offset..].starts_with("xref\n"),
        "startxref points at byte {}",
        offset
    );

    let mut lines = text[offset..].split('\n');
    lines.next();
    let header = lines.next().expect("subsection header");
    let count: usize = header
        .strip_prefix("0 ")
        .and_then(|n| n.parse().ok())
        .expect("subsection count");
    assert_eq!(lines.next(), Some("0000000000 65535 f\r"));

    let entries: Vec<usize> = lines
        .by_ref()
        .take(count - 1)
        .map(|line| {
            assert_eq!(line.len(), 19, "xref entry {:?}", line);
            assert!(line.ends_with(" 00000 n\r"));
            line[..10].parse().expect("entry offset")
        })
        .collect();

    let trailer_at = text.rfind("trailer\n").expect("trailer keyword") + "trailer\n".len();
    let (trailer, _) = parse_object(&pdf[trailer_at..]).expect("trailer dictionary");
    let dict = trailer.as_dict().expect("trailer is a dictionary");
    let size = dict
        .get(&Name::new("Size"))
        .and_then(Object::as_number)
        .expect("/Size") as usize;
    let root = dict
        .get(&Name::new("Root"))
        .and_then(Object::as_reference)
        .expect("/Root")
        .id;

    Xref {
        offset,
        entries,
        size,
        root,
    }
}

/// Body bytes of indirect object `id`, which must start exactly at `offset`.
pub fn indirect_body(pdf: &[u8], id: u32, offset: usize) -> &[u8] {
    let header = format!("{} 0 obj\n", id);
    assert!(
        pdf[offset..].starts_with(header.as_bytes()),
        "object {} not at byte {}",
        id,
        offset
    );
    let start = offset + header.len();
    let end = find(&pdf[start..], b"\nendobj\n").expect("endobj") + start;
    &pdf[start..end]
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Parse one object, returning it and the number of bytes consumed.
pub fn parse_object(data: &[u8]) -> Option<(Object, usize)> {
    let mut reader = Reader { data, pos: 0 };
    let obj = reader.object()?;
    Some((obj, reader.pos))
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn rest(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    fn skip_ws(&mut self) {
        while matches!(self.data.get(self.pos), Some(b' ' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, token: &[u8]) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn object(&mut self) -> Option<Object> {
        self.skip_ws();
        if self.eat(b"true") {
            return Some(Object::Boolean(true));
        }
        if self.eat(b"false") {
            return Some(Object::Boolean(false));
        }
        match *self.data.get(self.pos)? {
            b'/' => self.name().map(Object::Name),
            b'[' => self.array(),
            b'<' if self.rest().starts_with(b"<<") => self.dictionary(),
            b'<' => self.hex_string(),
            b'-' | b'.' | b'0'..=b'9' => self.number(),
            _ => None,
        }
    }

    fn token(&mut self) -> &[u8] {
        let start = self.pos;
        while let Some(&b) = self.data.get(self.pos) {
            if matches!(b, b' ' | b'\n' | b'\r' | b'[' | b']' | b'<' | b'>' | b'/') {
                break;
            }
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }

    fn name(&mut self) -> Option<Name> {
        self.pos += 1;
        let raw = self.token().to_vec();
        let mut bytes = Vec::with_capacity(raw.len());
        let mut i = 0;
        while i < raw.len() {
            if raw[i] == b'#' && i + 2 < raw.len() {
                let hex = std::str::from_utf8(&raw[i + 1..i + 3]).ok()?;
                bytes.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            } else {
                bytes.push(raw[i]);
                i += 1;
            }
        }
        String::from_utf8(bytes).ok().map(Name::new)
    }

    fn number(&mut self) -> Option<Object> {
        let token = self.token().to_vec();
        let text = std::str::from_utf8(&token).ok()?;
        if text.bytes().all(|b| b.is_ascii_digit()) && self.eat(b" 0 R") {
            return Some(Object::Reference(ObjectRef::new(text.parse().ok()?)));
        }
        text.parse().ok().map(Object::Numeric)
    }

    fn hex_string(&mut self) -> Option<Object> {
        self.pos += 1;
        let end = self.rest().iter().position(|&b| b == b'>')?;
        let hex = std::str::from_utf8(&self.rest()[..end]).ok()?.to_string();
        self.pos += end + 1;
        if hex.len() % 2 != 0 {
            return None;
        }
        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect::<Option<Vec<u8>>>()
            .map(Object::HexString)
    }

    fn array(&mut self) -> Option<Object> {
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.eat(b"]") {
                return Some(Object::Array(items));
            }
            items.push(self.object()?);
        }
    }

    fn dictionary(&mut self) -> Option<Object> {
        self.pos += 2;
        let mut dict = Dictionary::new();
        loop {
            self.skip_ws();
            if self.eat(b">>") {
                return Some(Object::Dictionary(dict));
            }
            if self.data.get(self.pos) != Some(&b'/') {
                return None;
            }
            let key = self.name()?;
            let value = self.object()?;
            dict.insert(key, value);
        }
    }
}

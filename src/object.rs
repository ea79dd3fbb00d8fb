//! PDF object types.
//!
//! The object model is a closed set: every value that can appear in the
//! generated document is one of the [`Object`] variants. Drawing objects
//! (text runs and rules) live in the same enum so a [`ContentStream`] can be
//! built from typesetter output and serialized like any other value.

use indexmap::IndexMap;
use std::fmt;

/// Dictionary storage. Insertion order is kept so output is deterministic;
/// the order carries no meaning for a reader.
pub type Dictionary = IndexMap<Name, Object>;

/// PDF object representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Boolean value
    Boolean(bool),
    /// Numeric value (integers are represented exactly)
    Numeric(f64),
    /// Name (written with a leading `/`)
    Name(Name),
    /// Opaque byte string, written in hex form
    HexString(Vec<u8>),
    /// Indirect object reference
    Reference(ObjectRef),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary (name -> value)
    Dictionary(Dictionary),
    /// Content stream of drawing objects
    Stream(ContentStream),
    /// Positioned single-line text run
    Text(TextObject),
    /// Horizontal rule
    Rule(RuleObject),
    /// Raw, uninterpreted PDF data written verbatim
    Raw(String),
}

impl Object {
    /// Get the type name of this object (without data).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Boolean(_) => "Boolean",
            Object::Numeric(_) => "Numeric",
            Object::Name(_) => "Name",
            Object::HexString(_) => "HexString",
            Object::Reference(_) => "Reference",
            Object::Array(_) => "Array",
            Object::Dictionary(_) => "Dictionary",
            Object::Stream(_) => "Stream",
            Object::Text(_) => "Text",
            Object::Rule(_) => "Rule",
            Object::Raw(_) => "Raw",
        }
    }

    /// Create a Name object.
    pub fn name(s: &str) -> Self {
        Object::Name(Name::new(s))
    }

    /// Create a hex string object from the bytes of a Rust string.
    pub fn string(s: &str) -> Self {
        Object::HexString(s.as_bytes().to_vec())
    }

    /// Try to cast to boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to cast to a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Object::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to cast to name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(n) => Some(n.as_str()),
            _ => None,
        }
    }

    /// Try to cast to reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            Object::Reference(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to cast to array.
    pub fn as_array(&self) -> Option<&[Object]> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to cast to dictionary.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Collect every reference reachable from this object, depth first.
    pub fn collect_references(&self, out: &mut Vec<ObjectRef>) {
        match self {
            Object::Reference(r) => out.push(*r),
            Object::Array(items) => items.iter().for_each(|o| o.collect_references(out)),
            Object::Dictionary(dict) => dict.values().for_each(|o| o.collect_references(out)),
            Object::Stream(stream) => stream.iter().for_each(|o| o.collect_references(out)),
            _ => {},
        }
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<f64> for Object {
    fn from(n: f64) -> Self {
        Object::Numeric(n)
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Object::Numeric(n as f64)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Object::Name(n)
    }
}

impl From<ObjectRef> for Object {
    fn from(r: ObjectRef) -> Self {
        Object::Reference(r)
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::Array(items)
    }
}

impl From<Dictionary> for Object {
    fn from(dict: Dictionary) -> Self {
        Object::Dictionary(dict)
    }
}

impl From<ContentStream> for Object {
    fn from(stream: ContentStream) -> Self {
        Object::Stream(stream)
    }
}

impl From<TextObject> for Object {
    fn from(text: TextObject) -> Self {
        Object::Text(text)
    }
}

impl From<RuleObject> for Object {
    fn from(rule: RuleObject) -> Self {
        Object::Rule(rule)
    }
}

/// A PDF name, stored without its leading slash.
///
/// Non-ASCII names are accepted but are written byte by byte in `#XX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a name from any string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The unescaped name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to an indirect object.
///
/// Object numbers are 1-based positions in the document's object list. The
/// generation number is always 0 for documents produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
}

impl ObjectRef {
    /// Generation number used for every object.
    pub const GENERATION: u16 = 0;

    /// Create a new object reference.
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.id, Self::GENERATION)
    }
}

/// RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// Create a color from its components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// A single line of text drawn at a fixed position.
///
/// Serializes as a complete `BT ... ET` text object.
#[derive(Debug, Clone, PartialEq)]
pub struct TextObject {
    /// Fill color
    pub color: Color,
    /// Font resource name (e.g. `F1`)
    pub font: Name,
    /// Font size in points
    pub font_size: f64,
    /// Baseline origin X
    pub x: f64,
    /// Baseline origin Y
    pub y: f64,
    /// Text payload
    pub text: String,
}

impl TextObject {
    /// Create a black text run.
    pub fn new(
        font: impl Into<Name>,
        font_size: f64,
        x: f64,
        y: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            color: Color::BLACK,
            font: font.into(),
            font_size,
            x,
            y,
            text: text.into(),
        }
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Encode the payload for a WinAnsi-encoded simple font.
    ///
    /// Characters in the Latin-1 range map to their code point; anything
    /// else becomes `?`.
    pub fn encoded_text(&self) -> Vec<u8> {
        self.text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect()
    }
}

/// A horizontal stroked line.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleObject {
    /// Stroke width
    pub width: f64,
    /// Stroke color
    pub color: Color,
    /// Start X
    pub x1: f64,
    /// End X
    pub x2: f64,
    /// Y for both ends
    pub y: f64,
}

impl RuleObject {
    /// Create a rule from `x1` to `x2` at height `y`.
    pub fn new(width: f64, color: Color, x1: f64, x2: f64, y: f64) -> Self {
        Self {
            width,
            color,
            x1,
            x2,
            y,
        }
    }
}

/// Ordered drawing objects rendered into a single content stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentStream {
    ops: Vec<Object>,
}

impl ContentStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawing object.
    pub fn push(&mut self, op: impl Into<Object>) -> &mut Self {
        self.ops.push(op.into());
        self
    }

    /// Append a text run.
    pub fn text(&mut self, text: TextObject) -> &mut Self {
        self.push(text)
    }

    /// Append a horizontal rule.
    pub fn rule(&mut self, rule: RuleObject) -> &mut Self {
        self.push(rule)
    }

    /// Number of drawing objects.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the stream has no drawing objects.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the drawing objects in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.ops.iter()
    }
}

impl From<Vec<Object>> for ContentStream {
    fn from(ops: Vec<Object>) -> Self {
        Self { ops }
    }
}

impl Extend<Object> for ContentStream {
    fn extend<T: IntoIterator<Item = Object>>(&mut self, iter: T) {
        self.ops.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ref_display() {
        assert_eq!(ObjectRef::new(7).to_string(), "7 0 R");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Object::Boolean(true).type_name(), "Boolean");
        assert_eq!(Object::name("Type").type_name(), "Name");
        assert_eq!(Object::Stream(ContentStream::new()).type_name(), "Stream");
    }

    #[test]
    fn test_casts() {
        assert_eq!(Object::from(true).as_bool(), Some(true));
        assert_eq!(Object::from(3i64).as_number(), Some(3.0));
        assert_eq!(Object::name("Catalog").as_name(), Some("Catalog"));
        assert_eq!(Object::from(ObjectRef::new(2)).as_reference(), Some(ObjectRef::new(2)));
        assert!(Object::from(1.5).as_name().is_none());
    }

    #[test]
    fn test_collect_references_nested() {
        let mut inner = Dictionary::new();
        inner.insert(Name::new("F1"), ObjectRef::new(7).into());
        let mut dict = Dictionary::new();
        dict.insert(Name::new("Parent"), ObjectRef::new(3).into());
        dict.insert(Name::new("Font"), inner.into());
        dict.insert(
            Name::new("Kids"),
            Object::Array(vec![ObjectRef::new(4).into(), Object::from(1.0)]),
        );

        let mut refs = Vec::new();
        Object::Dictionary(dict).collect_references(&mut refs);
        assert_eq!(refs, vec![ObjectRef::new(3), ObjectRef::new(7), ObjectRef::new(4)]);
    }

    #[test]
    fn test_encoded_text_latin1() {
        let text = TextObject::new("F1", 12.0, 0.0, 0.0, "Résumé \u{2022}");
        assert_eq!(text.encoded_text(), b"R\xE9sum\xE9 ?".to_vec());
    }

    #[test]
    fn test_content_stream_push() {
        let mut stream = ContentStream::new();
        stream
            .text(TextObject::new("F1", 12.0, 58.0, 700.0, "Hi"))
            .rule(RuleObject::new(1.0, Color::BLACK, 58.0, 554.0, 690.0));
        assert_eq!(stream.len(), 2);
        assert!(!stream.is_empty());
        assert_eq!(stream.iter().next().map(Object::type_name), Some("Text"));
    }
}

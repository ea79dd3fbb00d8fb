//! Text layout.
//!
//! [`TypeSetter`] wraps a string into lines that fit a horizontal span,
//! using advance widths from a [`FontMetrics`](crate::fonts::FontMetrics)
//! implementation. Successive calls chain vertically through the Y value
//! returned by [`TypeSetter::set`].

mod typesetter;

pub use typesetter::{OutLine, OutLines, TextRegion, TypeSetter};

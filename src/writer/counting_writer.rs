//! Byte-counting writer.

use std::io::{self, Write};

/// A [`Write`] wrapper that tallies the bytes accepted by the inner sink.
///
/// The document writer takes every xref offset from [`count`](Self::count),
/// so offsets always match the bytes that were actually emitted.
#[derive(Debug)]
pub struct CountingWriter<W> {
    inner: W,
    count: usize,
}

impl<W: Write> CountingWriter<W> {
    /// Wrap a sink, starting the count at zero.
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    /// Bytes written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Unwrap, returning the inner sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts at most `chunk` bytes per call to exercise partial writes.
    struct Trickle {
        out: Vec<u8>,
        chunk: usize,
    }

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.chunk);
            self.out.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_counts_bytes() {
        let mut w = CountingWriter::new(Vec::new());
        w.write_all(b"%PDF-1.4\n\n").unwrap();
        write!(w, "{} 0 obj\n", 1).unwrap();
        assert_eq!(w.count(), 18);
        assert_eq!(w.into_inner().len(), 18);
    }

    #[test]
    fn test_counts_partial_writes() {
        let mut w = CountingWriter::new(Trickle {
            out: Vec::new(),
            chunk: 3,
        });
        w.write_all(b"0123456789").unwrap();
        assert_eq!(w.count(), 10);
        assert_eq!(w.into_inner().out, b"0123456789");
    }

    #[test]
    fn test_error_does_not_count() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut w = CountingWriter::new(Broken);
        assert!(w.write_all(b"abc").is_err());
        assert_eq!(w.count(), 0);
    }
}

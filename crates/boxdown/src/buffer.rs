//! The growable byte buffer used for input accumulation and output
//! construction.
//!
//! `ByteBuffer` wraps a `Vec<u8>` and exposes the append-oriented operations
//! the scanner and renderers work with. Growth is amortized by the vector's
//! geometric reservation; buffers here are short-lived and modestly sized, so
//! no custom growth discipline is layered on top.

use core::fmt;
use std::io;

use bstr::{BStr, ByteSlice};

/// Bytes read per iteration when draining an external stream.
const READ_CHUNK: usize = 1024;

/// An append-only, randomly-growable byte container.
///
/// # Examples
///
/// ```rust
/// use boxdown::ByteBuffer;
///
/// let mut buf = ByteBuffer::new();
/// buf.put_str(" *");
/// buf.put_byte_repeated(b'=', 4);
/// assert_eq!(buf.as_bytes(), b" *====");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty buffer with capacity for at least `hint` bytes.
    ///
    /// A `hint` of zero is equivalent to [`ByteBuffer::new`].
    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            data: Vec::with_capacity(hint),
        }
    }

    /// Appends `bytes` verbatim.
    pub fn put(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Appends the UTF-8 bytes of `s`.
    pub fn put_str(&mut self, s: &str) {
        self.put(s.as_bytes());
    }

    /// Appends a single byte.
    pub fn put_byte(&mut self, b: u8) {
        self.data.push(b);
    }

    /// Appends `n` copies of `b`.
    pub fn put_byte_repeated(&mut self, b: u8, n: usize) {
        self.data.resize(self.data.len() + n, b);
    }

    /// Appends formatted text, growing as needed.
    ///
    /// The underlying sink is infallible, so an error can only originate from
    /// a `Display` implementation of one of the formatted values; such an
    /// error panics, matching the behavior of [`std::format!`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxdown::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.put_fmt(format_args!("{}.) {}", 3, "item"));
    /// assert_eq!(buf.as_bytes(), b"3.) item");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a formatting trait implementation returns an error.
    pub fn put_fmt(&mut self, args: fmt::Arguments<'_>) {
        fmt::Write::write_fmt(self, args).expect("a formatting trait implementation returned an error");
    }

    /// Reads `reader` to end-of-stream in fixed-size chunks, appending each
    /// chunk, and returns the total number of bytes appended.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error reported by `reader`; bytes read before
    /// the failure remain in the buffer.
    pub fn read_from<R: io::Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        let mut total = 0;
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                return Ok(total);
            }
            self.put(&chunk[..n]);
            total += n;
        }
    }

    /// Removes the first `n` bytes, shifting the remainder to the front.
    ///
    /// When `n` is at least the logical size, the buffer becomes empty.
    pub fn drop_front(&mut self, n: usize) {
        if n >= self.data.len() {
            self.data.clear();
        } else {
            self.data.drain(..n);
        }
    }

    /// Returns the byte at `index`, or `0` when `index` is out of range.
    ///
    /// The zero sentinel makes lookahead safe without explicit bounds checks;
    /// an out-of-range read is not an error.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.data.get(index).copied().unwrap_or(0)
    }

    /// Returns a new, independently-owned buffer containing a copy of the
    /// bytes in `[offset, offset + len)`.
    ///
    /// # Panics
    ///
    /// Panics when `offset + len` exceeds the logical size.
    #[must_use]
    pub fn slice(&self, offset: usize, len: usize) -> Self {
        Self {
            data: self.data[offset..offset + len].to_vec(),
        }
    }

    /// The buffer contents as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The buffer contents as a printable byte string.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.data.as_bstr()
    }

    /// The logical size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The allocated capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Truncates the buffer to zero length, keeping its allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the buffer, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl fmt::Write for ByteBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(s);
        Ok(())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }
}

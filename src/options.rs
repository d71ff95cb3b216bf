use crate::Encoding;

/// Byte order used for every multi-byte integer accessed through a cursor.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first. This is the default.
    #[default]
    Little,
}

/// Construction options shared by `BufferReader` and `BufferWriter`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct CursorOptions {
    /// Byte order for the lifetime of the cursor.
    pub endian: Endian,
}

impl CursorOptions {
    /// Options for a big-endian cursor.
    pub fn big_endian() -> Self {
        Self {
            endian: Endian::Big,
        }
    }

    /// Options for a little-endian cursor.
    pub fn little_endian() -> Self {
        Self {
            endian: Endian::Little,
        }
    }
}

/// Options for `BufferReader::get_string`.
///
/// Unset fields fall back to their defaults: a length of zero, the cursor offset, and UTF-8.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StringOptions {
    /// Number of encoded bytes to decode.
    pub length: usize,
    /// Absolute position to read from. `None` reads at the cursor and advances it.
    pub offset: Option<usize>,
    /// Text encoding of the bytes.
    pub encoding: Encoding,
}

impl StringOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bytes to decode.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Reads at an explicit offset, leaving the cursor alone.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the text encoding.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Options for `BufferReader::get_bytes`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct BytesOptions {
    /// Number of bytes to copy.
    pub length: usize,
    /// Absolute position to read from. `None` reads at the cursor and advances it.
    pub offset: Option<usize>,
}

impl BytesOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bytes to copy.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Reads at an explicit offset, leaving the cursor alone.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Options for `BufferWriter::write_string`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct WriteStringOptions {
    /// Maximum number of encoded bytes to write. `None` writes the whole string, as far as the
    /// buffer allows.
    pub length: Option<usize>,
    /// Absolute position to write at. `None` writes at the cursor and advances it.
    pub offset: Option<usize>,
    /// Text encoding to produce.
    pub encoding: Encoding,
}

impl WriteStringOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the number of encoded bytes written.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Writes at an explicit offset, leaving the cursor alone.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the text encoding.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

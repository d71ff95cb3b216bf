use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut, Range};

use zerocopy::byteorder::{BigEndian, LittleEndian};

use crate::{BufferCursor, BytesOptions, CursorOptions, Result, StringOptions, Word};

/// Reads typed values from a fixed-size byte buffer.
///
/// Every fixed-width method takes an optional explicit offset. With `None`, the value is read at
/// the cursor and the cursor advances past it. With `Some(offset)`, the value is read at that
/// position and the cursor does not move.
///
/// Multi-byte integers use the byte order chosen at construction. 64-bit integers are returned
/// as decimal text by `get_u64` and `get_i64`; use `get::<u64>` for the native value.
///
/// `BufferReader` dereferences to [`BufferCursor`], which provides `skip`, `skip_to`, `offset`
/// and `buffer`.
#[derive(Clone, Debug)]
pub struct BufferReader<B> {
    cursor: BufferCursor<B>,
}

impl<B: AsRef<[u8]>> BufferReader<B> {
    /// Creates a little-endian reader positioned at the start of `buffer`.
    pub fn new(buffer: B) -> Self {
        Self::with_options(buffer, CursorOptions::default())
    }

    /// Creates a reader positioned at the start of `buffer`.
    pub fn with_options(buffer: B, options: CursorOptions) -> Self {
        Self {
            cursor: BufferCursor::new(buffer, options),
        }
    }

    /// Reads any fixed-width integer.
    ///
    /// Fails with `CursorError::OutOfBounds` if fewer than `W::WIDTH` bytes remain at the resolved
    /// offset; the cursor does not move in that case.
    #[inline(always)]
    pub fn get<W: Word>(&mut self, offset: Option<usize>) -> Result<W> {
        self.cursor.execute_and_advance(
            W::WIDTH,
            offset,
            |buf, window| W::decode::<BigEndian>(&(*buf).as_ref()[window]),
            |buf, window| W::decode::<LittleEndian>(&(*buf).as_ref()[window]),
        )
    }

    /// Reads a single `u8` value.
    pub fn get_u8(&mut self, offset: Option<usize>) -> Result<u8> {
        self.get(offset)
    }

    /// Reads a single `i8` value.
    pub fn get_i8(&mut self, offset: Option<usize>) -> Result<i8> {
        self.get(offset)
    }

    /// Reads a `u16`.
    pub fn get_u16(&mut self, offset: Option<usize>) -> Result<u16> {
        self.get(offset)
    }

    /// Reads an `i16`.
    pub fn get_i16(&mut self, offset: Option<usize>) -> Result<i16> {
        self.get(offset)
    }

    /// Reads a `u32`.
    pub fn get_u32(&mut self, offset: Option<usize>) -> Result<u32> {
        self.get(offset)
    }

    /// Reads an `i32`.
    pub fn get_i32(&mut self, offset: Option<usize>) -> Result<i32> {
        self.get(offset)
    }

    /// Reads a `u64` and returns it in decimal, so that the full range survives callers that
    /// cannot hold it natively.
    pub fn get_u64(&mut self, offset: Option<usize>) -> Result<String> {
        Ok(self.get::<u64>(offset)?.to_string())
    }

    /// Reads an `i64` and returns it in decimal.
    pub fn get_i64(&mut self, offset: Option<usize>) -> Result<String> {
        Ok(self.get::<i64>(offset)?.to_string())
    }

    /// Decodes `options.length` bytes as text.
    ///
    /// A length of zero returns an empty string without moving the cursor.
    ///
    /// The byte range is clamped to the end of the buffer, like a slice copy: a range that runs
    /// past the end decodes only the bytes that exist, and a start past the end decodes nothing.
    /// When `options.offset` is `None`, the cursor advances by the number of bytes actually
    /// decoded, so it never moves past the end of the buffer.
    pub fn get_string(&mut self, options: StringOptions) -> String {
        if options.length == 0 {
            return String::new();
        }
        let range = self.clamped(options.offset, options.length);
        self.cursor.advance(options.offset, range.len());
        let text = options.encoding.decode(&self.cursor.buffer()[range]);
        text
    }

    /// Copies `options.length` bytes out of the buffer.
    ///
    /// Follows the same offset, advance and clamping rules as [`get_string`](Self::get_string).
    pub fn get_bytes(&mut self, options: BytesOptions) -> Vec<u8> {
        if options.length == 0 {
            return Vec::new();
        }
        let range = self.clamped(options.offset, options.length);
        self.cursor.advance(options.offset, range.len());
        let bytes = self.cursor.buffer()[range].to_vec();
        bytes
    }

    /// Returns `options.length` bytes without copying them.
    ///
    /// Follows the same rules as [`get_bytes`](Self::get_bytes). The caller must handle
    /// validating the contents, if necessary.
    #[cfg(feature = "bstr")]
    pub fn get_bstr(&mut self, options: BytesOptions) -> &bstr::BStr {
        if options.length == 0 {
            return bstr::BStr::new(b"");
        }
        let range = self.clamped(options.offset, options.length);
        self.cursor.advance(options.offset, range.len());
        bstr::BStr::new(&self.cursor.buffer()[range])
    }

    fn clamped(&self, offset: Option<usize>, length: usize) -> Range<usize> {
        let len = self.cursor.len();
        let start = self.cursor.resolve(offset).min(len);
        let end = start.saturating_add(length).min(len);
        start..end
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> B {
        self.cursor.into_inner()
    }
}

impl<B> Deref for BufferReader<B> {
    type Target = BufferCursor<B>;

    fn deref(&self) -> &Self::Target {
        &self.cursor
    }
}

impl<B> DerefMut for BufferReader<B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cursor
    }
}

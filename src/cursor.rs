use core::ops::Range;

use tracing::trace;

use crate::{CursorOptions, Endian};

/// Result type for cursor operations.
pub type Result<T> = core::result::Result<T, CursorError>;

/// A fixed-size byte buffer together with a cursor offset and a byte order.
///
/// This is the state shared by `BufferReader` and `BufferWriter`; both dereference to it, so
/// `skip`, `skip_to`, `offset` and `buffer` are available on either.
///
/// The cursor never resizes the buffer and never validates the offset eagerly. `skip` and
/// `skip_to` accept any target; an offset outside the buffer is only rejected when the next
/// read or write tries to use it. Offsets use wrapping arithmetic, so skipping backward past
/// the start produces an offset that the next access rejects, and skipping forward again
/// restores a usable position.
#[derive(Clone, Debug)]
pub struct BufferCursor<B> {
    buffer: B,
    offset: usize,
    endian: Endian,
}

impl<B: AsRef<[u8]>> BufferCursor<B> {
    /// Binds a cursor to `buffer`, starting at offset zero.
    pub fn new(buffer: B, options: CursorOptions) -> Self {
        Self {
            buffer,
            offset: 0,
            endian: options.endian,
        }
    }

    /// Moves the cursor by `n` bytes. Negative values move backward. Not checked until the next
    /// access.
    pub fn skip(&mut self, n: isize) {
        self.offset = self.offset.wrapping_add_signed(n);
    }

    /// Moves the cursor to the absolute position `pos`. Not checked until the next access.
    pub fn skip_to(&mut self, pos: usize) {
        self.offset = pos;
    }

    /// The position used by the next implicit-offset operation.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The whole underlying buffer, regardless of the cursor position.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Total capacity of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Returns `true` if the buffer has no capacity at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.offset)
    }

    /// The byte order chosen at construction.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Releases the buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Explicit offset if given, else the cursor.
    pub(crate) fn resolve(&self, offset: Option<usize>) -> usize {
        offset.unwrap_or(self.offset)
    }

    /// Advances the cursor by `n`, unless the operation targeted an explicit offset.
    pub(crate) fn advance(&mut self, offset: Option<usize>, n: usize) {
        if offset.is_none() {
            self.offset = self.offset.wrapping_add(n);
        }
    }

    /// Checks that `width` bytes starting at `at` lie within the buffer.
    pub(crate) fn window(&self, at: usize, width: usize) -> Result<Range<usize>> {
        let len = self.len();
        match at.checked_add(width) {
            Some(end) if end <= len => Ok(at..end),
            _ => {
                trace!(offset = at, width, len, "access out of bounds");
                Err(CursorError::OutOfBounds {
                    offset: at,
                    width,
                    len,
                })
            }
        }
    }

    /// Runs a fixed-width operation and advances the cursor.
    ///
    /// The target position is `offset` if given, else the cursor. The range
    /// `[position, position + width)` is bounds-checked before either operation runs, so a failed
    /// call never touches the buffer. `big` or `little` is invoked according to the cursor's byte
    /// order, with the checked range. The cursor then advances by `width`, but only if `offset`
    /// was `None`.
    ///
    /// Every integer read and write goes through here. An operation returning `None` is reported
    /// as a bounds error; that only happens if an operation disagrees with `width`.
    pub(crate) fn execute_and_advance<T>(
        &mut self,
        width: usize,
        offset: Option<usize>,
        big: impl FnOnce(&mut B, Range<usize>) -> Option<T>,
        little: impl FnOnce(&mut B, Range<usize>) -> Option<T>,
    ) -> Result<T> {
        let at = self.resolve(offset);
        let window = self.window(at, width)?;
        let len = self.len();

        let value = match self.endian {
            Endian::Big => big(&mut self.buffer, window),
            Endian::Little => little(&mut self.buffer, window),
        }
        .ok_or(CursorError::OutOfBounds {
            offset: at,
            width,
            len,
        })?;

        self.advance(offset, width);
        Ok(value)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BufferCursor<B> {
    /// Mutable access to the whole underlying buffer.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }
}

/// Error type for `BufferReader` and `BufferWriter`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CursorError {
    /// The operation needed `width` bytes at `offset`, but the buffer holds only `len` bytes.
    /// Nothing was read or written.
    OutOfBounds {
        /// Resolved position of the access.
        offset: usize,
        /// Number of bytes the access needed.
        width: usize,
        /// Capacity of the buffer.
        len: usize,
    },

    /// The value does not fit in the target integer type.
    OutOfRange {
        /// Name of the target type, such as `"u16"`.
        ty: &'static str,
    },

    /// Text supplied as an integer is not an optionally signed string of decimal digits.
    InvalidInteger,

    /// The name does not identify a supported text encoding.
    UnknownEncoding,
}

impl CursorError {
    /// Returns `true` for errors caused by the value being written rather than by its position.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::InvalidInteger)
    }
}

impl core::error::Error for CursorError {}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds { offset, width, len } => write!(
                f,
                "Index out of range: {width} bytes at offset {offset} in a buffer of {len} bytes"
            ),
            Self::OutOfRange { ty } => write!(f, "The value is out of range for {ty}"),
            Self::InvalidInteger => f.write_str("The value is not a decimal integer"),
            Self::UnknownEncoding => f.write_str("Unknown text encoding"),
        }
    }
}

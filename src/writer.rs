use core::ops::{Deref, DerefMut};

use zerocopy::byteorder::{BigEndian, LittleEndian};

use crate::{BufferCursor, CursorOptions, IntValue, Result, Word, WriteStringOptions};

/// Writes typed values into a fixed-size byte buffer.
///
/// Offsets work as in `BufferReader`: `None` writes at the cursor and advances it, `Some(offset)`
/// writes at that position and leaves the cursor alone.
///
/// Every integer method accepts anything convertible to [`IntValue`]: native integers, `i128`,
/// or decimal text such as `"18446744073709551615"` or `"-00123"`. A value that does not fit the
/// target type fails with `CursorError::OutOfRange`; negative values are never wrapped into
/// unsigned types. A write that would run past the end of the buffer fails with
/// `CursorError::OutOfBounds`. A failed write leaves both the buffer and the cursor untouched.
#[derive(Clone, Debug)]
pub struct BufferWriter<B> {
    cursor: BufferCursor<B>,
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BufferWriter<B> {
    /// Creates a little-endian writer positioned at the start of `buffer`.
    pub fn new(buffer: B) -> Self {
        Self::with_options(buffer, CursorOptions::default())
    }

    /// Creates a writer positioned at the start of `buffer`.
    pub fn with_options(buffer: B, options: CursorOptions) -> Self {
        Self {
            cursor: BufferCursor::new(buffer, options),
        }
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> B {
        self.cursor.into_inner()
    }

    /// Writes any fixed-width integer.
    #[inline(always)]
    pub fn write<'v, W: Word>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        let value: IntValue<'v> = value.into();
        let value: W = value.narrow()?;
        self.cursor.execute_and_advance(
            W::WIDTH,
            offset,
            |buf, window| value.encode::<BigEndian>(&mut (*buf).as_mut()[window]),
            |buf, window| value.encode::<LittleEndian>(&mut (*buf).as_mut()[window]),
        )
    }

    /// Writes a single `u8` value
    pub fn write_u8<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<u8>(value, offset)
    }

    /// Writes a single `i8` value
    pub fn write_i8<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<i8>(value, offset)
    }

    /// Writes a `u16` value
    pub fn write_u16<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<u16>(value, offset)
    }

    /// Writes an `i16` value
    pub fn write_i16<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<i16>(value, offset)
    }

    /// Writes a `u32` value
    pub fn write_u32<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<u32>(value, offset)
    }

    /// Writes an `i32` value
    pub fn write_i32<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<i32>(value, offset)
    }

    /// Writes a `u64` value.
    ///
    /// Values above `i64::MAX` can be passed as `u64`, `i128`, or decimal text.
    pub fn write_u64<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<u64>(value, offset)
    }

    /// Writes an `i64` value
    pub fn write_i64<'v>(
        &mut self,
        value: impl Into<IntValue<'v>>,
        offset: Option<usize>,
    ) -> Result<()> {
        self.write::<i64>(value, offset)
    }

    /// Encodes `value` as text and returns the number of bytes written.
    ///
    /// At most `options.length` bytes are written, if given. Without a length, the output is
    /// limited by the space left in the buffer instead, so a string longer than that space is cut
    /// short rather than rejected. This differs from `write_bytes`: text output is always allowed
    /// to stop at a character boundary. In both cases only whole characters are written, so the
    /// result may be shorter than the limit. This truncation is not an error; compare the result
    /// with `Encoding::encoded_len` to detect it.
    ///
    /// Fails with `CursorError::OutOfBounds` only if the start position is past the end of the
    /// buffer. The cursor advances by the returned count when `options.offset` is `None`.
    pub fn write_string(&mut self, value: &str, options: WriteStringOptions) -> Result<usize> {
        let at = self.cursor.resolve(options.offset);
        let window = self.cursor.window(at, 0)?;
        let room = self.cursor.len() - window.start;
        let limit = options.length.map_or(room, |length| length.min(room));

        let written = options
            .encoding
            .encode_into(value, &mut self.cursor.buffer_mut()[at..at + limit]);
        self.cursor.advance(options.offset, written);
        Ok(written)
    }

    /// Copies `value` into the buffer.
    ///
    /// Fails with `CursorError::OutOfBounds`, writing nothing, if `value` does not fit. The cursor
    /// advances by `value.len()` when `offset` is `None`.
    pub fn write_bytes(&mut self, value: &[u8], offset: Option<usize>) -> Result<()> {
        let at = self.cursor.resolve(offset);
        let window = self.cursor.window(at, value.len())?;
        self.cursor.buffer_mut()[window].copy_from_slice(value);
        self.cursor.advance(offset, value.len());
        Ok(())
    }
}

impl<B> Deref for BufferWriter<B> {
    type Target = BufferCursor<B>;

    fn deref(&self) -> &Self::Target {
        &self.cursor
    }
}

impl<B> DerefMut for BufferWriter<B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cursor
    }
}

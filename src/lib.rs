//! Reads and writes typed values in fixed-size byte buffers through an offset-tracking cursor.
//!
//! [`BufferReader`] and [`BufferWriter`] wrap a caller-supplied buffer together with a cursor
//! offset and a byte order chosen at construction. Integers of 8, 16, 32 and 64 bits (signed and
//! unsigned), encoded strings and raw byte runs can be accessed either at the cursor, which then
//! advances past the value, or at an explicit offset, which leaves the cursor alone.
//!
//! 64-bit integers are read back as decimal text, and every integer write accepts decimal text as
//! well as native integers, so values round-trip without loss even through callers that cannot
//! represent the whole `u64` range.
//!
//! ```
//! use binary_cursor::{BufferReader, BufferWriter, CursorOptions};
//!
//! let mut w = BufferWriter::with_options([0u8; 10], CursorOptions::big_endian());
//! w.write_u16(0x0102, None).unwrap();
//! w.write_u64("18446744073709551615", None).unwrap();
//! assert_eq!(w.offset(), 10);
//!
//! let mut r = BufferReader::with_options(w.into_inner(), CursorOptions::big_endian());
//! assert_eq!(r.get_u16(None), Ok(0x0102));
//! assert_eq!(r.get_u64(None).unwrap(), "18446744073709551615");
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod cursor;
mod encoding;
mod options;
mod reader;
mod word;
mod writer;


pub use cursor::{BufferCursor, CursorError, Result};
pub use encoding::Encoding;
pub use options::{BytesOptions, CursorOptions, Endian, StringOptions, WriteStringOptions};
pub use reader::BufferReader;
pub use word::{IntValue, Word};
pub use writer::BufferWriter;

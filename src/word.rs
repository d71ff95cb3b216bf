use core::fmt::Display;
use core::mem::size_of;

use tracing::trace;
use zerocopy::byteorder::{ByteOrder, I16, I32, I64, U16, U32, U64};
use zerocopy::{FromBytes, IntoBytes};

use crate::{CursorError, Result};

/// A fixed-width integer that a cursor can read and write in either byte order.
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64` and `i64`. The byte order is a
/// type parameter, so each width gets separate big- and little-endian code at compile time. The
/// multi-byte conversions go through zerocopy's byte-order-aware integer types.
pub trait Word: Copy + Display + Into<i128> + TryFrom<i128> {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Type name used in error reports.
    const NAME: &'static str;

    /// Decodes a value from exactly `WIDTH` bytes. Returns `None` if `bytes` has the wrong length.
    fn decode<O: ByteOrder>(bytes: &[u8]) -> Option<Self>;

    /// Encodes the value into exactly `WIDTH` bytes. Returns `None` if `out` has the wrong length.
    fn encode<O: ByteOrder>(self, out: &mut [u8]) -> Option<()>;
}

// Single bytes have no byte order.
macro_rules! byte_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const WIDTH: usize = 1;
            const NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn decode<O: ByteOrder>(bytes: &[u8]) -> Option<Self> {
                <$t>::read_from_bytes(bytes).ok()
            }

            #[inline(always)]
            fn encode<O: ByteOrder>(self, out: &mut [u8]) -> Option<()> {
                self.write_to(out).ok()
            }
        }
    )*};
}

macro_rules! ordered_word {
    ($($t:ty => $repr:ident),*) => {$(
        impl Word for $t {
            const WIDTH: usize = size_of::<$t>();
            const NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn decode<O: ByteOrder>(bytes: &[u8]) -> Option<Self> {
                $repr::<O>::read_from_bytes(bytes).ok().map(|v| v.get())
            }

            #[inline(always)]
            fn encode<O: ByteOrder>(self, out: &mut [u8]) -> Option<()> {
                $repr::<O>::new(self).write_to(out).ok()
            }
        }
    )*};
}

byte_word!(u8, i8);
ordered_word!(u16 => U16, i16 => I16, u32 => U32, i32 => I32, u64 => U64, i64 => I64);

/// An integer supplied to one of the `write_*` methods.
///
/// Every width accepts the same three forms, so a value read back as text (as the 64-bit reads
/// return it) can be written again without loss. All forms are normalized to `i128` before being
/// narrowed to the target type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum IntValue<'a> {
    /// A native integer.
    Int(i64),
    /// A wide integer. Covers the full `u64` and `i64` domains.
    Big(i128),
    /// Decimal digits with an optional leading sign, such as `"-00123"`.
    Decimal(&'a str),
}

impl IntValue<'_> {
    /// Converts the value to `i128`.
    ///
    /// Decimal text may carry surrounding whitespace and a leading `-` or `+`. Leading zeros are
    /// insignificant. Anything else fails with `CursorError::InvalidInteger`; text outside the
    /// `i128` domain fails with `CursorError::OutOfRange`.
    pub fn normalize(self) -> Result<i128> {
        match self {
            Self::Int(n) => Ok(n.into()),
            Self::Big(n) => Ok(n),
            Self::Decimal(text) => parse_decimal(text),
        }
    }

    /// Normalizes the value and narrows it to `W`.
    pub fn narrow<W: Word>(self) -> Result<W> {
        let wide = self.normalize()?;
        W::try_from(wide).map_err(|_| {
            trace!(value = %wide, ty = W::NAME, "value out of range");
            CursorError::OutOfRange { ty: W::NAME }
        })
    }
}

fn parse_decimal(text: &str) -> Result<i128> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        trace!(text, "not a decimal integer");
        return Err(CursorError::InvalidInteger);
    }

    // Accumulate toward the sign so that i128::MIN is reachable.
    let mut n: i128 = 0;
    for b in digits.trim_start_matches('0').bytes() {
        let d = i128::from(b - b'0');
        n = n
            .checked_mul(10)
            .and_then(|n| if negative { n.checked_sub(d) } else { n.checked_add(d) })
            .ok_or(CursorError::OutOfRange { ty: "i128" })?;
    }
    Ok(n)
}

macro_rules! int_value_from {
    ($($t:ty => $variant:ident),*) => {$(
        impl From<$t> for IntValue<'_> {
            fn from(value: $t) -> Self {
                Self::$variant(value.into())
            }
        }
    )*};
}

int_value_from!(
    u8 => Int, i8 => Int, u16 => Int, i16 => Int, u32 => Int, i32 => Int, i64 => Int,
    u64 => Big, i128 => Big
);

impl<'a> From<&'a str> for IntValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Decimal(value)
    }
}

impl<'a> From<&'a alloc::string::String> for IntValue<'a> {
    fn from(value: &'a alloc::string::String) -> Self {
        Self::Decimal(value.as_str())
    }
}

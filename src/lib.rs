//! nbtenc turns any [`serde::Serialize`] value into NBT, the tagged binary
//! format *Minecraft: Java Edition* uses for world data, player files and
//! more.
//!
//! Encoding happens in two stages. The value is first walked depth first,
//! building an ordered [`Value`] tree; only once the whole tree resolved is
//! it written out as big-endian NBT. A failed encode therefore never produces
//! any bytes.
//!
//! * For the entry points see [`encode`], [`to_bytes`] and [`to_writer`].
//! * For the tree itself see [`Value`] and [`to_value`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For driving the containers by hand see [`encode_with`] and [`Encoder`].
//!
//! # Quick example
//!
//! ```
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct HelloWorld {
//!     name: String,
//! }
//!
//! let v = HelloWorld { name: "Bananrama".to_owned() };
//! let bytes = nbtenc::encode(&v, Some("hello world")).unwrap();
//!
//! assert_eq!(bytes[0], 0x0A); // root compound
//! assert_eq!(*bytes.last().unwrap(), 0x00); // its End tag
//! ```
//!
//! # Byte, Int and Long array types
//!
//! A `Vec<i32>` is serialized as an NBT List of Int. NBT also has dedicated
//! array tags with a different layout; to produce those, wrap the data in
//! [`ByteArray`], [`IntArray`] or [`LongArray`].
//!
//! # Optional fields
//!
//! A field holding `None` is left out of its compound entirely. NBT has no
//! null, so absence is the only faithful encoding.
//!
//! # Compression
//!
//! NBT files are usually gzip or zlib compressed. That is left to the caller,
//! eg with the `flate2` crate, over the finished byte sequence.

pub mod error;
pub mod ser;

mod arrays;
mod value;

pub use arrays::*;
pub use ser::{
    encode, encode_with, to_bytes, to_bytes_with_opts, to_writer, value_with, EncodeOpts,
    Encoder, KeyedContainer, SingleValueContainer, UnkeyedContainer,
};
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

/// Variant names the array types use to signal the encoder. They never
/// appear in the output.
pub(crate) const BYTE_ARRAY_TOKEN: &str = "__nbtenc_byte_array";
pub(crate) const INT_ARRAY_TOKEN: &str = "__nbtenc_int_array";
pub(crate) const LONG_ARRAY_TOKEN: &str = "__nbtenc_long_array";

impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

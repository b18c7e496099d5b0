//! This module contains a serde serializer for NBT data. This should be able to
//! serialize most structures to NBT. Use [`encode`][`crate::encode`],
//! [`to_bytes`][`crate::to_bytes`] or [`to_writer`][`crate::to_writer`].
//!
//! Encoding first builds the complete [`Value`] tree, reserving a slot for
//! each field or element before descending into it, and only then writes
//! bytes. Either the whole document is produced or an error is returned.
//!
//! Some Rust structures have no sensible mapping to NBT data, for example a
//! list mixing strings and numbers. These cases will result in an error (not
//! a panic).
mod array_serializer;
mod encoder;
mod keyed;
mod name_serializer;
mod single;
mod unkeyed;

pub(crate) mod cell;
pub(crate) mod write_nbt;

pub use encoder::Encoder;
pub use keyed::KeyedContainer;
pub use single::SingleValueContainer;
pub use unkeyed::UnkeyedContainer;

use std::io::Write;

use serde::Serialize;

use crate::{error::Result, Value};

/// Options for the encoder.
///
/// ```
/// use nbtenc::EncodeOpts;
///
/// let opts = EncodeOpts::new().root_name("Level");
/// let bytes = nbtenc::to_bytes_with_opts(&std::collections::BTreeMap::<String, i32>::new(), opts).unwrap();
/// assert_eq!(bytes, [0x0A, 0x00, 0x05, b'L', b'e', b'v', b'e', b'l', 0x00]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOpts {
    root_name: Option<String>,
}

impl EncodeOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the output in a root compound with this name. NBT files
    /// conventionally have one, usually with an empty name.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }
}

/// Encode `value` as NBT.
///
/// With a `root_name`, the value is written as the root compound of an NBT
/// document. Without one it is written bare: a struct or map as its sequence
/// of named tags, a sequence as a list payload, a scalar as its payload.
///
/// A `root_name` given with a value that is not a struct or map (a number, a
/// string, a sequence) produces a single named tag of the value's own kind.
/// That is not a standard NBT document: readers expecting the `0x0A` root
/// compound will reject it.
///
/// ```
/// let bytes = nbtenc::encode(&32767u16, None).unwrap();
/// assert_eq!(bytes, [0x7F, 0xFF]);
/// ```
pub fn encode<T: Serialize + ?Sized>(value: &T, root_name: Option<&str>) -> Result<Vec<u8>> {
    Encoder::resolve(value)?.to_bytes(root_name)
}

/// Encode `value` as NBT, without a root name. See [`encode`].
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    encode(value, None)
}

pub fn to_bytes_with_opts<T: Serialize + ?Sized>(value: &T, opts: EncodeOpts) -> Result<Vec<u8>> {
    encode(value, opts.root_name.as_deref())
}

/// Encode `value` and write the result to `writer`. The document is built in
/// full before anything is written, so a failed encode writes nothing.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    opts: EncodeOpts,
) -> Result<()> {
    Encoder::resolve(value)?.write_to(writer, opts.root_name.as_deref())
}

/// Encode by driving the containers directly, for types whose layout is easier
/// to write out by hand than to derive.
///
/// ```
/// use nbtenc::EncodeOpts;
///
/// let bytes = nbtenc::encode_with(EncodeOpts::new().root_name("hello world"), |enc| {
///     let mut root = enc.keyed()?;
///     root.encode("name", "Bananrama")
/// })
/// .unwrap();
///
/// assert_eq!(bytes.len(), 33);
/// ```
pub fn encode_with<F>(opts: EncodeOpts, f: F) -> Result<Vec<u8>>
where
    F: FnOnce(Encoder<'_>) -> Result<()>,
{
    Encoder::run(f)?.to_bytes(opts.root_name.as_deref())
}

/// Build the tree with the containers directly, without writing it.
pub fn value_with<F>(f: F) -> Result<Value>
where
    F: FnOnce(Encoder<'_>) -> Result<()>,
{
    Encoder::run(f)
}

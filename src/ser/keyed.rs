use serde::Serialize;

use crate::{
    error::{Error, Result},
    ByteArray, IntArray, LongArray, Value,
};

use super::{
    cell::{Arena, CellId},
    name_serializer::NameSerializer,
    Encoder, UnkeyedContainer,
};

/// Builds a compound, one named field at a time.
///
/// A field's cell is reserved under its name before the field's value is
/// encoded, so fields come out in the order they were given, however deeply
/// each one nests. Fields encoded as nil (eg a `None`) never appear.
pub struct KeyedContainer<'a> {
    arena: &'a mut Arena,
    cell: CellId,
    next_key: Option<String>,
}

impl<'a> KeyedContainer<'a> {
    pub(crate) fn new(arena: &'a mut Arena, cell: CellId) -> Self {
        Self {
            arena,
            cell,
            next_key: None,
        }
    }

    fn reserve(&mut self, key: &str) -> Result<CellId> {
        let child = self.arena.alloc();
        self.arena.add_field(self.cell, key.to_owned(), child)?;
        Ok(child)
    }

    /// Encode `value` under `key`. Encoding the same key twice replaces the
    /// earlier value but keeps its position.
    pub fn encode<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let child = self.reserve(key)?;
        value.serialize(Encoder::new(&mut *self.arena, child))
    }

    /// Nil has no NBT form, so the key is not written. A value encoded
    /// earlier under the same key is dropped as well.
    pub fn encode_nil(&mut self, key: &str) -> Result<()> {
        self.reserve(key).map(|_| ())
    }

    pub fn encode_byte_array(&mut self, key: &str, data: &[i8]) -> Result<()> {
        let child = self.reserve(key)?;
        self.arena
            .set_scalar(child, Value::ByteArray(ByteArray::new(data.to_vec())))
    }

    pub fn encode_int_array(&mut self, key: &str, data: &[i32]) -> Result<()> {
        let child = self.reserve(key)?;
        self.arena
            .set_scalar(child, Value::IntArray(IntArray::new(data.to_vec())))
    }

    pub fn encode_long_array(&mut self, key: &str, data: &[i64]) -> Result<()> {
        let child = self.reserve(key)?;
        self.arena
            .set_scalar(child, Value::LongArray(LongArray::new(data.to_vec())))
    }

    /// A compound under `key`, to be filled in through the returned container.
    pub fn nested_keyed(&mut self, key: &str) -> Result<KeyedContainer<'_>> {
        let child = self.reserve(key)?;
        Encoder::new(&mut *self.arena, child).keyed()
    }

    /// A list under `key`, to be filled in through the returned container.
    pub fn nested_unkeyed(&mut self, key: &str) -> Result<UnkeyedContainer<'_>> {
        let child = self.reserve(key)?;
        Encoder::new(&mut *self.arena, child).unkeyed()
    }

    /// An encoder for a base value, stored under the key `"super"`.
    pub fn super_encoder(&mut self) -> Result<Encoder<'_>> {
        self.super_encoder_for("super")
    }

    pub fn super_encoder_for(&mut self, key: &str) -> Result<Encoder<'_>> {
        let child = self.reserve(key)?;
        Ok(Encoder::new(&mut *self.arena, child))
    }

    /// Number of fields reserved so far, nil fields included.
    pub fn len(&self) -> usize {
        self.arena.field_count(self.cell).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_nested_keyed(mut self, key: &str) -> Result<KeyedContainer<'a>> {
        let child = self.reserve(key)?;
        Encoder::new(self.arena, child).keyed()
    }

    pub(crate) fn into_nested_unkeyed(mut self, key: &str) -> Result<UnkeyedContainer<'a>> {
        let child = self.reserve(key)?;
        Encoder::new(self.arena, child).unkeyed()
    }
}

impl<'a> serde::ser::SerializeStruct for KeyedContainer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.encode(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a> serde::ser::SerializeStructVariant for KeyedContainer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.encode(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a> serde::ser::SerializeMap for KeyedContainer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: ?Sized>(&mut self, key: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.next_key = Some(key.serialize(NameSerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::bespoke("serialize_value called before serialize_key".into()))?;
        self.encode(&key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

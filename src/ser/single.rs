use serde::Serialize;

use crate::{
    error::{Error, Result},
    ByteArray, IntArray, LongArray, Tag, Value,
};

use super::{
    cell::{Arena, CellId},
    Encoder,
};

/// Writes exactly one value into a slot, with no name and no ordering. The
/// slot is written once; a second write fails.
pub struct SingleValueContainer<'a> {
    arena: &'a mut Arena,
    cell: CellId,
}

impl<'a> SingleValueContainer<'a> {
    pub(crate) fn new(arena: &'a mut Arena, cell: CellId) -> Self {
        Self { arena, cell }
    }

    pub(crate) fn set(&mut self, value: Value) -> Result<()> {
        self.arena.set_scalar(self.cell, value)
    }

    /// Fails unless the slot still holds End.
    fn ensure_empty(&self) -> Result<()> {
        match self.arena.tag_of(self.cell) {
            Tag::End => Ok(()),
            tag => Err(Error::wrong_value_type(format!(
                "single value already written as {:?}",
                tag
            ))),
        }
    }

    /// Encode `value` into the slot. A structured value takes the slot over
    /// as a compound or list.
    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.ensure_empty()?;
        value.serialize(Encoder::new(&mut *self.arena, self.cell))
    }

    /// Leaves the slot empty.
    pub fn encode_nil(&mut self) -> Result<()> {
        Ok(())
    }

    pub fn encode_byte_array(&mut self, data: &[i8]) -> Result<()> {
        self.set(Value::ByteArray(ByteArray::new(data.to_vec())))
    }

    pub fn encode_int_array(&mut self, data: &[i32]) -> Result<()> {
        self.set(Value::IntArray(IntArray::new(data.to_vec())))
    }

    pub fn encode_long_array(&mut self, data: &[i64]) -> Result<()> {
        self.set(Value::LongArray(LongArray::new(data.to_vec())))
    }
}

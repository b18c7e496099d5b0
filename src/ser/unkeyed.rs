use serde::Serialize;

use crate::{
    error::{Error, Result},
    Tag,
};

use super::{
    cell::{Arena, CellId},
    Encoder, KeyedContainer,
};

/// Builds an NBT List. The first element fixes the element tag, and any later
/// element with a different tag is refused. Elements may be compounds or
/// lists themselves.
///
/// A plain sequence of integers becomes a List here. For the dedicated array
/// tags use [`ByteArray`][crate::ByteArray] and friends.
pub struct UnkeyedContainer<'a> {
    arena: &'a mut Arena,
    cell: CellId,
}

impl<'a> UnkeyedContainer<'a> {
    pub(crate) fn new(arena: &'a mut Arena, cell: CellId) -> Self {
        Self { arena, cell }
    }

    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let child = self.arena.alloc();
        value.serialize(Encoder::new(&mut *self.arena, child))?;
        if self.arena.tag_of(child) == Tag::End {
            return Err(Error::wrong_value_type("list element has no value"));
        }
        self.arena.append_element(self.cell, child)
    }

    /// Lists cannot hold nil, so this always fails.
    pub fn encode_nil(&mut self) -> Result<()> {
        Err(Error::wrong_value_type("nil cannot be a list element"))
    }

    /// Append a compound, to be filled in through the returned container.
    pub fn nested_keyed(&mut self) -> Result<KeyedContainer<'_>> {
        let child = self.arena.alloc();
        self.arena.promote_compound(child)?;
        self.arena.append_element(self.cell, child)?;
        Ok(KeyedContainer::new(&mut *self.arena, child))
    }

    /// Append a list, to be filled in through the returned container.
    pub fn nested_unkeyed(&mut self) -> Result<UnkeyedContainer<'_>> {
        let child = self.arena.alloc();
        self.arena.promote_list(child)?;
        self.arena.append_element(self.cell, child)?;
        Ok(UnkeyedContainer::new(&mut *self.arena, child))
    }

    /// Append an element whose kind is up to the returned encoder. Its tag is
    /// checked against the rest of the list once encoding finishes.
    pub fn super_encoder(&mut self) -> Result<Encoder<'_>> {
        let child = self.arena.alloc();
        self.arena.append_element(self.cell, child)?;
        Ok(Encoder::new(&mut *self.arena, child))
    }

    /// Number of elements appended so far.
    pub fn count(&self) -> usize {
        self.arena.element_count(self.cell).unwrap_or(0)
    }
}

impl<'a> serde::ser::SerializeSeq for UnkeyedContainer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a> serde::ser::SerializeTuple for UnkeyedContainer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a> serde::ser::SerializeTupleStruct for UnkeyedContainer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a> serde::ser::SerializeTupleVariant for UnkeyedContainer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.encode(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

use serde::Serialize;

use crate::{
    error::{Error, Result},
    Tag, Value, BYTE_ARRAY_TOKEN, INT_ARRAY_TOKEN, LONG_ARRAY_TOKEN,
};

use super::{
    array_serializer::ArraySerializer,
    cell::{Arena, CellId},
    KeyedContainer, SingleValueContainer, UnkeyedContainer,
};

/// Encoder drives one value into one cell of the tree being built.
///
/// It is the [`serde::Serializer`] the rest of the crate runs on: structs and
/// maps go to a [`KeyedContainer`], sequences to an [`UnkeyedContainer`], and
/// everything else is a single value. Each nested field or element gets an
/// Encoder of its own, scoped to a freshly reserved cell.
///
/// Types that want to lay out their fields by hand can use [`Encoder::keyed`],
/// [`Encoder::unkeyed`] and [`Encoder::single_value`] directly, see
/// [`encode_with`][crate::encode_with].
pub struct Encoder<'a> {
    arena: &'a mut Arena,
    cell: CellId,
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(arena: &'a mut Arena, cell: CellId) -> Self {
        Self { arena, cell }
    }

    /// Run `value` through a fresh tree and resolve it.
    pub(crate) fn resolve<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
        let mut arena = Arena::new();
        let root = arena.alloc();
        value.serialize(Encoder::new(&mut arena, root))?;
        arena.resolve(root)
    }

    pub(crate) fn run<F>(f: F) -> Result<Value>
    where
        F: FnOnce(Encoder<'_>) -> Result<()>,
    {
        let mut arena = Arena::new();
        let root = arena.alloc();
        f(Encoder::new(&mut arena, root))?;
        arena.resolve(root)
    }

    /// Turn this slot into a compound and return the container for its fields.
    pub fn keyed(self) -> Result<KeyedContainer<'a>> {
        self.arena.promote_compound(self.cell)?;
        Ok(KeyedContainer::new(self.arena, self.cell))
    }

    /// Turn this slot into a list and return the container for its elements.
    pub fn unkeyed(self) -> Result<UnkeyedContainer<'a>> {
        self.arena.promote_list(self.cell)?;
        Ok(UnkeyedContainer::new(self.arena, self.cell))
    }

    pub fn single_value(self) -> SingleValueContainer<'a> {
        SingleValueContainer::new(self.arena, self.cell)
    }

    /// Encode any serializable value into this slot.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn set(self, value: Value) -> Result<()> {
        self.single_value().set(value)
    }
}

impl<'a> serde::Serializer for Encoder<'a> {
    type Ok = ();
    type Error = Error;
    type SerializeSeq = UnkeyedContainer<'a>;
    type SerializeTuple = UnkeyedContainer<'a>;
    type SerializeTupleStruct = UnkeyedContainer<'a>;
    type SerializeTupleVariant = UnkeyedContainer<'a>;
    type SerializeMap = KeyedContainer<'a>;
    type SerializeStruct = KeyedContainer<'a>;
    type SerializeStructVariant = KeyedContainer<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.set(Value::Byte(v as i8))
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.set(Value::Byte(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.set(Value::Short(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.set(Value::Int(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.set(Value::Long(v))
    }

    // NBT only has signed tags. Unsigned values keep their bits and so wrap
    // past the signed maximum.
    fn serialize_u8(self, v: u8) -> Result<()> {
        self.set(Value::Byte(v as i8))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.set(Value::Short(v as i16))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.set(Value::Int(v as i32))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.set(Value::Long(v as i64))
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.set(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.set(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.set(Value::Float(v))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.set(Value::Double(v))
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.set(Value::Int(v as i32))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.set(Value::String(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.set(Value::List(v.iter().map(|b| Value::Byte(*b as i8)).collect()))
    }

    fn serialize_none(self) -> Result<()> {
        self.single_value().encode_nil()
    }

    fn serialize_some<T: ?Sized>(self, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.single_value().encode_nil()
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.keyed().map(|_| ())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T: ?Sized>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: Serialize,
    {
        match variant {
            BYTE_ARRAY_TOKEN => value.serialize(ArraySerializer {
                ser: self,
                tag: Tag::ByteArray,
            }),
            INT_ARRAY_TOKEN => value.serialize(ArraySerializer {
                ser: self,
                tag: Tag::IntArray,
            }),
            LONG_ARRAY_TOKEN => value.serialize(ArraySerializer {
                ser: self,
                tag: Tag::LongArray,
            }),
            _ => {
                let mut keyed = self.keyed()?;
                keyed.encode(variant, value)
            }
        }
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.unkeyed()
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.unkeyed()
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.unkeyed()
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.keyed()?.into_nested_unkeyed(variant)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.keyed()
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.keyed()
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.keyed()?.into_nested_keyed(variant)
    }

    fn collect_str<T: ?Sized>(self, value: &T) -> Result<()>
    where
        T: std::fmt::Display,
    {
        self.set(Value::String(value.to_string()))
    }
}

use serde::{ser::Impossible, Serialize, Serializer};

use crate::error::{Error, Result};

/// NameSerializer turns a map key into the name of a compound field. Strings
/// are used as is; integers and chars are written out in decimal and as a
/// one character string. Anything else cannot name a field.
pub(crate) struct NameSerializer;

macro_rules! bespoke_error {
    ($name:literal) => {
        Err(Error::bespoke(format!(
            "field must be string-like, found {}",
            $name
        )))
    };
}

macro_rules! must_be_stringy {
    ($name:literal: $ser:ident($($t:ty),*) -> $res:ty) => {
        fn $ser(self, $(_: $t),*) -> Result<$res> {
            bespoke_error!($name)
        }
    };

    ($name:literal: $ser:ident<T>($($t:ty),*) -> $res:ty) => {
        fn $ser<T: ?Sized + Serialize>(self, $(_: $t),*) -> Result<$res> {
            bespoke_error!($name)
        }
    };

    ($name:literal: $ser:ident($($t:ty),*)) => {
        must_be_stringy!($name: $ser($($t),*) -> String);
    };

    ($name:literal: $ser:ident<T>($($t:ty),*)) => {
        must_be_stringy!($name: $ser<T>($($t),*) -> String);
    };
}

macro_rules! decimal {
    ($($ser:ident($t:ty)),*) => {
        $(
            fn $ser(self, v: $t) -> Result<String> {
                Ok(v.to_string())
            }
        )*
    };
}

impl Serializer for NameSerializer {
    type Ok = String;
    type Error = Error;
    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_owned())
    }

    fn serialize_char(self, c: char) -> Result<String> {
        Ok(c.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String> {
        value.serialize(self)
    }

    fn collect_str<T: ?Sized + std::fmt::Display>(self, value: &T) -> Result<String> {
        Ok(value.to_string())
    }

    decimal!(
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64)
    );

    must_be_stringy!("bool": serialize_bool(bool));
    must_be_stringy!("f32": serialize_f32(f32));
    must_be_stringy!("f64": serialize_f64(f64));
    must_be_stringy!("bytes": serialize_bytes(&[u8]));
    must_be_stringy!("none": serialize_none());
    must_be_stringy!("some": serialize_some<T>(&T));
    must_be_stringy!("unit": serialize_unit());
    must_be_stringy!("unit_struct": serialize_unit_struct(&'static str));
    must_be_stringy!("newtype_variant": serialize_newtype_variant<T>(&'static str, u32, &'static str, &T));
    must_be_stringy!("seq": serialize_seq(Option<usize>) -> Self::SerializeSeq);
    must_be_stringy!("tuple": serialize_tuple(usize) -> Self::SerializeTuple);
    must_be_stringy!("tuple_struct": serialize_tuple_struct(&'static str, usize) -> Self::SerializeTupleStruct);
    must_be_stringy!("tuple_variant": serialize_tuple_variant(&'static str, u32, &'static str, usize) -> Self::SerializeTupleVariant);
    must_be_stringy!("map": serialize_map(Option<usize>) -> Self::SerializeMap);
    must_be_stringy!("struct": serialize_struct(&'static str, usize) -> Self::SerializeStruct);
    must_be_stringy!("struct_variant": serialize_struct_variant(&'static str, u32, &'static str, usize) -> Self::SerializeStructVariant);
}

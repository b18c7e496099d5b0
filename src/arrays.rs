use std::ops::{Deref, DerefMut};

use byteorder::{BigEndian, ByteOrder};
use serde::Serialize;
use serde_bytes::Bytes;

use crate::{
    error::{Error, Result},
    BYTE_ARRAY_TOKEN, INT_ARRAY_TOKEN, LONG_ARRAY_TOKEN,
};

// We can't know anything about NBT inside these Serialize impls, since we might
// be serializing to a different format. But we can hand the serializer a newtype
// variant with a reserved name, carrying the data as big-endian bytes.
fn serialize_token<S>(
    serializer: S,
    token: &'static str,
    data: &[u8],
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_newtype_variant("", 0, token, Bytes::new(data))
}

/// An NBT ByteArray. Serializes to the ByteArray tag rather than a List of
/// Byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteArray {
    data: Vec<i8>,
}

impl ByteArray {
    pub fn new(data: Vec<i8>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i8> {
        self.data
    }

    pub(crate) fn from_bytes(data: &[u8]) -> Self {
        Self::new(data.iter().map(|b| *b as i8).collect())
    }
}

impl Serialize for ByteArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let data: Vec<u8> = self.data.iter().map(|b| *b as u8).collect();
        serialize_token(serializer, BYTE_ARRAY_TOKEN, &data)
    }
}

/// An NBT IntArray. Serializes to the IntArray tag rather than a List of Int.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.data
    }

    pub(crate) fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(Error::array_as_other());
        }
        let mut out = vec![0; data.len() / 4];
        BigEndian::read_i32_into(data, &mut out);
        Ok(Self::new(out))
    }
}

impl Serialize for IntArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut data = vec![0; self.data.len() * 4];
        BigEndian::write_i32_into(&self.data, &mut data);
        serialize_token(serializer, INT_ARRAY_TOKEN, &data)
    }
}

/// An NBT LongArray. Serializes to the LongArray tag rather than a List of
/// Long.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LongArray {
    data: Vec<i64>,
}

impl LongArray {
    pub fn new(data: Vec<i64>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.data
    }

    pub(crate) fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() % 8 != 0 {
            return Err(Error::array_as_other());
        }
        let mut out = vec![0; data.len() / 8];
        BigEndian::read_i64_into(data, &mut out);
        Ok(Self::new(out))
    }
}

impl Serialize for LongArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut data = vec![0; self.data.len() * 8];
        BigEndian::write_i64_into(&self.data, &mut data);
        serialize_token(serializer, LONG_ARRAY_TOKEN, &data)
    }
}

macro_rules! deref_array {
    ($($array:ty => $elem:ty),*) => {
        $(
            impl Deref for $array {
                type Target = Vec<$elem>;

                fn deref(&self) -> &Self::Target {
                    &self.data
                }
            }

            impl DerefMut for $array {
                fn deref_mut(&mut self) -> &mut Self::Target {
                    &mut self.data
                }
            }

            impl From<Vec<$elem>> for $array {
                fn from(data: Vec<$elem>) -> Self {
                    Self::new(data)
                }
            }
        )*
    };
}

deref_array!(ByteArray => i8, IntArray => i32, LongArray => i64);

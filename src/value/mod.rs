mod ser;
mod write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{error::Result, ser::Encoder, ByteArray, IntArray, LongArray, Tag};

/// The map backing [`Value::Compound`]. Iteration follows insertion order, so
/// encoding the same fields in the same order always gives the same bytes.
pub type CompoundMap = IndexMap<String, Value>;

/// Value is a complete NBT value. It owns its data. Lists and the array types
/// are kept apart, so a `List` of `Int` and an `IntArray` stay distinct.
///
/// `End` is what a slot holds before anything is written to it. It is only
/// ever written as the element tag of an empty list.
///
/// ```
/// use nbtenc::{CompoundMap, Value};
///
/// let mut compound = CompoundMap::new();
/// compound.insert("name".to_owned(), Value::from("Bananrama"));
///
/// let bytes = Value::Compound(compound).to_bytes(Some("hello world")).unwrap();
/// assert_eq!(&bytes[..3], &[0x0A, 0x00, 0x0B]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    List(Vec<Value>),
    Compound(CompoundMap),
}

impl Default for Value {
    fn default() -> Self {
        Value::End
    }
}

impl Value {
    /// The tag this value is written with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    /// The tag shared by the elements of a list, `End` for an empty list. None
    /// for anything that is not a list.
    pub fn element_tag(&self) -> Option<Tag> {
        match self {
            Value::List(v) => Some(v.first().map_or(Tag::End, Value::tag)),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundMap> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(CompoundMap, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(val: Vec<T>) -> Self {
        Self::List(val.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for CompoundValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CompoundValue(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Collects `(name, value)` pairs into a compound, keeping their order.
///
/// ```
/// use nbtenc::{CompoundValue, Value};
///
/// let v: Value = [("ip", "mc.example.com"), ("name", "Example server")]
///     .into_iter()
///     .collect::<CompoundValue>()
///     .into();
/// assert_eq!(v.as_compound().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundValue(pub CompoundMap);

impl From<CompoundValue> for Value {
    fn from(val: CompoundValue) -> Self {
        Value::Compound(val.0)
    }
}

// 128 bit integers have no tag of their own. They become an IntArray of four
// words, most significant first.
impl From<i128> for Value {
    fn from(val: i128) -> Self {
        Value::from(val as u128)
    }
}

impl From<u128> for Value {
    fn from(val: u128) -> Self {
        Self::IntArray(IntArray::new(vec![
            (val >> 96) as i32,
            (val >> 64) as i32,
            (val >> 32) as i32,
            val as i32,
        ]))
    }
}

/// Convert a `T` into `nbtenc::Value`, the tree the encoder builds before any
/// bytes are written.
///
/// # Example
///
/// ```
/// use serde::Serialize;
/// use nbtenc::Value;
///
/// #[derive(Serialize)]
/// struct User {
///     fingerprint: String,
///     location: Option<String>,
/// }
///
/// let u = User {
///     fingerprint: "0xF9BA143B95FF6D82".to_owned(),
///     location: None,
/// };
///
/// let v = nbtenc::to_value(&u).unwrap();
/// let compound = v.as_compound().unwrap();
/// assert_eq!(compound["fingerprint"], Value::from("0xF9BA143B95FF6D82"));
/// assert!(!compound.contains_key("location"));
/// ```
///
/// # Errors
///
/// This conversion can fail if `T`'s implementation of `Serialize` decides to
/// fail, if `T` contains a map with non-string keys, or if a sequence mixes
/// element types.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    Encoder::resolve(value)
}

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

use crate::{
    error::{Error, Result},
    ser::write_nbt::WriteNbt,
    CompoundMap, Tag, Value,
};

impl Value {
    /// Write this value as NBT.
    ///
    /// With a `root_name` the value becomes the root compound of an NBT
    /// document: `0x0A`, the name, the compound body and its End tag. Without
    /// one the value is written bare: a compound as its sequence of named
    /// tags, anything else as its payload alone.
    pub fn to_bytes(&self, root_name: Option<&str>) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        write_document(&mut out, self, root_name)?;
        debug!("wrote {} bytes of nbt, root name {:?}", out.len(), root_name);
        Ok(out)
    }

    /// Like [`Value::to_bytes`], handing the finished bytes to `writer` in a
    /// single `write_all`. Nothing is written if the tree cannot be encoded.
    pub fn write_to<W: Write>(&self, mut writer: W, root_name: Option<&str>) -> Result<()> {
        let bytes = self.to_bytes(root_name)?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

fn write_document<W: Write>(w: &mut W, value: &Value, root_name: Option<&str>) -> Result<()> {
    match (root_name, value) {
        (Some(name), Value::Compound(map)) => {
            w.write_tag(Tag::Compound)?;
            w.write_size_prefixed_str(name)?;
            write_compound_body(w, map)
        }
        (Some(name), Value::End) => {
            w.write_tag(Tag::Compound)?;
            w.write_size_prefixed_str(name)?;
            w.write_tag(Tag::End)
        }
        (Some(name), other) => {
            w.write_tag(other.tag())?;
            w.write_size_prefixed_str(name)?;
            write_payload(w, other)
        }
        (None, Value::Compound(map)) => write_entries(w, map),
        (None, Value::End) => Ok(()),
        (None, other) => write_payload(w, other),
    }
}

fn write_payload<W: Write>(w: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::End => return Err(Error::wrong_value_type("End tag has no payload")),
        Value::Byte(v) => w.write_i8(*v)?,
        Value::Short(v) => w.write_i16::<BigEndian>(*v)?,
        Value::Int(v) => w.write_i32::<BigEndian>(*v)?,
        Value::Long(v) => w.write_i64::<BigEndian>(*v)?,
        Value::Float(v) => w.write_f32::<BigEndian>(*v)?,
        Value::Double(v) => w.write_f64::<BigEndian>(*v)?,
        Value::String(v) => w.write_size_prefixed_str(v)?,
        Value::ByteArray(v) => {
            w.write_len(v.len())?;
            for b in v.iter() {
                w.write_i8(*b)?;
            }
        }
        Value::IntArray(v) => {
            w.write_len(v.len())?;
            for i in v.iter() {
                w.write_i32::<BigEndian>(*i)?;
            }
        }
        Value::LongArray(v) => {
            w.write_len(v.len())?;
            for l in v.iter() {
                w.write_i64::<BigEndian>(*l)?;
            }
        }
        Value::List(v) => write_list(w, v)?,
        Value::Compound(map) => write_compound_body(w, map)?,
    }
    Ok(())
}

fn write_list<W: Write>(w: &mut W, list: &[Value]) -> Result<()> {
    let tag = list.first().map_or(Tag::End, Value::tag);
    if tag == Tag::End && !list.is_empty() {
        return Err(Error::wrong_value_type("list element has no value"));
    }
    if let Some(other) = list.iter().find(|el| el.tag() != tag) {
        return Err(Error::wrong_value_type(format!(
            "list of {:?} cannot hold {:?}",
            tag,
            other.tag()
        )));
    }

    w.write_tag(tag)?;
    w.write_len(list.len())?;
    for el in list {
        write_payload(w, el)?;
    }
    Ok(())
}

/// Named tags of a compound, without the End tag. Entries still holding End
/// were never given a value and are left out.
fn write_entries<W: Write>(w: &mut W, map: &CompoundMap) -> Result<()> {
    for (name, value) in map {
        if let Value::End = value {
            continue;
        }
        w.write_tag(value.tag())?;
        w.write_size_prefixed_str(name)?;
        write_payload(w, value)?;
    }
    Ok(())
}

fn write_compound_body<W: Write>(w: &mut W, map: &CompoundMap) -> Result<()> {
    write_entries(w, map)?;
    w.write_tag(Tag::End)
}

//! The tree under construction. Every position in the output is a cell in an
//! [`Arena`], addressed by index. A container reserves a cell for a child
//! before the child's content exists, hands the index to a nested encoder,
//! and the whole arena is turned into a [`Value`] once the top level call
//! returns.

use indexmap::IndexMap;
use log::trace;

use crate::{
    error::{Error, Result},
    CompoundMap, Tag, Value,
};

pub(crate) type CellId = usize;

#[derive(Debug)]
enum Slot {
    /// Nothing written yet.
    End,
    /// A finished value: scalars, strings and the array types.
    Leaf(Value),
    /// `tag` is End until the first element with a value is appended.
    List { tag: Tag, items: Vec<CellId> },
    Compound(IndexMap<String, CellId>),
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reserve a new cell, holding End.
    pub(crate) fn alloc(&mut self) -> CellId {
        self.slots.push(Slot::End);
        self.slots.len() - 1
    }

    pub(crate) fn tag_of(&self, id: CellId) -> Tag {
        match &self.slots[id] {
            Slot::End => Tag::End,
            Slot::Leaf(v) => v.tag(),
            Slot::List { .. } => Tag::List,
            Slot::Compound(_) => Tag::Compound,
        }
    }

    /// Cells are written once. Setting a cell that already holds something is
    /// an error rather than an overwrite.
    pub(crate) fn set_scalar(&mut self, id: CellId, value: Value) -> Result<()> {
        match self.slots[id] {
            Slot::End => {
                self.slots[id] = Slot::Leaf(value);
                Ok(())
            }
            _ => Err(Error::wrong_value_type(format!(
                "cannot write {:?}, slot already holds {:?}",
                value.tag(),
                self.tag_of(id)
            ))),
        }
    }

    pub(crate) fn promote_compound(&mut self, id: CellId) -> Result<()> {
        match self.slots[id] {
            Slot::End => {
                trace!("cell {} becomes a compound", id);
                self.slots[id] = Slot::Compound(IndexMap::new());
                Ok(())
            }
            Slot::Compound(_) => Ok(()),
            _ => Err(Error::wrong_value_type(format!(
                "cannot add fields to {:?}",
                self.tag_of(id)
            ))),
        }
    }

    pub(crate) fn promote_list(&mut self, id: CellId) -> Result<()> {
        match self.slots[id] {
            Slot::End => {
                trace!("cell {} becomes a list", id);
                self.slots[id] = Slot::List {
                    tag: Tag::End,
                    items: Vec::new(),
                };
                Ok(())
            }
            Slot::List { .. } => Ok(()),
            _ => Err(Error::wrong_value_type(format!(
                "cannot append elements to {:?}",
                self.tag_of(id)
            ))),
        }
    }

    /// Insert `name -> child`. An existing name keeps its position and gets
    /// the new child.
    pub(crate) fn add_field(&mut self, id: CellId, name: String, child: CellId) -> Result<()> {
        self.promote_compound(id)?;
        match &mut self.slots[id] {
            Slot::Compound(fields) => {
                fields.insert(name, child);
                Ok(())
            }
            _ => Err(Error::wrong_value_type("expected a compound")),
        }
    }

    /// Append `child` to the list in `id`. The first element with a value
    /// fixes the element tag; a child still holding End is checked when the
    /// tree resolves.
    pub(crate) fn append_element(&mut self, id: CellId, child: CellId) -> Result<()> {
        let child_tag = self.tag_of(child);
        self.promote_list(id)?;
        match &mut self.slots[id] {
            Slot::List { tag, items } => {
                if child_tag != Tag::End {
                    if *tag == Tag::End {
                        *tag = child_tag;
                    } else if *tag != child_tag {
                        return Err(mismatch(*tag, child_tag));
                    }
                }
                items.push(child);
                Ok(())
            }
            _ => Err(Error::wrong_value_type("expected a list")),
        }
    }

    pub(crate) fn element_count(&self, id: CellId) -> Option<usize> {
        match &self.slots[id] {
            Slot::List { items, .. } => Some(items.len()),
            _ => None,
        }
    }

    pub(crate) fn field_count(&self, id: CellId) -> Option<usize> {
        match &self.slots[id] {
            Slot::Compound(fields) => Some(fields.len()),
            _ => None,
        }
    }

    /// Consume the arena, producing the finished tree rooted at `root`.
    pub(crate) fn resolve(mut self, root: CellId) -> Result<Value> {
        self.take(root)
    }

    fn take(&mut self, id: CellId) -> Result<Value> {
        match std::mem::replace(&mut self.slots[id], Slot::End) {
            Slot::End => Ok(Value::End),
            Slot::Leaf(v) => Ok(v),
            Slot::List { items, .. } => {
                let mut list = Vec::with_capacity(items.len());
                let mut list_tag = None;
                for child in items {
                    let value = self.take(child)?;
                    let tag = value.tag();
                    if tag == Tag::End {
                        return Err(Error::wrong_value_type("list element has no value"));
                    }
                    match list_tag {
                        None => list_tag = Some(tag),
                        Some(expected) if expected != tag => return Err(mismatch(expected, tag)),
                        Some(_) => {}
                    }
                    list.push(value);
                }
                Ok(Value::List(list))
            }
            Slot::Compound(fields) => {
                let mut compound = CompoundMap::with_capacity(fields.len());
                for (name, child) in fields {
                    match self.take(child)? {
                        // Nil: the field never appears.
                        Value::End => {}
                        value => {
                            compound.insert(name, value);
                        }
                    }
                }
                Ok(Value::Compound(compound))
            }
        }
    }
}

fn mismatch(expected: Tag, found: Tag) -> Error {
    Error::wrong_value_type(format!("list of {:?} cannot hold {:?}", expected, found))
}

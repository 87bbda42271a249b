// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to a named field of a structured value.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`FieldPath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x0E, 0xB3, 0x7F, 0x24, 0xD9, 0x46, 0xFD, 0x81, 0x5C, 0x10, 0xE6, 0x38, 0xA7, 0xCB, 0x02,
    0x94, 0x6D, 0x23, 0xF1, 0x87,
]);

/// Descriptor singleton for [`FieldPath`].
pub static CLASS: FieldClass = FieldClass;

/// A named field of the structured value addressed by the parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    pub parent: Box<Path>,
    pub name: String,
}

impl FieldPath {
    pub fn new(parent: Path, name: impl Into<String>) -> Self {
        Self {
            parent: Box::new(parent),
            name: name.into(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.parent, self.name)
    }
}

impl_binary_object!(FieldPath, CLASS);

pub struct FieldClass;

impl BinaryClass for FieldClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "FieldPath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(FieldPath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<FieldPath>(obj, "FieldPath")?;
        encoder.write_object(o.parent.unwrap())?;
        encoder.write_string(&o.name)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<FieldPath>(obj, "FieldPath")?;
        o.parent = Box::new(Path::wrap(decoder.read_object()?)?);
        o.name = decoder.read_string()?;
        Ok(())
    }
}

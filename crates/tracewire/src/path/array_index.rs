// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to one element of an array value.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`ArrayIndexPath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x79, 0x1D, 0xE4, 0x52, 0x0A, 0xBF, 0x36, 0xC7, 0x60, 0xFB, 0x15, 0x9E, 0x48, 0xD1, 0x83,
    0x2A, 0xB6, 0x07, 0xCD, 0x5F,
]);

/// Descriptor singleton for [`ArrayIndexPath`].
pub static CLASS: ArrayIndexClass = ArrayIndexClass;

/// One element of the array addressed by the parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayIndexPath {
    pub parent: Box<Path>,
    pub index: u64,
}

impl ArrayIndexPath {
    pub fn new(parent: Path, index: u64) -> Self {
        Self {
            parent: Box::new(parent),
            index,
        }
    }
}

impl fmt::Display for ArrayIndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.parent, self.index)
    }
}

impl_binary_object!(ArrayIndexPath, CLASS);

pub struct ArrayIndexClass;

impl BinaryClass for ArrayIndexClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "ArrayIndexPath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(ArrayIndexPath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<ArrayIndexPath>(obj, "ArrayIndexPath")?;
        encoder.write_object(o.parent.unwrap())?;
        encoder.write_u64(o.index)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<ArrayIndexPath>(obj, "ArrayIndexPath")?;
        o.parent = Box::new(Path::wrap(decoder.read_object()?)?);
        o.index = decoder.read_u64()?;
        Ok(())
    }
}

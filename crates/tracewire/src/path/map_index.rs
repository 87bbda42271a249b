// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to one entry of a map value.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`MapIndexPath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0xC3, 0x66, 0x1F, 0x98, 0x44, 0xED, 0x0C, 0x71, 0xAF, 0x25, 0xD8, 0x53, 0x3E, 0x92, 0xF6,
    0x0F, 0x7B, 0xE1, 0x4A, 0xB4,
]);

/// Descriptor singleton for [`MapIndexPath`].
pub static CLASS: MapIndexClass = MapIndexClass;

/// One entry of the map addressed by the parent, selected by string key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapIndexPath {
    pub parent: Box<Path>,
    pub key: String,
}

impl MapIndexPath {
    pub fn new(parent: Path, key: impl Into<String>) -> Self {
        Self {
            parent: Box::new(parent),
            key: key.into(),
        }
    }
}

impl fmt::Display for MapIndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[\"{}\"]", self.parent, self.key)
    }
}

impl_binary_object!(MapIndexPath, CLASS);

pub struct MapIndexClass;

impl BinaryClass for MapIndexClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "MapIndexPath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(MapIndexPath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<MapIndexPath>(obj, "MapIndexPath")?;
        encoder.write_object(o.parent.unwrap())?;
        encoder.write_string(&o.key)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<MapIndexPath>(obj, "MapIndexPath")?;
        o.parent = Box::new(Path::wrap(decoder.read_object()?)?);
        o.key = decoder.read_string()?;
        Ok(())
    }
}

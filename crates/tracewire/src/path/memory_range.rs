// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to a range of observed memory.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`MemoryRangePath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x31, 0xDC, 0x85, 0x5A, 0xF2, 0x08, 0xA9, 0x4B, 0x16, 0xE9, 0x62, 0xC0, 0x2D, 0x7E, 0xB1,
    0xD5, 0x43, 0x9F, 0x0A, 0x78,
]);

/// Descriptor singleton for [`MemoryRangePath`].
pub static CLASS: MemoryRangeClass = MemoryRangeClass;

/// `size` bytes of memory starting at `address`, as observed after the
/// parent command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryRangePath {
    pub after: Box<Path>,
    pub address: u64,
    pub size: u64,
}

impl MemoryRangePath {
    pub fn new(after: Path, address: u64, size: u64) -> Self {
        Self {
            after: Box::new(after),
            address,
            size,
        }
    }
}

impl fmt::Display for MemoryRangePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.Memory[{:#x}+{:#x}]", self.after, self.address, self.size)
    }
}

impl_binary_object!(MemoryRangePath, CLASS);

pub struct MemoryRangeClass;

impl BinaryClass for MemoryRangeClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "MemoryRangePath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(MemoryRangePath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<MemoryRangePath>(obj, "MemoryRangePath")?;
        encoder.write_object(o.after.unwrap())?;
        encoder.write_u64(o.address)?;
        encoder.write_u64(o.size)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<MemoryRangePath>(obj, "MemoryRangePath")?;
        o.after = Box::new(Path::wrap(decoder.read_object()?)?);
        o.address = decoder.read_u64()?;
        o.size = decoder.read_u64()?;
        Ok(())
    }
}

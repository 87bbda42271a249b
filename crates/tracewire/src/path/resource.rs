// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Root path naming a resource held by the remote service.

use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`ResourcePath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x8B, 0x17, 0x4A, 0xE2, 0x0D, 0x33, 0xC1, 0x58, 0x96, 0x6F, 0x04, 0xB9, 0xDD, 0x21, 0x7A,
    0x45, 0xE8, 0x90, 0x3C, 0x5B,
]);

/// Descriptor singleton for [`ResourcePath`].
pub static CLASS: ResourceClass = ResourceClass;

/// A named resource (texture, shader, capture file) on the server.
///
/// Root of a path tree: terminates the rendering and encoding recursion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourcePath {
    pub name: String,
}

impl ResourcePath {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl_binary_object!(ResourcePath, CLASS);

pub struct ResourceClass;

impl BinaryClass for ResourceClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "ResourcePath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(ResourcePath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<ResourcePath>(obj, "ResourcePath")?;
        encoder.write_string(&o.name)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<ResourcePath>(obj, "ResourcePath")?;
        o.name = decoder.read_string()?;
        Ok(())
    }
}

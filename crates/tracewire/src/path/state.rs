// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to the replay state after a command.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`StatePath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0xA4, 0x5E, 0x30, 0xF9, 0x17, 0xCC, 0x68, 0x03, 0x91, 0xDA, 0x2B, 0x76, 0xE0, 0x4F, 0x8D,
    0x1B, 0xC2, 0x55, 0xAE, 0x69,
]);

/// Descriptor singleton for [`StatePath`].
pub static CLASS: StateClass = StateClass;

/// The reconstructed API state immediately after the parent command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatePath {
    pub after: Box<Path>,
}

impl StatePath {
    pub fn new(after: Path) -> Self {
        Self {
            after: Box::new(after),
        }
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.State", self.after)
    }
}

impl_binary_object!(StatePath, CLASS);

pub struct StateClass;

impl BinaryClass for StateClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "StatePath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(StatePath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<StatePath>(obj, "StatePath")?;
        encoder.write_object(o.after.unwrap())
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<StatePath>(obj, "StatePath")?;
        o.after = Box::new(Path::wrap(decoder.read_object()?)?);
        Ok(())
    }
}

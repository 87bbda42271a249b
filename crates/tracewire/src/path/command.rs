// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to a single command in a command stream.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`CommandPath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x3F, 0xA1, 0xC8, 0x06, 0xEB, 0x59, 0x12, 0x7C, 0xD4, 0x28, 0xB0, 0x95, 0x4D, 0xE3, 0x6A,
    0xF7, 0x01, 0xBE, 0x82, 0x40,
]);

/// Descriptor singleton for [`CommandPath`].
pub static CLASS: CommandClass = CommandClass;

/// One command, by position in the parent command stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandPath {
    pub commands: Box<Path>,
    pub index: u64,
}

impl CommandPath {
    pub fn new(commands: Path, index: u64) -> Self {
        Self {
            commands: Box::new(commands),
            index,
        }
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.commands, self.index)
    }
}

impl_binary_object!(CommandPath, CLASS);

pub struct CommandClass;

impl BinaryClass for CommandClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "CommandPath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(CommandPath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<CommandPath>(obj, "CommandPath")?;
        encoder.write_object(o.commands.unwrap())?;
        encoder.write_u64(o.index)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<CommandPath>(obj, "CommandPath")?;
        o.commands = Box::new(Path::wrap(decoder.read_object()?)?);
        o.index = decoder.read_u64()?;
        Ok(())
    }
}

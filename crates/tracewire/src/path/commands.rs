// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to a capture's command stream.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`CommandsPath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x52, 0xE7, 0x09, 0xBD, 0x61, 0x88, 0x2E, 0xF0, 0x1A, 0xC5, 0x73, 0x4E, 0x99, 0x0B, 0xD6,
    0x27, 0x84, 0xFA, 0x35, 0x1C,
]);

/// Descriptor singleton for [`CommandsPath`].
pub static CLASS: CommandsClass = CommandsClass;

/// The ordered command stream recorded in the parent capture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandsPath {
    pub capture: Box<Path>,
}

impl CommandsPath {
    pub fn new(capture: Path) -> Self {
        Self {
            capture: Box::new(capture),
        }
    }
}

impl fmt::Display for CommandsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.Commands", self.capture)
    }
}

impl_binary_object!(CommandsPath, CLASS);

pub struct CommandsClass;

impl BinaryClass for CommandsClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "CommandsPath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(CommandsPath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<CommandsPath>(obj, "CommandsPath")?;
        encoder.write_object(o.capture.unwrap())
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<CommandsPath>(obj, "CommandsPath")?;
        o.capture = Box::new(Path::wrap(decoder.read_object()?)?);
        Ok(())
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to a scaled-down preview of another object.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`ThumbnailPath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0xCE, 0x00, 0x67, 0x7D, 0x48, 0xC9, 0xD0, 0x65, 0xE5, 0xDB, 0x9A, 0xFE, 0x70, 0x3D, 0x90,
    0xEF, 0x12, 0x19, 0x53, 0x71,
]);

/// Descriptor singleton for [`ThumbnailPath`].
pub static CLASS: ThumbnailClass = ThumbnailClass;

/// A preview of the object addressed by `object`, scaled to fit the desired
/// dimensions.
///
/// No bounds are enforced here: zero or `u32::MAX` dimensions are
/// structurally valid, and semantic limits belong to the resolving service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThumbnailPath {
    pub object: Box<Path>,
    pub desired_width: u32,
    pub desired_height: u32,
}

impl ThumbnailPath {
    pub fn new(object: Path, desired_width: u32, desired_height: u32) -> Self {
        Self {
            object: Box::new(object),
            desired_width,
            desired_height,
        }
    }
}

impl fmt::Display for ThumbnailPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.Thumbnail<{}x{}>",
            self.object, self.desired_width, self.desired_height
        )
    }
}

impl_binary_object!(ThumbnailPath, CLASS);

pub struct ThumbnailClass;

impl BinaryClass for ThumbnailClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "ThumbnailPath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(ThumbnailPath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<ThumbnailPath>(obj, "ThumbnailPath")?;
        encoder.write_object(o.object.unwrap())?;
        encoder.write_u32(o.desired_width)?;
        encoder.write_u32(o.desired_height)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<ThumbnailPath>(obj, "ThumbnailPath")?;
        o.object = Box::new(Path::wrap(decoder.read_object()?)?);
        o.desired_width = decoder.read_u32()?;
        o.desired_height = decoder.read_u32()?;
        Ok(())
    }
}

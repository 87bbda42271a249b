// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Image payloads returned by the resolving service.
//!
//! Not a path: [`ImageInfo`] travels through the same self-describing codec
//! as the reply to a thumbnail request, which keeps the object layer open to
//! types the path module knows nothing about.

use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};

/// Wire identity of [`ImageInfo`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x44, 0x9A, 0xF0, 0x6B, 0x2C, 0xE1, 0x57, 0x8E, 0x03, 0xBD, 0x72, 0x19, 0xC6, 0x50, 0xAF,
    0x3A, 0x95, 0xD4, 0x28, 0xE7,
]);

/// Descriptor singleton for [`ImageInfo`].
pub static CLASS: ImageInfoClass = ImageInfoClass;

/// A decoded image: pixel-format tag, dimensions, and raw pixel data.
///
/// The format tag is opaque at this layer; producers and consumers agree on
/// its values out of band.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageInfo {
    pub format: u32,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageInfo {
    pub fn new(format: u32, width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            format,
            width,
            height,
            data,
        }
    }
}

impl_binary_object!(ImageInfo, CLASS);

pub struct ImageInfoClass;

impl BinaryClass for ImageInfoClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "ImageInfo"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(ImageInfo::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<ImageInfo>(obj, "ImageInfo")?;
        encoder.write_u32(o.format)?;
        encoder.write_u32(o.width)?;
        encoder.write_u32(o.height)?;
        encoder.write_bytes(&o.data)
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<ImageInfo>(obj, "ImageInfo")?;
        o.format = decoder.read_u32()?;
        o.width = decoder.read_u32()?;
        o.height = decoder.read_u32()?;
        o.data = decoder.read_bytes()?;
        Ok(())
    }
}

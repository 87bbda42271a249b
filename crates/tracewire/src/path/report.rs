// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Path to a capture's diagnostic report.

use super::Path;
use crate::binary::object::impl_binary_object;
use crate::binary::{
    downcast_mut, downcast_ref, BinaryClass, BinaryObject, ClassId, Decoder, Encoder, WireResult,
};
use std::fmt;

/// Wire identity of [`ReportPath`].
pub const CLASS_ID: ClassId = ClassId::from_bytes([
    0x6A, 0x02, 0xBB, 0x47, 0x9C, 0xE5, 0x20, 0xD3, 0x7D, 0x34, 0x8F, 0xFC, 0x51, 0x1E, 0xA6,
    0x89, 0xCF, 0x64, 0x13, 0xEA,
]);

/// Descriptor singleton for [`ReportPath`].
pub static CLASS: ReportClass = ReportClass;

/// The issue report generated while replaying the parent capture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportPath {
    pub capture: Box<Path>,
}

impl ReportPath {
    pub fn new(capture: Path) -> Self {
        Self {
            capture: Box::new(capture),
        }
    }
}

impl fmt::Display for ReportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.Report", self.capture)
    }
}

impl_binary_object!(ReportPath, CLASS);

pub struct ReportClass;

impl BinaryClass for ReportClass {
    fn id(&self) -> ClassId {
        CLASS_ID
    }

    fn name(&self) -> &'static str {
        "ReportPath"
    }

    fn create(&self) -> Box<dyn BinaryObject> {
        Box::new(ReportPath::default())
    }

    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()> {
        let o = downcast_ref::<ReportPath>(obj, "ReportPath")?;
        encoder.write_object(o.capture.unwrap())
    }

    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()> {
        let o = downcast_mut::<ReportPath>(obj, "ReportPath")?;
        o.capture = Box::new(Path::wrap(decoder.read_object()?)?);
        Ok(())
    }
}

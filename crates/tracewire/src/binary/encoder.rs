// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Streaming encoder for the self-describing object format.
//!
//! All multi-byte values are little-endian. Strings and byte arrays carry a
//! u32 length prefix; objects carry their [`ClassId`] followed by fields in
//! declaration order, with no outer length framing.

use super::object::{BinaryClass, BinaryObject};
use super::{ClassId, WireError, WireResult};
use std::io::Write;

/// Generate write methods for primitive types.
///
/// Each generated method converts the value via `to_le_bytes()` and pushes
/// it to the underlying writer.
macro_rules! impl_write_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self, value: $type) -> WireResult<()> {
            self.writer.write_all(&value.to_le_bytes())?;
            Ok(())
        }
    };
}

/// Encoder over an arbitrary byte sink.
///
/// One encoder drives one stream; a single `write_object` call emits one
/// complete object tree top-down and may block on the underlying writer.
pub struct Encoder<'a> {
    writer: &'a mut dyn Write,
}

impl<'a> Encoder<'a> {
    pub fn new(writer: &'a mut dyn Write) -> Self {
        Self { writer }
    }

    // Generate primitive write methods via macro
    impl_write_le!(write_u8, u8);
    impl_write_le!(write_u16, u16);
    impl_write_le!(write_u32, u32);
    impl_write_le!(write_u64, u64);
    impl_write_le!(write_i32, i32);
    impl_write_le!(write_i64, i64);

    pub fn write_f32(&mut self, value: f32) -> WireResult<()> {
        self.write_u32(value.to_bits())
    }

    pub fn write_f64(&mut self, value: f64) -> WireResult<()> {
        self.write_u64(value.to_bits())
    }

    /// Write a u32 length prefix followed by the raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) -> WireResult<()> {
        let len = u32::try_from(data.len()).map_err(|_| WireError::SchemaMismatch {
            reason: format!("byte array length {} exceeds u32 range", data.len()),
        })?;
        self.write_u32(len)?;
        self.writer.write_all(data)?;
        Ok(())
    }

    /// Write a u32 length prefix followed by the string's UTF-8 bytes.
    pub fn write_string(&mut self, value: &str) -> WireResult<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Write the raw 20 id bytes, no length prefix.
    pub fn write_class_id(&mut self, id: &ClassId) -> WireResult<()> {
        self.writer.write_all(id.as_bytes())?;
        Ok(())
    }

    /// Write `obj` as a self-describing object: its [`ClassId`], then its
    /// fields via the type's own descriptor. Nested objects recurse through
    /// this same method against the same writer.
    pub fn write_object(&mut self, obj: &dyn BinaryObject) -> WireResult<()> {
        let class = obj.class();
        self.write_class_id(&class.id())?;
        class.encode(self, obj)
    }
}

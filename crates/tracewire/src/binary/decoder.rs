// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Streaming decoder for the self-describing object format.
//!
//! The decoder trusts each descriptor to consume exactly what its encode
//! routine produced; the only self-description in the stream is the leading
//! [`ClassId`] of each object. Truncation, invalid UTF-8, and nesting
//! overflow all surface as `SchemaMismatch`, never as a panic or a partial
//! object.

use super::class_id::CLASS_ID_SIZE;
use super::object::{BinaryClass, BinaryObject};
use super::registry::ClassRegistry;
use super::{ClassId, WireError, WireResult};
use std::io::{ErrorKind, Read};

/// Upper bound on nested-object recursion.
///
/// Well-formed path trees stay far below this; the bound exists so corrupt
/// input cannot drive the decoder's stack arbitrarily deep.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Generate read methods for primitive types.
///
/// Each generated method reads N bytes and converts via `from_le_bytes()`.
macro_rules! impl_read_le {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> WireResult<$type> {
            let mut bytes = [0u8; $size];
            self.fill(&mut bytes)?;
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Decoder over an arbitrary byte source, resolving class ids through the
/// given registry.
///
/// One decoder drives one stream; a single `read_object` call consumes one
/// complete object tree and may block on the underlying reader.
pub struct Decoder<'a> {
    reader: &'a mut dyn Read,
    registry: &'a ClassRegistry,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(reader: &'a mut dyn Read, registry: &'a ClassRegistry) -> Self {
        Self {
            reader,
            registry,
            depth: 0,
        }
    }

    /// Read exactly `buf.len()` bytes. A short stream is a layout
    /// disagreement (`SchemaMismatch`), not an I/O fault.
    fn fill(&mut self, buf: &mut [u8]) -> WireResult<()> {
        self.reader.read_exact(buf).map_err(|err| {
            if err.kind() == ErrorKind::UnexpectedEof {
                WireError::truncated()
            } else {
                WireError::Io(err)
            }
        })
    }

    // Generate primitive read methods via macro
    impl_read_le!(read_u8, u8, 1);
    impl_read_le!(read_u16, u16, 2);
    impl_read_le!(read_u32, u32, 4);
    impl_read_le!(read_u64, u64, 8);
    impl_read_le!(read_i32, i32, 4);
    impl_read_le!(read_i64, i64, 8);

    pub fn read_f32(&mut self) -> WireResult<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn read_f64(&mut self) -> WireResult<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read a u32 length prefix followed by that many raw bytes.
    ///
    /// The bytes are consumed through a bounded reader, so a corrupt length
    /// cannot force a huge upfront allocation; a short stream fails as
    /// truncation once the source runs dry.
    pub fn read_bytes(&mut self) -> WireResult<Vec<u8>> {
        let len = self.read_u32()? as usize;
        let mut data = Vec::new();
        Read::by_ref(&mut self.reader)
            .take(len as u64)
            .read_to_end(&mut data)
            .map_err(WireError::Io)?;
        if data.len() != len {
            return Err(WireError::truncated());
        }
        Ok(data)
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> WireResult<String> {
        let data = self.read_bytes()?;
        String::from_utf8(data).map_err(|_| WireError::SchemaMismatch {
            reason: "string field is not valid UTF-8".into(),
        })
    }

    /// Read the raw 20 id bytes.
    pub fn read_class_id(&mut self) -> WireResult<ClassId> {
        let mut bytes = [0u8; CLASS_ID_SIZE];
        self.fill(&mut bytes)?;
        Ok(ClassId::from_bytes(bytes))
    }

    /// Read one self-describing object: its [`ClassId`], a registry lookup,
    /// then the descriptor's decode routine against a fresh instance.
    ///
    /// Fails with `UnknownClass` if the id has no registry entry (the sole
    /// recovery point for version skew) and aborts the whole subtree on any
    /// field-level failure.
    pub fn read_object(&mut self) -> WireResult<Box<dyn BinaryObject>> {
        let id = self.read_class_id()?;
        let class = self.registry.lookup(&id)?;

        if self.depth >= MAX_NESTING_DEPTH {
            return Err(WireError::SchemaMismatch {
                reason: format!("object nesting exceeds {} levels", MAX_NESTING_DEPTH),
            });
        }
        self.depth += 1;
        let mut obj = class.create();
        let result = class.decode(self, &mut *obj);
        self.depth -= 1;
        result?;

        Ok(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::{Encoder, RegistryBuilder};

    fn empty_registry() -> ClassRegistry {
        RegistryBuilder::new().build()
    }

    #[test]
    fn test_decoder_primitives_roundtrip() {
        let mut buf = Vec::new();
        {
            let mut enc = Encoder::new(&mut buf);
            enc.write_u8(0x5A).expect("write u8");
            enc.write_u16(0xBEEF).expect("write u16");
            enc.write_u32(0xDEAD_BEEF).expect("write u32");
            enc.write_u64(u64::MAX).expect("write u64");
            enc.write_i64(i64::MIN).expect("write i64");
            enc.write_f64(6.25).expect("write f64");
        }

        let registry = empty_registry();
        let mut stream = buf.as_slice();
        let mut dec = Decoder::new(&mut stream, &registry);
        assert_eq!(dec.read_u8().expect("read u8"), 0x5A);
        assert_eq!(dec.read_u16().expect("read u16"), 0xBEEF);
        assert_eq!(dec.read_u32().expect("read u32"), 0xDEAD_BEEF);
        assert_eq!(dec.read_u64().expect("read u64"), u64::MAX);
        assert_eq!(dec.read_i64().expect("read i64"), i64::MIN);
        assert!((dec.read_f64().expect("read f64") - 6.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decoder_string_roundtrip() {
        let mut buf = Vec::new();
        Encoder::new(&mut buf)
            .write_string("trace/κόσμος")
            .expect("write string");

        let registry = empty_registry();
        let mut stream = buf.as_slice();
        let value = Decoder::new(&mut stream, &registry)
            .read_string()
            .expect("read string");
        assert_eq!(value, "trace/κόσμος");
    }

    #[test]
    fn test_decoder_truncated_primitive_is_schema_mismatch() {
        let buf = [0x01u8, 0x02];
        let registry = empty_registry();
        let mut stream = &buf[..];
        let err = Decoder::new(&mut stream, &registry).read_u32().unwrap_err();
        assert!(
            matches!(err, WireError::SchemaMismatch { .. }),
            "unexpected error {:?}",
            err
        );
    }

    #[test]
    fn test_decoder_truncated_bytes_is_schema_mismatch() {
        // Length prefix promises 16 bytes, stream carries 3.
        let buf = [16u8, 0, 0, 0, 0xAA, 0xBB, 0xCC];
        let registry = empty_registry();
        let mut stream = &buf[..];
        let err = Decoder::new(&mut stream, &registry)
            .read_bytes()
            .unwrap_err();
        assert!(
            matches!(err, WireError::SchemaMismatch { .. }),
            "unexpected error {:?}",
            err
        );
    }

    #[test]
    fn test_decoder_corrupt_length_does_not_allocate_blindly() {
        // Length prefix claims 2 GiB; the decoder must fail on the empty
        // remainder instead of reserving 2 GiB up front.
        let buf = [0x00u8, 0x00, 0x00, 0x80];
        let registry = empty_registry();
        let mut stream = &buf[..];
        let err = Decoder::new(&mut stream, &registry)
            .read_bytes()
            .unwrap_err();
        assert!(
            matches!(err, WireError::SchemaMismatch { .. }),
            "unexpected error {:?}",
            err
        );
    }

    #[test]
    fn test_decoder_invalid_utf8_is_schema_mismatch() {
        let buf = [2u8, 0, 0, 0, 0xFF, 0xFE];
        let registry = empty_registry();
        let mut stream = &buf[..];
        let err = Decoder::new(&mut stream, &registry)
            .read_string()
            .unwrap_err();
        match err {
            WireError::SchemaMismatch { reason } => {
                assert!(reason.contains("UTF-8"), "unexpected reason {}", reason);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_decoder_unknown_class() {
        let mut buf = Vec::new();
        Encoder::new(&mut buf)
            .write_class_id(&ClassId::from_bytes([0xEE; CLASS_ID_SIZE]))
            .expect("write id");

        let registry = empty_registry();
        let mut stream = buf.as_slice();
        let err = Decoder::new(&mut stream, &registry)
            .read_object()
            .unwrap_err();
        match err {
            WireError::UnknownClass(id) => {
                assert_eq!(id, ClassId::from_bytes([0xEE; CLASS_ID_SIZE]));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}

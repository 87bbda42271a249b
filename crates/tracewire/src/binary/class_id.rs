// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Fixed-length class fingerprints.

use std::fmt;

/// Number of bytes in a [`ClassId`].
pub const CLASS_ID_SIZE: usize = 20;

/// 20-byte content fingerprint identifying one concrete serializable type.
///
/// Fingerprints are computed by the schema tool from the type's declaration
/// and embedded as literal constants in generated code; two types with the
/// same id are, by construction, the same wire layout. Equality and hashing
/// are by byte content.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId([u8; CLASS_ID_SIZE]);

impl ClassId {
    /// Create from a raw 20-byte array.
    pub const fn from_bytes(bytes: [u8; CLASS_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw 20-byte array.
    pub const fn as_bytes(&self) -> &[u8; CLASS_ID_SIZE] {
        &self.0
    }

    /// All-zero id (testing/placeholder; never emitted by the schema tool).
    pub const fn zero() -> Self {
        Self([0u8; CLASS_ID_SIZE])
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId(")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<[u8; CLASS_ID_SIZE]> for ClassId {
    fn from(bytes: [u8; CLASS_ID_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for ClassId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

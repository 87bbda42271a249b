// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Self-describing binary object codec.
//!
//! Every encoded object starts with the [`ClassId`] of its concrete type,
//! followed by the type's fields in fixed declaration order. Decoding reads
//! the id, resolves a [`BinaryClass`] descriptor through the
//! [`ClassRegistry`], and lets the descriptor reconstruct the instance.
//! There is no per-object length framing: a descriptor must consume exactly
//! the bytes its encode routine produced.

pub mod class_id;
pub mod decoder;
pub mod encoder;
pub mod object;
pub mod registry;

pub use class_id::ClassId;
pub use decoder::{Decoder, MAX_NESTING_DEPTH};
pub use encoder::Encoder;
pub use object::{downcast_mut, downcast_ref, take, BinaryClass, BinaryObject};
pub use registry::{ClassRegistry, RegistryBuilder};

use std::fmt;
use std::io;

/// Errors surfaced by registration, encoding, and decoding.
#[derive(Debug)]
pub enum WireError {
    // ========================================================================
    // Registry errors
    // ========================================================================
    /// ClassId read from the stream has no registry entry; decode aborts
    /// with no partial object.
    UnknownClass(ClassId),
    /// Registration under an id that is already bound to another descriptor.
    DuplicateClass(ClassId),
    /// A process-wide registry has already been installed.
    RegistryInstalled,

    // ========================================================================
    // Decode errors
    // ========================================================================
    /// Stream layout disagrees with the descriptor (truncated stream,
    /// invalid UTF-8, nesting depth overflow, version skew).
    SchemaMismatch { reason: String },
    /// A decoded object is not of the type the caller required.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // ========================================================================
    // Transport errors
    // ========================================================================
    /// Underlying stream read/write failure, opaque to this layer.
    Io(io::Error),
}

impl WireError {
    /// Truncation shorthand used by the decoder's read helpers.
    pub(crate) fn truncated() -> Self {
        WireError::SchemaMismatch {
            reason: "unexpected end of stream".into(),
        }
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::UnknownClass(id) => write!(f, "unknown class id {}", id),
            WireError::DuplicateClass(id) => {
                write!(f, "class id {} is already registered", id)
            }
            WireError::RegistryInstalled => {
                write!(f, "a process-wide class registry is already installed")
            }
            WireError::SchemaMismatch { reason } => write!(f, "schema mismatch: {}", reason),
            WireError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            WireError::Io(err) => write!(f, "stream failure: {}", err),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WireError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for WireError {
    fn from(err: io::Error) -> Self {
        WireError::Io(err)
    }
}

pub type WireResult<T> = core::result::Result<T, WireError>;

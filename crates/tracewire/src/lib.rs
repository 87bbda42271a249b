// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! # tracewire - binary object codec and path addressing for remote trace inspection
//!
//! A client debugging a recorded trace names what it wants ("the 64×32
//! thumbnail of resource X") as a typed [`Path`] tree, serializes it with a
//! self-describing binary codec, and ships it to the server that resolves
//! it. This crate is the generic machinery: the codec, the class registry
//! that reconstructs concrete types from raw bytes, and the path
//! abstraction that composes into the codec via wrap/unwrap.
//!
//! ## Quick Start
//!
//! ```rust
//! use tracewire::{build_registry, Decoder, Encoder, Path};
//!
//! fn main() -> tracewire::Result<()> {
//!     // Build the class registry once, during startup.
//!     let registry = build_registry()?;
//!
//!     // Compose a path and render it for humans.
//!     let thumb = Path::resource("textures/grid").thumbnail(64, 32);
//!     assert_eq!(thumb.string_path(), "textures/grid.Thumbnail<64x32>");
//!
//!     // Encode: ClassId + fields, nested objects recurse.
//!     let mut wire = Vec::new();
//!     Encoder::new(&mut wire).write_object(thumb.unwrap())?;
//!
//!     // Decode on the far side and recover the typed tree.
//!     let mut stream = wire.as_slice();
//!     let obj = Decoder::new(&mut stream, &registry).read_object()?;
//!     assert_eq!(Path::wrap(obj)?, thumb);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ClassId`] | 20-byte fingerprint identifying one concrete wire type |
//! | [`ClassRegistry`] | Immutable ClassId → descriptor map, built at startup |
//! | [`Encoder`] / [`Decoder`] | Streaming codec over any `Write` / `Read` |
//! | [`Path`] | Tree-shaped address into remotely-held trace data |
//!
//! ## Modules Overview
//!
//! - [`binary`] - fingerprints, registry, object traits, and the codec
//! - [`path`] - the path tree and its concrete variants
//! - [`image`] - non-path reply payload carried over the same codec
//!
//! The wire format carries no per-object length framing: each descriptor
//! must consume exactly the bytes it produced, and the leading [`ClassId`]
//! is the only thing pinning a byte layout. Decoders meeting an unknown id
//! fail cleanly with `UnknownClass`; that lookup is the single recovery
//! point for version skew between peers.

pub mod binary;
pub mod image;
pub mod path;

pub use binary::{
    BinaryClass, BinaryObject, ClassId, ClassRegistry, Decoder, Encoder, RegistryBuilder,
    WireError,
};
pub use path::Path;

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, WireError>;

/// Build a registry holding every class this crate ships: all path variants
/// plus [`image::ImageInfo`].
///
/// Call once during startup, before any decode activity; pass the result to
/// decoders directly or publish it with [`ClassRegistry::install`].
pub fn build_registry() -> Result<ClassRegistry> {
    let mut builder = RegistryBuilder::new();
    path::register_paths(&mut builder)?;
    builder.register(&image::CLASS)?;
    Ok(builder.build())
}

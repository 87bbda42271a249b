// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Tree-shaped addresses into remotely-held trace data.
//!
//! A [`Path`] names a value on the server side without fetching it: every
//! non-root variant owns exactly one parent path plus its own
//! discriminating fields, so a tree like
//! `resource("tex").thumbnail(64, 32)` reads bottom-up as "the 64×32
//! thumbnail of resource tex". Trees are acyclic by construction: each
//! node is built from an already-constructed parent.
//!
//! Paths cross the wire through the [`binary`](crate::binary) codec:
//! [`Path::unwrap`] exposes a node as a generic [`BinaryObject`] for
//! encoding, and [`Path::wrap`] recovers the strongly-typed tree from a
//! freshly decoded object, failing with `TypeMismatch` for objects that are
//! not path variants.

pub mod array_index;
pub mod command;
pub mod commands;
pub mod field;
pub mod map_index;
pub mod memory_range;
pub mod report;
pub mod resource;
pub mod state;
pub mod thumbnail;

pub use array_index::ArrayIndexPath;
pub use command::CommandPath;
pub use commands::CommandsPath;
pub use field::FieldPath;
pub use map_index::MapIndexPath;
pub use memory_range::MemoryRangePath;
pub use report::ReportPath;
pub use resource::ResourcePath;
pub use state::StatePath;
pub use thumbnail::ThumbnailPath;

use crate::binary::{take, BinaryClass, BinaryObject, RegistryBuilder, WireError, WireResult};
use std::fmt;

/// Closed set of path variants understood by this process.
///
/// The closed enum replaces the unchecked downcast the original service
/// performed when recovering a decoded path: [`Path::wrap`] returns a typed
/// result instead of casting blindly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    Resource(ResourcePath),
    Thumbnail(ThumbnailPath),
    Commands(CommandsPath),
    Command(CommandPath),
    State(StatePath),
    Field(FieldPath),
    ArrayIndex(ArrayIndexPath),
    MapIndex(MapIndexPath),
    MemoryRange(MemoryRangePath),
    Report(ReportPath),
}

impl Path {
    /// Root path naming a resource held by the remote service.
    pub fn resource(name: impl Into<String>) -> Path {
        Path::Resource(ResourcePath::new(name))
    }

    /// The scaled-down preview of the object this path addresses.
    pub fn thumbnail(self, desired_width: u32, desired_height: u32) -> Path {
        Path::Thumbnail(ThumbnailPath::new(self, desired_width, desired_height))
    }

    /// The command stream of the capture this path addresses.
    pub fn commands(self) -> Path {
        Path::Commands(CommandsPath::new(self))
    }

    /// A single command by position in the parent command stream.
    pub fn command(self, index: u64) -> Path {
        Path::Command(CommandPath::new(self, index))
    }

    /// The replay state immediately after this path's command.
    pub fn state(self) -> Path {
        Path::State(StatePath::new(self))
    }

    /// A named field of the structured value this path addresses.
    pub fn field(self, name: impl Into<String>) -> Path {
        Path::Field(FieldPath::new(self, name))
    }

    /// An element of the array this path addresses.
    pub fn array_index(self, index: u64) -> Path {
        Path::ArrayIndex(ArrayIndexPath::new(self, index))
    }

    /// An entry of the map this path addresses.
    pub fn map_index(self, key: impl Into<String>) -> Path {
        Path::MapIndex(MapIndexPath::new(self, key))
    }

    /// A range of observed memory after this path's command.
    pub fn memory_range(self, address: u64, size: u64) -> Path {
        Path::MemoryRange(MemoryRangePath::new(self, address, size))
    }

    /// The diagnostic report for the capture this path addresses.
    pub fn report(self) -> Path {
        Path::Report(ReportPath::new(self))
    }

    /// Human-readable rendering: the parent's rendering with this node's
    /// segment appended. Purely recursive, total for any well-formed tree.
    pub fn string_path(&self) -> String {
        self.to_string()
    }

    /// Expose this node's encodable representation to the codec.
    pub fn unwrap(&self) -> &dyn BinaryObject {
        match self {
            Path::Resource(p) => p,
            Path::Thumbnail(p) => p,
            Path::Commands(p) => p,
            Path::Command(p) => p,
            Path::State(p) => p,
            Path::Field(p) => p,
            Path::ArrayIndex(p) => p,
            Path::MapIndex(p) => p,
            Path::MemoryRange(p) => p,
            Path::Report(p) => p,
        }
    }

    /// Recover a strongly-typed path from a freshly decoded object.
    ///
    /// Fails with `TypeMismatch` if the object's class is not one of the
    /// known path variants; no unchecked cast is performed.
    pub fn wrap(obj: Box<dyn BinaryObject>) -> WireResult<Path> {
        match obj.class().id() {
            resource::CLASS_ID => Ok(Path::Resource(take(obj, "ResourcePath")?)),
            thumbnail::CLASS_ID => Ok(Path::Thumbnail(take(obj, "ThumbnailPath")?)),
            commands::CLASS_ID => Ok(Path::Commands(take(obj, "CommandsPath")?)),
            command::CLASS_ID => Ok(Path::Command(take(obj, "CommandPath")?)),
            state::CLASS_ID => Ok(Path::State(take(obj, "StatePath")?)),
            field::CLASS_ID => Ok(Path::Field(take(obj, "FieldPath")?)),
            array_index::CLASS_ID => Ok(Path::ArrayIndex(take(obj, "ArrayIndexPath")?)),
            map_index::CLASS_ID => Ok(Path::MapIndex(take(obj, "MapIndexPath")?)),
            memory_range::CLASS_ID => Ok(Path::MemoryRange(take(obj, "MemoryRangePath")?)),
            report::CLASS_ID => Ok(Path::Report(take(obj, "ReportPath")?)),
            _ => Err(WireError::TypeMismatch {
                expected: "a path variant",
                found: obj.class().name(),
            }),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Resource(p) => fmt::Display::fmt(p, f),
            Path::Thumbnail(p) => fmt::Display::fmt(p, f),
            Path::Commands(p) => fmt::Display::fmt(p, f),
            Path::Command(p) => fmt::Display::fmt(p, f),
            Path::State(p) => fmt::Display::fmt(p, f),
            Path::Field(p) => fmt::Display::fmt(p, f),
            Path::ArrayIndex(p) => fmt::Display::fmt(p, f),
            Path::MapIndex(p) => fmt::Display::fmt(p, f),
            Path::MemoryRange(p) => fmt::Display::fmt(p, f),
            Path::Report(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// The decoder's `create()` needs some default instance to fill; an unnamed
/// resource root is the cheapest well-formed tree.
impl Default for Path {
    fn default() -> Self {
        Path::Resource(ResourcePath::default())
    }
}

/// Contribute every path variant's descriptor to `builder`.
///
/// Called from [`build_registry`](crate::build_registry) during startup;
/// callers assembling their own registry can use it directly.
pub fn register_paths(builder: &mut RegistryBuilder) -> WireResult<()> {
    builder.register(&resource::CLASS)?;
    builder.register(&thumbnail::CLASS)?;
    builder.register(&commands::CLASS)?;
    builder.register(&command::CLASS)?;
    builder.register(&state::CLASS)?;
    builder.register(&field::CLASS)?;
    builder.register(&array_index::CLASS)?;
    builder.register(&map_index::CLASS)?;
    builder.register(&memory_range::CLASS)?;
    builder.register(&report::CLASS)?;
    Ok(())
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Class registry: the decode-time map from [`ClassId`] to descriptor.
//!
//! Registration happens through an explicit [`RegistryBuilder`] during a
//! single-threaded startup phase; the built [`ClassRegistry`] is immutable
//! and safe to read from any thread without locking. An optional
//! process-wide instance can be installed exactly once.

use super::object::BinaryClass;
use super::{ClassId, WireError, WireResult};
use std::collections::HashMap;
use std::sync::OnceLock;

static GLOBAL: OnceLock<ClassRegistry> = OnceLock::new();

/// Accumulates class descriptors before any decode activity begins.
///
/// Each concrete type contributes its descriptor once; a second
/// registration under the same id is a startup error, never a silent
/// overwrite.
#[derive(Default)]
pub struct RegistryBuilder {
    classes: HashMap<ClassId, &'static dyn BinaryClass>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `class` under its own id.
    ///
    /// Fails with `DuplicateClass` if the id is already bound: collisions
    /// must surface at startup, not as misdecoded bytes later.
    pub fn register(&mut self, class: &'static dyn BinaryClass) -> WireResult<()> {
        let id = class.id();
        if self.classes.contains_key(&id) {
            return Err(WireError::DuplicateClass(id));
        }
        log::debug!("registry: registered class '{}' ({})", class.name(), id);
        self.classes.insert(id, class);
        Ok(())
    }

    /// Freeze the accumulated descriptors into an immutable registry.
    pub fn build(self) -> ClassRegistry {
        log::debug!("registry: built with {} classes", self.classes.len());
        ClassRegistry {
            classes: self.classes,
        }
    }
}

/// Immutable map from [`ClassId`] to class descriptor.
///
/// Used only during decode; lookups are lock-free.
#[derive(Debug)]
pub struct ClassRegistry {
    classes: HashMap<ClassId, &'static dyn BinaryClass>,
}

impl ClassRegistry {
    /// Resolve `id` to the descriptor it was registered with.
    ///
    /// This is the sole recovery point for version skew: an id from a newer
    /// schema fails here with `UnknownClass` instead of misinterpreting the
    /// bytes that follow.
    pub fn lookup(&self, id: &ClassId) -> WireResult<&'static dyn BinaryClass> {
        self.classes
            .get(id)
            .copied()
            .ok_or(WireError::UnknownClass(*id))
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if no classes are registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Publish this registry process-wide.
    ///
    /// Write-once: a second install fails with `RegistryInstalled` rather
    /// than racing or replacing the first. Reads through [`global`] are
    /// lock-free afterwards.
    ///
    /// [`global`]: ClassRegistry::global
    pub fn install(self) -> WireResult<&'static ClassRegistry> {
        let mut fresh = false;
        let installed = GLOBAL.get_or_init(|| {
            fresh = true;
            self
        });
        if !fresh {
            return Err(WireError::RegistryInstalled);
        }
        log::debug!(
            "registry: installed process-wide with {} classes",
            installed.len()
        );
        Ok(installed)
    }

    /// The process-wide registry, if one has been installed.
    pub fn global() -> Option<&'static ClassRegistry> {
        GLOBAL.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::thumbnail;

    #[test]
    fn test_registry_lookup_returns_registered_descriptor() {
        let mut builder = RegistryBuilder::new();
        builder.register(&thumbnail::CLASS).expect("first registration");
        let registry = builder.build();

        let class = registry
            .lookup(&thumbnail::CLASS_ID)
            .expect("id was registered");
        assert_eq!(class.id(), thumbnail::CLASS_ID);
        // The exact descriptor instance, not a copy.
        let got = (class as *const dyn BinaryClass).cast::<()>();
        let want = (&thumbnail::CLASS as *const thumbnail::ThumbnailClass).cast::<()>();
        assert_eq!(got, want);
    }

    #[test]
    fn test_registry_duplicate_registration_fails() {
        let mut builder = RegistryBuilder::new();
        builder.register(&thumbnail::CLASS).expect("first registration");
        let err = builder.register(&thumbnail::CLASS).unwrap_err();
        match err {
            WireError::DuplicateClass(id) => assert_eq!(id, thumbnail::CLASS_ID),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_registry_lookup_unknown_id_fails() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        let err = registry.lookup(&ClassId::zero()).unwrap_err();
        match err {
            WireError::UnknownClass(id) => assert_eq!(id, ClassId::zero()),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_registry_install_is_write_once() {
        let first = crate::build_registry().expect("build registry");
        let expected_len = first.len();
        let installed = first.install().expect("first install");
        assert_eq!(installed.len(), expected_len);
        assert!(ClassRegistry::global().is_some());

        let second = crate::build_registry().expect("build registry");
        let err = second.install().unwrap_err();
        assert!(
            matches!(err, WireError::RegistryInstalled),
            "unexpected error {:?}",
            err
        );
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Object and class-descriptor traits.
//!
//! [`BinaryObject`] is the only structural requirement the codec places on
//! a type; [`BinaryClass`] is the per-type capability set the registry hands
//! out during decode. Generated variants implement both mechanically.

use super::decoder::Decoder;
use super::encoder::Encoder;
use super::{ClassId, WireError, WireResult};
use std::any::Any;
use std::fmt;

/// A value the codec can write as a self-describing object.
///
/// Implementors expose their class descriptor plus `Any` accessors so a
/// freshly decoded instance can be recovered as its concrete type without
/// an unchecked cast.
pub trait BinaryObject: Any + fmt::Debug {
    /// The descriptor for this value's concrete type.
    fn class(&self) -> &'static dyn BinaryClass;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Capability set for one concrete type: identify, instantiate, encode,
/// decode. Exactly one instance exists per type, registered once at startup.
pub trait BinaryClass: Sync {
    /// The type's wire fingerprint.
    fn id(&self) -> ClassId;

    /// Human-readable type name, used in diagnostics only.
    fn name(&self) -> &'static str;

    /// Create a default-initialized instance for the decoder to fill.
    fn create(&self) -> Box<dyn BinaryObject>;

    /// Write `obj`'s fields in declaration order. The leading [`ClassId`]
    /// has already been written by [`Encoder::write_object`].
    fn encode(&self, encoder: &mut Encoder<'_>, obj: &dyn BinaryObject) -> WireResult<()>;

    /// Fill `obj` from the stream, consuming fields in exactly the order
    /// `encode` wrote them.
    fn decode(&self, decoder: &mut Decoder<'_>, obj: &mut dyn BinaryObject) -> WireResult<()>;
}

impl fmt::Debug for dyn BinaryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryClass")
            .field("name", &self.name())
            .field("id", &self.id())
            .finish()
    }
}

/// Generate the mechanical [`BinaryObject`] impl for a concrete type.
///
/// `$class` names the type's descriptor singleton.
macro_rules! impl_binary_object {
    ($type:ident, $class:expr) => {
        impl crate::binary::BinaryObject for $type {
            fn class(&self) -> &'static dyn crate::binary::BinaryClass {
                &$class
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }
    };
}
pub(crate) use impl_binary_object;

/// Borrow `obj` as concrete type `T`, or fail with `TypeMismatch`.
pub fn downcast_ref<'a, T: BinaryObject>(
    obj: &'a dyn BinaryObject,
    expected: &'static str,
) -> WireResult<&'a T> {
    let found = obj.class().name();
    obj.as_any()
        .downcast_ref::<T>()
        .ok_or(WireError::TypeMismatch { expected, found })
}

/// Mutably borrow `obj` as concrete type `T`, or fail with `TypeMismatch`.
pub fn downcast_mut<'a, T: BinaryObject>(
    obj: &'a mut dyn BinaryObject,
    expected: &'static str,
) -> WireResult<&'a mut T> {
    let found = obj.class().name();
    obj.as_any_mut()
        .downcast_mut::<T>()
        .ok_or(WireError::TypeMismatch { expected, found })
}

/// Take ownership of `obj` as concrete type `T`, or fail with `TypeMismatch`.
pub fn take<T: BinaryObject>(
    obj: Box<dyn BinaryObject>,
    expected: &'static str,
) -> WireResult<T> {
    let found = obj.class().name();
    obj.into_any()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| WireError::TypeMismatch { expected, found })
}

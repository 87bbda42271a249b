// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Round-trip law: decode(encode(P)) is structurally equal to P.

use tracewire::{build_registry, ClassRegistry, Decoder, Encoder, Path, WireError};

fn roundtrip(registry: &ClassRegistry, path: &Path) -> Path {
    let mut wire = Vec::new();
    Encoder::new(&mut wire)
        .write_object(path.unwrap())
        .expect("encode path");

    let mut stream = wire.as_slice();
    let obj = Decoder::new(&mut stream, registry)
        .read_object()
        .expect("decode path");
    assert!(
        stream.is_empty(),
        "decode of {} left {} trailing bytes",
        path,
        stream.len()
    );
    Path::wrap(obj).expect("wrap decoded path")
}

/// Grow `root` by one randomly chosen non-root segment.
fn extend_random(rng: &mut fastrand::Rng, path: Path) -> Path {
    match rng.u32(0..9) {
        0 => path.thumbnail(rng.u32(..), rng.u32(..)),
        1 => path.commands(),
        2 => path.command(rng.u64(..)),
        3 => path.state(),
        4 => path.field(format!("field_{}", rng.u16(..))),
        5 => path.array_index(rng.u64(..)),
        6 => path.map_index(format!("key_{}", rng.u16(..))),
        7 => path.memory_range(rng.u64(..), rng.u64(..)),
        _ => path.report(),
    }
}

#[test]
fn roundtrip_thumbnail_of_named_resource() {
    let registry = build_registry().expect("build registry");

    let root = Path::resource("foo");
    let thumb = root.thumbnail(64, 32);
    assert_eq!(thumb.string_path(), "foo.Thumbnail<64x32>");
    assert_eq!(roundtrip(&registry, &thumb), thumb);
}

#[test]
fn roundtrip_boundary_dimensions() {
    let registry = build_registry().expect("build registry");

    for (w, h) in [(0, 0), (u32::MAX, u32::MAX), (0, u32::MAX), (1, u32::MAX)] {
        let thumb = Path::resource("boundary").thumbnail(w, h);
        assert_eq!(roundtrip(&registry, &thumb), thumb, "{}x{}", w, h);
    }
}

#[test]
fn roundtrip_random_trees() {
    let registry = build_registry().expect("build registry");
    let mut rng = fastrand::Rng::with_seed(0x5EED_CAFE);

    for _ in 0..200 {
        let mut path = Path::resource(format!("res_{}", rng.u16(..)));
        for _ in 0..rng.usize(0..12) {
            path = extend_random(&mut rng, path);
        }
        assert_eq!(roundtrip(&registry, &path), path, "path {}", path);
    }
}

#[test]
fn roundtrip_rejects_overdeep_nesting() {
    let registry = build_registry().expect("build registry");

    // Encoding is driven by the caller's own tree and has no depth limit;
    // decode refuses to recurse past the guard.
    let mut path = Path::resource("deep");
    for _ in 0..tracewire::binary::MAX_NESTING_DEPTH + 8 {
        path = path.state();
    }

    let mut wire = Vec::new();
    Encoder::new(&mut wire)
        .write_object(path.unwrap())
        .expect("encode deep path");

    let mut stream = wire.as_slice();
    let err = Decoder::new(&mut stream, &registry)
        .read_object()
        .unwrap_err();
    match err {
        WireError::SchemaMismatch { reason } => {
            assert!(reason.contains("nesting"), "unexpected reason {}", reason);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn roundtrip_decode_within_depth_guard() {
    let registry = build_registry().expect("build registry");

    let mut path = Path::resource("deep");
    for _ in 0..tracewire::binary::MAX_NESTING_DEPTH - 1 {
        path = path.state();
    }
    assert_eq!(roundtrip(&registry, &path), path);
}

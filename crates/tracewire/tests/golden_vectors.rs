// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 tracewire contributors

//! Golden wire vectors.
//!
//! These byte sequences are part of the deployed protocol: peers in the
//! field hold the same fingerprints and field layouts, so any change that
//! shifts a byte here is a wire break, not a refactor.

use tracewire::{build_registry, image, path, Decoder, Encoder, Path, WireError};

/// Encode one object tree to a fresh buffer.
fn encode(path: &Path) -> Vec<u8> {
    let mut wire = Vec::new();
    Encoder::new(&mut wire)
        .write_object(path.unwrap())
        .expect("encode path");
    wire
}

#[test]
fn golden_thumbnail_over_resource() {
    let thumb = Path::resource("foo").thumbnail(64, 32);
    let wire = encode(&thumb);

    let mut expected = Vec::new();
    expected.extend_from_slice(path::thumbnail::CLASS_ID.as_bytes());
    expected.extend_from_slice(path::resource::CLASS_ID.as_bytes());
    expected.extend_from_slice(&[3, 0, 0, 0]); // name length
    expected.extend_from_slice(b"foo");
    expected.extend_from_slice(&[64, 0, 0, 0]); // desired width
    expected.extend_from_slice(&[32, 0, 0, 0]); // desired height
    assert_eq!(wire, expected);
}

#[test]
fn golden_thumbnail_class_id_bytes() {
    // Fingerprint shared with the original schema; pinned byte-for-byte.
    assert_eq!(
        path::thumbnail::CLASS_ID.as_bytes(),
        &[
            0xCE, 0x00, 0x67, 0x7D, 0x48, 0xC9, 0xD0, 0x65, 0xE5, 0xDB, 0x9A, 0xFE, 0x70, 0x3D,
            0x90, 0xEF, 0x12, 0x19, 0x53, 0x71,
        ]
    );
}

#[test]
fn golden_image_info() {
    let registry = build_registry().expect("build registry");
    let image = image::ImageInfo::new(1, 2, 2, vec![0xAA, 0xBB, 0xCC, 0xDD]);

    let mut wire = Vec::new();
    Encoder::new(&mut wire)
        .write_object(&image)
        .expect("encode image");

    let mut expected = Vec::new();
    expected.extend_from_slice(image::CLASS_ID.as_bytes());
    expected.extend_from_slice(&[1, 0, 0, 0]); // format
    expected.extend_from_slice(&[2, 0, 0, 0]); // width
    expected.extend_from_slice(&[2, 0, 0, 0]); // height
    expected.extend_from_slice(&[4, 0, 0, 0]); // data length
    expected.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
    assert_eq!(wire, expected);

    // And the vector decodes back to the same value.
    let mut stream = wire.as_slice();
    let obj = Decoder::new(&mut stream, &registry)
        .read_object()
        .expect("decode image");
    let back = tracewire::binary::take::<image::ImageInfo>(obj, "ImageInfo").expect("image");
    assert_eq!(back, image);
}

#[test]
fn golden_truncation_at_every_boundary_is_schema_mismatch() {
    let registry = build_registry().expect("build registry");
    let wire = encode(&Path::resource("foo").thumbnail(64, 32));

    for len in 0..wire.len() {
        let mut stream = &wire[..len];
        let err = Decoder::new(&mut stream, &registry)
            .read_object()
            .unwrap_err();
        assert!(
            matches!(err, WireError::SchemaMismatch { .. }),
            "truncation at {} bytes gave {:?}",
            len,
            err
        );
    }
}

#[test]
fn golden_unknown_leading_class_id_fails_with_unknown_class_only() {
    let registry = build_registry().expect("build registry");
    let mut wire = encode(&Path::resource("foo").thumbnail(64, 32));
    // Flip one byte of the leading fingerprint.
    wire[0] ^= 0xFF;

    let mut stream = wire.as_slice();
    let err = Decoder::new(&mut stream, &registry)
        .read_object()
        .unwrap_err();
    match err {
        WireError::UnknownClass(id) => {
            let mut expected = *path::thumbnail::CLASS_ID.as_bytes();
            expected[0] ^= 0xFF;
            assert_eq!(id.as_bytes(), &expected);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

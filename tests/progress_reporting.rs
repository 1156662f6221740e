// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Progress reporting across codec operations.
//!
//! Progress state is global and shared by every operation, so all assertions
//! on `progress::get()` live in this single test in its own binary — nothing
//! else writes to the counters while it runs.

use stegpix_core::{progress, Payload, PixelGrid, StegoCodec, DECODE_STEPS, ENCODE_STEPS};

#[test]
fn every_phase_reports_its_steps() {
    let mut codec = StegoCodec::new(PixelGrid::new(12, 10).unwrap());

    codec.encode(&Payload::new("p.bin", vec![7; 16])).unwrap();
    assert_eq!(progress::get(), (ENCODE_STEPS, ENCODE_STEPS));

    assert_eq!(codec.decode(), Payload::new("p.bin", vec![7; 16]));
    assert_eq!(progress::get(), (DECODE_STEPS, DECODE_STEPS));

    // Flattened export advances once per pixel row: a 12x10 carrier ends at
    // 10 of 10 rows.
    let _ = codec.export_carrier(false);
    assert_eq!(progress::get(), (10, 10));

    // The alpha-preserving export is a plain copy and reports nothing.
    progress::init(3);
    let _ = codec.export_carrier(true);
    assert_eq!(progress::get(), (0, 3));

    // advance() saturates at the configured total.
    progress::init(2);
    progress::advance();
    progress::advance();
    progress::advance();
    assert_eq!(progress::get(), (2, 2));
    progress::finish();
    assert_eq!(progress::get(), (2, 2));
}

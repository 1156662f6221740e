// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Round-trip integration tests for the full encode/decode pipeline.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use stegpix_core::{Payload, PixelGrid, StegoCodec};

/// A 50×50 carrier with pseudo-random pixel content (deterministic seed),
/// LSBs cleared so the carrier starts virgin.
fn noisy_carrier_50x50(seed: u64) -> PixelGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data: Vec<u32> = (0..50 * 50)
        .map(|_| {
            let px: u32 = rng.gen();
            // Clear the three color-channel LSBs; keep alpha arbitrary.
            px & !0x0001_0101
        })
        .collect();
    PixelGrid::from_argb(50, 50, data).unwrap()
}

#[test]
fn end_to_end_50x50() {
    let mut codec = StegoCodec::new(noisy_carrier_50x50(1));

    // 50*50*3/8 = 937 raw bytes, 933 framed, 932 usable.
    assert_eq!(codec.capacity(), 932);

    let payload = Payload::new("a.txt", b"hello".to_vec());
    codec.encode(&payload).unwrap();
    assert_eq!(codec.decode(), payload);

    // Capacity depends only on geometry, not on content.
    assert_eq!(codec.capacity(), 932);
}

#[test]
fn virgin_noisy_carrier_decodes_empty() {
    // LSBs are all cleared, so the length header reads as zero.
    let codec = StegoCodec::new(noisy_carrier_50x50(2));
    assert!(codec.decode().is_empty());
}

#[test]
fn random_payload_roundtrips() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut codec = StegoCodec::new(noisy_carrier_50x50(3));

    for len in [1usize, 17, 256, 900] {
        let content: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let payload = Payload::new("blob.bin", content);
        codec.encode(&payload).unwrap();
        assert_eq!(codec.decode(), payload, "round-trip failed for {len} content bytes");
    }
}

#[test]
fn boundary_payload_sizes() {
    let mut codec = StegoCodec::new(noisy_carrier_50x50(4));
    let capacity = codec.capacity();

    // Exactly capacity bytes (empty name, so content is capacity - 1).
    let fits = Payload::new("", vec![0xA5; capacity - 1]);
    codec.encode(&fits).unwrap();
    assert_eq!(codec.decode(), fits);

    // One byte more fails and leaves the carrier pixel-for-pixel intact.
    let before = codec.export_carrier(true);
    assert!(codec.encode(&Payload::new("", vec![0xA5; capacity])).is_err());
    assert_eq!(codec.export_carrier(true), before);
    assert_eq!(codec.decode(), fits, "failed encode must not disturb the embedded payload");
}

#[test]
fn reencode_replaces_payload() {
    let mut codec = StegoCodec::new(noisy_carrier_50x50(5));

    codec.encode(&Payload::new("first.dat", vec![1; 400])).unwrap();
    codec.encode(&Payload::new("second.dat", vec![2; 40])).unwrap();
    assert_eq!(codec.decode(), Payload::new("second.dat", vec![2; 40]));
}

#[test]
fn nameless_and_empty_content_payloads() {
    let mut codec = StegoCodec::new(noisy_carrier_50x50(6));

    let nameless = Payload::new("", b"content only".to_vec());
    codec.encode(&nameless).unwrap();
    assert_eq!(codec.decode(), nameless);

    let contentless = Payload::new("empty.bin", vec![]);
    codec.encode(&contentless).unwrap();
    let decoded = codec.decode();
    assert_eq!(decoded, contentless);
    assert!(!decoded.is_empty(), "zero-length content is still a present payload");
}

#[test]
fn carrier_noise_survives_outside_payload_bits() {
    // Encoding must only ever flip channel LSBs; all upper bits of the
    // noisy carrier stay exactly as loaded.
    let grid = noisy_carrier_50x50(7);
    let mut codec = StegoCodec::new(grid.clone());
    codec.encode(&Payload::new("n", vec![0xFF; 100])).unwrap();

    let after = codec.export_carrier(true);
    for y in 0..50 {
        for x in 0..50 {
            assert_eq!(
                grid.pixel(x, y) & !0x0001_0101,
                after.pixel(x, y) & !0x0001_0101,
                "non-LSB bits changed at ({x}, {y})"
            );
        }
    }
}

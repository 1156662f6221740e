// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! # stegpix-core
//!
//! Pure-Rust LSB steganography engine for hiding an arbitrary binary payload
//! (optionally tagged with a file name) in the least-significant bits of an
//! image's color channels, and recovering it losslessly later.
//!
//! The engine operates on a decoded [`PixelGrid`] (ARGB, 8 bits per channel).
//! Image container decoding/encoding and any user-facing surface are the
//! caller's job; the core exposes only capacity, encode, decode, and an
//! alpha-safe export transform.
//!
//! Layering, leaves first:
//!
//! - [`stego::bits`] — raw bit addressing over pixel color-channel LSBs
//! - [`stego::frame`] — 4-byte little-endian length framing
//! - [`stego::payload`] — `name ++ 0x00 ++ content` packaging
//! - [`stego::pipeline`] — the [`StegoCodec`] orchestrator
//!
//! # Quick start
//!
//! ```rust
//! use stegpix_core::{Payload, PixelGrid, StegoCodec};
//!
//! let grid = PixelGrid::new(50, 50).unwrap();
//! let mut codec = StegoCodec::new(grid);
//!
//! let payload = Payload::new("hello.txt", b"hello, steganography".to_vec());
//! codec.encode(&payload).unwrap();
//!
//! match codec.decode() {
//!     Payload::Present { name, content } => {
//!         assert_eq!(name, "hello.txt");
//!         assert_eq!(content, b"hello, steganography");
//!     }
//!     Payload::Empty => unreachable!("we just encoded"),
//! }
//! ```

pub mod pixel;
pub mod progress;
pub mod stego;

pub use pixel::error::PixelError;
pub use pixel::PixelGrid;
pub use stego::error::StegoError;
pub use stego::payload::{pack_payload, required_space, unpack_payload, Payload, PACK_OVERHEAD};
pub use stego::pipeline::{StegoCodec, DECODE_STEPS, ENCODE_STEPS};

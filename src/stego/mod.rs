// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Steganographic encoding and decoding.
//!
//! Three layers composed by the [`pipeline`] orchestrator:
//!
//! - [`bits`] maps payload bits onto pixel color-channel LSBs (three
//!   single-bit cells per pixel, alpha excluded) and back.
//! - [`frame`] prefixes every embedded block with a 4-byte little-endian
//!   length, making the stream self-delimiting inside the fixed-capacity
//!   carrier.
//! - [`payload`] packages a file name and content into one buffer with a
//!   NUL terminator, and parses it back.
//!
//! Single-threaded and synchronous throughout; no operation suspends or can
//! be cancelled. [`crate::progress`] exposes coarse step counts for
//! frontends.

pub mod bits;
pub mod error;
pub mod frame;
pub mod payload;
pub mod pipeline;

pub use error::StegoError;
pub use payload::Payload;
pub use pipeline::StegoCodec;

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Length framing over the raw bit channel.
//!
//! A fixed-capacity carrier has no natural end-of-data marker, so every
//! embedded block is prefixed with its own length:
//!
//! ```text
//! [4 bytes] payload length, u32 little-endian
//! [N bytes] payload
//! ```
//!
//! This makes the stream self-describing: a reader that knows nothing about
//! the original length recovers it from the header. The framing is
//! unauthenticated — a virgin carrier whose channel LSBs happen to decode to
//! a small plausible length will be misread as containing data. That is an
//! inherent limitation of length-only framing, accepted here; the decode
//! side rejects only lengths that could not possibly have fit.

use crate::stego::bits::BitChannel;
use crate::stego::error::StegoError;

/// Size of the length header in bytes.
pub const HEADER_LEN: usize = 4;

/// Serialize a `u32` as four little-endian bytes.
///
/// Byte 0 holds the least-significant 8 bits. Pure and independent of the
/// host's native integer representation.
pub fn encode_u32_le(value: u32) -> [u8; 4] {
    [
        (value & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        ((value >> 16) & 0xFF) as u8,
        ((value >> 24) & 0xFF) as u8,
    ]
}

/// Parse four little-endian bytes back into a `u32`. Inverse of
/// [`encode_u32_le`].
pub fn decode_u32_le(bytes: [u8; 4]) -> u32 {
    u32::from(bytes[0])
        | (u32::from(bytes[1]) << 8)
        | (u32::from(bytes[2]) << 16)
        | (u32::from(bytes[3]) << 24)
}

/// A [`BitChannel`] with length framing.
///
/// Holds the inner channel by composition, so the capacity arithmetic
/// (`inner.capacity() - 4`) stays explicit at the layer boundary.
#[derive(Debug, Clone)]
pub struct FramedChannel {
    inner: BitChannel,
}

impl FramedChannel {
    pub fn new(inner: BitChannel) -> Self {
        Self { inner }
    }

    /// Usable capacity in bytes after the length header.
    pub fn capacity(&self) -> usize {
        self.inner.capacity().saturating_sub(HEADER_LEN)
    }

    /// The wrapped bit channel.
    pub fn inner(&self) -> &BitChannel {
        &self.inner
    }

    /// Frame `bytes` with a length header and write the block to the carrier.
    ///
    /// `None` means "nothing to hide" and succeeds without touching a single
    /// bit.
    ///
    /// # Errors
    /// [`StegoError::CapacityExceeded`] if `bytes.len() > capacity()`; the
    /// carrier is not mutated on failure.
    pub fn encode(&mut self, bytes: Option<&[u8]>) -> Result<(), StegoError> {
        let Some(bytes) = bytes else {
            return Ok(());
        };

        let capacity = self.capacity();
        if bytes.len() > capacity {
            return Err(StegoError::CapacityExceeded {
                needed: bytes.len(),
                available: capacity,
            });
        }

        let mut block = Vec::with_capacity(HEADER_LEN + bytes.len());
        block.extend_from_slice(&encode_u32_le(bytes.len() as u32));
        block.extend_from_slice(bytes);
        self.inner.write_bits(&block)
    }

    /// Read back the framed payload, or `None` if the carrier holds nothing.
    ///
    /// The stored length is treated as absent when it is zero or larger than
    /// the space that existed after the header — such a value cannot be a
    /// genuine frame and is how an untouched carrier is recognized.
    pub fn decode(&self) -> Option<Vec<u8>> {
        // A carrier too small to even hold the header cannot contain a frame.
        if self.inner.capacity() < HEADER_LEN {
            return None;
        }

        let header = self.inner.read_bits(HEADER_LEN);
        let size = decode_u32_le([header[0], header[1], header[2], header[3]]) as usize;

        if size == 0 || size > self.capacity() {
            return None;
        }

        let block = self.inner.read_bits(HEADER_LEN + size);
        Some(block[HEADER_LEN..].to_vec())
    }
}

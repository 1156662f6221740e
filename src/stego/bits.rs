// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Raw bit storage over pixel color-channel LSBs.
//!
//! The carrier is treated as a flat sequence of single-bit cells, three per
//! pixel (one per color channel, alpha excluded). Linear bit index `i` maps
//! to a cell via [`bit_address`]:
//!
//! ```text
//! channel = i % 3          (0 = blue, 1 = green, 2 = red)
//! x       = (i / 3) % W
//! y       = (i / 3) / W
//! ```
//!
//! The mapping is a bijection over `i in [0, W*H*3)`: consecutive bits fill
//! the three channels of one pixel before moving to the next pixel in
//! row-major order. This layer knows nothing about payload structure; length
//! framing sits on top in [`frame`](super::frame).

use crate::pixel::{PixelGrid, STORAGE_CHANNELS};
use crate::stego::error::StegoError;

/// Map a linear bit index to `(x, y, channel)` for a carrier of width `width`.
///
/// Channel 0 is blue, 1 is green, 2 is red — matching the byte order of the
/// packed `0xAARRGGBB` pixel. Alpha is never addressed.
pub fn bit_address(i: usize, width: usize) -> (usize, usize, usize) {
    let channel = i % STORAGE_CHANNELS;
    let cell = i / STORAGE_CHANNELS;
    (cell % width, cell / width, channel)
}

/// A pixel grid viewed as raw single-bit storage cells.
///
/// Owns the carrier grid; the layers above reach the pixels only through it.
#[derive(Debug, Clone)]
pub struct BitChannel {
    grid: PixelGrid,
}

impl BitChannel {
    pub fn new(grid: PixelGrid) -> Self {
        Self { grid }
    }

    /// Raw capacity in whole bytes: `floor(W * H * 3 / 8)`.
    ///
    /// Up to seven trailing channel bits go unused; no write ever addresses
    /// a bit index at or beyond `capacity() * 8`.
    pub fn capacity(&self) -> usize {
        self.grid.width() * self.grid.height() * STORAGE_CHANNELS / 8
    }

    /// The carrier grid.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Write `bytes` into the carrier's channel LSBs, bit 0 of byte 0 first
    /// (little-endian within each byte).
    ///
    /// Each addressed channel has its LSB replaced by the payload bit; the
    /// seven upper bits and every unaddressed channel are left untouched.
    ///
    /// # Errors
    /// [`StegoError::CapacityExceeded`] if `bytes.len() > capacity()`. The
    /// carrier is not mutated on failure.
    pub fn write_bits(&mut self, bytes: &[u8]) -> Result<(), StegoError> {
        let capacity = self.capacity();
        if bytes.len() > capacity {
            return Err(StegoError::CapacityExceeded {
                needed: bytes.len(),
                available: capacity,
            });
        }

        let width = self.grid.width();
        for (byte_index, &byte) in bytes.iter().enumerate() {
            for bit_pos in 0..8 {
                let bit = (byte >> bit_pos) & 1;
                let (x, y, channel) = bit_address(byte_index * 8 + bit_pos, width);
                let value = self.grid.channel(x, y, channel);
                self.grid.set_channel(x, y, channel, (value & 0xFE) | bit);
            }
        }
        Ok(())
    }

    /// Read `n` bytes back from the carrier's channel LSBs, starting at bit
    /// index 0, in the same bit order used for writing.
    ///
    /// Always produces `n` bytes — meaningful or not; distinguishing a real
    /// payload from carrier noise is the framing layer's job. The caller must
    /// keep `n <= capacity()`.
    ///
    /// # Panics
    /// If `n > capacity()` (the bit addresses would leave the grid).
    pub fn read_bits(&self, n: usize) -> Vec<u8> {
        assert!(n <= self.capacity(), "read of {n} bytes exceeds capacity {}", self.capacity());

        let width = self.grid.width();
        let mut bytes = Vec::with_capacity(n);
        for byte_index in 0..n {
            let mut byte = 0u8;
            for bit_pos in 0..8 {
                let (x, y, channel) = bit_address(byte_index * 8 + bit_pos, width);
                byte |= (self.grid.channel(x, y, channel) & 0x01) << bit_pos;
            }
            bytes.push(byte);
        }
        bytes
    }
}

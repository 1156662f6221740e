// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Pixel-domain carrier representation.
//!
//! A [`PixelGrid`] is a decoded image: a width×height grid of packed
//! `0xAARRGGBB` pixels. The steganography layer (`stego` module) addresses
//! individual color-channel bits through the channel accessors here and never
//! touches the packing itself. Alpha flattening lives in [`flatten`].

pub mod error;
pub mod flatten;

use error::PixelError;

/// Number of color channels usable for bit storage (blue, green, red).
/// Alpha is never used: it is discarded entirely by alpha-less target
/// formats, so a bit stored there would not survive export.
pub const STORAGE_CHANNELS: usize = 3;

/// A decoded image: a rectangular grid of packed `0xAARRGGBB` pixels.
///
/// Geometry is fixed at construction. The grid is owned exclusively by
/// whoever holds it; [`Clone`] produces the defensive copies the codec hands
/// out, so a caller can never mutate codec-internal state through an
/// exported grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u32>,
}

impl PixelGrid {
    /// Create an opaque-black grid (`0xFF000000` everywhere).
    ///
    /// All color-channel LSBs are zero, so a fresh grid is a deterministic
    /// virgin carrier: decoding it yields nothing.
    ///
    /// # Errors
    /// [`PixelError::InvalidDimensions`] if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> error::Result<Self> {
        if width == 0 || height == 0 {
            return Err(PixelError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            data: vec![0xFF00_0000; width * height],
        })
    }

    /// Create a grid from an existing row-major `0xAARRGGBB` buffer.
    ///
    /// # Errors
    /// - [`PixelError::InvalidDimensions`] if `width` or `height` is zero.
    /// - [`PixelError::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_argb(width: usize, height: usize, data: Vec<u32>) -> error::Result<Self> {
        if width == 0 || height == 0 {
            return Err(PixelError::InvalidDimensions);
        }
        if data.len() != width * height {
            return Err(PixelError::BufferSizeMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major packed pixel data.
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Packed pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height`.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y * self.width + x]
    }

    /// Overwrite the packed pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: usize, y: usize, argb: u32) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y * self.width + x] = argb;
    }

    /// Color channel value at `(x, y)`. Channel 0 = blue, 1 = green, 2 = red.
    ///
    /// # Panics
    /// If the coordinates are out of bounds or `channel >= STORAGE_CHANNELS`.
    pub fn channel(&self, x: usize, y: usize, channel: usize) -> u8 {
        assert!(channel < STORAGE_CHANNELS, "channel {channel} out of range");
        ((self.pixel(x, y) >> (8 * channel)) & 0xFF) as u8
    }

    /// Replace one color channel at `(x, y)`, leaving the other channels and
    /// alpha untouched.
    ///
    /// # Panics
    /// If the coordinates are out of bounds or `channel >= STORAGE_CHANNELS`.
    pub fn set_channel(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        assert!(channel < STORAGE_CHANNELS, "channel {channel} out of range");
        let shift = 8 * channel as u32;
        let cleared = self.pixel(x, y) & !(0xFFu32 << shift);
        self.set_pixel(x, y, cleared | (u32::from(value) << shift));
    }

    /// Alpha channel value at `(x, y)`.
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        (self.pixel(x, y) >> 24) as u8
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Bit-preserving alpha flattening.
//!
//! Target formats without an alpha channel (plain bitmaps) discard the alpha
//! byte at export. Naively premultiplying color by alpha would rewrite every
//! channel bit, destroying any payload already embedded in the LSBs. This
//! transform premultiplies the upper seven bits only:
//!
//! ```text
//! v' = ((v * a / 255) & 0xFE) | (v & 0x01)
//! ```
//!
//! so the carrier displays correctly once alpha is gone while bit 0 of every
//! color channel — the only bit steganographic writes ever touch — survives
//! exactly. Format conversion must never alter a channel's bit 0.

use super::PixelGrid;
use crate::progress;

/// Flatten one packed `0xAARRGGBB` pixel: premultiply each color channel by
/// alpha while preserving its LSB, then force alpha to `0xFF`.
pub fn flatten_pixel(argb: u32) -> u32 {
    let a = (argb >> 24) & 0xFF;
    let mut out = 0xFF00_0000u32;
    for channel in 0..3 {
        let shift = 8 * channel;
        let v = (argb >> shift) & 0xFF;
        let premultiplied = (v * a / 0xFF) & 0xFE;
        out |= (premultiplied | (v & 0x01)) << shift;
    }
    out
}

/// Produce an alpha-flattened copy of `grid`.
///
/// Every color channel keeps its exact LSB; alpha becomes `0xFF` everywhere.
/// The input grid is not modified.
///
/// Reports one [`progress`] step per pixel row. With the `parallel` feature
/// the rows are processed on the rayon thread pool; output is identical
/// either way.
pub fn flatten_alpha(grid: &PixelGrid) -> PixelGrid {
    let width = grid.width();
    progress::init(grid.height() as u32);
    let mut flattened = grid.clone();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        flattened
            .rows_mut()
            .par_chunks_mut(width)
            .for_each(|row| {
                for px in row {
                    *px = flatten_pixel(*px);
                }
                progress::advance();
            });
    }

    #[cfg(not(feature = "parallel"))]
    for row in flattened.rows_mut().chunks_mut(width) {
        for px in row {
            *px = flatten_pixel(*px);
        }
        progress::advance();
    }

    progress::finish();
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_lsb_at_half_alpha() {
        // v = 200 (LSB 0), force LSB to 1 -> 201; a = 128.
        // Premultiplied: 201 * 128 / 255 = 100 -> & 0xFE = 100, | 1 = 101.
        let argb = 0x80_0000_00 | 201; // blue channel
        let out = flatten_pixel(argb);
        let blue = out & 0xFF;
        assert_eq!(blue & 0x01, 1);
        assert_eq!(blue, ((201 * 128 / 255) & 0xFE) | 1);
        assert_eq!(out >> 24, 0xFF);
    }

    #[test]
    fn opaque_pixel_keeps_color() {
        // a = 255: premultiplication is identity, so only bit 0 handling
        // could change the value — and it must not.
        let argb = 0xFF_7B_C8_31;
        assert_eq!(flatten_pixel(argb), argb);
    }

    #[test]
    fn transparent_pixel_keeps_only_lsbs() {
        // a = 0: all visible color is gone, but the stored bits remain.
        let argb = 0x00_FF_FE_FD;
        let out = flatten_pixel(argb);
        assert_eq!(out & 0x00FF_FFFF, 0x01_00_01); // red LSB 1, green 0, blue 1
        assert_eq!(out >> 24, 0xFF);
    }

    #[test]
    fn every_channel_lsb_survives() {
        let mut grid = PixelGrid::new(16, 16).unwrap();
        // Deterministic spread of channel values and alphas.
        for y in 0..16 {
            for x in 0..16 {
                let v = ((x * 16 + y) as u32).wrapping_mul(2_654_435_761);
                grid.set_pixel(x, y, v);
            }
        }
        let flat = flatten_alpha(&grid);
        for y in 0..16 {
            for x in 0..16 {
                for c in 0..3 {
                    assert_eq!(
                        grid.channel(x, y, c) & 0x01,
                        flat.channel(x, y, c) & 0x01,
                        "LSB changed at ({x}, {y}) channel {c}"
                    );
                }
                assert_eq!(flat.alpha(x, y), 0xFF);
            }
        }
    }

    #[test]
    fn input_grid_untouched() {
        let mut grid = PixelGrid::new(2, 2).unwrap();
        grid.set_pixel(0, 0, 0x10_20_30_40);
        let before = grid.clone();
        let _ = flatten_alpha(&grid);
        assert_eq!(grid, before);
    }
}

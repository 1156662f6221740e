// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! The codec orchestrator.
//!
//! [`StegoCodec`] composes the three layers below it: payload packaging
//! ([`payload`](super::payload)) through length framing
//! ([`frame`](super::frame)) through raw bit storage
//! ([`bits`](super::bits)). Encode runs pack → frame → write-bits; decode is
//! the mirror. The codec owns the carrier grid for its lifetime; everything
//! it hands back out is a fresh copy.

use crate::pixel::flatten::flatten_alpha;
use crate::pixel::PixelGrid;
use crate::stego::bits::BitChannel;
use crate::stego::error::StegoError;
use crate::stego::frame::FramedChannel;
use crate::progress;
use crate::stego::payload::{pack_payload, unpack_payload, Payload, PACK_OVERHEAD};

/// Progress steps reported by [`StegoCodec::encode`]: pack, write.
pub const ENCODE_STEPS: u32 = 2;

/// Progress steps reported by [`StegoCodec::decode`]: frame read, unpack.
pub const DECODE_STEPS: u32 = 2;

/// Steganographic codec over one carrier image.
///
/// The carrier holds exactly one payload at a time; each successful encode
/// fully replaces whatever was embedded before.
#[derive(Debug, Clone)]
pub struct StegoCodec {
    framed: FramedChannel,
}

impl StegoCodec {
    /// Take ownership of a decoded carrier grid.
    ///
    /// The grid is moved in, so no outside handle can alias the codec's
    /// working image; use [`export_carrier`](Self::export_carrier) to get a
    /// copy back out.
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            framed: FramedChannel::new(BitChannel::new(grid)),
        }
    }

    /// Build a codec straight from a decoded row-major `0xAARRGGBB` buffer,
    /// as an image-container source hands it over.
    ///
    /// # Errors
    /// [`StegoError::InvalidGrid`] if `width` or `height` is zero or the
    /// buffer does not hold exactly `width * height` pixels.
    pub fn from_argb(width: usize, height: usize, data: Vec<u32>) -> Result<Self, StegoError> {
        Ok(Self::new(PixelGrid::from_argb(width, height, data)?))
    }

    /// Maximum payload size in bytes: framed capacity minus the one byte the
    /// packaging terminator always consumes.
    ///
    /// Depends only on carrier geometry, never on what is embedded.
    pub fn capacity(&self) -> usize {
        self.framed.capacity().saturating_sub(PACK_OVERHEAD)
    }

    /// Carrier width in pixels.
    pub fn width(&self) -> usize {
        self.framed.inner().grid().width()
    }

    /// Carrier height in pixels.
    pub fn height(&self) -> usize {
        self.framed.inner().grid().height()
    }

    /// Embed a payload into the carrier.
    ///
    /// [`Payload::Empty`] succeeds without writing anything. A payload whose
    /// serialized form (name + terminator + content) exceeds
    /// [`capacity`](Self::capacity) is rejected with the carrier untouched;
    /// retrying with an empty name to save the name-overhead bytes is the
    /// caller's decision.
    ///
    /// # Errors
    /// [`StegoError::CapacityExceeded`] if the payload does not fit.
    pub fn encode(&mut self, payload: &Payload) -> Result<(), StegoError> {
        progress::init(ENCODE_STEPS);

        let Payload::Present { name, content } = payload else {
            self.framed.encode(None)?;
            progress::finish();
            return Ok(());
        };

        let needed = crate::stego::payload::required_space(name, content);
        let available = self.capacity();
        if needed > available {
            return Err(StegoError::CapacityExceeded { needed, available });
        }

        let packed = pack_payload(name, content);
        progress::advance();

        self.framed.encode(Some(&packed))?;
        progress::finish();
        Ok(())
    }

    /// Recover the embedded payload.
    ///
    /// Returns [`Payload::Empty`] when the carrier holds no valid frame —
    /// the normal outcome for a carrier that was never encoded, not a
    /// failure.
    pub fn decode(&self) -> Payload {
        progress::init(DECODE_STEPS);

        let framed = self.framed.decode();
        progress::advance();

        let payload = unpack_payload(framed.as_deref());
        progress::finish();
        payload
    }

    /// Export the carrier for container encoding.
    ///
    /// With `target_has_alpha` the result is a plain defensive copy. Without
    /// it, the copy is alpha-flattened
    /// ([`flatten_alpha`](crate::pixel::flatten::flatten_alpha)): color is
    /// premultiplied so the image displays correctly once alpha is
    /// discarded, while every channel's bit 0 — and with it any embedded
    /// payload — survives exactly. The flattening pass reports one
    /// [`progress`] step per pixel row.
    pub fn export_carrier(&self, target_has_alpha: bool) -> PixelGrid {
        let grid = self.framed.inner().grid();
        if target_has_alpha {
            grid.clone()
        } else {
            flatten_alpha(grid)
        }
    }
}

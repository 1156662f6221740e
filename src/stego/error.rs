// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Error types for the steganography layers.
//!
//! [`StegoError`] covers the only failure modes the codec has: a payload
//! that does not fit the carrier, and a carrier grid that could not be
//! constructed. Decoding never fails — a carrier with no valid frame decodes
//! to [`Payload::Empty`](crate::stego::payload::Payload::Empty), which is an
//! ordinary outcome, not an error.

use core::fmt;

use crate::pixel::error::PixelError;

/// Errors that can occur during steganographic encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The carrier grid is invalid (zero dimensions or buffer mismatch).
    InvalidGrid(PixelError),
    /// The payload is too large for the carrier's embedding capacity.
    /// The carrier is left untouched; the caller may retry with an empty
    /// name to save the name-overhead bytes, or abort.
    CapacityExceeded { needed: usize, available: usize },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "invalid carrier grid: {e}"),
            Self::CapacityExceeded { needed, available } => {
                write!(f, "payload too large: {needed} bytes needed, {available} available")
            }
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            Self::CapacityExceeded { .. } => None,
        }
    }
}

impl From<PixelError> for StegoError {
    fn from(e: PixelError) -> Self {
        Self::InvalidGrid(e)
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Error types for pixel grid construction.

use std::fmt;

/// Errors that can occur when constructing a [`PixelGrid`](super::PixelGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelError {
    /// Width or height is zero.
    InvalidDimensions,
    /// The supplied pixel buffer does not contain exactly `width * height` entries.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "image dimensions must be non-zero"),
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "pixel buffer size mismatch: expected {expected} pixels, got {actual}")
            }
        }
    }
}

impl std::error::Error for PixelError {}

pub type Result<T> = std::result::Result<T, PixelError>;

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Payload packaging: name plus content in one buffer.
//!
//! Serialized form, embedded as the body of a length frame:
//!
//! ```text
//! [name bytes] UTF-8 file name (may be empty)
//! [0x00]       terminator, always present
//! [content]    raw payload bytes
//! ```
//!
//! Parsing splits at the *first* `0x00`, so a name must not itself contain a
//! NUL byte. Filesystem names never do; the constraint is documented rather
//! than validated, matching the wire format. Everything here is a pure
//! in-memory transform — no channel, no I/O.

/// Bytes consumed by packaging even when the name is empty: the mandatory
/// terminator.
pub const PACK_OVERHEAD: usize = 1;

/// A decoded payload.
///
/// `Empty` is the distinguished "nothing embedded" outcome — a first-class
/// value checked by `match`, not an error and not the same thing as a
/// present payload with zero-length content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// No payload (virgin carrier, implausible frame, or missing terminator).
    Empty,
    /// A recovered or to-be-embedded payload.
    Present {
        /// File name, possibly empty. Must not contain NUL.
        name: String,
        /// Raw payload bytes.
        content: Vec<u8>,
    },
}

impl Payload {
    /// A present payload with the given name and content.
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self::Present { name: name.into(), content }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Serialized size of this payload, or `None` for [`Payload::Empty`]
    /// (nothing would be written at all).
    pub fn required_space(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Present { name, content } => Some(required_space(name, content)),
        }
    }
}

/// Bytes needed to pack `name` and `content`: name bytes, terminator,
/// content bytes.
pub fn required_space(name: &str, content: &[u8]) -> usize {
    name.len() + PACK_OVERHEAD + content.len()
}

/// Serialize a name and content into one buffer: `name ++ 0x00 ++ content`.
///
/// The terminator is present even for an empty name, producing a leading
/// `0x00`. Pure and total.
pub fn pack_payload(name: &str, content: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(required_space(name, content));
    buf.extend_from_slice(name.as_bytes());
    buf.push(0x00);
    buf.extend_from_slice(content);
    buf
}

/// Parse a packed buffer back into a [`Payload`].
///
/// Absent or zero-length input yields [`Payload::Empty`]. So does a buffer
/// with no `0x00` terminator: a malformed buffer is silently "nothing", not
/// a decode error — only the length-framing layer provides a real validity
/// signal. Name bytes that are not valid UTF-8 are decoded lossily.
pub fn unpack_payload(buffer: Option<&[u8]>) -> Payload {
    let Some(data) = buffer else {
        return Payload::Empty;
    };
    if data.is_empty() {
        return Payload::Empty;
    }

    let Some(terminator) = data.iter().position(|&b| b == 0x00) else {
        return Payload::Empty;
    };

    let name = String::from_utf8_lossy(&data[..terminator]).into_owned();
    Payload::Present {
        name,
        content: data[terminator + 1..].to_vec(),
    }
}

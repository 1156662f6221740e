// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegpix

//! Global progress tracking for encode/decode/export.
//!
//! All codec operations are CPU-bound and run in time proportional to the
//! pixel count, so a frontend polling `get()` can drive a progress bar.
//! Encode and decode report phase-grained steps
//! ([`ENCODE_STEPS`](crate::ENCODE_STEPS) / [`DECODE_STEPS`](crate::DECODE_STEPS));
//! alpha flattening reports one step per pixel row. Uses atomics so it is
//! safe to read from another thread (or to advance from rayon workers when
//! the `parallel` feature flattens rows concurrently).

use core::sync::atomic::{AtomicU32, Ordering};

static STEP: AtomicU32 = AtomicU32::new(0);
static TOTAL: AtomicU32 = AtomicU32::new(0);

/// Reset progress to 0 and set the total step count.
pub fn init(total: u32) {
    STEP.store(0, Ordering::Relaxed);
    TOTAL.store(total, Ordering::Relaxed);
}

/// Advance progress by one step.
/// Step is capped at total so the bar never reads past 100%.
pub fn advance() {
    let total = TOTAL.load(Ordering::Relaxed);
    if total == 0 {
        // Indeterminate phase — advance freely.
        STEP.fetch_add(1, Ordering::Relaxed);
    } else {
        let _ = STEP.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
            if s < total { Some(s + 1) } else { Some(s) }
        });
    }
}

/// Read the current (step, total) progress.
pub fn get() -> (u32, u32) {
    (STEP.load(Ordering::Relaxed), TOTAL.load(Ordering::Relaxed))
}

/// Mark progress as complete (step = total).
pub fn finish() {
    let t = TOTAL.load(Ordering::Relaxed);
    STEP.store(t, Ordering::Relaxed);
}

// Progress state is global and most tests in the lib binary write to it
// through encode/decode/flatten, so assertions on get() live in the
// dedicated `tests/progress_reporting.rs` binary where nothing else runs
// concurrently.

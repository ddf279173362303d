// Copyright 2026 The Blockheap Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Internal error channel.
//!
//! The four public operations collapse every failure to a single sentinel
//! value (null); nothing below this module is ever handed to a caller.
//! `HeapError` exists so the engine's internals can
//! propagate a reason with `?` and so `log::warn!` can say *why* a request
//! failed, even though the public return value can't.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeapError {
    /// `size` (or `count * size`) fell outside `(0, MAX_REQUEST_SIZE]`.
    InvalidSize,
    /// The kernel refused to grow the program break.
    BreakFailed,
    /// `mmap` or `munmap` failed.
    MapFailed,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidSize => write!(f, "requested size is zero or exceeds the allocator's cap"),
            HeapError::BreakFailed => write!(f, "sbrk failed to grow the program break"),
            HeapError::MapFailed => write!(f, "mmap/munmap failed"),
        }
    }
}

impl std::error::Error for HeapError {}

pub(crate) type HeapResult<T> = Result<T, HeapError>;

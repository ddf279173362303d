// Copyright 2026 The Blockheap Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! A userspace general-purpose heap allocator backed by `sbrk` and `mmap`.
//!
//! The allocator keeps blocks in two disjoint lists — a contiguous heap
//! list grown via the program break, and a mapped list of individually
//! `mmap`'d large allocations — and serves small-to-medium requests from a
//! 128-bucket segregated free index sorted by size within each bucket.
//!
//! [`Engine`] is the policy core; [`GlobalHeap`] adapts it to
//! [`std::alloc::GlobalAlloc`] for crates that want this as their process
//! allocator.

mod block;
mod engine;
mod error;
mod free_list;
mod global;
mod os;

pub use engine::{Engine, LARGE_ALLOC_THRESHOLD, MAX_REQUEST_SIZE, MIN_SPLIT_PAYLOAD};
pub use global::GlobalHeap;
pub use os::{LibcOsAllocator, OsAllocator};

#[cfg(feature = "testing")]
pub use os::testing;

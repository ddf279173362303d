// Copyright 2026 The Blockheap Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! `GlobalAlloc` adapter.
//!
//! [`Engine`] is deliberately single-threaded; this is the one place a lock
//! belongs, so that a crate wanting this allocator as its process-wide
//! allocator can write:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: blockheap::GlobalHeap = blockheap::GlobalHeap::new();
//! ```
//!
//! `blockheap` itself never installs a `#[global_allocator]` — that choice
//! belongs to the binary crate that links it.

use std::alloc::{GlobalAlloc, Layout};
use std::sync::{Mutex, OnceLock};

use crate::engine::Engine;
use crate::os::LibcOsAllocator;

/// Process-wide allocator backed by a single mutex-guarded [`Engine`].
pub struct GlobalHeap {
    inner: OnceLock<Mutex<Engine<LibcOsAllocator>>>,
}

impl GlobalHeap {
    /// Builds an adapter with no heap state yet — the engine is created on
    /// first use so this can live in a `static`.
    pub const fn new() -> Self {
        GlobalHeap {
            inner: OnceLock::new(),
        }
    }

    fn engine(&self) -> &Mutex<Engine<LibcOsAllocator>> {
        self.inner.get_or_init(|| Mutex::new(Engine::new()))
    }
}

impl Default for GlobalHeap {
    fn default() -> Self {
        GlobalHeap::new()
    }
}

// SAFETY: all access to the engine goes through the mutex; the engine
// itself holds no thread-affine state (no TLS, no raw FDs bound to a
// thread).
unsafe impl Sync for GlobalHeap {}

unsafe impl GlobalAlloc for GlobalHeap {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let mut engine = self.engine().lock().unwrap_or_else(|e| e.into_inner());
        engine.alloc(layout.size())
    }

    unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
        let mut engine = self.engine().lock().unwrap_or_else(|e| e.into_inner());
        engine.dealloc(ptr);
    }

    unsafe fn realloc(&self, ptr: *mut u8, _layout: Layout, new_size: usize) -> *mut u8 {
        let mut engine = self.engine().lock().unwrap_or_else(|e| e.into_inner());
        engine.realloc(ptr, new_size)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let mut engine = self.engine().lock().unwrap_or_else(|e| e.into_inner());
        engine.zalloc(1, layout.size())
    }
}

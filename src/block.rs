// Copyright 2026 The Blockheap Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Block & metadata model.
//!
//! Every managed region of the heap is a [`Header`] immediately followed by
//! its payload bytes. Blocks form two disjoint lists depending on how they
//! were born: heap-list blocks (linked by `prev`/`next` in address order)
//! and mapped-list blocks (linked by the same fields, but walking the
//! separate list of individually `mmap`'d regions). `prev_free`/`next_free`
//! are meaningful only while `is_free` is set and link the block into its
//! free-index bucket.

use std::mem;
use std::ptr::NonNull;

/// Fixed-size metadata record prefixing every payload.
#[repr(C)]
pub(crate) struct Header {
    /// Payload length in bytes. Does not include this header.
    pub size: usize,
    /// Whether the block is currently free.
    pub is_free: bool,
    /// Whether this block lives in the mapped list rather than the heap list.
    pub is_mapped: bool,
    /// Physically preceding block along whichever list this block belongs to.
    pub prev: Option<NonNull<Header>>,
    /// Physically following block along whichever list this block belongs to.
    pub next: Option<NonNull<Header>>,
    /// Previous free block within the same free-index bucket.
    pub prev_free: Option<NonNull<Header>>,
    /// Next free block within the same free-index bucket.
    pub next_free: Option<NonNull<Header>>,
}

/// Size of [`Header`] in bytes. Every block's payload starts exactly this
/// many bytes past the block's own address.
pub(crate) const HEADER_SIZE: usize = mem::size_of::<Header>();

impl Header {
    /// Writes a fresh header at `at`, linked to neighbours `prev`/`next`.
    ///
    /// # Safety
    /// `at` must point to at least `HEADER_SIZE` writable bytes.
    pub unsafe fn write_new(
        at: NonNull<Header>,
        size: usize,
        is_free: bool,
        is_mapped: bool,
        prev: Option<NonNull<Header>>,
        next: Option<NonNull<Header>>,
    ) -> NonNull<Header> {
        at.as_ptr().write(Header {
            size,
            is_free,
            is_mapped,
            prev,
            next,
            prev_free: None,
            next_free: None,
        });
        at
    }

    /// Address immediately following this block's payload, i.e. the address
    /// of whatever block comes physically next in the heap list.
    pub fn end_addr(&self, self_addr: NonNull<Header>) -> usize {
        self_addr.as_ptr() as usize + HEADER_SIZE + self.size
    }
}

/// Recovers the header from a payload address handed back to the caller.
///
/// # Safety
/// `payload` must be an address previously returned by this crate's
/// allocation entry points.
pub(crate) unsafe fn header_from_payload(payload: NonNull<u8>) -> NonNull<Header> {
    NonNull::new_unchecked(payload.as_ptr().sub(HEADER_SIZE) as *mut Header)
}

/// Computes the payload address for a given header.
pub(crate) fn payload_from_header(header: NonNull<Header>) -> NonNull<u8> {
    unsafe { NonNull::new_unchecked((header.as_ptr() as *mut u8).add(HEADER_SIZE)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_and_header_round_trip() {
        let mut backing = vec![0u8; HEADER_SIZE + 64];
        let header_ptr = NonNull::new(backing.as_mut_ptr() as *mut Header).unwrap();
        unsafe {
            Header::write_new(header_ptr, 64, false, false, None, None);
        }
        let payload = payload_from_header(header_ptr);
        assert_eq!(payload.as_ptr() as usize, header_ptr.as_ptr() as usize + HEADER_SIZE);
        let recovered = unsafe { header_from_payload(payload) };
        assert_eq!(recovered.as_ptr(), header_ptr.as_ptr());
    }

    #[test]
    fn end_addr_matches_header_plus_payload() {
        let mut backing = vec![0u8; HEADER_SIZE + 100];
        let header_ptr = NonNull::new(backing.as_mut_ptr() as *mut Header).unwrap();
        let header = unsafe {
            Header::write_new(header_ptr, 100, false, false, None, None);
            header_ptr.as_ref()
        };
        assert_eq!(
            header.end_addr(header_ptr),
            header_ptr.as_ptr() as usize + HEADER_SIZE + 100
        );
    }
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # C Boundary
//!
//! `extern "C"` surface over an opaque [`AtomicCell`] handle, for host
//! languages that cannot express atomic operations or memory orderings
//! natively.
//!
//! The foreign side sees only a forward-declared struct pointer:
//!
//! ```c
//! typedef struct spsc_cell spsc_cell;
//!
//! spsc_cell* spsc_cell_create(int64_t initial);
//! void       spsc_cell_destroy(spsc_cell* cell);
//!
//! int64_t spsc_cell_load_acquire(const spsc_cell* cell);
//! int64_t spsc_cell_load_relaxed(const spsc_cell* cell);
//! void    spsc_cell_store_release(const spsc_cell* cell, int64_t v);
//! void    spsc_cell_store_relaxed(const spsc_cell* cell, int64_t v);
//! int64_t spsc_cell_fetch_add_relaxed(const spsc_cell* cell, int64_t delta);
//! ```
//!
//! The only recoverable failure on this surface is allocation failure in
//! [`spsc_cell_create`], signalled by a null handle; callers must check
//! before use. Everything else is a contract violation (use after destroy,
//! a second concurrent writer), which is undefined behavior rather than a
//! detected error.
//!
//! # Author
//!
//! Haixing Hu

use crate::cell::AtomicCell;

/// Allocates a new cell on the heap with the given initial value and
/// returns an owning handle to it.
///
/// The handle is opaque: the host must not inspect the pointee and must
/// release it with [`spsc_cell_destroy`] exactly once.
///
/// # Parameters
///
/// * `initial` - The initial value.
///
/// # Returns
///
/// An owning handle, or null on allocation failure. Callers must check for
/// null before use.
#[no_mangle]
pub extern "C" fn spsc_cell_create(initial: i64) -> *mut AtomicCell {
    Box::into_raw(Box::new(AtomicCell::new(initial)))
}

/// Destroys a cell previously returned by [`spsc_cell_create`].
///
/// A null handle is a no-op, so a failed `create` may be passed through
/// unconditionally. The free is all-or-nothing.
///
/// # Parameters
///
/// * `cell` - The handle to destroy; may be null.
///
/// # Safety
///
/// `cell` must be null or a handle obtained from [`spsc_cell_create`] that
/// has not already been destroyed. No thread may use the handle during or
/// after this call.
#[no_mangle]
pub unsafe extern "C" fn spsc_cell_destroy(cell: *mut AtomicCell) {
    if cell.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(cell) });
}

/// Loads the current value with acquire ordering.
///
/// Synchronizes with a prior [`spsc_cell_store_release`] by the writer
/// thread: once this load observes the released value, all memory
/// operations the writer performed before that store are visible.
///
/// # Parameters
///
/// * `cell` - The cell handle.
///
/// # Returns
///
/// The current value.
///
/// # Safety
///
/// `cell` must be a live handle obtained from [`spsc_cell_create`].
#[no_mangle]
pub unsafe extern "C" fn spsc_cell_load_acquire(cell: *const AtomicCell) -> i64 {
    debug_assert!(!cell.is_null());
    unsafe { &*cell }.load_acquire()
}

/// Loads the current value with relaxed ordering.
///
/// The read is atomic but establishes no ordering with other memory
/// operations.
///
/// # Parameters
///
/// * `cell` - The cell handle.
///
/// # Returns
///
/// The current value.
///
/// # Safety
///
/// `cell` must be a live handle obtained from [`spsc_cell_create`].
#[no_mangle]
pub unsafe extern "C" fn spsc_cell_load_relaxed(cell: *const AtomicCell) -> i64 {
    debug_assert!(!cell.is_null());
    unsafe { &*cell }.load_relaxed()
}

/// Stores a new value with release ordering.
///
/// All memory operations the calling thread performed before this store
/// become visible to a reader whose acquire load observes the value.
///
/// # Parameters
///
/// * `cell` - The cell handle.
/// * `value` - The new value to store.
///
/// # Safety
///
/// `cell` must be a live handle obtained from [`spsc_cell_create`], and the
/// calling thread must be the cell's only writer.
#[no_mangle]
pub unsafe extern "C" fn spsc_cell_store_release(cell: *const AtomicCell, value: i64) {
    debug_assert!(!cell.is_null());
    unsafe { &*cell }.store_release(value);
}

/// Stores a new value with relaxed ordering.
///
/// The write is atomic but publishes nothing beyond the value itself.
///
/// # Parameters
///
/// * `cell` - The cell handle.
/// * `value` - The new value to store.
///
/// # Safety
///
/// `cell` must be a live handle obtained from [`spsc_cell_create`], and the
/// calling thread must be the cell's only writer.
#[no_mangle]
pub unsafe extern "C" fn spsc_cell_store_relaxed(cell: *const AtomicCell, value: i64) {
    debug_assert!(!cell.is_null());
    unsafe { &*cell }.store_relaxed(value);
}

/// Adds a delta to the value with relaxed ordering, returning the value as
/// it was immediately before the addition.
///
/// The addition wraps on signed overflow with two's-complement semantics;
/// the delta may be negative.
///
/// # Parameters
///
/// * `cell` - The cell handle.
/// * `delta` - The value to add.
///
/// # Returns
///
/// The value before the addition.
///
/// # Safety
///
/// `cell` must be a live handle obtained from [`spsc_cell_create`], and the
/// calling thread must be the cell's only writer.
#[no_mangle]
pub unsafe extern "C" fn spsc_cell_fetch_add_relaxed(cell: *const AtomicCell, delta: i64) -> i64 {
    debug_assert!(!cell.is_null());
    unsafe { &*cell }.fetch_add_relaxed(delta)
}

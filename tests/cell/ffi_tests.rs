/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_spsc::ffi::{
    spsc_cell_create,
    spsc_cell_destroy,
    spsc_cell_fetch_add_relaxed,
    spsc_cell_load_acquire,
    spsc_cell_load_relaxed,
    spsc_cell_store_relaxed,
    spsc_cell_store_release,
};

#[test]
fn test_create_load_destroy() {
    let cell = spsc_cell_create(42);
    assert!(!cell.is_null());
    unsafe {
        assert_eq!(spsc_cell_load_relaxed(cell), 42);
        assert_eq!(spsc_cell_load_acquire(cell), 42);
        spsc_cell_destroy(cell);
    }
}

#[test]
fn test_destroy_null_is_noop() {
    unsafe {
        spsc_cell_destroy(std::ptr::null_mut());
    }
}

#[test]
fn test_store_release_load_acquire() {
    let cell = spsc_cell_create(0);
    unsafe {
        spsc_cell_store_release(cell, 7);
        assert_eq!(spsc_cell_load_acquire(cell), 7);
        spsc_cell_destroy(cell);
    }
}

#[test]
fn test_store_relaxed_load_relaxed() {
    let cell = spsc_cell_create(0);
    unsafe {
        spsc_cell_store_relaxed(cell, -123);
        assert_eq!(spsc_cell_load_relaxed(cell), -123);
        spsc_cell_destroy(cell);
    }
}

#[test]
fn test_fetch_add_returns_previous() {
    let cell = spsc_cell_create(0);
    unsafe {
        for expected in 0..5 {
            assert_eq!(spsc_cell_fetch_add_relaxed(cell, 1), expected);
        }
        assert_eq!(spsc_cell_fetch_add_relaxed(cell, -2), 5);
        assert_eq!(spsc_cell_load_relaxed(cell), 3);
        spsc_cell_destroy(cell);
    }
}

#[test]
fn test_fetch_add_wraps() {
    let cell = spsc_cell_create(i64::MAX);
    unsafe {
        assert_eq!(spsc_cell_fetch_add_relaxed(cell, 1), i64::MAX);
        assert_eq!(spsc_cell_load_relaxed(cell), i64::MIN);
        spsc_cell_destroy(cell);
    }
}

// The documented cursor scenario end to end: create at zero, five unit
// increments from the writer, an acquire load observes five.
#[test]
fn test_cursor_scenario() {
    let cell = spsc_cell_create(0);
    assert!(!cell.is_null());
    unsafe {
        for _ in 0..5 {
            spsc_cell_fetch_add_relaxed(cell, 1);
        }
        assert_eq!(spsc_cell_load_acquire(cell), 5);
        spsc_cell_destroy(cell);
    }
}

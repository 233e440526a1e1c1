/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Producer / Consumer Handles
//!
//! Single-role handles over one shared [`AtomicCell`]. The producer can only
//! write, the consumer can only read, and neither can be cloned, so a cell
//! obtained through [`AtomicCell::split`] has at most one writer and one
//! reader by construction.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

#[cfg(not(loom))]
use std::sync::Arc;

#[cfg(loom)]
use loom::sync::Arc;

use crate::cell::atomic_cell::AtomicCell;

/// Write handle for a split [`AtomicCell`].
///
/// Exposes only the write side of the cell's operation set: release and
/// relaxed stores, and the relaxed fetch-add. The handle is `Send` but not
/// `Clone`, so moving it to a thread makes that thread the cell's unique
/// writer.
///
/// # Example
///
/// ```rust
/// use prism3_spsc::AtomicCell;
///
/// let (producer, consumer) = AtomicCell::split(0);
/// producer.fetch_add_relaxed(1);
/// producer.store_release(10);
/// assert_eq!(consumer.load_acquire(), 10);
/// ```
pub struct Producer {
    cell: Arc<AtomicCell>,
}

impl Producer {
    #[inline]
    pub(crate) fn new(cell: Arc<AtomicCell>) -> Self {
        Self { cell }
    }

    /// Stores a new value with release ordering.
    ///
    /// All memory operations this thread performed before the store become
    /// visible to the consumer once its acquire load observes the value.
    /// See [`AtomicCell::store_release`].
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn store_release(&self, value: i64) {
        self.cell.store_release(value);
    }

    /// Stores a new value with relaxed ordering.
    ///
    /// See [`AtomicCell::store_relaxed`].
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn store_relaxed(&self, value: i64) {
        self.cell.store_relaxed(value);
    }

    /// Adds a delta to the value with relaxed ordering, returning the value
    /// before the addition.
    ///
    /// Wraps on overflow; the delta may be negative. See
    /// [`AtomicCell::fetch_add_relaxed`].
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The value before the addition.
    #[inline]
    pub fn fetch_add_relaxed(&self, delta: i64) -> i64 {
        self.cell.fetch_add_relaxed(delta)
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("value", &self.cell.load_relaxed())
            .finish()
    }
}

/// Read handle for a split [`AtomicCell`].
///
/// Exposes only the read side of the cell's operation set: acquire and
/// relaxed loads. The handle is `Send` but not `Clone`, so moving it to a
/// thread makes that thread the cell's unique reader.
pub struct Consumer {
    cell: Arc<AtomicCell>,
}

impl Consumer {
    #[inline]
    pub(crate) fn new(cell: Arc<AtomicCell>) -> Self {
        Self { cell }
    }

    /// Loads the current value with acquire ordering.
    ///
    /// Synchronizes with the producer's release stores: once this load
    /// observes a release-stored value, everything the producer wrote before
    /// that store is visible. See [`AtomicCell::load_acquire`].
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load_acquire(&self) -> i64 {
        self.cell.load_acquire()
    }

    /// Loads the current value with relaxed ordering.
    ///
    /// See [`AtomicCell::load_relaxed`].
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load_relaxed(&self) -> i64 {
        self.cell.load_relaxed()
    }
}

impl fmt::Debug for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("value", &self.cell.load_relaxed())
            .finish()
    }
}

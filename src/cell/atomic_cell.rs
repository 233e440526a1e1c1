/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic SPSC Cell
//!
//! Provides an atomic 64-bit signed integer cell whose operations carry
//! explicit memory orderings, for single-producer single-consumer exchange.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

#[cfg(not(loom))]
use std::sync::atomic::{
    AtomicI64,
    Ordering,
};

#[cfg(loom)]
use loom::sync::atomic::{
    AtomicI64,
    Ordering,
};

#[cfg(not(loom))]
use std::sync::Arc;

#[cfg(loom)]
use loom::sync::Arc;

use crate::cell::split::{
    Consumer,
    Producer,
};

/// Atomic 64-bit signed integer cell for single-producer single-consumer
/// exchange.
///
/// The cell holds exactly one `i64` and supports a fixed, minimal operation
/// set: acquire and relaxed loads, release and relaxed stores, and a relaxed
/// fetch-add. Unlike general-purpose atomic wrappers, every method names its
/// memory ordering, so the caller always chooses the cheapest ordering that
/// is still correct for its use.
///
/// # Memory Ordering Strategy
///
/// - **Relaxed** operations guarantee only that the access itself is atomic:
///   no load ever observes a torn value. Use them when the integer is read
///   and written purely for its own numeric value, e.g. a monotonic
///   statistic nobody synchronizes on.
/// - **Release** stores paired with **acquire** loads additionally establish
///   a happens-before edge: everything the writer did before the release
///   store is visible to the reader after an acquire load that observes it.
///   Use this pair when the value itself is the signal that other,
///   non-atomic data is now safe to read — the classic publish/subscribe
///   hand-off in SPSC ring buffers.
///
/// There is deliberately no sequentially-consistent mode and no
/// compare-and-swap: under the SPSC contract neither is needed, and omitting
/// them keeps each operation's cost predictable.
///
/// # SPSC Contract
///
/// The ordering guarantees assume at most one thread performs
/// [`store_release`](Self::store_release)/[`store_relaxed`](Self::store_relaxed)/
/// [`fetch_add_relaxed`](Self::fetch_add_relaxed) on a given cell, and at
/// most one other thread performs loads. The cell does not detect or prevent
/// violations; use [`AtomicCell::split`] to have the compiler enforce the
/// discipline instead.
///
/// # Example
///
/// ```rust
/// use prism3_spsc::AtomicCell;
///
/// let cursor = AtomicCell::new(0);
/// assert_eq!(cursor.fetch_add_relaxed(1), 0);
/// assert_eq!(cursor.fetch_add_relaxed(1), 1);
/// assert_eq!(cursor.load_acquire(), 2);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicCell {
    value: AtomicI64,
}

impl AtomicCell {
    /// Creates a new cell holding the given initial value.
    ///
    /// Construction is single-threaded and imposes no ordering.
    ///
    /// # Parameters
    ///
    /// * `initial` - The initial value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_spsc::AtomicCell;
    ///
    /// let cell = AtomicCell::new(42);
    /// assert_eq!(cell.load_relaxed(), 42);
    /// ```
    #[cfg(not(loom))]
    #[inline]
    pub const fn new(initial: i64) -> Self {
        Self {
            value: AtomicI64::new(initial),
        }
    }

    /// Creates a new cell holding the given initial value.
    ///
    /// Non-const under loom, whose atomics cannot be constructed in const
    /// context.
    #[cfg(loom)]
    #[inline]
    pub fn new(initial: i64) -> Self {
        Self {
            value: AtomicI64::new(initial),
        }
    }

    /// Creates a heap-shared cell and splits it into its two role handles.
    ///
    /// The returned [`Producer`] can only write and the returned
    /// [`Consumer`] can only read; neither can be cloned. This makes the
    /// single-writer/single-reader discipline that the ordering guarantees
    /// rest on a compile-time property instead of a documentation comment.
    ///
    /// The cell is freed when the last of the two handles is dropped.
    ///
    /// # Parameters
    ///
    /// * `initial` - The initial value.
    ///
    /// # Returns
    ///
    /// The write handle and the read handle for one shared cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_spsc::AtomicCell;
    /// use std::thread;
    ///
    /// let (producer, consumer) = AtomicCell::split(0);
    /// let writer = thread::spawn(move || producer.store_release(7));
    /// writer.join().unwrap();
    /// assert_eq!(consumer.load_acquire(), 7);
    /// ```
    pub fn split(initial: i64) -> (Producer, Consumer) {
        let cell = Arc::new(Self::new(initial));
        (Producer::new(cell.clone()), Consumer::new(cell))
    }

    /// Loads the current value with acquire ordering.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Acquire` ordering: if the writer performed a `Release` store
    /// and this load observes its value, every memory operation the writer
    /// performed before that store is visible to this thread afterwards.
    ///
    /// This is the load to use when the observed value is a signal that
    /// other, non-atomic data is ready.
    ///
    /// # Returns
    ///
    /// The current value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_spsc::AtomicCell;
    ///
    /// let cell = AtomicCell::new(5);
    /// assert_eq!(cell.load_acquire(), 5);
    /// ```
    #[inline]
    pub fn load_acquire(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }

    /// Loads the current value with relaxed ordering.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering: the read itself is atomic (never torn), but
    /// no ordering is established relative to other memory operations. Use
    /// this when only the numeric value matters.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load_relaxed(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Stores a new value with release ordering.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Release` ordering: every memory operation this thread performed
    /// before the store becomes visible to any thread that subsequently
    /// performs an `Acquire` load observing this value.
    ///
    /// This is the store to use for publishing: write the payload first,
    /// then release-store the new cursor or sequence number.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_spsc::AtomicCell;
    ///
    /// let cell = AtomicCell::new(0);
    /// cell.store_release(42);
    /// assert_eq!(cell.load_acquire(), 42);
    /// ```
    #[inline]
    pub fn store_release(&self, value: i64) {
        self.value.store(value, Ordering::Release);
    }

    /// Stores a new value with relaxed ordering.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering: the write is atomic but publishes nothing
    /// beyond the value itself.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn store_relaxed(&self, value: i64) {
        self.value.store(value, Ordering::Relaxed);
    }

    /// Adds a delta to the value, returning the value as it was immediately
    /// before the addition.
    ///
    /// The addition wraps on overflow with two's-complement semantics, and
    /// the delta may be negative.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering: counting is the intended use, and a pure
    /// counter needs atomicity of the read-modify-write step but no
    /// synchronization of other data. If the new value must publish a
    /// payload, follow the addition with a
    /// [`store_release`](Self::store_release) of the resulting sequence.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add; may be negative.
    ///
    /// # Returns
    ///
    /// The value before the addition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_spsc::AtomicCell;
    ///
    /// let counter = AtomicCell::new(0);
    /// assert_eq!(counter.fetch_add_relaxed(5), 0);
    /// assert_eq!(counter.fetch_add_relaxed(-2), 5);
    /// assert_eq!(counter.load_relaxed(), 3);
    /// ```
    #[inline]
    pub fn fetch_add_relaxed(&self, delta: i64) -> i64 {
        self.value.fetch_add(delta, Ordering::Relaxed)
    }

    /// Gets a reference to the underlying atomic integer.
    ///
    /// This allows direct access to the full standard-library operation set
    /// for advanced use cases that need an ordering or operation this cell
    /// deliberately omits. Code that reaches through this escape hatch is
    /// outside the SPSC contract and must justify its orderings itself.
    ///
    /// # Returns
    ///
    /// A reference to the underlying 64-bit atomic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_spsc::AtomicCell;
    /// use std::sync::atomic::Ordering;
    ///
    /// let cell = AtomicCell::new(0);
    /// cell.inner().store(42, Ordering::Relaxed);
    /// assert_eq!(cell.load_relaxed(), 42);
    /// ```
    #[inline]
    pub fn inner(&self) -> &AtomicI64 {
        &self.value
    }

    /// Consumes the cell and returns the contained value.
    ///
    /// Safe because ownership guarantees no other thread is accessing the
    /// cell.
    ///
    /// # Returns
    ///
    /// The last value stored.
    #[cfg(not(loom))]
    #[inline]
    pub fn into_inner(self) -> i64 {
        self.value.into_inner()
    }
}

impl Default for AtomicCell {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i64> for AtomicCell {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCell")
            .field("value", &self.load_relaxed())
            .finish()
    }
}

impl fmt::Display for AtomicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load_relaxed())
    }
}

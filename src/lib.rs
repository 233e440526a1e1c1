/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-spsc
//!
//! An opaque, heap-allocatable 64-bit atomic cell for single-producer
//! single-consumer (SPSC) hand-off, with explicit memory orderings.
//!
//! The crate provides exactly one primitive, [`AtomicCell`]: a 64-bit signed
//! integer that one thread writes and one other thread reads, without locks.
//! Every operation names its memory ordering in its signature — acquire,
//! release, or relaxed — so the cheapest correct ordering is always an
//! explicit choice, never a hidden default.
//!
//! ## Design Goals
//!
//! - **Minimal surface**: loads, stores, and fetch-add only. No
//!   compare-and-swap, no sequentially-consistent mode, no other integer
//!   widths. The SPSC contract makes them unnecessary, and a small surface
//!   keeps each operation's cost predictable.
//! - **Explicit orderings**: the ordering is part of the method name
//!   (`load_acquire`, `store_release`, ...), mirroring the underlying
//!   hardware model instead of hiding it behind a default.
//! - **Statically-checked roles**: [`AtomicCell::split`] yields a
//!   [`Producer`] that can only write and a [`Consumer`] that can only read,
//!   turning the single-writer/single-reader discipline into a compile-time
//!   property.
//! - **Cross-language use**: the [`ffi`] module exposes the same operation
//!   set over an opaque C handle for callers that cannot express atomics
//!   natively.
//!
//! ## Example
//!
//! ```rust
//! use prism3_spsc::AtomicCell;
//! use std::thread;
//!
//! let (producer, consumer) = AtomicCell::split(0);
//!
//! let writer = thread::spawn(move || {
//!     for seq in 1..=100 {
//!         producer.store_release(seq);
//!     }
//! });
//!
//! let reader = thread::spawn(move || {
//!     while consumer.load_acquire() < 100 {
//!         std::thread::yield_now();
//!     }
//!     consumer.load_acquire()
//! });
//!
//! writer.join().unwrap();
//! assert_eq!(reader.join().unwrap(), 100);
//! ```
//!
//! ## SPSC Contract
//!
//! The ordering guarantees assume at most one thread performs stores and
//! fetch-adds on a given cell, and at most one other thread performs loads.
//! The raw [`AtomicCell`] leaves that discipline to the caller; the
//! [`Producer`]/[`Consumer`] pair enforces it by construction.
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod cell;
pub mod ffi;

// Re-export the cell types at the crate root
pub use cell::{
    AtomicCell,
    Consumer,
    Producer,
};

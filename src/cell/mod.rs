/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # SPSC Atomic Cell
//!
//! Provides the [`AtomicCell`] primitive — a 64-bit signed integer with
//! explicitly-ordered atomic operations — and the [`Producer`]/[`Consumer`]
//! handle pair that makes the single-producer single-consumer discipline a
//! compile-time invariant.
//!
//! # Author
//!
//! Haixing Hu

mod atomic_cell;
mod split;

pub use atomic_cell::AtomicCell;
pub use split::{
    Consumer,
    Producer,
};

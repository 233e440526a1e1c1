/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Acquire/Release Hand-off Example
//!
//! Demonstrates publishing a payload with a release store and observing it
//! with an acquire load.

use prism3_spsc::AtomicCell;
use std::thread;

fn main() {
    println!("=== Acquire/Release Hand-off Example ===\n");

    // The payload is written with a relaxed store; only the sequence cell
    // carries the release/acquire edge that makes it visible.
    let (payload_p, payload_c) = AtomicCell::split(0);
    let (seq_p, seq_c) = AtomicCell::split(0);
    let rounds = 10;

    println!("1. Publishing {} payloads:", rounds);
    let writer = thread::spawn(move || {
        for i in 1..=rounds {
            payload_p.store_relaxed(i * 100);
            seq_p.store_release(i);
        }
    });

    let reader = thread::spawn(move || {
        for i in 1..=rounds {
            while seq_c.load_acquire() < i {
                thread::yield_now();
            }
            let payload = payload_c.load_relaxed();
            println!("   Observed sequence {} with payload {}", i, payload);
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();

    println!("\n=== Example completed ===");
}

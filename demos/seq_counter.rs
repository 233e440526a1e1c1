/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Sequence Counter Example
//!
//! Demonstrates using the cell as a single-writer sequence counter.

use prism3_spsc::AtomicCell;
use std::thread;

fn main() {
    println!("=== SPSC Sequence Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = AtomicCell::new(0);
    println!("   Initial value: {}", counter.load_relaxed());

    let old = counter.fetch_add_relaxed(1);
    println!("   fetch_add(1) returned {}, value is now {}", old, counter.load_relaxed());

    let old = counter.fetch_add_relaxed(5);
    println!("   fetch_add(5) returned {}, value is now {}", old, counter.load_relaxed());

    let old = counter.fetch_add_relaxed(-2);
    println!("   fetch_add(-2) returned {}, value is now {}", old, counter.load_relaxed());

    // Example 2: Single writer, single reader
    println!("\n2. Single Writer, Single Reader:");
    let (producer, consumer) = AtomicCell::split(0);
    let increments = 100_000;

    let writer = thread::spawn(move || {
        for _ in 0..increments {
            producer.fetch_add_relaxed(1);
        }
    });

    let reader = thread::spawn(move || {
        let mut last = 0;
        while last < increments {
            last = consumer.load_relaxed();
        }
        last
    });

    writer.join().unwrap();
    let observed = reader.join().unwrap();
    println!("   Reader observed final count: {} (expected: {})", observed, increments);

    println!("\n=== Example completed ===");
}

/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_spsc::AtomicCell;
use std::sync::Arc;
use std::thread;

const ITERATIONS: i64 = 10_000;

// One thread release-stores sequence numbers after relaxed-storing a
// payload; the other acquire-loads the sequence and must then see a payload
// at least as fresh. Exercises the publish/subscribe hand-off under
// contention.
#[test]
fn test_spsc_release_acquire_handoff() {
    let payload = Arc::new(AtomicCell::new(0));
    let seq = Arc::new(AtomicCell::new(0));

    let payload_w = payload.clone();
    let seq_w = seq.clone();
    let writer = thread::spawn(move || {
        for i in 1..=ITERATIONS {
            payload_w.store_relaxed(i * 2);
            seq_w.store_release(i);
        }
    });

    let reader = thread::spawn(move || {
        for i in 1..=ITERATIONS {
            while seq.load_acquire() < i {
                thread::yield_now();
            }
            // The payload write preceding the observed release store must
            // be visible.
            assert!(payload.load_relaxed() >= i * 2);
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();
}

// Single writer increments, single reader polls. The reader must only ever
// observe values in [0, ITERATIONS], and the final value is exact.
#[test]
fn test_relaxed_counter_total() {
    let counter = Arc::new(AtomicCell::new(0));

    let counter_w = counter.clone();
    let writer = thread::spawn(move || {
        for _ in 0..ITERATIONS {
            counter_w.fetch_add_relaxed(1);
        }
    });

    let counter_r = counter.clone();
    let reader = thread::spawn(move || {
        loop {
            let v = counter_r.load_relaxed();
            assert!((0..=ITERATIONS).contains(&v));
            if v == ITERATIONS {
                break;
            }
            thread::yield_now();
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(counter.load_acquire(), ITERATIONS);
}

// The writer alternates between the all-zeros and all-ones bit patterns; a
// torn 64-bit write would surface as a value that is neither.
#[test]
fn test_no_torn_values() {
    let cell = Arc::new(AtomicCell::new(0));

    let cell_w = cell.clone();
    let writer = thread::spawn(move || {
        for i in 0..ITERATIONS {
            cell_w.store_relaxed(if i % 2 == 0 { -1 } else { 0 });
        }
    });

    let cell_r = cell.clone();
    let reader = thread::spawn(move || {
        for _ in 0..ITERATIONS {
            let v = cell_r.load_relaxed();
            assert!(v == 0 || v == -1, "observed torn value {v:#x}");
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();
}

// With a single writer, fetch_add must return the strictly increasing
// sequence 0, 1, 2, ... regardless of a concurrent reader.
#[test]
fn test_fetch_add_return_sequence() {
    let counter = Arc::new(AtomicCell::new(0));

    let counter_r = counter.clone();
    let reader = thread::spawn(move || {
        while counter_r.load_acquire() < ITERATIONS {
            thread::yield_now();
        }
    });

    let mut expected = 0;
    for _ in 0..ITERATIONS {
        assert_eq!(counter.fetch_add_relaxed(1), expected);
        expected += 1;
    }

    reader.join().unwrap();
}

// The same hand-off through the statically-typed handles.
#[test]
fn test_split_handoff_stress() {
    let (payload_p, payload_c) = AtomicCell::split(0);
    let (seq_p, seq_c) = AtomicCell::split(0);

    let writer = thread::spawn(move || {
        for i in 1..=ITERATIONS {
            payload_p.store_relaxed(i);
            seq_p.store_release(i);
        }
    });

    let reader = thread::spawn(move || {
        for i in 1..=ITERATIONS {
            while seq_c.load_acquire() < i {
                thread::yield_now();
            }
            assert!(payload_c.load_relaxed() >= i);
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();
}

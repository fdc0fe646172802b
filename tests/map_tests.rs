//! End-to-end tests for the public pixfn API.
//!
//! Covers the composition laws, worker-count independence of `map`, and the
//! concrete 24-element and channel-isolation scenarios.

use pixfn::color::{blue, green, invert, red};
use pixfn::{combine, combine3, constant, divide, identity, map, map_rows, MapError};
use proptest::prelude::*;

#[test]
fn divide_24_elements_into_5_gives_6_partitions() {
    let pixels = vec![0u32; 24];
    let partitions = divide(&pixels, 5).unwrap();

    assert_eq!(partitions.len(), 6);
    assert!(partitions.iter().all(|p| p.len() == 4));
    assert_eq!(partitions.iter().map(|p| p.len()).sum::<usize>(), 24);
    assert_eq!(partitions[0].range(), 0..4);
    assert_eq!(partitions[5].range(), 20..24);
}

#[test]
fn map_constant_over_24_elements_with_4_workers() {
    let mut pixels: Vec<u32> = (0..24).collect();
    map(4, constant(42), &mut pixels).unwrap();
    assert_eq!(pixels, vec![42; 24]);
}

#[test]
fn isolate_blue_and_invert_then_blue() {
    let v = 0xFF112233;
    assert_eq!(blue(v), 0xFF000033);

    let inverted = (0xFFFFFFFF - v) | 0xFF000000;
    assert_eq!(combine(invert, blue)(v), blue(inverted));
}

#[test]
fn invert_then_blue_over_blank_frame_is_pure_blue() {
    let mut pixels = vec![0u32; 320 * 200];
    map(8, combine(invert, blue), &mut pixels).unwrap();

    let first = pixfn::Argb(pixels[0]);
    assert_eq!((first.r(), first.g(), first.b()), (0, 0, 255));
    assert_eq!(first.to_string(), "rgb(0, 0, 255)");
}

#[test]
fn zero_workers_and_zero_partitions_are_rejected() {
    let mut pixels = vec![7u32; 24];
    assert_eq!(
        map(0, invert, &mut pixels),
        Err(MapError::InvalidWorkerCount { count: 0 })
    );
    assert_eq!(
        divide(&pixels, 0),
        Err(MapError::InvalidPartitionCount { count: 0, len: 24 })
    );
    assert_eq!(pixels, vec![7u32; 24]);
}

#[test]
fn errors_describe_the_violated_precondition() {
    let msg = MapError::InvalidWorkerCount { count: 0 }.to_string();
    assert!(msg.contains("worker count 0"), "{msg}");
    let msg = MapError::InvalidPartitionCount { count: 9, len: 4 }.to_string();
    assert!(msg.contains("partition count 9"), "{msg}");
}

proptest! {
    #[test]
    fn combine_is_sequential_application(x in any::<u32>()) {
        prop_assert_eq!(combine(invert, green)(x), green(invert(x)));
        prop_assert_eq!(combine(red, invert)(x), invert(red(x)));
    }

    #[test]
    fn combine3_is_associative(x in any::<u32>()) {
        let three = combine3(invert, red, blue);
        let right = combine(invert, combine(red, blue));
        let left = combine(combine(invert, red), blue);
        prop_assert_eq!(three(x), right(x));
        prop_assert_eq!(three(x), left(x));
    }

    #[test]
    fn map_is_independent_of_worker_count(
        (original, workers) in prop::collection::vec(any::<u32>(), 1..512)
            .prop_flat_map(|v| { let len = v.len(); (Just(v), 1..=len) })
    ) {
        let f = combine(invert, green);
        let expected: Vec<u32> = original.iter().map(|&v| f(v)).collect();

        let mut pixels = original.clone();
        map(workers, &f, &mut pixels).unwrap();
        prop_assert_eq!(pixels, expected);
    }

    #[test]
    fn map_identity_is_bitwise_noop(
        original in prop::collection::vec(any::<u32>(), 0..256),
        workers in 1usize..32,
    ) {
        let mut pixels = original.clone();
        map(workers, identity(), &mut pixels).unwrap();
        prop_assert_eq!(pixels, original);
    }

    #[test]
    fn map_rows_agrees_with_map(rows in 1usize..24, pitch in 1usize..24, workers in 1usize..12) {
        let original: Vec<u32> = (0..(rows * pitch) as u32).collect();
        let mut linear = original.clone();
        let mut by_row = original;

        map(workers, invert, &mut linear).unwrap();
        map_rows(workers, pitch, invert, &mut by_row).unwrap();
        prop_assert_eq!(linear, by_row);
    }
}

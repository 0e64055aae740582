//! Integration tests for the public generator API.
//!
//! Verifies the entry points are exported at the crate root and keep their
//! range contracts when called from outside the crate.

use prng_generators::{
    linear_congruent_method, middle_products, std_randint, FixedClock, GeneratorKind,
    LinearCongruentialGenerator, Sample, SequenceGenerator, BUILTIN_MAX_VALUE, MAX_VALUE,
};

/// Each entry point returns exactly the requested number of values.
#[test]
fn test_entry_points_lengths() {
    for size in [0, 1, 50, 1_000] {
        assert_eq!(linear_congruent_method(size).len(), size);
        assert_eq!(middle_products(size).len(), size);
        assert_eq!(std_randint(size).len(), size);
    }
}

/// Custom generators stay below 16384; the builtin one may reach it.
#[test]
fn test_entry_points_ranges() {
    let lcg = linear_congruent_method(10_000);
    let mp = middle_products(10_000);
    let builtin = std_randint(10_000);

    assert!(lcg.iter().all(|&v| v <= MAX_VALUE));
    assert!(mp.iter().all(|&v| v <= MAX_VALUE));
    assert!(builtin.iter().all(|&v| v <= BUILTIN_MAX_VALUE));
}

/// Generators are usable generically through the trait.
#[test]
fn test_generic_usage() {
    fn draw<G: SequenceGenerator>(mut generator: G, size: usize) -> Sample {
        generator.generate(size)
    }

    let sample = draw(
        LinearCongruentialGenerator::with_clock(FixedClock::new(100_000, 0)),
        3,
    );
    assert_eq!(sample.values(), &[1_013, 2_013, 3_013]);
}

/// Generator kinds serialise to their short identifiers.
#[test]
fn test_kind_display() {
    let ids: Vec<String> = GeneratorKind::ALL.iter().map(|k| k.to_string()).collect();
    assert_eq!(ids, vec!["lcg", "middle-products", "builtin"]);
}

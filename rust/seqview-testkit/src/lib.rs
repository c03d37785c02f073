//! Test utilities for the seqview crates.
//!
//! Provides seeded generators for sequences, sub-ranges and predicates, so
//! that randomized tests are reproducible from a single seed.

pub mod data_gen;

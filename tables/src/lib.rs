#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Reference data for DOOM-format levels.
//!
//! Provides the classification of every scored thing type and the built-in
//! baseline profiles. Everything is
//! returned by value so callers can inject, extend or replace it.

mod baselines;
mod classification;

pub use baselines::{builtin_baselines, DEFAULT_BASELINE};
pub use classification::doom_classification;

/// Numeric conversion helpers.
///
/// This module provides safe functions for converting integer literals to
/// floating-point values without risking silent data loss. Use these
/// helpers whenever an `i64` must become an `f64` in a way that
/// guarantees correctness.
pub mod num;

/// Binary operator evaluation logic.
///
/// Applies the four arithmetic operations to already-evaluated operands,
/// checking the divisor before dividing.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the post-order tree walk and the shared result type.
pub mod core;

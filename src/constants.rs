//! Crate-wide constants.

/// Base currency assumed for a rate source that does not declare one.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Fractional digits kept when normalizing a floating-point amount.
pub const AMOUNT_INPUT_SCALE: u32 = 6;

/// Fractional digits of every conversion result.
pub const AMOUNT_OUTPUT_SCALE: u32 = 2;

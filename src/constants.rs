// Digit-length ceilings for the reduction engine. Inputs outside these
// bounds are clamped rather than rejected.

/// Longest leading-zero run a fractional part may carry. Runs at or past
/// this length are capped to one less, i.e. the smallest representable
/// magnitude is just below 10^-30.
pub(crate) const MAX_LEADING_ZEROS: usize = 30;

/// Most integer digits a value may carry before it collapses to zero.
/// A 21 digit integer is still in range.
pub(crate) const MAX_INTEGER_DIGITS: usize = 21;

/// Fractional digits produced when expanding a negative exponent out of
/// scientific notation. The same cap bounds the zero padding for oversized
/// positive exponents, whose results collapse through the integer ceiling.
pub(crate) const MAX_SCI_FRACTION: usize = 100;

/// Floor applied to the maximum fractional length when the input arrived
/// in scientific notation.
pub(crate) const SCI_FRACTION_FLOOR: usize = 20;

/// Fractional digits kept by each divide-by-1000 step during unit scaling.
pub(crate) const SCALE_STEP_FRACTION: usize = 2;

/// Scratch capacity for digit-string arithmetic: covers the widest integer
/// (21 digits plus carry) and the widest significant-digit run.
pub(crate) const DIGIT_BUFFER_SIZE: usize = 48;

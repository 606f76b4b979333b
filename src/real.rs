//! Working precision abstraction.
//!
//! The host selects the precision of one solve call through the
//! coefficient matrix's class tag; every buffer in that call is then
//! decoded into the same [`Real`] type, and the solution vectors come
//! back at that precision.

use std::fmt;

use num_traits::Float;

/// Working numeric type for one solve call.
///
/// Implemented for `f64` and `f32` only; the conversions are the plain
/// `as`-style casts, so decoding a double buffer into `f32` narrows with
/// the usual rounding and never fails.
pub trait Real: Float + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Narrowing conversion from the projector's intermediate `f64`.
    fn from_f64(v: f64) -> Self;

    /// Widening conversion for diagnostics and selector decoding.
    fn into_f64(self) -> f64;
}

impl Real for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }

    fn into_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_f64() {
        assert_eq!(f64::from_f64(1.5), 1.5);
        assert_eq!(1.5f64.into_f64(), 1.5);
    }

    #[test]
    fn test_narrowing_f32() {
        assert_eq!(f32::from_f64(0.25), 0.25f32);
        assert!(f32::from_f64(f64::NAN).is_nan());
    }
}

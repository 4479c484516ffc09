#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod curve;
pub mod parse;
pub mod precompile;

#[cfg(test)]
mod test_utils;

pub use arithmetic::{AffinePoint, FieldElement, Montgomery};
pub use bigint::U256;
pub use curve::{Bn254, Curve};
pub use precompile::{CallRegion, EcAdd, NoopBurner, ResourceBurner};

use thiserror::Error;

/// Reasons the group law refuses its inputs.
///
/// The host never sees these: every variant ends in the same failure path
/// (burn the whole budget, abort, no output). They exist for logging and
/// for tests.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcAddError {
    #[error("coordinate is not below the field modulus")]
    CoordinateOutOfRange,
    #[error("point does not satisfy the curve equation")]
    PointNotOnCurve,
    #[error("points share an x coordinate but are neither equal nor opposite")]
    InvalidSameXDifferentY,
    #[error("slope denominator is zero")]
    ZeroDenominator,
}

/// An aborted precompile call. Carries nothing the caller could use to
/// tell one rejection from another.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("call aborted after burning {burned} gas")]
pub struct Aborted {
    pub burned: u64,
}

use super::field::FieldElement;
use super::montgomery::Montgomery;
use crate::curve::Curve;
use crate::parse::{OUTPUT_LENGTH, WORD_SIZE};
use crate::{EcAddError, U256};

use bigint::Encoding;

use std::fmt;
use std::marker::PhantomData;

/// Affine point as supplied by the caller: two raw 256-bit words, not yet
/// validated. `(0, 0)` is the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint<C: Curve> {
    x: U256,
    y: U256,
    _curve: PhantomData<C>,
}

impl<C: Curve> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "x: {}", self.x)?;
        writeln!(f, "y: {}", self.y)
    }
}

impl<C: Curve> std::ops::Neg for AffinePoint<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(self.x, (-FieldElement::<C>::new(self.y)).0)
    }
}

impl<C: Curve> AffinePoint<C> {
    pub const INFINITY: Self = Self {
        x: U256::ZERO,
        y: U256::ZERO,
        _curve: PhantomData,
    };

    pub const GENERATOR: Self = Self {
        x: C::GENERATOR_X,
        y: C::GENERATOR_Y,
        _curve: PhantomData,
    };

    pub fn new(x: U256, y: U256) -> Self {
        Self {
            x,
            y,
            _curve: PhantomData,
        }
    }

    fn from_field(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self::new(x.0, y.0)
    }

    pub fn x(&self) -> &U256 {
        &self.x
    }

    pub fn y(&self) -> &U256 {
        &self.y
    }

    pub fn is_infinity(&self) -> bool {
        self.x == U256::ZERO && self.y == U256::ZERO
    }

    pub fn is_on_group_order(&self) -> bool {
        FieldElement::<C>::is_on_group_order(&self.x)
            && FieldElement::<C>::is_on_group_order(&self.y)
    }

    /// `y^2 == x^3 + b`, false for coordinates that are not field elements.
    pub fn is_on_curve(&self) -> bool {
        match (FieldElement::try_new(self.x), FieldElement::try_new(self.y)) {
            (Some(x), Some(y)) => Self::satisfies_equation(&x, &y),
            _ => false,
        }
    }

    fn satisfies_equation(x: &FieldElement<C>, y: &FieldElement<C>) -> bool {
        y.square() == x.square() * *x + FieldElement::new(C::COEFF_B)
    }

    /// Range check followed by the curve equation. Never call this on the
    /// point at infinity, which is valid by definition.
    pub fn validate(&self) -> Result<(FieldElement<C>, FieldElement<C>), EcAddError> {
        let x = FieldElement::try_new(self.x).ok_or(EcAddError::CoordinateOutOfRange)?;
        let y = FieldElement::try_new(self.y).ok_or(EcAddError::CoordinateOutOfRange)?;
        if !Self::satisfies_equation(&x, &y) {
            return Err(EcAddError::PointNotOnCurve);
        }
        Ok((x, y))
    }

    /// Group law on two caller-supplied points.
    ///
    /// Infinity short-circuits first: when exactly one input is infinity,
    /// only the other one is validated. Otherwise both points are
    /// validated before any arithmetic happens.
    pub fn add(&self, rhs: &Self) -> Result<Self, EcAddError> {
        match (self.is_infinity(), rhs.is_infinity()) {
            (true, true) => {
                tracing::trace!("both points at infinity");
                Ok(Self::INFINITY)
            }
            (true, false) => {
                rhs.validate()?;
                tracing::trace!("left point at infinity");
                Ok(*rhs)
            }
            (false, true) => {
                self.validate()?;
                tracing::trace!("right point at infinity");
                Ok(*self)
            }
            (false, false) => {
                let (x1, y1) = self.validate()?;
                let (x2, y2) = rhs.validate()?;
                Self::combine(x1, y1, x2, y2)
            }
        }
    }

    pub fn double(&self) -> Result<Self, EcAddError> {
        self.add(self)
    }

    /// Addition of two finite, validated points.
    pub(crate) fn combine(
        x1: FieldElement<C>,
        y1: FieldElement<C>,
        x2: FieldElement<C>,
        y2: FieldElement<C>,
    ) -> Result<Self, EcAddError> {
        if x1 == x2 {
            if y2 == -y1 {
                tracing::trace!("points are inverses of each other");
                return Ok(Self::INFINITY);
            }
            if y1 != y2 {
                return Err(EcAddError::InvalidSameXDifferentY);
            }
            tracing::trace!("doubling");
            return Self::double_finite(x1, y1);
        }
        tracing::trace!("generic addition");
        Self::add_distinct(x1, y1, x2, y2)
    }

    // slope = 3 * x^2 / (2 * y)
    fn double_finite(x: FieldElement<C>, y: FieldElement<C>) -> Result<Self, EcAddError> {
        let x = x.into_montgomery();
        let y = y.into_montgomery();

        let x_squared = x.square();
        let numerator = x_squared + x_squared + x_squared;
        let denominator = y + y;
        let slope = Self::slope(&numerator, &denominator)?;

        let x3 = slope.square() - (x + x);
        let y3 = slope * (x - x3) - y;
        Ok(Self::from_field(x3.into_standard(), y3.into_standard()))
    }

    // slope = (y2 - y1) / (x2 - x1)
    fn add_distinct(
        x1: FieldElement<C>,
        y1: FieldElement<C>,
        x2: FieldElement<C>,
        y2: FieldElement<C>,
    ) -> Result<Self, EcAddError> {
        let x1 = x1.into_montgomery();
        let y1 = y1.into_montgomery();
        let x2 = x2.into_montgomery();
        let y2 = y2.into_montgomery();

        let slope = Self::slope(&(y2 - y1), &(x2 - x1))?;

        let x3 = slope.square() - x1 - x2;
        let y3 = slope * (x1 - x3) - y1;
        Ok(Self::from_field(x3.into_standard(), y3.into_standard()))
    }

    fn slope(
        numerator: &Montgomery<C>,
        denominator: &Montgomery<C>,
    ) -> Result<Montgomery<C>, EcAddError> {
        // unreachable for validated inputs: 2y == 0 and x1 == x2 are both
        // caught by the branches above
        debug_assert!(
            denominator != &Montgomery::ZERO,
            "zero slope denominator"
        );
        numerator.div(denominator).ok_or(EcAddError::ZeroDenominator)
    }

    /// Big-endian `x || y`.
    pub fn to_bytes(&self) -> [u8; OUTPUT_LENGTH] {
        let mut bytes = [0u8; OUTPUT_LENGTH];
        bytes[..WORD_SIZE].copy_from_slice(&self.x.to_be_bytes());
        bytes[WORD_SIZE..].copy_from_slice(&self.y.to_be_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; OUTPUT_LENGTH]) -> Self {
        Self::new(
            U256::from_be_slice(&bytes[..WORD_SIZE]),
            U256::from_be_slice(&bytes[WORD_SIZE..]),
        )
    }
}

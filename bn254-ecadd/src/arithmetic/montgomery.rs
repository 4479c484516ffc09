use super::field::FieldElement;
use super::inverse::binary_inverse;
use super::modular::{impl_modular_ops, Modular};
use crate::curve::Curve;

use bigint::{Integer, Limb, U256};

use std::marker::PhantomData;

/// Field element in Montgomery form, `a * R mod N` with `R = 2^256`.
///
/// Values of this type only come from [`FieldElement::into_montgomery`] or
/// from other Montgomery operations, and only leave through
/// [`Montgomery::into_standard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Montgomery<C: Curve>(U256, PhantomData<C>);

/// Montgomery reduction of the double-width value `low + 2^256 * high`.
///
/// Requires `low + 2^256 * high < N * 2^256`; returns
/// `(low + 2^256 * high) * 2^-256 mod N`, fully reduced.
pub(crate) fn redc<C: Curve>(low: &U256, high: &U256) -> U256 {
    let modulus = C::PRIME_MODULUS;
    let q = low.wrapping_mul(&C::N_PRIME);
    let (qn_low, qn_high) = q.mul_wide(&modulus);
    // the low half of the sum is zero by construction of q; only its
    // carry survives into the high half
    let (_, carry) = low.adc(&qn_low, Limb::ZERO);
    let (sum, overflow) = high.adc(&qn_high, carry);
    // the true sum is below 2N; without a spare bit it may not fit in 256 bits
    if overflow.0 != 0 || sum >= modulus {
        sum.wrapping_sub(&modulus)
    } else {
        sum
    }
}

impl<C: Curve> Montgomery<C> {
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);
    pub const ONE: Self = Self(C::R, PhantomData);

    /// Reduces a `(low, high)` product of two values below the modulus.
    pub(crate) fn from_product(product: &(U256, U256)) -> Self {
        Self(redc::<C>(&product.0, &product.1), PhantomData)
    }

    /// The only way out of Montgomery form: `REDC(m, 0) = m * R^-1 mod N`.
    pub fn into_standard(self) -> FieldElement<C> {
        FieldElement(redc::<C>(&self.0, &U256::ZERO), PhantomData)
    }

    /// Raw Montgomery word.
    pub fn inner(&self) -> &U256 {
        &self.0
    }

    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Square and multiply over the bits of `exponent`, least significant
    /// first.
    pub fn pow(&self, exponent: &U256) -> Self {
        let mut base = *self;
        let mut acc = Self::ONE;
        let mut exponent = *exponent;
        while exponent != U256::ZERO {
            if bool::from(exponent.is_odd()) {
                acc = acc * base;
            }
            base = base.square();
            exponent = exponent.shr_vartime(1);
        }
        acc
    }

    /// Multiplicative inverse, still in Montgomery form. `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        binary_inverse::<C>(&self.0).map(|inverse| Self(inverse, PhantomData))
    }

    /// `self / rhs`, `None` if `rhs` is zero.
    pub fn div(&self, rhs: &Self) -> Option<Self> {
        Some(*self * rhs.invert()?)
    }
}

impl<C: Curve> Modular for Montgomery<C> {
    const MODULUS: U256 = C::PRIME_MODULUS;

    fn from_reduced(number: U256) -> Self {
        Self(number, PhantomData)
    }

    fn word(&self) -> &U256 {
        &self.0
    }
}

impl_modular_ops!(Montgomery);

impl<C: Curve> std::ops::Mul for Montgomery<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_product(&self.0.mul_wide(&rhs.0))
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b Montgomery<C>> for &'a Montgomery<C> {
    type Output = Montgomery<C>;
    fn mul(self, rhs: &'b Montgomery<C>) -> Self::Output {
        *self * *rhs
    }
}

impl<C: Curve> std::ops::MulAssign for Montgomery<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

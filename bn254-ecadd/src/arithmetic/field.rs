use super::modular::{impl_modular_ops, mul_mod_u256, Modular};
use super::montgomery::Montgomery;
use crate::curve::Curve;

use bigint::{NonZero, U256};

use std::marker::PhantomData;

/// Field element in standard form, always below the modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> FieldElement<C> {
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);
    pub const ONE: Self = Self(U256::ONE, PhantomData);

    /// Reduces `number` modulo the field modulus.
    pub fn new(number: U256) -> Self {
        let reduced = if number < C::PRIME_MODULUS {
            number
        } else {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            number % NonZero::new(C::PRIME_MODULUS).unwrap()
        };

        Self(reduced, PhantomData)
    }

    /// Accepts `number` only if it is already a field element. Caller
    /// supplied coordinates go through here and are never reduced.
    pub fn try_new(number: U256) -> Option<Self> {
        if Self::is_on_group_order(&number) {
            Some(Self(number, PhantomData))
        } else {
            None
        }
    }

    pub fn is_on_group_order(number: &U256) -> bool {
        number < &C::PRIME_MODULUS
    }

    pub fn inner(&self) -> &U256 {
        &self.0
    }

    pub fn square(&self) -> Self {
        *self * *self
    }

    /// The only way into Montgomery form: `REDC(a * R^2) = a * R mod N`.
    pub fn into_montgomery(self) -> Montgomery<C> {
        Montgomery::from_product(&self.0.mul_wide(&C::R2))
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        Some(self.into_montgomery().invert()?.into_standard())
    }
}

impl<C: Curve> Modular for FieldElement<C> {
    const MODULUS: U256 = C::PRIME_MODULUS;

    fn from_reduced(number: U256) -> Self {
        Self(number, PhantomData)
    }

    fn word(&self) -> &U256 {
        &self.0
    }
}

impl_modular_ops!(FieldElement);

impl<C: Curve> std::ops::Mul for FieldElement<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self(mul_mod_u256(&self.0, &rhs.0, &C::PRIME_MODULUS), PhantomData)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn mul(self, rhs: &'b FieldElement<C>) -> Self::Output {
        *self * *rhs
    }
}

impl<C: Curve> std::ops::MulAssign for FieldElement<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

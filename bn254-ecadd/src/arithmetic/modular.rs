use bigint::{NonZero, U256};

/// Addition, subtraction and negation modulo `MODULUS`.
///
/// These are the same operation in standard and in Montgomery form, so both
/// representations share them. Multiplication is not: each representation
/// brings its own.
pub(crate) trait Modular: Sized {
    const MODULUS: U256;

    /// Wraps a word that is already below `MODULUS`.
    fn from_reduced(number: U256) -> Self;

    fn word(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::from_reduced(self.word().add_mod(other.word(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::from_reduced(self.word().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::from_reduced(self.word().sub_mod(other.word(), &Self::MODULUS))
    }
}

/// `lhs * rhs mod modulus` through a full 512-bit product.
pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U256::ZERO.concat(modulus)).unwrap();
    // `mul_wide` yields (lo, hi) while `concat` puts `self` in the high half
    let (lo, hi) = lhs.mul_wide(rhs);
    let product = hi.concat(&lo);
    // `split` yields (hi, lo); 'hi' is zero because the remainder is below
    // a 256 bit modulus
    let (_, rem) = (product % mod512).split();
    rem
}

/// Implements the additive operators of a `Modular` type.
macro_rules! impl_modular_ops {
    ($this:ident) => {
        impl<C: Curve> std::ops::Add for $this<C> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Modular::add(&self, &rhs)
            }
        }

        impl<'a, 'b, C: Curve> std::ops::Add<&'b $this<C>> for &'a $this<C> {
            type Output = $this<C>;
            fn add(self, rhs: &'b $this<C>) -> Self::Output {
                Modular::add(self, rhs)
            }
        }

        impl<C: Curve> std::ops::AddAssign for $this<C> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<C: Curve> std::ops::Sub for $this<C> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Modular::sub(&self, &rhs)
            }
        }

        impl<'a, 'b, C: Curve> std::ops::Sub<&'b $this<C>> for &'a $this<C> {
            type Output = $this<C>;
            fn sub(self, rhs: &'b $this<C>) -> Self::Output {
                Modular::sub(self, rhs)
            }
        }

        impl<C: Curve> std::ops::SubAssign for $this<C> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<C: Curve> std::ops::Neg for $this<C> {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Modular::neg(&self)
            }
        }
    };
}

pub(crate) use impl_modular_ops;

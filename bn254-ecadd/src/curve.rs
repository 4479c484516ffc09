use crate::U256;

/// Short Weierstrass curve `y^2 = x^3 + b` over a prime field, together with
/// the Montgomery constants of that field.
pub trait Curve: Clone + Copy + std::fmt::Debug + PartialEq + Eq + Send + Sync {
    /// Field modulus `N`. Coordinates must be strictly below it.
    const PRIME_MODULUS: U256;
    const COEFF_B: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;
    /// `2^256 mod N`, i.e. one in Montgomery form.
    const R: U256;
    /// `2^512 mod N`
    const R2: U256;
    /// `2^768 mod N`
    const R3: U256;
    /// `-N^-1 mod 2^256`
    const N_PRIME: U256;

    /// Whether the top bit of the modulus is clear, so that adding the
    /// modulus to a reduced value never carries out of 256 bits.
    fn has_spare_bit() -> bool {
        Self::PRIME_MODULUS.shr_vartime(255) == U256::ZERO
    }
}

/// BN254, also known as alt_bn128 (EIP-196).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254;

impl Curve for Bn254 {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");
    const COEFF_B: U256 = U256::from_u8(3);
    const GENERATOR_X: U256 = U256::ONE;
    const GENERATOR_Y: U256 = U256::from_u8(2);
    const R: U256 =
        U256::from_be_hex("0e0a77c19a07df2f666ea36f7879462c0a78eb28f5c70b3dd35d438dc58f0d9d");
    const R2: U256 =
        U256::from_be_hex("06d89f71cab8351f47ab1eff0a417ff6b5e71911d44501fbf32cfc5b538afa89");
    const R3: U256 =
        U256::from_be_hex("20fd6e902d592544ef7f0b0c0ada0afb62f210e6a7283db6b1cd6dafda1530df");
    const N_PRIME: U256 =
        U256::from_be_hex("f57a22b791888c6bd8afcbd01833da809ede7d651eca6ac987d20782e4866389");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::mul_mod_u256;
    use crate::test_utils::{TestCurveNoSpareBit, TestCurveSmallMod};

    use bigint::NonZero;

    fn check_montgomery_constants<C: Curve>() {
        let modulus = C::PRIME_MODULUS;
        // 2^256 mod N == (2^256 - 1) mod N + 1
        let r = (U256::MAX % NonZero::new(modulus).unwrap()).add_mod(&U256::ONE, &modulus);
        assert_eq!(C::R, r);
        assert_eq!(C::R2, mul_mod_u256(&r, &r, &modulus));
        assert_eq!(C::R3, mul_mod_u256(&C::R2, &r, &modulus));
        // N * N' == -1 mod 2^256
        assert_eq!(modulus.wrapping_mul(&C::N_PRIME), U256::MAX);
    }

    #[test]
    fn montgomery_constants() {
        check_montgomery_constants::<Bn254>();
        check_montgomery_constants::<TestCurveNoSpareBit>();
        check_montgomery_constants::<TestCurveSmallMod>();
    }

    #[test]
    fn spare_bit() {
        assert!(Bn254::has_spare_bit());
        assert!(TestCurveSmallMod::has_spare_bit());
        assert!(!TestCurveNoSpareBit::has_spare_bit());
    }

    #[test]
    fn generator_satisfies_curve_equation() {
        let p = Bn254::PRIME_MODULUS;
        let y2 = mul_mod_u256(&Bn254::GENERATOR_Y, &Bn254::GENERATOR_Y, &p);
        let x2 = mul_mod_u256(&Bn254::GENERATOR_X, &Bn254::GENERATOR_X, &p);
        let x3 = mul_mod_u256(&x2, &Bn254::GENERATOR_X, &p);
        assert_eq!(y2, x3.add_mod(&Bn254::COEFF_B, &p));
    }
}

use crate::curve::Curve;
use crate::U256;

use bigint::Encoding;
use num_bigint::BigUint;
use rand::Rng;

/// Curve `y^2 = x^3 + 3` over the secp256k1 base field, whose modulus uses
/// all 256 bits. Exercises every carry that BN254 never produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCurveNoSpareBit;

impl Curve for TestCurveNoSpareBit {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    const COEFF_B: U256 = U256::from_u8(3);
    const GENERATOR_X: U256 = U256::ONE;
    const GENERATOR_Y: U256 = U256::from_u8(2);
    const R: U256 =
        U256::from_be_hex("00000000000000000000000000000000000000000000000000000001000003d1");
    const R2: U256 =
        U256::from_be_hex("000000000000000000000000000000000000000000000001000007a2000e90a1");
    const R3: U256 =
        U256::from_be_hex("000000000000000000000000000000000000000100000b73002bb1e33795f671");
    const N_PRIME: U256 =
        U256::from_be_hex("c9bd1905155383999c46c2c295f2b761bcb223fedc24a059d838091dd2253531");
}

/// `y^2 = x^3 + 3` over `F_17`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCurveSmallMod;

impl Curve for TestCurveSmallMod {
    const PRIME_MODULUS: U256 = U256::from_u8(17);
    const COEFF_B: U256 = U256::from_u8(3);
    const GENERATOR_X: U256 = U256::ONE;
    const GENERATOR_Y: U256 = U256::from_u8(2);
    const R: U256 = U256::ONE;
    const R2: U256 = U256::ONE;
    const R3: U256 = U256::ONE;
    const N_PRIME: U256 =
        U256::from_be_hex("0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f");
}

pub fn to_biguint(value: &U256) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes())
}

pub fn from_biguint(value: &BigUint) -> U256 {
    let bytes = value.to_bytes_be();
    assert!(bytes.len() <= 32, "value does not fit in 256 bits");
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(&bytes);
    U256::from_be_bytes(padded)
}

pub fn modulus<C: Curve>() -> BigUint {
    to_biguint(&C::PRIME_MODULUS)
}

/// Uniform-ish value in `[0, N)`; the bias is irrelevant for tests.
pub fn random_below<C: Curve, R: Rng>(rng: &mut R) -> U256 {
    let bytes: [u8; 32] = rng.gen();
    from_biguint(&(BigUint::from_bytes_be(&bytes) % modulus::<C>()))
}

pub fn random_nonzero_below<C: Curve, R: Rng>(rng: &mut R) -> U256 {
    loop {
        let value = random_below::<C, R>(rng);
        if value != U256::ZERO {
            return value;
        }
    }
}

/// Textbook affine addition on `BigUint`, independent of the engine under
/// test. `None` is the point at infinity.
pub fn reference_add<C: Curve>(
    p: Option<(BigUint, BigUint)>,
    q: Option<(BigUint, BigUint)>,
) -> Option<(BigUint, BigUint)> {
    let n = modulus::<C>();
    let (x1, y1) = match p {
        Some(p) => p,
        None => return q,
    };
    let (x2, y2) = match q {
        Some(q) => q,
        None => return Some((x1, y1)),
    };
    if x1 == x2 && (&y1 + &y2) % &n == BigUint::from(0u8) {
        return None;
    }
    let exponent = &n - BigUint::from(2u8);
    let slope = if x1 == x2 && y1 == y2 {
        let numerator = BigUint::from(3u8) * &x1 * &x1 % &n;
        let denominator = BigUint::from(2u8) * &y1 % &n;
        numerator * denominator.modpow(&exponent, &n) % &n
    } else {
        let numerator = (&y2 + &n - &y1) % &n;
        let denominator = (&x2 + &n - &x1) % &n;
        numerator * denominator.modpow(&exponent, &n) % &n
    };
    let x3 = (&slope * &slope + &n + &n - &x1 - &x2) % &n;
    let y3 = (slope * ((&x1 + &n - &x3) % &n) + &n - &y1) % &n;
    Some((x3, y3))
}

/// Multiplies the generator by `k` with the reference addition.
pub fn reference_multiple<C: Curve>(k: u32) -> Option<(BigUint, BigUint)> {
    let generator = Some((to_biguint(&C::GENERATOR_X), to_biguint(&C::GENERATOR_Y)));
    let mut acc = None;
    for _ in 0..k {
        acc = reference_add::<C>(acc, generator.clone());
    }
    acc
}

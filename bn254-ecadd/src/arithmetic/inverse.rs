//! Binary extended Euclidean inversion in Montgomery form.
//!
//! With `u = base`, `v = N` the accumulators keep `b * base == u * R^2` and
//! `c * base == v * R^2` (mod N). When `u` (or `v`) reaches one the matching
//! accumulator holds `R^2 / base`. For `base = a * R` that is `a^-1 * R`,
//! the Montgomery form of the inverse, with no conversion round trip.

use crate::curve::Curve;

use bigint::{Integer, Limb, U256};

const TOP_BIT: U256 =
    U256::from_be_hex("8000000000000000000000000000000000000000000000000000000000000000");

fn is_even(value: &U256) -> bool {
    !bool::from(value.is_odd())
}

/// `value / 2 mod N` for `value < N`.
fn halve<C: Curve>(value: &U256) -> U256 {
    if is_even(value) {
        return value.shr_vartime(1);
    }
    let (sum, carry) = value.adc(&C::PRIME_MODULUS, Limb::ZERO);
    let halved = sum.shr_vartime(1);
    if C::has_spare_bit() {
        // value + N < 2^256, nothing was carried out
        halved
    } else if carry.0 != 0 {
        halved | TOP_BIT
    } else {
        halved
    }
}

/// Inverse of a Montgomery word `base < N`, returned in Montgomery form.
/// `None` if `base` is zero.
pub(crate) fn binary_inverse<C: Curve>(base: &U256) -> Option<U256> {
    if *base == U256::ZERO {
        return None;
    }
    let modulus = C::PRIME_MODULUS;
    debug_assert!(base < &modulus);

    let mut u = *base;
    let mut v = modulus;
    let mut b = C::R2;
    let mut c = U256::ZERO;

    while u != U256::ONE && v != U256::ONE {
        while is_even(&u) {
            u = u.shr_vartime(1);
            b = halve::<C>(&b);
        }
        while is_even(&v) {
            v = v.shr_vartime(1);
            c = halve::<C>(&c);
        }
        if v > u {
            v = v.wrapping_sub(&u);
            c = c.sub_mod(&b, &modulus);
        } else {
            u = u.wrapping_sub(&v);
            b = b.sub_mod(&c, &modulus);
        }
    }

    Some(if u == U256::ONE { b } else { c })
}

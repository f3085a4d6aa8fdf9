//! Arithmetic in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the AES irreducible polynomial (the `x^8` term is implicit).
pub const REDUCTION_POLY: u8 = 0x1b;

/// Field addition, which is XOR of the coefficient bits.
#[inline]
pub const fn ff_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies `byte` by `x`, reducing modulo the field polynomial.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION_POLY
    } else {
        shifted
    }
}

/// Full field multiplication.
///
/// Walks the bits of `a` from least significant upward, accumulating the
/// current power-of-`x` multiple of `b` whenever the bit is set.
pub const fn ff_multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if a & 1 != 0 {
            product = ff_add(product, b);
        }
        // nothing left to prepare after the top bit
        if i < 7 {
            b = xtime(b);
            a >>= 1;
        }
        i += 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn xtime_chain_from_fips197() {
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn multiply_matches_fips197_examples() {
        assert_eq!(ff_multiply(0x57, 0x83), 0xc1);
        assert_eq!(ff_multiply(0x57, 0x13), 0xfe);
        assert_eq!(ff_multiply(0x02, 0x87), xtime(0x87));
    }

    #[test]
    fn identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(ff_multiply(a, 0x01), a);
            assert_eq!(ff_multiply(0x01, a), a);
            assert_eq!(ff_multiply(a, 0x00), 0);
            assert_eq!(ff_add(a, a), 0);
        }
    }

    proptest! {
        #[test]
        fn add_is_commutative_and_associative(a: u8, b: u8, c: u8) {
            prop_assert_eq!(ff_add(a, b), ff_add(b, a));
            prop_assert_eq!(ff_add(ff_add(a, b), c), ff_add(a, ff_add(b, c)));
        }

        #[test]
        fn multiply_is_commutative_and_associative(a: u8, b: u8, c: u8) {
            prop_assert_eq!(ff_multiply(a, b), ff_multiply(b, a));
            prop_assert_eq!(
                ff_multiply(ff_multiply(a, b), c),
                ff_multiply(a, ff_multiply(b, c))
            );
        }

        #[test]
        fn multiply_distributes_over_add(a: u8, b: u8, c: u8) {
            prop_assert_eq!(
                ff_multiply(a, ff_add(b, c)),
                ff_add(ff_multiply(a, b), ff_multiply(a, c))
            );
        }
    }
}

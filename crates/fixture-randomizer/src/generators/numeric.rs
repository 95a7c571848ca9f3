//! Unbounded numeric draws.

use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Draw a random arbitrary-precision natural with a random bit length
/// in `0..100`, as big-endian magnitude bytes.
///
/// A zero bit length yields an empty buffer, which is a zero value, not
/// a failure.
pub fn random_big_integer<R: Rng + ?Sized>(rng: &mut R) -> Vec<u8> {
    let bits = rng.gen::<i32>().unsigned_abs() % 100;
    random_big_integer_bits(rng, bits)
}

/// Draw `bits` random bits as a big-endian magnitude.
///
/// The high byte is masked so the result stays below `2^bits`.
pub fn random_big_integer_bits<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> Vec<u8> {
    let len = bits.div_ceil(8) as usize;
    if len == 0 {
        return Vec::new();
    }

    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);

    let excess = len as u32 * 8 - bits;
    bytes[0] &= 0xff >> excess;
    bytes
}

/// Draw a decimal from a random double in `[0, 1)`.
///
/// The decimal carries only the precision the double had.
pub fn random_decimal<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::from_f64(rng.gen::<f64>()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_bits_yields_empty_magnitude() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_big_integer_bits(&mut rng, 0), Vec::<u8>::new());
    }

    #[test]
    fn test_magnitude_stays_below_bit_length() {
        let mut rng = StdRng::seed_from_u64(42);

        for bits in [1u32, 3, 8, 9, 17, 64, 99] {
            for _ in 0..50 {
                let bytes = random_big_integer_bits(&mut rng, bits);
                assert_eq!(bytes.len(), bits.div_ceil(8) as usize);

                let high_bits = bits % 8;
                if high_bits != 0 {
                    assert!(u32::from(bytes[0]) < (1 << high_bits));
                }
            }
        }
    }

    #[test]
    fn test_random_bit_length_never_exceeds_catalogue_limit() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            // 99 bits is the widest possible draw, 13 bytes.
            assert!(random_big_integer(&mut rng).len() <= 13);
        }
    }

    #[test]
    fn test_random_decimal_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let d = random_decimal(&mut rng);
            assert!(d >= Decimal::ZERO && d < Decimal::ONE);
        }
    }
}

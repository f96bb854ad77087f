//! The Burger-Dybvig / Steele-White free-format shortest-digits algorithm.
//!
//! Produces the digit string `d_1 d_2 ... d_k` and decimal exponent `n` such
//! that a finite, positive, nonzero `f64` equals `0.d_1...d_k * 10^n`, where
//! `k` is the smallest digit count for which the representation round-trips
//! under round-half-to-even (spec §4.4). Ties between two equally short
//! representations are broken toward the even last digit.
//!
//! This is exact multiprecision arithmetic: every comparison below is a
//! `BigUint` comparison, never a floating-point one, so there is no risk of
//! the classic "shortest round-trip" bugs that come from approximating with
//! `f64`/`f128` math.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{CanonError, ErrorClass};

/// A decomposed positive finite `f64`: `value == mantissa * 2^exponent`.
struct Decomposed {
    mantissa: u64,
    exponent: i32,
    /// `true` when `value` sits at a power-of-two boundary whose gap to the
    /// next smaller representable value is half the gap to the next larger
    /// one (i.e. `mantissa` is the minimal normalized mantissa and the
    /// neighbor below is also normal). Such values need asymmetric rounding
    /// bounds.
    asymmetric_boundary: bool,
    /// `true` when `mantissa`'s low bit is 0, i.e. round-half-to-even
    /// resolves an exact tie at either bound *toward* this value. Such
    /// values treat their rounding bounds as inclusive; odd-mantissa values
    /// treat them as exclusive.
    bounds_inclusive: bool,
}

fn decompose(x: f64) -> Decomposed {
    debug_assert!(x.is_finite() && x > 0.0);
    let bits = x.to_bits();
    let raw_exponent = ((bits >> 52) & 0x7FF) as i32;
    let raw_mantissa = bits & ((1u64 << 52) - 1);

    let (mantissa, exponent) = if raw_exponent == 0 {
        // Subnormal: value = raw_mantissa * 2^-1074.
        (raw_mantissa, -1074)
    } else {
        // Normal: value = (2^52 + raw_mantissa) * 2^(raw_exponent - 1075).
        (raw_mantissa | (1u64 << 52), raw_exponent - 1075)
    };

    let asymmetric_boundary = raw_mantissa == 0 && raw_exponent > 1;
    let bounds_inclusive = mantissa % 2 == 0;

    Decomposed {
        mantissa,
        exponent,
        asymmetric_boundary,
        bounds_inclusive,
    }
}

fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

fn pow2(exp: u32) -> BigUint {
    BigUint::one() << exp
}

/// Returns `(digits, n)` with `digits` containing ASCII `b'0'..=b'9'` and
/// `n` the decimal exponent such that `value == 0.digits * 10^n`.
///
/// # Errors
///
/// Returns [`ErrorClass::InternalError`] if the digit-generation loop ever
/// produces a quotient outside `0..=9`, which the loop invariant (`r < s`
/// after each reduction) should make unreachable.
pub(crate) fn shortest_digits(x: f64) -> Result<(Vec<u8>, i32), CanonError> {
    let d = decompose(x);

    // Scaled numerator/denominator `r / s` represent `value`, and
    // `m_plus`/`m_minus` are the (scaled) distances to the midpoints with
    // the neighboring floats above and below.
    let (mut r, mut s, mut m_plus, mut m_minus): (BigUint, BigUint, BigUint, BigUint);

    if d.exponent >= 0 {
        let be = pow2(d.exponent as u32);
        if !d.asymmetric_boundary {
            r = BigUint::from(d.mantissa) * &be * 2u32;
            s = BigUint::from(2u32);
            m_plus = be.clone();
            m_minus = be;
        } else {
            r = BigUint::from(d.mantissa) * &be * 4u32;
            s = BigUint::from(4u32);
            m_plus = &be * 2u32;
            m_minus = be;
        }
    } else {
        let neg_exponent = (-d.exponent) as u32;
        if !d.asymmetric_boundary {
            r = BigUint::from(d.mantissa) * 2u32;
            s = pow2(neg_exponent + 1);
            m_plus = BigUint::one();
            m_minus = BigUint::one();
        } else {
            r = BigUint::from(d.mantissa) * 4u32;
            s = pow2(neg_exponent + 2);
            m_plus = BigUint::from(2u32);
            m_minus = BigUint::one();
        }
    }

    // Initial decimal-exponent estimate from a plain f64 log10; the fixup
    // loop below corrects it exactly regardless of how rough this guess is.
    let mut k = x.log10().ceil() as i32;

    if k >= 0 {
        s *= pow10(k as u32);
    } else {
        let scale = pow10((-k) as u32);
        r *= &scale;
        m_plus *= &scale;
        m_minus *= &scale;
    }

    // Fixup: ensure 10^(k-1) <= value < 10^k (with the appropriate
    // inclusive/exclusive treatment of the upper bound at the boundary
    // case), i.e. that the first digit generated below is in 1..=9 and no
    // leading zero is produced.
    loop {
        let high = &r + &m_plus;
        let exceeds = if d.bounds_inclusive { high > s } else { high >= s };
        if exceeds {
            s *= 10u32;
            k += 1;
        } else {
            break;
        }
    }
    loop {
        let high = (&r + &m_plus) * 10u32;
        let fits = if d.bounds_inclusive { high <= s } else { high < s };
        if fits {
            r *= 10u32;
            m_plus *= 10u32;
            m_minus *= 10u32;
            k -= 1;
        } else {
            break;
        }
    }

    let mut digits = Vec::new();
    loop {
        r *= 10u32;
        m_plus *= 10u32;
        m_minus *= 10u32;
        let quotient = &r / &s;
        debug_assert!(quotient < BigUint::from(10u32), "digit-generation loop invariant violated");
        let Some(digit) = num_traits::ToPrimitive::to_u32(&quotient).filter(|&d| d < 10) else {
            return Err(CanonError::new(ErrorClass::InternalError, 0));
        };
        r %= &s;

        let low = if d.bounds_inclusive {
            r <= m_minus
        } else {
            r < m_minus
        };
        let high = if d.bounds_inclusive {
            &r + &m_plus >= s
        } else {
            &r + &m_plus > s
        };

        if !low && !high {
            digits.push(digit as u8 + b'0');
            continue;
        }

        let final_digit = if low && !high {
            digit
        } else if high && !low {
            digit + 1
        } else {
            // Both bounds reached: value is exactly between two candidate
            // truncations. Round to even.
            let double_r = &r * 2u32;
            if double_r < s {
                digit
            } else if double_r > s {
                digit + 1
            } else if digit % 2 == 0 {
                digit
            } else {
                digit + 1
            }
        };

        if final_digit == 10 {
            // Rounding the newly generated digit up to 10 carries into
            // however many trailing 9s were already emitted (e.g. digits
            // "199" rounds to "2", not "1(10)0"). Those trailing 9s become
            // trailing zeros, which the shortest representation never
            // stores, so they are simply dropped. Only if *every* digit
            // generated so far was a 9 does the digit count shrink by one
            // and the decimal exponent shift up by one (e.g. "99" -> "1"
            // with `k` one larger).
            loop {
                match digits.pop() {
                    Some(b'9') => continue,
                    Some(other) => {
                        digits.push(other + 1);
                        break;
                    }
                    None => {
                        digits.push(b'1');
                        k += 1;
                        break;
                    }
                }
            }
        } else {
            digits.push(final_digit as u8 + b'0');
        }
        break;
    }

    Ok((digits, k))
}

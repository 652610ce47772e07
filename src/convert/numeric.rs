//! Arbitrary-precision arithmetic used by the conversion engines.
//!
//! Everything that touches `num-bigint` lives here; the engines only see
//! digit-value slices, [`Magnitude`] and [`Fraction`].

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Unbounded non-negative integer.
pub type Magnitude = BigUint;

/// Decimal digits of accuracy the fractional engine promises. The maximum
/// fractional precision of a base is the number of its digits that fit
/// within `10^WORKING_PRECISION_DIGITS`.
pub const WORKING_PRECISION_DIGITS: usize = 1800;

/// `base^exp`.
pub fn power(base: usize, exp: usize) -> Magnitude {
    num_traits::pow(Magnitude::from(base), exp)
}

/// Interprets digit values (most significant first) in the given base.
pub fn from_digits(digits: &[usize], base: usize) -> Magnitude {
    let base_big = Magnitude::from(base);
    let mut num = Magnitude::zero();
    for &digit in digits {
        num *= &base_big;
        num += Magnitude::from(digit);
    }
    num
}

/// Renders a magnitude as digit values (most significant first).
///
/// Zero renders as a single zero digit; nothing else has leading zeros.
pub fn to_digits(value: &Magnitude, base: usize) -> Vec<usize> {
    if value.is_zero() {
        return vec![0];
    }

    let base_big = Magnitude::from(base);
    let mut num = value.clone();
    let mut result = Vec::new();

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base_big);
        result.push(small(&remainder));
        num = quotient;
    }

    result.reverse();
    result
}

/// Extracts a value known to be below some base.
fn small(value: &Magnitude) -> usize {
    let digit = value.to_u64_digits();
    if digit.is_empty() { 0 } else { digit[0] as usize }
}

/// Largest `k` such that `base^k <= 10^WORKING_PRECISION_DIGITS`.
///
/// Starts from the floating point estimate and corrects it exactly.
pub fn max_precision(base: usize) -> u32 {
    let ceiling = power(10, WORKING_PRECISION_DIGITS);
    let estimate = (WORKING_PRECISION_DIGITS as f64 / (base as f64).log10()).floor() as usize;

    let mut k = estimate.saturating_sub(1);
    while power(base, k + 1) <= ceiling {
        k += 1;
    }
    while k > 0 && power(base, k) > ceiling {
        k -= 1;
    }
    k as u32
}

/// An exact value in `[0, 1)` held as numerator over denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    numerator: Magnitude,
    denominator: Magnitude,
}

impl Fraction {
    /// The fraction `0.d1 d2 ... dn` written in `base`.
    pub fn from_digits(digits: &[usize], base: usize) -> Self {
        Fraction {
            numerator: from_digits(digits, base),
            denominator: power(base, digits.len()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Multiplies by `base` and splits off the integer part, which is the
    /// next digit in that base. The remainder stays in `self`.
    pub fn next_digit(&mut self, base: usize) -> usize {
        let scaled = &self.numerator * Magnitude::from(base);
        let (digit, rest) = scaled.div_rem(&self.denominator);
        self.numerator = rest;
        small(&digit)
    }

    /// Exact comparison by cross-multiplication.
    pub fn same_value(&self, other: &Fraction) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

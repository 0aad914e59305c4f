//! Signed integers over `Mag`.
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Neg;
use std::str;
use num::{BigInt, BigUint};
use num::bigint;
use super::mag::{Mag, ParseError, ReprError};
use super::sieve;

quick_error! {
    /// Error type for signed square roots.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Error {
        /// The operand is negative.
        Domain {
            display("square root of a negative integer")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
         Serialize, Deserialize)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// Sign and magnitude.  The sign is `NoSign` if and only if the magnitude
/// is zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Sign, Mag)", into = "(Sign, Mag)")]
pub struct Int {
    sign: Sign,
    mag: Mag,
}

impl Default for Int {
    fn default() -> Self {
        Int::zero()
    }
}

impl Int {
    #[inline]
    pub fn zero() -> Self {
        Int { sign: Sign::NoSign, mag: Mag::zero() }
    }

    /// Combine a sign with a magnitude.  A zero magnitude always yields
    /// zero and `NoSign` discards the magnitude.
    pub fn new(sign: Sign, mag: Mag) -> Self {
        if sign == Sign::NoSign || mag.is_zero() {
            Int::zero()
        } else {
            Int { sign, mag }
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &Mag {
        &self.mag
    }

    #[inline]
    pub fn into_parts(self) -> (Sign, Mag) {
        (self.sign, self.mag)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Compute `(s, r)` with `s = ⌊√self⌋` and `r = self − s²`, both
    /// non-negative.  Fails if `self` is negative.
    pub fn sqrtrem(&self) -> Result<(Int, Int), Error> {
        if self.is_negative() {
            tracing::debug!(bits = self.mag.bit_len(), "sqrtrem of a negative integer");
            return Err(Error::Domain);
        }
        let sr = self.mag.sqrtrem();
        Ok((Int::from(sr.root), Int::from(sr.rem)))
    }

    /// Compute `⌊√self⌋`.  Fails if `self` is negative.
    pub fn sqrt(&self) -> Result<Int, Error> {
        self.sqrtrem().map(|(s, _)| s)
    }

    /// Negative integers are never perfect squares; zero is.
    pub fn is_perfect_square(&self) -> bool {
        match self.sign {
            Sign::Minus => false,
            Sign::NoSign => true,
            Sign::Plus => sieve::is_perfect_square_limbs(self.mag.limbs()),
        }
    }
}

/// See [`Int::sqrtrem`](struct.Int.html#method.sqrtrem).
pub fn sqrtrem(x: &Int) -> Result<(Int, Int), Error> {
    x.sqrtrem()
}

/// See [`Int::is_perfect_square`](struct.Int.html#method.is_perfect_square).
pub fn is_perfect_square(x: &Int) -> bool {
    x.is_perfect_square()
}

/// Rejects a sign that disagrees with the magnitude.
impl TryFrom<(Sign, Mag)> for Int {
    type Error = ReprError;
    fn try_from((sign, mag): (Sign, Mag)) -> Result<Self, Self::Error> {
        if (sign == Sign::NoSign) != mag.is_zero() {
            return Err(ReprError::SignMismatch);
        }
        Ok(Int { sign, mag })
    }
}

impl From<Int> for (Sign, Mag) {
    #[inline]
    fn from(x: Int) -> Self {
        x.into_parts()
    }
}

impl From<Mag> for Int {
    #[inline]
    fn from(mag: Mag) -> Self {
        Int::new(Sign::Plus, mag)
    }
}

impl From<u64> for Int {
    #[inline]
    fn from(x: u64) -> Self {
        Int::from(Mag::from_u64(x))
    }
}

impl From<i64> for Int {
    fn from(x: i64) -> Self {
        let sign = if x < 0 { Sign::Minus } else { Sign::Plus };
        Int::new(sign, Mag::from_u64(x.wrapping_abs() as u64))
    }
}

impl<'a> From<&'a Int> for BigInt {
    fn from(x: &'a Int) -> Self {
        let sign = match x.sign {
            Sign::Minus => bigint::Sign::Minus,
            Sign::NoSign => bigint::Sign::NoSign,
            Sign::Plus => bigint::Sign::Plus,
        };
        BigInt::from_biguint(sign, BigUint::from(&x.mag))
    }
}

impl<'a> From<&'a BigInt> for Int {
    fn from(x: &'a BigInt) -> Self {
        let (sign, bytes) = x.to_bytes_le();
        let sign = match sign {
            bigint::Sign::Minus => Sign::Minus,
            bigint::Sign::NoSign => Sign::NoSign,
            bigint::Sign::Plus => Sign::Plus,
        };
        Int::new(sign, Mag::from_bytes_le(&bytes))
    }
}

impl Neg for Int {
    type Output = Int;
    #[inline]
    fn neg(self) -> Int {
        Int { sign: -self.sign, mag: self.mag }
    }
}

impl<'a> Neg for &'a Int {
    type Output = Int;
    #[inline]
    fn neg(self) -> Int {
        -self.clone()
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Minus => other.mag.cmp(&self.mag),
                Sign::NoSign => Ordering::Equal,
                Sign::Plus => self.mag.cmp(&other.mag),
            },
            ordering => ordering,
        }
    }
}

impl PartialOrd for Int {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.mag.to_digits(10))
    }
}

impl fmt::LowerHex for Int {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.mag.to_digits(16))
    }
}

/// Parse an optionally signed decimal, or hexadecimal if the digits are
/// prefixed by `0x`.
impl str::FromStr for Int {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, digits) = if s.starts_with('-') {
            (Sign::Minus, &s[1 ..])
        } else if s.starts_with('+') {
            (Sign::Plus, &s[1 ..])
        } else {
            (Sign::Plus, s)
        };
        Ok(Int::new(sign, digits.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> Int {
        s.parse().unwrap()
    }

    #[test]
    fn test_sqrtrem() {
        assert_eq!(int("15").sqrtrem(), Ok((int("3"), int("6"))));
        assert_eq!(int("16").sqrtrem(), Ok((int("4"), Int::zero())));
        assert_eq!(int("2").sqrtrem(), Ok((int("1"), int("1"))));
        assert_eq!(Int::zero().sqrtrem(), Ok((Int::zero(), Int::zero())));
        assert_eq!(int("-1").sqrtrem(), Err(Error::Domain));
        assert_eq!(sqrtrem(&Int::from(-16i64)), Err(Error::Domain));
        assert_eq!(int("1000000000000000000000000000000").sqrt(),
                   Ok(int("1000000000000000")));

        let (s, r) = int("15").sqrtrem().unwrap();
        assert_eq!(s.sign(), Sign::Plus);
        assert_eq!(r.sign(), Sign::Plus);
        let (s, r) = int("0").sqrtrem().unwrap();
        assert_eq!(s.sign(), Sign::NoSign);
        assert_eq!(r.sign(), Sign::NoSign);
    }

    #[test]
    fn test_is_perfect_square() {
        assert!(is_perfect_square(&Int::zero()));
        assert!(!is_perfect_square(&int("-1")));
        assert!(!is_perfect_square(&int("-4")));
        assert!(is_perfect_square(&int("16")));
        assert!(!is_perfect_square(&int("2")));
        assert!(is_perfect_square(&int("0x100000000000000000000000000000000")));
    }

    #[test]
    fn test_sign_invariant() {
        assert_eq!(Int::new(Sign::Minus, Mag::zero()).sign(), Sign::NoSign);
        assert_eq!(Int::new(Sign::NoSign, Mag::from_u64(3)), Int::zero());
        assert_eq!(Int::try_from((Sign::Plus, Mag::zero())),
                   Err(ReprError::SignMismatch));
        assert_eq!(Int::try_from((Sign::NoSign, Mag::from_u64(1))),
                   Err(ReprError::SignMismatch));
        assert_eq!(-int("0"), Int::zero());
        assert_eq!(Int::from(i64::min_value()).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_order_and_format() {
        let mut v: Vec<Int> = ["5", "-7", "0", "-0x10", "123456789012345678901234567890"]
            .iter().map(|s| int(s)).collect();
        v.sort();
        let v: Vec<String> = v.iter().map(|x| x.to_string()).collect();
        assert_eq!(v, vec!["-16", "-7", "0", "5", "123456789012345678901234567890"]);
        assert_eq!(format!("{:x}", int("-255")), "-ff");
        assert_eq!(format!("{:+}", int("42")), "+42");
        assert_eq!("-".parse::<Int>(), Err(ParseError::Empty));
        assert_eq!("--1".parse::<Int>(), Err(ParseError::InvalidDigit));
    }

    #[test]
    fn test_num_interop() {
        let x = int("-98765432109876543210987654321");
        let big = BigInt::from(&x);
        assert_eq!(big.to_string(), x.to_string());
        assert_eq!(Int::from(&big), x);
        assert_eq!(Int::from(&BigInt::from(0)), Int::zero());
    }
}

//! Owned non-negative magnitudes.
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Mul, Shl, Shr, Sub};
use std::str;
use byteorder::{ByteOrder, LittleEndian};
use num::{BigUint, One, Zero};
use regex::Regex;
use super::mpn::{self, Limb, LIMB_BITS};

quick_error! {
    /// Error type for values that violate a representation invariant.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ReprError {
        NonCanonical {
            display("magnitude has a most significant zero limb")
        }
        SignMismatch {
            display("sign does not agree with the magnitude")
        }
    }
}

quick_error! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ParseError {
        Empty {
            display("cannot parse integer from empty string")
        }
        InvalidDigit {
            display("invalid digit found in string")
        }
    }
}

/// A non-negative integer stored as little-endian limbs with no most
/// significant zero limb.  Zero is the empty vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Limb>", into = "Vec<Limb>")]
pub struct Mag(Vec<Limb>);

impl Mag {
    #[inline]
    pub fn zero() -> Self {
        Mag(Vec::new())
    }

    /// Construct from limbs, stripping any most significant zero limbs.
    #[inline]
    pub fn from_vec(mut limbs: Vec<Limb>) -> Self {
        mpn::normalize(&mut limbs);
        Mag(limbs)
    }

    #[inline]
    pub fn from_u64(x: u64) -> Self {
        Self::from_vec(vec![x])
    }

    #[inline]
    pub fn from_u128(x: u128) -> Self {
        Self::from_vec(vec![x as Limb, (x >> LIMB_BITS) as Limb])
    }

    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.0
    }

    #[inline]
    pub fn into_limbs(self) -> Vec<Limb> {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn bit_len(&self) -> usize {
        mpn::bit_len(&self.0)
    }

    /// The lowest 128 bits.
    #[inline]
    pub fn low_u128(&self) -> u128 {
        let lo = self.0.get(0).cloned().unwrap_or(0) as u128;
        let hi = self.0.get(1).cloned().unwrap_or(0) as u128;
        lo | (hi << LIMB_BITS)
    }

    pub fn to_u128(&self) -> Option<u128> {
        if self.0.len() <= 2 {
            Some(self.low_u128())
        } else {
            None
        }
    }

    /// `self mod 2^bits`
    pub fn low_bits(&self, bits: usize) -> Self {
        Mag(mpn::low_bits(&self.0, bits))
    }

    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Mag) -> (Mag, Mag) {
        let (q, r) = mpn::div_rem(&self.0, &divisor.0);
        (Mag(q), Mag(r))
    }

    /// Panics if `divisor` is zero.
    pub fn rem_limb(&self, divisor: Limb) -> Limb {
        mpn::rem_limb(&self.0, divisor)
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity((bytes.len() + 7) / 8);
        for chunk in bytes.chunks(8) {
            let mut buf = [0; 8];
            buf[.. chunk.len()].copy_from_slice(chunk);
            limbs.push(LittleEndian::read_u64(&buf));
        }
        Self::from_vec(limbs)
    }

    /// Little-endian bytes without trailing zeros (empty for zero).
    pub fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = vec![0; self.0.len() * 8];
        for (i, &x) in self.0.iter().enumerate() {
            LittleEndian::write_u64(&mut bytes[8 * i ..], x);
        }
        while let Some(&0) = bytes.last() {
            bytes.pop();
        }
        bytes
    }

    /// Parse an unsigned decimal, or hexadecimal if prefixed by `0x`.
    fn parse_unsigned(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let caps = re!(r"^(?:0[xX]([0-9a-fA-F]+)|([0-9]+))$")
            .captures(s)
            .ok_or(ParseError::InvalidDigit)?;
        match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => Self::parse_digits(hex.as_str(), 16),
            (None, Some(dec)) => Self::parse_digits(dec.as_str(), 10),
            (None, None) => Err(ParseError::InvalidDigit),
        }
    }

    /// Accumulate `digits` (already validated) in chunks that fit a limb.
    fn parse_digits(digits: &str, radix: u32) -> Result<Self, ParseError> {
        let chunk_len = if radix == 16 { 16 } else { 19 };
        let head = match digits.len() % chunk_len {
            0 => chunk_len,
            n => n,
        };
        let mut acc = Vec::new();
        let mut start = 0;
        let mut end = head.min(digits.len());
        while start < digits.len() {
            let chunk = &digits[start .. end];
            let value = Limb::from_str_radix(chunk, radix)
                .map_err(|_| ParseError::InvalidDigit)?;
            acc = if radix == 16 {
                mpn::shl(&acc, 4 * chunk.len())
            } else {
                mpn::mul(&acc, &[10u64.pow(chunk.len() as u32)])
            };
            acc = mpn::add(&acc, &[value]);
            start = end;
            end += chunk_len;
        }
        Ok(Mag(acc))
    }

    /// Render the digits in base 10 or 16, without prefix.
    pub(crate) fn to_digits(&self, radix: u32) -> String {
        let mut s = String::new();
        if self.is_zero() {
            s.push('0');
            return s;
        }
        if radix == 16 {
            for (i, x) in self.0.iter().rev().enumerate() {
                if i == 0 {
                    s.push_str(&format!("{:x}", x));
                } else {
                    s.push_str(&format!("{:016x}", x));
                }
            }
        } else {
            const CHUNK: Limb = 10_000_000_000_000_000_000;
            let mut chunks = Vec::new();
            let mut rest = self.0.clone();
            while !rest.is_empty() {
                let (q, r) = mpn::div_rem_limb(&rest, CHUNK);
                chunks.push(r);
                rest = q;
            }
            for (i, x) in chunks.iter().rev().enumerate() {
                if i == 0 {
                    s.push_str(&x.to_string());
                } else {
                    s.push_str(&format!("{:019}", x));
                }
            }
        }
        s
    }
}

/// Rejects limbs that are not in canonical form.
impl TryFrom<Vec<Limb>> for Mag {
    type Error = ReprError;
    fn try_from(limbs: Vec<Limb>) -> Result<Self, Self::Error> {
        if mpn::is_canonical(&limbs) {
            Ok(Mag(limbs))
        } else {
            Err(ReprError::NonCanonical)
        }
    }
}

impl From<Mag> for Vec<Limb> {
    #[inline]
    fn from(m: Mag) -> Self {
        m.0
    }
}

impl From<u64> for Mag {
    #[inline]
    fn from(x: u64) -> Self {
        Mag::from_u64(x)
    }
}

impl<'a> From<&'a Mag> for BigUint {
    fn from(m: &'a Mag) -> Self {
        BigUint::from_bytes_le(&m.to_bytes_le())
    }
}

impl<'a> From<&'a BigUint> for Mag {
    fn from(x: &'a BigUint) -> Self {
        Mag::from_bytes_le(&x.to_bytes_le())
    }
}

impl Ord for Mag {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        mpn::cmp(&self.0, &other.0)
    }
}

impl PartialOrd for Mag {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn add(a: &Mag, b: &Mag) -> Mag {
    Mag(mpn::add(&a.0, &b.0))
}

/// Panics if the difference would be negative.
fn sub(a: &Mag, b: &Mag) -> Mag {
    assert!(a >= b, "magnitude subtraction would be negative");
    Mag(mpn::sub(&a.0, &b.0))
}

fn mul(a: &Mag, b: &Mag) -> Mag {
    Mag(mpn::mul(&a.0, &b.0))
}

forward_binop!(impl Add, add for Mag => add);
forward_binop!(impl Sub, sub for Mag => sub);
forward_binop!(impl Mul, mul for Mag => mul);

impl<'a> Shl<usize> for &'a Mag {
    type Output = Mag;
    #[inline]
    fn shl(self, bits: usize) -> Mag {
        Mag(mpn::shl(&self.0, bits))
    }
}

impl Shl<usize> for Mag {
    type Output = Mag;
    #[inline]
    fn shl(self, bits: usize) -> Mag {
        &self << bits
    }
}

impl<'a> Shr<usize> for &'a Mag {
    type Output = Mag;
    #[inline]
    fn shr(self, bits: usize) -> Mag {
        Mag(mpn::shr(&self.0, bits))
    }
}

impl Shr<usize> for Mag {
    type Output = Mag;
    #[inline]
    fn shr(self, bits: usize) -> Mag {
        &self >> bits
    }
}

impl Zero for Mag {
    #[inline]
    fn zero() -> Self {
        Mag::zero()
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl One for Mag {
    #[inline]
    fn one() -> Self {
        Mag(vec![1])
    }
}

impl fmt::Display for Mag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "", &self.to_digits(10))
    }
}

impl fmt::LowerHex for Mag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_digits(16))
    }
}

impl str::FromStr for Mag {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mag::parse_unsigned(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical() {
        assert_eq!(Mag::from_vec(vec![3, 0, 0]).limbs(), &[3]);
        assert!(Mag::from_vec(vec![0]).is_zero());
        assert_eq!(Mag::try_from(vec![1, 0]), Err(ReprError::NonCanonical));
        assert_eq!(Mag::try_from(vec![]), Ok(Mag::zero()));
        assert_eq!(Mag::from_u128(1 << 64).limbs(), &[0, 1]);
    }

    #[test]
    fn test_ops() {
        let a = Mag::from_u128(u64::max_value() as u128 + 5);
        let b = Mag::from_u64(7);
        assert_eq!(&a + &b, Mag::from_u128(u64::max_value() as u128 + 12));
        assert_eq!(&a - &b, Mag::from_u128(u64::max_value() as u128 - 2));
        assert_eq!(&b * &b, Mag::from_u64(49));
        assert_eq!(&b << 64, Mag::from_u128(7 << 64));
        assert_eq!(a.clone() >> 64, Mag::one());
        assert!(b < a);
        assert_eq!(a.div_rem(&b).0.to_u128(), Some((u64::max_value() as u128 + 5) / 7));
    }

    #[test]
    #[should_panic]
    fn test_sub_underflow() {
        let _ = Mag::from_u64(1) - Mag::from_u64(2);
    }

    #[test]
    fn test_format() {
        let m: Mag = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(m.to_string(), "123456789012345678901234567890");
        assert_eq!(format!("{:x}", m), "18ee90ff6c373e0ee4e3f0ad2");
        assert_eq!(format!("{:#x}", Mag::from_u64(255)), "0xff");
        assert_eq!(format!("{:>5}", Mag::from_u64(42)), "   42");
        assert_eq!(Mag::zero().to_string(), "0");
        assert_eq!("0x10000000000000000".parse::<Mag>(), Ok(Mag::from_u128(1 << 64)));
        assert_eq!("10000000000000000000".parse::<Mag>(), Ok(Mag::from_u64(10_000_000_000_000_000_000)));
        assert_eq!("".parse::<Mag>(), Err(ParseError::Empty));
        assert_eq!("12a".parse::<Mag>(), Err(ParseError::InvalidDigit));
        assert_eq!("-1".parse::<Mag>(), Err(ParseError::InvalidDigit));
    }

    #[test]
    fn test_bytes() {
        let m = Mag::from_vec(vec![0x0102_0304_0506_0708, 0x090a]);
        let bytes = m.to_bytes_le();
        assert_eq!(bytes, vec![8, 7, 6, 5, 4, 3, 2, 1, 0x0a, 0x09]);
        assert_eq!(Mag::from_bytes_le(&bytes), m);
        let big = BigUint::from(&m);
        assert_eq!(Mag::from(&big), m);
        assert_eq!(big.to_string(), m.to_string());
        assert!(Mag::from_bytes_le(&[]).is_zero());
    }
}

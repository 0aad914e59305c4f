//! Perfect-square detection.
//!
//! Most non-squares are rejected by their residues modulo a few small
//! numbers: only 44 of the 256 residues mod 256 are squares, 16 of 63,
//! 21 of 65, 6 of 11 and 9 of 17, so about 1 in 245 non-squares
//! survive the sieve.  Whatever survives is settled by an exact square
//! root.
use super::mag::Mag;
use super::mpn::{self, Limb};
use super::sqrtrem;

/// Odd moduli tested after the low byte.
const ODD_MODULI: [Limb; 4] = [63, 65, 11, 17];

/// Product of `ODD_MODULI`, so one single-limb remainder serves them all.
const ODD_PRODUCT: Limb = 63 * 65 * 11 * 17;

/// Bit set of the quadratic residues modulo some `k`.
#[derive(Clone, Debug)]
struct ResidueTable {
    modulus: Limb,
    bits: Vec<u64>,
}

impl ResidueTable {
    fn new(modulus: Limb) -> Self {
        let mut bits = vec![0; (modulus as usize + 63) / 64];
        for x in 0 .. modulus {
            let r = (x * x % modulus) as usize;
            bits[r / 64] |= 1 << (r % 64);
        }
        Self { modulus, bits }
    }

    /// Whether `x mod k` is a square modulo `k`.
    #[inline]
    fn contains(&self, x: Limb) -> bool {
        let r = (x % self.modulus) as usize;
        self.bits[r / 64] >> (r % 64) & 1 != 0
    }
}

lazy_static! {
    static ref LOW_BYTE_TABLE: ResidueTable = ResidueTable::new(256);
    static ref ODD_TABLES: Vec<ResidueTable> =
        ODD_MODULI.iter().map(|&k| ResidueTable::new(k)).collect();
}

/// Returns `false` only if `limbs` is certainly not a perfect square.
pub fn passes_sieve(limbs: &[Limb]) -> bool {
    let low = match limbs.first() {
        None => return true,
        Some(&low) => low,
    };
    if !LOW_BYTE_TABLE.contains(low) {
        return false;
    }
    let r = mpn::rem_limb(limbs, ODD_PRODUCT);
    ODD_TABLES.iter().all(|table| table.contains(r))
}

/// Test whether a canonical, non-negative magnitude is a perfect square.
///
/// The slice must not have a most significant zero limb.  This is only
/// checked in debug builds; in release builds a non-canonical slice is
/// still handled without any effect beyond this call.
pub fn is_perfect_square_limbs(limbs: &[Limb]) -> bool {
    debug_assert!(mpn::is_canonical(limbs),
                  "magnitude has a most significant zero limb");
    if limbs.is_empty() {
        return true;
    }
    if !passes_sieve(limbs) {
        return false;
    }
    sqrtrem::sqrtrem_limbs(limbs).1.is_empty()
}

impl Mag {
    pub fn is_perfect_square(&self) -> bool {
        is_perfect_square_limbs(self.limbs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        let count = |t: &ResidueTable| {
            t.bits.iter().map(|b| b.count_ones()).sum::<u32>()
        };
        assert_eq!(count(&LOW_BYTE_TABLE), 44);
        let counts: Vec<_> = ODD_TABLES.iter().map(count).collect();
        assert_eq!(counts, vec![16, 21, 6, 9]);
        assert_eq!(ODD_PRODUCT, 765765);
    }

    #[test]
    fn test_sieve_never_rejects_squares() {
        for s in 0 .. 100_000u64 {
            assert!(passes_sieve(&[s * s]), "{}² rejected", s);
        }
        let s = Mag::from_vec(vec![0x1234_5678_9abc_def1, 77, 3]);
        assert!(passes_sieve((&s * &s).limbs()));
    }

    #[test]
    fn test_small() {
        let squares: Vec<u64> = (0 .. 2000).filter(|&n| {
            is_perfect_square_limbs(Mag::from_u64(n).limbs())
        }).collect();
        let expected: Vec<u64> = (0 .. 45).map(|s| s * s).collect();
        assert_eq!(squares, expected);
        assert!(Mag::from_u64(16).is_perfect_square());
        assert!(!Mag::from_u64(2).is_perfect_square());
        assert!(Mag::zero().is_perfect_square());
    }

    #[test]
    #[should_panic(expected = "most significant zero limb")]
    #[cfg(debug_assertions)]
    fn test_non_canonical() {
        is_perfect_square_limbs(&[4, 0]);
    }

    #[test]
    fn test_sieve_passes_some_non_squares() {
        // survives every residue test, so only the exact root rejects it
        let n = (1 .. ).find(|&n: &u64| {
            passes_sieve(&[n]) && !is_perfect_square_limbs(&[n])
        });
        assert_eq!(n, Some(4081));
    }
}

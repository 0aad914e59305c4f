//! Square root with remainder of arbitrary-precision magnitudes.
//!
//! Large inputs are handled by the divide-and-conquer method of
//! P. Zimmermann, "Karatsuba Square Root" (INRIA RR-3805, 1999): the root
//! of the top half is computed recursively and the low half of the root is
//! obtained from a single division, so the cost is a constant multiple of
//! the cost of multiplication.
use num::One;
use super::isqrt;
use super::mag::Mag;
use super::mpn::{self, Limb};

/// Inputs of at most this many bits use the word-level base case.
const BASE_BITS: usize = 128;

/// Root and remainder: `root² + rem` equals the input and
/// `rem ≤ 2 root`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SqrtRem {
    pub root: Mag,
    pub rem: Mag,
}

impl Mag {
    /// Compute `⌊√self⌋` and the remainder `self − ⌊√self⌋²`.
    pub fn sqrtrem(&self) -> SqrtRem {
        let _scope = tracing::trace_span!("sqrtrem", bits = self.bit_len()).entered();
        let (root, rem) = sqrtrem_rec(self.limbs());
        debug_assert!(verify(self, &root, &rem),
                      "invalid square root of {:#x}", self);
        SqrtRem { root, rem }
    }

    /// Compute `⌊√self⌋`.
    pub fn sqrt(&self) -> Mag {
        self.sqrtrem().root
    }
}

/// Limb-level form of [`Mag::sqrtrem`](../mag/struct.Mag.html): returns
/// the limbs of the root and of the remainder.  Most significant zero
/// limbs of the input are ignored.
pub fn sqrtrem_limbs(limbs: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let len = limbs.iter().rposition(|&x| x != 0).map_or(0, |i| i + 1);
    let (root, rem) = sqrtrem_rec(&limbs[.. len]);
    (root.into_limbs(), rem.into_limbs())
}

/// Check that `root = ⌊√n⌋` and `rem = n − root²`.
pub fn verify(n: &Mag, root: &Mag, rem: &Mag) -> bool {
    let sq = root * root;
    if &sq > n || &(n - &sq) != rem {
        return false;
    }
    let next = root + Mag::one();
    &(&next * &next) > n
}

/// `n` must be canonical.
fn sqrtrem_rec(n: &[Limb]) -> (Mag, Mag) {
    let bits = mpn::bit_len(n);
    if bits <= BASE_BITS {
        let low = n.get(0).map_or(0, |&x| x as u128)
            | n.get(1).map_or(0, |&x| (x as u128) << 64);
        let (s, r) = isqrt::sqrtrem_u128(low);
        return (Mag::from_u64(s), Mag::from_u128(r));
    }

    // Shift by 2t so the bit length becomes 4k or 4k − 1.  Splitting into
    // four k-bit digits N = a₃b³ + a₂b² + a₁b + a₀ with b = 2ᵏ then gives
    // a₃ ≥ b/4, which keeps the estimate below within one of the root.
    let t = match bits % 4 {
        1 | 2 => 1,
        _ => 0,
    };
    let k = (bits + 2 * t + 1) / 4;
    let m = Mag::from_vec(mpn::shl(n, 2 * t));

    let (s1, r1) = sqrtrem_rec((&m >> 2 * k).limbs());
    let a1 = (&m >> k).low_bits(k);
    let a0 = m.low_bits(k);

    // q = ⌊(r₁b + a₁) / 2s₁⌋, so s = s₁b + q and
    // N − s² = vb + a₀ − q²
    let (q, v) = ((r1 << k) + a1).div_rem(&(&s1 << 1));
    let mut s = (s1 << k) + &q;
    let pos = (v << k) + a0;
    let q2 = &q * &q;
    let mut r = if pos >= q2 {
        pos - q2
    } else {
        // negative remainder: move the root down
        let mut deficit = q2 - pos;
        loop {
            let step = (&s << 1) - Mag::one();
            s = s - Mag::one();
            if step >= deficit {
                break step - deficit;
            }
            deficit = deficit - step;
        }
    };
    while r > (&s << 1) {
        r = r - (&s << 1) - Mag::one();
        s = s + Mag::one();
    }

    if t == 0 {
        return (s, r);
    }
    // undo the shift: with s = s₀2ᵗ + c, N/4ᵗ − s₀² = (r + c(2s − c)) / 4ᵗ
    let c = s.low_bits(t);
    let s0 = &s >> t;
    let r0 = (r + &c * ((&s << 1) - &c)) >> 2 * t;
    (s0, r0)
}

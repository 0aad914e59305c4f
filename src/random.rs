//! Random magnitudes for testing and benchmarking.
use rand::Rng;
use super::mag::Mag;
use super::mpn::{Limb, LIMB_BITS};

/// Longest run of equal bits produced by `rrandomb`.
const MAX_RUN: usize = 2 * LIMB_BITS as usize;

/// Uniformly random magnitude in `[0, 2^bits)`.
pub fn urandomb<R: Rng>(rng: &mut R, bits: usize) -> Mag {
    let n = (bits + LIMB_BITS as usize - 1) / LIMB_BITS as usize;
    let mut limbs: Vec<Limb> = (0 .. n).map(|_| rng.gen()).collect();
    let extra = bits % LIMB_BITS as usize;
    if extra != 0 {
        if let Some(top) = limbs.last_mut() {
            *top &= (1 << extra) - 1;
        }
    }
    Mag::from_vec(limbs)
}

/// Random magnitude of exactly `bits` bits, made of alternating runs of
/// ones and zeros with random lengths.  Such numbers make carries and
/// borrows travel across limb boundaries far more often than uniform ones.
pub fn rrandomb_exact<R: Rng>(rng: &mut R, bits: usize) -> Mag {
    let mut limbs: Vec<Limb> = vec![0; (bits + LIMB_BITS as usize - 1)
                                        / LIMB_BITS as usize];
    let mut remaining = bits;
    let mut ones = true;
    while remaining > 0 {
        let run = rng.gen_range(1 ..= remaining.min(MAX_RUN));
        if ones {
            for i in remaining - run .. remaining {
                limbs[i / LIMB_BITS as usize] |= 1 << (i % LIMB_BITS as usize);
            }
        }
        remaining -= run;
        ones = !ones;
    }
    Mag::from_vec(limbs)
}

/// Random magnitude with a bit length drawn uniformly from `[0, max_bits]`;
/// see `rrandomb_exact`.
pub fn rrandomb<R: Rng>(rng: &mut R, max_bits: usize) -> Mag {
    let bits = rng.gen_range(0 ..= max_bits);
    rrandomb_exact(rng, bits)
}

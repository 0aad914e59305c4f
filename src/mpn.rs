//! Arithmetic on little-endian limb slices.
//!
//! Inputs are expected in canonical form (no most significant zero limb)
//! unless stated otherwise, and every returned vector is canonical.  The
//! empty slice is zero.
use std::cmp::{self, Ordering};

/// Storage unit of a magnitude.
pub type Limb = u64;

/// Twice the width of a `Limb`, for carries and products.
pub type DoubleLimb = u128;

pub const LIMB_BITS: u32 = 64;

/// Operands shorter than this (in limbs) use schoolbook multiplication.
const KARATSUBA_THRESHOLD: usize = 32;

/// Strip most significant zero limbs.
#[inline]
pub fn normalize(v: &mut Vec<Limb>) {
    while let Some(&0) = v.last() {
        v.pop();
    }
}

#[inline]
pub fn is_canonical(a: &[Limb]) -> bool {
    a.last().map_or(true, |&top| top != 0)
}

/// Number of significant bits.
#[inline]
pub fn bit_len(a: &[Limb]) -> usize {
    match a.last() {
        None => 0,
        Some(&top) => {
            a.len() * LIMB_BITS as usize - top.leading_zeros() as usize
        }
    }
}

pub fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    debug_assert!(is_canonical(a) && is_canonical(b));
    a.len().cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Add two magnitudes.  The operands need not be canonical.
pub fn add(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut r = Vec::with_capacity(a.len() + 1);
    let mut carry = false;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).cloned().unwrap_or(0);
        let (s, c1) = x.overflowing_add(y);
        let (s, c2) = s.overflowing_add(carry as Limb);
        r.push(s);
        carry = c1 || c2;
    }
    if carry {
        r.push(1);
    }
    normalize(&mut r);
    r
}

/// Subtract `b` from `a`.  Requires `a >= b`.
pub fn sub(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut r = Vec::with_capacity(a.len());
    let mut borrow = false;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).cloned().unwrap_or(0);
        let (d, b1) = x.overflowing_sub(y);
        let (d, b2) = d.overflowing_sub(borrow as Limb);
        r.push(d);
        borrow = b1 || b2;
    }
    debug_assert!(!borrow, "subtraction underflow");
    normalize(&mut r);
    r
}

/// Add `b` into `acc` in place.  The sum must fit in `acc`.
fn add_into(acc: &mut [Limb], b: &[Limb]) {
    let mut carry = false;
    for (i, x) in acc.iter_mut().enumerate() {
        let y = b.get(i).cloned().unwrap_or(0);
        if i >= b.len() && !carry {
            break;
        }
        let (s, c1) = x.overflowing_add(y);
        let (s, c2) = s.overflowing_add(carry as Limb);
        *x = s;
        carry = c1 || c2;
    }
    debug_assert!(!carry, "accumulator overflow");
}

fn mul_schoolbook(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut r = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            let t = x as DoubleLimb * y as DoubleLimb
                + r[i + j] as DoubleLimb
                + carry;
            r[i + j] = t as Limb;
            carry = t >> LIMB_BITS;
        }
        r[i + b.len()] = carry as Limb;
    }
    normalize(&mut r);
    r
}

/// Multiply two magnitudes.  The operands need not be canonical.
///
/// Large balanced operands are split Karatsuba-style:
///
/// ```text
/// (a₁ β + a₀)(b₁ β + b₀) = z₂ β² + ((a₀ + a₁)(b₀ + b₁) − z₂ − z₀) β + z₀
/// ```
///
/// with `z₀ = a₀ b₀` and `z₂ = a₁ b₁`.
pub fn mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let m = cmp::min(a.len(), b.len()) / 2;
    if m < KARATSUBA_THRESHOLD / 2 {
        return mul_schoolbook(a, b);
    }
    let (a0, a1) = a.split_at(m);
    let (b0, b1) = b.split_at(m);
    let z0 = mul(a0, b0);
    let z2 = mul(a1, b1);
    let z1 = mul(&add(a0, a1), &add(b0, b1));
    let z1 = sub(&sub(&z1, &z0), &z2);
    let mut r = vec![0; a.len() + b.len()];
    add_into(&mut r, &z0);
    add_into(&mut r[2 * m ..], &z2);
    add_into(&mut r[m ..], &z1);
    normalize(&mut r);
    r
}

/// Shift left by `bits`.
pub fn shl(a: &[Limb], bits: usize) -> Vec<Limb> {
    if a.is_empty() {
        return Vec::new();
    }
    let limbs = bits / LIMB_BITS as usize;
    let shift = (bits % LIMB_BITS as usize) as u32;
    let mut r = Vec::with_capacity(limbs + a.len() + 1);
    r.resize(limbs, 0);
    if shift == 0 {
        r.extend_from_slice(a);
    } else {
        let mut carry = 0;
        for &x in a {
            r.push((x << shift) | carry);
            carry = x >> (LIMB_BITS - shift);
        }
        r.push(carry);
    }
    normalize(&mut r);
    r
}

/// Shift right by `bits`, discarding the bits shifted out.  The operand
/// need not be canonical.
pub fn shr(a: &[Limb], bits: usize) -> Vec<Limb> {
    let limbs = bits / LIMB_BITS as usize;
    if limbs >= a.len() {
        return Vec::new();
    }
    let shift = (bits % LIMB_BITS as usize) as u32;
    let a = &a[limbs ..];
    let mut r = Vec::with_capacity(a.len());
    if shift == 0 {
        r.extend_from_slice(a);
    } else {
        for (i, &x) in a.iter().enumerate() {
            let hi = a.get(i + 1).map_or(0, |&y| y << (LIMB_BITS - shift));
            r.push((x >> shift) | hi);
        }
    }
    normalize(&mut r);
    r
}

/// Keep only the lowest `bits` bits, i.e. `a mod 2^bits`.
pub fn low_bits(a: &[Limb], bits: usize) -> Vec<Limb> {
    let limbs = bits / LIMB_BITS as usize;
    if limbs >= a.len() {
        return a.to_vec();
    }
    let shift = (bits % LIMB_BITS as usize) as u32;
    let mut r = a[.. limbs].to_vec();
    if shift != 0 {
        r.push(a[limbs] & ((1 << shift) - 1));
    }
    normalize(&mut r);
    r
}

/// Divide by a single limb, returning quotient and remainder.
///
/// Panics if `d` is zero.
pub fn div_rem_limb(a: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    assert!(d != 0, "division by zero");
    let d = d as DoubleLimb;
    let mut q = vec![0; a.len()];
    let mut rem: DoubleLimb = 0;
    for i in (0 .. a.len()).rev() {
        let t = (rem << LIMB_BITS) | a[i] as DoubleLimb;
        q[i] = (t / d) as Limb;
        rem = t % d;
    }
    normalize(&mut q);
    (q, rem as Limb)
}

/// Remainder of division by a single limb.  The operand need not be
/// canonical.
///
/// Panics if `d` is zero.
pub fn rem_limb(a: &[Limb], d: Limb) -> Limb {
    assert!(d != 0, "division by zero");
    let d = d as DoubleLimb;
    a.iter().rev().fold(0, |rem, &x| {
        ((rem << LIMB_BITS) | x as DoubleLimb) % d
    }) as Limb
}

/// Long division (Knuth, TAOCP vol. 2, 4.3.1, algorithm D).
///
/// Panics if `b` is zero.
pub fn div_rem(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    assert!(!b.is_empty(), "division by zero");
    if cmp(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (q, r) = div_rem_limb(a, b[0]);
        let mut r = vec![r];
        normalize(&mut r);
        return (q, r);
    }

    // normalize so that the top limb of the divisor has its high bit set
    let shift = b[b.len() - 1].leading_zeros() as usize;
    let v = shl(b, shift);
    let mut u = shl(a, shift);
    u.resize(a.len() + 1, 0);
    let n = v.len();
    let m = a.len() - n;
    let base: DoubleLimb = 1 << LIMB_BITS;
    let v_top = v[n - 1] as DoubleLimb;
    let v_next = v[n - 2] as DoubleLimb;
    let mut q = vec![0; m + 1];

    for j in (0 ..= m).rev() {
        let num = ((u[j + n] as DoubleLimb) << LIMB_BITS)
            | u[j + n - 1] as DoubleLimb;
        let mut q_hat = num / v_top;
        let mut r_hat = num % v_top;
        while q_hat >= base
            || q_hat * v_next > ((r_hat << LIMB_BITS) | u[j + n - 2] as DoubleLimb)
        {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat >= base {
                break;
            }
        }

        // u[j ..= j + n] -= q_hat * v
        let mut carry: DoubleLimb = 0;
        let mut borrow = false;
        for i in 0 .. n {
            let p = q_hat * v[i] as DoubleLimb + carry;
            carry = p >> LIMB_BITS;
            let (t, b1) = u[i + j].overflowing_sub(p as Limb);
            let (t, b2) = t.overflowing_sub(borrow as Limb);
            u[i + j] = t;
            borrow = b1 || b2;
        }
        let (t, b1) = u[j + n].overflowing_sub(carry as Limb);
        let (t, b2) = t.overflowing_sub(borrow as Limb);
        u[j + n] = t;

        // q_hat was one too large: add the divisor back
        if b1 || b2 {
            q_hat -= 1;
            let mut carry = false;
            for i in 0 .. n {
                let (s, c1) = u[i + j].overflowing_add(v[i]);
                let (s, c2) = s.overflowing_add(carry as Limb);
                u[i + j] = s;
                carry = c1 || c2;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Limb);
        }
        q[j] = q_hat as Limb;
    }

    normalize(&mut q);
    let r = shr(&u[.. n], shift);
    (q, r)
}

//! Word-sized integer square roots, used as the base case of the
//! arbitrary-precision algorithm.

/// Calculate `s = ⌊√n⌋` together with the remainder `n − s²`.
///
/// The remainder never exceeds `2 s`.
pub fn sqrtrem_u128(n: u128) -> (u64, u128) {
    if n == 0 {
        return (0, 0);
    }
    // use floating-point calculations to get an initial guess; the cast
    // saturates and the guess is never zero since n ≥ 1
    let guess = ((n as f64).sqrt() as u128).max(1);
    // a single Newton step from any positive guess lands on or above ⌊√n⌋
    let mut r = (guess + n / guess) / 2;
    loop { // [invariant] r ≥ ⌊√n⌋ > 0
        let r_new = (r + n / r) / 2;
        // the sequence decreases strictly until it reaches ⌊√n⌋
        if r_new >= r {
            break;
        }
        r = r_new;
    }
    (r as u64, n - r * r)
}

#[test]
fn test() {
    let isqrt = |n: u64| sqrtrem_u128(n as u128).0;
    for n in 0 .. 65535 {
        assert!((isqrt(n)).pow(2) <= n, "⌊√{n}⌋^2 ≤ {n}", n = n);
        assert!((isqrt(n) + 1).pow(2) > n,
                "(⌊√{n}⌋ + 1)^2 > {n}", n = n);
    }
    // test some extreme cases
    for r in 4294967000 .. 4294967296 {
        let n = r * r - 1;
        assert_eq!(isqrt(n), r - 1, "⌊√{}⌋ == {}", n, r - 1);
        let n = r * r;
        assert_eq!(isqrt(n), r, "⌊√{}⌋ == {}", n, r);
        let n = r * r + 1;
        assert_eq!(isqrt(n), r, "⌊√{}⌋ == {}", n, r);
    }
    for n in 0xffffffffffffff00 ..= 0xffffffffffffffff {
        assert_eq!(isqrt(n), 0xffffffff);
    }
}

#[test]
fn test_u128() {
    let max = u64::max_value() as u128;
    assert_eq!(sqrtrem_u128(u128::max_value()), (u64::max_value(), 2 * max));
    assert_eq!(sqrtrem_u128(max * max), (u64::max_value(), 0));
    assert_eq!(sqrtrem_u128(max * max - 1), (u64::max_value() - 1, 2 * max - 2));
    assert_eq!(sqrtrem_u128(15), (3, 6));
    assert_eq!(sqrtrem_u128(16), (4, 0));
    assert_eq!(sqrtrem_u128(2), (1, 1));
    // around powers of two, where the float guess is least accurate
    for e in 33 .. 64 {
        let r = 1u128 << e;
        for d in 0 .. 4 {
            let s = r - d;
            assert_eq!(sqrtrem_u128(s * s), (s as u64, 0));
            assert_eq!(sqrtrem_u128(s * s - 1), (s as u64 - 1, 2 * s - 2));
            assert_eq!(sqrtrem_u128(s * s + 2 * s), (s as u64, 2 * s));
        }
    }
}

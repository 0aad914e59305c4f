#![feature(test)]

extern crate rand;
extern crate rand_xorshift;
extern crate rootrem;
extern crate test;

use rand::SeedableRng;
use rootrem::{random, Mag};

const RNG_SEED: [u8; 16] = [
    0x54, 0x67, 0x3a, 0x19, 0x69, 0xd4, 0xa7, 0xa8, 0x05, 0x0e, 0x83, 0x97, 0xbb, 0xa7, 0x3b, 0x11,
];

fn rand_mag(bits: usize) -> Mag {
    let mut rng = rand_xorshift::XorShiftRng::from_seed(RNG_SEED);
    random::urandomb(&mut rng, bits)
}

fn bench_sqrtrem(bencher: &mut test::Bencher, bits: usize) {
    let u = rand_mag(bits);
    bencher.iter(|| {
        test::black_box(test::black_box(&u).sqrtrem());
    });
}

fn bench_is_perfect_square(bencher: &mut test::Bencher, bits: usize) {
    let s = rand_mag(bits / 2);
    let squares = [&s * &s, &s * &s + Mag::from_u64(1)];
    bencher.iter(|| {
        for u in &squares {
            test::black_box(test::black_box(u).is_perfect_square());
        }
    });
}

#[bench]
fn bench_sqrtrem_100(bencher: &mut test::Bencher) {
    bench_sqrtrem(bencher, 100);
}

#[bench]
fn bench_sqrtrem_400(bencher: &mut test::Bencher) {
    bench_sqrtrem(bencher, 400);
}

#[bench]
fn bench_sqrtrem_4000(bencher: &mut test::Bencher) {
    bench_sqrtrem(bencher, 4000);
}

#[bench]
fn bench_sqrtrem_40000(bencher: &mut test::Bencher) {
    bench_sqrtrem(bencher, 40000);
}

#[bench]
fn bench_is_perfect_square_400(bencher: &mut test::Bencher) {
    bench_is_perfect_square(bencher, 400);
}

#[bench]
fn bench_is_perfect_square_4000(bencher: &mut test::Bencher) {
    bench_is_perfect_square(bencher, 4000);
}

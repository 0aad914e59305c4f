//! Randomized self-check of the square root and perfect-square routines.
//!
//! Each trial draws `u` with `rrandomb`, verifies `sqrtrem(u)` against its
//! defining inequalities, and then feeds a known non-square and a known
//! square to the perfect-square tests, alternating between the signed and
//! the limb-level entry points.
use num::One;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use super::int::{Int, Sign};
use super::mag::Mag;
use super::random;
use super::sieve;
use super::sqrtrem::{self, SqrtRem};

quick_error! {
    /// A failed check.  Values are rendered in hexadecimal.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Error {
        Boundary(what: &'static str) {
            display("perfect-square test failed on {}", what)
        }
        SqrtRem(u: String, root: String, rem: String) {
            display("sqrtrem failed: u = {}, root = {}, rem = {}", u, root, rem)
        }
        NonSquare(entry: &'static str, u: String) {
            display("{} perfect-square test accepted non-square {}", entry, u)
        }
        Square(entry: &'static str, u: String) {
            display("{} perfect-square test rejected square {}", entry, u)
        }
    }
}

/// Configuration for a self-check run.
#[derive(Clone, Copy, Debug)]
pub struct Conf {
    /// Number of trials.
    pub count: u32,
    /// Inputs have at most this many bits.
    pub max_bits: usize,
    pub seed: u64,
}

/// `{ count: 10000, max_bits: 400, .. }`
impl Default for Conf {
    fn default() -> Self {
        Self {
            count: 10_000,
            max_bits: 400,
            seed: 0x5467_3a19_69d4_a7a8,
        }
    }
}

impl Conf {
    pub fn make_run(self) -> Run {
        Run {
            conf: self,
            rng: XorShiftRng::seed_from_u64(self.seed),
            trials: 0,
            exact: 0,
        }
    }
}

/// The state of a self-check run.
#[derive(Clone, Debug)]
pub struct Run {
    pub conf: Conf,
    rng: XorShiftRng,
    trials: u32,
    exact: u32,
}

impl Run {
    /// Number of trials completed so far.
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Number of drawn inputs that turned out to be perfect squares.
    pub fn exact(&self) -> u32 {
        self.exact
    }

    /// `-1` is not a perfect square and `0` is.
    pub fn check_boundaries(&self) -> Result<(), Error> {
        if Int::from(-1i64).is_perfect_square() {
            return Err(Error::Boundary("-1"));
        }
        if !Int::zero().is_perfect_square() {
            return Err(Error::Boundary("0"));
        }
        Ok(())
    }

    /// Signed test for non-positive inputs and odd trials, limb-level test
    /// otherwise.
    fn is_square(&self, x: &Int) -> (&'static str, bool) {
        if x.sign() != Sign::Plus || self.trials % 2 == 1 {
            ("signed", x.is_perfect_square())
        } else {
            ("limb-level", sieve::is_perfect_square_limbs(x.magnitude().limbs()))
        }
    }

    /// Run a single trial.
    pub fn step(&mut self) -> Result<(), Error> {
        let u = random::rrandomb(&mut self.rng, self.conf.max_bits);
        let SqrtRem { root, rem } = u.sqrtrem();
        if !sqrtrem::verify(&u, &root, &rem) {
            tracing::debug!(trial = self.trials, "sqrtrem check failed");
            return Err(Error::SqrtRem(format!("{:#x}", u),
                                      format!("{:#x}", root),
                                      format!("{:#x}", rem)));
        }

        // an exact square is replaced by −u − 1, which is never a square
        let non_square = if rem.is_zero() {
            self.exact += 1;
            Int::new(Sign::Minus, u + Mag::one())
        } else {
            Int::from(u)
        };
        let (entry, is_square) = self.is_square(&non_square);
        if is_square {
            tracing::debug!(trial = self.trials, entry, "non-square accepted");
            return Err(Error::NonSquare(entry, format!("{:#x}", non_square)));
        }

        let square = Int::from(&root * &root);
        let (entry, is_square) = self.is_square(&square);
        if !is_square {
            tracing::debug!(trial = self.trials, entry, "square rejected");
            return Err(Error::Square(entry, format!("{:#x}", square)));
        }

        self.trials += 1;
        Ok(())
    }

    pub fn do_run(&mut self) -> Result<(), Error> {
        self.check_boundaries()?;
        while self.trials < self.conf.count {
            self.step()?;
        }
        tracing::info!(trials = self.trials, exact = self.exact,
                       max_bits = self.conf.max_bits, "self-check passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_run() {
        let mut run = Conf { count: 2000, max_bits: 60, seed: 7 }.make_run();
        run.do_run().unwrap();
        assert_eq!(run.trials(), 2000);
        // draws of 0 or 1 bits are squares, about 1 in 30
        assert!(run.exact() > 0);
    }

    #[test]
    fn test_error_display() {
        let e = Error::NonSquare("signed", "0x10".to_owned());
        assert_eq!(e.to_string(), "signed perfect-square test accepted non-square 0x10");
    }
}

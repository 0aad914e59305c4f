//! Integer square roots with remainder and perfect-square tests for
//! arbitrary-precision integers.
//!
//! ```
//! use rootrem::Int;
//!
//! let (s, r) = rootrem::sqrtrem(&"15".parse::<Int>().unwrap()).unwrap();
//! assert_eq!((s.to_string(), r.to_string()), ("3".to_owned(), "6".to_owned()));
//! assert!(rootrem::is_perfect_square(&Int::from(16u64)));
//! assert!(!rootrem::is_perfect_square(&Int::from(-1i64)));
//! ```
extern crate byteorder;
#[macro_use]
extern crate lazy_static;
extern crate num;
#[macro_use]
extern crate quick_error;
extern crate rand;
extern crate rand_xorshift;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate tracing;

#[macro_use]
mod macros;

pub mod check;
pub mod int;
pub mod isqrt;
pub mod mag;
pub mod mpn;
pub mod random;
pub mod sieve;
pub mod sqrtrem;

pub use int::{is_perfect_square, sqrtrem, Error, Int, Sign};
pub use mag::Mag;
pub use mpn::Limb;
pub use sieve::is_perfect_square_limbs;
pub use sqrtrem::{sqrtrem_limbs, SqrtRem};

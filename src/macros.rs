/// Declare a regular expression (`Regex`) cached via `lazy_static!`.
/// The caller must have `Regex` in scope.
macro_rules! re {
    ($e:expr) => {
        {
            lazy_static! {
                static ref REGEX: Regex = Regex::new($e).unwrap();
            }
            &REGEX
        }
    }
}

/// Implement a binary operator for every combination of owned and borrowed
/// operands, given a function `fn(&T, &T) -> T`.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $t:ty => $f:path) => {
        impl<'a, 'b> $imp<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn $method(self, other: &'b $t) -> $t {
                $f(self, other)
            }
        }

        impl<'a> $imp<&'a $t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, other: &'a $t) -> $t {
                $f(&self, other)
            }
        }

        impl<'a> $imp<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn $method(self, other: $t) -> $t {
                $f(self, &other)
            }
        }

        impl $imp<$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, other: $t) -> $t {
                $f(&self, &other)
            }
        }
    }
}

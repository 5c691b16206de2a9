//! Conversions and arithmetic between scalars and complex numbers.
//!
//! Every supported scalar width promotes to a zero-imaginary complex
//! number, and the mixed operators on both sides delegate to the
//! complex–complex implementations, so a scalar multiply goes through
//! the same polar path as a complex one.

use std::ops::{Add, Div, Mul, Sub};

use crate::Complex;

/// Builds a pure-imaginary complex number from a scalar, `0 + x i`.
pub trait Imaginary {
    /// ```
    /// use argand::{Complex, Imaginary};
    ///
    /// assert_eq!(5.6.j(), Complex::new(0.0, 5.6));
    /// ```
    fn j(self) -> Complex;
}

macro_rules! scalar_conversions {
    ($($scalar:ident),*) => ($(
        impl From<$scalar> for Complex {
            #[inline]
            fn from(re: $scalar) -> Complex {
                Complex::new(re as f64, 0.0)
            }
        }

        impl Imaginary for $scalar {
            #[inline]
            fn j(self) -> Complex {
                Complex::new(0.0, self as f64)
            }
        }
    )*);
}

macro_rules! scalar_arithmetic {
    (@implement $imp:ident::$method:ident for $($scalar:ident),*) => ($(
        impl $imp<$scalar> for Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, other: $scalar) -> Complex {
                self.$method(Complex::from(other))
            }
        }

        impl $imp<Complex> for $scalar {
            type Output = Complex;

            #[inline]
            fn $method(self, other: Complex) -> Complex {
                Complex::from(self).$method(other)
            }
        }
    )*);
    ($($scalar:ident),*) => (
        scalar_arithmetic!(@implement Add::add for $($scalar),*);
        scalar_arithmetic!(@implement Sub::sub for $($scalar),*);
        scalar_arithmetic!(@implement Mul::mul for $($scalar),*);
        scalar_arithmetic!(@implement Div::div for $($scalar),*);
    );
}

scalar_conversions!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);
scalar_arithmetic!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);

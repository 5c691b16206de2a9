// Copyright 2026 The Argand Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An immutable complex number type.
//!
//! `Complex` is a plain `(re, im)` pair of `f64` with value semantics:
//! every operation returns a new value. Numbers can be built in Cartesian
//! form or from polar coordinates (radians or degrees), compared with a
//! fixed tolerance, ordered under a configurable sort mode, rotated,
//! raised to integer powers, and decomposed into their n-th roots.
//!
//! ```
//! use argand::Complex;
//!
//! let z = Complex::new(2.0, 3.4);
//! let w = Complex::from_polar_radian(2.0, std::f64::consts::FRAC_PI_4).unwrap();
//! assert_eq!(z + w, Complex::new(3.4142135, 4.8142135));
//! ```
//!
//! Equality is tolerant (both components within `1e-4`) while hashing is
//! bit-exact, so two equal values are not guaranteed to share a hash; see
//! the `PartialEq` and `Hash` impl notes on [`Complex`].

use std::cmp::Ordering;
use std::error::Error;
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{One, Pow, Zero};

mod scalar;
mod sort;

#[cfg(any(test, feature = "quickcheck"))]
mod quickcheck_impls;
#[cfg(feature = "rand")]
mod rand_impls;

pub use crate::scalar::Imaginary;
pub use crate::sort::{set_sort_mode, sort_mode, SortMode};

/// Absolute tolerance used by equality comparisons.
const DELTA: f64 = 1e-4;

/// A complex number in Cartesian form.
///
/// The value is immutable in the sense that no operation mutates its
/// receiver; arithmetic, rotation, powers and roots all return new
/// instances. The type is `Copy`, and a copy is the Cartesian snapshot
/// of the components regardless of how the original was constructed.
#[derive(Copy, Clone, Debug, Default)]
pub struct Complex {
    /// Real portion of the complex number
    pub re: f64,
    /// Imaginary portion of the complex number
    pub im: f64,
}

/// How a complex number is being constructed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Form {
    /// Direct `(re, im)` components.
    Cartesian(f64, f64),
    /// A non-negative length and an angle in degrees.
    PolarDegree(f64, f64),
    /// A non-negative length and an angle in radians.
    PolarRadian(f64, f64),
}

/// Which way a rotation is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    #[inline]
    fn signum(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

#[inline]
fn normalize(angle: f64) -> f64 {
    angle % TAU
}

#[inline]
fn check_length(length: f64) -> Result<(), NegativeLengthError> {
    if length >= 0.0 {
        Ok(())
    } else {
        Err(NegativeLengthError { length })
    }
}

impl Complex {
    /// Create a new `Complex` from Cartesian components.
    #[inline]
    pub fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// Returns the imaginary unit.
    #[inline]
    pub fn i() -> Complex {
        Complex::new(0.0, 1.0)
    }

    /// Convert a polar representation (length, angle in radians) into a
    /// complex number.
    ///
    /// The angle is reduced modulo `2π` before the components are
    /// computed. Fails when the length is negative (or NaN).
    #[inline]
    pub fn from_polar_radian(length: f64, angle: f64) -> Result<Complex, NegativeLengthError> {
        check_length(length)?;
        Ok(Complex::polar_radian(length, angle))
    }

    /// Convert a polar representation (length, angle in degrees) into a
    /// complex number.
    ///
    /// The angle is converted to radians and reduced modulo `2π`. When
    /// the computed real part lands negative, `π` is added to the
    /// imaginary part; this shift is part of the degree-mode contract
    /// and does not happen in radian mode. Fails when the length is
    /// negative (or NaN).
    pub fn from_polar_degree(length: f64, angle: f64) -> Result<Complex, NegativeLengthError> {
        check_length(length)?;
        let angle = normalize(angle.to_radians());
        let re = length * angle.cos();
        let im = length * angle.sin() + if re < 0.0 { PI } else { 0.0 };
        Ok(Complex::new(re, im))
    }

    // Polar construction without the length guard. Arithmetic results
    // funnel through here so anomalous lengths and phases stay plain
    // IEEE special values instead of turning into errors.
    #[inline]
    fn polar_radian(length: f64, angle: f64) -> Complex {
        let angle = normalize(angle);
        Complex::new(length * angle.cos(), length * angle.sin())
    }

    /// Calculate the magnitude, `sqrt(re^2 + im^2)`.
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Alias of [`norm`](Complex::norm).
    #[inline]
    pub fn abs(&self) -> f64 {
        self.norm()
    }

    /// Calculate the phase angle in radians.
    ///
    /// The phase is the single-argument arctangent of `im / re`, so it
    /// only identifies angles within `(-π/2, π/2)`: a value with a
    /// negative real part reports the phase of its reflection through
    /// the origin. At `re == 0` the quotient follows IEEE division
    /// semantics, giving `±π/2`, or NaN for the origin itself.
    #[inline]
    pub fn phase(&self) -> f64 {
        (self.im / self.re).atan()
    }

    /// Calculate the phase angle in degrees.
    #[inline]
    pub fn phase_degrees(&self) -> f64 {
        self.phase().to_degrees()
    }

    /// Returns the complex conjugate, `(re, -im)`.
    #[inline]
    pub fn conj(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// The slope of the line from the origin through this value,
    /// `tan(phase)`.
    #[inline]
    pub fn derivative(&self) -> f64 {
        self.phase().tan()
    }

    /// The area of the triangle spanned by this value and the real
    /// axis, `re * im / 2`.
    #[inline]
    pub fn integral(&self) -> f64 {
        self.re * self.im / 2.0
    }

    /// Returns `self + 1` as a new value; the receiver is unchanged.
    #[inline]
    pub fn inc(&self) -> Complex {
        *self + Complex::one()
    }

    /// Returns `self - 1` as a new value; the receiver is unchanged.
    #[inline]
    pub fn dec(&self) -> Complex {
        *self - Complex::one()
    }

    /// Raises `self` to an integer power.
    ///
    /// Exponents of any signed width (and unsigned widths up to `u32`)
    /// are accepted and narrowed to `i32` before the computation. The
    /// result is built in polar form, `(norm^exp, phase * exp)`.
    #[inline]
    pub fn powi<E: Into<i64>>(&self, exp: E) -> Complex {
        let exp = exp.into() as i32;
        Complex::polar_radian(self.norm().powi(exp), self.phase() * f64::from(exp))
    }

    /// Returns the `n` complex `n`-th roots of `self`, one per angle
    /// offset `k * 2π / n` for `k` in `0..n`.
    ///
    /// The order is by increasing `k`; callers must not assume the
    /// roots are sorted by magnitude or phase.
    ///
    /// ```
    /// use argand::Complex;
    ///
    /// let roots = Complex::new(23.0, 79.0).nth_roots(2);
    /// assert_eq!(roots.len(), 2);
    /// assert_eq!(roots[0], Complex::new(7.255343, 5.444263));
    /// assert_eq!(roots[1], Complex::new(-7.255343, -5.444263));
    /// ```
    pub fn nth_roots(&self, n: u32) -> Vec<Complex> {
        let n_f = f64::from(n);
        let length = self.norm().powf(1.0 / n_f);
        let phase = self.phase();
        (0..n)
            .map(|k| Complex::polar_radian(length, phase / n_f + f64::from(k) * TAU / n_f))
            .collect()
    }

    /// Rotates `self` by an angle in radians around the origin.
    #[inline]
    pub fn rotate_radians(&self, angle: f64, direction: Direction) -> Complex {
        Complex::polar_radian(self.norm(), self.phase() + direction.signum() * angle)
    }

    /// Rotates `self` by an angle in degrees around the origin.
    #[inline]
    pub fn rotate_degrees(&self, angle: f64, direction: Direction) -> Complex {
        self.rotate_radians(angle.to_radians(), direction)
    }

    /// Compares two values by the scalar selected by `mode`, using the
    /// sign of the exact floating-point difference (no tolerance).
    ///
    /// This is the explicit-comparator form of the ordering that
    /// `PartialOrd` reads from the process-wide [`sort_mode`]:
    ///
    /// ```
    /// use argand::{Complex, SortMode};
    ///
    /// let mut xs = [Complex::new(2.0, 3.4), Complex::new(1.5, 30.3)];
    /// xs.sort_by(|a, b| a.compare_by(b, SortMode::Real));
    /// assert_eq!(xs[0], Complex::new(1.5, 30.3));
    /// ```
    pub fn compare_by(&self, other: &Complex, mode: SortMode) -> Ordering {
        let (value1, value2) = match mode {
            SortMode::Magnitude => (self.norm(), other.norm()),
            SortMode::Phase => (self.phase(), other.phase()),
            SortMode::Real => (self.re, other.re),
            SortMode::Imaginary => (self.im, other.im),
        };
        if value1 - value2 < 0.0 {
            Ordering::Less
        } else if value1 - value2 > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// The Cartesian rendering, identical to the `Display` form.
    #[inline]
    pub fn to_cartesian_string(&self) -> String {
        self.to_string()
    }

    /// The polar rendering with the angle in degrees.
    #[inline]
    pub fn to_polar_degree_string(&self) -> String {
        format!(
            "Length is {}, and angle is {}",
            self.norm(),
            self.phase_degrees()
        )
    }

    /// The polar rendering with the angle in radians.
    #[inline]
    pub fn to_polar_radian_string(&self) -> String {
        format!("Length is {}, and angle is {}", self.norm(), self.phase())
    }

    /// Checks if the given complex number is NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Checks if the given complex number is infinite
    #[inline]
    pub fn is_infinite(self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// Checks if the given complex number is finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl TryFrom<Form> for Complex {
    type Error = NegativeLengthError;

    /// Dispatches on the construction mode; the polar modes fail on a
    /// negative length.
    fn try_from(form: Form) -> Result<Complex, NegativeLengthError> {
        match form {
            Form::Cartesian(re, im) => Ok(Complex::new(re, im)),
            Form::PolarDegree(length, angle) => Complex::from_polar_degree(length, angle),
            Form::PolarRadian(length, angle) => Complex::from_polar_radian(length, angle),
        }
    }
}

/* equality, hashing, ordering */

/// Component-wise tolerance comparison: both `re` and `im` must differ
/// by less than `1e-4`.
///
/// The relation is not transitive under chains of small errors, and it
/// deliberately disagrees with `Hash`, which is bit-exact: `a == b`
/// does not imply `hash(a) == hash(b)`.
impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Complex) -> bool {
        (self.re - other.re).abs() < DELTA && (self.im - other.im).abs() < DELTA
    }
}

/// Hashes the exact bit patterns of both components. Values that
/// compare equal within tolerance but are not bit-identical hash
/// differently.
impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.re.to_bits().hash(state);
        self.im.to_bits().hash(state);
    }
}

/// Ordering under the process-wide [`sort_mode`]. Reconfiguring the
/// mode changes the result of subsequent comparisons on the same pair
/// of values.
impl PartialOrd for Complex {
    #[inline]
    fn partial_cmp(&self, other: &Complex) -> Option<Ordering> {
        Some(self.compare_by(other, sort_mode()))
    }
}

impl AbsDiffEq for Complex {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        DELTA
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.re, &other.re, epsilon)
            && f64::abs_diff_eq(&self.im, &other.im, epsilon)
    }
}

impl RelativeEq for Complex {
    #[inline]
    fn default_max_relative() -> f64 {
        <f64 as RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.re, &other.re, epsilon, max_relative)
            && f64::relative_eq(&self.im, &other.im, epsilon, max_relative)
    }
}

/* arithmetic */

macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a> $imp<&'a Complex> for Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, other: &Complex) -> Complex {
                self.$method(*other)
            }
        }

        impl<'a> $imp<Complex> for &'a Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, other: Complex) -> Complex {
                (*self).$method(other)
            }
        }

        impl<'a, 'b> $imp<&'b Complex> for &'a Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, other: &Complex) -> Complex {
                (*self).$method(*other)
            }
        }
    };
}

forward_ref_binop!(impl Add, add);

// (a + i b) + (c + i d) == (a + c) + i (b + d)
impl Add<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

forward_ref_binop!(impl Sub, sub);

// (a + i b) - (c + i d) == (a - c) + i (b - d)
impl Sub<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

forward_ref_binop!(impl Mul, mul);

// r1 e^(i t1) * r2 e^(i t2) == (r1 r2) e^(i (t1 + t2))
//
// The product goes through polar construction, so it inherits the
// angle reduction and the phase behavior at re == 0.
impl Mul<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        Complex::polar_radian(self.norm() * other.norm(), self.phase() + other.phase())
    }
}

forward_ref_binop!(impl Div, div);

// r1 e^(i t1) / r2 e^(i t2) == (r1 / r2) e^(i (t1 - t2))
//
// A zero-magnitude divisor yields infinity/NaN components, never an
// error.
impl Div<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, other: Complex) -> Complex {
        Complex::polar_radian(self.norm() / other.norm(), self.phase() - other.phase())
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

// Compound assignment is reassignment sugar over the value-returning
// operators; scalar right-hand sides promote like everywhere else.
impl<T: Into<Complex>> AddAssign<T> for Complex {
    #[inline]
    fn add_assign(&mut self, other: T) {
        *self = *self + other.into();
    }
}

impl<T: Into<Complex>> SubAssign<T> for Complex {
    #[inline]
    fn sub_assign(&mut self, other: T) {
        *self = *self - other.into();
    }
}

impl<T: Into<Complex>> MulAssign<T> for Complex {
    #[inline]
    fn mul_assign(&mut self, other: T) {
        *self = *self * other.into();
    }
}

impl<T: Into<Complex>> DivAssign<T> for Complex {
    #[inline]
    fn div_assign(&mut self, other: T) {
        *self = *self / other.into();
    }
}

macro_rules! pow_impl {
    ($($exp:ty),*) => ($(
        impl Pow<$exp> for Complex {
            type Output = Complex;

            #[inline]
            fn pow(self, exp: $exp) -> Complex {
                self.powi(exp)
            }
        }
    )*);
}

pow_impl!(i8, i16, i32, i64, u8, u16, u32);

/* constants */

impl Zero for Complex {
    #[inline]
    fn zero() -> Complex {
        Complex::new(0.0, 0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Complex {
        Complex::new(1.0, 0.0)
    }
}

/* string conversions */

/// The default rendering is the Cartesian form.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Real part is {}, and imaginary part is {}",
            self.re, self.im
        )
    }
}

/* errors */

/// The error produced when a polar constructor is given a negative
/// length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NegativeLengthError {
    length: f64,
}

impl NegativeLengthError {
    /// The offending length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl fmt::Display for NegativeLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the length of a complex number cannot be negative, was {}",
            self.length
        )
    }
}

impl Error for NegativeLengthError {}

/* serialization */

#[cfg(feature = "serde")]
impl serde::Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.re, self.im), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (re, im) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Complex::new(re, im))
    }
}

#[cfg(test)]
fn hash<T: Hash>(x: &T) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;
    let mut hasher = <RandomState as BuildHasher>::Hasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

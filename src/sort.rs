//! The process-wide sort mode read by ordering comparisons.

use std::sync::atomic::{AtomicU8, Ordering};

/// Which scalar a pair of complex numbers is ordered by.
///
/// It does not make sense to configure this per value, so one selector
/// is shared by every comparison in the process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortMode {
    Magnitude,
    Phase,
    Real,
    Imaginary,
}

impl Default for SortMode {
    #[inline]
    fn default() -> SortMode {
        SortMode::Magnitude
    }
}

impl SortMode {
    fn from_u8(raw: u8) -> SortMode {
        match raw {
            1 => SortMode::Phase,
            2 => SortMode::Real,
            3 => SortMode::Imaginary,
            _ => SortMode::Magnitude,
        }
    }
}

static SORT_MODE: AtomicU8 = AtomicU8::new(SortMode::Magnitude as u8);

/// Returns the sort mode currently read by ordering comparisons.
#[inline]
pub fn sort_mode() -> SortMode {
    SortMode::from_u8(SORT_MODE.load(Ordering::Relaxed))
}

/// Selects the scalar that subsequent ordering comparisons use, for
/// the whole process.
///
/// The selector is a single relaxed atomic, nothing more: with one
/// writer at a time (typical usage is test or program setup) every
/// comparison sees either the old or the new mode. Reconfiguring it
/// from one thread while another thread is mid-sort leaves each
/// individual comparison picking up whichever mode it happens to read,
/// so keep writes serialized with the comparisons that depend on them.
///
/// ```
/// use argand::{set_sort_mode, Complex, SortMode};
///
/// let a = Complex::new(2.0, 3.4);
/// let b = Complex::new(1.5, 30.3);
/// assert!(a < b); // magnitude order by default
/// set_sort_mode(SortMode::Real);
/// assert!(a > b);
/// ```
#[inline]
pub fn set_sort_mode(mode: SortMode) {
    SORT_MODE.store(mode as u8, Ordering::Relaxed);
}

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::Complex;

impl Distribution<Complex> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        Complex::new(rng.gen(), rng.gen())
    }
}

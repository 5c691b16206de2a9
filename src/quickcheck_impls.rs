use quickcheck::{Arbitrary, Gen};

use crate::Complex;

impl Arbitrary for Complex {
    fn arbitrary(g: &mut Gen) -> Self {
        Complex::new(f64::arbitrary(g), f64::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((self.re, self.im).shrink().map(|(re, im)| Complex::new(re, im)))
    }
}

use core::ops::{Add, Mul, Sub};

/// Capabilities a matrix element must provide for the numeric operations:
/// zero tests, iota fills, elementwise arithmetic and dot products.
///
/// Plain container operations (indexing, row access, transpose, printing)
/// place no bound beyond `T` or `T: Clone`; this trait only gates the
/// operations that need a zero value or arithmetic.
pub trait Element:
    Clone + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity of the element type.
    fn zero() -> Self;

    /// The multiplicative identity, also the step used by iota fills.
    fn one() -> Self;
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn zero() -> Self {
                    0 as $t
                }

                #[inline]
                fn one() -> Self {
                    1 as $t
                }
            }
        )*
    };
}

impl_element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_for_primitives() {
        assert_eq!(<u32 as Element>::zero(), 0);
        assert_eq!(<i64 as Element>::one(), 1);
        assert_eq!(<f64 as Element>::zero(), 0.0);
    }

    #[test]
    fn iota_step_is_successor() {
        let mut x = <i32 as Element>::zero();
        x = x + <i32 as Element>::one();
        x = x + <i32 as Element>::one();
        assert_eq!(x, 2);
    }
}

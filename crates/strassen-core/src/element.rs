use std::fmt::{Debug, Display};

/// Integer entry type of a matrix.
///
/// Arithmetic wraps on overflow in every build profile (two's complement for
/// signed types). Products of large entries therefore silently wrap instead
/// of panicking in debug builds; callers that need exact results must keep
/// their inputs small enough.
pub trait Element: Copy + Default + PartialEq + Eq + Debug + Display + 'static {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Short type name used in log records (e.g. "i32").
    const NAME: &'static str;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
}

impl_element!(i32, i64, u32, u64);

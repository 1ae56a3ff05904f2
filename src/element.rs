use std::fmt::Debug;

/// Totally ordered scalar the merge engine can sort.
///
/// `sentinel` returns a value no real element compares greater than. Types that
/// have none keep the default and cannot use `BufferStrategy::Sentinel`.
pub trait Element: Copy + Ord + Debug {
    fn sentinel() -> Option<Self> {
        None
    }
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn sentinel() -> Option<Self> {
                    Some(<$t>::MAX)
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

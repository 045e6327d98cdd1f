use std::{hash::Hash, ops::Shl};

use num_traits::{AsPrimitive, NumCast, PrimInt};

/// Trait for types which can act as indices within an array (or an array-like structure).
pub trait ArrayIndex:
    PrimInt
    + AsPrimitive<usize>
    + AsPrimitive<u8>
    + Shl<Self, Output = Self>
    + Hash
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Convert an array offset into this index type.
    ///
    /// # Panics
    ///
    /// * `index` > `Self::max_value()`
    #[inline]
    fn from_usize(index: usize) -> Self {
        <Self as NumCast>::from(index).unwrap_or_else(|| {
            panic!(
                "index {index} out of range for {}",
                std::any::type_name::<Self>()
            )
        })
    }

    /// Whether `len` elements can be addressed with this index type.
    #[inline]
    fn can_address(len: usize) -> bool {
        len == 0 || <Self as NumCast>::from(len - 1).is_some()
    }
}
impl<P> ArrayIndex for P where
    P: PrimInt
        + AsPrimitive<usize>
        + AsPrimitive<u8>
        + Shl<Self, Output = Self>
        + Hash
        + std::fmt::Debug
        + Send
        + Sync
        + 'static
{
}

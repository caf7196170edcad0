use alloc::{
    boxed::Box,
    string::String,
};

/// Values that may be stored in a bag.
///
/// # Note
///
/// Every item type may reserve one "vacant" value that stands for the absence
/// of an item. Bags refuse to store it so that no stored value is ever
/// mistaken for an empty slot. Most types have no such value and keep the
/// default implementation.
pub trait Item: PartialEq {
    /// Returns `true` if `self` is the reserved vacant marker of its type.
    #[inline]
    fn is_vacant(&self) -> bool {
        false
    }
}

macro_rules! impl_never_vacant {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl Item for $ty {}
        )*
    };
}

impl_never_vacant!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char,
);

/// The empty string is the vacant tile.
impl Item for str {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Item for String {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Item for Option<T>
where
    T: PartialEq,
{
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

impl<T> Item for &'_ T
where
    T: Item + ?Sized,
{
    #[inline]
    fn is_vacant(&self) -> bool {
        (**self).is_vacant()
    }
}

impl<T> Item for Box<T>
where
    T: Item + ?Sized,
{
    #[inline]
    fn is_vacant(&self) -> bool {
        (**self).is_vacant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_never_vacant() {
        assert!(!0u32.is_vacant());
        assert!(!0i64.is_vacant());
        assert!(!'\0'.is_vacant());
        assert!(!false.is_vacant());
    }

    #[test]
    fn empty_strings_are_vacant() {
        assert!("".is_vacant());
        assert!(!"A".is_vacant());
        assert!(String::new().is_vacant());
        assert!(!String::from("kiwi").is_vacant());
        assert!(Box::<str>::from("").is_vacant());
    }

    #[test]
    fn none_is_vacant() {
        assert!(None::<u8>.is_vacant());
        assert!(!Some(0u8).is_vacant());
        assert!(!(&Some(1u8)).is_vacant());
    }
}

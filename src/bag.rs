use crate::Error;
use core::fmt::{
    self,
    Display,
    Formatter,
};
use rand::RngCore;

/// The operations shared by every bag implementation.
///
/// A bag is an unordered collection that permits duplicates. Implementations
/// document their own traversal order and which end [`Bag::remove`] takes from.
///
/// # Note
///
/// - None of the operations fail on an empty bag: they yield `None` or `false`.
/// - The trait is object safe, so a backing may be chosen at runtime
///   behind a `Box<dyn Bag<T>>`.
pub trait Bag<T> {
    /// Inserts one occurrence of the item.
    ///
    /// # Errors
    ///
    /// If the item is the vacant marker of its type.
    fn add(&mut self, item: T) -> Result<(), Error>;

    /// Removes and returns the item at the natural end of the bag if any.
    fn remove(&mut self) -> Option<T>;

    /// Returns the item that [`Bag::remove`] would take, without removing it.
    fn get(&self) -> Option<&T>;

    /// Returns `true` if at least one stored item equals `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of stored items, counting duplicates.
    fn len(&self) -> usize;

    /// Returns `true` if the bag stores no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes exactly one occurrence equal to `item`.
    ///
    /// Returns `true` if an occurrence was found and removed.
    fn remove_item(&mut self, item: &T) -> bool;

    /// Returns a uniformly chosen item, drawing from the given generator.
    fn get_random_with(&self, rng: &mut dyn RngCore) -> Option<&T>;

    /// Removes and returns a uniformly chosen item, drawing from the given generator.
    fn remove_random_with(&mut self, rng: &mut dyn RngCore) -> Option<T>;

    /// Returns a uniformly chosen item using the thread local generator.
    #[cfg(feature = "std")]
    #[inline]
    fn get_random(&self) -> Option<&T> {
        self.get_random_with(&mut rand::thread_rng())
    }

    /// Removes and returns a uniformly chosen item using the thread local generator.
    #[cfg(feature = "std")]
    #[inline]
    fn remove_random(&mut self) -> Option<T> {
        self.remove_random_with(&mut rand::thread_rng())
    }
}

/// Writes the items as `[ a b c ]`, or `[ ]` if there are none.
pub(crate) fn write_items<'a, T, I>(f: &mut Formatter, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[ ")?;
    for item in items {
        write!(f, "{} ", item)?;
    }
    f.write_str("]")
}

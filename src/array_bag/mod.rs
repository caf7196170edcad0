//! A bag backed by a contiguous buffer that doubles when it runs full.

mod iter;


pub use self::iter::Iter;
use crate::{
    bag::write_items,
    random::pick_index,
    Bag,
    Error,
    Item,
};
use alloc::{
    boxed::Box,
    vec::Vec,
};
use core::{
    fmt,
    fmt::{
        Debug,
        Display,
        Formatter,
    },
};
use rand::RngCore;

/// The number of slots of a bag created by [`ArrayBag::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A bag storing its items in a growable contiguous buffer.
///
/// # Note
///
/// - Occupied slots always form the prefix `0..len` of the buffer.
/// - [`Bag::remove`] and [`Bag::get`] act on the most recently added item.
/// - Iteration and text rendering follow insertion order.
/// - The capacity never shrinks.
#[derive(Clone)]
pub struct ArrayBag<T> {
    /// The number of occupied slots.
    len: usize,
    /// All slots; the length of this buffer is the capacity of the bag.
    slots: Box<[Option<T>]>,
}

impl<T> Default for ArrayBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayBag<T> {
    /// Creates an empty bag with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty bag with the given number of slots.
    ///
    /// # Panics
    ///
    /// If the slots cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            slots: core::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Creates an empty bag with the given number of slots.
    ///
    /// # Errors
    ///
    /// - If the capacity is negative or does not fit into a `usize`.
    /// - If the slots cannot be allocated.
    pub fn try_with_capacity<C>(capacity: C) -> Result<Self, Error>
    where
        C: TryInto<usize>,
    {
        let capacity: usize = capacity
            .try_into()
            .map_err(|_| Error::NegativeCapacity)?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| Error::CapacityOverflow)?;
        slots.resize_with(capacity, || None);
        Ok(Self {
            len: 0,
            slots: slots.into_boxed_slice(),
        })
    }

    /// Returns the number of slots the bag has allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns an iterator over the items in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.slots[..self.len])
    }

    /// Doubles the buffer if every slot is occupied.
    fn ensure_space(&mut self) {
        if self.len < self.capacity() {
            return
        }
        let new_capacity = self.capacity().saturating_mul(2).max(1);
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(self.slots.iter_mut().map(Option::take));
        grown.resize_with(new_capacity, || None);
        self.slots = grown.into_boxed_slice();
    }

    /// Takes the item at `index` and shifts the following items one slot left.
    fn take_at(&mut self, index: usize) -> Option<T> {
        let taken = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        taken
    }
}

impl<T> Bag<T> for ArrayBag<T>
where
    T: Item,
{
    fn add(&mut self, item: T) -> Result<(), Error> {
        if item.is_vacant() {
            return Err(Error::VacantItem)
        }
        self.ensure_space();
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.len = last;
        self.slots[last].take()
    }

    fn get(&self) -> Option<&T> {
        let last = self.len.checked_sub(1)?;
        self.slots[last].as_ref()
    }

    fn contains(&self, item: &T) -> bool {
        self.iter().any(|stored| stored == item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    /// Removes the last occurrence of `item`.
    fn remove_item(&mut self, item: &T) -> bool {
        let found = self.iter().rposition(|stored| stored == item);
        match found {
            Some(index) => self.take_at(index).is_some(),
            None => false,
        }
    }

    fn get_random_with(&self, rng: &mut dyn RngCore) -> Option<&T> {
        let index = pick_index(rng, self.len)?;
        self.slots[index].as_ref()
    }

    fn remove_random_with(&mut self, rng: &mut dyn RngCore) -> Option<T> {
        let index = pick_index(rng, self.len)?;
        self.take_at(index)
    }
}

impl<'a, T> IntoIterator for &'a ArrayBag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Display for ArrayBag<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_items(f, self)
    }
}

impl<T> Debug for ArrayBag<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

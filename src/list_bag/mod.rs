//! A bag backed by a singly linked ring that starts and ends at a sentinel node.
//!
//! Nodes live in an arena and link to each other by index. Index 0 is a
//! permanent sentinel node that never holds an item; an empty ring
//! is the sentinel linking to itself. Detached nodes are kept on a free stack
//! and reused by later insertions.

mod iter;

#[cfg(test)]
mod tests;

pub use self::iter::Iter;
use crate::{
    bag::write_items,
    random::pick_index,
    Bag,
    Error,
    Item,
};
use alloc::vec::Vec;
use core::fmt::{
    self,
    Debug,
    Display,
    Formatter,
};
use rand::RngCore;

/// The arena index of the sentinel node.
const SENTINEL: usize = 0;

/// A node of the ring.
#[derive(Debug, Clone)]
struct Node<T> {
    /// The stored item, `None` for the sentinel and for free nodes.
    item: Option<T>,
    /// Index of the following node.
    next: usize,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Self {
            item: None,
            next: SENTINEL,
        }
    }
}

/// A bag storing its items in a singly linked ring.
///
/// # Note
///
/// - Insertion is always directly after the sentinel, at the front.
/// - [`Bag::remove`] and [`Bag::get`] act on the front, i.e. the most
///   recently added item.
/// - Iteration and text rendering go from the front, i.e. newest first.
#[derive(Clone)]
pub struct ListBag<T> {
    /// The sentinel at index 0 followed by real and free nodes.
    nodes: Vec<Node<T>>,
    /// Indices of detached nodes ready for reuse.
    free: Vec<usize>,
    /// The number of real nodes in the ring.
    len: usize,
}

impl<T> Default for ListBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListBag<T> {
    /// Creates an empty ring.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty ring with room for `capacity` nodes before reallocating.
    ///
    /// # Panics
    ///
    /// If the nodes cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty ring with room for `capacity` nodes before reallocating.
    ///
    /// # Errors
    ///
    /// - If the capacity is negative or does not fit into a `usize`.
    /// - If the nodes cannot be allocated.
    pub fn try_with_capacity<C>(capacity: C) -> Result<Self, Error>
    where
        C: TryInto<usize>,
    {
        let capacity: usize = capacity
            .try_into()
            .map_err(|_| Error::NegativeCapacity)?;
        // One extra node for the sentinel.
        let total = capacity.checked_add(1).ok_or(Error::CapacityOverflow)?;
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(total)
            .map_err(|_| Error::CapacityOverflow)?;
        nodes.push(Node::sentinel());
        Ok(Self {
            nodes,
            free: Vec::new(),
            len: 0,
        })
    }

    /// Returns an iterator over the items from the front, newest first.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.nodes, SENTINEL, self.len)
    }

    /// Returns the index of the node following `index` unless it is the sentinel.
    #[inline]
    fn next_of(&self, index: usize) -> Option<usize> {
        let next = self.nodes[index].next;
        if next == SENTINEL {
            return None
        }
        Some(next)
    }

    /// Returns the index of the front node if any.
    #[inline]
    fn front(&self) -> Option<usize> {
        self.next_of(SENTINEL)
    }

    /// Stores the item in a free or new node linking to `next`.
    fn alloc(&mut self, item: T, next: usize) -> usize {
        let node = Node {
            item: Some(item),
            next,
        };
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Detaches the node following `prev` and returns its item.
    ///
    /// Returns `None` if `prev` is the last node of the ring.
    fn unlink_after(&mut self, prev: usize) -> Option<T> {
        let target = self.next_of(prev)?;
        self.nodes[prev].next = self.nodes[target].next;
        self.nodes[target].next = SENTINEL;
        self.free.push(target);
        self.len -= 1;
        self.nodes[target].item.take()
    }

    /// Returns the index of the node `steps` nodes behind the sentinel.
    ///
    /// Zero steps is the sentinel itself.
    fn walk(&self, steps: usize) -> usize {
        let mut current = SENTINEL;
        for _ in 0..steps {
            current = self.nodes[current].next;
        }
        current
    }
}

impl<T> Bag<T> for ListBag<T>
where
    T: Item,
{
    fn add(&mut self, item: T) -> Result<(), Error> {
        if item.is_vacant() {
            return Err(Error::VacantItem)
        }
        let front = self.nodes[SENTINEL].next;
        let index = self.alloc(item, front);
        self.nodes[SENTINEL].next = index;
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self) -> Option<T> {
        self.unlink_after(SENTINEL)
    }

    fn get(&self) -> Option<&T> {
        self.front().and_then(|index| self.nodes[index].item.as_ref())
    }

    fn contains(&self, item: &T) -> bool {
        self.iter().any(|stored| stored == item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    /// Removes the occurrence of `item` closest to the front.
    fn remove_item(&mut self, item: &T) -> bool {
        let mut prev = SENTINEL;
        while let Some(current) = self.next_of(prev) {
            if self.nodes[current].item.as_ref() == Some(item) {
                return self.unlink_after(prev).is_some()
            }
            prev = current;
        }
        false
    }

    fn get_random_with(&self, rng: &mut dyn RngCore) -> Option<&T> {
        let steps = pick_index(rng, self.len)?;
        self.iter().nth(steps)
    }

    /// Removes exactly the sampled node, even if other nodes hold equal items.
    fn remove_random_with(&mut self, rng: &mut dyn RngCore) -> Option<T> {
        let steps = pick_index(rng, self.len)?;
        let prev = self.walk(steps);
        self.unlink_after(prev)
    }
}

impl<'a, T> IntoIterator for &'a ListBag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Display for ListBag<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_items(f, self)
    }
}

impl<T> Debug for ListBag<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

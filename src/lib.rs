#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Unordered multisets ("bags") with two interchangeable backings.
//!
//! - [`ArrayBag`]: a contiguous buffer that doubles its capacity when full.
//! - [`ListBag`]: a singly linked ring anchored at a permanent sentinel node.
//!
//! Both implement the [`Bag`] contract, so callers can draw items from and
//! return items to a pool without caring which storage backs it.
//!
//! ## Example
//!
//! ```
//! use tile_bag::{random, ArrayBag, Bag};
//!
//! let mut rng = random::seeded_rng(7);
//! let mut pool = ArrayBag::new();
//! for letter in ["A", "B", "B"] {
//!     pool.add(letter).unwrap();
//! }
//! assert!(pool.contains(&"B"));
//! let drawn = pool.remove_random_with(&mut rng).unwrap();
//! assert!(["A", "B"].contains(&drawn));
//! assert_eq!(pool.len(), 2);
//! ```

extern crate alloc;

pub mod array_bag;
mod bag;
mod item;
pub mod list_bag;
pub mod random;


pub use self::{
    array_bag::ArrayBag,
    bag::Bag,
    item::Item,
    list_bag::ListBag,
};
use core::fmt;

/// Errors that may occur when operating on a bag.
///
/// Running out of items is not an error: the affected operations return
/// `None` or `false` instead.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The item is the reserved vacant marker of its type and cannot be stored.
    VacantItem,
    /// A negative or otherwise unrepresentable capacity was requested.
    NegativeCapacity,
    /// The requested capacity is too large to be allocated.
    CapacityOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::VacantItem => write!(f, "cannot add the vacant marker to a bag"),
            Self::NegativeCapacity => write!(f, "bag capacity must not be negative"),
            Self::CapacityOverflow => write!(f, "bag capacity exceeds what can be allocated"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

use super::{
    Node,
    SENTINEL,
};
use core::iter::FusedIterator;

/// Iterator over the items of a [`ListBag`](super::ListBag), front to back.
///
/// Yields `None` once the traversal arrives back at the sentinel.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    current: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(nodes: &'a [Node<T>], start: usize, remaining: usize) -> Self {
        Self {
            nodes,
            current: start,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None
        }
        let next = self.nodes[self.current].next;
        if next == SENTINEL {
            self.remaining = 0;
            return None
        }
        self.current = next;
        self.remaining -= 1;
        self.nodes[next].item.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

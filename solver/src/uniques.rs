//! Ordered set of unique cell indices, kept as an ascending singly-linked chain.
//!
//! The flood fill uses it as its frontier: inserts scan from the head, and the
//! smallest index is always popped first.

use std::fmt;

type Link = Option<Box<Node>>;

struct Node {
    value: usize,
    next: Link,
}

#[derive(Default)]
pub struct OrderedUniqueSet {
    head: Link,
    len: usize,
}

impl OrderedUniqueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// first link whose node is not below `value` (or the tail link)
    fn seek(&mut self, value: usize) -> &mut Link {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.value < value) {
            link = match link {
                Some(node) => &mut node.next,
                None => unreachable!("checked non-empty above"),
            };
        }
        link
    }

    /// returns false if the value was already present
    pub fn insert(&mut self, value: usize) -> bool {
        let link = self.seek(value);
        if link.as_ref().is_some_and(|node| node.value == value) {
            return false;
        }

        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        true
    }

    /// returns false if the value was not present
    pub fn remove(&mut self, value: usize) -> bool {
        let link = self.seek(value);
        match link.take() {
            Some(node) if node.value == value => {
                *link = node.next;
                self.len -= 1;
                true
            }
            other => {
                *link = other;
                false
            }
        }
    }

    pub fn contains(&self, value: usize) -> bool {
        self.iter()
            .take_while(|&v| v <= value)
            .any(|v| v == value)
    }

    pub fn first(&self) -> Option<usize> {
        self.head.as_ref().map(|node| node.value)
    }

    pub fn last(&self) -> Option<usize> {
        self.iter().last()
    }

    pub fn pop_first(&mut self) -> Option<usize> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn pop_last(&mut self) -> Option<usize> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.next.is_some()) {
            link = match link {
                Some(node) => &mut node.next,
                None => unreachable!("checked non-empty above"),
            };
        }

        let node = link.take()?;
        self.len -= 1;
        Some(node.value)
    }

    /// releases every node holding a value of at least `value`, returning how many went
    pub fn prune_from(&mut self, value: usize) -> usize {
        let link = self.seek(value);
        let released = release(link.take());
        self.len -= released;
        released
    }

    pub fn clear(&mut self) {
        release(self.head.take());
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

/// frees a detached chain one node at a time, so stack use stays flat however long it is
fn release(mut link: Link) -> usize {
    let mut released = 0;
    while let Some(mut node) = link {
        link = node.next.take();
        released += 1;
    }
    released
}

impl Drop for OrderedUniqueSet {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for OrderedUniqueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<usize> for OrderedUniqueSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<usize> for OrderedUniqueSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a OrderedUniqueSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    fn contents(set: &OrderedUniqueSet) -> Vec<usize> {
        set.iter().collect()
    }

    #[test]
    fn inserts_keep_ascending_order_without_duplicates() {
        let mut set = OrderedUniqueSet::new();
        assert!(set.insert(5));
        assert!(set.insert(1));
        assert!(set.insert(9));
        assert!(set.insert(3));
        assert!(!set.insert(5));
        assert!(!set.insert(1));

        assert_eq!(contents(&set), vec![1, 3, 5, 9]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.first(), Some(1));
        assert_eq!(set.last(), Some(9));
    }

    #[test]
    fn remove_is_a_no_op_for_missing_values() {
        let mut set: OrderedUniqueSet = [4, 2, 8].into_iter().collect();
        assert!(!set.remove(3));
        assert!(set.remove(4));
        assert!(!set.remove(4));
        assert!(set.remove(2));
        assert_eq!(contents(&set), vec![8]);
        assert!(set.remove(8));
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn pops_take_the_extremes() {
        let mut set: OrderedUniqueSet = [7, 3, 11, 5].into_iter().collect();
        assert_eq!(set.pop_first(), Some(3));
        assert_eq!(set.pop_last(), Some(11));
        assert_eq!(contents(&set), vec![5, 7]);
        assert_eq!(set.pop_last(), Some(7));
        assert_eq!(set.pop_last(), Some(5));
        assert_eq!(set.pop_last(), None);
        assert_eq!(set.pop_first(), None);
    }

    #[test]
    fn empty_set_has_no_extremes() {
        let set = OrderedUniqueSet::new();
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
        assert!(!set.contains(0));
    }

    #[test]
    fn prune_releases_the_tail() {
        let mut set: OrderedUniqueSet = (0..10).map(|v| v * 2).collect();
        assert_eq!(set.prune_from(11), 4);
        assert_eq!(contents(&set), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(set.len(), 6);
        assert_eq!(set.prune_from(0), 6);
        assert!(set.is_empty());
    }

    #[test]
    fn long_chains_release_without_recursion() {
        let mut set = OrderedUniqueSet::new();
        // descending inserts land at the head, keeping construction linear
        for value in (0..1_000_000).rev() {
            set.insert(value);
        }
        assert_eq!(set.len(), 1_000_000);
        assert_eq!(set.last(), Some(999_999));
        drop(set);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(usize),
        Remove(usize),
        PopFirst,
        PopLast,
        Prune(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0usize..64).prop_map(Op::Insert),
            2 => (0usize..64).prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
            1 => (0usize..64).prop_map(Op::Prune),
        ]
    }

    proptest! {
        #[test]
        fn behaves_like_a_sorted_set(ops in prop::collection::vec(arb_op(), 0..200)) {
            let mut set = OrderedUniqueSet::new();
            let mut model = BTreeSet::new();

            for op in ops {
                match op {
                    Op::Insert(v) => prop_assert_eq!(set.insert(v), model.insert(v)),
                    Op::Remove(v) => prop_assert_eq!(set.remove(v), model.remove(&v)),
                    Op::PopFirst => prop_assert_eq!(set.pop_first(), model.pop_first()),
                    Op::PopLast => prop_assert_eq!(set.pop_last(), model.pop_last()),
                    Op::Prune(v) => {
                        let tail = model.split_off(&v);
                        prop_assert_eq!(set.prune_from(v), tail.len());
                    }
                }

                let values = contents(&set);
                prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
                prop_assert_eq!(&values, &model.iter().copied().collect::<Vec<_>>());
                prop_assert_eq!(set.len(), model.len());
                prop_assert_eq!(set.first(), model.first().copied());
                prop_assert_eq!(set.last(), model.last().copied());
            }
        }
    }
}

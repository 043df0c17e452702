use crate::binary_tree::{IntoIter, Tree};
use crate::compare::{Comparator, Natural};
use crate::error::Error;
use crate::lookup::Lookup;
use crate::traversal::Traversal;
use crate::tree::TreeOps;
use std::borrow::Borrow;
use std::fmt;

/// An ordered set of unique values backed by an unbalanced [`Tree`].
///
/// Iteration is ascending under the comparator. The set-algebra operations
/// accept any collection; for those that only inspect `other`, items may be
/// owned values or references (`I::Item: Borrow<T>`). Duplicates in `other`
/// are ignored and its order does not matter.
pub struct TreeSet<T, C = Natural> {
    tree: Tree<T, C>,
}

impl<T: Ord> TreeSet<T, Natural> {
    /// Creates an empty set using the natural ordering of `T`.
    pub fn new() -> Self {
        TreeSet { tree: Tree::new() }
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Creates an empty set ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        TreeSet {
            tree: Tree::with_comparator(cmp),
        }
    }

    /// Creates an empty set from an optional comparator, failing with
    /// [`Error::MissingComparator`] on `None`.
    pub fn from_comparator(cmp: Option<C>) -> Result<Self, Error> {
        Ok(TreeSet {
            tree: Tree::from_comparator(cmp)?,
        })
    }

    pub fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    /// Adds `item`. Returns `false` and leaves the set untouched if an equal
    /// item is already present.
    pub fn insert(&mut self, item: T) -> bool {
        self.tree.insert(item)
    }

    /// Removes `item`. Returns `false` if it was absent.
    pub fn remove(&mut self, item: &T) -> bool {
        self.tree.remove(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.tree.contains(item)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear()
    }

    /// Ascending iteration.
    pub fn iter(&self) -> Traversal<'_, T, C> {
        self.tree.inorder()
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// The backing tree, for the pre- and post-order walks and cursors.
    pub fn tree(&self) -> &Tree<T, C> {
        &self.tree
    }

    /// The items in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the items into `target`, skipping the first `offset` of them.
    ///
    /// The items following the skipped ones are written from the start of
    /// `target`, not from position `offset`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `offset` exceeds the set's length or
    /// `target`'s length, or if `target` cannot hold the remaining items.
    pub fn copy_to(&self, target: &mut [T], offset: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        if offset > self.len() {
            return Err(Error::InvalidArgument {
                name: "offset",
                reason: format!("{} exceeds the set length {}", offset, self.len()),
            });
        }
        if offset > target.len() {
            return Err(Error::InvalidArgument {
                name: "offset",
                reason: format!("{} exceeds the target length {}", offset, target.len()),
            });
        }
        let remaining = self.len() - offset;
        if remaining > target.len() {
            return Err(Error::InvalidArgument {
                name: "target",
                reason: format!("{} items do not fit in {} slots", remaining, target.len()),
            });
        }

        for (slot, item) in target.iter_mut().zip(self.iter().skip(offset)) {
            *slot = item.clone();
        }
        Ok(())
    }

    /// Adds every item of `other`.
    pub fn union_with<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tree.extend(other);
    }

    /// Removes every item of `other` that is present.
    pub fn except_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for item in other {
            self.tree.remove(item.borrow());
        }
    }

    /// Keeps only the items also present in `other`.
    pub fn intersect_with<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        if self.is_empty() {
            return;
        }
        let other: Lookup<T, _> = Lookup::new(other, self.comparator());
        self.tree.retain_with(|cmp, item| other.contains(item, cmp));
    }

    /// Keeps the items present in exactly one of `self` and `other`.
    pub fn symmetric_except_with<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = T>,
    {
        if self.is_empty() {
            self.union_with(other);
            return;
        }

        let other: Lookup<T, _> = Lookup::new(other, self.comparator());
        if self.equals_lookup(&other) {
            self.clear();
            return;
        }
        for item in other.into_values() {
            if !self.tree.remove(&item) {
                self.tree.insert(item);
            }
        }
    }

    /// Every item of `self` is in `other`.
    pub fn is_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let other: Lookup<T, _> = Lookup::new(other, self.comparator());
        self.len() <= other.len() && self.is_covered_by(&other)
    }

    /// Every item of `self` is in `other`, and `other` has more items.
    pub fn is_proper_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let other: Lookup<T, _> = Lookup::new(other, self.comparator());
        self.len() < other.len() && self.is_covered_by(&other)
    }

    /// Every item of `other` is in `self`.
    pub fn is_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other.into_iter().all(|item| self.contains(item.borrow()))
    }

    /// Every item of `other` is in `self`, and `self` has more items.
    pub fn is_proper_superset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let other: Lookup<T, _> = Lookup::new(other, self.comparator());
        other.len() < self.len() && other.iter().all(|item| self.contains(item))
    }

    /// `self` and `other` share at least one item.
    pub fn overlaps<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        if self.is_empty() {
            return false;
        }
        other.into_iter().any(|item| self.contains(item.borrow()))
    }

    /// `other`, taken as a set, holds exactly the items of `self`.
    pub fn set_equals<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let other: Lookup<T, _> = Lookup::new(other, self.comparator());
        self.equals_lookup(&other)
    }

    fn is_covered_by<Q: Borrow<T>>(&self, other: &Lookup<T, Q>) -> bool {
        let cmp = self.comparator();
        self.iter().all(|item| other.contains(item, cmp))
    }

    fn equals_lookup<Q: Borrow<T>>(&self, other: &Lookup<T, Q>) -> bool {
        other.len() == self.len() && other.iter().all(|item| self.contains(item))
    }
}

/// A new set holding the items of both `a` and `b`, ordered by `a`'s
/// comparator.
pub fn union<T, C>(a: &TreeSet<T, C>, b: &TreeSet<T, C>) -> TreeSet<T, C>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    let mut result = TreeSet::with_comparator(a.comparator().clone());
    result.union_with(a.iter().cloned());
    result.union_with(b.iter().cloned());
    result
}

impl<T, C: Comparator<T>> TreeOps<T> for TreeSet<T, C> {
    fn insert(&mut self, value: T) -> bool {
        TreeSet::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        TreeSet::contains(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        TreeSet::remove(self, value)
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn clear(&mut self) {
        TreeSet::clear(self)
    }
}

impl<T: Ord> Default for TreeSet<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.union_with(iter);
    }
}

impl<T: Ord> FromIterator<T> for TreeSet<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> IntoIterator for TreeSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.tree.into_iter()
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T, C>;

    fn into_iter(self) -> Traversal<'a, T, C> {
        self.iter()
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for TreeSet<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

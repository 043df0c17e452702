use crate::compare::Comparator;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Snapshot of a foreign collection, sorted and de-duplicated under a
/// comparator, so it can be probed as a set in `O(log n)`.
pub(crate) struct Lookup<T, Q> {
    values: Vec<Q>,
    _marker: PhantomData<fn(&T)>,
}

impl<T, Q: Borrow<T>> Lookup<T, Q> {
    pub(crate) fn new<I, C>(other: I, cmp: &C) -> Self
    where
        I: IntoIterator<Item = Q>,
        C: Comparator<T>,
    {
        let mut values: Vec<Q> = other.into_iter().collect();
        values.sort_by(|a, b| cmp.compare(a.borrow(), b.borrow()));
        values.dedup_by(|a, b| cmp.compare((&*a).borrow(), (&*b).borrow()) == Ordering::Equal);
        Lookup {
            values,
            _marker: PhantomData,
        }
    }

    /// Number of distinct values.
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn contains<C: Comparator<T>>(&self, value: &T, cmp: &C) -> bool {
        self.values
            .binary_search_by(|probe| cmp.compare(probe.borrow(), value))
            .is_ok()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter().map(Borrow::borrow)
    }

    pub(crate) fn into_values(self) -> Vec<Q> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;

    #[test]
    fn dedups_and_sorts() {
        let lookup: Lookup<i32, i32> = Lookup::new(vec![3, 1, 3, 2, 1], &Natural);
        assert_eq!(lookup.len(), 3);
        assert_eq!(lookup.into_values(), vec![1, 2, 3]);
    }

    #[test]
    fn probes_borrowed_values() {
        let source = [10, -4, 7];
        let lookup: Lookup<i32, &i32> = Lookup::new(source.iter(), &Natural);
        assert!(lookup.contains(&-4, &Natural));
        assert!(!lookup.contains(&0, &Natural));
        assert_eq!(lookup.iter().copied().collect::<Vec<i32>>(), vec![-4, 7, 10]);
    }

    #[test]
    fn comparator_decides_duplicates() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let lookup: Lookup<&str, &str> = Lookup::new(["aa", "b", "cc"], &by_len);
        assert_eq!(lookup.len(), 2);
        assert!(lookup.contains(&"zz", &by_len));
    }
}

use crate::binary_tree::{Link, NodeId, Tree};
use crate::error::Error;
use std::iter::FusedIterator;

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Subtree rooted here still has to be expanded.
    Enter(NodeId),
    /// Node is ready to be yielded.
    Visit(NodeId),
}

/// Explicit work stack driving all traversal orders.
#[derive(Debug, Clone)]
pub(crate) struct Walk {
    order: Order,
    stack: Vec<Frame>,
}

impl Walk {
    pub(crate) fn new(root: Link, order: Order) -> Self {
        Walk {
            order,
            stack: root.map(Frame::Enter).into_iter().collect(),
        }
    }

    /// Advances to the next node id. Fails with the id of a slot that is no
    /// longer live in `tree`.
    pub(crate) fn next_id<T, C>(&mut self, tree: &Tree<T, C>) -> Result<Option<NodeId>, NodeId> {
        while let Some(frame) = self.stack.pop() {
            let id = match frame {
                Frame::Visit(id) => return Ok(Some(id)),
                Frame::Enter(id) => id,
            };
            let node = tree.slot(id).ok_or(id)?;
            let (left, right) = (node.left.map(Frame::Enter), node.right.map(Frame::Enter));

            // pushed in reverse of the visiting order
            match self.order {
                Order::Preorder => {
                    self.stack.extend(right);
                    self.stack.extend(left);
                    return Ok(Some(id));
                }
                Order::Inorder => {
                    self.stack.extend(right);
                    self.stack.push(Frame::Visit(id));
                    self.stack.extend(left);
                }
                Order::Postorder => {
                    self.stack.push(Frame::Visit(id));
                    self.stack.extend(right);
                    self.stack.extend(left);
                }
            }
        }
        Ok(None)
    }
}

/// Lazy traversal borrowing a [`Tree`].
///
/// The borrow keeps the tree from being modified while the traversal is
/// alive, so no version check is needed here; see [`Cursor`] for a
/// traversal that outlives the borrow.
pub struct Traversal<'a, T, C> {
    tree: &'a Tree<T, C>,
    walk: Walk,
    len: usize,
}

impl<'a, T, C> Traversal<'a, T, C> {
    pub(crate) fn new(tree: &'a Tree<T, C>, order: Order) -> Self {
        Traversal {
            tree,
            walk: Walk::new(tree.root(), order),
            len: tree.len(),
        }
    }
}

impl<'a, T, C> Iterator for Traversal<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.walk.next_id(self.tree).ok()??;
        self.len -= 1;
        self.tree.slot(id).map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T, C> ExactSizeIterator for Traversal<'a, T, C> {}
impl<'a, T, C> FusedIterator for Traversal<'a, T, C> {}

/// A traversal that does not borrow its tree.
///
/// The cursor remembers the tree's version when it was created and checks
/// it before every step, so any insert, remove or clear in between fails the
/// next step with [`Error::ConcurrentModification`].
#[derive(Debug, Clone)]
pub struct Cursor {
    walk: Walk,
    version: u64,
}

impl Cursor {
    pub(crate) fn new(root: Link, order: Order, version: u64) -> Self {
        Cursor {
            walk: Walk::new(root, order),
            version,
        }
    }

    pub fn order(&self) -> Order {
        self.walk.order
    }

    /// Tree version this cursor was created at.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Yields the next value of `tree`, which must be the tree the cursor
    /// was created from.
    pub fn next<'a, T, C>(&mut self, tree: &'a Tree<T, C>) -> Result<Option<&'a T>, Error> {
        let modified = Error::ConcurrentModification {
            expected: self.version,
            found: tree.version(),
        };
        if tree.version() != self.version {
            log::debug!("cursor stale: {}", modified);
            return Err(modified);
        }

        match self.walk.next_id(tree) {
            Ok(Some(id)) => Ok(tree.slot(id).map(|node| &node.value)),
            Ok(None) => Ok(None),
            Err(id) => {
                log::debug!("cursor reached dead node slot {}", id);
                Err(modified)
            }
        }
    }

    /// Drains the remaining values into a vector.
    pub fn collect<'a, T, C>(mut self, tree: &'a Tree<T, C>) -> Result<Vec<&'a T>, Error> {
        let mut values = Vec::new();
        while let Some(value) = self.next(tree)? {
            values.push(value);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<i32> {
        [4, 2, 6, 1, 3, 5, 7].into_iter().collect()
    }

    #[test]
    fn cursor_walks_every_order() {
        let tree = sample();
        let values = |order| {
            tree.cursor(order)
                .collect(&tree)
                .unwrap()
                .into_iter()
                .copied()
                .collect::<Vec<_>>()
        };
        assert_eq!(values(Order::Preorder), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(values(Order::Inorder), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(values(Order::Postorder), vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn cursor_on_empty_tree() {
        let tree = Tree::<i32>::new();
        let mut cursor = tree.cursor(Order::Inorder);
        assert_eq!(cursor.next(&tree), Ok(None));
        assert_eq!(cursor.next(&tree), Ok(None));
    }

    #[test]
    fn cursor_detects_insert() {
        let mut tree = sample();
        let mut cursor = tree.cursor(Order::Inorder);
        assert_eq!(cursor.next(&tree), Ok(Some(&1)));

        tree.insert(8);
        assert_eq!(
            cursor.next(&tree),
            Err(Error::ConcurrentModification {
                expected: 7,
                found: 8
            })
        );
    }

    #[test]
    fn cursor_detects_remove_and_clear() {
        let mut tree = sample();
        let cursor = tree.cursor(Order::Preorder);
        tree.remove(&4);
        assert!(matches!(
            cursor.clone().collect(&tree),
            Err(Error::ConcurrentModification { .. })
        ));

        let mut cursor = tree.cursor(Order::Postorder);
        tree.clear();
        assert!(cursor.next(&tree).is_err());
    }

    #[test]
    fn failed_lookup_leaves_cursor_valid() {
        let mut tree = sample();
        let mut cursor = tree.cursor(Order::Inorder);
        assert!(!tree.remove(&100));
        assert!(!tree.insert(4));
        assert_eq!(cursor.next(&tree), Ok(Some(&1)));
        assert_eq!(cursor.order(), Order::Inorder);
    }

    #[test]
    fn traversal_is_exact_size() {
        let tree = sample();
        let mut iter = tree.postorder();
        assert_eq!(iter.len(), 7);
        iter.next();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        assert_eq!(iter.count(), 6);
    }
}

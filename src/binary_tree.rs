use crate::compare::{Comparator, Natural};
use crate::error::Error;
use crate::traversal::{Cursor, Order, Traversal, Walk};
use crate::tree::TreeOps;
use std::cmp::Ordering;
use std::fmt;

/// Index of a node slot in the tree's arena.
pub(crate) type NodeId = usize;

pub(crate) type Link = Option<NodeId>;

/// An unbalanced binary search tree ordered by a comparator `C`.
///
/// Nodes live in an arena and refer to their children by index, so every
/// walk (search, removal, traversal) is iterative and a degenerate
/// chain of any length is handled without recursion.
pub struct Tree<T, C = Natural> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    root: Link,
    len: usize,
    version: u64,
    cmp: C,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Outcome of a comparator-guided descent from the root.
enum Search {
    Found { parent: Link, id: NodeId },
    Vacant { parent: Link, side: Side },
}

/// Consuming iterator yielding the tree's values in ascending order.
pub struct IntoIter<T> {
    nodes: Vec<Option<Node<T>>>,
    order: std::vec::IntoIter<NodeId>,
}

impl<T: Ord> Tree<T, Natural> {
    /// Creates an empty tree using the natural ordering of `T`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Tree<T, C> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counter bumped on every structural change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }
}

impl<T, C: Comparator<T>> Tree<T, C> {
    /// Creates an empty tree ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Tree {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            version: 0,
            cmp,
        }
    }

    /// Creates an empty tree from an optional comparator.
    ///
    /// Fails with [`Error::MissingComparator`] when `cmp` is `None`. Use
    /// [`Tree::new`] to order by `T`'s natural ordering instead.
    pub fn from_comparator(cmp: Option<C>) -> Result<Self, Error> {
        cmp.map(Self::with_comparator)
            .ok_or(Error::MissingComparator)
    }

    /// Creates a tree holding a single value.
    pub fn with_root(value: T, cmp: C) -> Self {
        let mut tree = Self::with_comparator(cmp);
        tree.insert(value);
        tree
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts `value`, returning `false` if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let (parent, side) = match self.search(&value) {
            Search::Found { .. } => return false,
            Search::Vacant { parent, side } => (parent, side),
        };

        let id = self.node_for_value(value);
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                let node = self.node_mut(parent);
                match side {
                    Side::Left => node.left = Some(id),
                    Side::Right => node.right = Some(id),
                }
            }
        }
        self.len += 1;
        self.version += 1;
        log::trace!("inserted node {} (len {})", id, self.len);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        matches!(self.search(value), Search::Found { .. })
    }

    /// Returns the stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        match self.search(value) {
            Search::Found { id, .. } => Some(&self.node(id).value),
            Search::Vacant { .. } => None,
        }
    }

    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        match self.search(value) {
            Search::Found { parent, id } => Some(self.remove_node(parent, id)),
            Search::Vacant { .. } => None,
        }
    }

    /// Drops every node. The version is never reset, and moves forward when
    /// nodes were actually dropped so that outstanding cursors are invalidated.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            self.version += 1;
        }
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
        log::trace!("cleared tree (version {})", self.version);
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// The smallest value under the comparator.
    pub fn first(&self) -> Option<&T> {
        let mut cur = self.root?;
        while let Some(left) = self.node(cur).left {
            cur = left;
        }
        Some(&self.node(cur).value)
    }

    /// The greatest value under the comparator.
    pub fn last(&self) -> Option<&T> {
        let mut cur = self.root?;
        while let Some(right) = self.node(cur).right {
            cur = right;
        }
        Some(&self.node(cur).value)
    }

    /// Ascending iteration; same as [`Tree::inorder`].
    pub fn iter(&self) -> Traversal<'_, T, C> {
        self.inorder()
    }

    /// Root, left subtree, right subtree.
    pub fn preorder(&self) -> Traversal<'_, T, C> {
        Traversal::new(self, Order::Preorder)
    }

    /// Left subtree, root, right subtree: ascending order.
    pub fn inorder(&self) -> Traversal<'_, T, C> {
        Traversal::new(self, Order::Inorder)
    }

    /// Left subtree, right subtree, root.
    pub fn postorder(&self) -> Traversal<'_, T, C> {
        Traversal::new(self, Order::Postorder)
    }

    /// A traversal detached from the tree's borrow, validated against the
    /// tree's version on every step.
    pub fn cursor(&self, order: Order) -> Cursor {
        Cursor::new(self.root, order, self.version)
    }

    /// Removes every value for which `keep` returns `false`. Returns the
    /// number of removed values.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_with(|_, value| keep(value))
    }

    /// Like [`Tree::retain`], with the tree's comparator handed to `keep`.
    pub(crate) fn retain_with<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&C, &T) -> bool,
    {
        let mut walk = Walk::new(self.root, Order::Inorder);
        let mut doomed = Vec::new();
        while let Ok(Some(id)) = walk.next_id(self) {
            if !keep(&self.cmp, &self.node(id).value) {
                doomed.push(id);
            }
        }

        for &id in doomed.iter() {
            let parent = match self.search(&self.node(id).value) {
                Search::Found { parent, .. } => parent,
                Search::Vacant { .. } => unreachable!("rejected node must still be reachable"),
            };
            self.remove_node(parent, id);
        }
        doomed.len()
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.slot(id).expect("link should point at a live node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes
            .get_mut(id)
            .and_then(Option::as_mut)
            .expect("link should point at a live node")
    }

    fn node_for_value(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        let node = self.nodes[id]
            .take()
            .expect("released node should be live");
        self.free.push(id);
        node.value
    }

    fn search(&self, value: &T) -> Search {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            match self.cmp.compare(value, &node.value) {
                Ordering::Less => {
                    side = Side::Left;
                    cur = node.left;
                }
                Ordering::Greater => {
                    side = Side::Right;
                    cur = node.right;
                }
                Ordering::Equal => return Search::Found { parent, id },
            }
            parent = Some(id);
        }
        Search::Vacant { parent, side }
    }

    /// Unlinks `id` (a child of `parent`, or the root) and returns its value.
    fn remove_node(&mut self, parent: Link, id: NodeId) -> T {
        let (left, right) = {
            let node = self.node(id);
            (node.left, node.right)
        };

        let replacement = match right {
            // No right child: the left subtree takes the node's place.
            None => left,
            Some(right) if self.node(right).left.is_none() => {
                self.node_mut(right).left = left;
                Some(right)
            }
            Some(right) => {
                // In-order successor: leftmost node of the right subtree.
                let mut successor_parent = right;
                let mut successor = self
                    .node(right)
                    .left
                    .expect("general case has a left child under the right child");
                while let Some(next) = self.node(successor).left {
                    successor_parent = successor;
                    successor = next;
                }

                let successor_right = self.node(successor).right;
                self.node_mut(successor_parent).left = successor_right;

                let node = self.node_mut(successor);
                node.left = left;
                node.right = Some(right);
                Some(successor)
            }
        };

        self.replace_child(parent, id, replacement);
        self.len -= 1;
        self.version += 1;
        log::trace!("removed node {} (len {})", id, self.len);
        self.release(id)
    }

    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.node_mut(parent);
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            }
        }
    }
}

impl<T, C: Comparator<T>> TreeOps<T> for Tree<T, C> {
    fn insert(&mut self, value: T) -> bool {
        Tree::insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        Tree::contains(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        Tree::remove(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        Tree::clear(self)
    }
}

impl<T: Ord> Default for Tree<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for Tree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> IntoIterator for Tree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut walk = Walk::new(self.root, Order::Inorder);
        let mut order = Vec::with_capacity(self.len);
        while let Ok(Some(id)) = walk.next_id(&self) {
            order.push(id);
        }
        IntoIter {
            nodes: self.nodes,
            order: order.into_iter(),
        }
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T, C>;

    fn into_iter(self) -> Traversal<'a, T, C> {
        self.inorder()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        self.nodes[id].take().map(|node| node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for Tree<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.len)
            .field("version", &self.version)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

//! Ordered index - a binary search tree keyed by bid id.
//!
//! [`BidTree`] orders records by *lexicographic* id comparison. Ids in the
//! source data are fixed-width digit strings, so this coincides with numeric
//! order there; for mixed-width ids the two orders diverge and the string
//! order is the one this tree honors.
//!
//! The tree does no rebalancing. Depth is a function of insertion order and
//! degrades to linear for presorted id sequences, an accepted limitation of
//! this structure. That is why every operation here walks links iteratively
//! instead of recursing: a degenerate tree must not take the call stack down
//! with it.

use std::cmp::Ordering;

use crate::common::Bid;

/// A node owned by its parent link (or by the tree, for the root).
#[derive(Debug)]
struct Node {
    bid: Bid,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Binary search tree of bids keyed by id.
///
/// Duplicate ids are allowed: a record whose id equals an existing node's
/// descends right, so later duplicates coexist with (never overwrite)
/// earlier ones.
///
/// # Example
/// ```
/// use bidindex::{Bid, BidTree};
///
/// let mut tree = BidTree::new();
/// tree.insert(Bid::new("98109", "Office Chair", "General Fund", 24.0));
/// tree.insert(Bid::new("98050", "Bookcase", "General Fund", 18.0));
///
/// assert_eq!(tree.search("98109").map(|b| b.title.as_str()), Some("Office Chair"));
/// let ids: Vec<&str> = tree.iter().map(|b| b.id.as_str()).collect();
/// assert_eq!(ids, vec!["98050", "98109"]);
/// ```
#[derive(Debug)]
pub struct BidTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl BidTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of records in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the tree holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a record, walking down from the root to an empty link.
    ///
    /// At each node: ids lexicographically below the node's go left, all
    /// others (including exact ties) go right. Nothing is ever overwritten.
    pub fn insert(&mut self, bid: Bid) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if node.bid.id > bid.id {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node {
            bid,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Insert every record of `bids`, in sequence order.
    pub fn load(&mut self, bids: impl IntoIterator<Item = Bid>) {
        for bid in bids {
            self.insert(bid);
        }
    }

    /// Look up a record by exact id. O(depth).
    ///
    /// Returns `None` when the id is absent, including on an empty tree.
    pub fn search(&self, id: &str) -> Option<&Bid> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match id.cmp(node.bid.id.as_str()) {
                Ordering::Equal => return Some(&node.bid),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Remove the record with `id`, returning it if present.
    ///
    /// Standard BST deletion: a node with at most one child is spliced out
    /// of its parent link; a node with two children takes over the record
    /// holding the minimum id of its right subtree, and that record's old
    /// node is unlinked instead. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Bid> {
        // Walk to the link holding the match. Each step decides from a
        // shared borrow and descends through a fresh mutable reborrow, so no
        // mutable borrow outlives its iteration; an empty link means the id
        // is absent, which `?` reports as None.
        let mut link = &mut self.root;
        loop {
            match id.cmp(link.as_deref()?.bid.id.as_str()) {
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Greater => link = &mut link.as_mut()?.right,
                Ordering::Equal => break,
            }
        }
        let removed = splice_out(link);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Iterate records in order (left, node, right): ascending by id.
    ///
    /// A pure read over the current tree; call it again for a fresh pass.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self.root.as_deref())
    }
}

impl Default for BidTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BidTree {
    fn drop(&mut self) {
        // Box's automatic drop recurses once per level and can overflow the
        // stack on a badly degenerated tree, so tear nodes down with an
        // explicit worklist: children are detached before their parent is
        // freed, leaving nothing for the drop glue to recurse into.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Detach the node behind `link`, re-hanging its children per BST deletion.
fn splice_out(link: &mut Option<Box<Node>>) -> Option<Bid> {
    let mut node = link.take()?;
    let bid = match (node.left.take(), node.right.take()) {
        // Leaf: the link simply becomes empty.
        (None, None) => node.bid,
        // One child: splice it into the parent's slot.
        (Some(child), None) | (None, Some(child)) => {
            *link = Some(child);
            node.bid
        }
        // Two children: the minimum record of the right subtree moves up
        // into this node, and its old position is unlinked.
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            let successor = take_min(&mut node.right);
            let bid = std::mem::replace(&mut node.bid, successor);
            *link = Some(node);
            bid
        }
    };
    Some(bid)
}

/// Detach the leftmost node of the subtree behind `link` and return its
/// record. The subtree must be non-empty.
fn take_min(mut link: &mut Option<Box<Node>>) -> Bid {
    while link.as_deref().is_some_and(|node| node.left.is_some()) {
        link = &mut link.as_mut().expect("descent stays on occupied links").left;
    }
    let node = link.take().expect("take_min requires a non-empty subtree");
    *link = node.right;
    node.bid
}

/// In-order iterator over a [`BidTree`], yielding records ascending by id.
///
/// Keeps an explicit stack of the nodes whose record is still pending (the
/// left spine of wherever the walk currently is), so traversal depth lives
/// on the heap rather than the call stack.
#[derive(Debug)]
pub struct InOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrderIter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Stack every node on the left spine starting at `node`.
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<&'a Bid> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(id: &str) -> Bid {
        Bid::new(id, format!("Item {}", id), "General Fund", 10.0)
    }

    fn ids(tree: &BidTree) -> Vec<String> {
        tree.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_insert_and_search() {
        let mut tree = BidTree::new();
        tree.insert(bid("98109"));
        tree.insert(bid("97988"));
        tree.insert(bid("98223"));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.search("97988"), Some(&bid("97988")));
        assert_eq!(tree.search("98109"), Some(&bid("98109")));
        assert_eq!(tree.search("98223"), Some(&bid("98223")));
        assert_eq!(tree.search("90000"), None);
    }

    #[test]
    fn test_empty_tree_operations() {
        let mut tree = BidTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.search("98109"), None);
        assert_eq!(tree.remove("98109"), None);
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_in_order_is_ascending() {
        let mut tree = BidTree::new();
        tree.load(["050", "150", "100", "025", "125"].map(bid));

        assert_eq!(ids(&tree), vec!["025", "050", "100", "125", "150"]);
    }

    #[test]
    fn test_order_is_lexicographic_not_numeric() {
        // Mixed-width digit strings expose the string ordering: '1' < '5'
        // makes "100" and "150" sort ahead of "50".
        let mut tree = BidTree::new();
        tree.load(["100", "50", "150"].map(bid));

        assert_eq!(ids(&tree), vec!["100", "150", "50"]);
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut tree = BidTree::new();
        tree.load(["2", "1", "3"].map(bid));

        let first: Vec<String> = tree.iter().map(|b| b.id.clone()).collect();
        let second: Vec<String> = tree.iter().map(|b| b.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = BidTree::new();
        tree.load(["2", "1", "3"].map(bid));

        assert_eq!(tree.remove("1"), Some(bid("1")));
        assert_eq!(tree.search("1"), None);
        assert_eq!(ids(&tree), vec!["2", "3"]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut tree = BidTree::new();
        tree.load(["2", "1", "3", "4"].map(bid));

        // "3" has only a right child ("4")
        assert_eq!(tree.remove("3"), Some(bid("3")));
        assert_eq!(ids(&tree), vec!["1", "2", "4"]);
        assert_eq!(tree.search("4"), Some(&bid("4")));
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut tree = BidTree::new();
        tree.load(["4", "2", "6", "5", "7"].map(bid));

        // "6" has children "5" and "7"; its successor "7" takes its place
        assert_eq!(tree.remove("6"), Some(bid("6")));
        assert_eq!(ids(&tree), vec!["2", "4", "5", "7"]);
        for id in ["2", "4", "5", "7"] {
            assert!(tree.search(id).is_some(), "lost {} after removal", id);
        }
    }

    #[test]
    fn test_remove_when_successor_has_right_child() {
        let mut tree = BidTree::new();
        tree.load(["50", "20", "80", "70", "90", "75"].map(bid));

        // The successor of "50" is "70", which has a right child "75"; the
        // child moves up into the vacated slot.
        assert_eq!(tree.remove("50"), Some(bid("50")));
        assert_eq!(ids(&tree), vec!["20", "70", "75", "80", "90"]);
        assert_eq!(tree.len(), 5);
        assert!(tree.search("75").is_some());
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = BidTree::new();
        tree.load(["4", "2", "6", "1", "3", "5", "7"].map(bid));

        assert_eq!(tree.remove("4"), Some(bid("4")));
        assert_eq!(ids(&tree), vec!["1", "2", "3", "5", "6", "7"]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut tree = BidTree::new();
        tree.load(["2", "1", "3"].map(bid));

        assert_eq!(tree.remove("9"), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(ids(&tree), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_duplicate_ids_coexist() {
        let mut tree = BidTree::new();
        tree.insert(Bid::new("98109", "First Lot", "General Fund", 10.0));
        tree.insert(Bid::new("98109", "Second Lot", "Enterprise", 20.0));

        assert_eq!(tree.len(), 2);
        // The earlier insert stays on top; the duplicate sits in its right
        // subtree and both are enumerated.
        assert_eq!(tree.search("98109").map(|b| b.title.as_str()), Some("First Lot"));
        let titles: Vec<&str> = tree.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First Lot", "Second Lot"]);

        // Removing once leaves the other copy retrievable.
        assert!(tree.remove("98109").is_some());
        assert_eq!(tree.len(), 1);
        assert!(tree.search("98109").is_some());
    }

    #[test]
    fn test_degenerate_tree_insert_and_drop() {
        // Ascending inserts build a 10,000-deep right spine. Every operation
        // below, teardown included, must survive it without deep recursion.
        let mut tree = BidTree::new();
        for i in 0..10_000u32 {
            tree.insert(bid(&format!("{:08}", i)));
        }
        assert_eq!(tree.len(), 10_000);
        assert_eq!(tree.search("00004567").map(|b| b.id.as_str()), Some("00004567"));
        // Unlink the deep end, a mid-spine link, and the spine's root.
        assert_eq!(tree.remove("00009999").map(|b| b.id), Some("00009999".to_string()));
        assert_eq!(tree.remove("00005000").map(|b| b.id), Some("00005000".to_string()));
        assert_eq!(tree.remove("00000000").map(|b| b.id), Some("00000000".to_string()));
        assert_eq!(tree.len(), 9_997);
        assert_eq!(tree.iter().count(), 9_997);
        // `tree` dropping here is part of the test.
    }
}

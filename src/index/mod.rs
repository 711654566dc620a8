//! Index structures over bid records.
//!
//! Two organizations of the same data, each trading differently between
//! lookup cost and ordering:
//!
//! # Components
//! - [`BidTree`] - Binary search tree ordered by id; lookups cost O(depth)
//!   and in-order traversal enumerates records ascending by id
//! - [`BidTable`] - Fixed-capacity chained hash table keyed by numeric id;
//!   near-constant lookups, enumeration in bucket order
//!
//! Both own their records outright, and neither overwrites on a duplicate
//! id: the tree sends duplicates into the right subtree, the table chains
//! them behind the earlier arrival.

mod table;
mod tree;

pub use table::{BidTable, TableIter};
pub use tree::{BidTree, InOrderIter};

//! bidindex - In-memory bid indexes with interchangeable organization
//! strategies.
//!
//! Auction bid records loaded from a CSV export can be organized three ways,
//! each with different lookup and ordering trade-offs: a binary search tree
//! keyed by id, a fixed-capacity chained hash table keyed by numeric id, or
//! a plain vector sorted by title on demand.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        bidindex                         │
//! ├─────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │              Menu CLI (src/main.rs)               │  │
//! │  │     load → pick an engine → find/remove/sort      │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │                            ↓                            │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │                  Loader (loader)                  │  │
//! │  │          CSV rows → Vec<Bid>, file order          │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │                            ↓                            │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │     Engines (index, sort)  [Interchangeable]      │  │
//! │  │   BidTree  ←─OR─→  BidTable  ←─OR─→  sorted Vec   │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │                            ↓                            │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │            Shared primitives (common)             │  │
//! │  │           Bid + Error + Result + config           │  │
//! │  └───────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Bid, Error, config)
//! - [`index`] - Index structures (binary search tree, chained hash table)
//! - [`sort`] - In-place comparison sorts over bid slices
//! - [`loader`] - CSV ingestion
//!
//! # Quick Start
//! ```
//! use bidindex::{Bid, BidTree};
//!
//! let mut tree = BidTree::new();
//! tree.insert(Bid::new("98109", "Office Chair", "General Fund", 24.0));
//!
//! assert!(tree.search("98109").is_some());
//! assert_eq!(tree.len(), 1);
//! ```

// Core modules
pub mod common;
pub mod index;
pub mod loader;
pub mod sort;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_TABLE_CAPACITY;
pub use common::{Bid, Error, Result};

pub use index::{BidTable, BidTree, InOrderIter, TableIter};
pub use loader::load_bids;
pub use sort::{quick_sort, selection_sort};

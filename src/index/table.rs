//! Hashed index - a fixed-capacity chained hash table keyed by numeric bid id.
//!
//! [`BidTable`] owns a fixed array of buckets sized at construction; it never
//! rehashes or grows. A record's bucket is `numeric(id) % capacity`, so ids
//! must parse as non-negative integers; any other id is rejected with
//! [`Error::InvalidKey`] before the table is touched. Within a bucket,
//! collisions chain through singly linked nodes, one record per node, and
//! new arrivals append at the tail so chains keep insertion order.
//!
//! Bucket choice goes through the numeric key, but matching within a chain
//! compares the id *string* exactly: "050" and "50" share a bucket yet name
//! two different records.

use crate::common::config::DEFAULT_TABLE_CAPACITY;
use crate::common::{Bid, Error, Result};

/// One link of a bucket's collision chain.
#[derive(Debug)]
struct ChainNode {
    bid: Bid,
    next: Option<Box<ChainNode>>,
}

/// Chained hash table of bids keyed by numeric id.
///
/// # Example
/// ```
/// use bidindex::{Bid, BidTable};
///
/// let mut table = BidTable::with_capacity(179);
/// table.insert(Bid::new("98109", "Office Chair", "General Fund", 24.0))?;
///
/// assert_eq!(table.search("98109")?.map(|b| b.title.as_str()), Some("Office Chair"));
/// assert_eq!(table.search("11111")?, None);
/// assert!(table.search("not-a-number").is_err());
/// # Ok::<(), bidindex::Error>(())
/// ```
#[derive(Debug)]
pub struct BidTable {
    buckets: Vec<Option<Box<ChainNode>>>,
    len: usize,
}

impl BidTable {
    /// Create a table with [`DEFAULT_TABLE_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_CAPACITY)
    }

    /// Create a table with exactly `capacity` buckets.
    ///
    /// The bucket count is fixed for the table's lifetime.
    ///
    /// # Panics
    /// Panics if `capacity` is zero: the bucket index is a modulus and
    /// a zero divisor is meaningless.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "table capacity must be non-zero");
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self { buckets, len: 0 }
    }

    /// Number of buckets (not records).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of records in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the table holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket index for `id`: its numeric value modulo the capacity.
    ///
    /// Fails with [`Error::InvalidKey`] when `id` is not a non-negative
    /// integer that fits in 64 bits.
    fn bucket_of(&self, id: &str) -> Result<usize> {
        let key: u64 = id.parse().map_err(|_| Error::InvalidKey(id.to_string()))?;
        Ok((key % self.buckets.len() as u64) as usize)
    }

    /// Insert a record at the tail of its bucket's chain.
    ///
    /// Nothing is overwritten: a record whose id collides with (or equals)
    /// an existing one is chained behind it.
    pub fn insert(&mut self, bid: Bid) -> Result<()> {
        let slot = self.bucket_of(&bid.id)?;
        let mut link = &mut self.buckets[slot];
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(ChainNode { bid, next: None }));
        self.len += 1;
        Ok(())
    }

    /// Insert every record of `bids`, in sequence order.
    ///
    /// Stops at the first record whose id does not hash; records before it
    /// stay inserted.
    pub fn load(&mut self, bids: impl IntoIterator<Item = Bid>) -> Result<()> {
        for bid in bids {
            self.insert(bid)?;
        }
        Ok(())
    }

    /// Look up a record by exact id.
    ///
    /// Hashes to the bucket, then walks the chain comparing id strings.
    /// `Ok(None)` means the id hashes fine but no record carries it.
    pub fn search(&self, id: &str) -> Result<Option<&Bid>> {
        let slot = self.bucket_of(id)?;
        let mut current = self.buckets[slot].as_deref();
        while let Some(node) = current {
            if node.bid.id == id {
                return Ok(Some(&node.bid));
            }
            current = node.next.as_deref();
        }
        Ok(None)
    }

    /// Remove the first record in the chain with `id`, returning it.
    ///
    /// The removed node's predecessor is relinked to its successor, wherever
    /// in the chain the match sits. `Ok(None)` when the id is absent.
    pub fn remove(&mut self, id: &str) -> Result<Option<Bid>> {
        let slot = self.bucket_of(id)?;
        // Scan past non-matching nodes, deciding from a shared borrow and
        // stepping through a fresh mutable reborrow. The walk stops on a
        // match or at the chain's end; take() tells the two apart.
        let mut link = &mut self.buckets[slot];
        while link.as_deref().is_some_and(|node| node.bid.id != id) {
            link = &mut link.as_mut().expect("scan stays on occupied links").next;
        }
        match link.take() {
            Some(mut node) => {
                *link = node.next.take();
                self.len -= 1;
                Ok(Some(node.bid))
            }
            None => Ok(None),
        }
    }

    /// Iterate all records: buckets in slot order, chains front to back.
    pub fn iter(&self) -> TableIter<'_> {
        TableIter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }
}

impl Default for BidTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BidTable {
    fn drop(&mut self) {
        // Chains are singly linked boxes, and their automatic drop recurses
        // once per node. Unlink front to back so no chain length can exhaust
        // the call stack.
        for bucket in &mut self.buckets {
            let mut next = bucket.take();
            while let Some(mut node) = next {
                next = node.next.take();
            }
        }
    }
}

/// Iterator over a [`BidTable`]: buckets in slot order, chains front to back.
#[derive(Debug)]
pub struct TableIter<'a> {
    buckets: std::slice::Iter<'a, Option<Box<ChainNode>>>,
    chain: Option<&'a ChainNode>,
}

impl<'a> Iterator for TableIter<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<&'a Bid> {
        loop {
            if let Some(node) = self.chain {
                self.chain = node.next.as_deref();
                return Some(&node.bid);
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

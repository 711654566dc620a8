//! Bid record type.

use std::fmt;

/// A single auction bid record.
///
/// This is the value type held by every index structure. Each structure
/// stores its own copy; no structure holds a reference back to the source
/// row it was loaded from.
///
/// The `id` is unique in the source data and consists of digits in practice
/// ("98109"-style lot numbers). Nothing here enforces that: the ordered index
/// treats ids as plain strings, while the hashed index requires numeric ids
/// and rejects everything else at its boundary.
///
/// # Example
/// ```
/// use bidindex::Bid;
///
/// let bid = Bid::new("98109", "Office Chair", "General Fund", 24.0);
/// assert_eq!(bid.id, "98109");
/// assert_eq!(format!("{}", bid), "98109: Office Chair | 24 | General Fund");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    /// Unique identifier from the source data.
    pub id: String,

    /// Auction title; the sort key for the sequence sorters.
    pub title: String,

    /// Fund code the proceeds are credited to.
    pub fund: String,

    /// Winning bid amount in dollars.
    pub amount: f64,
}

impl Bid {
    /// Create a new bid record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}

impl fmt::Display for Bid {
    /// Render the record as a one-line report row:
    /// `id: title | amount | fund`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.id, self.title, self.amount, self.fund
        )
    }
}

//! CSV loading of bid records.
//!
//! Reads the municipal auction-results export: a headered CSV whose columns
//! of interest sit at fixed positions. The loader only populates [`Bid`]
//! values; it does no id validation (the hashed index enforces its own
//! numeric-id precondition on insert).

use std::path::Path;

use crate::common::{Bid, Result};

// Column positions in the auction-results export.
const COL_TITLE: usize = 0;
const COL_ID: usize = 1;
const COL_AMOUNT: usize = 4;
const COL_FUND: usize = 8;

/// Load every bid row of the CSV file at `path`.
///
/// Rows appear in the returned vector in file order. Rows too short to hold
/// all four bid columns are skipped; I/O and CSV-format failures surface as
/// [`Error::Csv`](crate::Error::Csv).
///
/// # Example
/// ```no_run
/// let bids = bidindex::load_bids("eBid_Monthly_Sales.csv")?;
/// println!("{} bids loaded", bids.len());
/// # Ok::<(), bidindex::Error>(())
/// ```
pub fn load_bids<P: AsRef<Path>>(path: P) -> Result<Vec<Bid>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut bids = Vec::new();
    for result in reader.records() {
        let record = result?;

        // Export format: ArticleTitle,ArticleID,Department,CloseDate,
        // WinningBid,CC Fee,Fee Percent,AuctionTitle,Fund,Inventory ID
        // Example: "Dining Chairs, Set of 4",98109,...,$24.00,...,General Fund
        let fields = (
            record.get(COL_TITLE),
            record.get(COL_ID),
            record.get(COL_AMOUNT),
            record.get(COL_FUND),
        );
        if let (Some(title), Some(id), Some(amount), Some(fund)) = fields {
            bids.push(Bid::new(id, title, fund, parse_amount(amount)));
        }
    }
    Ok(bids)
}

/// Convert a currency cell like `$1,500.00` to its numeric value.
///
/// Currency punctuation is stripped before parsing; a cell that still fails
/// to parse counts as `0.0` rather than poisoning the whole load.
fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.trim().parse().unwrap_or(0.0)
}

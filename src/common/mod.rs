//! Common types shared across bidindex.
//!
//! The fundamental pieces every other module builds on:
//! - The [`Bid`] record held by every structure
//! - Error types
//! - Configuration constants

mod bid;
pub mod config;
pub mod error;

pub use bid::Bid;
pub use error::{Error, Result};

//! Utility modules for admindash.
//!
//! - [`datetime`] - Parsing and formatting of server timestamps for display

pub mod datetime;

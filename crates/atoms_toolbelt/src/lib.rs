//! Atoms Toolbelt
//!
//! The grab-bag of formatting and data helpers the atoms share: thousands
//! separators and relative times for captions, lenient timestamp parsing for
//! the three shapes the feeds deliver, autocomplete ranking for the seat
//! search box, and JSON record utilities (deep merge, sorting with ranks,
//! sums, frequency tallies, column schema inference).
//!
//! Everything here is presentation plumbing: helpers swallow malformed
//! input and return empty output rather than erroring, because a blank
//! caption beats a broken atom.
//!
//! # Example
//!
//! ```rust
//! use atoms_toolbelt::{autocomplete, commas};
//!
//! assert_eq!(commas(1653980.0), "1,653,980");
//!
//! let seats = ["Wentworth", "Warringah", "North Sydney"];
//! let suggestions = autocomplete("w", &seats);
//! assert_eq!(suggestions[0].text, "Wentworth");
//! ```

pub mod autocomplete;
pub mod collections;
pub mod format;
pub mod schema;

pub use autocomplete::{autocomplete, Suggestion};
pub use collections::{
    contains_any, merge, sort_desc, sum, tally_frequency, tally_frequency_reversed,
};
pub use format::{
    commas, iso_to_unix, parse_timestamp, sydney_local, time_ago, time_ago_at, time_ago_unix,
};
pub use schema::{schema, ColumnSchema, DataType, Format, Scale};

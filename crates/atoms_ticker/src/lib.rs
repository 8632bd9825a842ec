//! Atoms Ticker
//!
//! The election-night ticker: typed models for the results service JSON and
//! the assembly pass that turns them into the entry list the ticker widget
//! renders (predicted seats only, hold/wins status, party or candidate
//! labels, most recent announcements first).
//!
//! # Example
//!
//! ```rust
//! use atoms_ticker::{create_ticker_feed, Results};
//!
//! let results: Results = serde_json::from_str(r#"{
//!     "electorates": [
//!         {"electorate": "Higgins", "prediction": "ALP", "incumbent": "LIB",
//!          "timestamp": "2022-05-21T12:00:00Z"}
//!     ],
//!     "partyNames": [
//!         {"partyCode": "ALP", "partyName": "Australian Labor Party"}
//!     ]
//! }"#).unwrap();
//!
//! let feed = create_ticker_feed(&results);
//! assert_eq!(feed[0].label, "Australian Labor Party");
//! assert_eq!(feed[0].status.label(), "wins");
//! ```

pub mod feed;
pub mod model;

pub use feed::{create_ticker_feed, Status, TickerEntry};
pub use model::{Electorate, PartyRecord, Results};

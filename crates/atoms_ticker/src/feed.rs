//! Ticker feed assembly
//!
//! Turns the raw results document into the ordered entry list the ticker
//! renders: predicted seats only, labelled with the party's display name
//! (or the candidate's name for independents), most recent announcements
//! first.

use rustc_hash::FxHashMap;

use atoms_toolbelt::parse_timestamp;

use crate::model::{Electorate, Results};

/// Party code independents carry in the feed
const INDEPENDENT_CODE: &str = "IND";

/// Whether the predicted party keeps or takes the seat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Hold,
    Wins,
}

impl Status {
    /// Display word the ticker template interpolates
    pub fn label(&self) -> &'static str {
        match self {
            Status::Hold => "hold",
            Status::Wins => "wins",
        }
    }
}

/// One rendered ticker entry
#[derive(Clone, Debug, PartialEq)]
pub struct TickerEntry {
    pub electorate: String,
    /// Party display name, or the candidate name for independents
    pub label: String,
    /// Announcement qualifier shown next to the time
    pub announced: String,
    pub status: Status,
    /// Unix seconds of the announcement; `None` when the feed had no
    /// timestamp
    pub unix: Option<i64>,
}

/// Assemble the ticker feed from a results document
///
/// Electorates without a prediction are dropped. Entries with parseable
/// timestamps come first, most recent leading; entries without keep their
/// feed order at the tail.
pub fn create_ticker_feed(results: &Results) -> Vec<TickerEntry> {
    let party_names: FxHashMap<&str, &str> = results
        .party_names
        .iter()
        .map(|p| (p.party_code.as_str(), p.party_name.as_str()))
        .collect();

    let mut timestamped = Vec::new();
    let mut unannounced = Vec::new();

    for seat in results.electorates.iter().filter(|e| !e.prediction.is_empty()) {
        let entry = build_entry(seat, &party_names);
        match entry.unix {
            Some(_) => timestamped.push(entry),
            None => unannounced.push(entry),
        }
    }

    timestamped.sort_by_key(|e| std::cmp::Reverse(e.unix));
    timestamped.extend(unannounced);
    timestamped
}

fn build_entry(seat: &Electorate, party_names: &FxHashMap<&str, &str>) -> TickerEntry {
    let status = if seat.prediction == seat.incumbent {
        Status::Hold
    } else {
        Status::Wins
    };

    let label = if seat.prediction == INDEPENDENT_CODE {
        seat.prediction_name.clone()
    } else {
        match party_names.get(seat.prediction.as_str()) {
            Some(name) => (*name).to_string(),
            None => {
                tracing::warn!(code = %seat.prediction, "party code missing from feed table");
                String::new()
            }
        }
    };

    let unix = if seat.timestamp.is_empty() {
        None
    } else {
        parse_timestamp(&seat.timestamp).map(|dt| dt.timestamp())
    };

    TickerEntry {
        electorate: seat.electorate.clone(),
        label,
        announced: "Predicted".to_string(),
        status,
        unix,
    }
}

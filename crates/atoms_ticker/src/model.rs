//! Feed data model
//!
//! Mirrors the JSON the results service publishes: an `electorates` array of
//! per-seat predictions plus a `partyNames` code-to-name table. Fields the
//! service sometimes omits default to empty strings, which downstream code
//! treats as "not yet known" rather than an error.

use serde::{Deserialize, Serialize};

/// The full results document
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    #[serde(default)]
    pub electorates: Vec<Electorate>,
    #[serde(default)]
    pub party_names: Vec<PartyRecord>,
}

/// One seat's prediction state
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Electorate {
    pub electorate: String,
    /// Predicted winning party code; empty until a prediction is made
    #[serde(default)]
    pub prediction: String,
    /// Party code holding the seat going in
    #[serde(default)]
    pub incumbent: String,
    /// Candidate name, used as the label for independents
    #[serde(rename = "prediction-name", default)]
    pub prediction_name: String,
    /// Prediction timestamp; empty when not yet announced
    #[serde(default)]
    pub timestamp: String,
}

/// Code-to-name entry from the feed's party table
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRecord {
    pub party_code: String,
    pub party_name: String,
}

//! JSON record utilities
//!
//! Helpers the atoms use to massage fetched feed rows before templating:
//! deep merge for config overrides, descending sort with optional ranks,
//! column sums, and frequency tallies.
//!
//! Tallies preserve first-seen key order (`IndexMap`): the reversed variant
//! pairs the same keys with the value sequence reversed, which only makes
//! sense when order is stable.

use indexmap::IndexMap;
use serde_json::Value;

/// Recursive merge of `from` into `to`
///
/// Scalars (and anything whose target slot is not an object) overwrite;
/// object pairs merge key by key. An object slot is left alone when the
/// incoming value is a scalar.
pub fn merge(to: &mut Value, from: &Value) {
    let (Value::Object(to_map), Value::Object(from_map)) = (to, from) else {
        return;
    };
    for (key, incoming) in from_map {
        match to_map.get_mut(key) {
            Some(slot) if slot.is_object() => {
                if incoming.is_object() {
                    merge(slot, incoming);
                }
            }
            _ => {
                to_map.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Whether the haystack contains any of the needles
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Sort records descending by the value under `key`
///
/// Numbers compare numerically, everything else by its string form. With
/// `ranked` each record gains a 1-based `rank` field in sorted order.
pub fn sort_desc(records: &mut [Value], key: &str, ranked: bool) {
    records.sort_by(|a, b| {
        let (a, b) = (&a[key], &b[key]);
        match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
            _ => stringify(b).cmp(&stringify(a)),
        }
    });
    if ranked {
        for (i, record) in records.iter_mut().enumerate() {
            if let Value::Object(map) = record {
                map.insert("rank".to_string(), Value::from(i as u64 + 1));
            }
        }
    }
}

/// Sum the numeric values under `key` across all records
pub fn sum(records: &[Value], key: &str) -> f64 {
    records.iter().filter_map(|r| r[key].as_f64()).sum()
}

/// Count how often each value appears under `key`, in first-seen order
pub fn tally_frequency(records: &[Value], key: &str) -> IndexMap<String, u64> {
    let mut tally = IndexMap::new();
    for record in records {
        if let Some(value) = record.get(key) {
            *tally.entry(stringify(value)).or_insert(0) += 1;
        }
    }
    tally
}

/// [`tally_frequency`] with the value sequence reversed against the same
/// keys, stringified
pub fn tally_frequency_reversed(records: &[Value], key: &str) -> IndexMap<String, String> {
    let tally = tally_frequency(records, key);
    let reversed: Vec<u64> = tally.values().rev().copied().collect();
    tally
        .keys()
        .zip(reversed)
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Reference data module - authoritative MID allocation data
// Source: ITU Maritime Identification Digits table
//
// The table is static reference data. It is compiled into the binary,
// indexed once on first use, and never mutated afterwards.

pub mod mids;

use std::collections::HashMap;
use std::sync::OnceLock;
use mids::{MidEntry, MID_ENTRIES};
use serde_json::{Map, Value};

/// Lazily-initialized HashMap for O(1) MID lookup
static MID_MAP: OnceLock<HashMap<&'static str, &'static MidEntry>> = OnceLock::new();

/// Get or initialize the MID HashMap
fn get_mid_map() -> &'static HashMap<&'static str, &'static MidEntry> {
    MID_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(MID_ENTRIES.len());
        for entry in MID_ENTRIES {
            map.insert(entry.mid, entry);
        }
        log::debug!("Indexed {} MID entries", map.len());
        map
    })
}

/// Look up the administration a MID is allocated to
pub fn lookup_mid(mid: &str) -> Option<&'static MidEntry> {
    get_mid_map().get(mid).copied()
}

/// Get all MID entries
pub fn get_all_mids() -> &'static [MidEntry] {
    MID_ENTRIES
}

/// Get every MID allocated to a country, by ISO alpha-2 code (case-insensitive)
pub fn get_mids_for_country(alpha2: &str) -> Vec<&'static str> {
    MID_ENTRIES
        .iter()
        .filter(|entry| entry.alpha2.eq_ignore_ascii_case(alpha2))
        .map(|entry| entry.mid)
        .collect()
}

/// Export entries as `{ "<mid>": [alpha2, alpha3, reserved, country] }`
pub fn mid_table_json<'a, I>(entries: I) -> Value
where
    I: IntoIterator<Item = &'a MidEntry>,
{
    let mut table = Map::new();
    for entry in entries {
        let record = entry
            .as_record()
            .into_iter()
            .map(|slot| slot.map_or(Value::Null, |s| Value::String(s.to_string())))
            .collect();
        table.insert(entry.mid.to_string(), Value::Array(record));
    }
    Value::Object(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_mid() {
        let usa = lookup_mid("366").map(|e| (e.alpha2, e.alpha3));
        assert_eq!(usa, Some(("US", "USA")));
        assert_eq!(lookup_mid("211").map(|e| e.country), Some("Germany"));
    }

    #[test]
    fn test_unallocated_and_malformed_mids() {
        assert!(lookup_mid("999").is_none());
        assert!(lookup_mid("012").is_none());
        assert!(lookup_mid("280").is_none());
        assert!(lookup_mid("").is_none());
        assert!(lookup_mid("3661").is_none());
    }

    #[test]
    fn test_map_matches_table() {
        assert_eq!(get_mid_map().len(), get_all_mids().len());
    }

    #[test]
    fn test_mids_for_country() {
        let us = get_mids_for_country("us");
        for mid in ["303", "338", "366", "367", "368", "369"] {
            assert!(us.contains(&mid), "missing {}", mid);
        }
        assert_eq!(get_mids_for_country("DE"), vec!["211", "218"]);
        assert!(get_mids_for_country("XX").is_empty());
    }

    #[test]
    fn test_table_json_shape() {
        let exported = mid_table_json(get_all_mids());
        assert_eq!(exported["366"], json!(["US", "USA", null, "United States of America"]));
        assert_eq!(exported.as_object().map(|t| t.len()), Some(get_all_mids().len()));
    }
}

//! Join/filter engine: delta-set projection, part filtering, and category
//! enrichment.
//!
//! Everything here is a pure function of in-memory tables. Key-column
//! presence on the reference tables is checked at the load boundary in the
//! orchestrator; these functions treat an absent key column as "no members"
//! rather than an error.

use std::collections::{HashMap, HashSet};

use crate::table::Table;

/// Key column shared by all three input tables.
pub const KEY_COLUMN: &str = "part_number";
/// Column appended (or overwritten) on enriched records.
pub const CATEGORY_COLUMN: &str = "category";

/// Collect the non-blank `part_number` values of a delta table into a set.
///
/// Duplicates collapse; blank values are dropped. A delta file without the
/// key column yields an empty set, which the caller reports as a clean
/// no-work run.
pub fn delta_set(table: &Table) -> HashSet<String> {
    let Some(key) = table.column_index(KEY_COLUMN) else {
        return HashSet::new();
    };
    table
        .records()
        .iter()
        .filter_map(|record| record.get(key))
        .filter(|value| !value.is_empty())
        .cloned()
        .collect()
}

/// Retain part-master records whose key is in the delta set, preserving
/// relative order. The result keeps the part-master header unchanged.
pub fn filter_by_delta(parts: &Table, delta: &HashSet<String>) -> Table {
    let mut filtered = Table::new(parts.header().to_vec());
    let Some(key) = parts.column_index(KEY_COLUMN) else {
        return filtered;
    };
    for record in parts.records() {
        if delta.contains(&record[key]) {
            filtered.push_record(record.clone());
        }
    }
    filtered
}

/// Build the part-number-to-category lookup from the association table.
/// When a part number repeats, the later row in file order overwrites the
/// earlier mapping.
pub fn category_map(assoc: &Table) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let (Some(key), Some(cat)) = (
        assoc.column_index(KEY_COLUMN),
        assoc.column_index(CATEGORY_COLUMN),
    ) else {
        return map;
    };
    for record in assoc.records() {
        map.insert(record[key].clone(), record[cat].clone());
    }
    map
}

/// Append the `category` column to every record, taking the looked-up value
/// or the empty string when the part number has no association. Records are
/// never dropped or reordered.
///
/// If the input already carries a `category` column (some part masters do),
/// the value is overwritten in place instead of appending a duplicate.
pub fn enrich(filtered: &Table, categories: &HashMap<String, String>) -> Table {
    let key = filtered.column_index(KEY_COLUMN);
    let existing = filtered.column_index(CATEGORY_COLUMN);

    let mut header = filtered.header().to_vec();
    if existing.is_none() {
        header.push(CATEGORY_COLUMN.to_string());
    }

    let mut enriched = Table::new(header);
    for record in filtered.records() {
        let category = key
            .and_then(|k| categories.get(&record[k]))
            .cloned()
            .unwrap_or_default();
        let mut out = record.clone();
        match existing {
            Some(idx) => out[idx] = category,
            None => out.push(category),
        }
        enriched.push_record(out);
    }
    enriched
}

/// Full join: filter the part master by the delta set, then enrich with
/// the association lookup.
pub fn build_feed(parts: &Table, assoc: &Table, delta: &HashSet<String>) -> Table {
    let filtered = filter_by_delta(parts, delta);
    let categories = category_map(assoc);
    enrich(&filtered, &categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(header: &[&str], records: &[&[&str]]) -> Table {
        let mut t = Table::new(header.iter().map(|s| s.to_string()).collect());
        for record in records {
            t.push_record(record.iter().map(|s| s.to_string()).collect());
        }
        t
    }

    fn set(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_delta_set_drops_blanks_and_dedupes() {
        let delta = table(
            &["part_number"],
            &[&["A1"], &[""], &["B2"], &["A1"], &["C3"]],
        );
        assert_eq!(delta_set(&delta), set(&["A1", "B2", "C3"]));
    }

    #[test]
    fn test_delta_set_without_key_column_is_empty() {
        let delta = table(&["sku"], &[&["A1"]]);
        assert!(delta_set(&delta).is_empty());
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let parts = table(
            &["part_number", "name"],
            &[
                &["A1", "Widget"],
                &["B2", "Gadget"],
                &["C3", "Sprocket"],
                &["A1", "Widget again"],
            ],
        );
        let filtered = filter_by_delta(&parts, &set(&["C3", "A1"]));
        let keys: Vec<_> = filtered.records().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(keys, ["A1", "C3", "A1"]);
        assert_eq!(filtered.header(), parts.header());
    }

    #[test]
    fn test_filter_no_match_yields_empty_table() {
        let parts = table(&["part_number", "name"], &[&["A1", "Widget"]]);
        let filtered = filter_by_delta(&parts, &set(&["Z9"]));
        assert!(filtered.is_empty());
        assert_eq!(filtered.header(), ["part_number", "name"]);
    }

    #[test]
    fn test_category_map_last_occurrence_wins() {
        let assoc = table(
            &["part_number", "category"],
            &[
                &["A1", "Hardware"],
                &["B2", "Tools"],
                &["A1", "Fasteners"],
            ],
        );
        let map = category_map(&assoc);
        assert_eq!(map["A1"], "Fasteners");
        assert_eq!(map["B2"], "Tools");
    }

    #[test]
    fn test_enrich_is_total_with_empty_default() {
        let filtered = table(
            &["part_number", "name"],
            &[&["A1", "Widget"], &["B2", "Gadget"]],
        );
        let mut categories = HashMap::new();
        categories.insert("A1".to_string(), "Hardware".to_string());

        let enriched = enrich(&filtered, &categories);
        assert_eq!(enriched.header(), ["part_number", "name", "category"]);
        assert_eq!(enriched.records()[0], vec!["A1", "Widget", "Hardware"]);
        assert_eq!(enriched.records()[1], vec!["B2", "Gadget", ""]);
    }

    #[test]
    fn test_enrich_overwrites_existing_category_column() {
        let filtered = table(
            &["part_number", "category", "name"],
            &[&["A1", "stale", "Widget"]],
        );
        let mut categories = HashMap::new();
        categories.insert("A1".to_string(), "Hardware".to_string());

        let enriched = enrich(&filtered, &categories);
        assert_eq!(enriched.header(), ["part_number", "category", "name"]);
        assert_eq!(enriched.records()[0], vec!["A1", "Hardware", "Widget"]);
    }

    #[test]
    fn test_build_feed_single_match() {
        let parts = table(
            &["part_number", "name"],
            &[&["A1", "Widget"], &["B2", "Gadget"]],
        );
        let assoc = table(&["part_number", "category"], &[&["A1", "Hardware"]]);

        let feed = build_feed(&parts, &assoc, &set(&["A1"]));
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.records()[0], vec!["A1", "Widget", "Hardware"]);
    }

    #[test]
    fn test_build_feed_unmatched_delta_member() {
        let parts = table(&["part_number", "name"], &[&["A1", "Widget"]]);
        let assoc = table(&["part_number", "category"], &[&["A1", "Hardware"]]);

        let feed = build_feed(&parts, &assoc, &set(&["Z9"]));
        assert!(feed.is_empty());
        assert_eq!(feed.header(), ["part_number", "name", "category"]);
    }
}

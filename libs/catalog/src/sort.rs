//! Result ordering

use crate::query::SortKey;
use crate::record::ExtensionRecord;
use std::cmp::Ordering;

/// Order records by `key`. The sort is stable: ties keep their input order.
pub fn sort(records: &mut [&ExtensionRecord], key: SortKey) {
    records.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &ExtensionRecord, b: &ExtensionRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Recent => b.last_updated.cmp(&a.last_updated),
        SortKey::Popular | SortKey::Downloads => b.downloads.cmp(&a.downloads),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Author, ExtensionType};
    use chrono::{TimeZone, Utc};

    fn record(id: &str, downloads: u64, day: u32) -> ExtensionRecord {
        ExtensionRecord {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            extension_type: ExtensionType::Panel,
            author: Author {
                name: "a".to_string(),
                email: "a@example.com".to_string(),
            },
            version: "0.1.0".to_string(),
            downloads,
            last_updated: Utc.with_ymd_and_hms(2024, 12, day, 12, 0, 0).unwrap(),
            sandbox: false,
            license: "MIT".to_string(),
            repository: None,
            keywords: Vec::new(),
        }
    }

    fn sorted_ids(records: &[ExtensionRecord], key: SortKey) -> Vec<&str> {
        let mut refs: Vec<&ExtensionRecord> = records.iter().collect();
        sort(&mut refs, key);
        refs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn popular_and_downloads_rank_by_download_count() {
        let records = vec![record("low", 10, 1), record("high", 30, 2), record("mid", 20, 3)];
        assert_eq!(sorted_ids(&records, SortKey::Popular), vec!["high", "mid", "low"]);
        assert_eq!(
            sorted_ids(&records, SortKey::Downloads),
            sorted_ids(&records, SortKey::Popular)
        );
    }

    #[test]
    fn recent_puts_latest_first() {
        let records = vec![record("old", 10, 1), record("new", 5, 9), record("mid", 7, 4)];
        assert_eq!(sorted_ids(&records, SortKey::Recent), vec!["new", "mid", "old"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            record("first", 5, 1),
            record("top", 9, 1),
            record("second", 5, 1),
            record("third", 5, 1),
        ];
        assert_eq!(
            sorted_ids(&records, SortKey::Downloads),
            vec!["top", "first", "second", "third"]
        );
        assert_eq!(
            sorted_ids(&records, SortKey::Recent),
            vec!["first", "top", "second", "third"]
        );
    }
}

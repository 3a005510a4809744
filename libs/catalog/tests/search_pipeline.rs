mod support;

use bazaar_catalog::{
    category_counts, get_by_id, search, Error, ExtensionType, RawParams, SortKey,
};
use support::{ids, sample_records};

#[test]
fn type_filter_with_default_popular_sort() {
    let records = sample_records();
    let page = search(&records, &RawParams::new().with("type", "interface")).unwrap();

    assert_eq!(
        ids(&page.data),
        vec![
            "directus-extension-computed-interface",
            "directus-extension-simple-currency"
        ]
    );
    assert_eq!(page.data[0].downloads, 12543);
    assert_eq!(page.data[1].downloads, 8234);
    assert_eq!(page.meta.total, 2);
    assert!(!page.meta.has_next);
}

#[test]
fn search_term_matches_single_extension() {
    let records = sample_records();
    let page = search(&records, &RawParams::new().with("search", "currency")).unwrap();

    assert_eq!(ids(&page.data), vec!["directus-extension-simple-currency"]);
    assert_eq!(page.meta.total, 1);
}

#[test]
fn search_term_is_case_insensitive_across_fields() {
    let records = sample_records();
    let page = search(&records, &RawParams::new().with("search", "DATA STUDIO")).unwrap();

    // Matches descriptions only; ordered by downloads.
    assert_eq!(
        ids(&page.data),
        vec![
            "directus-extension-dark-theme",
            "directus-extension-pdf-viewer"
        ]
    );
}

#[test]
fn sandboxed_extensions_limited_to_three() {
    let records = sample_records();
    let raw = RawParams::new().with("sandbox", true).with("limit", 3);
    let page = search(&records, &raw).unwrap();

    assert!(page.data.len() <= 3);
    assert!(page.data.iter().all(|r| r.sandbox));
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.limit, 3);
    assert!(!page.meta.has_next);
    assert_eq!(
        ids(&page.data),
        vec![
            "directus-extension-computed-interface",
            "directus-extension-pdf-viewer",
            "directus-extension-simple-currency"
        ]
    );
}

#[test]
fn sandboxed_total_reflects_all_matches_when_page_is_smaller() {
    let records = sample_records();
    let raw = RawParams::from_pairs([("sandbox", "true"), ("limit", "2")]);
    let page = search(&records, &raw).unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total, 3);
    assert!(page.meta.has_next);
}

#[test]
fn recent_sort_orders_by_last_updated() {
    let records = sample_records();
    let raw = RawParams::new().with("sort", "recent").with("limit", 3);
    let page = search(&records, &raw).unwrap();

    assert_eq!(
        ids(&page.data),
        vec![
            "directus-extension-computed-interface",
            "directus-extension-dark-theme",
            "directus-extension-gantt-layout"
        ]
    );
    assert!(page
        .data
        .windows(2)
        .all(|w| w[0].last_updated >= w[1].last_updated));
    assert_eq!(page.meta.total, 5);
    assert!(page.meta.has_next);
}

#[test]
fn downloads_sort_matches_popular() {
    let records = sample_records();
    let popular = search(&records, &RawParams::new().with("sort", "popular")).unwrap();
    let downloads = search(&records, &RawParams::new().with("sort", "downloads")).unwrap();

    assert_eq!(popular, downloads);
    assert_eq!(
        ids(&popular.data),
        vec![
            "directus-extension-dark-theme",
            "directus-extension-gantt-layout",
            "directus-extension-computed-interface",
            "directus-extension-pdf-viewer",
            "directus-extension-simple-currency"
        ]
    );
}

#[test]
fn combined_search_sort_and_limit() {
    let records = sample_records();
    let raw = RawParams::new()
        .with("search", "theme")
        .with("sort", "downloads")
        .with("limit", 2);
    let page = search(&records, &raw).unwrap();

    assert_eq!(ids(&page.data), vec!["directus-extension-dark-theme"]);
    assert_eq!(page.meta.total, 1);
}

#[test]
fn offset_past_the_end_keeps_total() {
    let records = sample_records();
    let raw = RawParams::new().with("offset", 10);
    let page = search(&records, &raw).unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 5);
    assert_eq!(page.meta.offset, 10);
    assert!(!page.meta.has_next);
}

#[test]
fn second_page_continues_the_ordering() {
    let records = sample_records();
    let first = search(&records, &RawParams::new().with("limit", 2)).unwrap();
    let second = search(&records, &RawParams::new().with("limit", 2).with("offset", 2)).unwrap();
    let all = search(&records, &RawParams::new()).unwrap();

    let stitched: Vec<_> = first.data.iter().chain(second.data.iter()).cloned().collect();
    assert_eq!(stitched, all.data[..4].to_vec());
}

#[test]
fn validation_error_short_circuits() {
    let records = sample_records();
    let err = search(&records, &RawParams::new().with("limit", "-1")).unwrap_err();
    assert!(matches!(err, Error::Validation { ref param, .. } if param == "limit"));

    let err = search(&records, &RawParams::new().with("type", "themes")).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn input_records_are_untouched() {
    let records = sample_records();
    let before = records.clone();
    let _ = search(&records, &RawParams::new().with("sort", "recent")).unwrap();
    assert_eq!(records, before);
}

#[test]
fn get_by_id_returns_record_unmodified() {
    let records = sample_records();
    let found = get_by_id(&records, "directus-extension-pdf-viewer").unwrap();
    assert_eq!(found, &records[3]);
    assert_eq!(found.extension_type, ExtensionType::Display);
}

#[test]
fn get_by_id_reports_missing_id() {
    let records = sample_records();
    let err = get_by_id(&records, "directus-extension-missing").unwrap_err();
    assert_eq!(err, Error::NotFound("directus-extension-missing".to_string()));
}

#[test]
fn category_counts_cover_every_type() {
    let records = sample_records();
    let counts = category_counts(&records);

    assert_eq!(counts.len(), ExtensionType::ALL.len());
    let count_of = |t: ExtensionType| {
        counts
            .iter()
            .find(|c| c.extension_type == t)
            .map(|c| c.count)
            .unwrap()
    };
    assert_eq!(count_of(ExtensionType::Interface), 2);
    assert_eq!(count_of(ExtensionType::Layout), 1);
    assert_eq!(count_of(ExtensionType::Hook), 0);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), records.len());
}

#[test]
fn sort_key_default_is_popular() {
    assert_eq!(SortKey::default(), SortKey::Popular);
}

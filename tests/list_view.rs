use std::io::Write;

use listview::source::{CollectionSource, JsonFileSource};
use listview::{
    handle_event, initialize, paginate, Action, Config, Event, FilterValue, ListViewError,
    QuerySpec, Record, SortDirection,
};
use serde_json::{json, Value};

fn records(values: Vec<Value>) -> Vec<Record> {
    values.into_iter().filter_map(Record::from_value).collect()
}

fn people() -> Vec<Record> {
    records(vec![
        json!({"name": "Bob", "age": 40}),
        json!({"name": "Al", "age": 30}),
        json!({"name": "Cy", "age": 30}),
    ])
}

fn names(rows: &[Record]) -> Vec<&str> {
    rows.iter()
        .filter_map(|r| r.field("name").and_then(Value::as_str))
        .collect()
}

fn inventory(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::from_value(json!({
                "sku": format!("SKU-{i:03}"),
                "category": if i % 3 == 0 { "lubricants" } else { "filters" },
                "stock": (i * 7) % 11,
            }))
            .unwrap()
        })
        .collect()
}

#[test]
fn sorted_first_page() {
    let spec = QuerySpec::default()
        .sorted_by("age", SortDirection::Asc)
        .with_page(1, 2);
    let page = paginate(&people(), &spec).unwrap();

    assert_eq!(names(&page.rows), vec!["Al", "Cy"]);
    assert_eq!(page.total_count, 3);
}

#[test]
fn search_narrows_total() {
    let spec = QuerySpec::default().with_search("al", ["name"]);
    let page = paginate(&people(), &spec).unwrap();

    assert_eq!(names(&page.rows), vec!["Al"]);
    assert_eq!(page.total_count, 1);
}

#[test]
fn no_criteria_counts_everything() {
    let collection = inventory(23);
    let page = paginate(&collection, &QuerySpec::default()).unwrap();

    assert_eq!(page.total_count, collection.len());
    assert_eq!(page.rows.len(), 10);
}

#[test]
fn repeated_calls_agree() {
    let collection = inventory(40);
    let spec = QuerySpec::default()
        .with_filter("category", FilterValue::equals("filters"))
        .sorted_by("stock", SortDirection::Desc)
        .with_page(2, 5);

    let first = paginate(&collection, &spec).unwrap();
    let second = paginate(&collection, &spec).unwrap();
    assert_eq!(first, second);
}

#[test]
fn equal_keys_keep_input_order() {
    let collection = inventory(30);
    let spec = QuerySpec::default()
        .sorted_by("category", SortDirection::Desc)
        .with_page(1, 30);
    let page = paginate(&collection, &spec).unwrap();

    let lubricant_skus: Vec<&str> = page
        .rows
        .iter()
        .filter(|r| r.field("category") == Some(&json!("lubricants")))
        .filter_map(|r| r.field("sku").and_then(Value::as_str))
        .collect();

    let mut expected = lubricant_skus.clone();
    expected.sort_unstable();
    assert_eq!(lubricant_skus, expected);
}

#[test]
fn pages_partition_matches() {
    let collection = inventory(23);
    let total = paginate(&collection, &QuerySpec::default()).unwrap().total_count;

    let mut seen = Vec::new();
    for page_index in 1..=3 {
        let spec = QuerySpec::default().with_page(page_index, 10);
        let page = paginate(&collection, &spec).unwrap();
        assert!(page.rows.len() <= 10);
        seen.extend(page.rows);
    }
    assert_eq!(seen.len(), total);
    assert_eq!(seen, collection);
}

#[test]
fn page_past_end_is_empty() {
    let spec = QuerySpec::default().with_page(9, 10);
    let page = paginate(&inventory(23), &spec).unwrap();

    assert!(page.rows.is_empty());
    assert_eq!(page.total_count, 23);
}

#[test]
fn unmatched_filter_yields_nothing() {
    let spec = QuerySpec::default().with_filter("category", FilterValue::equals("tyres"));
    let page = paginate(&inventory(12), &spec).unwrap();

    assert!(page.rows.is_empty());
    assert_eq!(page.total_count, 0);
}

#[test]
fn invalid_page_arguments_rejected() {
    let err = paginate(&people(), &QuerySpec::default().with_page(1, 0)).unwrap_err();
    assert!(matches!(err, ListViewError::InvalidArgument(_)));

    let err = paginate(&people(), &QuerySpec::default().with_page(0, 5)).unwrap_err();
    assert!(matches!(err, ListViewError::InvalidArgument(_)));
}

#[test]
fn query_spec_from_json() {
    let spec: QuerySpec = serde_json::from_value(json!({
        "searchText": "oil",
        "searchFields": ["name"],
        "filters": {"status": "all", "category": "lubricants"},
        "sortField": "price",
        "sortDirection": "desc",
        "pageIndex": 2,
        "pageSize": 25
    }))
    .unwrap();

    assert_eq!(spec.filters.get("status"), Some(&FilterValue::All));
    assert_eq!(spec.sort_direction, SortDirection::Desc);
    assert_eq!(spec.active_filters().count(), 1);
    assert_eq!(spec.page_size, 25);
}

#[test]
fn controller_session() {
    let config = Config {
        default_page_size: 5,
        search_fields: vec!["sku".to_string()],
        ..Config::default()
    };
    let mut state = initialize(&config).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
    assert_eq!(actions, vec![Action::FetchCollection]);
    assert!(state.load_state.is_loading());

    handle_event(&mut state, &Event::CollectionLoaded(inventory(23))).unwrap();
    assert_eq!(state.total_pages(), 5);

    let (_, actions) = handle_event(&mut state, &Event::PageSelected(3)).unwrap();
    assert_eq!(actions, vec![Action::ScrollToTop]);
    assert_eq!(state.compute_viewmodel().pager.summary, "Showing 11-15 of 23");

    // Narrowing the search returns to the first page.
    handle_event(&mut state, &Event::SearchChanged("SKU-01".to_string())).unwrap();
    assert_eq!(state.query.page_index, 1);
    assert_eq!(state.page.total_count, 10);

    handle_event(&mut state, &Event::SortClicked("stock".to_string())).unwrap();
    handle_event(&mut state, &Event::SortClicked("stock".to_string())).unwrap();
    assert_eq!(state.query.sort_direction, SortDirection::Desc);

    let err = handle_event(&mut state, &Event::PageSelected(0)).unwrap_err();
    assert!(matches!(err, ListViewError::InvalidArgument(_)));
    assert_eq!(state.query.page_index, 1);

    // Upstream deletions shrink the collection below the current page.
    handle_event(&mut state, &Event::SearchCleared).unwrap();
    handle_event(&mut state, &Event::PageSelected(5)).unwrap();
    handle_event(&mut state, &Event::CollectionLoaded(inventory(8))).unwrap();
    assert_eq!(state.query.page_index, 2);
    assert_eq!(state.page.rows.len(), 3);
}

#[test]
fn json_file_source_layouts() {
    let mut bare = tempfile::NamedTempFile::new().unwrap();
    write!(bare, r#"[{{"id": 1}}, {{"id": 2}}]"#).unwrap();
    assert_eq!(JsonFileSource::new(bare.path()).load().unwrap().len(), 2);

    let mut wrapped = tempfile::NamedTempFile::new().unwrap();
    write!(wrapped, r#"{{"records": [{{"id": 1}}]}}"#).unwrap();
    assert_eq!(JsonFileSource::new(wrapped.path()).load().unwrap().len(), 1);

    let mut malformed = tempfile::NamedTempFile::new().unwrap();
    write!(malformed, r#"[{{"id": 1}}, 7]"#).unwrap();
    let err = JsonFileSource::new(malformed.path()).load().unwrap_err();
    assert!(matches!(err, ListViewError::Source(_)));
}

#[test]
fn json_file_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonFileSource::new(dir.path().join("absent.json"))
        .load()
        .unwrap_err();
    assert!(matches!(err, ListViewError::Io(_)));
}

#[test]
fn config_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_page_size = 25").unwrap();
    writeln!(file, "page_size_options = [25, 50]").unwrap();
    writeln!(file, "pager_window = 7").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.default_page_size, 25);
    assert_eq!(config.page_size_options, vec![25, 50]);
    assert_eq!(config.pager_window, 7);
    assert_eq!(config.trace_file, None);
}

use crate::domain::view::column::{find_column, Column};
use crate::domain::view::filter::FilterState;
use crate::domain::view::sort::SortState;
use crate::domain::view::value::{compare_for_sort, FieldValue};

/// Search, then filter, then sort. Always starts from `items` as given.
pub fn reduce<'a, T>(
    items: &'a [T],
    columns: &[Column<T>],
    search: &str,
    filters: &FilterState,
    sort: &SortState,
) -> Vec<&'a T> {
    let needle = search.trim().to_lowercase();
    let searchable: Vec<&Column<T>> = columns.iter().filter(|column| column.searchable).collect();

    let mut rows: Vec<&T> = items
        .iter()
        .filter(|record| needle.is_empty() || matches_search(*record, &searchable, &needle))
        .filter(|record| matches_filters(*record, columns, filters))
        .collect();

    if let Some(column) = sort.key.as_deref().and_then(|key| find_column(columns, key)) {
        let mut keyed: Vec<(FieldValue, &T)> = rows
            .into_iter()
            .map(|record| (column.value(record), record))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| compare_for_sort(a, b, sort.direction));
        rows = keyed.into_iter().map(|(_, record)| record).collect();
    }

    rows
}

fn matches_search<T>(record: &T, searchable: &[&Column<T>], needle: &str) -> bool {
    searchable
        .iter()
        .any(|column| column.value(record).contains_lowered(needle))
}

fn matches_filters<T>(record: &T, columns: &[Column<T>], filters: &FilterState) -> bool {
    filters.active().all(|(field, value)| {
        find_column(columns, field)
            .map(|column| value.matches(&column.value(record)))
            .unwrap_or(false)
    })
}

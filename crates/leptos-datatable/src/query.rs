//! Table Query
//!
//! Pure search / filter / sort / paginate over in-memory rows.

use std::cmp::Ordering;

/// Sort direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flip(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDir::Asc => "▲",
            SortDir::Desc => "▼",
        }
    }
}

/// Active sort column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub dir: SortDir,
}

/// Comparable value of a single cell
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
    /// Empty cell, always ordered last
    Missing,
}

impl SortKey {
    pub fn text(value: impl AsRef<str>) -> Self {
        SortKey::Text(value.as_ref().to_lowercase())
    }

    pub fn opt_text(value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(v) if !v.as_ref().is_empty() => SortKey::text(v),
            _ => SortKey::Missing,
        }
    }
}

impl From<f64> for SortKey {
    fn from(v: f64) -> Self {
        SortKey::Number(v)
    }
}

impl From<u32> for SortKey {
    fn from(v: u32) -> Self {
        SortKey::Number(v as f64)
    }
}

impl From<i64> for SortKey {
    fn from(v: i64) -> Self {
        SortKey::Number(v as f64)
    }
}

/// Row that can be searched and sorted by column name
pub trait TableRow {
    /// Concatenated text the search box matches against
    fn search_text(&self) -> String;
    /// Sort key for a column; unknown columns should return `SortKey::Missing`
    fn sort_key(&self, column: &str) -> SortKey;
}

/// Search, sort and paging parameters for one table
#[derive(Clone, Debug, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub sort: Option<Sort>,
    /// Zero-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 0,
            page_size: 10,
        }
    }
}

/// One rendered page plus the counts the paginator shows
#[derive(Clone, Debug, PartialEq)]
pub struct TablePage<T> {
    pub rows: Vec<T>,
    /// Unfiltered row count
    pub total: usize,
    /// Rows left after search and filter
    pub filtered: usize,
    /// Zero-based page index, clamped to the last page
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl<T> TablePage<T> {
    /// 1-based index of the first row on this page (0 when empty)
    pub fn first_index(&self) -> usize {
        if self.filtered == 0 {
            0
        } else {
            self.page * self.page_size + 1
        }
    }

    /// 1-based index of the last row on this page (0 when empty)
    pub fn last_index(&self) -> usize {
        if self.filtered == 0 {
            0
        } else {
            self.page * self.page_size + self.rows.len()
        }
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        (SortKey::Number(x), SortKey::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
    }
}

/// Number of pages for `len` rows; never less than 1
pub fn page_count(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Next sort state when a header is clicked
pub fn next_sort(current: Option<Sort>, column: &'static str) -> Sort {
    match current {
        Some(sort) if sort.column == column => Sort {
            column,
            dir: sort.dir.flip(),
        },
        _ => Sort {
            column,
            dir: SortDir::Asc,
        },
    }
}

/// All rows matching search and filter, in sort order (what exports use)
pub fn filter_sorted<T, F>(rows: &[T], query: &TableQuery, filter: F) -> Vec<T>
where
    T: TableRow + Clone,
    F: Fn(&T) -> bool,
{
    let needle = query.search.trim().to_lowercase();
    let mut out: Vec<T> = rows
        .iter()
        .filter(|row| filter(row))
        .filter(|row| needle.is_empty() || row.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if let Some(sort) = query.sort {
        // Missing keys stay last regardless of direction
        out.sort_by(|a, b| {
            let ka = a.sort_key(sort.column);
            let kb = b.sort_key(sort.column);
            match (&ka, &kb) {
                (SortKey::Missing, _) | (_, SortKey::Missing) => compare_keys(&ka, &kb),
                _ => match sort.dir {
                    SortDir::Asc => compare_keys(&ka, &kb),
                    SortDir::Desc => compare_keys(&kb, &ka),
                },
            }
        });
    }
    out
}

/// Search, filter, sort, then slice out the requested page
pub fn apply<T, F>(rows: &[T], query: &TableQuery, filter: F) -> TablePage<T>
where
    T: TableRow + Clone,
    F: Fn(&T) -> bool,
{
    let total = rows.len();
    let matched = filter_sorted(rows, query, filter);
    let filtered = matched.len();
    let page_size = query.page_size.max(1);
    let pages = page_count(filtered, page_size);
    let page = query.page.min(pages - 1);
    let page_rows = matched
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect();

    TablePage {
        rows: page_rows,
        total,
        filtered,
        page,
        page_count: pages,
        page_size,
    }
}

/// Page numbers to show around the current page (zero-based)
pub fn page_window(current: usize, count: usize, width: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let width = width.max(1).min(count);
    let half = width / 2;
    let start = current.saturating_sub(half).min(count - width);
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        status: &'static str,
        cost: Option<f64>,
    }

    impl TableRow for Row {
        fn search_text(&self) -> String {
            format!("{} {}", self.name, self.status)
        }

        fn sort_key(&self, column: &str) -> SortKey {
            match column {
                "id" => self.id.into(),
                "name" => SortKey::text(self.name),
                "cost" => self.cost.map(SortKey::Number).unwrap_or(SortKey::Missing),
                _ => SortKey::Missing,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Projector", status: "available", cost: Some(25000.0) },
            Row { id: 2, name: "armchair", status: "assigned", cost: Some(1500.0) },
            Row { id: 3, name: "Laptop", status: "available", cost: None },
            Row { id: 4, name: "Bookshelf", status: "condemned", cost: Some(3200.0) },
            Row { id: 5, name: "Printer", status: "assigned", cost: Some(8900.0) },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = TableQuery { search: "LAP".into(), ..Default::default() };
        let page = apply(&rows(), &query, |_| true);
        assert_eq!(ids(&page.rows), vec![3]);
        assert_eq!(page.filtered, 1);
    }

    #[test]
    fn test_filter_never_changes_total() {
        let all = rows();
        let query = TableQuery::default();
        for status in ["available", "assigned", "condemned", "lost"] {
            let page = apply(&all, &query, |r| r.status == status);
            assert_eq!(page.total, all.len());
            assert!(page.filtered <= page.total);
        }
        let assigned = apply(&all, &query, |r| r.status == "assigned");
        assert_eq!(ids(&assigned.rows), vec![2, 5]);
    }

    #[test]
    fn test_sort_text_ignores_case() {
        let query = TableQuery {
            sort: Some(Sort { column: "name", dir: SortDir::Asc }),
            ..Default::default()
        };
        let page = apply(&rows(), &query, |_| true);
        assert_eq!(ids(&page.rows), vec![2, 4, 3, 5, 1]);
    }

    #[test]
    fn test_missing_keys_sort_last_both_directions() {
        let mut query = TableQuery {
            sort: Some(Sort { column: "cost", dir: SortDir::Asc }),
            ..Default::default()
        };
        let asc = apply(&rows(), &query, |_| true);
        assert_eq!(ids(&asc.rows), vec![2, 4, 5, 1, 3]);

        query.sort = Some(Sort { column: "cost", dir: SortDir::Desc });
        let desc = apply(&rows(), &query, |_| true);
        assert_eq!(ids(&desc.rows), vec![1, 5, 4, 2, 3]);
    }

    #[test]
    fn test_pagination_and_clamping() {
        let query = TableQuery { page: 1, page_size: 2, ..Default::default() };
        let page = apply(&rows(), &query, |_| true);
        assert_eq!(ids(&page.rows), vec![3, 4]);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.first_index(), 3);
        assert_eq!(page.last_index(), 4);

        let query = TableQuery { page: 9, page_size: 2, ..Default::default() };
        let page = apply(&rows(), &query, |_| true);
        assert_eq!(page.page, 2);
        assert_eq!(ids(&page.rows), vec![5]);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let query = TableQuery { search: "nothing matches".into(), ..Default::default() };
        let page = apply(&rows(), &query, |_| true);
        assert!(page.rows.is_empty());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.first_index(), 0);
        assert_eq!(page.last_index(), 0);
    }

    #[test]
    fn test_next_sort_flips_same_column() {
        let first = next_sort(None, "name");
        assert_eq!(first.dir, SortDir::Asc);
        let second = next_sort(Some(first), "name");
        assert_eq!(second.dir, SortDir::Desc);
        let other = next_sort(Some(second), "cost");
        assert_eq!(other, Sort { column: "cost", dir: SortDir::Asc });
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(0, 10, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(9, 10, 5), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(0, 2, 5), vec![0, 1]);
        assert!(page_window(0, 0, 5).is_empty());
    }
}

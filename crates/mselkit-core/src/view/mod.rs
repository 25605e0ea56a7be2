// ── Derived list views ──
//
// A visible list is a pure projection of (collection snapshot, filter
// term, sort column, sort direction, page index, page size). The
// reactive ListView recomputes it on any change to the collection or
// the parameters.

mod columns;

use std::cmp::Ordering;
use std::sync::Arc;

use tokio::sync::watch;
use url::Url;

use crate::model::Record;

/// Sort direction for a list column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse the short query-parameter form; anything that isn't
    /// "desc"/"descending" sorts ascending.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A named column plus direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Per-entity list behavior: the default sort, the hand-written
/// column comparator, and the free-text filter match.
pub trait ListColumns {
    /// Sort applied when a view doesn't specify one.
    fn default_sort() -> SortSpec;

    /// Compare two records under a named column.
    ///
    /// Columns a comparator doesn't implement compare equal, so the
    /// incoming order is preserved for them.
    fn compare_column(&self, other: &Self, column: &str) -> Ordering;

    /// Case-insensitive substring match against the entity's
    /// searchable fields. `needle` is pre-lowercased and non-empty.
    fn matches_filter(&self, needle: &str) -> bool;
}

/// The full parameter set of a derived list view.
///
/// Round-trips through URL query pairs (`filter`, `sort`, `dir`,
/// `page`, `size`) so list state stays shareable and bookmarkable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Free-text filter term. Empty = no filtering.
    pub filter: String,
    /// Sort column + direction. `None` = the entity's default sort.
    pub sort: Option<SortSpec>,
    /// Zero-based page index. Ignored without a page size.
    pub page_index: usize,
    /// Page size. `None` = no pagination.
    pub page_size: Option<usize>,
}

impl ListParams {
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }

    /// Serialize to query pairs, omitting defaults.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.filter.is_empty() {
            pairs.push(("filter", self.filter.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.column.clone()));
            pairs.push(("dir", sort.direction.as_str().to_owned()));
        }
        if self.page_index > 0 {
            pairs.push(("page", self.page_index.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }

    /// Replace `url`'s query string with this parameter set.
    pub fn apply_to_url(&self, url: &mut Url) {
        url.set_query(None);
        let pairs = self.to_query_pairs();
        if pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
    }

    /// Parse from `url`'s query string. Unknown keys and unparseable
    /// numbers fall back to defaults.
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();
        let mut column: Option<String> = None;
        let mut direction = SortDirection::Ascending;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "filter" => params.filter = value.into_owned(),
                "sort" => column = Some(value.into_owned()),
                "dir" => direction = SortDirection::parse(&value),
                "page" => params.page_index = value.parse().unwrap_or(0),
                "size" => params.page_size = value.parse().ok(),
                _ => {}
            }
        }

        if let Some(column) = column {
            params.sort = Some(SortSpec { column, direction });
        }
        params
    }
}

/// Compute the visible list: filter, then sort, then paginate.
///
/// Pure and deterministic — identical inputs yield identical output
/// order and membership. The sort is stable, so ties under the sort
/// key keep snapshot (insertion) order. Pagination slices
/// `[page_index*size, page_index*size + size)` clamped to bounds.
pub fn visible<T: ListColumns>(records: &[Arc<T>], params: &ListParams) -> Vec<Arc<T>> {
    let needle = params.filter.trim().to_lowercase();
    let mut rows: Vec<Arc<T>> = if needle.is_empty() {
        records.to_vec()
    } else {
        records
            .iter()
            .filter(|r| r.matches_filter(&needle))
            .cloned()
            .collect()
    };

    let sort = params.sort.clone().unwrap_or_else(T::default_sort);
    rows.sort_by(|a, b| {
        let ordering = a.compare_column(b, &sort.column);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    match params.page_size {
        Some(size) if size > 0 => {
            let start = params.page_index.saturating_mul(size).min(rows.len());
            let end = start.saturating_add(size).min(rows.len());
            rows[start..end].to_vec()
        }
        _ => rows,
    }
}

/// A reactive visible list: combines a collection subscription with a
/// parameter channel and recomputes on any change to either.
pub struct ListView<T: Record + ListColumns> {
    records: watch::Receiver<Arc<Vec<Arc<T>>>>,
    params_tx: watch::Sender<ListParams>,
    params_rx: watch::Receiver<ListParams>,
}

impl<T: Record + ListColumns> ListView<T> {
    pub(crate) fn new(records: watch::Receiver<Arc<Vec<Arc<T>>>>, params: ListParams) -> Self {
        let (params_tx, params_rx) = watch::channel(params);
        Self {
            records,
            params_tx,
            params_rx,
        }
    }

    /// The current parameter set.
    pub fn params(&self) -> ListParams {
        self.params_rx.borrow().clone()
    }

    /// Replace the whole parameter set.
    pub fn set_params(&self, params: ListParams) {
        self.params_tx.send_modify(|p| *p = params);
    }

    pub fn set_filter(&self, filter: impl Into<String>) {
        let filter = filter.into();
        self.params_tx.send_modify(|p| p.filter = filter);
    }

    pub fn set_sort(&self, column: impl Into<String>, direction: SortDirection) {
        let sort = SortSpec {
            column: column.into(),
            direction,
        };
        self.params_tx.send_modify(|p| p.sort = Some(sort));
    }

    pub fn set_page(&self, page_index: usize, page_size: Option<usize>) {
        self.params_tx.send_modify(|p| {
            p.page_index = page_index;
            p.page_size = page_size;
        });
    }

    /// Compute the visible list from the latest collection snapshot
    /// and parameters.
    pub fn current(&self) -> Vec<Arc<T>> {
        visible(&self.records.borrow(), &self.params_rx.borrow())
    }

    /// Wait for the collection or the parameters to change, then
    /// recompute. Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Vec<Arc<T>>> {
        tokio::select! {
            res = self.records.changed() => res.ok()?,
            res = self.params_rx.changed() => res.ok()?,
        }
        let snapshot = self.records.borrow_and_update().clone();
        let params = self.params_rx.borrow_and_update().clone();
        Some(visible(&snapshot, &params))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Catalog, Team};
    use uuid::Uuid;

    fn team(n: u128, name: &str, short_name: &str) -> Arc<Team> {
        Arc::new(Team {
            id: Uuid::from_u128(n),
            name: name.into(),
            short_name: short_name.into(),
            email: None,
        })
    }

    fn catalog(n: u128, name: &str) -> Arc<Catalog> {
        Arc::new(Catalog {
            id: Uuid::from_u128(n),
            name: name.into(),
            description: None,
            inject_type_id: Uuid::nil(),
            is_public: false,
            created_by: None,
            date_created: None,
        })
    }

    fn names(rows: &[Arc<Team>]) -> Vec<&str> {
        rows.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let records = vec![catalog(1, "Catalog One"), catalog(2, "Other")];
        let params = ListParams::filtered("cat");

        let rows = visible(&records, &params);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Catalog One");
    }

    #[test]
    fn default_sort_applies_when_unspecified() {
        let records = vec![team(1, "Bravo", "b"), team(2, "Alpha", "a")];
        let rows = visible(&records, &ListParams::default());
        assert_eq!(names(&rows), vec!["Alpha", "Bravo"]);
    }

    #[test]
    fn descending_reverses_the_comparator() {
        let records = vec![team(1, "Bravo", "b"), team(2, "Alpha", "a")];
        let params = ListParams {
            sort: Some(SortSpec::descending("name")),
            ..ListParams::default()
        };
        let rows = visible(&records, &params);
        assert_eq!(names(&rows), vec!["Bravo", "Alpha"]);
    }

    #[test]
    fn unknown_sort_column_preserves_snapshot_order() {
        let records = vec![team(1, "Bravo", "b"), team(2, "Alpha", "a")];
        let params = ListParams {
            sort: Some(SortSpec::ascending("nonexistent")),
            ..ListParams::default()
        };
        let rows = visible(&records, &params);
        assert_eq!(names(&rows), vec!["Bravo", "Alpha"]);
    }

    #[test]
    fn ties_keep_snapshot_order() {
        let records = vec![
            team(1, "Same", "z"),
            team(2, "Same", "y"),
            team(3, "Same", "x"),
        ];
        let params = ListParams {
            sort: Some(SortSpec::ascending("name")),
            ..ListParams::default()
        };
        let rows = visible(&records, &params);
        let shorts: Vec<&str> = rows.iter().map(|t| t.short_name.as_str()).collect();
        assert_eq!(shorts, vec!["z", "y", "x"]);
    }

    #[test]
    fn visible_is_deterministic() {
        let records = vec![
            team(1, "Delta", "d"),
            team(2, "Alpha", "a"),
            team(3, "Charlie", "c"),
        ];
        let params = ListParams {
            filter: "a".into(),
            sort: Some(SortSpec::ascending("name")),
            page_index: 0,
            page_size: Some(2),
        };

        let first = visible(&records, &params);
        let second = visible(&records, &params);
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn pagination_slices_index_times_size() {
        let records: Vec<Arc<Team>> = (0u128..5)
            .map(|i| team(u128::from(i) + 1, &format!("t{i}"), "s"))
            .collect();
        let params = ListParams {
            page_index: 1,
            page_size: Some(2),
            ..ListParams::default()
        };
        let rows = visible(&records, &params);
        assert_eq!(names(&rows), vec!["t2", "t3"]);
    }

    #[test]
    fn pagination_clamps_to_bounds() {
        let records = vec![team(1, "a", "a"), team(2, "b", "b"), team(3, "c", "c")];

        // Partial final page.
        let params = ListParams {
            page_index: 1,
            page_size: Some(2),
            ..ListParams::default()
        };
        assert_eq!(visible(&records, &params).len(), 1);

        // Page entirely past the end.
        let params = ListParams {
            page_index: 7,
            page_size: Some(2),
            ..ListParams::default()
        };
        assert!(visible(&records, &params).is_empty());
    }

    #[test]
    fn params_round_trip_through_url() {
        let params = ListParams {
            filter: "blue cell".into(),
            sort: Some(SortSpec::descending("name")),
            page_index: 2,
            page_size: Some(25),
        };

        let mut url = Url::parse("https://msel.example.com/teams").unwrap();
        params.apply_to_url(&mut url);
        assert_eq!(
            url.query(),
            Some("filter=blue+cell&sort=name&dir=desc&page=2&size=25")
        );

        assert_eq!(ListParams::from_url(&url), params);
    }

    #[test]
    fn default_params_produce_no_query() {
        let mut url = Url::parse("https://msel.example.com/teams?stale=1").unwrap();
        ListParams::default().apply_to_url(&mut url);
        assert_eq!(url.query(), None);
    }

    #[tokio::test]
    async fn list_view_recomputes_on_collection_change() {
        let store = crate::store::EntityStore::<Team>::new();
        store.set(vec![
            Team {
                id: Uuid::from_u128(1),
                name: "Bravo".into(),
                short_name: "b".into(),
                email: None,
            },
        ]);

        let mut view = ListView::new(store.subscribe(), ListParams::default());
        assert_eq!(names(&view.current()), vec!["Bravo"]);

        store.add(Team {
            id: Uuid::from_u128(2),
            name: "Alpha".into(),
            short_name: "a".into(),
            email: None,
        });

        let rows = view.changed().await.unwrap();
        assert_eq!(names(&rows), vec!["Alpha", "Bravo"]);
    }

    #[tokio::test]
    async fn list_view_recomputes_on_params_change() {
        let store = crate::store::EntityStore::<Team>::new();
        store.set(vec![
            Team {
                id: Uuid::from_u128(1),
                name: "Blue Cell".into(),
                short_name: "blue".into(),
                email: None,
            },
            Team {
                id: Uuid::from_u128(2),
                name: "Red Cell".into(),
                short_name: "red".into(),
                email: None,
            },
        ]);

        let mut view = ListView::new(store.subscribe(), ListParams::default());
        view.set_filter("red");

        let rows = view.changed().await.unwrap();
        assert_eq!(names(&rows), vec!["Red Cell"]);
    }
}

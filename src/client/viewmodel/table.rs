use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Client-side paging and column sorting for a fixed-page-size table.
/// `K` names the sortable columns; no selection means the caller's own
/// default order is kept.
#[derive(Debug, Clone)]
pub struct TableState<K> {
    pub sort: Option<(K, SortOrder)>,
    page: usize,
    page_size: usize,
}

impl<K> Default for TableState<K> {
    fn default() -> Self {
        Self {
            sort: None,
            page: 0,
            page_size: 10,
        }
    }
}

impl<K: Copy + PartialEq> TableState<K> {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Column selector: first click sorts ascending, clicking the active
    /// column again flips the order. Sorting returns to the first page.
    pub fn toggle_sort(&mut self, key: K) {
        self.sort = match self.sort {
            Some((active, order)) if active == key => Some((key, order.flip())),
            _ => Some((key, SortOrder::Asc)),
        };
        self.page = 0;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, rows: usize) -> usize {
        (rows + self.page_size - 1) / self.page_size
    }

    /// Current page, clamped against the row count.
    pub fn page(&self, rows: usize) -> usize {
        let pages = self.page_count(rows);
        if pages == 0 {
            0
        } else {
            self.page.min(pages - 1)
        }
    }

    pub fn next_page(&mut self, rows: usize) {
        let pages = self.page_count(rows);
        if pages > 0 && self.page(rows) + 1 < pages {
            self.page = self.page(rows) + 1;
        }
    }

    pub fn prev_page(&mut self, rows: usize) {
        self.page = self.page(rows).saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.sort = None;
        self.page = 0;
    }

    /// Applies the active sort (stable) and returns the rows of the current
    /// page. `cmp` gives the ascending ordering for a column.
    pub fn visible<'a, T>(
        &self,
        rows: &'a [T],
        cmp: impl Fn(&T, &T, K) -> Ordering,
    ) -> Vec<&'a T> {
        let mut ordered: Vec<&T> = rows.iter().collect();
        if let Some((key, order)) = self.sort {
            ordered.sort_by(|a, b| {
                let o = cmp(a, b, key);
                match order {
                    SortOrder::Asc => o,
                    SortOrder::Desc => o.reverse(),
                }
            });
        }
        let page = self.page(rows.len());
        ordered
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect()
    }
}

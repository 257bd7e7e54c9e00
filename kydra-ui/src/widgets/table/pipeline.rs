//! Filter, sort and paginate. Pure functions of the inputs, recomputed on
//! every build.

use std::ops::Range;

use super::column::Column;
use super::options::TableOptions;
use super::state::{SortDirection, SortState, TableState};
use crate::model::{Record, RecordId};

/// Records whose filterable columns contain `term`, case-insensitively.
/// An empty term keeps everything.
pub fn filter_records<'a, R: Record>(
    records: &'a [R],
    columns: &[Column<R>],
    term: &str,
) -> Vec<&'a R> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            columns
                .iter()
                .filter(|column| column.filter)
                .any(|column| record.field(&column.accessor).contains_ignore_case(&needle))
        })
        .collect()
}

/// Stable sort by the raw value of `sort.key`.
pub fn sort_records<R: Record>(rows: &mut Vec<&R>, sort: &SortState) {
    let mut keyed: Vec<_> = rows
        .drain(..)
        .map(|record| (record.field(&sort.key), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.native_cmp(b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows.extend(keyed.into_iter().map(|(_, record)| record));
}

/// `max(1, ceil(len / page_size))`.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Index range of 1-based `page`, clipped to `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The derived view a table renders.
#[derive(Debug)]
pub struct TableView<'a, R> {
    /// Filtered and sorted records, across all pages.
    pub rows: Vec<&'a R>,
    /// Effective page, clamped to `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    pub range: Range<usize>,
}

impl<'a, R: Record> TableView<'a, R> {
    pub fn compute(
        records: &'a [R],
        columns: &[Column<R>],
        options: &TableOptions,
        state: &TableState,
    ) -> Self {
        let term = if options.filter { state.search.as_str() } else { "" };
        let mut rows = filter_records(records, columns, term);
        if let Some(sort) = &state.sort {
            sort_records(&mut rows, sort);
        }

        let (page, total_pages, range) = if options.pagination {
            let total = page_count(rows.len(), state.page_size);
            let page = state.current_page.clamp(1, total);
            (page, total, page_range(rows.len(), page, state.page_size))
        } else {
            (1, 1, 0..rows.len())
        };

        log::trace!(
            "table view: {} records, {} matched, page {page}/{total_pages}",
            records.len(),
            rows.len()
        );

        Self {
            rows,
            page,
            total_pages,
            range,
        }
    }

    /// Records on the current page.
    pub fn visible(&self) -> &[&'a R] {
        &self.rows[self.range.clone()]
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible().iter().map(|record| record.id()).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

//! Page break calculation.
//!
//! Pagination walks the data rows in order, accumulating estimated line
//! counts until the page capacity is exhausted. Capacity is the page's row
//! budget minus the rows reserved for column headers, footnotes, sources,
//! and subline bands. Group boundaries force additional breaks when the
//! body requests one page per group.

pub mod strategies;

pub use strategies::{PageContext, PaginationInput, PaginationStrategy, strategy_for};

use crate::attributes::row_lines;
use crate::frame::DataFrame;
use crate::grouping::group_tuple;

/// Estimated rendered line count of every data row.
pub fn content_rows(
    df: &DataFrame,
    col_widths: &[f64],
    attrs: &crate::attributes::TableAttributes,
) -> Vec<usize> {
    (0..df.nrows())
        .map(|row| row_lines(attrs, df, row, col_widths))
        .collect()
}

/// Compute inclusive `(start, end)` row intervals, one per page.
///
/// `break_by` columns force a page break at every group change when
/// `force_breaks` is set. A row taller than the capacity still gets its own
/// page; the overflow is accepted.
pub fn find_page_breaks(
    display: &DataFrame,
    source: &DataFrame,
    col_widths: &[f64],
    attrs: &crate::attributes::TableAttributes,
    break_by: &[String],
    force_breaks: bool,
    nrow: usize,
    additional_rows: usize,
) -> Vec<(usize, usize)> {
    if display.is_empty() {
        return Vec::new();
    }

    let capacity = nrow.saturating_sub(additional_rows).max(1);
    let row_heights = content_rows(display, col_widths, attrs);

    let mut pages = Vec::new();
    let mut page_start = 0usize;
    let mut used_lines = 0usize;

    for (row, &height) in row_heights.iter().enumerate() {
        if used_lines + height > capacity {
            if page_start < row {
                pages.push((page_start, row - 1));
            }
            page_start = row;
            used_lines = height;
        } else {
            used_lines += height;
        }

        if force_breaks && !break_by.is_empty() && row + 1 < source.nrows() {
            let current = group_tuple(source, row, break_by);
            let next = group_tuple(source, row + 1, break_by);
            if current != next {
                pages.push((page_start, row));
                page_start = row + 1;
                used_lines = 0;
            }
        }
    }

    if page_start < display.nrows() {
        pages.push((page_start, display.nrows() - 1));
    }
    pages
}

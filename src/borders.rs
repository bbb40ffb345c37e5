//! Per-page border resolution.
//!
//! Border attribution follows a deterministic override lattice:
//!
//! - `page.border_first` marks the document's absolute first row (drawn on
//!   the first column-header row when headers are present, else on the
//!   first data row);
//! - `page.border_last` marks the absolute last row, delegated to the
//!   footnote or source bottom edge when one renders as a table on the
//!   last page;
//! - `body.border_first` / `body.border_last` frame every page in between;
//! - `body.border_top` / `body.border_bottom` supply the interior rules.
//!
//! The resolver is a pure function: it never mutates the descriptors, and
//! `border_first`/`border_last` are stripped from full-matrix broadcast so
//! they only ever land on the rows computed here.

use crate::attributes::TableAttributes;
use crate::broadcast::BroadcastValue;
use crate::pagination::PageContext;
use crate::style::BorderStyle;

/// Inputs for resolving one page's body borders.
#[derive(Debug)]
pub struct PageBorderInput<'a> {
    pub body: &'a TableAttributes,
    pub page_border_first: BorderStyle,
    pub page_border_last: BorderStyle,
    pub ctx: &'a PageContext,
    /// Display columns on the page
    pub cols: usize,
    /// Whether column headers render above the body
    pub has_column_headers: bool,
    /// Footnote renders as a table on this page
    pub footnote_table_shown: bool,
    /// Source renders as a table on this page
    pub source_table_shown: bool,
}

/// Resolved page borders plus any bottom edge delegated to a
/// footnote/source table.
#[derive(Debug)]
pub struct ResolvedBorders {
    pub attrs: TableAttributes,
    /// Style the footnote or source bottom edge must carry on this page
    pub delegated_bottom: Option<BorderStyle>,
}

/// Apply the override lattice to one page.
pub fn resolve_page_borders(input: &PageBorderInput<'_>) -> ResolvedBorders {
    let rows = input.ctx.row_count();
    let cols = input.cols;
    let mut attrs = input.body.clone();

    let first_styles: Vec<BorderStyle> = (0..cols)
        .map(|c| *input.body.border_first.at(0, c))
        .collect();
    let last_styles: Vec<BorderStyle> = (0..cols)
        .map(|c| *input.body.border_last.at(0, c))
        .collect();

    // First/last row styles apply to specific rows only, never broadcast
    attrs.border_first = BroadcastValue::Scalar(BorderStyle::None);
    attrs.border_last = BroadcastValue::Scalar(BorderStyle::None);

    if rows == 0 || cols == 0 {
        return ResolvedBorders {
            attrs,
            delegated_bottom: None,
        };
    }

    // Top edge of the page's first row. The document-absolute border only
    // lands here when no column header row carries it instead.
    let top_styles: Vec<BorderStyle> =
        if input.ctx.is_first_page && !input.has_column_headers {
            vec![input.page_border_first; cols]
        } else {
            first_styles
        };
    attrs
        .border_top
        .update_row(rows, cols, 0, &top_styles);

    // Bottom edge of the page's last row, or of the footnote/source table
    // when one is shown on the page.
    let page_bottom: Vec<BorderStyle> = if input.ctx.is_last_page {
        vec![input.page_border_last; cols]
    } else {
        last_styles
    };

    let delegated_bottom = if input.footnote_table_shown || input.source_table_shown {
        Some(page_bottom[0])
    } else {
        attrs
            .border_bottom
            .update_row(rows, cols, rows - 1, &page_bottom);
        None
    };

    ResolvedBorders {
        attrs,
        delegated_bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> TableAttributes {
        TableAttributes {
            border_first: BroadcastValue::Scalar(BorderStyle::Single),
            border_last: BroadcastValue::Scalar(BorderStyle::Single),
            ..TableAttributes::default()
        }
    }

    fn ctx(number: usize, total: usize, rows: usize) -> PageContext {
        PageContext {
            page_number: number,
            total_pages: total,
            start_row: 0,
            end_row: rows - 1,
            is_first_page: number == 1,
            is_last_page: number == total,
            needs_header: true,
            pageby_header: None,
            subline_header: None,
            group_boundaries: Vec::new(),
        }
    }

    fn resolve(
        ctx: &PageContext,
        has_headers: bool,
        footnote_shown: bool,
    ) -> ResolvedBorders {
        resolve_page_borders(&PageBorderInput {
            body: &body(),
            page_border_first: BorderStyle::Double,
            page_border_last: BorderStyle::Double,
            ctx,
            cols: 2,
            has_column_headers: has_headers,
            footnote_table_shown: footnote_shown,
            source_table_shown: false,
        })
    }

    #[test]
    fn test_first_page_without_headers_gets_document_border() {
        let ctx = ctx(1, 2, 3);
        let resolved = resolve(&ctx, false, false);
        assert_eq!(*resolved.attrs.border_top.at(0, 0), BorderStyle::Double);
        assert_eq!(*resolved.attrs.border_top.at(0, 1), BorderStyle::Double);
        assert_eq!(*resolved.attrs.border_top.at(1, 0), BorderStyle::None);
    }

    #[test]
    fn test_first_page_with_headers_gets_body_border() {
        let ctx = ctx(1, 2, 3);
        let resolved = resolve(&ctx, true, false);
        // Headers carry the document border; body first row keeps its own
        assert_eq!(*resolved.attrs.border_top.at(0, 0), BorderStyle::Single);
    }

    #[test]
    fn test_continuation_page_first_row() {
        let ctx = ctx(2, 3, 4);
        let resolved = resolve(&ctx, true, false);
        assert_eq!(*resolved.attrs.border_top.at(0, 0), BorderStyle::Single);
        // Middle pages close with the body's page border
        assert_eq!(*resolved.attrs.border_bottom.at(3, 0), BorderStyle::Single);
    }

    #[test]
    fn test_last_page_bottom_is_document_border() {
        let ctx = ctx(2, 2, 3);
        let resolved = resolve(&ctx, true, false);
        assert_eq!(*resolved.attrs.border_bottom.at(2, 0), BorderStyle::Double);
        assert_eq!(*resolved.attrs.border_bottom.at(1, 0), BorderStyle::None);
    }

    #[test]
    fn test_footnote_delegation_on_last_page() {
        let ctx = ctx(2, 2, 3);
        let resolved = resolve(&ctx, true, true);
        assert_eq!(resolved.delegated_bottom, Some(BorderStyle::Double));
        // Body keeps its interior bottom untouched
        assert_eq!(*resolved.attrs.border_bottom.at(2, 0), BorderStyle::None);
    }

    #[test]
    fn test_footnote_delegation_on_middle_page() {
        let ctx = ctx(2, 3, 3);
        let resolved = resolve(&ctx, true, true);
        assert_eq!(resolved.delegated_bottom, Some(BorderStyle::Single));
    }

    #[test]
    fn test_border_first_last_stripped() {
        let ctx = ctx(1, 1, 2);
        let resolved = resolve(&ctx, true, false);
        assert_eq!(*resolved.attrs.border_first.at(0, 0), BorderStyle::None);
        assert_eq!(*resolved.attrs.border_last.at(0, 0), BorderStyle::None);
    }
}

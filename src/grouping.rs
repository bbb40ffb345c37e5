//! Grouping pipeline.
//!
//! Three orthogonal transforms prepare a frame for rendering:
//!
//! - `group_by` suppresses repeated values within hierarchical groups, with
//!   the suppressed values restored on the first row of every page so no
//!   page starts without its group context;
//! - `page_by` removes its columns from display and draws them as spanning
//!   group-header rows;
//! - `subline_by` removes its columns and draws them as full-width
//!   subheader bands above the column headers.
//!
//! The divider sentinel `"-----"` never reaches a rendered group header.

use crate::attributes::TableAttributes;
use crate::frame::DataFrame;

/// Placeholder value dropped from rendered group headers.
pub const DIVIDER_SENTINEL: &str = "-----";

/// Apply hierarchical duplicate suppression to the named columns.
///
/// A row shows column `k`'s value iff it is the first row or any of the
/// group columns up to and including `k` changed from the previous row.
pub fn suppress_group_values(df: &DataFrame, group_by: &[String]) -> DataFrame {
    if group_by.is_empty() || df.is_empty() {
        return df.clone();
    }

    let mut out = df.clone();
    let cols: Vec<usize> = group_by
        .iter()
        .filter_map(|name| df.column_index(name))
        .collect();

    for row in (1..df.nrows()).rev() {
        for (level, &col) in cols.iter().enumerate() {
            let changed = cols[..=level]
                .iter()
                .any(|&c| df.cell(row, c) != df.cell(row - 1, c));
            if !changed {
                out.set_cell(row, col, "");
            }
        }
    }
    out
}

/// Restore suppressed group values on the first row of each page.
pub fn restore_page_context(
    suppressed: &mut DataFrame,
    original: &DataFrame,
    group_by: &[String],
    page_start_rows: &[usize],
) {
    for &start in page_start_rows {
        if start >= original.nrows() {
            continue;
        }
        for name in group_by {
            if let Some(col) = original.column_index(name) {
                let value = original.cell(start, col).to_string();
                suppressed.set_cell(start, col, value);
            }
        }
    }
}

/// Group tuple of a row over the given columns.
pub fn group_tuple(df: &DataFrame, row: usize, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .filter_map(|name| df.cell_by_name(row, name))
        .map(str::to_string)
        .collect()
}

/// Comma-joined header text for a group row, dropping divider sentinels.
pub fn group_header_text(df: &DataFrame, row: usize, columns: &[String]) -> String {
    group_tuple(df, row, columns)
        .into_iter()
        .filter(|value| value != DIVIDER_SENTINEL && !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// An intra-page group change.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBoundary {
    /// Row offset within the page where the new group starts
    pub page_relative_row: usize,
    /// Header text of the new group
    pub text: String,
}

/// Detect group changes inside a page's `[start, end]` row range.
pub fn group_boundaries(
    df: &DataFrame,
    columns: &[String],
    start: usize,
    end: usize,
) -> Vec<GroupBoundary> {
    let mut boundaries = Vec::new();
    for row in start..end.min(df.nrows().saturating_sub(1)) {
        let current = group_tuple(df, row, columns);
        let next = group_tuple(df, row + 1, columns);
        if current != next {
            boundaries.push(GroupBoundary {
                page_relative_row: row + 1 - start,
                text: group_header_text(df, row + 1, columns),
            });
        }
    }
    boundaries
}

/// Re-slice relative widths after grouping columns were removed.
///
/// Widths sized for the original column count drop the entries of removed
/// columns; widths already sized for the rendered count pass through;
/// anything else falls back to equal widths.
pub fn resliced_widths(
    widths: Option<&Vec<f64>>,
    all_columns: &[&str],
    hidden: &[String],
    rendered_count: usize,
) -> Option<Vec<f64>> {
    let widths = widths?;
    if widths.len() == rendered_count {
        return Some(widths.clone());
    }
    if widths.len() == all_columns.len() {
        return Some(
            all_columns
                .iter()
                .zip(widths)
                .filter(|(name, _)| !hidden.iter().any(|h| h.as_str() == **name))
                .map(|(_, w)| *w)
                .collect(),
        );
    }
    None
}

/// Warn when subline groups mix display formatting across their rows.
///
/// The band renders once per group, so per-row formatting differences
/// inside a group cannot be honored; flag them without aborting.
pub fn warn_inconsistent_subline_formatting(
    df: &DataFrame,
    subline_by: &[String],
    attrs: &TableAttributes,
) {
    if subline_by.is_empty() || df.is_empty() {
        return;
    }

    let mut group_start = 0usize;
    for row in 1..=df.nrows() {
        let boundary = row == df.nrows()
            || group_tuple(df, row, subline_by) != group_tuple(df, row - 1, subline_by);
        if !boundary {
            continue;
        }
        let reference_format = *attrs.text.format.at(group_start, 0);
        let reference_just = *attrs.text.justification.at(group_start, 0);
        for inner in group_start..row {
            if *attrs.text.format.at(inner, 0) != reference_format
                || *attrs.text.justification.at(inner, 0) != reference_just
            {
                log::warn!(
                    "subline group '{}' mixes text formatting across rows; the subheader band uses the group's first row",
                    group_header_text(df, group_start, subline_by)
                );
                break;
            }
        }
        group_start = row;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::from_columns(vec![
            ("USUBJID", vec!["A", "A", "B", "B"]),
            ("AE", vec!["x", "y", "z", "w"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_column_suppression() {
        let suppressed = suppress_group_values(&frame(), &["USUBJID".to_string()]);
        assert_eq!(suppressed.cell(0, 0), "A");
        assert_eq!(suppressed.cell(1, 0), "");
        assert_eq!(suppressed.cell(2, 0), "B");
        assert_eq!(suppressed.cell(3, 0), "");
        // Non-group columns untouched
        assert_eq!(suppressed.cell(1, 1), "y");
    }

    #[test]
    fn test_hierarchical_suppression() {
        let df = DataFrame::from_columns(vec![
            ("Site", vec!["01", "01", "01", "02"]),
            ("Subject", vec!["S1", "S1", "S2", "S1"]),
            ("Value", vec!["1", "2", "3", "4"]),
        ])
        .unwrap();
        let groups = ["Site".to_string(), "Subject".to_string()];
        let suppressed = suppress_group_values(&df, &groups);

        assert_eq!(suppressed.cell(0, 0), "01");
        assert_eq!(suppressed.cell(1, 0), "");
        assert_eq!(suppressed.cell(1, 1), "");
        // Inner level changes while outer stays suppressed
        assert_eq!(suppressed.cell(2, 0), "");
        assert_eq!(suppressed.cell(2, 1), "S2");
        // Outer change re-shows both levels
        assert_eq!(suppressed.cell(3, 0), "02");
        assert_eq!(suppressed.cell(3, 1), "S1");
    }

    #[test]
    fn test_restore_page_context() {
        let df = frame();
        let groups = ["USUBJID".to_string()];
        let mut suppressed = suppress_group_values(&df, &groups);
        restore_page_context(&mut suppressed, &df, &groups, &[1, 3]);

        assert_eq!(suppressed.cell(1, 0), "A");
        assert_eq!(suppressed.cell(3, 0), "B");
        assert_eq!(suppressed.cell(0, 0), "A");
    }

    #[test]
    fn test_group_header_text_filters_sentinel() {
        let df = DataFrame::from_columns(vec![
            ("A", vec!["-----"]),
            ("B", vec!["Week 4"]),
        ])
        .unwrap();
        let cols = ["A".to_string(), "B".to_string()];
        assert_eq!(group_header_text(&df, 0, &cols), "Week 4");
    }

    #[test]
    fn test_group_boundaries() {
        let df = frame();
        let cols = ["USUBJID".to_string()];
        let bounds = group_boundaries(&df, &cols, 0, 3);
        assert_eq!(bounds.len(), 1);
        assert_eq!(bounds[0].page_relative_row, 2);
        assert_eq!(bounds[0].text, "B");

        // No boundary inside a single group
        assert!(group_boundaries(&df, &cols, 0, 1).is_empty());
    }

    #[test]
    fn test_resliced_widths_full_length() {
        let widths = vec![2.0, 1.0, 1.0];
        let out = resliced_widths(
            Some(&widths),
            &["Subject", "ID", "Value"],
            &["Subject".to_string()],
            2,
        );
        assert_eq!(out, Some(vec![1.0, 1.0]));
    }

    #[test]
    fn test_resliced_widths_rendered_length() {
        let widths = vec![3.0, 1.0];
        let out = resliced_widths(
            Some(&widths),
            &["Subject", "ID", "Value"],
            &["Subject".to_string()],
            2,
        );
        assert_eq!(out, Some(vec![3.0, 1.0]));
    }

    #[test]
    fn test_resliced_widths_mismatch() {
        let widths = vec![1.0, 1.0, 1.0, 1.0];
        let out = resliced_widths(
            Some(&widths),
            &["A", "B", "C"],
            &["A".to_string()],
            2,
        );
        assert_eq!(out, None);
    }
}

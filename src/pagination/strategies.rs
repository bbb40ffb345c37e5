//! Pagination strategies.
//!
//! A strategy turns the frame and body descriptor into an ordered list of
//! [`PageContext`]s. Dispatch is data-driven: `subline_by` selects the
//! subline strategy, `page_by` the grouping strategy, anything else the
//! default. Strategies are registered once in a process-wide table and
//! selected by name, with no inheritance between them.

use crate::attributes::TableAttributes;
use crate::components::RtfBody;
use crate::frame::DataFrame;
use crate::grouping::{GroupBoundary, group_boundaries, group_header_text};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::find_page_breaks;

/// Everything a strategy needs to slice the document into pages.
#[derive(Debug)]
pub struct PaginationInput<'a> {
    /// Frame as displayed (grouping columns removed)
    pub display: &'a DataFrame,
    /// Source frame with grouping columns intact, same row count
    pub source: &'a DataFrame,
    pub body: &'a RtfBody,
    /// Attributes governing the displayed frame
    pub attrs: &'a TableAttributes,
    /// Cumulative display column widths in inches
    pub col_widths: &'a [f64],
    /// Page row budget
    pub nrow: usize,
    /// Rows reserved for headers, footnotes, sources, and subline bands
    pub additional_rows: usize,
}

/// One page of the pagination plan.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// 1-based page number
    pub page_number: usize,
    pub total_pages: usize,
    /// First data row on the page (inclusive)
    pub start_row: usize,
    /// Last data row on the page (inclusive)
    pub end_row: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    /// Whether column headers render on this page
    pub needs_header: bool,
    /// Top-of-page spanning row text from `page_by`
    pub pageby_header: Option<String>,
    /// Subheader band text from `subline_by`
    pub subline_header: Option<String>,
    /// Intra-page group changes needing mid-page spanning rows
    pub group_boundaries: Vec<GroupBoundary>,
}

impl PageContext {
    /// Number of data rows on the page.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.end_row + 1 - self.start_row
    }
}

/// A pagination strategy behind the registry.
pub trait PaginationStrategy: Send + Sync {
    fn paginate(&self, input: &PaginationInput<'_>) -> Vec<PageContext>;
}

fn build_contexts(
    breaks: &[(usize, usize)],
    body: &RtfBody,
) -> Vec<PageContext> {
    let total = breaks.len();
    breaks
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| PageContext {
            page_number: i + 1,
            total_pages: total,
            start_row: start,
            end_row: end,
            is_first_page: i == 0,
            is_last_page: i + 1 == total,
            needs_header: body.pageby_header || i == 0,
            pageby_header: None,
            subline_header: None,
            group_boundaries: Vec::new(),
        })
        .collect()
}

/// Plain capacity-driven pagination with no forced breaks.
struct DefaultStrategy;

impl PaginationStrategy for DefaultStrategy {
    fn paginate(&self, input: &PaginationInput<'_>) -> Vec<PageContext> {
        let breaks = find_page_breaks(
            input.display,
            input.source,
            input.col_widths,
            input.attrs,
            &[],
            false,
            input.nrow,
            input.additional_rows,
        );
        build_contexts(&breaks, input.body)
    }
}

/// Grouped pagination: spanning rows per group, optional forced breaks.
struct PageByStrategy;

impl PaginationStrategy for PageByStrategy {
    fn paginate(&self, input: &PaginationInput<'_>) -> Vec<PageContext> {
        let page_by = &input.body.page_by;
        let breaks = find_page_breaks(
            input.display,
            input.source,
            input.col_widths,
            input.attrs,
            page_by,
            input.body.new_page,
            input.nrow,
            input.additional_rows,
        );
        let mut pages = build_contexts(&breaks, input.body);
        for page in &mut pages {
            let header = group_header_text(input.source, page.start_row, page_by);
            if !header.is_empty() {
                page.pageby_header = Some(header);
            }
            page.group_boundaries =
                group_boundaries(input.source, page_by, page.start_row, page.end_row);
        }
        pages
    }
}

/// Subline pagination: forced breaks along the subline columns plus a
/// subheader band on every page.
struct SublineStrategy;

impl PaginationStrategy for SublineStrategy {
    fn paginate(&self, input: &PaginationInput<'_>) -> Vec<PageContext> {
        let subline_by = &input.body.subline_by;
        let breaks = find_page_breaks(
            input.display,
            input.source,
            input.col_widths,
            input.attrs,
            subline_by,
            true,
            input.nrow,
            input.additional_rows,
        );
        let mut pages = build_contexts(&breaks, input.body);
        for page in &mut pages {
            let header = group_header_text(input.source, page.start_row, subline_by);
            if !header.is_empty() {
                page.subline_header = Some(header);
            }
        }
        pages
    }
}

type StrategyFactory = fn() -> Box<dyn PaginationStrategy>;

static REGISTRY: Lazy<BTreeMap<&'static str, StrategyFactory>> = Lazy::new(|| {
    let mut registry: BTreeMap<&'static str, StrategyFactory> = BTreeMap::new();
    registry.insert("default", || Box::new(DefaultStrategy));
    registry.insert("page_by", || Box::new(PageByStrategy));
    registry.insert("subline", || Box::new(SublineStrategy));
    registry
});

/// Name of the strategy the body descriptor selects.
pub fn strategy_name(body: &RtfBody) -> &'static str {
    if !body.subline_by.is_empty() {
        "subline"
    } else if !body.page_by.is_empty() {
        "page_by"
    } else {
        "default"
    }
}

/// Instantiate the registered strategy for a body descriptor.
pub fn strategy_for(body: &RtfBody) -> Box<dyn PaginationStrategy> {
    REGISTRY[strategy_name(body)]()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::col_widths;

    fn subjects() -> DataFrame {
        DataFrame::from_columns(vec![
            ("Subject", vec!["S1", "S1", "S2", "S2"]),
            ("ID", vec!["001", "002", "003", "004"]),
        ])
        .unwrap()
    }

    fn run(body: &RtfBody, df: &DataFrame) -> Vec<PageContext> {
        let display = df.drop_columns(&body.hidden_columns());
        let widths = col_widths(&[1.0; 1], 6.25);
        let input = PaginationInput {
            display: &display,
            source: df,
            body,
            attrs: &body.attributes,
            col_widths: &widths,
            nrow: 40,
            additional_rows: 1,
        };
        strategy_for(body).paginate(&input)
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(strategy_name(&RtfBody::new()), "default");
        assert_eq!(
            strategy_name(&RtfBody::new().with_page_by(["Subject"])),
            "page_by"
        );
        assert_eq!(
            strategy_name(
                &RtfBody::new()
                    .with_page_by(["Subject"])
                    .with_subline_by(["Site"])
            ),
            "subline"
        );
    }

    #[test]
    fn test_default_single_page() {
        let body = RtfBody::new();
        let df = subjects();
        let pages = run(&body, &df);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_first_page && pages[0].is_last_page);
        assert_eq!((pages[0].start_row, pages[0].end_row), (0, 3));
        assert!(pages[0].pageby_header.is_none());
    }

    #[test]
    fn test_page_by_forced_breaks() {
        let body = RtfBody::new().with_page_by(["Subject"]).with_new_page(true);
        let df = subjects();
        let pages = run(&body, &df);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].pageby_header.as_deref(), Some("S1"));
        assert_eq!(pages[1].pageby_header.as_deref(), Some("S2"));
        assert!(pages[0].group_boundaries.is_empty());
        assert!(pages[1].is_last_page);
    }

    #[test]
    fn test_page_by_midpage_boundaries() {
        let body = RtfBody::new().with_page_by(["Subject"]);
        let df = subjects();
        let pages = run(&body, &df);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].pageby_header.as_deref(), Some("S1"));
        assert_eq!(pages[0].group_boundaries.len(), 1);
        assert_eq!(pages[0].group_boundaries[0].page_relative_row, 2);
        assert_eq!(pages[0].group_boundaries[0].text, "S2");
    }

    #[test]
    fn test_subline_strategy() {
        let body = RtfBody::new().with_subline_by(["Subject"]);
        let df = subjects();
        let pages = run(&body, &df);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].subline_header.as_deref(), Some("S1"));
        assert_eq!(pages[1].subline_header.as_deref(), Some("S2"));
        assert!(pages[0].pageby_header.is_none());
    }

    #[test]
    fn test_needs_header_repeats_by_default() {
        let body = RtfBody::new().with_page_by(["Subject"]).with_new_page(true);
        let pages = run(&body, &subjects());
        assert!(pages.iter().all(|p| p.needs_header));

        let body = body.with_pageby_header(false);
        let pages = run(&body, &subjects());
        assert!(pages[0].needs_header);
        assert!(!pages[1].needs_header);
    }
}

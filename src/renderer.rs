//! Page renderer.
//!
//! Materializes one page context into its RTF command stream, in fixed
//! order: title, subline, subline band, figure-before, column headers,
//! spanning rows, body rows (with mid-page group headers interleaved),
//! footnote, source, figure-after. Non-first pages are preceded by the
//! page-break token with re-issued geometry.

use crate::attributes::TableAttributes;
use crate::broadcast::BroadcastValue;
use crate::common::unit::{col_widths, inch_to_twip};
use crate::components::{ColumnHeader, RtfBody, RtfPage, TableTextComponent, TextComponent};
use crate::components::{FigurePosition, IndentReference, RtfFigure};
use crate::frame::DataFrame;
use crate::pagination::PageContext;
use crate::row::{Cell, Row, TextContent, encode_line_block, encode_paragraph_block};
use crate::style::{BorderStyle, ColorTable, Justification, VerticalJustification};

/// Twips between the page margin and the table band edge.
pub fn table_space_twips(page: &RtfPage) -> i32 {
    inch_to_twip(page.width() - page.col_width()) / 2
}

/// Encode a text component in line mode (lines joined by `\line`).
pub fn encode_text_component(
    component: &TextComponent,
    colors: &ColorTable,
    table_space: i32,
) -> Option<String> {
    let text = component.text.as_ref().filter(|t| !t.is_empty())?;
    let attrs = match component.indent_reference {
        IndentReference::Table => component.attributes.with_added_space(table_space),
        IndentReference::Page => component.attributes.clone(),
    };
    encode_line_block(&attrs.contents(text), colors)
}

/// Encode the page header wrapped in its `{\header}` group.
pub fn encode_page_header(
    component: &TextComponent,
    colors: &ColorTable,
    table_space: i32,
) -> Option<String> {
    encode_text_component(component, colors, table_space)
        .map(|inner| format!("{{\\header{inner}}}"))
}

/// Encode the page footer wrapped in its `{\footer}` group.
pub fn encode_page_footer(
    component: &TextComponent,
    colors: &ColorTable,
    table_space: i32,
) -> Option<String> {
    encode_text_component(component, colors, table_space)
        .map(|inner| format!("{{\\footer{inner}}}"))
}

/// The subheader band drawn above column headers for `subline_by` groups.
pub fn encode_subline_band(text: &str, colors: &ColorTable) -> String {
    let content = TextContent {
        text: text.to_string(),
        justification: Justification::Left,
        hyphenation: true,
        convert: false,
        ..TextContent::default()
    };
    content.as_paragraph(colors)
}

/// Attribute slot a spanning row draws its formatting from.
///
/// `PagebyRow::Column` uses the removed grouping column's slot in the
/// source frame; `PagebyRow::FirstRow` uses the group row's first display
/// column.
pub fn spanning_source_position(
    body: &RtfBody,
    source: &DataFrame,
    row: usize,
) -> (usize, usize) {
    match body.pageby_row {
        crate::components::PagebyRow::Column => {
            let col = body
                .page_by
                .first()
                .and_then(|name| source.column_index(name))
                .unwrap_or(0);
            (row, col)
        }
        crate::components::PagebyRow::FirstRow => (row, 0),
    }
}

/// A spanning group-header row: one cell covering the whole band width.
pub fn encode_spanning_row(
    text: &str,
    band_width: f64,
    body: &RtfBody,
    source_position: (usize, usize),
    colors: &ColorTable,
) -> Vec<String> {
    let (row, col) = source_position;
    let mut content = body.attributes.text.content_at(text, row, col);
    content.justification = Justification::Left;

    let cell = Cell {
        text: content,
        width: band_width,
        border_top: None,
        border_bottom: None,
        border_left: None,
        border_right: None,
        vertical_justification: VerticalJustification::Bottom,
    };
    Row {
        cells: vec![cell],
        justification: *body.attributes.cell_justification.at(row, 0),
        height: *body.attributes.cell_height.at(row, 0),
    }
    .as_rtf(colors)
}

/// Resolve the header texts to render, auto-generating the first row from
/// the frame's column names when the body asks for it.
///
/// Returns (header index, cell texts) pairs so headers without text are
/// skipped without shifting the attribute association.
pub fn header_texts(
    headers: &[ColumnHeader],
    body: &RtfBody,
    display: &DataFrame,
) -> Vec<(usize, Vec<String>)> {
    let mut out = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        match &header.text {
            Some(cells) => out.push((i, cells.clone())),
            None if i == 0 && body.as_colheader && display.ncols() > 0 => {
                out.push((
                    i,
                    display.column_names().iter().map(|s| s.to_string()).collect(),
                ));
            }
            None => {}
        }
    }
    out
}

/// Encode the column header rows.
///
/// `document_border_top` carries the page-level first border onto the
/// first header row of the document's first page.
pub fn encode_column_headers(
    headers: &[ColumnHeader],
    body: &RtfBody,
    display: &DataFrame,
    band_width: f64,
    colors: &ColorTable,
    document_border_top: Option<BorderStyle>,
) -> Vec<String> {
    let texts = header_texts(headers, body, display);
    let mut lines = Vec::new();

    for (position, (header_index, cells)) in texts.iter().enumerate() {
        if cells.is_empty() {
            continue;
        }
        let header = &headers[*header_index];
        let mut attrs = header.attributes.clone();
        if position == 0 {
            if let Some(style) = document_border_top {
                attrs
                    .border_top
                    .update_row(1, cells.len(), 0, &[style]);
            }
        }

        // Auto-generated headers fall back to equal widths when the
        // descriptor's width list was sized for a different column count
        let mut rel = attrs.rel_widths(cells.len());
        if rel.len() != cells.len() {
            rel = vec![1.0; cells.len()];
        }
        let widths = col_widths(&rel, band_width);
        let frame = header_frame(cells);
        lines.extend(attrs.encode_table(&frame, &widths, colors));
    }
    lines
}

fn header_frame(cells: &[String]) -> DataFrame {
    DataFrame::from_columns(
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (format!("col_{}", i + 1), vec![cell.clone()]))
            .collect(),
    )
    .unwrap_or_default()
}

/// Encode a footnote or source block.
///
/// Table mode renders the joined text as a single full-band cell;
/// paragraph mode renders each line as its own paragraph.
/// `delegated_bottom` carries the page/body last border onto the table's
/// bottom edge.
pub fn encode_table_text(
    component: &TableTextComponent,
    band_width: f64,
    colors: &ColorTable,
    delegated_bottom: Option<BorderStyle>,
) -> Vec<String> {
    if !component.has_text() {
        return Vec::new();
    }

    if component.as_table {
        let mut attrs = component.attributes.clone();
        if let Some(style) = delegated_bottom {
            attrs.border_bottom = BroadcastValue::Scalar(style);
        }
        let rel = attrs.rel_widths(1);
        let widths = col_widths(&rel, band_width);
        let frame =
            DataFrame::from_columns(vec![("text", vec![component.joined_text()])]).unwrap_or_default();
        attrs.encode_table(&frame, &widths, colors)
    } else {
        let lines = component.text.as_deref().unwrap_or_default();
        encode_paragraph_block(&component.attributes.text.contents(lines), colors)
    }
}

/// Encode the figures of a descriptor, one aligned paragraph each.
pub fn encode_figures(figure: &RtfFigure) -> Vec<String> {
    figure
        .figures
        .iter()
        .enumerate()
        .map(|(i, loaded)| {
            crate::figure::encode_figure(
                loaded,
                figure.width_at(i),
                figure.height_at(i),
                figure.align,
            )
        })
        .collect()
}

/// The page-break token with re-issued geometry and margins.
pub fn page_break(page: &RtfPage) -> String {
    format!(
        "{{\\pard\\fs2\\par}}\\page{{\\pard\\fs2\\par}}\n{}\n{}",
        encode_page_geometry(page),
        encode_page_margins(page)
    )
}

/// `\paperw..\paperh..[\landscape]`.
pub fn encode_page_geometry(page: &RtfPage) -> String {
    let mut buf = itoa::Buffer::new();
    let mut out = String::with_capacity(32);
    out.push_str("\\paperw");
    out.push_str(buf.format(inch_to_twip(page.width())));
    out.push_str("\\paperh");
    out.push_str(buf.format(inch_to_twip(page.height())));
    if page.orientation == crate::components::Orientation::Landscape {
        out.push_str("\\landscape");
    }
    out
}

/// `\margl..\margr..\margt..\margb..\headery..\footery..`.
pub fn encode_page_margins(page: &RtfPage) -> String {
    const CODES: [&str; 6] = [
        "\\margl", "\\margr", "\\margt", "\\margb", "\\headery", "\\footery",
    ];
    let mut buf = itoa::Buffer::new();
    let mut out = String::with_capacity(64);
    for (code, margin) in CODES.iter().zip(page.margin()) {
        out.push_str(code);
        out.push_str(buf.format(inch_to_twip(margin)));
    }
    out
}

/// Everything needed to render one page.
pub struct PageRender<'a> {
    pub page: &'a RtfPage,
    pub body: &'a RtfBody,
    pub ctx: &'a PageContext,
    /// Page slice of the processed (display) frame
    pub data: &'a DataFrame,
    /// Full source frame with grouping columns intact
    pub source_frame: &'a DataFrame,
    /// Body attributes with page borders resolved
    pub attrs: &'a TableAttributes,
    /// Bottom border delegated to the footnote/source table
    pub delegated_bottom: Option<BorderStyle>,
    pub colors: &'a ColorTable,
    /// Cumulative display column widths in inches
    pub col_widths: &'a [f64],
    pub title: Option<&'a TextComponent>,
    pub subline: Option<&'a TextComponent>,
    pub column_headers: &'a [ColumnHeader],
    pub footnote: Option<&'a TableTextComponent>,
    pub source: Option<&'a TableTextComponent>,
    pub figure: Option<&'a RtfFigure>,
    /// Which of footnote/source receives the delegated bottom border
    pub delegate_to_source: bool,
}

/// Render one page into its ordered RTF chunks.
pub fn render_page(input: &PageRender<'_>) -> Vec<String> {
    let mut chunks = Vec::new();
    let ctx = input.ctx;
    let table_space = table_space_twips(input.page);
    let band_width = input.page.col_width();

    if !ctx.is_first_page {
        chunks.push(page_break(input.page));
    }

    // 1. Title
    if let Some(title) = input.title {
        if let Some(encoded) = encode_text_component(title, input.colors, 0) {
            chunks.push(encoded);
            chunks.push("\n".to_string());
        }
    }

    // 2. Subline
    if let Some(subline) = input.subline {
        if let Some(encoded) = encode_text_component(subline, input.colors, table_space) {
            chunks.push(encoded);
        }
    }

    // 3. Subline band from subline_by grouping
    if let Some(text) = &ctx.subline_header {
        chunks.push(encode_subline_band(text, input.colors));
    }

    // 4. Figure before the table
    if let Some(figure) = input.figure {
        if figure.position == FigurePosition::Before && ctx.is_first_page {
            chunks.extend(encode_figures(figure));
        }
    }

    // 5. Column headers
    if ctx.needs_header {
        let document_border = if ctx.is_first_page {
            Some(input.page.border_first)
        } else {
            None
        };
        chunks.extend(encode_column_headers(
            input.column_headers,
            input.body,
            input.data,
            band_width,
            input.colors,
            document_border,
        ));
    }

    // 6. Top-of-page spanning row
    if let Some(text) = &ctx.pageby_header {
        chunks.extend(encode_spanning_row(
            text,
            band_width,
            input.body,
            spanning_source_position(input.body, input.source_frame, ctx.start_row),
            input.colors,
        ));
    }

    // 7. Body rows with mid-page group headers interleaved
    for row in 0..input.data.nrows() {
        for boundary in &ctx.group_boundaries {
            if boundary.page_relative_row == row {
                chunks.extend(encode_spanning_row(
                    &boundary.text,
                    band_width,
                    input.body,
                    spanning_source_position(input.body, input.source_frame, ctx.start_row + row),
                    input.colors,
                ));
            }
        }
        chunks.extend(
            input
                .attrs
                .encode_row(input.data, row, input.col_widths, input.colors),
        );
    }

    // 8. Footnote
    if let Some(footnote) = input.footnote {
        let delegated = if input.delegate_to_source {
            None
        } else {
            input.delegated_bottom
        };
        chunks.extend(encode_table_text(
            footnote,
            band_width,
            input.colors,
            delegated,
        ));
    }

    // 9. Source
    if let Some(source) = input.source {
        let delegated = if input.delegate_to_source {
            input.delegated_bottom
        } else {
            None
        };
        chunks.extend(encode_table_text(source, band_width, input.colors, delegated));
    }

    // 10. Figure after the table
    if let Some(figure) = input.figure {
        if figure.position == FigurePosition::After && ctx.is_last_page {
            chunks.extend(encode_figures(figure));
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_break_token() {
        let page = RtfPage::portrait();
        let token = page_break(&page);
        assert!(token.starts_with("{\\pard\\fs2\\par}\\page{\\pard\\fs2\\par}"));
        assert!(token.contains("\\paperw12240\\paperh15840"));
        assert!(token.contains("\\margl1800"));
    }

    #[test]
    fn test_geometry_landscape() {
        let page = RtfPage::landscape();
        let geometry = encode_page_geometry(&page);
        assert_eq!(geometry, "\\paperw15840\\paperh12240\\landscape");
    }

    #[test]
    fn test_margins_portrait() {
        let page = RtfPage::portrait();
        assert_eq!(
            encode_page_margins(&page),
            "\\margl1800\\margr1440\\margt2520\\margb1800\\headery2520\\footery1449"
        );
    }

    #[test]
    fn test_title_line_mode() {
        let title = TextComponent::title().with_text(["title 1", "title 2"]);
        let out = encode_text_component(&title, &ColorTable::new(), 0).unwrap();
        assert!(out.contains("{\\f0 title 1}\\line\\fs24{\\f0 title 2}"));
        assert!(out.contains("\\qc"));
    }

    #[test]
    fn test_header_group_wrapping() {
        let header = TextComponent::page_header();
        let out = encode_page_header(&header, &ColorTable::new(), 0).unwrap();
        assert!(out.starts_with("{\\header{\\pard"));
        assert!(out.ends_with("}}"));
        assert!(out.contains("\\chpgn "));
    }

    #[test]
    fn test_auto_generated_header_texts() {
        let df = DataFrame::from_columns(vec![
            ("Column1", vec!["a"]),
            ("Column2", vec!["b"]),
        ])
        .unwrap();
        let headers = vec![ColumnHeader::new()];
        let texts = header_texts(&headers, &RtfBody::new(), &df);
        assert_eq!(texts, vec![(0, vec!["Column1".to_string(), "Column2".to_string()])]);

        // Suppressed when as_colheader is off
        let body = RtfBody::new().with_as_colheader(false);
        assert!(header_texts(&headers, &body, &df).is_empty());
    }

    #[test]
    fn test_spanning_row_full_band() {
        let rows = encode_spanning_row("S1", 6.25, &RtfBody::new(), (0, 0), &ColorTable::new());
        let definition = &rows[1];
        assert!(definition.ends_with("\\cellx9000"));
        assert_eq!(rows.iter().filter(|l| l.contains("\\cellx")).count(), 1);
        assert!(rows[2].contains("{\\f0 S1}"));
    }

    #[test]
    fn test_footnote_as_table() {
        let footnote = TableTextComponent::footnote().with_text(["f1", "f2"]);
        let out = encode_table_text(&footnote, 6.25, &ColorTable::new(), Some(BorderStyle::Double));
        let joined = out.join("\n");
        assert!(joined.contains("\\trowd"));
        assert!(joined.contains("f1\\line f2"));
        assert!(joined.contains("\\clbrdrb\\brdrdb"));
        assert!(joined.contains("\\cellx9000"));
    }

    #[test]
    fn test_source_as_paragraph() {
        let source = TableTextComponent::source().with_text(["Source: study xyz"]);
        let out = encode_table_text(&source, 6.25, &ColorTable::new(), None);
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("{\\pard"));
        assert!(!out[0].contains("\\trowd"));
        assert!(out[0].contains("\\qc"));
    }

    #[test]
    fn test_subline_band() {
        let out = encode_subline_band("Site: 01", &ColorTable::new());
        assert!(out.starts_with("{\\pard"));
        assert!(out.contains("\\ql"));
        assert!(out.contains("Site: 01"));
        assert!(out.ends_with("\\par}"));
    }
}

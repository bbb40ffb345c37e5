//! Text and table attribute sets.
//!
//! Every per-line or per-cell attribute is stored as a [`BroadcastValue`]
//! so callers can supply a scalar, a row, or a full matrix; reads broadcast
//! modularly over the component's shape. Component constructors in
//! [`crate::components`] install role-specific defaults on top of these
//! base values.

use crate::broadcast::BroadcastValue;
use crate::common::unit::column_span;
use crate::frame::DataFrame;
use crate::row::{Border, Cell, Row, TextContent};
use crate::style::{BorderStyle, ColorTable, Justification, TextFormat, VerticalJustification};

/// Text attributes shared by paragraphs and table cells.
#[derive(Debug, Clone)]
pub struct TextAttributes {
    /// Font slot (1-10)
    pub font: BroadcastValue<u8>,
    pub format: BroadcastValue<TextFormat>,
    /// Size in points
    pub font_size: BroadcastValue<f64>,
    /// Color name from the fixed palette
    pub color: BroadcastValue<Option<String>>,
    /// Highlight color name
    pub background_color: BroadcastValue<Option<String>>,
    pub justification: BroadcastValue<Justification>,
    /// First line indent in twips
    pub indent_first: BroadcastValue<i32>,
    /// Left indent in twips
    pub indent_left: BroadcastValue<i32>,
    /// Right indent in twips
    pub indent_right: BroadcastValue<i32>,
    /// Line spacing multiplier
    pub space: BroadcastValue<f64>,
    /// Space before paragraph in twips
    pub space_before: BroadcastValue<i32>,
    /// Space after paragraph in twips
    pub space_after: BroadcastValue<i32>,
    pub hyphenation: BroadcastValue<bool>,
    /// Apply LaTeX-to-Unicode conversion
    pub convert: BroadcastValue<bool>,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            font: BroadcastValue::Scalar(1),
            format: BroadcastValue::Scalar(TextFormat::empty()),
            font_size: BroadcastValue::Scalar(9.0),
            color: BroadcastValue::Scalar(None),
            background_color: BroadcastValue::Scalar(None),
            justification: BroadcastValue::Scalar(Justification::Left),
            indent_first: BroadcastValue::Scalar(0),
            indent_left: BroadcastValue::Scalar(0),
            indent_right: BroadcastValue::Scalar(0),
            space: BroadcastValue::Scalar(1.0),
            space_before: BroadcastValue::Scalar(15),
            space_after: BroadcastValue::Scalar(15),
            hyphenation: BroadcastValue::Scalar(true),
            convert: BroadcastValue::Scalar(true),
        }
    }
}

impl TextAttributes {
    /// Resolve one position into a [`TextContent`].
    pub fn content_at(&self, text: &str, row: usize, col: usize) -> TextContent {
        TextContent {
            text: text.to_string(),
            font: *self.font.at(row, col),
            size: *self.font_size.at(row, col),
            format: *self.format.at(row, col),
            color: self.color.at(row, col).clone(),
            background_color: self.background_color.at(row, col).clone(),
            justification: *self.justification.at(row, col),
            indent_first: *self.indent_first.at(row, col),
            indent_left: *self.indent_left.at(row, col),
            indent_right: *self.indent_right.at(row, col),
            space: *self.space.at(row, col),
            space_before: *self.space_before.at(row, col),
            space_after: *self.space_after.at(row, col),
            hyphenation: *self.hyphenation.at(row, col),
            convert: *self.convert.at(row, col),
        }
    }

    /// Resolve a list of text lines, one content per line.
    pub fn contents(&self, lines: &[String]) -> Vec<TextContent> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| self.content_at(line, i, 0))
            .collect()
    }

    /// Return a copy with `delta` twips added to space before and after.
    ///
    /// Used for table-relative indentation of sublines and page
    /// headers/footers; the descriptor itself is never mutated.
    pub fn with_added_space(&self, delta: i32) -> Self {
        let mut out = self.clone();
        let (rows, cols) = out.space_before.shape();
        let before = out.space_before.materialize(rows, cols);
        out.space_before = BroadcastValue::Matrix(
            before
                .into_iter()
                .map(|row| row.into_iter().map(|v| v + delta).collect())
                .collect(),
        );
        let (rows, cols) = out.space_after.shape();
        let after = out.space_after.materialize(rows, cols);
        out.space_after = BroadcastValue::Matrix(
            after
                .into_iter()
                .map(|row| row.into_iter().map(|v| v + delta).collect())
                .collect(),
        );
        out
    }
}

/// Table attributes: text attributes plus per-cell borders and geometry.
#[derive(Debug, Clone)]
pub struct TableAttributes {
    pub text: TextAttributes,
    /// Relative column widths; `None` means equal widths
    pub col_rel_width: Option<Vec<f64>>,
    pub border_left: BroadcastValue<BorderStyle>,
    pub border_right: BroadcastValue<BorderStyle>,
    pub border_top: BroadcastValue<BorderStyle>,
    pub border_bottom: BroadcastValue<BorderStyle>,
    /// First row border (applied per page by the border resolver)
    pub border_first: BroadcastValue<BorderStyle>,
    /// Last row border (applied per page by the border resolver)
    pub border_last: BroadcastValue<BorderStyle>,
    pub border_color_left: BroadcastValue<Option<String>>,
    pub border_color_right: BroadcastValue<Option<String>>,
    pub border_color_top: BroadcastValue<Option<String>>,
    pub border_color_bottom: BroadcastValue<Option<String>>,
    pub border_color_first: BroadcastValue<Option<String>>,
    pub border_color_last: BroadcastValue<Option<String>>,
    /// Border width in twips
    pub border_width: BroadcastValue<i32>,
    /// Cell height in inches
    pub cell_height: BroadcastValue<f64>,
    /// Row placement within the page band
    pub cell_justification: BroadcastValue<Justification>,
    pub cell_vertical_justification: BroadcastValue<VerticalJustification>,
    /// Minimum rendered lines per cell
    pub cell_nrow: BroadcastValue<usize>,
}

impl Default for TableAttributes {
    fn default() -> Self {
        Self {
            text: TextAttributes::default(),
            col_rel_width: None,
            border_left: BroadcastValue::Scalar(BorderStyle::None),
            border_right: BroadcastValue::Scalar(BorderStyle::None),
            border_top: BroadcastValue::Scalar(BorderStyle::None),
            border_bottom: BroadcastValue::Scalar(BorderStyle::None),
            border_first: BroadcastValue::Scalar(BorderStyle::None),
            border_last: BroadcastValue::Scalar(BorderStyle::None),
            border_color_left: BroadcastValue::Scalar(None),
            border_color_right: BroadcastValue::Scalar(None),
            border_color_top: BroadcastValue::Scalar(None),
            border_color_bottom: BroadcastValue::Scalar(None),
            border_color_first: BroadcastValue::Scalar(None),
            border_color_last: BroadcastValue::Scalar(None),
            border_width: BroadcastValue::Scalar(15),
            cell_height: BroadcastValue::Scalar(0.15),
            cell_justification: BroadcastValue::Scalar(Justification::Center),
            cell_vertical_justification: BroadcastValue::Scalar(VerticalJustification::Center),
            cell_nrow: BroadcastValue::Scalar(1),
        }
    }
}

impl TableAttributes {
    /// Build the border for one edge at one cell, `None` when invisible.
    fn border_at(
        &self,
        style: &BroadcastValue<BorderStyle>,
        color: &BroadcastValue<Option<String>>,
        row: usize,
        col: usize,
    ) -> Option<Border> {
        let style = *style.at(row, col);
        Some(Border {
            style,
            width: *self.border_width.at(row, col),
            color: color.at(row, col).clone(),
        })
    }

    /// Encode one data row using cumulative column widths.
    ///
    /// Vertical rules come from the left border of every cell plus the
    /// right border of the last column only, so adjacent cells do not
    /// double their shared rule.
    pub fn encode_row(
        &self,
        df: &DataFrame,
        i: usize,
        col_widths: &[f64],
        colors: &ColorTable,
    ) -> Vec<String> {
        let ncols = df.ncols();
        let mut cells = Vec::with_capacity(ncols);
        for j in 0..ncols {
            let border_right = if j + 1 == ncols {
                self.border_at(&self.border_right, &self.border_color_right, i, j)
            } else {
                None
            };
            cells.push(Cell {
                text: self.text.content_at(df.cell(i, j), i, j),
                width: col_widths[j],
                border_top: self.border_at(&self.border_top, &self.border_color_top, i, j),
                border_bottom: self.border_at(&self.border_bottom, &self.border_color_bottom, i, j),
                border_left: self.border_at(&self.border_left, &self.border_color_left, i, j),
                border_right,
                vertical_justification: *self.cell_vertical_justification.at(i, j),
            });
        }
        let row = Row {
            cells,
            justification: *self.cell_justification.at(i, 0),
            height: *self.cell_height.at(i, 0),
        };
        row.as_rtf(colors)
    }

    /// Encode a whole frame as table rows.
    pub fn encode_table(
        &self,
        df: &DataFrame,
        col_widths: &[f64],
        colors: &ColorTable,
    ) -> Vec<String> {
        let (nrows, ncols) = (df.nrows(), df.ncols());
        let mut lines = Vec::with_capacity(nrows * (ncols * 2 + 2));
        for i in 0..nrows {
            lines.extend(self.encode_row(df, i, col_widths, colors));
        }
        lines
    }

    /// Select attribute values at an index set, producing row-broadcast
    /// attributes for a spanning-row micro-table.
    pub fn section(&self, indices: &[(usize, usize)]) -> TableAttributes {
        fn pick<T: Clone>(value: &BroadcastValue<T>, indices: &[(usize, usize)]) -> BroadcastValue<T> {
            BroadcastValue::Row(
                indices
                    .iter()
                    .map(|&(r, c)| value.at(r, c).clone())
                    .collect(),
            )
        }

        TableAttributes {
            text: TextAttributes {
                font: pick(&self.text.font, indices),
                format: pick(&self.text.format, indices),
                font_size: pick(&self.text.font_size, indices),
                color: pick(&self.text.color, indices),
                background_color: pick(&self.text.background_color, indices),
                justification: pick(&self.text.justification, indices),
                indent_first: pick(&self.text.indent_first, indices),
                indent_left: pick(&self.text.indent_left, indices),
                indent_right: pick(&self.text.indent_right, indices),
                space: pick(&self.text.space, indices),
                space_before: pick(&self.text.space_before, indices),
                space_after: pick(&self.text.space_after, indices),
                hyphenation: pick(&self.text.hyphenation, indices),
                convert: pick(&self.text.convert, indices),
            },
            col_rel_width: None,
            border_left: pick(&self.border_left, indices),
            border_right: pick(&self.border_right, indices),
            border_top: pick(&self.border_top, indices),
            border_bottom: pick(&self.border_bottom, indices),
            border_first: pick(&self.border_first, indices),
            border_last: pick(&self.border_last, indices),
            border_color_left: pick(&self.border_color_left, indices),
            border_color_right: pick(&self.border_color_right, indices),
            border_color_top: pick(&self.border_color_top, indices),
            border_color_bottom: pick(&self.border_color_bottom, indices),
            border_color_first: pick(&self.border_color_first, indices),
            border_color_last: pick(&self.border_color_last, indices),
            border_width: pick(&self.border_width, indices),
            cell_height: pick(&self.cell_height, indices),
            cell_justification: pick(&self.cell_justification, indices),
            cell_vertical_justification: pick(&self.cell_vertical_justification, indices),
            cell_nrow: pick(&self.cell_nrow, indices),
        }
    }

    /// Effective relative widths for a table with `ncols` columns.
    pub fn rel_widths(&self, ncols: usize) -> Vec<f64> {
        match &self.col_rel_width {
            Some(widths) if !widths.is_empty() => widths.clone(),
            _ => vec![1.0; ncols],
        }
    }
}

/// Estimated rendered width in inches of the widest line of a cell.
pub fn cell_text_width(attrs: &TableAttributes, text: &str, row: usize, col: usize) -> f64 {
    let font = *attrs.text.font.at(row, col);
    let size = *attrs.text.font_size.at(row, col);
    crate::strwidth::string_width_inches(text, font, size).unwrap_or(0.0)
}

/// Estimated line count of one cell given its column span in inches.
pub fn cell_lines(attrs: &TableAttributes, text: &str, row: usize, col: usize, span: f64) -> usize {
    if span <= 0.0 {
        return 1;
    }
    let width = cell_text_width(attrs, text, row, col);
    ((width / span).floor() as usize + 1).max(1)
}

/// Estimated line count of one whole data row.
pub fn row_lines(attrs: &TableAttributes, df: &DataFrame, row: usize, col_widths: &[f64]) -> usize {
    let mut max_lines = 1usize;
    for col in 0..df.ncols().min(col_widths.len()) {
        let span = column_span(col_widths, col);
        max_lines = max_lines.max(cell_lines(attrs, df.cell(row, col), row, col, span));
    }

    let height_lines =
        ((*attrs.cell_height.at(row, 0) / crate::common::unit::LINE_HEIGHT_INCHES) as usize).max(1);
    let min_lines = *attrs.cell_nrow.at(row, 0);
    max_lines.max(height_lines).max(min_lines)
}

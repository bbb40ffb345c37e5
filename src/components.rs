//! Document component descriptors.
//!
//! Each descriptor is constructed with role-specific defaults and refined
//! through builder-style setters. Descriptors are plain data: they are
//! validated eagerly when the document is encoded and never mutated by the
//! pipeline.

use crate::attributes::{TableAttributes, TextAttributes};
use crate::broadcast::BroadcastValue;
use crate::common::{Error, Result};
use crate::figure::LoadedFigure;
use crate::frame::DataFrame;
use crate::style::{BorderStyle, Justification, TextFormat, VerticalJustification, resolve_color};
use std::path::Path;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Which pages of a multi-page document show an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePlacement {
    /// Only the first page
    First,
    /// Only the last page
    Last,
    /// Every page
    All,
}

impl PagePlacement {
    /// Whether the element shows on a page with the given first/last flags.
    #[inline]
    pub fn shows_on(&self, is_first: bool, is_last: bool) -> bool {
        match self {
            Self::All => true,
            Self::First => is_first,
            Self::Last => is_last,
        }
    }
}

/// Reference edge for text indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentReference {
    /// Relative to the page margin
    Page,
    /// Relative to the table band
    #[default]
    Table,
}

/// Where page_by spanning-row text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagebyRow {
    /// As its own spanning row above the group
    #[default]
    Column,
    /// Merged into the group's first data row
    FirstRow,
}

/// Position of figures relative to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigurePosition {
    Before,
    #[default]
    After,
}

/// Page geometry and document-level policy.
#[derive(Debug, Clone)]
pub struct RtfPage {
    pub orientation: Orientation,
    width: Option<f64>,
    height: Option<f64>,
    margin: Option<[f64; 6]>,
    nrow: Option<usize>,
    col_width: Option<f64>,
    /// Border of the document's absolute first row
    pub border_first: BorderStyle,
    /// Border of the document's absolute last row
    pub border_last: BorderStyle,
    /// Emit a color table
    pub use_color: bool,
    pub page_title: PagePlacement,
    pub page_footnote: PagePlacement,
    pub page_source: PagePlacement,
}

impl Default for RtfPage {
    fn default() -> Self {
        Self::new(Orientation::Portrait)
    }
}

impl RtfPage {
    /// Page descriptor with orientation-derived defaults.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            width: None,
            height: None,
            margin: None,
            nrow: None,
            col_width: None,
            border_first: BorderStyle::Double,
            border_last: BorderStyle::Double,
            use_color: false,
            page_title: PagePlacement::All,
            page_footnote: PagePlacement::Last,
            page_source: PagePlacement::Last,
        }
    }

    /// Portrait page with defaults.
    pub fn portrait() -> Self {
        Self::new(Orientation::Portrait)
    }

    /// Landscape page with defaults.
    pub fn landscape() -> Self {
        Self::new(Orientation::Landscape)
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Margins `[left, right, top, bottom, header, footer]` in inches.
    pub fn with_margin(mut self, margin: [f64; 6]) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Maximum total rows (headers, data, footnotes, sources) per page.
    pub fn with_nrow(mut self, nrow: usize) -> Self {
        self.nrow = Some(nrow);
        self
    }

    /// Usable table band width in inches.
    pub fn with_col_width(mut self, col_width: f64) -> Self {
        self.col_width = Some(col_width);
        self
    }

    pub fn with_border_first(mut self, style: BorderStyle) -> Self {
        self.border_first = style;
        self
    }

    pub fn with_border_last(mut self, style: BorderStyle) -> Self {
        self.border_last = style;
        self
    }

    pub fn with_use_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_page_title(mut self, placement: PagePlacement) -> Self {
        self.page_title = placement;
        self
    }

    pub fn with_page_footnote(mut self, placement: PagePlacement) -> Self {
        self.page_footnote = placement;
        self
    }

    pub fn with_page_source(mut self, placement: PagePlacement) -> Self {
        self.page_source = placement;
        self
    }

    /// Effective page width in inches.
    pub fn width(&self) -> f64 {
        self.width.unwrap_or(match self.orientation {
            Orientation::Portrait => 8.5,
            Orientation::Landscape => 11.0,
        })
    }

    /// Effective page height in inches.
    pub fn height(&self) -> f64 {
        self.height.unwrap_or(match self.orientation {
            Orientation::Portrait => 11.0,
            Orientation::Landscape => 8.5,
        })
    }

    /// Effective margins in inches.
    pub fn margin(&self) -> [f64; 6] {
        self.margin.unwrap_or(match self.orientation {
            Orientation::Portrait => [1.25, 1.0, 1.75, 1.25, 1.75, 1.00625],
            Orientation::Landscape => [1.0, 1.0, 2.0, 1.25, 1.25, 1.25],
        })
    }

    /// Effective rows-per-page limit.
    pub fn nrow(&self) -> usize {
        self.nrow.unwrap_or(match self.orientation {
            Orientation::Portrait => 40,
            Orientation::Landscape => 24,
        })
    }

    /// Effective table band width in inches.
    pub fn col_width(&self) -> f64 {
        self.col_width.unwrap_or(match self.orientation {
            Orientation::Portrait => self.width() - 2.25,
            Orientation::Landscape => self.width() - 2.5,
        })
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(Error::Validation(
                "Page width and height must be greater than 0".into(),
            ));
        }
        if self.nrow() < 1 {
            return Err(Error::Validation("Page nrow must be at least 1".into()));
        }
        if self.col_width() <= 0.0 {
            return Err(Error::Validation(
                "Page col_width must be greater than 0".into(),
            ));
        }
        let margin = self.margin();
        if margin.iter().any(|m| *m < 0.0) {
            return Err(Error::Validation("Margins must be non-negative".into()));
        }
        if margin[0] + margin[1] >= self.width() || margin[2] + margin[3] >= self.height() {
            return Err(Error::Validation(
                "Margins leave no room for content".into(),
            ));
        }
        Ok(())
    }
}

/// A block of text lines with shared attributes: title, subline, page
/// header, or page footer.
#[derive(Debug, Clone)]
pub struct TextComponent {
    pub text: Option<Vec<String>>,
    pub attributes: TextAttributes,
    pub indent_reference: IndentReference,
}

impl TextComponent {
    /// Title block: centered 12pt with generous spacing, conversion on.
    pub fn title() -> Self {
        Self {
            text: None,
            attributes: TextAttributes {
                font_size: BroadcastValue::Scalar(12.0),
                justification: BroadcastValue::Scalar(Justification::Center),
                space_before: BroadcastValue::Scalar(180),
                space_after: BroadcastValue::Scalar(180),
                ..TextAttributes::default()
            },
            indent_reference: IndentReference::Table,
        }
    }

    /// Subline block: left-aligned 9pt below the title, conversion off.
    pub fn subline() -> Self {
        Self {
            text: None,
            attributes: TextAttributes {
                justification: BroadcastValue::Scalar(Justification::Left),
                convert: BroadcastValue::Scalar(false),
                ..TextAttributes::default()
            },
            indent_reference: IndentReference::Table,
        }
    }

    /// Page header: right-aligned 12pt page numbering, field codes kept.
    pub fn page_header() -> Self {
        Self {
            text: Some(vec![
                "Page \\chpgn of {\\field{\\*\\fldinst NUMPAGES }}".to_string(),
            ]),
            attributes: TextAttributes {
                font_size: BroadcastValue::Scalar(12.0),
                justification: BroadcastValue::Scalar(Justification::Right),
                convert: BroadcastValue::Scalar(false),
                ..TextAttributes::default()
            },
            indent_reference: IndentReference::Page,
        }
    }

    /// Page footer: centered 12pt, field codes kept.
    pub fn page_footer() -> Self {
        Self {
            text: None,
            attributes: TextAttributes {
                font_size: BroadcastValue::Scalar(12.0),
                justification: BroadcastValue::Scalar(Justification::Center),
                convert: BroadcastValue::Scalar(false),
                ..TextAttributes::default()
            },
            indent_reference: IndentReference::Page,
        }
    }

    pub fn with_text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_font(mut self, font: impl Into<BroadcastValue<u8>>) -> Self {
        self.attributes.font = font.into();
        self
    }

    pub fn with_font_size(mut self, size: impl Into<BroadcastValue<f64>>) -> Self {
        self.attributes.font_size = size.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<BroadcastValue<TextFormat>>) -> Self {
        self.attributes.format = format.into();
        self
    }

    pub fn with_justification(mut self, just: impl Into<BroadcastValue<Justification>>) -> Self {
        self.attributes.justification = just.into();
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.attributes.color = BroadcastValue::Scalar(Some(color.to_string()));
        self
    }

    pub fn with_convert(mut self, convert: bool) -> Self {
        self.attributes.convert = BroadcastValue::Scalar(convert);
        self
    }

    pub fn with_indent_reference(mut self, reference: IndentReference) -> Self {
        self.indent_reference = reference;
        self
    }

    /// Whether there is anything to render.
    pub fn has_text(&self) -> bool {
        self.text.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_text_attributes(&self.attributes)
    }
}

/// Table-rendered text block: footnote or source.
#[derive(Debug, Clone)]
pub struct TableTextComponent {
    pub text: Option<Vec<String>>,
    /// Render as a bordered single-cell table instead of plain paragraphs
    pub as_table: bool,
    pub attributes: TableAttributes,
}

impl TableTextComponent {
    fn table_text_defaults() -> TableAttributes {
        TableAttributes {
            text: TextAttributes {
                justification: BroadcastValue::Scalar(Justification::Left),
                convert: BroadcastValue::Scalar(false),
                ..TextAttributes::default()
            },
            cell_vertical_justification: BroadcastValue::Scalar(VerticalJustification::Top),
            ..TableAttributes::default()
        }
    }

    fn apply_as_table_borders(attrs: &mut TableAttributes, as_table: bool) {
        let edge = if as_table {
            BorderStyle::Single
        } else {
            BorderStyle::None
        };
        attrs.border_left = BroadcastValue::Scalar(edge);
        attrs.border_right = BroadcastValue::Scalar(edge);
        attrs.border_top = BroadcastValue::Scalar(edge);
        attrs.border_bottom = BroadcastValue::Scalar(BorderStyle::None);
    }

    /// Footnote: table-rendered by default, left-aligned, conversion off.
    pub fn footnote() -> Self {
        let mut attributes = Self::table_text_defaults();
        Self::apply_as_table_borders(&mut attributes, true);
        Self {
            text: None,
            as_table: true,
            attributes,
        }
    }

    /// Source: plain-paragraph by default, centered, conversion off.
    pub fn source() -> Self {
        let mut attributes = Self::table_text_defaults();
        Self::apply_as_table_borders(&mut attributes, false);
        attributes.text.justification = BroadcastValue::Scalar(Justification::Center);
        Self {
            text: None,
            as_table: false,
            attributes,
        }
    }

    pub fn with_text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Switch table/paragraph rendering, reinstalling the border defaults
    /// that go with the mode.
    pub fn with_as_table(mut self, as_table: bool) -> Self {
        self.as_table = as_table;
        Self::apply_as_table_borders(&mut self.attributes, as_table);
        self
    }

    pub fn with_convert(mut self, convert: bool) -> Self {
        self.attributes.text.convert = BroadcastValue::Scalar(convert);
        self
    }

    pub fn with_justification(mut self, just: impl Into<BroadcastValue<Justification>>) -> Self {
        self.attributes.text.justification = just.into();
        self
    }

    pub fn with_font_size(mut self, size: impl Into<BroadcastValue<f64>>) -> Self {
        self.attributes.text.font_size = size.into();
        self
    }

    /// Whether there is anything to render.
    pub fn has_text(&self) -> bool {
        self.text.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// The text lines joined for single-cell table rendering.
    pub fn joined_text(&self) -> String {
        self.text
            .as_deref()
            .unwrap_or_default()
            .join("\\line ")
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_table_attributes(&self.attributes)
    }
}

/// One row of column header cells.
#[derive(Debug, Clone)]
pub struct ColumnHeader {
    /// Header cell texts; `None` asks the body to auto-generate them from
    /// the frame's column names
    pub text: Option<Vec<String>>,
    pub attributes: TableAttributes,
}

impl Default for ColumnHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnHeader {
    pub fn new() -> Self {
        Self {
            text: None,
            attributes: TableAttributes {
                text: TextAttributes {
                    justification: BroadcastValue::Scalar(Justification::Center),
                    hyphenation: BroadcastValue::Scalar(false),
                    ..TextAttributes::default()
                },
                border_left: BroadcastValue::Scalar(BorderStyle::Single),
                border_right: BroadcastValue::Scalar(BorderStyle::Single),
                border_top: BroadcastValue::Scalar(BorderStyle::Single),
                cell_vertical_justification: BroadcastValue::Scalar(VerticalJustification::Bottom),
                ..TableAttributes::default()
            },
        }
    }

    pub fn with_text<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_col_rel_width(mut self, widths: Vec<f64>) -> Self {
        self.attributes.col_rel_width = Some(widths);
        self
    }

    pub fn with_format(mut self, format: impl Into<BroadcastValue<TextFormat>>) -> Self {
        self.attributes.text.format = format.into();
        self
    }

    pub fn with_border_top(mut self, style: impl Into<BroadcastValue<BorderStyle>>) -> Self {
        self.attributes.border_top = style.into();
        self
    }

    pub fn with_border_bottom(mut self, style: impl Into<BroadcastValue<BorderStyle>>) -> Self {
        self.attributes.border_bottom = style.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let (Some(cells), Some(widths)) = (&self.text, &self.attributes.col_rel_width) {
            if widths.len() != cells.len() {
                return Err(Error::Validation(format!(
                    "Column header has {} cells but {} relative widths",
                    cells.len(),
                    widths.len()
                )));
            }
            if widths.iter().any(|w| *w <= 0.0) {
                return Err(Error::Validation(
                    "col_rel_width entries must be positive".into(),
                ));
            }
        }
        validate_table_attributes(&self.attributes)
    }
}

/// Table body descriptor: attributes plus the grouping control flags.
#[derive(Debug, Clone)]
pub struct RtfBody {
    pub attributes: TableAttributes,
    /// Auto-generate a header row from column names when the first column
    /// header has no text
    pub as_colheader: bool,
    /// Columns whose repeated values are suppressed within groups
    pub group_by: Vec<String>,
    /// Columns removed from display and drawn as spanning rows
    pub page_by: Vec<String>,
    /// Force a page break between page_by groups
    pub new_page: bool,
    /// Repeat column headers on pages after the first
    pub pageby_header: bool,
    /// Where spanning-row text is drawn
    pub pageby_row: PagebyRow,
    /// Columns removed from display and drawn as subline bands
    pub subline_by: Vec<String>,
    /// Whether this body holds the document's final row
    pub last_row: bool,
}

impl Default for RtfBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RtfBody {
    pub fn new() -> Self {
        Self {
            attributes: TableAttributes {
                text: TextAttributes {
                    justification: BroadcastValue::Scalar(Justification::Center),
                    hyphenation: BroadcastValue::Scalar(false),
                    ..TextAttributes::default()
                },
                border_left: BroadcastValue::Scalar(BorderStyle::Single),
                border_right: BroadcastValue::Scalar(BorderStyle::Single),
                border_first: BroadcastValue::Scalar(BorderStyle::Single),
                border_last: BroadcastValue::Scalar(BorderStyle::Single),
                cell_vertical_justification: BroadcastValue::Scalar(VerticalJustification::Top),
                ..TableAttributes::default()
            },
            as_colheader: true,
            group_by: Vec::new(),
            page_by: Vec::new(),
            new_page: false,
            pageby_header: true,
            pageby_row: PagebyRow::Column,
            subline_by: Vec::new(),
            last_row: true,
        }
    }

    pub fn with_col_rel_width(mut self, widths: Vec<f64>) -> Self {
        self.attributes.col_rel_width = Some(widths);
        self
    }

    pub fn with_as_colheader(mut self, as_colheader: bool) -> Self {
        self.as_colheader = as_colheader;
        self
    }

    pub fn with_group_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.page_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_new_page(mut self, new_page: bool) -> Self {
        self.new_page = new_page;
        self
    }

    pub fn with_pageby_header(mut self, pageby_header: bool) -> Self {
        self.pageby_header = pageby_header;
        self
    }

    pub fn with_pageby_row(mut self, pageby_row: PagebyRow) -> Self {
        self.pageby_row = pageby_row;
        self
    }

    pub fn with_subline_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subline_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_last_row(mut self, last_row: bool) -> Self {
        self.last_row = last_row;
        self
    }

    pub fn with_text_justification(
        mut self,
        just: impl Into<BroadcastValue<Justification>>,
    ) -> Self {
        self.attributes.text.justification = just.into();
        self
    }

    pub fn with_text_format(mut self, format: impl Into<BroadcastValue<TextFormat>>) -> Self {
        self.attributes.text.format = format.into();
        self
    }

    pub fn with_text_convert(mut self, convert: impl Into<BroadcastValue<bool>>) -> Self {
        self.attributes.text.convert = convert.into();
        self
    }

    pub fn with_border_first(mut self, style: impl Into<BroadcastValue<BorderStyle>>) -> Self {
        self.attributes.border_first = style.into();
        self
    }

    pub fn with_border_last(mut self, style: impl Into<BroadcastValue<BorderStyle>>) -> Self {
        self.attributes.border_last = style.into();
        self
    }

    /// Columns removed from the displayed frame.
    pub fn hidden_columns(&self) -> Vec<String> {
        let mut hidden = self.page_by.clone();
        for col in &self.subline_by {
            if !hidden.contains(col) {
                hidden.push(col.clone());
            }
        }
        hidden
    }

    pub(crate) fn validate(&self, df: &DataFrame) -> Result<()> {
        if self.new_page && self.page_by.is_empty() {
            return Err(Error::Validation(
                "`new_page` must be false if `page_by` is not specified".into(),
            ));
        }
        for col in self
            .group_by
            .iter()
            .chain(&self.page_by)
            .chain(&self.subline_by)
        {
            if !df.has_column(col) {
                return Err(Error::ColumnNotFound(col.clone()));
            }
        }
        if let Some(widths) = &self.attributes.col_rel_width {
            if widths.iter().any(|w| *w <= 0.0) {
                return Err(Error::Validation(
                    "col_rel_width entries must be positive".into(),
                ));
            }
            let rendered = df.ncols() - self.hidden_columns().len().min(df.ncols());
            if widths.len() != rendered && widths.len() != df.ncols() {
                return Err(Error::Validation(format!(
                    "col_rel_width has {} entries for {} rendered columns",
                    widths.len(),
                    rendered
                )));
            }
        }
        validate_table_attributes(&self.attributes)
    }
}

/// Figure embed descriptor.
#[derive(Debug, Clone)]
pub struct RtfFigure {
    pub figures: Vec<LoadedFigure>,
    /// Goal widths in inches, broadcast over the figure list
    pub widths: Vec<f64>,
    /// Goal heights in inches, broadcast over the figure list
    pub heights: Vec<f64>,
    /// Horizontal alignment (left, center, right)
    pub align: Justification,
    pub position: FigurePosition,
}

impl RtfFigure {
    /// Load figures from disk, detecting each file's format.
    pub fn from_paths<P, I>(paths: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        let figures = paths
            .into_iter()
            .map(LoadedFigure::from_path)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            figures,
            widths: vec![5.0],
            heights: vec![5.0],
            align: Justification::Center,
            position: FigurePosition::After,
        })
    }

    pub fn with_width(mut self, widths: Vec<f64>) -> Self {
        self.widths = widths;
        self
    }

    pub fn with_height(mut self, heights: Vec<f64>) -> Self {
        self.heights = heights;
        self
    }

    pub fn with_align(mut self, align: Justification) -> Self {
        self.align = align;
        self
    }

    pub fn with_position(mut self, position: FigurePosition) -> Self {
        self.position = position;
        self
    }

    /// Goal width of figure `i`.
    pub fn width_at(&self, i: usize) -> f64 {
        self.widths[i % self.widths.len().max(1)]
    }

    /// Goal height of figure `i`.
    pub fn height_at(&self, i: usize) -> f64 {
        self.heights[i % self.heights.len().max(1)]
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.align == Justification::Justify {
            return Err(Error::Validation(
                "Figure alignment must be left, center, or right".into(),
            ));
        }
        if self.widths.is_empty() || self.heights.is_empty() {
            return Err(Error::Validation(
                "Figure dimensions must not be empty".into(),
            ));
        }
        if self
            .widths
            .iter()
            .chain(&self.heights)
            .any(|v| *v <= 0.0)
        {
            return Err(Error::Validation(
                "Figure dimensions must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Free-standing styled text: measurable with the string width oracle and
/// renderable as a standalone paragraph.
#[derive(Debug, Clone)]
pub struct RtfText {
    pub text: String,
    pub attributes: TextAttributes,
}

impl RtfText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: TextAttributes {
                font_size: BroadcastValue::Scalar(12.0),
                ..TextAttributes::default()
            },
        }
    }

    pub fn with_font(mut self, font: impl Into<BroadcastValue<u8>>) -> Self {
        self.attributes.font = font.into();
        self
    }

    pub fn with_font_size(mut self, size: impl Into<BroadcastValue<f64>>) -> Self {
        self.attributes.font_size = size.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<BroadcastValue<TextFormat>>) -> Self {
        self.attributes.format = format.into();
        self
    }

    pub fn with_justification(mut self, just: impl Into<BroadcastValue<Justification>>) -> Self {
        self.attributes.justification = just.into();
        self
    }

    /// Rendered width of the text in its own font and size.
    pub fn string_width(&self, unit: crate::strwidth::Unit) -> Result<f64> {
        crate::strwidth::string_width(
            &self.text,
            *self.attributes.font.at(0, 0),
            *self.attributes.font_size.at(0, 0),
            unit,
            72.0,
        )
    }

    /// Render as a standalone paragraph.
    pub fn as_rtf(&self, colors: &crate::style::ColorTable) -> String {
        self.attributes.content_at(&self.text, 0, 0).as_paragraph(colors)
    }

    pub fn validate(&self) -> Result<()> {
        validate_text_attributes(&self.attributes)
    }
}

fn validate_text_attributes(attrs: &TextAttributes) -> Result<()> {
    if attrs.font_size.stored().any(|size| *size <= 0.0) {
        return Err(Error::Validation("Font size must be positive".into()));
    }
    for font in attrs.font.stored() {
        crate::fonts::font_slot(*font)?;
    }
    for color in attrs.color.stored().chain(attrs.background_color.stored()) {
        if let Some(name) = color {
            resolve_color(name)?;
        }
    }
    Ok(())
}

fn validate_table_attributes(attrs: &TableAttributes) -> Result<()> {
    validate_text_attributes(&attrs.text)?;
    if attrs.border_width.stored().any(|w| *w <= 0) {
        return Err(Error::Validation("Border width must be positive".into()));
    }
    if attrs.cell_height.stored().any(|h| *h <= 0.0) {
        return Err(Error::Validation("Cell height must be positive".into()));
    }
    let color_fields = [
        &attrs.border_color_left,
        &attrs.border_color_right,
        &attrs.border_color_top,
        &attrs.border_color_bottom,
        &attrs.border_color_first,
        &attrs.border_color_last,
    ];
    for field in color_fields {
        for color in field.stored().flatten() {
            resolve_color(color)?;
        }
    }
    Ok(())
}

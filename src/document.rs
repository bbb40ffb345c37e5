//! Document construction, validation, and full RTF encoding.
//!
//! [`RtfDocument`] owns the data frame and the component descriptors and
//! turns them into a single RTF string: validate, preprocess the grouping
//! pipeline, paginate, resolve per-page borders, render each page, and
//! wrap everything in the document prologue. `write_rtf` encodes fully
//! before touching the output file, so nothing is written on error.

use crate::borders::{PageBorderInput, resolve_page_borders};
use crate::common::unit::col_widths;
use crate::common::{Error, Result};
use crate::components::{
    ColumnHeader, RtfBody, RtfFigure, RtfPage, TableTextComponent, TextComponent,
};
use crate::frame::DataFrame;
use crate::grouping;
use crate::pagination::{PageContext, PaginationInput, strategy_for};
use crate::renderer;
use crate::style::ColorTable;
use crate::{fonts, figure};
use std::path::Path;

/// A complete RTF report document.
#[derive(Debug, Clone)]
pub struct RtfDocument {
    pub df: DataFrame,
    pub page: RtfPage,
    pub page_header: Option<TextComponent>,
    pub title: Option<TextComponent>,
    pub subline: Option<TextComponent>,
    pub column_header: Vec<ColumnHeader>,
    pub body: RtfBody,
    pub footnote: Option<TableTextComponent>,
    pub source: Option<TableTextComponent>,
    pub page_footer: Option<TextComponent>,
    pub figure: Option<RtfFigure>,
}

impl RtfDocument {
    /// Document over a data frame with default page, body, and an
    /// auto-generated column header.
    pub fn new(df: DataFrame) -> Self {
        Self {
            df,
            page: RtfPage::default(),
            page_header: None,
            title: None,
            subline: None,
            column_header: vec![ColumnHeader::new()],
            body: RtfBody::new(),
            footnote: None,
            source: None,
            page_footer: None,
            figure: None,
        }
    }

    pub fn with_page(mut self, page: RtfPage) -> Self {
        self.page = page;
        self
    }

    pub fn with_title(mut self, title: TextComponent) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_subline(mut self, subline: TextComponent) -> Self {
        self.subline = Some(subline);
        self
    }

    pub fn with_page_header(mut self, header: TextComponent) -> Self {
        self.page_header = Some(header);
        self
    }

    pub fn with_page_footer(mut self, footer: TextComponent) -> Self {
        self.page_footer = Some(footer);
        self
    }

    /// Replace the column header stack.
    pub fn with_column_headers(mut self, headers: Vec<ColumnHeader>) -> Self {
        self.column_header = headers;
        self
    }

    /// Replace the column header stack with a single header row.
    pub fn with_column_header(mut self, header: ColumnHeader) -> Self {
        self.column_header = vec![header];
        self
    }

    pub fn with_body(mut self, body: RtfBody) -> Self {
        self.body = body;
        self
    }

    pub fn with_footnote(mut self, footnote: TableTextComponent) -> Self {
        self.footnote = Some(footnote);
        self
    }

    pub fn with_source(mut self, source: TableTextComponent) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_figure(mut self, figure: RtfFigure) -> Self {
        self.figure = Some(figure);
        self
    }

    /// Validate every descriptor against the frame. Runs before any
    /// emission; encoding never starts on an invalid document.
    pub fn validate(&self) -> Result<()> {
        self.page.validate()?;
        self.body.validate(&self.df)?;
        for component in [&self.title, &self.subline, &self.page_header, &self.page_footer]
            .into_iter()
            .flatten()
        {
            component.validate()?;
        }
        for header in &self.column_header {
            header.validate()?;
        }
        for component in [&self.footnote, &self.source].into_iter().flatten() {
            component.validate()?;
        }
        if let Some(figure) = &self.figure {
            figure.validate()?;
        }
        Ok(())
    }

    /// Collect every referenced color name into a document color table.
    fn collect_colors(&self) -> Result<ColorTable> {
        let mut table = ColorTable::new();

        let mut add_text = |attrs: &crate::attributes::TextAttributes| -> Result<()> {
            for color in attrs.color.stored().chain(attrs.background_color.stored()) {
                if let Some(name) = color {
                    table.add(name)?;
                }
            }
            Ok(())
        };

        for component in [&self.title, &self.subline, &self.page_header, &self.page_footer]
            .into_iter()
            .flatten()
        {
            add_text(&component.attributes)?;
        }

        let mut add_table = |attrs: &crate::attributes::TableAttributes| -> Result<()> {
            for color in attrs.text.color.stored().chain(attrs.text.background_color.stored()) {
                if let Some(name) = color {
                    table.add(name)?;
                }
            }
            let border_colors = [
                &attrs.border_color_left,
                &attrs.border_color_right,
                &attrs.border_color_top,
                &attrs.border_color_bottom,
                &attrs.border_color_first,
                &attrs.border_color_last,
            ];
            for field in border_colors {
                for color in field.stored().flatten() {
                    table.add(color)?;
                }
            }
            Ok(())
        };

        for header in &self.column_header {
            add_table(&header.attributes)?;
        }
        add_table(&self.body.attributes)?;
        for component in [&self.footnote, &self.source].into_iter().flatten() {
            add_table(&component.attributes)?;
        }

        Ok(table)
    }

    /// Rows reserved per page for non-data components.
    fn additional_rows_per_page(&self, display: &DataFrame) -> usize {
        let mut rows = renderer::header_texts(&self.column_header, &self.body, display).len();
        if !self.body.subline_by.is_empty() {
            rows += 1;
        }
        if self.footnote.as_ref().is_some_and(|f| f.has_text()) {
            rows += 1;
        }
        if self.source.as_ref().is_some_and(|s| s.has_text()) {
            rows += 1;
        }
        rows
    }

    /// Generate the complete RTF document.
    pub fn rtf_encode(&self) -> Result<String> {
        self.validate()?;

        let colors = self.collect_colors()?;

        if self.df.ncols() == 0 {
            if let Some(figure) = &self.figure {
                return Ok(self.encode_figure_pages(figure, &colors));
            }
        }

        // Grouping pipeline: remove page_by/subline_by columns, re-slice
        // widths, and suppress group_by duplicates.
        let hidden = self.body.hidden_columns();
        let display = self.df.drop_columns(&hidden);
        let all_names = self.df.column_names();
        let rel_widths = grouping::resliced_widths(
            self.body.attributes.col_rel_width.as_ref(),
            &all_names,
            &hidden,
            display.ncols(),
        )
        .unwrap_or_else(|| vec![1.0; display.ncols().max(1)]);

        let mut display_attrs = self.body.attributes.clone();
        display_attrs.col_rel_width = Some(rel_widths.clone());
        let widths = col_widths(&rel_widths, self.page.col_width());

        grouping::warn_inconsistent_subline_formatting(
            &self.df,
            &self.body.subline_by,
            &self.body.attributes,
        );

        let additional_rows = self.additional_rows_per_page(&display);
        let strategy = strategy_for(&self.body);
        let mut pages = strategy.paginate(&PaginationInput {
            display: &display,
            source: &self.df,
            body: &self.body,
            attrs: &display_attrs,
            col_widths: &widths,
            nrow: self.page.nrow(),
            additional_rows,
        });

        // A frame with no rows still renders one structural page so the
        // title, headers, and footnotes appear.
        if pages.is_empty() {
            pages.push(PageContext {
                page_number: 1,
                total_pages: 1,
                start_row: 0,
                end_row: 0,
                is_first_page: true,
                is_last_page: true,
                needs_header: true,
                pageby_header: None,
                subline_header: None,
                group_boundaries: Vec::new(),
            });
        }

        // group_by suppression with page-context restoration
        let render_df = if self.body.group_by.is_empty() {
            display.clone()
        } else {
            let mut suppressed =
                grouping::suppress_group_values(&display, &self.body.group_by);
            let page_starts: Vec<usize> = pages
                .iter()
                .filter(|p| !p.is_first_page)
                .map(|p| p.start_row)
                .collect();
            grouping::restore_page_context(
                &mut suppressed,
                &display,
                &self.body.group_by,
                &page_starts,
            );
            suppressed
        };

        let header_present =
            !renderer::header_texts(&self.column_header, &self.body, &display).is_empty();

        let mut chunks = Vec::new();
        for ctx in &pages {
            let show_title = self.page.page_title.shows_on(ctx.is_first_page, ctx.is_last_page);
            let show_footnote = self
                .page
                .page_footnote
                .shows_on(ctx.is_first_page, ctx.is_last_page);
            let show_source = self
                .page
                .page_source
                .shows_on(ctx.is_first_page, ctx.is_last_page);

            let footnote_shown = show_footnote
                && self.footnote.as_ref().is_some_and(|f| f.has_text());
            let source_shown =
                show_source && self.source.as_ref().is_some_and(|s| s.has_text());
            let footnote_table_shown = footnote_shown
                && self.footnote.as_ref().is_some_and(|f| f.as_table);
            let source_table_shown =
                source_shown && self.source.as_ref().is_some_and(|s| s.as_table);

            // A body that does not hold the document's final row closes
            // with its own page border instead of the document border.
            let page_border_last = if self.body.last_row {
                self.page.border_last
            } else {
                *self.body.attributes.border_last.at(0, 0)
            };

            let resolved = resolve_page_borders(&PageBorderInput {
                body: &display_attrs,
                page_border_first: self.page.border_first,
                page_border_last,
                ctx,
                cols: display.ncols(),
                has_column_headers: header_present,
                footnote_table_shown,
                source_table_shown,
            });

            let data = render_df.slice(ctx.start_row, ctx.row_count());

            chunks.extend(renderer::render_page(&renderer::PageRender {
                page: &self.page,
                body: &self.body,
                ctx,
                data: &data,
                source_frame: &self.df,
                attrs: &resolved.attrs,
                delegated_bottom: resolved.delegated_bottom,
                colors: &colors,
                col_widths: &widths,
                title: self.title.as_ref().filter(|_| show_title),
                subline: self.subline.as_ref().filter(|_| show_title),
                column_headers: &self.column_header,
                footnote: self.footnote.as_ref().filter(|_| footnote_shown),
                source: self.source.as_ref().filter(|_| source_shown),
                figure: self.figure.as_ref(),
                delegate_to_source: source_table_shown,
            }));
        }

        Ok(self.wrap_document(chunks, &colors))
    }

    /// Wrap page chunks in the document prologue and closing brace.
    fn wrap_document(&self, chunks: Vec<String>, colors: &ColorTable) -> String {
        let table_space = renderer::table_space_twips(&self.page);
        let mut parts: Vec<String> = Vec::with_capacity(chunks.len() + 8);

        parts.push("{\\rtf1\\ansi\n\\deff0\\deflang1033".to_string());
        parts.push(fonts::encode_font_table());
        if let Some(color_table) = colors.encode() {
            parts.push(color_table);
        }
        parts.push("\n".to_string());
        parts.push(renderer::encode_page_geometry(&self.page));
        parts.push(renderer::encode_page_margins(&self.page));
        if let Some(header) = &self.page_header {
            if let Some(encoded) = renderer::encode_page_header(header, colors, table_space) {
                parts.push(encoded);
            }
        }
        if let Some(footer) = &self.page_footer {
            if let Some(encoded) = renderer::encode_page_footer(footer, colors, table_space) {
                parts.push(encoded);
            }
        }
        parts.extend(chunks);
        parts.push("\n\n".to_string());
        parts.push("}".to_string());

        parts.join("\n")
    }

    /// Figure-only rendering: one page per figure.
    fn encode_figure_pages(&self, figures: &RtfFigure, colors: &ColorTable) -> String {
        let count = figures.figures.len();
        let mut chunks = Vec::new();

        for (i, loaded) in figures.figures.iter().enumerate() {
            let is_first = i == 0;
            let is_last = i + 1 == count;

            if !is_first {
                chunks.push(renderer::page_break(&self.page));
            }
            if self.page.page_title.shows_on(is_first, is_last) {
                if let Some(title) = &self.title {
                    if let Some(encoded) = renderer::encode_text_component(title, colors, 0) {
                        chunks.push(encoded);
                        chunks.push("\n".to_string());
                    }
                }
                if is_first {
                    if let Some(subline) = &self.subline {
                        let table_space = renderer::table_space_twips(&self.page);
                        if let Some(encoded) =
                            renderer::encode_text_component(subline, colors, table_space)
                        {
                            chunks.push(encoded);
                        }
                    }
                }
            }

            chunks.push(figure::encode_figure(
                loaded,
                figures.width_at(i),
                figures.height_at(i),
                figures.align,
            ));

            if self.page.page_footnote.shows_on(is_first, is_last) {
                if let Some(footnote) = &self.footnote {
                    // Figure pages carry footnotes as plain paragraphs
                    let paragraph = footnote.clone().with_as_table(false);
                    chunks.extend(renderer::encode_table_text(
                        &paragraph,
                        self.page.col_width(),
                        colors,
                        None,
                    ));
                }
            }
            if self.page.page_source.shows_on(is_first, is_last) {
                if let Some(source) = &self.source {
                    chunks.extend(renderer::encode_table_text(
                        source,
                        self.page.col_width(),
                        colors,
                        None,
                    ));
                }
            }
        }

        self.wrap_document(chunks, colors)
    }

    /// Encode and write the document to a file.
    ///
    /// The file is only created after encoding succeeds.
    pub fn write_rtf(&self, path: impl AsRef<Path>) -> Result<()> {
        let encoded = self.rtf_encode()?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}

//! Longan - a Rust library for encoding tabular reports as RTF documents
//!
//! This library turns a columnar data frame plus a set of declarative
//! component descriptors into a paginated Rich Text Format document, in the
//! layout conventions used for clinical and pharmaceutical reporting:
//! titles, multi-row column headers, bordered data bodies, sublines,
//! footnotes, data sources, page headers/footers, and embedded figures.
//!
//! # Features
//!
//! - **Pagination**: page breaks computed from typographic row heights,
//!   reserved header/footnote rows, and forced breaks at group boundaries
//! - **Grouping**: duplicate-value suppression (`group_by`), spanning group
//!   header rows with column removal (`page_by`), and full-width subheader
//!   bands (`subline_by`)
//! - **Border lattice**: deterministic document/page/cell border overrides
//! - **Character substitution**: LaTeX commands to Unicode, RTF field codes,
//!   and signed-16-bit `\uN*` escapes
//! - **Figures**: PNG, JPEG, and EMF embedding as hex `{\pict}` groups
//! - **Deterministic output**: encoding the same document twice yields
//!   byte-identical RTF
//!
//! # Example
//!
//! ```no_run
//! use longan::{DataFrame, RtfDocument, TextComponent};
//!
//! # fn main() -> longan::Result<()> {
//! let df = DataFrame::from_columns(vec![
//!     ("Treatment", vec!["Placebo", "Drug 10mg"]),
//!     ("N", vec!["86", "84"]),
//! ])?;
//!
//! let doc = RtfDocument::new(df)
//!     .with_title(TextComponent::title().with_text(["Demographic Summary"]));
//! doc.write_rtf("demographics.rtf")?;
//! # Ok(())
//! # }
//! ```

/// Shared error types and unit conversion utilities
pub mod common;

/// Broadcastable attribute containers (scalar / row / matrix)
pub mod broadcast;

/// Columnar string data frame used as the read-only data source
pub mod frame;

/// Closed attribute vocabularies: borders, justification, formats, colors
pub mod style;

/// LaTeX-to-Unicode and RTF special character substitution
pub mod convert;

/// String width measurement from embedded font metrics
pub mod strwidth;

/// RTF font table slots
pub mod fonts;

/// Text and table attribute sets with per-component defaults
pub mod attributes;

/// Row, cell, and text block RTF encoders
pub mod row;

/// Document component descriptors (page, title, body, footnote, ...)
pub mod components;

/// Grouping pipeline: value suppression, column removal, group headers
pub mod grouping;

/// Page break calculation and pagination strategies
pub mod pagination;

/// Per-page border resolution (document > page > cell lattice)
pub mod borders;

/// Page renderer: materializes one page context into RTF
pub mod renderer;

/// Figure loading and `{\pict}` encoding
pub mod figure;

/// Document assembly: preamble, page concatenation, file output
pub mod document;

/// Multi-file RTF assembly utilities
pub mod assemble;

// Re-export commonly used types for convenience
pub use assemble::assemble_rtf;
pub use broadcast::BroadcastValue;
pub use common::{Error, Result};
pub use components::{
    ColumnHeader, FigurePosition, IndentReference, Orientation, PagePlacement, PagebyRow, RtfBody,
    RtfFigure, RtfPage, RtfText, TableTextComponent, TextComponent,
};
pub use convert::{convert_latex, escape_rtf};
pub use document::RtfDocument;
pub use figure::FigureFormat;
pub use frame::DataFrame;
pub use strwidth::{Unit, string_width};
pub use style::{BorderStyle, Justification, TextFormat, VerticalJustification};

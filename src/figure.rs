//! Figure loading and `{\pict}` encoding.
//!
//! Figures are embedded as-is: bytes are read once when the descriptor is
//! built, the payload format is sniffed from the leading bytes during that
//! load, and the payload is emitted as uppercase hex inside a `{\pict}`
//! group. Image content is never decoded or resampled.

use crate::common::unit::inch_to_twip;
use crate::common::{Error, Result};
use std::path::Path;

/// Raster/metafile format accepted for embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureFormat {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// Enhanced Metafile
    Emf,
}

impl FigureFormat {
    /// RTF picture type control word.
    #[inline]
    pub fn control_word(&self) -> &'static str {
        match self {
            Self::Png => "\\pngblip",
            Self::Jpeg => "\\jpegblip",
            Self::Emf => "\\emfblip",
        }
    }

    /// Identify a payload from its leading bytes.
    fn sniff(data: &[u8]) -> Option<Self> {
        match data {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(Self::Png),
            [0xFF, 0xD8, ..] => Some(Self::Jpeg),
            _ if emf_header(data) => Some(Self::Emf),
            _ => None,
        }
    }
}

/// An enhanced metafile opens with an EMR_HEADER record (record type 1)
/// whose `" EMF"` signature dword sits at byte offset 40.
fn emf_header(data: &[u8]) -> bool {
    let Some(record_type) = data.get(..4) else {
        return false;
    };
    u32::from_le_bytes([record_type[0], record_type[1], record_type[2], record_type[3]]) == 1
        && data.get(40..44).is_some_and(|signature| signature == b" EMF")
}

/// A figure read into memory with its detected format.
#[derive(Debug, Clone)]
pub struct LoadedFigure {
    pub bytes: Vec<u8>,
    pub format: FigureFormat,
}

impl LoadedFigure {
    /// Read a figure file, sniffing its format from the payload.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FigureNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)?;
        match FigureFormat::sniff(&bytes) {
            Some(format) => Ok(Self { bytes, format }),
            None => Err(Error::Figure(format!(
                "Unsupported image format: {}",
                path.display()
            ))),
        }
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex encoding of the raw figure bytes.
fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

/// Emit one figure as an aligned paragraph around a `{\pict}` group.
///
/// Width and height are goal dimensions in inches; `align` supplies the
/// paragraph justification code.
pub fn encode_figure(
    figure: &LoadedFigure,
    width: f64,
    height: f64,
    align: crate::style::Justification,
) -> String {
    let mut buf = itoa::Buffer::new();
    let mut out = String::with_capacity(figure.bytes.len() * 2 + 64);

    out.push_str("{\\pard");
    out.push_str(align.paragraph_code());
    out.push_str("{\\pict");
    out.push_str(figure.format.control_word());
    out.push_str("\\picwgoal");
    out.push_str(buf.format(inch_to_twip(width)));
    out.push_str("\\pichgoal");
    out.push_str(buf.format(inch_to_twip(height)));
    out.push('\n');
    out.push_str(&hex_encode(&figure.bytes));
    out.push('}');
    out.push_str("\\par}");
    out
}

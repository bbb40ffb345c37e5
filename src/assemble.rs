//! Multi-file RTF assembly.
//!
//! Combines pre-rendered RTF files into one document: the first file's
//! header (through the font table) is kept, subsequent files are stripped
//! to their bodies, and pages are separated with `\page`. The combined file
//! ends with a single closing brace.
//!
//! The DOCX path of the upstream toolchain delegates to an external office
//! converter over its command line (exit code 0 on success); that
//! collaborator is intentionally not reimplemented here.

use crate::common::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read one input file, mapping undecodable bytes to an encoding error.
fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::InvalidData => Error::InvalidUtf8,
        _ => Error::Io(err),
    })
}

/// Index of the first body line.
///
/// The header runs through the font table: everything up to and including
/// the line after the last `fcharset` line of the leading run (the font
/// table's closing brace) is stripped.
fn body_start(lines: &[&str]) -> usize {
    let Some(first) = lines.iter().position(|l| l.contains("fcharset")) else {
        return 0;
    };
    let mut i = first;
    while i + 1 < lines.len() && lines[i + 1].contains("fcharset") {
        i += 1;
    }
    (i + 2).min(lines.len())
}

/// Combine multiple RTF files into a single RTF file.
///
/// Inputs must exist; an empty input list is an error. The output file is
/// only written after every input has been read successfully.
pub fn assemble_rtf<P, Q>(input_files: &[P], output_file: Q) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    if input_files.is_empty() {
        return Err(Error::AssemblyEmptyInput);
    }

    for input in input_files {
        if !input.as_ref().exists() {
            return Err(Error::AssemblyFileMissing(PathBuf::from(input.as_ref())));
        }
    }

    let contents = input_files
        .iter()
        .map(|p| read_input(p.as_ref()))
        .collect::<Result<Vec<String>>>()?;

    let mut combined = String::new();
    let last = contents.len() - 1;

    for (i, content) in contents.iter().enumerate() {
        let lines: Vec<&str> = content.lines().collect();
        let start = if i == 0 { 0 } else { body_start(&lines) };

        let mut end = lines.len();
        if i < last {
            // Drop the closing brace of every file but the last
            while end > start && lines[end - 1].trim().is_empty() {
                end -= 1;
            }
            if end > start && lines[end - 1].trim() == "}" {
                end -= 1;
            }
        }

        for line in &lines[start..end] {
            combined.push_str(line);
            combined.push('\n');
        }
        if i < last {
            combined.push_str("\\page\n");
        }
    }

    std::fs::write(output_file, combined)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_document(body: &str, extra_fonts: usize) -> String {
        let mut fonts = String::from("{\\fonttbl{\\f0\\froman\\fcharset1\\fprq2 Times New Roman;}\n");
        for i in 0..extra_fonts {
            fonts.push_str(&format!(
                "{{\\f{}\\froman\\fcharset161\\fprq2 Times New Roman Greek;}}\n",
                i + 1
            ));
        }
        fonts.push('}');
        format!("{{\\rtf1\\ansi\n\\deff0\\deflang1033\n{fonts}\n\\pard {body}\\par\n}}\n")
    }

    #[test]
    fn test_assemble_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.rtf");
        let second = dir.path().join("b.rtf");
        let output = dir.path().join("out.rtf");

        fs::write(&first, sample_document("Content 1", 0)).unwrap();
        fs::write(&second, sample_document("Content 2", 3)).unwrap();

        assemble_rtf(&[&first, &second], &output).unwrap();
        let combined = fs::read_to_string(&output).unwrap();

        // One header, page break between bodies, single closing brace
        assert_eq!(combined.matches("{\\fonttbl").count(), 1);
        assert_eq!(combined.matches("\\page").count(), 1);
        assert!(combined.contains("Content 1"));
        assert!(combined.contains("Content 2"));
        let trimmed = combined.trim_end();
        assert!(trimmed.ends_with('}'));
        assert!(!trimmed.ends_with("}\n}"));

        let body_1 = combined.find("Content 1").unwrap();
        let page = combined.find("\\page").unwrap();
        let body_2 = combined.find("Content 2").unwrap();
        assert!(body_1 < page && page < body_2);
    }

    #[test]
    fn test_assemble_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.rtf");
        let result = assemble_rtf::<&Path, _>(&[], &output);
        assert!(matches!(result, Err(Error::AssemblyEmptyInput)));
        assert!(!output.exists());
    }

    #[test]
    fn test_assemble_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("a.rtf");
        fs::write(&present, sample_document("x", 0)).unwrap();
        let missing = dir.path().join("missing.rtf");
        let output = dir.path().join("out.rtf");

        let result = assemble_rtf(&[&present, &missing], &output);
        assert!(matches!(result, Err(Error::AssemblyFileMissing(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_single_file_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.rtf");
        let output = dir.path().join("out.rtf");
        fs::write(&input, sample_document("Only", 0)).unwrap();

        assemble_rtf(&[&input], &output).unwrap();
        let combined = fs::read_to_string(&output).unwrap();
        assert!(combined.contains("Only"));
        assert!(!combined.contains("\\page"));
        assert_eq!(combined.matches("{\\fonttbl").count(), 1);
    }

    #[test]
    fn test_assemble_encoded_documents() {
        use crate::frame::DataFrame;
        use crate::RtfDocument;

        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("t1.rtf");
        let second = dir.path().join("t2.rtf");
        let output = dir.path().join("combined.rtf");

        let df = DataFrame::from_columns(vec![("A", vec!["1"]), ("B", vec!["2"])]).unwrap();
        RtfDocument::new(df.clone()).write_rtf(&first).unwrap();
        RtfDocument::new(df).write_rtf(&second).unwrap();

        assemble_rtf(&[&first, &second], &output).unwrap();
        let combined = fs::read_to_string(&output).unwrap();
        assert_eq!(combined.matches("{\\fonttbl").count(), 1);
        assert!(combined.contains("\\page"));
    }
}

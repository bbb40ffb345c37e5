//! Character substitution for RTF text content.
//!
//! Text passes through up to three stages before landing in a cell or
//! paragraph:
//!
//! 1. **LaTeX conversion** (optional, per the component's `text_convert`
//!    flag): every known `\command` is replaced by its Unicode character.
//! 2. **RTF token substitution** (always): field codes (`\pagenumber`,
//!    `\totalpage`, `\pagefield`), comparison operators (`>=`, `<=`),
//!    superscript/subscript markers (`^`, `_`), and newlines become RTF
//!    control words.
//! 3. **Unicode escaping** (always): non-ASCII code points are emitted as
//!    `\uN*` with N the signed 16-bit value, `*` the fallback character.
//!
//! Backslashes and braces pass through untouched so callers can embed raw
//! RTF groups (superscript groups, field instructions) inside text.

mod symbols;

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use symbols::LATEX_SYMBOLS;

/// RTF token substitutions applied to every rendered text.
const RTF_TOKENS: &[(&str, &str)] = &[
    ("\\pagenumber", "\\chpgn "),
    ("\\totalpage", "\\totalpage "),
    ("\\pagefield", "{\\field{\\*\\fldinst NUMPAGES }} "),
    (">=", "\\geq "),
    ("<=", "\\leq "),
    ("^", "\\super "),
    ("_", "\\sub "),
    ("\n", "\\line "),
];

static LATEX_MATCHER: Lazy<(AhoCorasick, Vec<&'static str>)> = Lazy::new(|| {
    let matcher = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(LATEX_SYMBOLS.iter().map(|(cmd, _)| *cmd))
        .expect("latex symbol automaton");
    let replacements = LATEX_SYMBOLS.iter().map(|(_, repl)| *repl).collect();
    (matcher, replacements)
});

static TOKEN_MATCHER: Lazy<(AhoCorasick, Vec<&'static str>)> = Lazy::new(|| {
    let matcher = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(RTF_TOKENS.iter().map(|(token, _)| *token))
        .expect("rtf token automaton");
    let replacements = RTF_TOKENS.iter().map(|(_, repl)| *repl).collect();
    (matcher, replacements)
});

/// Replace every known LaTeX command with its Unicode character.
///
/// Unknown commands pass through unchanged. Matching is leftmost-longest,
/// so `\int` is never split into `\in` + `t`.
pub fn convert_latex(text: &str) -> String {
    let (matcher, replacements) = &*LATEX_MATCHER;
    matcher.replace_all(text, replacements)
}

/// Apply RTF token substitution and escape non-ASCII code points.
pub fn escape_rtf(text: &str) -> String {
    let (matcher, replacements) = &*TOKEN_MATCHER;
    let substituted = matcher.replace_all(text, replacements);
    escape_unicode(&substituted)
}

/// Full substitution pipeline for one piece of text content.
pub fn substitute(text: &str, latex: bool) -> String {
    if latex {
        escape_rtf(&convert_latex(text))
    } else {
        escape_rtf(text)
    }
}

/// Emit non-ASCII code points as `\uN*` control words.
///
/// N is the signed 16-bit representation per RTF convention; code points
/// above the BMP are emitted as a UTF-16 surrogate pair. The `*` fallback
/// character stands in for readers without Unicode support.
fn escape_unicode(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut buf = itoa::Buffer::new();
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                out.push_str("\\u");
                out.push_str(buf.format(*unit as i16));
                out.push('*');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_letters() {
        assert_eq!(convert_latex("\\alpha"), "α");
        assert_eq!(convert_latex("\\beta"), "β");
        assert_eq!(convert_latex("\\epsilon"), "ϵ");
        assert_eq!(convert_latex("\\varepsilon"), "ε");
        assert_eq!(convert_latex("\\Gamma\\Delta\\Omega"), "ΓΔΩ");
    }

    #[test]
    fn test_operators_and_relations() {
        assert_eq!(convert_latex("\\pm"), "±");
        assert_eq!(convert_latex("\\leq"), "≤");
        assert_eq!(convert_latex("\\geq"), "≥");
        assert_eq!(convert_latex("\\neq"), "≠");
        assert_eq!(convert_latex("\\infty"), "∞");
        assert_eq!(convert_latex("Mean \\pm SD"), "Mean ± SD");
    }

    #[test]
    fn test_leftmost_longest() {
        // \int and \in share a prefix; the longer command must win
        assert_eq!(convert_latex("\\int"), "∫");
        assert_eq!(convert_latex("\\in"), "∈");
        assert_eq!(convert_latex("\\sim"), "∼");
        assert_eq!(convert_latex("\\simeq"), "≃");
    }

    #[test]
    fn test_braced_commands() {
        assert_eq!(convert_latex("\\mathbb{R}"), "ℝ");
        assert_eq!(convert_latex("x \\in \\mathbb{N}"), "x ∈ ℕ");
    }

    #[test]
    fn test_unknown_commands_pass_through() {
        assert_eq!(convert_latex("\\unknown"), "\\unknown");
        assert_eq!(convert_latex("a\\path\\to\\file"), "a\\path\\to\\file");
    }

    #[test]
    fn test_dagger() {
        assert_eq!(convert_latex("\\dagger"), "\u{2020}");
        let escaped = substitute("{^\\dagger}footnote", true);
        assert!(escaped.contains("\\u8224*"));
        assert!(escaped.contains("\\super "));
        assert!(!escaped.contains("\\dagger"));
    }

    #[test]
    fn test_comparison_operators() {
        let out = escape_rtf("value >= 10 and value <= 20");
        assert!(out.contains("\\geq "));
        assert!(out.contains("\\leq "));
        assert!(!out.contains(">="));
    }

    #[test]
    fn test_super_and_sub_markers() {
        let out = escape_rtf("x^2 + y_1");
        assert_eq!(out, "x\\super 2 + y\\sub 1");
    }

    #[test]
    fn test_field_codes() {
        let out = escape_rtf("Page \\pagenumber of \\totalpage");
        assert!(out.contains("\\chpgn "));
        assert!(out.contains("\\totalpage "));

        let out = escape_rtf("Total: \\pagefield");
        assert!(out.contains("{\\field{\\*\\fldinst NUMPAGES }} "));
    }

    #[test]
    fn test_newline_token() {
        assert_eq!(escape_rtf("line 1\nline 2"), "line 1\\line line 2");
    }

    #[test]
    fn test_unicode_escape_signed() {
        // U+2020 DAGGER = 8224, still positive in i16 range
        assert_eq!(escape_rtf("†"), "\\u8224*");
        // U+FFFD = 65533, wraps negative as a signed 16-bit value
        assert_eq!(escape_rtf("\u{FFFD}"), "\\u-3*");
    }

    #[test]
    fn test_surrogate_pair() {
        // U+1D400 MATHEMATICAL BOLD CAPITAL A needs a surrogate pair
        let out = escape_rtf("\u{1D400}");
        assert_eq!(out, "\\u-10187*\\u-9216*");
    }

    #[test]
    fn test_round_trip_plain_text() {
        let plain = "A simple sentence with numbers 123 and (parens).";
        assert_eq!(convert_latex(escape_rtf(plain).as_str()), plain);
    }

    #[test]
    fn test_latex_idempotent_without_backslash() {
        let text = "no commands here, just text";
        assert_eq!(convert_latex(&convert_latex(text)), convert_latex(text));
    }

    #[test]
    fn test_disabled_conversion() {
        let out = substitute("\\alpha + \\beta", false);
        assert_eq!(out, "\\alpha + \\beta");
    }
}

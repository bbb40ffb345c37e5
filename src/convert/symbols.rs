//! LaTeX command to Unicode character table.
//!
//! The working set of symbols used in clinical and statistical reporting:
//! Greek letters, relational and binary operators, arrows, logic and set
//! symbols, blackboard-bold letters, and typographic marks. Braced forms
//! such as `\mathbb{R}` appear as explicit keys. Replacement is
//! leftmost-longest, so `\leq` wins over a hypothetical `\le` prefix and
//! `\int` wins over `\in`.

/// (command, replacement) pairs. Order is irrelevant; the automaton applies
/// leftmost-longest matching.
pub(crate) const LATEX_SYMBOLS: &[(&str, &str)] = &[
    // Greek lowercase
    ("\\alpha", "\u{03B1}"),
    ("\\beta", "\u{03B2}"),
    ("\\gamma", "\u{03B3}"),
    ("\\delta", "\u{03B4}"),
    ("\\epsilon", "\u{03F5}"),
    ("\\varepsilon", "\u{03B5}"),
    ("\\zeta", "\u{03B6}"),
    ("\\eta", "\u{03B7}"),
    ("\\theta", "\u{03B8}"),
    ("\\vartheta", "\u{03D1}"),
    ("\\iota", "\u{03B9}"),
    ("\\kappa", "\u{03BA}"),
    ("\\lambda", "\u{03BB}"),
    ("\\mu", "\u{03BC}"),
    ("\\nu", "\u{03BD}"),
    ("\\xi", "\u{03BE}"),
    ("\\pi", "\u{03C0}"),
    ("\\varpi", "\u{03D6}"),
    ("\\rho", "\u{03C1}"),
    ("\\varrho", "\u{03F1}"),
    ("\\sigma", "\u{03C3}"),
    ("\\varsigma", "\u{03C2}"),
    ("\\tau", "\u{03C4}"),
    ("\\upsilon", "\u{03C5}"),
    ("\\phi", "\u{03D5}"),
    ("\\varphi", "\u{03C6}"),
    ("\\chi", "\u{03C7}"),
    ("\\psi", "\u{03C8}"),
    ("\\omega", "\u{03C9}"),
    // Greek uppercase
    ("\\Gamma", "\u{0393}"),
    ("\\Delta", "\u{0394}"),
    ("\\Theta", "\u{0398}"),
    ("\\Lambda", "\u{039B}"),
    ("\\Xi", "\u{039E}"),
    ("\\Pi", "\u{03A0}"),
    ("\\Sigma", "\u{03A3}"),
    ("\\Upsilon", "\u{03A5}"),
    ("\\Phi", "\u{03A6}"),
    ("\\Psi", "\u{03A8}"),
    ("\\Omega", "\u{03A9}"),
    // Binary operators
    ("\\pm", "\u{00B1}"),
    ("\\mp", "\u{2213}"),
    ("\\times", "\u{00D7}"),
    ("\\div", "\u{00F7}"),
    ("\\cdot", "\u{22C5}"),
    ("\\ast", "\u{2217}"),
    ("\\star", "\u{22C6}"),
    ("\\circ", "\u{2218}"),
    ("\\oplus", "\u{2295}"),
    ("\\ominus", "\u{2296}"),
    ("\\otimes", "\u{2297}"),
    ("\\oslash", "\u{2298}"),
    ("\\odot", "\u{2299}"),
    // Large operators
    ("\\sum", "\u{2211}"),
    ("\\prod", "\u{220F}"),
    ("\\int", "\u{222B}"),
    ("\\oint", "\u{222E}"),
    ("\\partial", "\u{2202}"),
    ("\\nabla", "\u{2207}"),
    ("\\surd", "\u{221A}"),
    ("\\sqrt", "\u{221A}"),
    // Relations
    ("\\infty", "\u{221E}"),
    ("\\propto", "\u{221D}"),
    ("\\approx", "\u{2248}"),
    ("\\cong", "\u{2245}"),
    ("\\simeq", "\u{2243}"),
    ("\\sim", "\u{223C}"),
    ("\\equiv", "\u{2261}"),
    ("\\neq", "\u{2260}"),
    ("\\leq", "\u{2264}"),
    ("\\geq", "\u{2265}"),
    ("\\ll", "\u{226A}"),
    ("\\gg", "\u{226B}"),
    ("\\prec", "\u{227A}"),
    ("\\succ", "\u{227B}"),
    // Sets and logic
    ("\\subset", "\u{2282}"),
    ("\\supset", "\u{2283}"),
    ("\\subseteq", "\u{2286}"),
    ("\\supseteq", "\u{2287}"),
    ("\\in", "\u{2208}"),
    ("\\ni", "\u{220B}"),
    ("\\notin", "\u{2209}"),
    ("\\cup", "\u{222A}"),
    ("\\cap", "\u{2229}"),
    ("\\setminus", "\u{2216}"),
    ("\\emptyset", "\u{2205}"),
    ("\\varnothing", "\u{2205}"),
    ("\\wedge", "\u{2227}"),
    ("\\vee", "\u{2228}"),
    ("\\forall", "\u{2200}"),
    ("\\exists", "\u{2203}"),
    ("\\nexists", "\u{2204}"),
    ("\\vdash", "\u{22A2}"),
    ("\\models", "\u{22A8}"),
    ("\\perp", "\u{22A5}"),
    ("\\parallel", "\u{2225}"),
    ("\\angle", "\u{2220}"),
    ("\\triangle", "\u{25B3}"),
    // Arrows
    ("\\leftarrow", "\u{2190}"),
    ("\\rightarrow", "\u{2192}"),
    ("\\uparrow", "\u{2191}"),
    ("\\downarrow", "\u{2193}"),
    ("\\leftrightarrow", "\u{2194}"),
    ("\\updownarrow", "\u{2195}"),
    ("\\Leftarrow", "\u{21D0}"),
    ("\\Rightarrow", "\u{21D2}"),
    ("\\Uparrow", "\u{21D1}"),
    ("\\Downarrow", "\u{21D3}"),
    ("\\Leftrightarrow", "\u{21D4}"),
    ("\\mapsto", "\u{21A6}"),
    // Blackboard bold
    ("\\mathbb{C}", "\u{2102}"),
    ("\\mathbb{H}", "\u{210D}"),
    ("\\mathbb{N}", "\u{2115}"),
    ("\\mathbb{P}", "\u{2119}"),
    ("\\mathbb{Q}", "\u{211A}"),
    ("\\mathbb{R}", "\u{211D}"),
    ("\\mathbb{Z}", "\u{2124}"),
    // Script and special letters
    ("\\aleph", "\u{2135}"),
    ("\\hbar", "\u{210F}"),
    ("\\ell", "\u{2113}"),
    ("\\wp", "\u{2118}"),
    ("\\Re", "\u{211C}"),
    ("\\Im", "\u{2111}"),
    // Dots
    ("\\ldots", "\u{2026}"),
    ("\\cdots", "\u{22EF}"),
    ("\\vdots", "\u{22EE}"),
    ("\\ddots", "\u{22F1}"),
    ("\\dots", "\u{2026}"),
    // Typographic marks
    ("\\dagger", "\u{2020}"),
    ("\\ddagger", "\u{2021}"),
    ("\\prime", "\u{2032}"),
    ("\\bullet", "\u{2022}"),
    ("\\degree", "\u{00B0}"),
    ("\\textdegree", "\u{00B0}"),
    ("\\copyright", "\u{00A9}"),
    ("\\pounds", "\u{00A3}"),
    ("\\euro", "\u{20AC}"),
    ("\\S", "\u{00A7}"),
    ("\\P", "\u{00B6}"),
    ("\\%", "%"),
    ("\\&", "&"),
    ("\\#", "#"),
];

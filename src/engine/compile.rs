//! Pattern validation and lowering.
//!
//! A `Pattern` tree is checked once, then rendered into `regex` crate syntax
//! and compiled. The rendering is mechanical:
//!
//! ```text
//! Literal(Sensitive)   "P.O."      -> P\.O\.
//! Literal(Insensitive) "box"       -> [Bb][Oo][Xx]
//! Class {set, 0, 2}    [, ]        -> [, ]{0,2}
//! Sequence [a, b]                  -> ab
//! Alternation [a, b]               -> (?:a|b)
//! Optional a                       -> (?:a)?
//! Repeat {a, 1, 5}                 -> (?:a){1,5}
//! Labeled {name, a}                -> (?P<name>a)
//! WordBoundary                     -> \b
//! ```
//!
//! Case folding never uses the engine's `(?i)` flag: insensitive literals are
//! expanded letter by letter, which keeps them ASCII-only and lets exact-case
//! branches sit next to them in the same alternation.
//!
//! ## Invariants checked by [`validate`]
//!
//! - Every bound is finite: `max <= MAX_REPEAT`, `min <= max`, `max > 0`.
//! - Labels are valid capture names and unique within the tree.
//! - Alternations, literals and character sets are non-empty.
//! - Nesting depth stays below `MAX_DEPTH`.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::error::ProfileError;
use crate::grammar::{Case, CharSet, ClassItem, Pattern};

/// Largest repetition bound accepted; anything above is treated as unbounded.
pub const MAX_REPEAT: u32 = 255;

/// Deepest nesting accepted.
pub const MAX_DEPTH: usize = 64;

/// Limits handed to the regex engine when compiling a lowered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Approximate cap (bytes) on the compiled program.
    pub size_limit: usize,
    /// Approximate cap (bytes) on the lazy DFA cache, per search thread.
    pub dfa_size_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { size_limit: 32 * (1 << 20), dfa_size_limit: 8 * (1 << 20) }
    }
}

/// Check the structural invariants of `pattern`.
pub fn validate(pattern: &Pattern) -> Result<(), ProfileError> {
    let mut labels = HashSet::new();
    check(pattern, 0, &mut labels)
}

fn check<'a>(pattern: &'a Pattern, depth: usize, labels: &mut HashSet<&'a str>) -> Result<(), ProfileError> {
    if depth > MAX_DEPTH {
        return Err(ProfileError::TooDeep(MAX_DEPTH));
    }

    match pattern {
        Pattern::Literal { text, .. } => {
            if text.is_empty() {
                return Err(ProfileError::EmptyLiteral);
            }
        }
        Pattern::Class { set, min, max } => {
            check_set(set)?;
            check_bounds(*min, *max)?;
        }
        Pattern::Sequence(children) => {
            for child in children.iter() {
                check(child, depth + 1, labels)?;
            }
        }
        Pattern::Alternation(children) => {
            if children.is_empty() {
                return Err(ProfileError::EmptyAlternation);
            }
            for child in children.iter() {
                check(child, depth + 1, labels)?;
            }
        }
        Pattern::Optional(child) => check(child, depth + 1, labels)?,
        Pattern::Repeat { pattern, min, max } => {
            check_bounds(*min, *max)?;
            check(pattern, depth + 1, labels)?;
        }
        Pattern::Labeled { name, pattern } => {
            if !is_valid_label(name) {
                return Err(ProfileError::InvalidLabel(name.to_string()));
            }
            if !labels.insert(&**name) {
                return Err(ProfileError::DuplicateLabel(name.to_string()));
            }
            check(pattern, depth + 1, labels)?;
        }
        Pattern::WordBoundary => {}
    }
    Ok(())
}

fn check_set(set: &CharSet) -> Result<(), ProfileError> {
    if set.is_empty() {
        return Err(ProfileError::EmptyCharSet);
    }
    for item in set.items() {
        if let ClassItem::Range(lo, hi) = *item {
            if lo > hi {
                return Err(ProfileError::InvalidRange { lo, hi });
            }
        }
    }
    Ok(())
}

fn check_bounds(min: u32, max: u32) -> Result<(), ProfileError> {
    if max > MAX_REPEAT {
        return Err(ProfileError::UnboundedRepeat { max, limit: MAX_REPEAT });
    }
    if max == 0 || min > max {
        return Err(ProfileError::InvalidBounds { min, max });
    }
    Ok(())
}

/// Capture names: ASCII letter or `_` first, then letters, digits, `_`.
fn is_valid_label(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render `pattern` as `regex` crate syntax.
///
/// The output is only meaningful for patterns that pass [`validate`].
pub fn lower(pattern: &Pattern) -> String {
    let mut out = String::new();
    push_pattern(&mut out, pattern);
    out
}

fn push_pattern(out: &mut String, pattern: &Pattern) {
    match pattern {
        Pattern::Literal { text, case } => push_literal(out, text, *case),
        Pattern::Class { set, min, max } => {
            push_set(out, set);
            push_bounds(out, *min, *max);
        }
        Pattern::Sequence(children) => {
            for child in children.iter() {
                push_pattern(out, child);
            }
        }
        Pattern::Alternation(children) => {
            out.push_str("(?:");
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push('|');
                }
                push_pattern(out, child);
            }
            out.push(')');
        }
        Pattern::Optional(child) => {
            out.push_str("(?:");
            push_pattern(out, child);
            out.push_str(")?");
        }
        Pattern::Repeat { pattern, min, max } => {
            out.push_str("(?:");
            push_pattern(out, pattern);
            out.push(')');
            push_bounds(out, *min, *max);
        }
        Pattern::Labeled { name, pattern } => {
            out.push_str("(?P<");
            out.push_str(name);
            out.push('>');
            push_pattern(out, pattern);
            out.push(')');
        }
        Pattern::WordBoundary => out.push_str(r"\b"),
    }
}

fn push_literal(out: &mut String, text: &str, case: Case) {
    for c in text.chars() {
        if case == Case::Insensitive && c.is_ascii_alphabetic() {
            out.push('[');
            out.push(c.to_ascii_uppercase());
            out.push(c.to_ascii_lowercase());
            out.push(']');
        } else {
            push_char(out, c);
        }
    }
}

fn push_set(out: &mut String, set: &CharSet) {
    out.push('[');
    for item in set.items() {
        match *item {
            ClassItem::Char(c) => push_char(out, c),
            ClassItem::Range(lo, hi) => {
                push_char(out, lo);
                out.push('-');
                push_char(out, hi);
            }
        }
    }
    out.push(']');
}

fn push_char(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

fn push_bounds(out: &mut String, min: u32, max: u32) {
    match (min, max) {
        (1, 1) => {}
        (0, 1) => out.push('?'),
        (n, m) if n == m => out.push_str(&format!("{{{}}}", n)),
        (n, m) => out.push_str(&format!("{{{},{}}}", n, m)),
    }
}

/// Validate, lower and compile `pattern`.
pub fn compile(pattern: &Pattern, options: &CompileOptions) -> Result<Regex, ProfileError> {
    validate(pattern)?;
    let source = lower(pattern);
    log::trace!(target: "addrscan::compile", "lowered pattern ({} bytes): {}", source.len(), source);

    RegexBuilder::new(&source)
        .size_limit(options.size_limit)
        .dfa_size_limit(options.dfa_size_limit)
        .build()
        .map_err(|e| ProfileError::Compile(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::*;

    #[test]
    fn lowers_each_node_kind() {
        assert_eq!(lower(&literal("P.O.")), r"P\.O\.");
        assert_eq!(lower(&word("Box")), "[Bb][Oo][Xx]");
        assert_eq!(lower(&word("p.o")), r"[Pp]\.[Oo]");
        assert_eq!(lower(&class(CharSet::new().chars(", "), 0, 2)), "[, ]{0,2}");
        assert_eq!(lower(&class(CharSet::digits(), 5, 5)), "[0-9]{5}");
        assert_eq!(lower(&class(CharSet::letters(), 0, 1)), "[A-Za-z]?");
        assert_eq!(lower(&seq![literal("a"), literal("b")]), "ab");
        assert_eq!(lower(&alt![literal("a"), literal("b")]), "(?:a|b)");
        assert_eq!(lower(&opt(literal("ab"))), "(?:ab)?");
        assert_eq!(lower(&repeat(literal("a"), 1, 5)), "(?:a){1,5}");
        assert_eq!(lower(&label("x", literal("a"))), "(?P<x>a)");
        assert_eq!(lower(&boundary()), r"\b");
    }

    #[test]
    fn escapes_class_metacharacters() {
        let set = CharSet::letters().chars("#&-").range('0', '9');
        assert_eq!(lower(&class(set, 1, 7)), r"[A-Za-z\#\&\-0-9]{1,7}");
    }

    #[test]
    fn insensitive_literal_is_scoped_to_its_letters() {
        let re = compile(&alt![literal("IL"), word("illinois")], &CompileOptions::default()).unwrap();
        assert!(re.is_match("IL"));
        assert!(re.is_match("iLLinoIS"));
        assert!(!re.is_match("Il"));
    }

    #[test]
    fn rejects_structural_errors() {
        assert_eq!(validate(&literal("")), Err(ProfileError::EmptyLiteral));
        assert_eq!(validate(&alt(Vec::new())), Err(ProfileError::EmptyAlternation));
        assert_eq!(validate(&class(CharSet::new(), 1, 1)), Err(ProfileError::EmptyCharSet));
        assert_eq!(
            validate(&class(CharSet::new().range('z', 'a'), 1, 1)),
            Err(ProfileError::InvalidRange { lo: 'z', hi: 'a' })
        );
        assert_eq!(validate(&repeat(literal("a"), 3, 2)), Err(ProfileError::InvalidBounds { min: 3, max: 2 }));
        assert_eq!(validate(&repeat(literal("a"), 0, 0)), Err(ProfileError::InvalidBounds { min: 0, max: 0 }));
        assert_eq!(
            validate(&class(CharSet::digits(), 1, 1000)),
            Err(ProfileError::UnboundedRepeat { max: 1000, limit: MAX_REPEAT })
        );
        assert_eq!(validate(&label("1st", literal("a"))), Err(ProfileError::InvalidLabel("1st".into())));
        assert_eq!(validate(&label("a-b", literal("a"))), Err(ProfileError::InvalidLabel("a-b".into())));
    }

    #[test]
    fn rejects_duplicate_labels_anywhere_in_the_tree() {
        let p = seq![label("a", literal("x")), alt![literal("y"), opt(label("a", literal("z")))]];
        assert_eq!(validate(&p), Err(ProfileError::DuplicateLabel("a".into())));
    }

    #[test]
    fn rejects_deep_nesting() {
        let mut p = literal("a");
        for _ in 0..=MAX_DEPTH {
            p = opt(p);
        }
        assert_eq!(validate(&p), Err(ProfileError::TooDeep(MAX_DEPTH)));
    }

    #[test]
    fn size_limit_is_enforced() {
        let big = repeat(class(CharSet::alphanumeric(), 1, 200), 200, 200);
        let err = compile(&big, &CompileOptions { size_limit: 1024, dfa_size_limit: 1024 }).unwrap_err();
        assert!(matches!(err, ProfileError::Compile(_)));
    }

    #[test]
    fn captures_use_label_names() {
        let p = seq![label("num", class(CharSet::digits(), 1, 5)), literal(" "), label("street", word("main"))];
        let re = compile(&p, &CompileOptions::default()).unwrap();
        let caps = re.captures("at 42 MAIN").unwrap();
        assert_eq!(&caps["num"], "42");
        assert_eq!(&caps["street"], "MAIN");
    }
}

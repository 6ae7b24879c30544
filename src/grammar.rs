//! Grammar expression trees.
//!
//! Every rule in this crate is a [`Pattern`]: a small, immutable tree whose
//! leaves match text (literals, character classes, boundaries) and whose inner
//! nodes combine them (sequence, alternation, optional, bounded repetition,
//! labeled capture).
//!
//! ```text
//! label("street_number",
//!     seq[ boundary,
//!          alt[ word-form number ,
//!               seq[ digits{1,5}, opt(lot suffix), " " ] ] ])
//! ```
//!
//! Trees are built with the combinators in this module (or the `seq!`/`alt!`
//! macros) and are never mutated afterwards. Children live behind `Arc`, so a
//! sub-rule can be reused in several parents without copying it.
//!
//! Nothing here knows about the matching engine. Lowering to the host regex
//! syntax and checking the structural invariants (finite bounds, unique
//! labels) happens in `engine::compile`.

use std::fmt;
use std::sync::Arc;

/// Case handling for a [`Pattern::Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Match the text exactly as written.
    Sensitive,
    /// Each ASCII letter position accepts both its upper- and lower-case form.
    Insensitive,
}

/// One member of a [`CharSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassItem {
    Char(char),
    /// Inclusive range.
    Range(char, char),
}

/// A set of characters, matched by a [`Pattern::Class`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSet {
    items: Vec<ClassItem>,
}

impl CharSet {
    /// An empty set. Build it up with [`range`](Self::range) and
    /// [`chars`](Self::chars).
    pub fn new() -> Self {
        CharSet { items: Vec::new() }
    }

    pub fn range(mut self, lo: char, hi: char) -> Self {
        self.items.push(ClassItem::Range(lo, hi));
        self
    }

    /// Add every character of `chars` individually.
    pub fn chars(mut self, chars: &str) -> Self {
        self.items.extend(chars.chars().map(ClassItem::Char));
        self
    }

    /// `0-9`
    pub fn digits() -> Self {
        Self::new().range('0', '9')
    }

    /// `A-Za-z`
    pub fn letters() -> Self {
        Self::new().range('A', 'Z').range('a', 'z')
    }

    /// `A-Za-z0-9`
    pub fn alphanumeric() -> Self {
        Self::letters().range('0', '9')
    }

    pub fn items(&self) -> &[ClassItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.items.iter().any(|item| match *item {
            ClassItem::Char(x) => x == c,
            ClassItem::Range(lo, hi) => lo <= c && c <= hi,
        })
    }
}

/// An immutable grammar node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Literal {
        text: Arc<str>,
        case: Case,
    },
    /// Between `min` and `max` characters drawn from `set`.
    Class {
        set: CharSet,
        min: u32,
        max: u32,
    },
    Sequence(Arc<[Pattern]>),
    /// Ordered choice: earlier branches win when several could match.
    Alternation(Arc<[Pattern]>),
    Optional(Arc<Pattern>),
    Repeat {
        pattern: Arc<Pattern>,
        min: u32,
        max: u32,
    },
    /// Capture group exposed to callers as a field called `name`.
    Labeled {
        name: Arc<str>,
        pattern: Arc<Pattern>,
    },
    /// Zero-width assertion: a transition between a word and a non-word
    /// character (or the start/end of the text).
    WordBoundary,
}

impl Pattern {
    /// Label name when this node is a [`Pattern::Labeled`].
    pub fn label_name(&self) -> Option<&str> {
        match self {
            Pattern::Labeled { name, .. } => Some(name),
            _ => None,
        }
    }

    /// All label names in this tree, in pre-order (duplicates included).
    pub fn labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_labels(&mut out);
        out
    }

    fn collect_labels<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Pattern::Literal { .. } | Pattern::Class { .. } | Pattern::WordBoundary => {}
            Pattern::Sequence(children) | Pattern::Alternation(children) => {
                for child in children.iter() {
                    child.collect_labels(out);
                }
            }
            Pattern::Optional(child) | Pattern::Repeat { pattern: child, .. } => child.collect_labels(out),
            Pattern::Labeled { name, pattern } => {
                out.push(name);
                pattern.collect_labels(out);
            }
        }
    }

    /// Shortest text (in bytes) this pattern can match.
    ///
    /// Used as a cheap "input is too short" gate before running the engine.
    pub fn min_len(&self) -> usize {
        match self {
            Pattern::Literal { text, .. } => text.len(),
            Pattern::Class { min, .. } => *min as usize,
            Pattern::Sequence(children) => children.iter().map(Pattern::min_len).sum(),
            Pattern::Alternation(children) => children.iter().map(Pattern::min_len).min().unwrap_or(0),
            Pattern::Optional(_) | Pattern::WordBoundary => 0,
            Pattern::Repeat { pattern, min, .. } => pattern.min_len() * (*min as usize),
            Pattern::Labeled { pattern, .. } => pattern.min_len(),
        }
    }
}

impl fmt::Display for Pattern {
    /// Compact, human-readable rendering (not the engine syntax).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal { text, case: Case::Sensitive } => write!(f, "{:?}", text),
            Pattern::Literal { text, case: Case::Insensitive } => write!(f, "i{:?}", text),
            Pattern::Class { set, min, max } => {
                f.write_str("[")?;
                for item in set.items() {
                    match item {
                        ClassItem::Char(c) => write!(f, "{}", c.escape_debug())?,
                        ClassItem::Range(lo, hi) => write!(f, "{}-{}", lo.escape_debug(), hi.escape_debug())?,
                    }
                }
                write!(f, "]{{{},{}}}", min, max)
            }
            Pattern::Sequence(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
            Pattern::Alternation(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
            Pattern::Optional(child) => write!(f, "{}?", child),
            Pattern::Repeat { pattern, min, max } => write!(f, "{}{{{},{}}}", pattern, min, max),
            Pattern::Labeled { name, pattern } => write!(f, "<{}:{}>", name, pattern),
            Pattern::WordBoundary => f.write_str("\\b"),
        }
    }
}

// --- Combinators -------------------------------------------------------------

/// Exact-case literal.
pub fn literal(text: &str) -> Pattern {
    Pattern::Literal { text: Arc::from(text), case: Case::Sensitive }
}

/// Case-insensitive literal ("word" matches "Word", "WORD", "wOrD").
pub fn word(text: &str) -> Pattern {
    Pattern::Literal { text: Arc::from(text), case: Case::Insensitive }
}

pub fn class(set: CharSet, min: u32, max: u32) -> Pattern {
    Pattern::Class { set, min, max }
}

/// Exactly one character from `set`.
pub fn one_of(set: CharSet) -> Pattern {
    class(set, 1, 1)
}

pub fn seq(parts: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Sequence(parts.into_iter().collect())
}

pub fn alt(branches: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Alternation(branches.into_iter().collect())
}

pub fn opt(pattern: Pattern) -> Pattern {
    Pattern::Optional(Arc::new(pattern))
}

pub fn repeat(pattern: Pattern, min: u32, max: u32) -> Pattern {
    Pattern::Repeat { pattern: Arc::new(pattern), min, max }
}

pub fn label(name: &str, pattern: Pattern) -> Pattern {
    Pattern::Labeled { name: Arc::from(name), pattern: Arc::new(pattern) }
}

pub fn boundary() -> Pattern {
    Pattern::WordBoundary
}

/// Alternation of case-insensitive words, in the given order.
pub fn any_word(words: &[&str]) -> Pattern {
    alt(words.iter().map(|w| word(w)))
}

/// Alternation of exact-case literals, in the given order.
pub fn any_literal(words: &[&str]) -> Pattern {
    alt(words.iter().map(|w| literal(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_collected_in_preorder() {
        let p = label("outer", seq![label("a", literal("x")), opt(label("b", word("y")))]);
        assert_eq!(p.labels(), vec!["outer", "a", "b"]);
        assert_eq!(p.label_name(), Some("outer"));
    }

    #[test]
    fn min_len_follows_structure() {
        let p = seq![
            literal("ab"),
            alt![literal("xyz"), literal("q")],
            opt(literal("zzz")),
            repeat(literal("k"), 2, 4),
            class(CharSet::digits(), 3, 5),
        ];
        assert_eq!(p.min_len(), 2 + 1 + 0 + 2 + 3);
    }

    #[test]
    fn charset_membership() {
        let set = CharSet::letters().chars("#&-");
        assert!(set.contains('q'));
        assert!(set.contains('Q'));
        assert!(set.contains('&'));
        assert!(!set.contains('5'));
        assert!(CharSet::new().is_empty());
    }

    #[test]
    fn clones_share_children() {
        let inner = repeat(word("and "), 0, 4);
        let a = seq![literal("x"), inner.clone()];
        let b = seq![literal("y"), inner];
        match (&a, &b) {
            (Pattern::Sequence(ca), Pattern::Sequence(cb)) => assert_eq!(ca[1], cb[1]),
            _ => unreachable!(),
        }
    }

    #[test]
    fn display_is_readable() {
        let p = label("n", seq![boundary(), word("st"), class(CharSet::new().chars(". ,"), 0, 1)]);
        assert_eq!(p.to_string(), "<n:(\\b i\"st\" [. ,]{0,1})>");
    }
}

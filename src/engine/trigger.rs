//! Trigger scanning (input pre-classification).
//!
//! Before running a compiled matcher over a text, the driver takes a cheap look
//! at the input and asks whether an address could start anywhere in it. Every
//! street grammar begins with a street number, and a street number is either
//! digits or a number word, so a text with neither can be skipped outright.
//!
//! The scan produces two kinds of signals:
//!
//! - **Buckets** (`BucketMask`): cheap booleans derived from the input such as
//!   "contains digits".
//! - **Phrases** (`TriggerInfo::phrases`): the lowercased profile trigger words
//!   (number words for English profiles) that appear as whole words.
//!
//! ## Design notes
//!
//! - This is a *heuristic* scan. False positives are fine because the matcher
//!   still has to match; false negatives are not, so a gate must only name
//!   signals the grammar really requires.
//! - Words are ASCII letter runs, lowercased. The grammar's case folding is
//!   ASCII-only too, so the two agree.

use std::collections::HashSet;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
    }
}

/// Input characteristics detected from the raw input.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
    pub phrases: HashSet<String>,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets and for any of `key_phrases` (which
    /// must already be lowercase) appearing as a whole word.
    pub fn scan(input: &str, key_phrases: &[String]) -> Self {
        let mut buckets = BucketMask::empty();
        let mut phrases = HashSet::new();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if !key_phrases.is_empty() {
            for m in regex!(r"[A-Za-z]+").find_iter(input) {
                let w = m.as_str().to_ascii_lowercase();
                if key_phrases.contains(&w) {
                    phrases.insert(w);
                }
            }
        }

        TriggerInfo { buckets, phrases }
    }

    /// Whether an input with these signals can satisfy a grammar gated on
    /// `gate` (any bucket) or `key_phrases` (any phrase).
    ///
    /// A grammar with neither a gate nor phrases is always eligible.
    pub fn admits(&self, gate: BucketMask, key_phrases: &[String]) -> bool {
        if gate.is_empty() && key_phrases.is_empty() {
            return true;
        }
        self.buckets.intersects(gate) || !self.phrases.is_empty()
    }
}

//! Street-level grammar shared by the English-language locales.

pub mod rules;
pub mod tokens;

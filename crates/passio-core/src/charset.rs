use std::fmt;

use crate::error::{Error, Result};

const NUMERIC: &str = "0123456789";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
const ALL: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
    "!@#$%^&*()_+-=[]{}|;:,.<>?"
);

/// Named charset selectable with `@name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Numeric,
    Lower,
    Upper,
    Alpha,
    Alphanumeric,
    Symbols,
    All,
}

/// Presets in the order they are listed to users.
pub const PRESETS: [Preset; 7] = [
    Preset::Numeric,
    Preset::Lower,
    Preset::Upper,
    Preset::Alpha,
    Preset::Alphanumeric,
    Preset::Symbols,
    Preset::All,
];

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Numeric => "numeric",
            Preset::Lower => "lower",
            Preset::Upper => "upper",
            Preset::Alpha => "alpha",
            Preset::Alphanumeric => "alphanumeric",
            Preset::Symbols => "symbols",
            Preset::All => "all",
        }
    }

    pub fn symbols(self) -> &'static str {
        match self {
            Preset::Numeric => NUMERIC,
            Preset::Lower => LOWER,
            Preset::Upper => UPPER,
            Preset::Alpha => ALPHA,
            Preset::Alphanumeric => ALPHANUMERIC,
            Preset::Symbols => SYMBOLS,
            Preset::All => ALL,
        }
    }

    /// Look up a preset by its name (without the leading `@`).
    pub fn from_name(name: &str) -> Option<Self> {
        PRESETS.into_iter().find(|preset| preset.name() == name)
    }
}

/// Names of every preset, in listing order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.name()).collect()
}

/// Ordered symbols candidate strings are drawn from.
///
/// Duplicates are kept as given; an alphabet built through [`Alphabet::resolve`]
/// or [`Alphabet::new`] is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a literal string, one symbol per `char`.
    pub fn new(literal: &str) -> Result<Self> {
        let symbols: Vec<char> = literal.chars().collect();
        if symbols.is_empty() {
            return Err(Error::EmptyCharset);
        }
        Ok(Self { symbols })
    }

    /// Resolve a user token: `@name` selects a preset, anything else is a literal.
    pub fn resolve(token: &str) -> Result<Self> {
        match token.strip_prefix('@') {
            Some(name) => {
                let preset = Preset::from_name(name).ok_or_else(|| Error::UnknownPreset {
                    name: name.to_string(),
                    available: preset_names(),
                })?;
                Self::new(preset.symbols())
            }
            None => Self::new(token),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

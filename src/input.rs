use std::fmt::{Display, Formatter, Write};
use std::ops::Deref;

use crate::error::TriplesError;

/// Drops a single trailing `\n` or `\r\n`, everything else is kept.
pub fn strip_line(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(s) => s.strip_suffix('\r').unwrap_or(s),
        None => line,
    }
}

/// The string under test, one position per character.
///
/// Positions holding anything other than `1` count as `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitString {
    data: Vec<bool>,
}

impl BitString {
    pub fn new(s: &str) -> Self {
        Self {
            data: s.chars().map(|c| c == '1').collect(),
        }
    }

    /// Takes one input line, dropping a single trailing `\n` or `\r\n`.
    pub fn from_line(line: &str) -> Self {
        Self::new(strip_line(line))
    }

    pub fn parse_strict(s: &str) -> Result<Self, TriplesError> {
        if let Some((idx, ch)) = s.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1')) {
            return Err(TriplesError::InvalidSymbol { idx, ch });
        }

        Ok(Self::new(s))
    }

    pub fn check_len(&self, max: usize) -> Result<(), TriplesError> {
        if self.len() > max {
            Err(TriplesError::InputTooLong {
                len: self.len(),
                max,
            })
        } else {
            Ok(())
        }
    }

    pub fn is_one(&self, idx: usize) -> bool {
        self.data[idx]
    }

    pub fn ones(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// `1` for every `'1'` position, `0` elsewhere.
    pub fn bits(&self) -> Vec<u64> {
        self.data.iter().map(|&b| u64::from(b)).collect()
    }

    pub fn signs(&self) -> SignArray {
        SignArray::from(self)
    }
}

impl Deref for BitString {
    type Target = [bool];

    fn deref(&self) -> &Self::Target {
        self.data.as_slice()
    }
}

impl From<&str> for BitString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.data
            .iter()
            .try_for_each(|&b| f.write_char(if b { '1' } else { '0' }))
    }
}

/// `+1` for `'1'`, `-1` for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignArray {
    signs: Vec<i8>,
}

impl SignArray {
    pub fn as_signal(&self) -> Vec<f64> {
        self.signs.iter().map(|&s| f64::from(s)).collect()
    }
}

impl From<&BitString> for SignArray {
    fn from(value: &BitString) -> Self {
        Self {
            signs: value
                .iter()
                .map(|&b| if b { 1 } else { -1 })
                .collect(),
        }
    }
}

impl Deref for SignArray {
    type Target = [i8];

    fn deref(&self) -> &Self::Target {
        self.signs.as_slice()
    }
}

//! Answer code value object

use crate::core::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// A fixed-width sequence of yes/no answers, one bit per question (Value Object)
///
/// The same type encodes both an attraction's eligibility (one bit per
/// attraction-question, in insertion order) and a group's answers to the
/// group-questions. Backed by a boolean vector rather than a binary string
/// interpreted as an integer, so the width is explicit and leading zeroes
/// cannot be lost.
///
/// # Example
///
/// ```
/// use itinera_domain::AnswerCode;
///
/// let eligibility: AnswerCode = "11".parse().unwrap();
/// let wants_indoor: AnswerCode = "10".parse().unwrap();
/// assert!(eligibility.covers(&wants_indoor));
/// assert!(!wants_indoor.covers(&eligibility));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerCode {
    bits: Vec<bool>,
}

impl AnswerCode {
    /// Create an empty (zero-width) code
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a code from explicit bits
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of answers in this code
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code holds no answers yet
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append one answer bit
    ///
    /// Used when a new question is added to the system: every existing
    /// attraction's code grows by exactly one bit.
    pub fn push(&mut self, answer: bool) {
        self.bits.push(answer);
    }

    /// The answer at `index`, if the code is wide enough
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Iterate over the answer bits in question order
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Bitwise subset test: does this code satisfy every "yes" in `wanted`?
    ///
    /// An attraction qualifies only if it answers yes to every question the
    /// group answered yes to; a "no" from the group places no constraint.
    /// Both codes must have the same width; the caller guards this.
    pub fn covers(&self, wanted: &AnswerCode) -> bool {
        debug_assert_eq!(self.width(), wanted.width());
        wanted
            .bits
            .iter()
            .zip(&self.bits)
            .all(|(wanted_bit, own_bit)| !wanted_bit || *own_bit)
    }
}

impl fmt::Display for AnswerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for AnswerCode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(CatalogError::InvalidAnswerBit(other.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_bits)
    }
}

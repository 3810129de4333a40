use std::fmt;

use clap::{builder::PossibleValue, ValueEnum};

use crate::code_table::{CodeTable, Codeword};
use crate::huffman::HuffmanBuilder;
use crate::probability::{Probability, ProbabilityModel, Symbol};
use crate::shannon_fano::ShannonFanoBuilder;

/// Codeword assigned when the alphabet consists of a single symbol.
/// An empty codeword could not be written to a bitstream.
pub const SINGLE_SYMBOL_CODEWORD: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CodingError {
    EmptyAlphabet,
    InvalidProbability(Symbol, Probability),
}

impl fmt::Display for CodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAlphabet => write!(f, "Alphabet does not contain any symbol"),
            Self::InvalidProbability(symbol, probability) => write!(
                f,
                "Probability {} of symbol '{}' is not a positive number",
                probability, symbol
            ),
        }
    }
}

impl std::error::Error for CodingError {}

pub trait PrefixCodeBuilder {
    fn build(&self, probabilities: &ProbabilityModel) -> Result<CodeTable, CodingError>;
}

/// Codeword to emit for a leaf reached by `path` from the root. A root
/// that is itself a leaf gets [`SINGLE_SYMBOL_CODEWORD`].
pub(crate) fn leaf_codeword(path: &str) -> Codeword {
    if path.is_empty() {
        SINGLE_SYMBOL_CODEWORD.to_owned()
    } else {
        path.to_owned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Huffman,
    ShannonFano,
}

impl Algorithm {
    /// Maps an entry of the interactive menu ("1" or "2") to an algorithm.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Huffman),
            "2" => Some(Self::ShannonFano),
            _ => None,
        }
    }

    pub fn menu_number(&self) -> u8 {
        match self {
            Self::Huffman => 1,
            Self::ShannonFano => 2,
        }
    }

    pub fn build(&self, probabilities: &ProbabilityModel) -> Result<CodeTable, CodingError> {
        match self {
            Self::Huffman => HuffmanBuilder.build(probabilities),
            Self::ShannonFano => ShannonFanoBuilder.build(probabilities),
        }
    }
}

impl ValueEnum for Algorithm {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Huffman, Self::ShannonFano]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Huffman => Some(PossibleValue::new("huffman")),
            Self::ShannonFano => Some(PossibleValue::new("shannon-fano")),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Huffman => write!(f, "Huffman"),
            Self::ShannonFano => write!(f, "Shannon-Fano"),
        }
    }
}

use std::collections::BTreeMap;
use std::fmt;

use crate::probability::{ProbabilityModel, Symbol};

/// Sequence of '0' and '1' characters.
pub type Codeword = String;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codewords: BTreeMap<Symbol, Codeword>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: Symbol, codeword: Codeword) {
        self.codewords.insert(symbol, codeword);
    }

    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codewords.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codewords
            .iter()
            .map(|(&symbol, codeword)| (symbol, codeword.as_str()))
    }

    /// Σ p(s) · |code(s)| over the symbols of `probabilities`.
    /// Symbols without a codeword contribute nothing.
    pub fn expected_length(&self, probabilities: &ProbabilityModel) -> f64 {
        probabilities
            .iter()
            .filter_map(|e| {
                self.get(e.symbol)
                    .map(|codeword| e.probability * codeword.len() as f64)
            })
            .sum()
    }

    pub fn is_prefix_free(&self) -> bool {
        let codewords: Vec<&str> = self.codewords.values().map(String::as_str).collect();
        codewords.iter().enumerate().all(|(i, a)| {
            codewords
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }
}

impl FromIterator<(Symbol, Codeword)> for CodeTable {
    fn from_iter<T: IntoIterator<Item = (Symbol, Codeword)>>(iter: T) -> Self {
        Self {
            codewords: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (symbol, codeword)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", symbol, codeword)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::probability::ProbabilityModel;

    fn table(entries: &[(char, &str)]) -> CodeTable {
        entries
            .iter()
            .map(|&(symbol, codeword)| (symbol, codeword.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_free_table() {
        let code_table = table(&[('a', "0"), ('b', "10"), ('c', "110"), ('d', "111")]);
        assert!(code_table.is_prefix_free());
    }

    #[test]
    fn test_prefix_violation_is_detected() {
        let code_table = table(&[('a', "0"), ('b', "01"), ('c', "11")]);
        assert!(!code_table.is_prefix_free());
    }

    #[test]
    fn test_duplicate_codewords_are_not_prefix_free() {
        let code_table = table(&[('a', "10"), ('b', "10")]);
        assert!(!code_table.is_prefix_free());
    }

    #[test]
    fn test_expected_length() {
        let code_table = table(&[('a', "0"), ('b', "10"), ('c', "11")]);
        let probabilities = ProbabilityModel::from([('a', 0.5), ('b', 0.25), ('c', 0.25)]);
        assert!((code_table.expected_length(&probabilities) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_display_is_ordered_by_symbol() {
        let code_table = table(&[('c', "11"), ('a', "0"), ('b', "10")]);
        assert_eq!(code_table.to_string(), "{a=0, b=10, c=11}");
        assert_eq!(CodeTable::new().to_string(), "{}");
    }
}

use crate::prefix_code::CodingError;

pub type Symbol = char;
pub type Probability = f64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolProbability {
    pub symbol: Symbol,
    pub probability: Probability,
}

impl SymbolProbability {
    pub fn new(symbol: Symbol, probability: Probability) -> Self {
        Self {
            symbol,
            probability,
        }
    }
}

impl From<(Symbol, Probability)> for SymbolProbability {
    fn from(value: (Symbol, Probability)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Mapping from symbol to probability.
///
/// Entries keep the order in which their symbols were first inserted. The
/// builders rely on this order to break ties between equal probabilities,
/// so the same model always yields the same code table. Inserting a symbol
/// a second time replaces its probability but keeps its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilityModel {
    entries: Vec<SymbolProbability>,
}

impl ProbabilityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the model from raw text: every distinct character becomes a
    /// symbol whose probability is its occurrence count divided by the
    /// number of characters in the text.
    pub fn from_text(text: &str) -> Self {
        let mut counts: Vec<(Symbol, usize)> = Vec::new();
        for character in text.chars() {
            match counts.iter_mut().find(|(symbol, _)| *symbol == character) {
                Some((_, count)) => *count += 1,
                None => counts.push((character, 1)),
            }
        }
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        counts
            .into_iter()
            .map(|(symbol, count)| (symbol, count as Probability / total as Probability))
            .collect()
    }

    pub fn insert(&mut self, symbol: Symbol, probability: Probability) {
        match self.entries.iter_mut().find(|e| e.symbol == symbol) {
            Some(entry) => entry.probability = probability,
            None => self
                .entries
                .push(SymbolProbability::new(symbol, probability)),
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<Probability> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.probability)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolProbability> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[SymbolProbability] {
        &self.entries
    }

    /// Checks the preconditions shared by every builder: at least one
    /// symbol, and only finite, strictly positive probabilities.
    pub fn validate(&self) -> Result<(), CodingError> {
        if self.is_empty() {
            return Err(CodingError::EmptyAlphabet);
        }
        match self
            .entries
            .iter()
            .find(|e| !e.probability.is_finite() || e.probability <= 0.0)
        {
            Some(invalid) => Err(CodingError::InvalidProbability(
                invalid.symbol,
                invalid.probability,
            )),
            None => Ok(()),
        }
    }

    /// Shannon entropy in bits per symbol, the lower bound for the expected
    /// length of any prefix code over this model.
    pub fn entropy(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.probability > 0.0)
            .map(|e| -e.probability * e.probability.log2())
            .sum()
    }
}

impl FromIterator<SymbolProbability> for ProbabilityModel {
    fn from_iter<T: IntoIterator<Item = SymbolProbability>>(iter: T) -> Self {
        let mut model = Self::new();
        for entry in iter {
            model.insert(entry.symbol, entry.probability);
        }
        model
    }
}

impl FromIterator<(Symbol, Probability)> for ProbabilityModel {
    fn from_iter<T: IntoIterator<Item = (Symbol, Probability)>>(iter: T) -> Self {
        iter.into_iter().map(SymbolProbability::from).collect()
    }
}

impl<const N: usize> From<[(Symbol, Probability); N]> for ProbabilityModel {
    fn from(value: [(Symbol, Probability); N]) -> Self {
        value.into_iter().collect()
    }
}

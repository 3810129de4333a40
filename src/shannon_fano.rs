use crate::code_table::{CodeTable, Codeword};
use crate::prefix_code::{leaf_codeword, CodingError, PrefixCodeBuilder};
use crate::probability::{ProbabilityModel, Symbol, SymbolProbability};

/// Top-down construction of a prefix code by recursive bisection.
///
/// Symbols are sorted by descending probability, stable with respect to the
/// order of the model, and each range is split where the probability mass
/// of both halves is closest to equal. The result is prefix free but not
/// necessarily optimal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShannonFanoBuilder;

impl PrefixCodeBuilder for ShannonFanoBuilder {
    fn build(&self, probabilities: &ProbabilityModel) -> Result<CodeTable, CodingError> {
        probabilities.validate()?;
        let sorted = sort_by_descending_probability(probabilities);
        let mut table = Vec::with_capacity(sorted.len());
        assign_codewords(&mut table, &sorted, 0, sorted.len() - 1, String::new());
        Ok(table.into_iter().collect())
    }
}

fn sort_by_descending_probability(probabilities: &ProbabilityModel) -> Vec<SymbolProbability> {
    let mut sorted = probabilities.as_slice().to_vec();
    sorted.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    sorted
}

fn assign_codewords(
    table: &mut Vec<(Symbol, Codeword)>,
    sorted: &[SymbolProbability],
    start: usize,
    end: usize,
    prefix: String,
) {
    if start > end {
        return;
    }
    if start == end {
        table.push((sorted[start].symbol, leaf_codeword(&prefix)));
        return;
    }
    let split = split_index(sorted, start, end);
    assign_codewords(table, sorted, start, split, format!("{}0", prefix));
    assign_codewords(table, sorted, split + 1, end, format!("{}1", prefix));
}

/// Last index of the lower half of `sorted[start..=end]`.
///
/// Two running sums grow towards each other from both ends; the smaller
/// one takes the next element. On equal sums the upper half grows. The
/// scan stops when both ends meet.
///
/// For a descending range of positive probabilities the result lies in
/// `start..end`, so both halves are non-empty.
pub fn split_index(sorted: &[SymbolProbability], start: usize, end: usize) -> usize {
    let mut i = start;
    let mut j = end;
    let mut sum1 = sorted[start].probability;
    let mut sum2 = sorted[end].probability;
    while i < j {
        if sum1 < sum2 {
            i += 1;
            sum1 += sorted[i].probability;
        } else {
            j -= 1;
            sum2 += sorted[j].probability;
        }
    }
    i
}

#[cfg(test)]
mod test {
    use super::{sort_by_descending_probability, split_index, ShannonFanoBuilder};
    use crate::huffman::HuffmanBuilder;
    use crate::prefix_code::{CodingError, PrefixCodeBuilder};
    use crate::probability::ProbabilityModel;

    const EPSILON: f64 = 1e-9;

    fn scenario() -> ProbabilityModel {
        ProbabilityModel::from([('a', 0.4), ('b', 0.2), ('c', 0.2), ('d', 0.1), ('e', 0.1)])
    }

    #[test]
    fn test_first_split_of_scenario() {
        let sorted = sort_by_descending_probability(&scenario());
        assert_eq!(split_index(&sorted, 0, 4), 1);
        assert_eq!(split_index(&sorted, 2, 4), 2);
        assert_eq!(split_index(&sorted, 3, 4), 3);
    }

    #[test]
    fn test_scenario_codes() {
        let probabilities = scenario();
        let code_table = ShannonFanoBuilder.build(&probabilities).unwrap();
        assert_eq!(
            code_table.to_string(),
            "{a=00, b=01, c=10, d=110, e=111}"
        );
        assert!((code_table.expected_length(&probabilities) - 2.2).abs() < EPSILON);
    }

    #[test]
    fn test_equal_sums_extend_upper_half() {
        let sorted = sort_by_descending_probability(&ProbabilityModel::from([
            ('a', 0.25),
            ('b', 0.25),
            ('c', 0.25),
            ('d', 0.25),
        ]));
        // a|d tie -> d grows to c,d; a < c+d -> a grows to a,b; a+b == c+d -> upper grows
        assert_eq!(split_index(&sorted, 0, 3), 1);
        assert_eq!(split_index(&sorted, 0, 1), 0);
    }

    #[test]
    fn test_stable_sort_keeps_model_order_for_ties() {
        let probabilities =
            ProbabilityModel::from([('x', 0.1), ('y', 0.3), ('z', 0.3), ('w', 0.3)]);
        let sorted: Vec<char> = sort_by_descending_probability(&probabilities)
            .iter()
            .map(|e| e.symbol)
            .collect();
        assert_eq!(sorted, vec!['y', 'z', 'w', 'x']);
    }

    #[test]
    fn test_two_symbols() {
        let probabilities = ProbabilityModel::from_text("aab");
        let code_table = ShannonFanoBuilder.build(&probabilities).unwrap();
        assert_eq!(code_table.get('a'), Some("0"));
        assert_eq!(code_table.get('b'), Some("1"));
    }

    #[test]
    fn test_not_always_optimal() {
        let probabilities =
            ProbabilityModel::from([('a', 0.35), ('b', 0.17), ('c', 0.17), ('d', 0.16), ('e', 0.15)]);
        let shannon_fano = ShannonFanoBuilder.build(&probabilities).unwrap();
        let huffman = HuffmanBuilder.build(&probabilities).unwrap();
        assert_eq!(
            shannon_fano.to_string(),
            "{a=00, b=01, c=100, d=101, e=11}"
        );
        assert!((shannon_fano.expected_length(&probabilities) - 2.33).abs() < EPSILON);
        assert!((huffman.expected_length(&probabilities) - 2.30).abs() < EPSILON);
    }

    #[test]
    fn test_prefix_free_and_complete() {
        for text in ["abracadabra", "mississippi", "aaaaaaaaab", "the quick brown fox"] {
            let probabilities = ProbabilityModel::from_text(text);
            let code_table = ShannonFanoBuilder.build(&probabilities).unwrap();
            assert!(code_table.is_prefix_free(), "{} is not prefix free", code_table);
            assert_eq!(code_table.len(), probabilities.len());
            assert_eq!(ShannonFanoBuilder.build(&probabilities).unwrap(), code_table);
        }
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let code_table = ShannonFanoBuilder
            .build(&ProbabilityModel::from_text("zzzz"))
            .unwrap();
        assert_eq!(code_table.to_string(), "{z=0}");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            ShannonFanoBuilder.build(&ProbabilityModel::new()),
            Err(CodingError::EmptyAlphabet)
        );
        assert_eq!(
            ShannonFanoBuilder.build(&ProbabilityModel::from([('a', 0.5), ('b', -0.5)])),
            Err(CodingError::InvalidProbability('b', -0.5))
        );
    }
}

mod tree;

pub use tree::HuffmanTree;

use crate::code_table::CodeTable;
use crate::prefix_code::{CodingError, PrefixCodeBuilder};
use crate::probability::ProbabilityModel;

/// Bottom-up construction of an optimal prefix code.
///
/// The two least probable nodes are merged repeatedly until one root
/// remains. Equal probabilities are resolved by input order, merged nodes
/// losing against any node that existed before them.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanBuilder;

impl PrefixCodeBuilder for HuffmanBuilder {
    fn build(&self, probabilities: &ProbabilityModel) -> Result<CodeTable, CodingError> {
        Ok(HuffmanTree::new(probabilities)?.code_table())
    }
}

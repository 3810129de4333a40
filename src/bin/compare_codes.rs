use prefix_codes::huffman::HuffmanTree;
use prefix_codes::prefix_code::{Algorithm, CodingError};
use prefix_codes::probability::ProbabilityModel;

fn main() -> Result<(), CodingError> {
    let probabilities =
        ProbabilityModel::from([('a', 0.35), ('b', 0.17), ('c', 0.17), ('d', 0.16), ('e', 0.15)]);

    let tree = HuffmanTree::new(&probabilities)?;
    println!("huffman tree\n{}", tree);

    for algorithm in [Algorithm::Huffman, Algorithm::ShannonFano] {
        let code_table = algorithm.build(&probabilities)?;
        println!(
            "{:<12} {} expected length {:.3}",
            algorithm.to_string(),
            code_table,
            code_table.expected_length(&probabilities)
        );
    }
    println!("entropy {:.3}", probabilities.entropy());
    Ok(())
}

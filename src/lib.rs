use std::io::{BufRead, Write};

pub use cli::CLIParser;
use code_table::CodeTable;
pub use error::Error;
use huffman::HuffmanTree;
use prefix_code::Algorithm;
use probability::ProbabilityModel;

mod cli;
pub mod code_table;
mod error;
pub mod huffman;
mod logger;
pub mod prefix_code;
pub mod probability;
pub mod shannon_fano;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    word: Option<String>,
    algorithm: Option<Algorithm>,
    show_tree: bool,
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{}", text)
        .and_then(|_| output.flush())
        .map_err(Error::FailedToWriteOutput)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(Error::UnableToReadInput)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn read_word<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    prompt(output, "Enter a word:")?;
    read_line(input)
}

fn choose_algorithm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Algorithm> {
    prompt(output, "Choose an algorithm:")?;
    for algorithm in [Algorithm::Huffman, Algorithm::ShannonFano] {
        prompt(
            output,
            &format!("{}. {}", algorithm.menu_number(), algorithm),
        )?;
    }
    let choice = read_line(input)?;
    Algorithm::from_menu_choice(&choice).ok_or(Error::InvalidChoice(choice))
}

/// Builds the code table for the character frequencies of a word and
/// writes it to `output`.
///
/// Word and algorithm are taken from `arguments` when present, otherwise the
/// user is prompted for them on `output` and answers are read from `input`.
pub fn generate_codes<R: BufRead, W: Write>(
    arguments: &Arguments,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let word = match &arguments.word {
        Some(word) => word.clone(),
        None => read_word(input, output)?,
    };
    let probabilities = ProbabilityModel::from_text(&word);
    log::info!(
        "Derived {} symbols from {} characters",
        probabilities.len(),
        word.chars().count()
    );

    let algorithm = match arguments.algorithm {
        Some(algorithm) => algorithm,
        None => choose_algorithm(input, output)?,
    };
    log::info!("Building {} code", algorithm);

    let code_table = algorithm
        .build(&probabilities)
        .map_err(Error::CodeConstructionFailed)?;
    logger::log_code_table(&code_table);

    let tree = match algorithm {
        Algorithm::Huffman if arguments.show_tree => Some(
            HuffmanTree::new(&probabilities).map_err(Error::CodeConstructionFailed)?,
        ),
        Algorithm::ShannonFano if arguments.show_tree => {
            log::warn!("Only Huffman codes have a merge tree to print");
            None
        }
        _ => None,
    };
    write_report(output, algorithm, &code_table, &probabilities, tree.as_ref())
        .map_err(Error::FailedToWriteOutput)
}

fn write_report<W: Write>(
    output: &mut W,
    algorithm: Algorithm,
    code_table: &CodeTable,
    probabilities: &ProbabilityModel,
    tree: Option<&HuffmanTree>,
) -> std::io::Result<()> {
    if let Some(tree) = tree {
        writeln!(output, "{}", tree)?;
    }
    writeln!(output, "{} Codes: {}", algorithm, code_table)?;
    writeln!(
        output,
        "Expected code length: {:.4} bits/symbol (entropy {:.4})",
        code_table.expected_length(probabilities),
        probabilities.entropy()
    )
}

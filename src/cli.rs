use crate::prefix_code::Algorithm;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_word_argument(command);
        let command = Self::register_algorithm_argument(command);
        Self::register_tree_argument(command)
    }

    fn register_word_argument(command: Command) -> Command {
        command.arg(Self::create_word_argument())
    }

    fn register_algorithm_argument(command: Command) -> Command {
        command.arg(Self::create_algorithm_argument())
    }

    fn register_tree_argument(command: Command) -> Command {
        command.arg(Self::create_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_word_argument() -> Arg {
        Arg::new("word")
            .help("Text whose character frequencies are encoded, read from stdin if omitted")
            .value_parser(value_parser!(String))
            .required(false)
    }

    fn create_algorithm_argument() -> Arg {
        arg!(algorithm: -a --algorithm <ALGORITHM> "Code construction algorithm, chosen from a menu if omitted")
            .required(false)
            .value_parser(value_parser!(Algorithm))
    }

    fn create_tree_argument() -> Arg {
        arg!(tree: -t --tree "Print the Huffman merge tree").action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            word: Self::extract_word_argument(matches),
            algorithm: Self::extract_algorithm_argument(matches),
            show_tree: Self::extract_tree_argument(matches),
        }
    }

    fn extract_word_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("word").cloned()
    }

    fn extract_algorithm_argument(matches: &ArgMatches) -> Option<Algorithm> {
        matches.get_one::<Algorithm>("algorithm").copied()
    }

    fn extract_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{Algorithm, CLIParser};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_word_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_word_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "abracadabra"]);
        let word = CLIParser::extract_word_argument(&matches);
        assert_eq!(word.as_deref(), Some("abracadabra"));
    }

    #[test]
    fn parse_missing_word_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_word_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert_eq!(CLIParser::extract_word_argument(&matches), None);
    }

    #[test]
    fn parse_algorithm_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_algorithm_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--algorithm", "shannon-fano"]);
        let actual = CLIParser::extract_algorithm_argument(&matches);
        assert_eq!(actual, Some(Algorithm::ShannonFano));
    }

    #[test]
    fn parse_algorithm_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_algorithm_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-a", "arithmetic"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for algorithm not detected");
        }
    }

    #[test]
    fn parse_tree_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_tree_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--tree"]);
        assert!(CLIParser::extract_tree_argument(&matches));
    }

    #[test]
    fn parse_all_arguments() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "hello", "-a", "huffman", "-t"]);
        assert_eq!(arguments.word.as_deref(), Some("hello"), "word does not match");
        assert_eq!(
            arguments.algorithm,
            Some(Algorithm::Huffman),
            "algorithm does not match"
        );
        assert!(arguments.show_tree, "show_tree does not match");
    }

    #[test]
    fn parse_no_arguments() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT]);
        assert_eq!(arguments.word, None);
        assert_eq!(arguments.algorithm, None);
        assert!(!arguments.show_tree);
    }
}

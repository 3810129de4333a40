use std::env::args_os;
use std::io;

use prefix_codes::{generate_codes, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if let Err(e) = generate_codes(&arguments, &mut input, &mut output) {
        eprintln!("Code generation failed because of: {}", e);
    }
}

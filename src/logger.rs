use crate::code_table::CodeTable;

const CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(error) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, unable to load {}: {}", CONFIG_FILE, error);
    }
}

pub fn log_code_table(code_table: &CodeTable) {
    for (symbol, codeword) in code_table.iter() {
        log::debug!("{:?} -> {} ({} bits)", symbol, codeword, codeword.len());
    }
}

use clap::Parser;

use cxx_guard::cli::FormatCli;
use cxx_guard::{commands, logging};

fn main() {
    let cli = FormatCli::parse();
    logging::init(cli.verbose);

    let exit_code = commands::run_format(&cli);
    std::process::exit(exit_code);
}

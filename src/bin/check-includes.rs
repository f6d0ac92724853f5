use clap::Parser;

use cxx_guard::cli::IncludesCli;
use cxx_guard::{commands, logging};

fn main() {
    let cli = IncludesCli::parse();
    logging::init(cli.verbose);

    let exit_code = commands::run_includes(&cli);
    std::process::exit(exit_code);
}

//! authority-scorer - score the authority of a research source

use clap::Parser;
use research_prep::cli::{self, ScoreCli};

fn main() {
    let args = ScoreCli::parse();
    cli::init_logging(&args.log_level);
    std::process::exit(cli::exit_code(cli::score::run(args)));
}

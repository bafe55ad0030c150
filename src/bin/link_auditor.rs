//! link-auditor - check the links in a research markdown file

use clap::Parser;
use research_prep::cli::{self, AuditCli};

fn main() {
    let args = AuditCli::parse();
    cli::init_logging(&args.log_level);
    std::process::exit(cli::exit_code(cli::audit::run(args)));
}

//! authority-scorer command

use super::ScoreCli;
use crate::reporters::{self, OutputFormat};
use crate::scoring;
use anyhow::Result;
use clap::CommandFactory;

/// Run the scorer, returning the process exit code
pub fn run(cli: ScoreCli) -> Result<i32> {
    let emoji = !cli.no_emoji;
    let format = if cli.report {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if let Some(file) = &cli.file {
        match scoring::score_file(file) {
            Ok(scores) => {
                for breakdown in &scores {
                    println!("{}", reporters::render_score(breakdown, format, emoji)?);
                }
            }
            Err(unsupported) => println!("{}", unsupported),
        }
        return Ok(0);
    }

    let Some(url) = cli.url.as_deref() else {
        ScoreCli::command().print_help()?;
        println!();
        return Ok(0);
    };

    let breakdown = scoring::calculate(url, cli.date.as_deref(), &cli.content_type, cli.stars);
    print!("{}", reporters::render_score(&breakdown, format, emoji)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(0)
}

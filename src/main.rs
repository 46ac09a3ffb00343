//! markdown2html CLI - convert a Markdown file into an HTML file
//!
//! Usage: `markdown2html <input.md> <output.html>`

use std::process::ExitCode;

use markdown2html::Options;
use markdown2html::cli::{self, Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = Args::parse_from(std::env::args_os()).and_then(|args| {
        log::debug!("converting {} -> {}", args.input.display(), args.output.display());
        cli::run(&args, &Options::default())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_io() {
                eprintln!("Error: {err}");
            } else {
                eprintln!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}

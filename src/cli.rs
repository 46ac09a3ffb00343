//! Command-line shell: argument validation and file I/O around [`to_html`].
//!
//! [`to_html`]: crate::to_html

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use crate::{Error, MAX_INPUT_LEN, Options, to_html_with_options};

/// Program name used in the usage line when `argv[0]` is absent.
pub const DEFAULT_PROGRAM: &str = "markdown2html";

/// Validated command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Args {
    /// Parse `argv`, including the program name in first position.
    ///
    /// Exactly two positional arguments are accepted. No file is touched.
    /// Paths need not be valid UTF-8.
    pub fn parse_from<I, S>(argv: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next();
        let rest: Vec<OsString> = argv.collect();

        match <[OsString; 2]>::try_from(rest) {
            Ok([input, output]) => Ok(Self {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            Err(rest) => {
                log::debug!("expected 2 arguments, got {}", rest.len());
                let program = program.map_or_else(
                    || DEFAULT_PROGRAM.to_string(),
                    |p| p.to_string_lossy().into_owned(),
                );
                Err(Error::Usage { program })
            }
        }
    }
}

/// Convert `args.input` into `args.output`.
///
/// The input must be an existing regular file; otherwise the output path is
/// never opened. Inputs over [`MAX_INPUT_LEN`] bytes are rejected before
/// reading. The output is created or truncated.
pub fn run(args: &Args, options: &Options) -> Result<(), Error> {
    if !args.input.is_file() {
        return Err(Error::MissingInput {
            path: args.input.clone(),
        });
    }

    let read_error = |source| Error::Read {
        path: args.input.clone(),
        source,
    };
    let len = fs::metadata(&args.input).map_err(read_error)?.len();
    if len > MAX_INPUT_LEN as u64 {
        return Err(Error::InputTooLarge {
            path: args.input.clone(),
            len,
        });
    }

    let markdown = fs::read_to_string(&args.input).map_err(read_error)?;
    log::debug!("read {} bytes from {}", markdown.len(), args.input.display());

    let html = to_html_with_options(&markdown, options);

    fs::write(&args.output, &html).map_err(|source| Error::Write {
        path: args.output.clone(),
        source,
    })?;
    log::info!(
        "wrote {} bytes to {}",
        html.len(),
        args.output.display()
    );

    Ok(())
}

#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{self, Read},
    sync::Once,
};

use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

const BYTE_ORDER_MARK: char = '\u{feff}';

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=tokenizer=debug` or
/// `RUST_LOG=tokenizer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Reads source text from `path`, or from standard input when the path is `-`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn load_source(path: &str) -> Result<String, Error> {
    let read_failed = |err: io::Error| {
        Error::new(
            ErrorImpl::ReadFailed {
                reason: err.to_string(),
            },
            Some(path.to_string()),
        )
    };

    let bytes = if path == STDIN_PATH {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer).map_err(read_failed)?;
        buffer
    } else {
        fs::read(path).map_err(read_failed)?
    };

    debug!(path, bytes = bytes.len(), "loaded source");
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&text).to_string())
}

/// Picks the single input path out of the command line arguments, program
/// name excluded.
pub fn input_path(args: &[String]) -> Result<&str, Error> {
    match args {
        [] => Err(Error::new(ErrorImpl::NoInputProvided, None)),
        [path] => Ok(path.as_str()),
        _ => Err(Error::new(
            ErrorImpl::TooManyArguments { received: args.len() },
            None,
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::ErrorImpl;

    #[test]
    fn test_input_path() {
        let args = vec!["main.cpp".to_string()];
        assert_eq!(super::input_path(&args).unwrap(), "main.cpp");

        let error = super::input_path(&[]).unwrap_err();
        assert_eq!(error.get_error_impl(), &ErrorImpl::NoInputProvided);

        let args = vec!["a.cpp".to_string(), "b.cpp".to_string()];
        let error = super::input_path(&args).unwrap_err();
        assert_eq!(error.get_error_impl(), &ErrorImpl::TooManyArguments { received: 2 });
    }

    #[test]
    fn test_load_missing_file() {
        let error = super::load_source("does/not/exist.cpp").unwrap_err();

        assert_eq!(error.get_error_name(), "ReadFailed");
        assert_eq!(error.get_source_name(), Some("does/not/exist.cpp"));
    }

    #[test]
    fn test_load_strips_byte_order_mark() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, "\u{feff}int x;".as_bytes()).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        assert_eq!(super::load_source(&path).unwrap(), "int x;");
    }
}

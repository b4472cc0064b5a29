use std::{env, process::ExitCode, time::Instant};

use tokenizer::{
    errors::errors::{Error, ErrorTip},
    init_tracing, input_path,
    lexer::lexer::analyze,
    load_source,
    report::table::render_report,
};
use tracing::debug;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let source = match input_path(&args).and_then(load_source) {
        Ok(source) => source,
        Err(error) => {
            display_error(&error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let analysis = analyze(&source);
    debug!(elapsed = ?start.elapsed(), tokens = analysis.tokens.len(), "analyzed");

    print!("{}", render_report(&analysis));
    ExitCode::SUCCESS
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);
    eprintln!("Usage: tokenizer <file|->");
}

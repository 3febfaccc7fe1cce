//! `json-ptr` — look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-ptr [--rfc6901-index] '<pointer>'
//!
//! The document is read from stdin. Set `RUST_LOG=debug` to see why a
//! pointer failed to resolve, or `RUST_LOG=trace` to follow each token.

use json_ptr::cli::{lookup_pointer, Args};
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match lookup_pointer(buf.trim(), &args.pointer, &args.options) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("lookup of {:?} failed: {e:?}", args.pointer);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

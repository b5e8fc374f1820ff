//! Quoridor engine speaking a line-oriented text protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use quoridor::protocol::parse_command;
use quoridor::session::{Flow, Session};

/// Runs the protocol loop until `quit` or end of input.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        if session.handle(cmd, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

// itn-cli: shared utilities for the CLI tools.

use std::io::{self, BufRead, Write};
use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Read stdin line by line and apply `process` to each non-empty trimmed
/// line. Successful results print as-is; failures print as `E: message`
/// and the batch continues with the next line.
pub fn run_lines(mut process: impl FnMut(&str) -> Result<String, String>) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match process(input) {
            Ok(output) => {
                let _ = writeln!(out, "{output}");
            }
            Err(message) => {
                let _ = writeln!(out, "E: {message}");
            }
        }
    }
}

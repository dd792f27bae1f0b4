// itn-verbalize: Render bracketed field records from stdin.
//
// Reads field records (one per line, as printed by itn-tag) and prints the
// written surface form for each, e.g.
// cardinal { negative: "-" integer: "7" } -> -7.
//
// Usage:
//   itn-verbalize [-h|--help]

use itn_core::fields::FieldRecord;
use itn_zh::normalizer::InverseNormalizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if itn_cli::wants_help(&args) {
        println!("itn-verbalize: Render bracketed field records from stdin.");
        println!();
        println!("Usage: itn-verbalize [OPTIONS]");
        println!();
        println!("Reads field records (one per line, as printed by itn-tag).");
        println!("Prints the written surface form, or E: with a message on failure.");
        println!();
        println!("Options:");
        println!("  -h, --help    Print this help");
        return;
    }

    let itn = InverseNormalizer::new();
    itn_cli::run_lines(|input| {
        FieldRecord::parse(input)
            .and_then(|record| itn.verbalize(&record))
            .map_err(|e| e.to_string())
    });
}

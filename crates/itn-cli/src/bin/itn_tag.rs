// itn-tag: Tag spoken numeral text from stdin.
//
// Reads spoken-form lines (one per line) and prints the bracketed field
// record for each, e.g. 一百二十三 -> cardinal { integer: "123" }.
//
// Usage:
//   itn-tag [OPTIONS]
//
// Options:
//   --kind KIND   Force one grammar: cardinal, decimal or ordinal
//   -h, --help    Print help

use itn_zh::normalizer::InverseNormalizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if itn_cli::wants_help(&args) {
        println!("itn-tag: Tag spoken numeral text from stdin.");
        println!();
        println!("Usage: itn-tag [OPTIONS]");
        println!();
        println!("Reads spoken-form lines (one per line). Prints the bracketed");
        println!("field record for each line, or E: with a message on failure.");
        println!();
        println!("Options:");
        println!("  --kind KIND   Force one grammar: cardinal, decimal or ordinal");
        println!("  -h, --help    Print this help");
        return;
    }

    let kind = match args.iter().position(|a| a == "--kind") {
        Some(i) => match args.get(i + 1).map(String::as_str) {
            Some(k @ ("cardinal" | "decimal" | "ordinal")) => Some(k.to_string()),
            Some(other) => itn_cli::fatal(&format!("unknown grammar kind {other:?}")),
            None => itn_cli::fatal("--kind requires a value"),
        },
        None => None,
    };

    let itn = InverseNormalizer::new();
    itn_cli::run_lines(|input| {
        let record = match kind.as_deref() {
            Some("cardinal") => itn.tag_cardinal(input),
            Some("decimal") => itn.tag_decimal(input),
            Some("ordinal") => itn.tag_ordinal(input),
            _ => itn.tag(input),
        };
        record.map(|r| r.render()).map_err(|e| e.to_string())
    });
}

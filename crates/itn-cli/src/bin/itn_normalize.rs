// itn-normalize: Inverse-normalize spoken numeral text from stdin.
//
// Reads spoken-form lines (one per line) and prints the written form for
// each, e.g. 负五点二万 -> -5.2 万.
//
// Usage:
//   itn-normalize [-h|--help]

use itn_zh::normalizer::InverseNormalizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if itn_cli::wants_help(&args) {
        println!("itn-normalize: Inverse-normalize spoken numeral text from stdin.");
        println!();
        println!("Usage: itn-normalize [OPTIONS]");
        println!();
        println!("Reads spoken-form lines (one per line). Prints the written");
        println!("numeral form, or E: with a message on failure. Failures never");
        println!("stop the batch.");
        println!();
        println!("Options:");
        println!("  -h, --help    Print this help");
        return;
    }

    let itn = InverseNormalizer::new();
    itn_cli::run_lines(|input| itn.normalize(input).map_err(|e| e.to_string()));
}

// Quick test: build a toy rewrite grammar with the algebra and run a few
// inputs through the shortest-path matcher.

use itn_fst::fst::Fst;
use itn_fst::search::shortest_match;

fn main() {
    let digit = Fst::string_map([
        ("one", "1"),
        ("two", "2"),
        ("three", "3"),
    ]);
    let dash = Fst::delete("-");
    let number = digit.concat(&dash.concat(&digit).star());

    println!(
        "grammar: {} states, {} transitions",
        number.state_count(),
        number.transition_count()
    );

    let inputs = ["one", "one-two-three", "two-two", "three-", "four"];
    for input in &inputs {
        match shortest_match(&number, input) {
            Some(result) => {
                println!("{:15} -> {} (weight {})", input, result.output, result.weight)
            }
            None => println!("{:15} -> (no match)", input),
        }
    }

    let saved = itn_fst::format::save(&number);
    println!("serialized: {} bytes", saved.len());
    let reloaded = itn_fst::format::load(&saved).expect("reload");
    println!(
        "reloaded: {} states, {} transitions",
        reloaded.state_count(),
        reloaded.transition_count()
    );
}

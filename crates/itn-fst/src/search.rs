// Weighted shortest-path matching over a built transducer.
//
// Matching is a Dijkstra search over (state, input position) pairs with
// non-negative integer weights. All search state is allocated per call;
// the transducer itself is only read, so one grammar can serve any number
// of concurrent matches.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use hashbrown::HashMap;

use crate::fst::{Fst, StateId};

/// Cap on settled search nodes per match. A legitimate match over a bounded
/// input settles far fewer; the cap only cuts off pathological state-space
/// exploration, which is reported as no match.
pub const MAX_SEARCH_NODES: usize = 1_000_000;

/// A successful transduction: the emitted string and the total path weight
/// (transition weights plus the final weight).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub output: String,
    pub weight: u64,
}

/// Search bookkeeping for one (state, position) node.
struct NodeEntry {
    dist: u64,
    settled: bool,
    parent: Option<u64>,
    olabel: Option<char>,
}

fn node_key(state: StateId, pos: usize) -> u64 {
    (u64::from(state) << 32) | pos as u64
}

/// Find the minimal-weight transduction of `input` through `fst`.
///
/// Returns `None` when no accepting path consumes the entire input, or when
/// the search exceeds [`MAX_SEARCH_NODES`]. Weight ties are broken by
/// discovery order, which follows transition construction order, so the
/// result is deterministic for any fixed grammar.
pub fn shortest_match(fst: &Fst, input: &str) -> Option<MatchResult> {
    let chars: Vec<char> = input.chars().collect();
    shortest_match_chars(fst, &chars)
}

/// [`shortest_match`] over a pre-split character slice.
pub fn shortest_match_chars(fst: &Fst, chars: &[char]) -> Option<MatchResult> {
    let mut nodes: HashMap<u64, NodeEntry> = HashMap::new();
    // Heap entries: (distance, discovery sequence, node key). The sequence
    // makes equal-distance pops deterministic and FIFO in discovery order.
    let mut heap: BinaryHeap<Reverse<(u64, u64, u64)>> = BinaryHeap::new();
    let mut sequence: u64 = 0;

    let start = node_key(0, 0);
    nodes.insert(
        start,
        NodeEntry {
            dist: 0,
            settled: false,
            parent: None,
            olabel: None,
        },
    );
    heap.push(Reverse((0, sequence, start)));

    let mut best: Option<(u64, u64)> = None; // (total weight, end node key)
    let mut settled = 0usize;

    while let Some(Reverse((dist, _, key))) = heap.pop() {
        if let Some((best_total, _)) = best {
            // Every remaining path costs at least `dist`; nothing can
            // strictly beat the recorded accepting path any more.
            if dist >= best_total {
                break;
            }
        }

        let state;
        let pos;
        {
            let entry = match nodes.get_mut(&key) {
                Some(entry) => entry,
                None => continue,
            };
            if entry.settled || entry.dist != dist {
                continue; // stale heap entry
            }
            entry.settled = true;
            state = (key >> 32) as StateId;
            pos = (key & 0xFFFF_FFFF) as usize;
        }

        settled += 1;
        if settled > MAX_SEARCH_NODES {
            // Bounded effort: keep an accepting path if one is already
            // known, otherwise report no match.
            break;
        }

        if pos == chars.len() {
            if let Some(final_weight) = fst.final_weight(state) {
                let total = dist + u64::from(final_weight);
                if best.is_none_or(|(best_total, _)| total < best_total) {
                    best = Some((total, key));
                }
            }
        }

        for t in fst.transitions_from(state) {
            let next_pos = match t.ilabel {
                None => pos,
                Some(c) => {
                    if pos < chars.len() && chars[pos] == c {
                        pos + 1
                    } else {
                        continue;
                    }
                }
            };
            let next_key = node_key(t.target, next_pos);
            let next_dist = dist + u64::from(t.weight);

            let improved = match nodes.get_mut(&next_key) {
                Some(entry) => {
                    if !entry.settled && next_dist < entry.dist {
                        entry.dist = next_dist;
                        entry.parent = Some(key);
                        entry.olabel = t.olabel;
                        true
                    } else {
                        false
                    }
                }
                None => {
                    nodes.insert(
                        next_key,
                        NodeEntry {
                            dist: next_dist,
                            settled: false,
                            parent: Some(key),
                            olabel: t.olabel,
                        },
                    );
                    true
                }
            };
            if improved {
                sequence += 1;
                heap.push(Reverse((next_dist, sequence, next_key)));
            }
        }
    }

    let (total, end_key) = best?;

    // Walk the parent chain backwards, collecting emitted labels.
    let mut reversed: Vec<char> = Vec::new();
    let mut cursor = end_key;
    loop {
        let entry = &nodes[&cursor];
        if let Some(c) = entry.olabel {
            reversed.push(c);
        }
        match entry.parent {
            Some(parent) => cursor = parent,
            None => break,
        }
    }
    reversed.reverse();

    Some(MatchResult {
        output: reversed.into_iter().collect(),
        weight: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fst::Transition;

    #[test]
    fn match_simple_cross() {
        let fst = Fst::cross("ab", "xy");
        let result = shortest_match(&fst, "ab").unwrap();
        assert_eq!(result.output, "xy");
        assert_eq!(result.weight, 0);
    }

    #[test]
    fn no_match_on_partial_consumption() {
        let fst = Fst::accep("ab");
        assert!(shortest_match(&fst, "abc").is_none());
    }

    #[test]
    fn no_match_on_unknown_symbol() {
        let fst = Fst::accep("ab");
        assert!(shortest_match(&fst, "az").is_none());
    }

    #[test]
    fn picks_lower_weight_path() {
        let heavy = Fst::cross("a", "H").with_weight(10);
        let light = Fst::cross("a", "L").with_weight(2);
        let result = shortest_match(&heavy.union(&light), "a").unwrap();
        assert_eq!(result.output, "L");
        assert_eq!(result.weight, 2);
    }

    #[test]
    fn tie_broken_by_construction_order() {
        let first = Fst::cross("a", "1");
        let second = Fst::cross("a", "2");
        let result = shortest_match(&first.union(&second), "a").unwrap();
        assert_eq!(result.output, "1");
    }

    #[test]
    fn accumulates_transition_and_final_weights() {
        let mut fst = Fst::new();
        let end = fst.add_state();
        fst.push_transition(
            0,
            Transition {
                ilabel: Some('a'),
                olabel: Some('b'),
                weight: 3,
                target: end,
            },
        );
        fst.set_final(end, 4);
        let result = shortest_match(&fst, "a").unwrap();
        assert_eq!(result.output, "b");
        assert_eq!(result.weight, 7);
    }

    #[test]
    fn epsilon_cycle_terminates() {
        // star() introduces an epsilon cycle through the start state.
        let fst = Fst::insert("x").star();
        let result = shortest_match(&fst, "").unwrap();
        // Zero repetitions is the shortest path.
        assert_eq!(result.output, "");
    }

    #[test]
    fn empty_input_on_final_start() {
        let fst = Fst::epsilon();
        let result = shortest_match(&fst, "").unwrap();
        assert_eq!(result.output, "");
        assert_eq!(result.weight, 0);
    }

    #[test]
    fn longer_match_through_closure() {
        let digit = Fst::string_map([("一", "1"), ("二", "2"), ("三", "3")]);
        let fst = digit.plus();
        let result = shortest_match(&fst, "一二三一").unwrap();
        assert_eq!(result.output, "1231");
    }
}

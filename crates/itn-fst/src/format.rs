// IFST binary format: serialization of compiled transducers.
//
// A compiled grammar can be persisted and reloaded without rebuilding the
// cascade. The layout is a 16-byte header followed by fixed-width packed
// state and transition records, little-endian throughout:
//
//   bytes 0..4    cookie1 (magic)
//   bytes 4..8    cookie2 (magic)
//   bytes 8..12   format version
//   bytes 12..16  state count
//   then          state count x PackedState (16 bytes each)
//   then          4-byte transition count
//   then          transition count x PackedTransition (16 bytes each)

use bytemuck::{Pod, Zeroable};

use crate::FstError;
use crate::fst::{Fst, Transition};

/// IFST header magic constants (little-endian).
const COOKIE1: u32 = 0x0049_4653;
const COOKIE2: u32 = 0x0001_A7C3;

/// Size of the IFST binary header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Label code for epsilon.
const EPSILON_LABEL: u32 = 0;

/// Final-weight code for a non-final state.
const NO_FINAL: u32 = u32::MAX;

/// Packed per-state record (16 bytes).
///
/// Transitions are flattened in state order; each state names its slice of
/// the transition table. `final_weight` is `u32::MAX` for non-final states.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PackedState {
    pub first_transition: u32,
    pub transition_count: u32,
    pub final_weight: u32,
    pub _reserved: u32,
}

/// Packed transition record (16 bytes).
///
/// Labels store the Unicode scalar value of the character, or
/// [`EPSILON_LABEL`] for epsilon. NUL is not a usable grammar symbol.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PackedTransition {
    pub ilabel: u32,
    pub olabel: u32,
    pub weight: u32,
    pub target: u32,
}

const _: () = assert!(size_of::<PackedState>() == 16);
const _: () = assert!(size_of::<PackedTransition>() == 16);

fn encode_label(label: Option<char>) -> u32 {
    match label {
        None => EPSILON_LABEL,
        Some(c) => c as u32,
    }
}

fn decode_label(code: u32) -> Result<Option<char>, FstError> {
    if code == EPSILON_LABEL {
        return Ok(None);
    }
    char::from_u32(code)
        .map(Some)
        .ok_or(FstError::InvalidLabel(code))
}

/// Serialize a transducer into the IFST byte layout.
pub fn save(fst: &Fst) -> Vec<u8> {
    let state_count = fst.state_count();
    let transition_count: usize = (0..state_count)
        .map(|s| fst.transitions_from(s as u32).len())
        .sum();

    let mut data = Vec::with_capacity(HEADER_SIZE + 16 * state_count + 4 + 16 * transition_count);
    data.extend_from_slice(&COOKIE1.to_le_bytes());
    data.extend_from_slice(&COOKIE2.to_le_bytes());
    data.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    data.extend_from_slice(&(state_count as u32).to_le_bytes());

    let mut first = 0u32;
    for state in 0..state_count {
        let transitions = fst.transitions_from(state as u32);
        let record = PackedState {
            first_transition: first,
            transition_count: transitions.len() as u32,
            final_weight: fst.final_weight(state as u32).unwrap_or(NO_FINAL),
            _reserved: 0,
        };
        data.extend_from_slice(bytemuck::bytes_of(&record));
        first += transitions.len() as u32;
    }

    data.extend_from_slice(&(transition_count as u32).to_le_bytes());
    for state in 0..state_count {
        for t in fst.transitions_from(state as u32) {
            let record = PackedTransition {
                ilabel: encode_label(t.ilabel),
                olabel: encode_label(t.olabel),
                weight: t.weight,
                target: t.target,
            };
            data.extend_from_slice(bytemuck::bytes_of(&record));
        }
    }

    data
}

/// Load a transducer from IFST bytes, validating the header, label codes
/// and every index. Trailing bytes after the transition table are ignored.
pub fn load(data: &[u8]) -> Result<Fst, FstError> {
    if data.len() < HEADER_SIZE {
        return Err(FstError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let cookie1 = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let cookie2 = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    if cookie1 != COOKIE1 || cookie2 != COOKIE2 {
        return Err(FstError::InvalidMagic);
    }
    let version = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
    if version != FORMAT_VERSION {
        return Err(FstError::BadVersion(version));
    }
    let state_count = u32::from_le_bytes([data[12], data[13], data[14], data[15]]) as usize;

    let states_end = HEADER_SIZE + 16 * state_count;
    if data.len() < states_end + 4 {
        return Err(FstError::TooShort {
            expected: states_end + 4,
            actual: data.len(),
        });
    }
    // Copy into aligned storage; the source slice has no alignment guarantee.
    let states: Vec<PackedState> =
        bytemuck::pod_collect_to_vec(&data[HEADER_SIZE..states_end]);

    let transition_count = u32::from_le_bytes([
        data[states_end],
        data[states_end + 1],
        data[states_end + 2],
        data[states_end + 3],
    ]) as usize;
    let transitions_end = states_end + 4 + 16 * transition_count;
    if data.len() < transitions_end {
        return Err(FstError::TooShort {
            expected: transitions_end,
            actual: data.len(),
        });
    }
    let transitions: Vec<PackedTransition> =
        bytemuck::pod_collect_to_vec(&data[states_end + 4..transitions_end]);

    let mut fst = Fst::with_states(state_count.max(1));
    for (id, state) in states.iter().enumerate() {
        let first = state.first_transition as usize;
        let count = state.transition_count as usize;
        if first + count > transition_count {
            return Err(FstError::BadTransitionIndex {
                index: (first + count) as u32,
                count: transition_count as u32,
            });
        }
        if state.final_weight != NO_FINAL {
            fst.set_final(id as u32, state.final_weight);
        }
        for packed in &transitions[first..first + count] {
            if packed.target as usize >= state_count {
                return Err(FstError::BadStateIndex {
                    target: packed.target,
                    count: state_count as u32,
                });
            }
            fst.push_transition(
                id as u32,
                Transition {
                    ilabel: decode_label(packed.ilabel)?,
                    olabel: decode_label(packed.olabel)?,
                    weight: packed.weight,
                    target: packed.target,
                },
            );
        }
    }

    Ok(fst)
}

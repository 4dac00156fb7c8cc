//! Stepping: which rotors move on a keystroke.
//!
//! Each pawl sits between a rotor and its right-hand neighbour. On every
//! keystroke all pawls push forward:
//!
//! ```text
//! slot:      0        1        2        3
//!         [refl]   [left]   [mid]   [right]
//!                       ^pawl    ^pawl    ^pawl (drives right every key)
//! ```
//!
//! - The rightmost rotor is always pushed.
//! - A pawl whose right-hand rotor shows a notch catches that notch and
//!   pushes both rotors it touches: the rotor on its left (ordinary
//!   carry) and the notched rotor itself. The second push is the
//!   double-stepping anomaly: a middle rotor sitting at its notch moves
//!   again on the very next key together with its left neighbour.
//!
//! Only the rightmost `pawls` slots have a pawl, and only rotating rotors
//! can be pushed. The decision uses the notch positions before any rotor
//! moves.

use crate::rotor::Rotor;

/// Returns the slot indices, in ascending order, that advance on the next
/// keystroke. Each slot appears at most once.
///
/// `rotors[0]` is the reflector and is never included.
pub fn advancing_slots(rotors: &[Rotor], pawls: usize) -> Vec<usize> {
    let n = rotors.len();
    if n < 2 {
        return Vec::new();
    }
    let first_driven = n.saturating_sub(pawls).max(1);
    let driven = |i: usize| i >= first_driven && rotors[i].rotates();

    let mut advancing = vec![false; n];
    if driven(n - 1) {
        advancing[n - 1] = true;
    }
    for i in first_driven..n - 1 {
        if driven(i) && rotors[i + 1].at_notch() {
            advancing[i] = true;
            if driven(i + 1) {
                advancing[i + 1] = true;
            }
        }
    }

    advancing
        .iter()
        .enumerate()
        .filter(|&(_, &moves)| moves)
        .map(|(slot, _)| slot)
        .collect()
}

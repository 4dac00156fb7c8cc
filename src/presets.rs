//! Historical machine models.
//!
//! Wirings are the published rotor tables, written in cycle notation over
//! the 26-letter Latin alphabet.

use crate::alphabet::UPPERCASE_LATIN;
use crate::config::{MachineConfig, RotorKindSpec, RotorSpec, Topology};

/// Rotors I–VIII shared by the army and navy machines.
fn standard_rotors() -> Vec<RotorSpec> {
    use RotorKindSpec::Moving;
    vec![
        RotorSpec::new("I", Moving, "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", "Q"),
        RotorSpec::new("II", Moving, "(A) (BJ) (CDKLHUP) (ESZ) (FIXVYOMW) (GR) (NT) (Q)", "E"),
        RotorSpec::new("III", Moving, "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)", "V"),
        RotorSpec::new("IV", Moving, "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)", "J"),
        RotorSpec::new("V", Moving, "(AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)", "Z"),
        RotorSpec::new("VI", Moving, "(AJQDVLEOZWIYTS) (BPRK) (CGMNHFUX)", "ZM"),
        RotorSpec::new("VII", Moving, "(ANOUPFRIMBZTLWKSVEGCJYDHXQ)", "ZM"),
        RotorSpec::new("VIII", Moving, "(AFLSETWGXUNDHOZYVICQ) (BKJ) (MPR)", "ZM"),
    ]
}

/// Enigma I (Wehrmacht): rotors I–V, wide reflectors B and C, three
/// stepping rotors.
pub fn enigma_i() -> MachineConfig {
    use RotorKindSpec::Reflector;
    let mut rotors: Vec<RotorSpec> = standard_rotors().into_iter().take(5).collect();
    rotors.push(RotorSpec::new(
        "B",
        Reflector,
        "(AY) (BR) (CU) (DH) (EQ) (FS) (GL) (IP) (JX) (KN) (MO) (TZ) (VW)",
        "",
    ));
    rotors.push(RotorSpec::new(
        "C",
        Reflector,
        "(AF) (BV) (CP) (DJ) (EI) (GO) (HY) (KR) (LZ) (MX) (NW) (QT) (SU)",
        "",
    ));
    MachineConfig {
        alphabet: UPPERCASE_LATIN.to_string(),
        topology: Topology {
            num_rotors: 4,
            pawls: 3,
        },
        rotors,
    }
}

/// Kriegsmarine M4: rotors I–VIII, the fixed Greek wheels Beta and Gamma,
/// thin reflectors B and C. Five slots, three stepping rotors.
pub fn enigma_m4() -> MachineConfig {
    use RotorKindSpec::{Fixed, Reflector};
    let mut rotors = standard_rotors();
    rotors.push(RotorSpec::new("Beta", Fixed, "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)", ""));
    rotors.push(RotorSpec::new("Gamma", Fixed, "(AFNPCOYLBSDKMTQJHE) (GUZVIR) (W) (X)", ""));
    rotors.push(RotorSpec::new(
        "B",
        Reflector,
        "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
        "",
    ));
    rotors.push(RotorSpec::new(
        "C",
        Reflector,
        "(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)",
        "",
    ));
    MachineConfig {
        alphabet: UPPERCASE_LATIN.to_string(),
        topology: Topology {
            num_rotors: 5,
            pawls: 3,
        },
        rotors,
    }
}

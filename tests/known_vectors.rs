//! Historical test vectors.
//!
//! Each vector is a published ciphertext produced by a real machine (or a
//! reference simulator) for a documented key. Any difference in output
//! means the wiring, stepping or signal path has regressed.

use rotorcrypt::{presets, Machine, MachineSettings};

fn settings(rotors: &[&str], positions: &str, rings: Option<&str>, plugboard: Option<&str>) -> MachineSettings {
    MachineSettings {
        rotors: rotors.iter().map(|s| s.to_string()).collect(),
        positions: positions.to_string(),
        rings: rings.map(str::to_string),
        plugboard: plugboard.map(str::to_string),
    }
}

fn enigma_i(settings: &MachineSettings) -> Machine {
    let mut machine = presets::enigma_i().build_machine().unwrap();
    machine.configure(settings).unwrap();
    machine
}

fn enigma_m4(settings: &MachineSettings) -> Machine {
    let mut machine = presets::enigma_m4().build_machine().unwrap();
    machine.configure(settings).unwrap();
    machine
}

// ═══════════════════════════════════════════════════════════════════════
// Enigma I
// ═══════════════════════════════════════════════════════════════════════

/// Reflector B, rotors I-II-III, rings AAA, positions AAA, no plugs.
#[test]
fn enigma_i_default_key() {
    let mut machine = enigma_i(&settings(&["B", "I", "II", "III"], "AAA", None, None));
    assert_eq!(machine.convert("AAAAA").unwrap(), "BDZGO");
}

/// Same as above with rings BBB.
#[test]
fn enigma_i_ring_setting_bbb() {
    let mut machine = enigma_i(&settings(&["B", "I", "II", "III"], "AAA", Some("BBB"), None));
    assert_eq!(machine.convert("AAAAA").unwrap(), "EWTYX");
}

const BARBAROSSA_PLUGS: &str = "(AV) (BS) (CG) (DL) (FU) (HZ) (IN) (KM) (OW) (RX)";

const BARBAROSSA_CIPHER: &str = "EDPUD NRGYS ZRCXN UYTPO MRMBO FKTBZ REZKM LXLVE FGUEY SIOZV EQMIK \
     UBPMM YLKLT TDEIS MDICA GYKUA CTCDO MOHWX MUUIA UBSTS LRNBZ SZWNR FXWFY SSXJZ VIJHI DISHP \
     RKLKA YUPAD TXQSP INQMA TLPIF SVKDA SCTAC DPBOP VHJK";

const BARBAROSSA_PLAIN: &str = "AUFKLXABTEILUNGXVONXKURTINOWAXKURTINOWAXNORDWESTLXSEBEZXSEBEZX\
     UAFFLIEGERSTRASZERIQTUNGXDUBROWKIXDUBROWKIXOPOTSCHKAXOPOTSCHKAXUMXEINSAQTDREINULLXUHRANGE\
     TRETENXANGRIFFXINFXRGTX";

/// Operation Barbarossa, 7 July 1941: B, II-IV-V, rings BUL, plugboard
/// above, message key BLA. Long enough to cross several middle-rotor
/// turnovers, including double steps.
#[test]
fn enigma_i_barbarossa_message() {
    let key = settings(&["B", "II", "IV", "V"], "BLA", Some("BUL"), Some(BARBAROSSA_PLUGS));
    let mut machine = enigma_i(&key);
    let plain = machine.convert(BARBAROSSA_CIPHER).unwrap();
    assert_eq!(plain, BARBAROSSA_PLAIN.replace(char::is_whitespace, ""));

    machine.reset();
    let cipher = machine.convert(BARBAROSSA_PLAIN).unwrap();
    assert_eq!(cipher, BARBAROSSA_CIPHER.replace(char::is_whitespace, ""));
}

/// The classic double-step: III at V carries II onto its notch E, after
/// which II steps again together with I.
#[test]
fn enigma_i_double_step_window_sequence() {
    let mut machine = enigma_i(&settings(&["B", "I", "II", "III"], "ADU", None, None));
    let mut windows = Vec::new();
    for _ in 0..4 {
        machine.convert("A").unwrap();
        windows.push(machine.positions());
    }
    assert_eq!(windows, vec!["ADV", "AEW", "BFX", "BFY"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Kriegsmarine M4
// ═══════════════════════════════════════════════════════════════════════

/// Thin B, Beta, III-IV-I at AXLE with five plugs.
#[test]
fn enigma_m4_hiawatha() {
    let key = settings(
        &["B", "Beta", "III", "IV", "I"],
        "AXLE",
        None,
        Some("(HQ) (EX) (IP) (TR) (BY)"),
    );
    let mut machine = enigma_m4(&key);
    assert_eq!(
        machine.convert("FROM HIS SHOULDER HIAWATHA").unwrap(),
        "QVPQSOKOILPUBKJZPISFXDW"
    );

    let mut decoder = enigma_m4(&key);
    assert_eq!(
        decoder.convert("QVPQS OKOIL PUBKJ ZPISF XDW").unwrap(),
        "FROMHISSHOULDERHIAWATHA"
    );
}

/// The Greek wheel never moves, even when its right neighbour turns over.
#[test]
fn enigma_m4_greek_wheel_stays_put() {
    let mut machine = enigma_m4(&settings(&["B", "Gamma", "I", "II", "III"], "CAEV", None, None));
    machine.convert("AAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap();
    assert_eq!(machine.positions().chars().next(), Some('C'));
}

/// Rotors VI-VIII turn over at both Z and M.
#[test]
fn enigma_m4_two_notch_rotor() {
    let mut machine = enigma_m4(&settings(&["C", "Beta", "I", "II", "VIII"], "AAAL", None, None));
    let mut windows = Vec::new();
    for _ in 0..3 {
        machine.convert("A").unwrap();
        windows.push(machine.positions());
    }
    assert_eq!(windows, vec!["AAAM", "AABN", "AABO"]);

    machine.set_positions("AAAY").unwrap();
    machine.convert("AA").unwrap();
    assert_eq!(machine.positions(), "AABA");
}

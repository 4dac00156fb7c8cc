//! Regression tests for the public API.
//!
//! Every error kind must be reachable from the crate root and must be raised
//! before any state changes. Machines that were built successfully must keep
//! converting after a rejected call.
//!
//! Coverage:
//! - `Alphabet`
//! - `Permutation`
//! - `Rotor`, `RotorKind`
//! - `RotorCatalog`
//! - `Machine`
//! - `stepping::advancing_slots`
//! - `RotorCryptError`

use std::sync::Arc;

use rotorcrypt::stepping::advancing_slots;
use rotorcrypt::{
    presets, Alphabet, Machine, MachineSettings, Permutation, Rotor, RotorCatalog,
    RotorCryptError, RotorKind,
};

fn latin() -> Arc<Alphabet> {
    Arc::new(Alphabet::default())
}

fn enigma_i() -> Machine {
    let mut machine = presets::enigma_i().build_machine().unwrap();
    machine.insert_rotors(&["B", "I", "II", "III"]).unwrap();
    machine
}

// ═══════════════════════════════════════════════════════════════════════
// Construction-time validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn topology_errors() {
    let catalog = presets::enigma_i().build_catalog().unwrap();
    for (slots, pawls) in [(0, 0), (1, 0), (3, 3), (4, 7)] {
        assert!(
            matches!(
                Machine::new(Arc::clone(&catalog), slots, pawls),
                Err(RotorCryptError::InvalidTopology(_))
            ),
            "slots={} pawls={} should be rejected",
            slots,
            pawls
        );
    }
    assert!(matches!(
        RotorCatalog::new(latin(), Vec::<Rotor>::new()),
        Err(RotorCryptError::InvalidTopology(_))
    ));
}

#[test]
fn catalog_duplicate_name() {
    let rotors = vec![
        Rotor::reflector("R", Permutation::new("(AB)", latin()).unwrap()),
        Rotor::reflector("R", Permutation::new("(CD)", latin()).unwrap()),
    ];
    assert_eq!(
        RotorCatalog::new(latin(), rotors).unwrap_err(),
        RotorCryptError::DuplicateRotorName("R".to_string())
    );
}

#[test]
fn malformed_cycle_specs() {
    for spec in ["(AB", "AB)", "(AB)(BC)", "(A1)", "(AB) C"] {
        assert!(
            matches!(
                Permutation::new(spec, latin()),
                Err(RotorCryptError::MalformedCycleSpec(_))
            ),
            "spec {:?} should be rejected",
            spec
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration-time validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn configuration_errors_keep_previous_state() {
    let mut machine = enigma_i();
    machine.set_positions("MCK").unwrap();

    let attempts: Vec<(MachineSettings, RotorCryptError)> = vec![
        (
            MachineSettings {
                rotors: vec!["B".into(), "I".into(), "II".into()],
                positions: "AA".into(),
                rings: None,
                plugboard: None,
            },
            RotorCryptError::SlotCountMismatch {
                expected: 4,
                found: 3,
            },
        ),
        (
            MachineSettings {
                rotors: vec!["B".into(), "I".into(), "II".into(), "X".into()],
                positions: "AAA".into(),
                rings: None,
                plugboard: None,
            },
            RotorCryptError::UnknownRotorName("X".to_string()),
        ),
        (
            MachineSettings {
                rotors: vec!["III".into(), "I".into(), "II".into(), "B".into()],
                positions: "AAA".into(),
                rings: None,
                plugboard: None,
            },
            RotorCryptError::MissingReflector("III".to_string()),
        ),
        (
            MachineSettings {
                rotors: vec!["B".into(), "I".into(), "II".into(), "III".into()],
                positions: "AAAA".into(),
                rings: None,
                plugboard: None,
            },
            RotorCryptError::SettingLengthMismatch {
                expected: 3,
                found: 4,
            },
        ),
        (
            MachineSettings {
                rotors: vec!["B".into(), "I".into(), "II".into(), "III".into()],
                positions: "AAA".into(),
                rings: Some("A?A".into()),
                plugboard: None,
            },
            RotorCryptError::UnknownCharacter('?'),
        ),
    ];

    for (settings, expected) in attempts {
        assert_eq!(machine.configure(&settings), Err(expected));
        assert_eq!(machine.positions(), "MCK");
        assert_eq!(machine.rotor_names(), vec!["B", "I", "II", "III"]);
    }

    // Still usable
    assert_eq!(machine.convert("A").unwrap().len(), 1);
}

#[test]
fn message_errors() {
    let mut machine = enigma_i();
    assert_eq!(
        machine.convert("HELLO, WORLD"),
        Err(RotorCryptError::UnknownCharacter(','))
    );
    assert_eq!(machine.positions(), "AAA");
    assert_eq!(
        machine.convert_index(100),
        Err(RotorCryptError::IndexOutOfRange {
            index: 100,
            size: 26
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Behavioral snapshots
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rotor_kind_exposed() {
    let catalog = presets::enigma_m4().build_catalog().unwrap();
    assert_eq!(catalog.get("Beta").unwrap().kind(), &RotorKind::Fixed);
    assert_eq!(catalog.get("B").unwrap().kind(), &RotorKind::Reflector);
    assert_eq!(
        catalog.get("VI").unwrap().kind(),
        &RotorKind::Moving {
            notches: vec![25, 12]
        }
    );
}

#[test]
fn stepping_three_notched_rotors_advances_all() {
    let machine = {
        let mut m = enigma_i();
        // I at its notch too, to check nothing exists left of slot 1
        m.set_positions("QEV").unwrap();
        m
    };
    assert_eq!(advancing_slots(machine.rotors(), machine.num_pawls()), vec![1, 2, 3]);
}

#[test]
fn stepping_from_machine_state() {
    let mut machine = enigma_i();
    machine.set_positions("AEV").unwrap();
    assert_eq!(advancing_slots(machine.rotors(), 3), vec![1, 2, 3]);
    machine.convert("A").unwrap();
    assert_eq!(machine.positions(), "BFW");
}

#[test]
fn identity_plugboard_equivalent_to_none() {
    let mut with_plugboard = enigma_i();
    with_plugboard
        .set_plugboard(Permutation::identity(Arc::clone(with_plugboard.alphabet())))
        .unwrap();
    let mut without = enigma_i();
    let msg = "WETTERVORHERSAGEBISKAYA";
    assert_eq!(
        with_plugboard.convert(msg).unwrap(),
        without.convert(msg).unwrap()
    );
}

#[test]
fn independent_machines_for_parallel_messages() {
    let catalog = presets::enigma_i().build_catalog().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                let mut machine = Machine::new(catalog, 4, 3).unwrap();
                machine.insert_rotors(&["B", "I", "II", "III"]).unwrap();
                machine.convert("AAAAA").unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "BDZGO");
    }
}

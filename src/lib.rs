//! Rotor cipher machine engine.
//!
//! rotorcrypt simulates Enigma-style rotor machines: a stack of rotating
//! substitution rotors, a reflector and a plugboard. The substitution
//! changes after every character because the rotors step mechanically,
//! including the historical double-stepping anomaly.
//!
//! # Architecture
//!
//! ```text
//! Alphabet      (ordered characters <-> dense indices)
//!     ↑
//! Permutation   (cycle notation -> precomputed forward/backward tables)
//!     ↑
//! Rotor         (wiring + setting + ring; reflector / fixed / moving)
//!     ↑ registered by name
//! RotorCatalog  (shared, immutable)
//!     ↑ mounted copies
//! Machine       (stepping + plugboard -> rotors -> reflector -> rotors -> plugboard)
//! ```
//!
//! # Examples
//!
//! Encrypt with a historical Enigma I and decrypt by resetting the rotors:
//!
//! ```
//! use rotorcrypt::{presets, MachineSettings};
//!
//! let mut machine = presets::enigma_i().build_machine().unwrap();
//! let settings = MachineSettings {
//!     rotors: vec!["B".into(), "I".into(), "II".into(), "III".into()],
//!     positions: "AAA".into(),
//!     rings: None,
//!     plugboard: None,
//! };
//! machine.configure(&settings).unwrap();
//!
//! let cipher = machine.convert("AAAAA").unwrap();
//! assert_eq!(cipher, "BDZGO");
//!
//! machine.reset();
//! assert_eq!(machine.convert(&cipher).unwrap(), "AAAAA");
//! ```
//!
//! Build a custom machine over any alphabet:
//!
//! ```
//! use rotorcrypt::{MachineConfig, MachineSettings, RotorKindSpec, RotorSpec, Topology};
//!
//! let config = MachineConfig {
//!     alphabet: "ABCDEF".into(),
//!     topology: Topology { num_rotors: 3, pawls: 2 },
//!     rotors: vec![
//!         RotorSpec::new("R", RotorKindSpec::Reflector, "(AF) (BE) (CD)", ""),
//!         RotorSpec::new("S", RotorKindSpec::Moving, "(ABC) (DEF)", "C"),
//!         RotorSpec::new("F", RotorKindSpec::Moving, "(AD) (BCEF)", "E"),
//!     ],
//! };
//! let mut machine = config.build_machine().unwrap();
//! machine
//!     .configure(&MachineSettings {
//!         rotors: vec!["R".into(), "S".into(), "F".into()],
//!         positions: "AD".into(),
//!         rings: None,
//!         plugboard: Some("(AB)".into()),
//!     })
//!     .unwrap();
//! let cipher = machine.convert("FACADE").unwrap();
//!
//! machine.reset();
//! assert_eq!(machine.convert(&cipher).unwrap(), "FACADE");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod presets;

mod alphabet;
mod catalog;
mod config;
mod machine;
mod permutation;
mod rotor;
pub mod stepping;

pub use alphabet::{Alphabet, UPPERCASE_LATIN};
pub use catalog::{RotorCatalog, RotorId};
pub use config::{MachineConfig, MachineSettings, RotorKindSpec, RotorSpec, Topology};
pub use error::RotorCryptError;
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};

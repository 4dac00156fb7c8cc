//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
///
/// Every error is raised before any state is mutated, so a failed call
/// leaves the machine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// Alphabet is empty, repeats a character, or uses a reserved character.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
    /// Slot count, pawl count or catalog contents cannot form a machine.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),
    /// Two rotors share the same name.
    #[error("Duplicate rotor name '{0}'")]
    DuplicateRotorName(String),
    /// A configuration names a rotor absent from the catalog.
    #[error("Unknown rotor name '{0}'")]
    UnknownRotorName(String),
    /// Number of inserted rotors differs from the number of slots.
    #[error("Expected {expected} rotors, found {found}")]
    SlotCountMismatch { expected: usize, found: usize },
    /// Slot 0 does not hold a reflector.
    #[error("Rotor '{0}' in slot 0 is not a reflector")]
    MissingReflector(String),
    /// A reflector was placed in a slot other than 0.
    #[error("Reflector '{name}' cannot occupy slot {slot}")]
    MisplacedReflector { name: String, slot: usize },
    /// Settings or ring string length differs from the number of non-reflector slots.
    #[error("Expected {expected} setting characters, found {found}")]
    SettingLengthMismatch { expected: usize, found: usize },
    /// Character is not part of the alphabet.
    #[error("Character '{0}' is not in the alphabet")]
    UnknownCharacter(char),
    /// Index lies outside `0..size`.
    #[error("Index {index} is out of range for alphabet of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// Cycle notation could not be turned into a permutation.
    #[error("Malformed cycle specification: {0}")]
    MalformedCycleSpec(String),
}

//! Configuration descriptors for catalogs, topologies and machine settings.
//!
//! These are plain serde types: a host may load them from JSON, TOML or any
//! other serde format and hand them to [`MachineConfig::build_machine`] and
//! [`Machine::configure`]. All validation happens when they are turned into
//! live objects.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::catalog::RotorCatalog;
use crate::error::RotorCryptError;
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// Kind of rotor described by a [`RotorSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotorKindSpec {
    Reflector,
    Fixed,
    Moving,
}

/// Description of one catalog rotor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    pub name: String,
    pub kind: RotorKindSpec,
    /// Wiring in cycle notation.
    pub wiring: String,
    /// Notch characters. Only moving rotors use them.
    #[serde(default)]
    pub notches: String,
}

impl RotorSpec {
    /// Shorthand constructor used by the presets and tests.
    pub fn new(name: &str, kind: RotorKindSpec, wiring: &str, notches: &str) -> Self {
        RotorSpec {
            name: name.to_string(),
            kind,
            wiring: wiring.to_string(),
            notches: notches.to_string(),
        }
    }

    /// Builds the rotor over `alphabet`.
    ///
    /// # Errors
    /// - [`RotorCryptError::MalformedCycleSpec`] if the wiring is invalid.
    /// - [`RotorCryptError::UnknownCharacter`] if a notch of a moving rotor
    ///   is not in the alphabet.
    pub fn build(&self, alphabet: &Arc<Alphabet>) -> Result<Rotor, RotorCryptError> {
        let wiring = Permutation::new(&self.wiring, Arc::clone(alphabet))?;
        match self.kind {
            RotorKindSpec::Reflector => Ok(Rotor::reflector(&self.name, wiring)),
            RotorKindSpec::Fixed => Ok(Rotor::fixed(&self.name, wiring)),
            RotorKindSpec::Moving => Rotor::moving(&self.name, wiring, &self.notches),
        }
    }
}

/// Slot and pawl counts of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub num_rotors: usize,
    pub pawls: usize,
}

/// Everything needed to describe a machine model: its alphabet, its
/// topology and the rotors available to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub alphabet: String,
    pub topology: Topology,
    pub rotors: Vec<RotorSpec>,
}

impl MachineConfig {
    /// Builds the rotor catalog.
    ///
    /// # Errors
    /// Any alphabet, wiring, notch or catalog error.
    pub fn build_catalog(&self) -> Result<Arc<RotorCatalog>, RotorCryptError> {
        let alphabet = Arc::new(Alphabet::new(&self.alphabet)?);
        let rotors = self
            .rotors
            .iter()
            .map(|spec| spec.build(&alphabet))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Arc::new(RotorCatalog::new(alphabet, rotors)?))
    }

    /// Builds an unconfigured machine with this model's catalog and topology.
    ///
    /// # Errors
    /// Any error of [`build_catalog`](Self::build_catalog) or
    /// [`Machine::new`].
    pub fn build_machine(&self) -> Result<Machine, RotorCryptError> {
        let catalog = self.build_catalog()?;
        Machine::new(catalog, self.topology.num_rotors, self.topology.pawls)
    }
}

/// Per-message machine settings: rotor order, window letters, rings and plugboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Rotor names, reflector first.
    pub rotors: Vec<String>,
    /// Window letters of the non-reflector slots, leftmost first.
    pub positions: String,
    /// Ring settings, same layout as `positions`. Defaults to all first letters.
    #[serde(default)]
    pub rings: Option<String>,
    /// Plugboard in cycle notation.
    #[serde(default)]
    pub plugboard: Option<String>,
}

//! RotorCatalog: name-keyed store of every rotor a machine may use.
//!
//! Rotors live in a contiguous `Vec` and are addressed by [`RotorId`].
//! The catalog is immutable once built; machines mount independent copies
//! of its rotors, so one catalog can back any number of machines.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::RotorCryptError;
use crate::rotor::Rotor;

/// Index of a rotor within a [`RotorCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorId(pub usize);

/// Immutable collection of uniquely named rotors over one alphabet.
#[derive(Debug, Clone)]
pub struct RotorCatalog {
    alphabet: Arc<Alphabet>,
    rotors: Vec<Rotor>,
    by_name: HashMap<String, RotorId>,
}

impl RotorCatalog {
    /// Builds a catalog from `rotors`.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidTopology`] if `rotors` is empty.
    /// - [`RotorCryptError::DuplicateRotorName`] if two rotors share a name.
    /// - [`RotorCryptError::InvalidAlphabet`] if a rotor is wired over a
    ///   different alphabet.
    pub fn new<I>(alphabet: Arc<Alphabet>, rotors: I) -> Result<Self, RotorCryptError>
    where
        I: IntoIterator<Item = Rotor>,
    {
        let rotors: Vec<Rotor> = rotors.into_iter().collect();
        if rotors.is_empty() {
            return Err(RotorCryptError::InvalidTopology(
                "rotor catalog is empty".to_string(),
            ));
        }

        let mut by_name = HashMap::with_capacity(rotors.len());
        for (i, rotor) in rotors.iter().enumerate() {
            if !Arc::ptr_eq(rotor.alphabet(), &alphabet) && **rotor.alphabet() != *alphabet {
                return Err(RotorCryptError::InvalidAlphabet(format!(
                    "rotor '{}' is wired over a different alphabet",
                    rotor.name()
                )));
            }
            if by_name.insert(rotor.name().to_string(), RotorId(i)).is_some() {
                return Err(RotorCryptError::DuplicateRotorName(rotor.name().to_string()));
            }
        }

        debug!(
            rotors = rotors.len(),
            alphabet_size = alphabet.size(),
            "rotor catalog built"
        );
        Ok(RotorCatalog {
            alphabet,
            rotors,
            by_name,
        })
    }

    /// Returns the shared alphabet.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Returns the number of rotors.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Always false for a successfully built catalog.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Looks up the id of the rotor named `name`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownRotorName`] if no rotor has that name.
    pub fn id(&self, name: &str) -> Result<RotorId, RotorCryptError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RotorCryptError::UnknownRotorName(name.to_string()))
    }

    /// Returns the rotor with the given id.
    ///
    /// # Panics
    /// Panics if `id` did not come from this catalog.
    pub fn rotor(&self, id: RotorId) -> &Rotor {
        &self.rotors[id.0]
    }

    /// Returns the rotor named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Rotor> {
        self.by_name.get(name).map(|&id| self.rotor(id))
    }

    /// Returns a fresh copy of `name` at setting 0 and ring 0, ready to be
    /// placed in a machine slot.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownRotorName`] if no rotor has that name.
    pub fn mount(&self, name: &str) -> Result<Rotor, RotorCryptError> {
        let id = self.id(name)?;
        let mut rotor = self.rotor(id).clone();
        rotor.set_index(0)?;
        rotor.set_ring_index(0)?;
        Ok(rotor)
    }

    /// Iterates over the rotor names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rotors.iter().map(Rotor::name)
    }
}

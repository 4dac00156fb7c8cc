//! Rotor: wired substitution unit with a rotational setting.
//!
//! A single concrete type covers the three historical variants. The
//! [`RotorKind`] tag decides whether the rotor rotates, has notches, or
//! reflects; the wiring itself is an immutable [`Permutation`] shared
//! through an `Arc`, so mounting a rotor in a machine copies only its
//! setting state.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::RotorCryptError;
use crate::permutation::Permutation;

/// Capability set of a rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Non-rotating rotor traversed once per character, at slot 0.
    Reflector,
    /// Non-rotating rotor in the signal path (e.g. the M4 Beta/Gamma wheels).
    Fixed,
    /// Rotating rotor with the alphabet indices of its notches.
    Moving { notches: Vec<usize> },
}

/// A rotor with its wiring and current rotational state.
///
/// `setting` is the letter visible in the machine window. `ring` is the
/// ring setting (Ringstellung) which shifts the wiring relative to the
/// window letters and notches; it defaults to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    kind: RotorKind,
    permutation: Arc<Permutation>,
    setting: usize,
    ring: usize,
}

impl Rotor {
    /// Creates a reflector named `name` with wiring `permutation`.
    pub fn reflector(name: &str, permutation: Permutation) -> Self {
        Self::build(name, RotorKind::Reflector, permutation)
    }

    /// Creates a non-rotating rotor named `name`.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Self::build(name, RotorKind::Fixed, permutation)
    }

    /// Creates a rotating rotor whose notches sit at the characters of `notches`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownCharacter`] if a notch is not in
    /// the permutation's alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rotorcrypt::{Alphabet, Permutation, Rotor};
    ///
    /// let alpha = Arc::new(Alphabet::default());
    /// let wiring = Permutation::new("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", alpha).unwrap();
    /// let mut rotor = Rotor::moving("I", wiring, "Q").unwrap();
    /// rotor.set('Q').unwrap();
    /// assert!(rotor.at_notch());
    /// ```
    pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Self, RotorCryptError> {
        let alphabet = permutation.alphabet();
        let mut indices = Vec::with_capacity(notches.len());
        for c in notches.chars() {
            let index = alphabet.to_index(c)?;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
        Ok(Self::build(
            name,
            RotorKind::Moving { notches: indices },
            permutation,
        ))
    }

    fn build(name: &str, kind: RotorKind, permutation: Permutation) -> Self {
        Rotor {
            name: name.to_string(),
            kind,
            permutation: Arc::new(permutation),
            setting: 0,
            ring: 0,
        }
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the capability tag.
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// Returns the wiring.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the alphabet of the wiring.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        self.permutation.alphabet()
    }

    /// Returns the alphabet size.
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// Returns true if the rotor can advance.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// Returns true if the rotor is a reflector.
    pub fn reflecting(&self) -> bool {
        matches!(self.kind, RotorKind::Reflector)
    }

    /// Returns the current setting as an alphabet index.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Returns the ring setting as an alphabet index.
    pub fn ring(&self) -> usize {
        self.ring
    }

    /// Sets the rotor to the alphabet index `posn`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::IndexOutOfRange`] unless `posn < size()`.
    pub fn set_index(&mut self, posn: usize) -> Result<(), RotorCryptError> {
        self.setting = self.checked_index(posn)?;
        Ok(())
    }

    /// Sets the rotor so that character `c` shows in the window.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownCharacter`] if `c` is not in the alphabet.
    pub fn set(&mut self, c: char) -> Result<(), RotorCryptError> {
        self.setting = self.alphabet().to_index(c)?;
        Ok(())
    }

    /// Sets the ring setting to the alphabet index `posn`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::IndexOutOfRange`] unless `posn < size()`.
    pub fn set_ring_index(&mut self, posn: usize) -> Result<(), RotorCryptError> {
        self.ring = self.checked_index(posn)?;
        Ok(())
    }

    /// Sets the ring setting to character `c`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownCharacter`] if `c` is not in the alphabet.
    pub fn set_ring(&mut self, c: char) -> Result<(), RotorCryptError> {
        self.ring = self.alphabet().to_index(c)?;
        Ok(())
    }

    fn checked_index(&self, posn: usize) -> Result<usize, RotorCryptError> {
        if posn < self.size() {
            Ok(posn)
        } else {
            Err(RotorCryptError::IndexOutOfRange {
                index: posn,
                size: self.size(),
            })
        }
    }

    /// Advances a rotating rotor by one position. Other kinds stay put.
    pub fn advance(&mut self) {
        if self.rotates() {
            self.setting = (self.setting + 1) % self.size();
        }
    }

    /// Returns true if the window letter is one of the rotor's notches.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            RotorKind::Reflector | RotorKind::Fixed => false,
        }
    }

    /// Contact on the wiring core that lines up with entry contact `p`.
    fn core_contact(&self, p: usize) -> usize {
        let n = self.size();
        (p % n + self.setting + n - self.ring) % n
    }

    /// Exit contact that lines up with core contact `c`.
    fn exit_contact(&self, c: usize) -> usize {
        let n = self.size();
        (c % n + self.ring + n - self.setting) % n
    }

    /// Converts a signal entering on the right-hand contacts (travelling
    /// towards the reflector). `p` is reduced modulo the alphabet size.
    pub fn convert_forward(&self, p: usize) -> usize {
        self.exit_contact(self.permutation.permute(self.core_contact(p)))
    }

    /// Converts a signal entering on the left-hand contacts (travelling
    /// back from the reflector). `e` is reduced modulo the alphabet size.
    pub fn convert_backward(&self, e: usize) -> usize {
        self.exit_contact(self.permutation.invert(self.core_contact(e)))
    }

    /// Moves the window to `posn` without a range check. Callers pass an
    /// index that was validated when it was stored.
    pub(crate) fn restore_setting(&mut self, posn: usize) {
        self.setting = posn % self.size();
    }
}

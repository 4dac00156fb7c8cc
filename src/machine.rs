//! Machine: rotor stack, reflector and plugboard composed into one cipher.
//!
//! A machine has `num_rotors` slots. Slot 0 holds the reflector and the
//! rightmost slot holds the fast rotor driven by every keystroke. For each
//! character the machine first steps its rotors, then sends the signal
//! through the plugboard, right to left through the rotors, off the
//! reflector, back left to right, and out through the plugboard again.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::catalog::RotorCatalog;
use crate::config::MachineSettings;
use crate::error::RotorCryptError;
use crate::permutation::Permutation;
use crate::rotor::Rotor;
use crate::stepping::advancing_slots;

/// A configurable rotor cipher machine.
///
/// The catalog is shared; the mounted rotors (and their settings) belong to
/// this machine alone, so independent machines never observe each other's
/// state.
///
/// # Examples
///
/// ```
/// use rotorcrypt::presets;
///
/// let config = presets::enigma_i();
/// let mut machine = config.build_machine().unwrap();
/// machine.insert_rotors(&["B", "I", "II", "III"]).unwrap();
/// machine.set_positions("AAA").unwrap();
///
/// assert_eq!(machine.convert("AAAAA").unwrap(), "BDZGO");
///
/// machine.reset();
/// assert_eq!(machine.convert("BDZGO").unwrap(), "AAAAA");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    catalog: Arc<RotorCatalog>,
    num_rotors: usize,
    pawls: usize,
    rotors: Vec<Rotor>,
    initial_positions: Vec<usize>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// Creates a machine with `num_rotors` slots and `pawls` pawls, drawing
    /// rotors from `catalog`.
    ///
    /// No rotors are inserted yet; call [`insert_rotors`](Self::insert_rotors)
    /// or [`configure`](Self::configure) before converting.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidTopology`] if `num_rotors <= 1`,
    /// `pawls >= num_rotors`, or the catalog is empty.
    pub fn new(
        catalog: Arc<RotorCatalog>,
        num_rotors: usize,
        pawls: usize,
    ) -> Result<Self, RotorCryptError> {
        if num_rotors <= 1 {
            return Err(RotorCryptError::InvalidTopology(format!(
                "need at least 2 rotor slots, got {}",
                num_rotors
            )));
        }
        if pawls >= num_rotors {
            return Err(RotorCryptError::InvalidTopology(format!(
                "pawls must be below {}, got {}",
                num_rotors, pawls
            )));
        }
        if catalog.is_empty() {
            return Err(RotorCryptError::InvalidTopology(
                "rotor catalog is empty".to_string(),
            ));
        }

        Ok(Machine {
            catalog,
            num_rotors,
            pawls,
            rotors: Vec::with_capacity(num_rotors),
            initial_positions: Vec::new(),
            plugboard: None,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls.
    pub fn num_pawls(&self) -> usize {
        self.pawls
    }

    /// Returns the alphabet shared by every rotor.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        self.catalog.alphabet()
    }

    /// Returns the catalog this machine draws rotors from.
    pub fn catalog(&self) -> &Arc<RotorCatalog> {
        &self.catalog
    }

    /// Returns the mounted rotors, reflector first. Empty until rotors are inserted.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Returns the names of the mounted rotors, reflector first.
    pub fn rotor_names(&self) -> Vec<&str> {
        self.rotors.iter().map(Rotor::name).collect()
    }

    /// Returns the plugboard, if one is installed.
    pub fn plugboard(&self) -> Option<&Permutation> {
        self.plugboard.as_ref()
    }

    /// Mounts the rotors named in `names` (reflector first), all at setting 0.
    ///
    /// # Errors
    /// - [`RotorCryptError::SlotCountMismatch`] if `names.len() != num_rotors()`.
    /// - [`RotorCryptError::UnknownRotorName`] if a name is not in the catalog.
    /// - [`RotorCryptError::DuplicateRotorName`] if a name is used twice.
    /// - [`RotorCryptError::MissingReflector`] if slot 0 is not a reflector.
    /// - [`RotorCryptError::MisplacedReflector`] if a reflector is in another slot.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), RotorCryptError> {
        if names.len() != self.num_rotors {
            return Err(RotorCryptError::SlotCountMismatch {
                expected: self.num_rotors,
                found: names.len(),
            });
        }

        let mut mounted: Vec<Rotor> = Vec::with_capacity(self.num_rotors);
        for (slot, name) in names.iter().enumerate() {
            let name: &str = name.as_ref();
            let rotor = self.catalog.mount(name)?;
            if mounted.iter().any(|r| r.name() == name) {
                return Err(RotorCryptError::DuplicateRotorName(name.to_string()));
            }
            match (slot, rotor.reflecting()) {
                (0, false) => return Err(RotorCryptError::MissingReflector(name.to_string())),
                (0, true) | (_, false) => {}
                (_, true) => {
                    return Err(RotorCryptError::MisplacedReflector {
                        name: name.to_string(),
                        slot,
                    })
                }
            }
            mounted.push(rotor);
        }

        self.rotors = mounted;
        self.initial_positions = vec![0; self.num_rotors - 1];
        debug!(rotors = ?self.rotor_names(), "rotors inserted");
        Ok(())
    }

    /// Sets the window letters of the non-reflector slots, leftmost first.
    ///
    /// The positions are remembered so that [`reset`](Self::reset) can
    /// return to them.
    ///
    /// # Errors
    /// - [`RotorCryptError::SlotCountMismatch`] if no rotors are inserted.
    /// - [`RotorCryptError::SettingLengthMismatch`] if `setting` does not
    ///   have `num_rotors() - 1` characters.
    /// - [`RotorCryptError::UnknownCharacter`] for a character outside the alphabet.
    pub fn set_positions(&mut self, setting: &str) -> Result<(), RotorCryptError> {
        let positions = self.parse_slot_string(setting)?;
        for (rotor, &posn) in self.rotors[1..].iter_mut().zip(&positions) {
            rotor.set_index(posn)?;
        }
        debug!(positions = setting, "rotor positions set");
        self.initial_positions = positions;
        Ok(())
    }

    /// Sets the ring settings of the non-reflector slots, leftmost first.
    ///
    /// # Errors
    /// Same as [`set_positions`](Self::set_positions).
    pub fn set_rings(&mut self, rings: &str) -> Result<(), RotorCryptError> {
        let rings_idx = self.parse_slot_string(rings)?;
        for (rotor, &ring) in self.rotors[1..].iter_mut().zip(&rings_idx) {
            rotor.set_ring_index(ring)?;
        }
        debug!(rings, "ring settings set");
        Ok(())
    }

    /// Converts a per-slot string into alphabet indices without touching state.
    fn parse_slot_string(&self, setting: &str) -> Result<Vec<usize>, RotorCryptError> {
        if self.rotors.len() != self.num_rotors {
            return Err(RotorCryptError::SlotCountMismatch {
                expected: self.num_rotors,
                found: self.rotors.len(),
            });
        }
        let expected = self.num_rotors - 1;
        let found = setting.chars().count();
        if found != expected {
            return Err(RotorCryptError::SettingLengthMismatch { expected, found });
        }
        let alphabet = self.alphabet();
        setting.chars().map(|c| alphabet.to_index(c)).collect()
    }

    /// Installs `plugboard`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidAlphabet`] if the plugboard is
    /// built over a different alphabet than the rotors.
    pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<(), RotorCryptError> {
        if **plugboard.alphabet() != **self.alphabet() {
            return Err(RotorCryptError::InvalidAlphabet(
                "plugboard alphabet differs from rotor alphabet".to_string(),
            ));
        }
        debug!(derangement = plugboard.derangement(), "plugboard installed");
        self.plugboard = Some(plugboard);
        Ok(())
    }

    /// Parses `cycles` over the machine alphabet and installs it as the plugboard.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::MalformedCycleSpec`] if `cycles` is invalid.
    pub fn set_plugboard_cycles(&mut self, cycles: &str) -> Result<(), RotorCryptError> {
        let plugboard = Permutation::new(cycles, Arc::clone(self.alphabet()))?;
        self.set_plugboard(plugboard)
    }

    /// Removes the plugboard; the machine then behaves as if it were the identity.
    pub fn clear_plugboard(&mut self) {
        self.plugboard = None;
    }

    /// Applies a complete configuration in one step.
    ///
    /// Everything is validated before the machine changes: on error the
    /// machine keeps its previous configuration.
    ///
    /// # Errors
    /// Any error of [`insert_rotors`](Self::insert_rotors),
    /// [`set_positions`](Self::set_positions), [`set_rings`](Self::set_rings)
    /// or [`set_plugboard_cycles`](Self::set_plugboard_cycles).
    pub fn configure(&mut self, settings: &MachineSettings) -> Result<(), RotorCryptError> {
        let mut staged = Machine {
            catalog: Arc::clone(&self.catalog),
            num_rotors: self.num_rotors,
            pawls: self.pawls,
            rotors: Vec::with_capacity(self.num_rotors),
            initial_positions: Vec::new(),
            plugboard: None,
        };
        staged.insert_rotors(&settings.rotors)?;
        if let Some(rings) = &settings.rings {
            staged.set_rings(rings)?;
        }
        staged.set_positions(&settings.positions)?;
        if let Some(cycles) = &settings.plugboard {
            staged.set_plugboard_cycles(cycles)?;
        }
        *self = staged;
        Ok(())
    }

    /// Returns the current window letters of the non-reflector slots.
    pub fn positions(&self) -> String {
        let alphabet = self.alphabet();
        self.rotors
            .iter()
            .skip(1)
            .filter_map(|r| alphabet.to_char(r.setting()).ok())
            .collect()
    }

    /// Returns every rotor to the positions last given to
    /// [`set_positions`](Self::set_positions) (or 0 after insertion).
    pub fn reset(&mut self) {
        let positions = self.initial_positions.iter();
        for (rotor, &posn) in self.rotors.iter_mut().skip(1).zip(positions) {
            rotor.restore_setting(posn);
        }
    }

    /// Steps the rotors, then converts the alphabet index `c`.
    ///
    /// # Errors
    /// - [`RotorCryptError::SlotCountMismatch`] if no rotors are inserted.
    /// - [`RotorCryptError::IndexOutOfRange`] if `c` is not a valid index.
    pub fn convert_index(&mut self, c: usize) -> Result<usize, RotorCryptError> {
        self.ensure_ready()?;
        let size = self.alphabet().size();
        if c >= size {
            return Err(RotorCryptError::IndexOutOfRange { index: c, size });
        }
        Ok(self.step_and_convert(c))
    }

    /// Steps the rotors, then converts character `c`.
    ///
    /// # Errors
    /// - [`RotorCryptError::SlotCountMismatch`] if no rotors are inserted.
    /// - [`RotorCryptError::UnknownCharacter`] if `c` is not in the alphabet.
    pub fn convert_char(&mut self, c: char) -> Result<char, RotorCryptError> {
        self.ensure_ready()?;
        let index = self.alphabet().to_index(c)?;
        let out = self.step_and_convert(index);
        self.alphabet().to_char(out)
    }

    /// Encodes or decodes `msg`, ignoring whitespace.
    ///
    /// Every character is checked before the first rotor moves, so an
    /// invalid message leaves the machine untouched.
    ///
    /// # Errors
    /// - [`RotorCryptError::SlotCountMismatch`] if no rotors are inserted.
    /// - [`RotorCryptError::UnknownCharacter`] for a character outside the alphabet.
    pub fn convert(&mut self, msg: &str) -> Result<String, RotorCryptError> {
        self.ensure_ready()?;
        let alphabet = Arc::clone(self.alphabet());
        let input: Vec<usize> = msg
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| alphabet.to_index(c))
            .collect::<Result<_, _>>()?;

        debug!(chars = input.len(), "converting message");
        input
            .into_iter()
            .map(|c| alphabet.to_char(self.step_and_convert(c)))
            .collect()
    }

    fn ensure_ready(&self) -> Result<(), RotorCryptError> {
        if self.rotors.len() == self.num_rotors {
            Ok(())
        } else {
            Err(RotorCryptError::SlotCountMismatch {
                expected: self.num_rotors,
                found: self.rotors.len(),
            })
        }
    }

    /// Advances the rotors, then runs `c` through the electrical path.
    fn step_and_convert(&mut self, c: usize) -> usize {
        let advancing = advancing_slots(&self.rotors, self.pawls);
        for &slot in &advancing {
            self.rotors[slot].advance();
        }
        trace!(advanced = ?advancing, "rotors stepped");

        let mut x = match &self.plugboard {
            Some(plugboard) => plugboard.permute(c),
            None => c,
        };
        for rotor in self.rotors.iter().rev() {
            x = rotor.convert_forward(x);
        }
        for rotor in self.rotors.iter().skip(1) {
            x = rotor.convert_backward(x);
        }
        match &self.plugboard {
            Some(plugboard) => plugboard.invert(x),
            None => x,
        }
    }
}

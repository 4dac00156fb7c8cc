//! Alphabet: ordered character set addressed by dense indices.
//!
//! Every permutation and rotor in a machine shares a single alphabet.
//! Characters are mapped to indices `0..size` in the order they were given.

use std::collections::HashMap;

use crate::error::RotorCryptError;

/// Characters that cannot belong to an alphabet because cycle notation
/// reserves them.
const RESERVED: [char; 2] = ['(', ')'];

/// The 26 upper-case Latin letters used by the historical machines.
pub const UPPERCASE_LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bijection between an ordered set of distinct characters and `0..size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    indices: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates an alphabet from the characters of `chars`, in order.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidAlphabet`] if `chars` is empty,
    /// repeats a character, or contains whitespace or a parenthesis.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Alphabet;
    ///
    /// let alpha = Alphabet::new("ABCD").unwrap();
    /// assert_eq!(alpha.size(), 4);
    /// assert!(Alphabet::new("ABCA").is_err());
    /// ```
    pub fn new(chars: &str) -> Result<Self, RotorCryptError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(RotorCryptError::InvalidAlphabet(
                "alphabet must contain at least one character".to_string(),
            ));
        }

        let mut indices = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if c.is_whitespace() || RESERVED.contains(&c) {
                return Err(RotorCryptError::InvalidAlphabet(format!(
                    "reserved character {:?}",
                    c
                )));
            }
            if indices.insert(c, i).is_some() {
                return Err(RotorCryptError::InvalidAlphabet(format!(
                    "duplicate character '{}'",
                    c
                )));
            }
        }

        Ok(Alphabet { chars, indices })
    }

    /// Returns the number of characters.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.indices.contains_key(&c)
    }

    /// Returns the index of `c`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownCharacter`] if `c` is absent.
    pub fn to_index(&self, c: char) -> Result<usize, RotorCryptError> {
        self.indices
            .get(&c)
            .copied()
            .ok_or(RotorCryptError::UnknownCharacter(c))
    }

    /// Returns the character at `index`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::IndexOutOfRange`] unless `index < size()`.
    pub fn to_char(&self, index: usize) -> Result<char, RotorCryptError> {
        self.chars
            .get(index)
            .copied()
            .ok_or(RotorCryptError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Iterates over the characters in index order.
    pub fn chars(&self) -> impl Iterator<Item = char> + Clone + '_ {
        self.chars.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            chars: UPPERCASE_LATIN.chars().collect(),
            indices: UPPERCASE_LATIN.chars().enumerate().map(|(i, c)| (c, i)).collect(),
        }
    }
}

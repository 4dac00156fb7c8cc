//! Permutation: substitution over alphabet indices built from cycle notation.
//!
//! A cycle string such as `"(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"`
//! is parsed once into a pair of lookup tables, `forward` and `backward`,
//! so every later lookup is a single array access.

use std::fmt;
use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::RotorCryptError;

/// A bijection over `0..alphabet.size()` with a precomputed inverse.
///
/// Characters that do not appear in any cycle map to themselves.
#[derive(Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Arc<Alphabet>,
    forward: Vec<usize>,
    backward: Vec<usize>,
}

impl Permutation {
    /// Parses `cycles` over `alphabet`.
    ///
    /// Whitespace is ignored. Each parenthesized group `c0 c1 .. ck-1`
    /// maps `c0 -> c1 -> .. -> ck-1 -> c0`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::MalformedCycleSpec`] on unbalanced or nested
    /// parentheses, empty groups, characters outside any group, characters
    /// outside the alphabet, or a character used more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rotorcrypt::{Alphabet, Permutation};
    ///
    /// let alpha = Arc::new(Alphabet::new("ABCD").unwrap());
    /// let perm = Permutation::new("(BACD)", alpha).unwrap();
    /// assert_eq!(perm.permute_char('B'), Ok('A'));
    /// assert_eq!(perm.invert_char('B'), Ok('D'));
    ///
    /// let alpha = Arc::new(Alphabet::new("ABCD").unwrap());
    /// assert!(Permutation::new("(AB", alpha).is_err());
    /// ```
    pub fn new(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Self, RotorCryptError> {
        let size = alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut seen = vec![false; size];
        let mut group: Option<Vec<usize>> = None;

        for c in cycles.chars().filter(|c| !c.is_whitespace()) {
            match (c, group.as_mut()) {
                ('(', None) => group = Some(Vec::new()),
                ('(', Some(_)) => return Err(malformed("nested '('")),
                (')', None) => return Err(malformed("unbalanced ')'")),
                (')', Some(members)) => {
                    if members.is_empty() {
                        return Err(malformed("empty cycle '()'"));
                    }
                    for (k, &from) in members.iter().enumerate() {
                        forward[from] = members[(k + 1) % members.len()];
                    }
                    group = None;
                }
                (_, None) => {
                    return Err(malformed(&format!(
                        "character '{}' outside of a cycle",
                        c
                    )))
                }
                (_, Some(members)) => {
                    let index = alphabet.to_index(c).map_err(|_| {
                        malformed(&format!("character '{}' is not in the alphabet", c))
                    })?;
                    if seen[index] {
                        return Err(malformed(&format!(
                            "character '{}' appears more than once",
                            c
                        )));
                    }
                    seen[index] = true;
                    members.push(index);
                }
            }
        }
        if group.is_some() {
            return Err(malformed("unbalanced '('"));
        }

        let mut backward = vec![0usize; size];
        for (from, &to) in forward.iter().enumerate() {
            backward[to] = from;
        }

        Ok(Permutation {
            alphabet,
            forward,
            backward,
        })
    }

    /// Returns the identity permutation over `alphabet`.
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let forward: Vec<usize> = (0..alphabet.size()).collect();
        let backward = forward.clone();
        Permutation {
            alphabet,
            forward,
            backward,
        }
    }

    /// Returns the size of the alphabet this permutation acts on.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Returns `p` modulo the alphabet size, always in `[0, size)`.
    pub fn wrap(&self, p: isize) -> usize {
        p.rem_euclid(self.size() as isize) as usize
    }

    /// Applies the permutation to `p` (reduced modulo the size first).
    pub fn permute(&self, p: usize) -> usize {
        self.forward[p % self.size()]
    }

    /// Applies the inverse permutation to `c` (reduced modulo the size first).
    pub fn invert(&self, c: usize) -> usize {
        self.backward[c % self.size()]
    }

    /// Character form of [`permute`](Self::permute).
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownCharacter`] if `p` is not in the alphabet.
    pub fn permute_char(&self, p: char) -> Result<char, RotorCryptError> {
        let index = self.alphabet.to_index(p)?;
        self.alphabet.to_char(self.forward[index])
    }

    /// Character form of [`invert`](Self::invert).
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnknownCharacter`] if `c` is not in the alphabet.
    pub fn invert_char(&self, c: char) -> Result<char, RotorCryptError> {
        let index = self.alphabet.to_index(c)?;
        self.alphabet.to_char(self.backward[index])
    }

    /// Returns true if no index maps to itself.
    pub fn derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &to)| i != to)
    }

    /// Returns the alphabet this permutation acts on.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }
}

impl fmt::Debug for Permutation {
    /// Renders the mapping as the image of the alphabet, e.g. `EKMFLGDQV...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<char> = self.alphabet.chars().collect();
        let image: String = self.forward.iter().map(|&i| chars[i]).collect();
        f.debug_tuple("Permutation").field(&image).finish()
    }
}

fn malformed(reason: &str) -> RotorCryptError {
    RotorCryptError::MalformedCycleSpec(reason.to_string())
}

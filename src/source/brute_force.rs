//! Combinatorial candidate generation over an alphabet.

use crate::error::{Result, SearchError};

/// Enumerates every string over `alphabet` with a length in `min..=max`.
///
/// Shorter strings come first; within one length the order is the ordered
/// Cartesian power of the alphabet (the rightmost position varies fastest).
/// Repeated symbols in the alphabet are enumerated as distinct positions.
#[derive(Debug, Clone)]
pub struct BruteForceSource {
    alphabet: Vec<char>,
    min_length: usize,
    max_length: usize,
    /// Length currently being enumerated
    length: usize,
    /// Odometer over alphabet indices, `None` before the first tuple of `length`
    indices: Option<Vec<usize>>,
    exhausted: bool,
}

impl BruteForceSource {
    /// Longest candidate a generator will produce.
    pub const MAX_LENGTH: i64 = u32::MAX as i64;

    /// Create a generator, rejecting negative, inverted or oversized bounds.
    pub fn new(alphabet: &str, min_length: i64, max_length: i64) -> Result<Self> {
        let in_bounds = |length: i64| (0..=Self::MAX_LENGTH).contains(&length);
        if !in_bounds(min_length) || !in_bounds(max_length) || min_length > max_length {
            return Err(SearchError::InvalidRange {
                min: min_length,
                max: max_length,
            });
        }

        let min_length = min_length as usize;
        let max_length = max_length as usize;

        Ok(Self {
            alphabet: alphabet.chars().collect(),
            min_length,
            max_length,
            length: min_length,
            indices: None,
            exhausted: false,
        })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn render(&self, indices: &[usize]) -> String {
        indices.iter().map(|&i| self.alphabet[i]).collect()
    }

    /// Advance the odometer in place. Returns false once it wraps around.
    fn increment(indices: &mut [usize], radix: usize) -> bool {
        for slot in indices.iter_mut().rev() {
            *slot += 1;
            if *slot < radix {
                return true;
            }
            *slot = 0;
        }
        false
    }
}

impl Iterator for BruteForceSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let radix = self.alphabet.len();

        while !self.exhausted {
            let advanced = match &mut self.indices {
                Some(indices) => Self::increment(indices, radix),
                // An empty alphabet has only the zero-length tuple
                None if radix == 0 && self.length > 0 => {
                    self.exhausted = true;
                    false
                }
                None => {
                    self.indices = Some(vec![0; self.length]);
                    true
                }
            };

            if advanced {
                return self.indices.as_deref().map(|indices| self.render(indices));
            }

            if self.length >= self.max_length {
                self.exhausted = true;
            } else {
                self.length += 1;
                self.indices = None;
            }
        }

        None
    }
}

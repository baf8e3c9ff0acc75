//! Multi-dimensional keys.

use std::fmt;
use std::ops::Deref;


/// Abscissas of a sample in a tensor map, outermost axis first.
///
/// Ordered lexicographically, front to back.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub struct MultiKey {
    keys: Vec<f64>,
}

impl MultiKey {
    pub fn new(keys: Vec<f64>) -> Self {
        Self { keys }
    }

    /// Key with `head` in front of `tail`.
    pub fn nest(head: f64, tail: &MultiKey) -> Self {
        let mut keys = Vec::with_capacity(tail.len() + 1);
        keys.push(head);
        keys.extend_from_slice(&tail.keys);
        Self { keys }
    }

    pub fn front(&self) -> Option<f64> {
        self.keys.first().copied()
    }

    pub fn back(&self) -> Option<f64> {
        self.keys.last().copied()
    }

    /// All but the outermost abscissa.
    pub fn tail(&self) -> MultiKey {
        Self { keys: self.keys.iter().skip(1).copied().collect() }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.keys.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.keys
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.keys
    }
}

impl Deref for MultiKey {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.keys
    }
}

impl From<Vec<f64>> for MultiKey {
    fn from(keys: Vec<f64>) -> Self {
        Self { keys }
    }
}

impl From<&[f64]> for MultiKey {
    fn from(keys: &[f64]) -> Self {
        Self { keys: keys.to_vec() }
    }
}

impl<const N: usize> From<[f64; N]> for MultiKey {
    fn from(keys: [f64; N]) -> Self {
        Self { keys: keys.to_vec() }
    }
}

impl fmt::Display for MultiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, x) in self.keys.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str(")")
    }
}


/// Fixed-length evaluation buffer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Array<const N: usize> {
    values: [f64; N],
}

impl<const N: usize> Default for Array<N> {
    fn default() -> Self {
        Self { values: [0.0; N] }
    }
}

impl<const N: usize> Array<N> {
    pub fn new(values: [f64; N]) -> Self {
        Self { values }
    }

    /// Copies the first `N` values of `key`; missing values are zero.
    pub fn from_key(key: &MultiKey) -> Self {
        let mut values = [0.0; N];
        for (v, k) in values.iter_mut().zip(key.iter()) {
            *v = *k;
        }
        Self { values }
    }

    pub fn set(&mut self, i: usize, x: f64) {
        if let Some(v) = self.values.get_mut(i) {
            *v = x;
        }
    }
}

impl<const N: usize> Deref for Array<N> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl<const N: usize> From<[f64; N]> for Array<N> {
    fn from(values: [f64; N]) -> Self {
        Self { values }
    }
}
